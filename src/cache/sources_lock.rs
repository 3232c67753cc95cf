//! Release metadata cache (sources-lock.json)

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{Asset, AssetKind};
use crate::error::{self, Result};

/// Cached release metadata keyed by asset id
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SourcesCache {
    #[serde(default)]
    pub plugins: BTreeMap<String, Asset>,
    #[serde(default)]
    pub templates: BTreeMap<String, Asset>,
}

impl SourcesCache {
    /// Read the cache; a missing file is an empty cache
    pub fn read_from_disk(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Ok(Self::default());
        }
        let json = fs::read_to_string(path).map_err(error::cache::read_failed)?;
        serde_json::from_str(&json).map_err(error::cache::invalid)
    }

    /// Write the cache as pretty JSON
    pub fn write_to_disk(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(error::cache::write_failed)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(error::cache::invalid)?;
        fs::write(path, json).map_err(error::cache::write_failed)
    }

    fn assets(&self, kind: AssetKind) -> &BTreeMap<String, Asset> {
        match kind {
            AssetKind::Plugin => &self.plugins,
            AssetKind::Template => &self.templates,
        }
    }

    fn assets_mut(&mut self, kind: AssetKind) -> &mut BTreeMap<String, Asset> {
        match kind {
            AssetKind::Plugin => &mut self.plugins,
            AssetKind::Template => &mut self.templates,
        }
    }

    pub fn add(&mut self, asset: Asset, kind: AssetKind) {
        self.assets_mut(kind).insert(asset.id.clone(), asset);
    }

    pub fn get(&self, id: &str, kind: AssetKind) -> Option<&Asset> {
        self.assets(kind).get(id)
    }

    pub fn exists(&self, id: &str, kind: AssetKind) -> bool {
        self.assets(kind).contains_key(id)
    }

    pub fn delete(&mut self, id: &str, kind: AssetKind) -> Option<Asset> {
        self.assets_mut(kind).remove(id)
    }

    pub fn len(&self) -> usize {
        self.plugins.len() + self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AssetVersion;
    use tempfile::TempDir;

    fn asset(id: &str) -> Asset {
        Asset {
            id: id.to_string(),
            owner: "Fraymakers".to_string(),
            repo: "metadata-plugin".to_string(),
            versions: vec![AssetVersion {
                url: "https://example.com/a.zip".to_string(),
                tag: "v1".to_string(),
                changelog: "## Changes".to_string(),
            }],
        }
    }

    #[test]
    fn test_missing_file_is_empty_cache() {
        let temp = TempDir::new().unwrap();
        let cache = SourcesCache::read_from_disk(&temp.path().join("sources-lock.json")).unwrap();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_add_get_delete() {
        let mut cache = SourcesCache::default();
        cache.add(asset("com.fraymakers.FraymakersMetadata"), AssetKind::Plugin);

        assert!(cache.exists("com.fraymakers.FraymakersMetadata", AssetKind::Plugin));
        assert!(!cache.exists("com.fraymakers.FraymakersMetadata", AssetKind::Template));
        assert_eq!(
            cache
                .get("com.fraymakers.FraymakersMetadata", AssetKind::Plugin)
                .map(|a| a.versions.len()),
            Some(1)
        );

        assert!(cache.delete("com.fraymakers.FraymakersMetadata", AssetKind::Plugin).is_some());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_roundtrip_on_disk() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("cache").join("sources-lock.json");

        let mut cache = SourcesCache::default();
        cache.add(asset("stagetemplate"), AssetKind::Template);
        cache.write_to_disk(&path).unwrap();

        let loaded = SourcesCache::read_from_disk(&path).unwrap();
        assert_eq!(loaded, cache);

        let json = std::fs::read_to_string(&path).unwrap();
        assert!(json.contains("\"templates\""));
        assert!(json.contains("\"changelog\": \"## Changes\""));
    }

    #[test]
    fn test_invalid_file_is_invalid_cache() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("sources-lock.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = SourcesCache::read_from_disk(&path).unwrap_err();
        assert!(matches!(err, crate::error::ManagerError::InvalidCache { .. }));
    }

    #[test]
    fn test_len_counts_both_kinds() {
        let mut cache = SourcesCache::default();
        cache.add(asset("a"), AssetKind::Plugin);
        cache.add(asset("a"), AssetKind::Template);
        cache.add(asset("a"), AssetKind::Template);
        assert_eq!(cache.len(), 2);
    }
}
