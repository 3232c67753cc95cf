//! Sources configuration (sources.json)
//!
//! Each entry maps a manifest id to the GitHub repository that publishes it.
//! Within one asset kind, repositories and ids are unique.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{AssetConfig, AssetKind};
use crate::error::{self, ManagerError, Result};
use crate::paths;

/// Sources configuration (sources.json)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SourcesConfig {
    #[serde(default)]
    pub plugins: Vec<AssetConfig>,
    #[serde(default)]
    pub templates: Vec<AssetConfig>,
}

impl SourcesConfig {
    /// The sources every installation starts with
    pub fn default_config() -> Self {
        Self {
            plugins: vec![
                AssetConfig::new(
                    "Fraymakers",
                    "metadata-plugin",
                    "com.fraymakers.FraymakersMetadata",
                ),
                AssetConfig::new(
                    "Fraymakers",
                    "api-types-plugin",
                    "com.fraymakers.FraymakersTypes",
                ),
                AssetConfig::new(
                    "Fraymakers",
                    "content-exporter-plugin",
                    "com.fraymakers.ContentExporter",
                ),
            ],
            templates: vec![
                AssetConfig::new("Fraymakers", "character-template", "charactertemplate"),
                AssetConfig::new("Fraymakers", "assist-template", "assisttemplate"),
                AssetConfig::new("Fraymakers", "stage-template", "stagetemplate"),
                AssetConfig::new("Fraymakers", "music-template", "musictemplate"),
            ],
        }
    }

    /// Parse sources from a JSON string, rejecting duplicate entries
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| error::source::invalid(e.to_string()))?;
        if config.contains_duplicates() {
            return Err(error::source::invalid("Duplicate config entries"));
        }
        for kind in AssetKind::ALL {
            for entry in config.entries(kind) {
                paths::check_id(&entry.id)?;
            }
        }
        Ok(config)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read sources.json
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|e| error::source::read_failed(path, e))?;
        Self::from_json(&json)
    }

    /// Write sources.json
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| error::source::write_failed(path, e))?;
        }
        let json = self.to_json()?;
        fs::write(path, json).map_err(|e| error::source::write_failed(path, e))
    }

    /// Read sources.json, writing the defaults when it is missing or `defaults` is set
    pub fn load_or_default(path: &Path, defaults: bool) -> Result<Self> {
        if path.exists() && !defaults {
            return Self::load(path);
        }
        let config = Self::default_config();
        config.save(path)?;
        Ok(config)
    }

    pub fn entries(&self, kind: AssetKind) -> &[AssetConfig] {
        match kind {
            AssetKind::Plugin => &self.plugins,
            AssetKind::Template => &self.templates,
        }
    }

    fn entries_mut(&mut self, kind: AssetKind) -> &mut Vec<AssetConfig> {
        match kind {
            AssetKind::Plugin => &mut self.plugins,
            AssetKind::Template => &mut self.templates,
        }
    }

    pub fn find(&self, id: &str, kind: AssetKind) -> Option<&AssetConfig> {
        self.entries(kind).iter().find(|entry| entry.id == id)
    }

    pub fn index(&self, id: &str, kind: AssetKind) -> Option<usize> {
        self.entries(kind).iter().position(|entry| entry.id == id)
    }

    /// Whether any kind has two entries sharing a repository or an id
    pub fn contains_duplicates(&self) -> bool {
        AssetKind::ALL.iter().any(|kind| {
            let mut repos = HashSet::new();
            let mut ids = HashSet::new();
            self.entries(*kind).iter().any(|entry| {
                !repos.insert((entry.owner.as_str(), entry.repo.as_str()))
                    || !ids.insert(entry.id.as_str())
            })
        })
    }

    /// Add a source entry
    ///
    /// Spaces are stripped from owner and repo. Fails on empty fields, on a
    /// repository that is already configured and on a conflicting id.
    pub fn add_entry(&mut self, owner: &str, repo: &str, id: &str, kind: AssetKind) -> Result<()> {
        let entry = normalized_entry(owner, repo, id)?;

        for existing in self.entries(kind) {
            if existing.same_repository(&entry.owner, &entry.repo) {
                return Err(error::source::duplicate(format!(
                    "Cannot add {kind} source with the same repository"
                )));
            }
            if existing.id == entry.id {
                return Err(error::source::duplicate(format!(
                    "Cannot add {kind} source with conflicting id"
                )));
            }
        }

        self.entries_mut(kind).push(entry);
        Ok(())
    }

    /// Replace the entry identified by `id`, keeping its position
    pub fn edit_entry(
        &mut self,
        id: &str,
        owner: &str,
        repo: &str,
        new_id: Option<&str>,
        kind: AssetKind,
    ) -> Result<()> {
        let index = self
            .index(id, kind)
            .ok_or_else(|| error::source::not_found(id))?;
        let entry = normalized_entry(owner, repo, new_id.unwrap_or(id))?;

        for (i, existing) in self.entries(kind).iter().enumerate() {
            if i == index {
                continue;
            }
            if existing.same_repository(&entry.owner, &entry.repo) {
                return Err(error::source::duplicate(format!(
                    "Cannot edit {kind} source to a repository used by {}",
                    existing.id
                )));
            }
            if existing.id == entry.id {
                return Err(error::source::duplicate(format!(
                    "Cannot edit {kind} source to conflicting id"
                )));
            }
        }

        self.entries_mut(kind)[index] = entry;
        Ok(())
    }

    /// Remove the entry identified by `id`, returning it
    pub fn remove_entry(&mut self, id: &str, kind: AssetKind) -> Result<AssetConfig> {
        let index = self
            .index(id, kind)
            .ok_or_else(|| error::source::not_found(id))?;
        Ok(self.entries_mut(kind).remove(index))
    }
}

fn normalized_entry(owner: &str, repo: &str, id: &str) -> Result<AssetConfig> {
    let owner = owner.replace(' ', "");
    let repo = repo.replace(' ', "");
    let id = id.trim();

    let missing: Vec<&str> = [
        ("Owner", owner.is_empty()),
        ("Repo", repo.is_empty()),
        ("Id", id.is_empty()),
    ]
    .into_iter()
    .filter_map(|(name, empty)| empty.then_some(name))
    .collect();

    if !missing.is_empty() {
        return Err(ManagerError::MissingFields {
            fields: missing.join(", "),
        });
    }
    paths::check_id(id)?;

    Ok(AssetConfig::new(owner, repo, id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_has_no_duplicates() {
        let config = SourcesConfig::default_config();
        assert_eq!(config.plugins.len(), 3);
        assert_eq!(config.templates.len(), 4);
        assert!(!config.contains_duplicates());
    }

    #[test]
    fn test_duplicate_repo_detected() {
        let mut config = SourcesConfig::default();
        config.plugins.push(AssetConfig::new("a", "b", "one"));
        config.plugins.push(AssetConfig::new("a", "b", "two"));
        assert!(config.contains_duplicates());
    }

    #[test]
    fn test_duplicate_id_detected() {
        let mut config = SourcesConfig::default();
        config.templates.push(AssetConfig::new("a", "b", "same"));
        config.templates.push(AssetConfig::new("c", "d", "same"));
        assert!(config.contains_duplicates());
    }

    #[test]
    fn test_same_repo_across_kinds_allowed() {
        let mut config = SourcesConfig::default();
        config.plugins.push(AssetConfig::new("a", "b", "same"));
        config.templates.push(AssetConfig::new("a", "b", "same"));
        assert!(!config.contains_duplicates());
    }

    #[test]
    fn test_from_json_rejects_duplicates() {
        let json = r#"{
            "plugins": [
                {"id": "x", "owner": "o", "repo": "r"},
                {"id": "x", "owner": "o", "repo": "other"}
            ],
            "templates": []
        }"#;
        let err = SourcesConfig::from_json(json).unwrap_err();
        assert!(matches!(err, ManagerError::InvalidSource { .. }));
    }

    #[test]
    fn test_from_json_rejects_path_like_ids() {
        for id in ["..", ".", "", "../plugins", "a/b", "a\\b"] {
            let json = format!(
                r#"{{"plugins": [], "templates": [{{"id": {}, "owner": "o", "repo": "r"}}]}}"#,
                serde_json::to_string(id).unwrap()
            );
            let err = SourcesConfig::from_json(&json).unwrap_err();
            assert!(matches!(err, ManagerError::InvalidSource { .. }), "accepted {id:?}");
        }
    }

    #[test]
    fn test_add_entry_rejects_path_like_ids() {
        let mut config = SourcesConfig::default();
        for id in ["..", ".", "../templates", "evil/..", "a\\b"] {
            let err = config
                .add_entry("someone", "evil", id, AssetKind::Plugin)
                .unwrap_err();
            assert!(matches!(err, ManagerError::InvalidSource { .. }), "accepted {id:?}");
        }
        assert!(config.plugins.is_empty());
    }

    #[test]
    fn test_edit_entry_rejects_path_like_new_id() {
        let mut config = SourcesConfig::default_config();
        let err = config
            .edit_entry(
                "stagetemplate",
                "Fraymakers",
                "stage-template",
                Some(".."),
                AssetKind::Template,
            )
            .unwrap_err();
        assert!(matches!(err, ManagerError::InvalidSource { .. }));
        assert!(config.find("stagetemplate", AssetKind::Template).is_some());
    }

    #[test]
    fn test_from_json_missing_section_is_empty() {
        let config = SourcesConfig::from_json(r#"{"plugins": []}"#).unwrap();
        assert!(config.templates.is_empty());
    }

    #[test]
    fn test_add_entry_strips_spaces() {
        let mut config = SourcesConfig::default();
        config
            .add_entry(" some owner ", "my repo", "com.example.Plugin", AssetKind::Plugin)
            .unwrap();
        assert_eq!(
            config.plugins[0],
            AssetConfig::new("someowner", "myrepo", "com.example.Plugin")
        );
    }

    #[test]
    fn test_add_entry_rejects_same_repository() {
        let mut config = SourcesConfig::default_config();
        let err = config
            .add_entry("Fraymakers", "stage-template", "newid", AssetKind::Template)
            .unwrap_err();
        assert!(matches!(err, ManagerError::DuplicateSourceEntry { .. }));
        assert!(err.to_string().contains("same repository"));
    }

    #[test]
    fn test_add_entry_rejects_conflicting_id() {
        let mut config = SourcesConfig::default_config();
        let err = config
            .add_entry(
                "someone",
                "fork",
                "com.fraymakers.ContentExporter",
                AssetKind::Plugin,
            )
            .unwrap_err();
        assert!(err.to_string().contains("conflicting id"));
    }

    #[test]
    fn test_add_entry_missing_fields() {
        let mut config = SourcesConfig::default();
        let err = config.add_entry("", " ", "id", AssetKind::Plugin).unwrap_err();
        match err {
            ManagerError::MissingFields { fields } => assert_eq!(fields, "Owner, Repo"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_edit_entry_keeps_position() {
        let mut config = SourcesConfig::default_config();
        config
            .edit_entry(
                "assisttemplate",
                "someone",
                "assist-fork",
                None,
                AssetKind::Template,
            )
            .unwrap();
        assert_eq!(
            config.templates[1],
            AssetConfig::new("someone", "assist-fork", "assisttemplate")
        );
    }

    #[test]
    fn test_edit_entry_rename_conflict() {
        let mut config = SourcesConfig::default_config();
        let err = config
            .edit_entry(
                "assisttemplate",
                "Fraymakers",
                "assist-template",
                Some("stagetemplate"),
                AssetKind::Template,
            )
            .unwrap_err();
        assert!(matches!(err, ManagerError::DuplicateSourceEntry { .. }));
    }

    #[test]
    fn test_edit_unknown_entry() {
        let mut config = SourcesConfig::default_config();
        let err = config
            .edit_entry("nope", "a", "b", None, AssetKind::Plugin)
            .unwrap_err();
        assert!(matches!(err, ManagerError::SourceNotFound { .. }));
    }

    #[test]
    fn test_remove_entry() {
        let mut config = SourcesConfig::default_config();
        let removed = config
            .remove_entry("com.fraymakers.FraymakersTypes", AssetKind::Plugin)
            .unwrap();
        assert_eq!(removed.repo, "api-types-plugin");
        assert_eq!(config.plugins.len(), 2);
        assert!(
            config
                .remove_entry("com.fraymakers.FraymakersTypes", AssetKind::Plugin)
                .is_err()
        );
    }

    #[test]
    fn test_load_or_default_writes_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("sources.json");

        let config = SourcesConfig::load_or_default(&path, false).unwrap();
        assert!(path.exists());
        assert_eq!(config, SourcesConfig::default_config());

        let mut edited = config.clone();
        edited
            .remove_entry("musictemplate", AssetKind::Template)
            .unwrap();
        edited.save(&path).unwrap();
        assert_eq!(SourcesConfig::load_or_default(&path, false).unwrap(), edited);

        let restored = SourcesConfig::load_or_default(&path, true).unwrap();
        assert_eq!(restored, SourcesConfig::default_config());
        assert_eq!(SourcesConfig::load(&path).unwrap(), restored);
    }
}
