//! One row of the catalog: what is installed, configured and known upstream

use crate::domain::{Asset, AssetConfig, AssetKind, InstalledManifest};
use crate::installer;
use crate::paths::Layout;

/// Merged view of a detected installation, its source and its release data
///
/// Any of the three parts may be missing: a hand-installed plugin has no
/// source, a fresh source has no installation, and nothing has release data
/// before the first refresh.
#[derive(Debug, Clone)]
pub struct AssetEntry {
    pub kind: AssetKind,
    pub manifest: Option<InstalledManifest>,
    pub config: Option<AssetConfig>,
    pub asset: Option<Asset>,
}

impl AssetEntry {
    /// Id used to address this entry on the command line
    pub fn id(&self) -> &str {
        if let Some(manifest) = &self.manifest {
            manifest.id()
        } else if let Some(config) = &self.config {
            &config.id
        } else if let Some(asset) = &self.asset {
            &asset.id
        } else {
            ""
        }
    }

    pub fn display_name(&self) -> String {
        match (&self.manifest, &self.asset, &self.config) {
            (Some(InstalledManifest::Plugin(m)), _, _) => format!("{} ({})", m.name, m.id),
            (Some(InstalledManifest::Template(m)), _, _) => m.id.clone(),
            (None, Some(asset), _) => asset.id.clone(),
            (None, None, Some(config)) => config.id.clone(),
            (None, None, None) => "unknown asset".to_string(),
        }
    }

    /// Tag from the version marker, else the version the plugin manifest declares
    pub fn installed_version(&self) -> Option<String> {
        let manifest = self.manifest.as_ref()?;
        installer::read_version_marker(manifest.path()).or_else(|| {
            manifest
                .declared_version()
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        })
    }

    /// Whether `selected` is the version currently installed
    ///
    /// An installation without a source or without release data cannot be
    /// matched to a tag and always counts as installed.
    pub fn is_installed(&self, selected: Option<&str>) -> bool {
        let Some(manifest) = &self.manifest else {
            return false;
        };

        let marker_matches = selected.is_some()
            && installer::read_version_marker(manifest.path()).as_deref() == selected;
        let untracked = self.asset.is_none() || self.config.is_none();
        let declared_matches = self.asset.is_some()
            && selected.is_some()
            && matches!(manifest, InstalledManifest::Plugin(m) if Some(m.version.as_str()) == selected);

        marker_matches || untracked || declared_matches
    }

    pub fn can_download(&self, layout: &Layout, selected: Option<&str>) -> bool {
        let (Some(tag), Some(_)) = (selected, &self.config) else {
            return false;
        };
        let Some(asset) = &self.asset else {
            return false;
        };
        !self.is_installed(selected) && !layout.download_file(&asset.id, tag, self.kind).exists()
    }

    pub fn can_install(&self, layout: &Layout, selected: Option<&str>) -> bool {
        let (Some(tag), Some(config)) = (selected, &self.config) else {
            return false;
        };
        layout.download_file(&config.id, tag, self.kind).exists()
            && !self.can_download(layout, selected)
            && !self.is_installed(selected)
    }

    pub fn can_uninstall(&self, selected: Option<&str>) -> bool {
        self.is_installed(selected)
    }

    /// Installed version when it is a known tag, else the newest tag
    pub fn default_version(&self) -> Option<String> {
        let asset = self.asset.as_ref()?;
        if let Some(installed) = self.installed_version() {
            if asset.tags().any(|tag| tag == installed) {
                return Some(installed);
            }
        }
        asset.latest().map(|v| v.tag.clone())
    }
}
