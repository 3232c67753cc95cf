//! GitHub release payloads and their mapping to asset versions

use serde::Deserialize;

use crate::domain::{AssetKind, AssetVersion};

/// Subset of the GitHub release object the manager reads
#[derive(Debug, Clone, Deserialize)]
pub struct Release {
    #[serde(default)]
    pub name: Option<String>,
    pub tag_name: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub zipball_url: Option<String>,
    #[serde(default)]
    pub assets: Vec<ReleaseAsset>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseAsset {
    pub browser_download_url: String,
}

impl Release {
    /// Display tag: the release name, or the git tag when the name is blank
    pub fn tag(&self) -> &str {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name,
            _ => &self.tag_name,
        }
    }

    /// Download URL for this release
    ///
    /// The first uploaded asset wins. Templates fall back to the source
    /// zipball since they are plain FrayTools projects.
    pub fn download_url(&self, kind: AssetKind) -> Option<&str> {
        if let Some(asset) = self.assets.first() {
            return Some(&asset.browser_download_url);
        }
        match kind {
            AssetKind::Template => self.zipball_url.as_deref(),
            AssetKind::Plugin => None,
        }
    }

    pub fn to_version(&self, kind: AssetKind) -> Option<AssetVersion> {
        let url = self.download_url(kind)?;
        Some(AssetVersion {
            url: url.to_string(),
            tag: self.tag().to_string(),
            changelog: self.body.clone().unwrap_or_default(),
        })
    }
}

/// Map releases to versions, skipping releases with nothing to download
pub fn versions_from_releases(releases: &[Release], kind: AssetKind) -> Vec<AssetVersion> {
    releases
        .iter()
        .filter_map(|release| release.to_version(kind))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const RELEASES: &str = r#"[
        {
            "name": "v1.1.0",
            "tag_name": "1.1.0",
            "body": "* Fixed exporter crash",
            "zipball_url": "https://api.github.com/repos/o/r/zipball/1.1.0",
            "assets": [
                {"name": "plugin.zip", "browser_download_url": "https://github.com/o/r/releases/download/1.1.0/plugin.zip"},
                {"name": "other.zip", "browser_download_url": "https://github.com/o/r/releases/download/1.1.0/other.zip"}
            ]
        },
        {
            "name": "",
            "tag_name": "1.0.0",
            "body": null,
            "zipball_url": "https://api.github.com/repos/o/r/zipball/1.0.0",
            "assets": []
        }
    ]"#;

    fn releases() -> Vec<Release> {
        serde_json::from_str(RELEASES).unwrap()
    }

    #[test]
    fn test_first_asset_is_download() {
        let releases = releases();
        assert_eq!(
            releases[0].download_url(AssetKind::Plugin),
            Some("https://github.com/o/r/releases/download/1.1.0/plugin.zip")
        );
    }

    #[test]
    fn test_plugins_skip_releases_without_assets() {
        let versions = versions_from_releases(&releases(), AssetKind::Plugin);
        assert_eq!(versions.len(), 1);
        assert_eq!(versions[0].tag, "v1.1.0");
        assert_eq!(versions[0].changelog, "* Fixed exporter crash");
    }

    #[test]
    fn test_templates_fall_back_to_zipball() {
        let versions = versions_from_releases(&releases(), AssetKind::Template);
        assert_eq!(versions.len(), 2);
        assert_eq!(versions[1].url, "https://api.github.com/repos/o/r/zipball/1.0.0");
        // blank name falls back to the git tag, missing body to empty
        assert_eq!(versions[1].tag, "1.0.0");
        assert_eq!(versions[1].changelog, "");
    }
}
