//! Asset domain types
//!
//! An asset is a FrayTools plugin or template published as GitHub releases.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Kind of FrayTools asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Plugin,
    Template,
}

impl AssetKind {
    pub const ALL: [AssetKind; 2] = [AssetKind::Plugin, AssetKind::Template];

    /// Kinds matching an optional `--kind` filter, plugins first
    pub fn selected(kind: Option<AssetKind>) -> Vec<AssetKind> {
        match kind {
            Some(kind) => vec![kind],
            None => Self::ALL.to_vec(),
        }
    }

    /// Directory name used both in FrayToolsData and in the download cache
    pub fn dir_name(self) -> &'static str {
        match self {
            AssetKind::Plugin => "plugins",
            AssetKind::Template => "templates",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AssetKind::Plugin => "Plugin",
            AssetKind::Template => "Template",
        }
    }

    /// Name of the manifest field that holds the asset id
    pub fn id_field(self) -> &'static str {
        match self {
            AssetKind::Plugin => "Plugin Manifest Id",
            AssetKind::Template => "Template Manifest resourceId",
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetKind::Plugin => write!(f, "plugin"),
            AssetKind::Template => write!(f, "template"),
        }
    }
}

impl FromStr for AssetKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "plugin" | "plugins" => Ok(AssetKind::Plugin),
            "template" | "templates" => Ok(AssetKind::Template),
            other => Err(format!("unknown asset kind '{other}'")),
        }
    }
}

/// A configured source: the GitHub repository publishing one asset id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetConfig {
    pub owner: String,
    pub repo: String,
    pub id: String,
}

impl AssetConfig {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
            id: id.into(),
        }
    }

    /// `owner/repo`
    pub fn repository(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }

    pub fn same_repository(&self, owner: &str, repo: &str) -> bool {
        self.owner == owner && self.repo == repo
    }
}

/// One downloadable release of an asset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetVersion {
    pub url: String,
    pub tag: String,
    #[serde(default)]
    pub changelog: String,
}

/// Release metadata for an asset, newest release first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    pub id: String,
    pub owner: String,
    pub repo: String,
    #[serde(default)]
    pub versions: Vec<AssetVersion>,
}

impl Asset {
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.versions.iter().map(|v| v.tag.as_str())
    }

    pub fn version(&self, tag: &str) -> Option<&AssetVersion> {
        self.versions.iter().find(|v| v.tag == tag)
    }

    pub fn latest(&self) -> Option<&AssetVersion> {
        self.versions.first()
    }
}
