//! Manifests of assets installed in the FrayTools data directory

use std::path::PathBuf;

use serde::Deserialize;

/// `manifest.json` at the root of an installed plugin
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PluginManifest {
    pub name: String,
    #[serde(rename = "type")]
    pub plugin_type: String,
    pub id: String,
    pub version: String,
    #[serde(default)]
    pub description: String,
    /// Directory the manifest was found in
    #[serde(skip)]
    pub path: PathBuf,
}

/// `library/manifest.json` of an installed template
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TemplateManifest {
    #[serde(rename = "resourceId")]
    pub id: String,
    #[serde(skip)]
    pub path: PathBuf,
}

/// A detected installation of either kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstalledManifest {
    Plugin(PluginManifest),
    Template(TemplateManifest),
}

impl InstalledManifest {
    pub fn id(&self) -> &str {
        match self {
            InstalledManifest::Plugin(m) => &m.id,
            InstalledManifest::Template(m) => &m.id,
        }
    }

    pub fn path(&self) -> &std::path::Path {
        match self {
            InstalledManifest::Plugin(m) => &m.path,
            InstalledManifest::Template(m) => &m.path,
        }
    }

    /// Version declared by the manifest itself (plugins only)
    pub fn declared_version(&self) -> Option<&str> {
        match self {
            InstalledManifest::Plugin(m) => Some(&m.version),
            InstalledManifest::Template(_) => None,
        }
    }
}
