//! Detection of plugins and templates already present in FrayToolsData
//!
//! FrayTools identifies an asset by its manifest, not by its directory name,
//! so anything installed by hand is picked up as long as it has one.

use std::fs;
use std::path::Path;

use crate::domain::{AssetKind, InstalledManifest, PluginManifest, TemplateManifest};
use crate::error::{self, Result};
use crate::paths::Layout;
use crate::ui::Verbosity;

/// Manifest location of a plugin, relative to its directory
pub const PLUGIN_MANIFEST: &str = "manifest.json";

/// Manifest location of a template, relative to its directory
pub const TEMPLATE_MANIFEST: &str = "library/manifest.json";

/// Plugins under `<data>/plugins/<dir>/manifest.json`, sorted by directory
pub fn detect_plugins(layout: &Layout, verbosity: &Verbosity) -> Result<Vec<PluginManifest>> {
    let mut manifests = Vec::new();
    for dir in asset_dirs(&layout.install_root(AssetKind::Plugin))? {
        let path = dir.join(PLUGIN_MANIFEST);
        if !path.is_file() {
            continue;
        }
        match read_manifest::<PluginManifest>(&path) {
            Ok(mut manifest) => {
                manifest.path = dir;
                manifests.push(manifest);
            }
            Err(e) => verbosity.detail(format!("Skipping {}: {e}", path.display())),
        }
    }
    Ok(manifests)
}

/// Templates under `<data>/templates/<dir>/library/manifest.json`, sorted by directory
pub fn detect_templates(layout: &Layout, verbosity: &Verbosity) -> Result<Vec<TemplateManifest>> {
    let mut manifests = Vec::new();
    for dir in asset_dirs(&layout.install_root(AssetKind::Template))? {
        let path = dir.join(TEMPLATE_MANIFEST);
        if !path.is_file() {
            continue;
        }
        match read_manifest::<TemplateManifest>(&path) {
            Ok(mut manifest) => {
                manifest.path = dir;
                manifests.push(manifest);
            }
            Err(e) => verbosity.detail(format!("Skipping {}: {e}", path.display())),
        }
    }
    Ok(manifests)
}

/// Installed manifests of one kind
pub fn detect(layout: &Layout, kind: AssetKind, verbosity: &Verbosity) -> Result<Vec<InstalledManifest>> {
    Ok(match kind {
        AssetKind::Plugin => detect_plugins(layout, verbosity)?
            .into_iter()
            .map(InstalledManifest::Plugin)
            .collect(),
        AssetKind::Template => detect_templates(layout, verbosity)?
            .into_iter()
            .map(InstalledManifest::Template)
            .collect(),
    })
}

fn asset_dirs(root: &Path) -> Result<Vec<std::path::PathBuf>> {
    if !root.is_dir() {
        return Ok(Vec::new());
    }
    let mut dirs: Vec<_> = fs::read_dir(root)
        .map_err(|e| error::fs::read_failed(root, e))?
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();
    dirs.sort();
    Ok(dirs)
}

fn read_manifest<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let json = fs::read_to_string(path).map_err(|e| error::fs::read_failed(path, e))?;
    serde_json::from_str(&json).map_err(|e| error::fs::parse_failed(path, e))
}
