//! Command helper utilities

use inquire::Confirm;

use crate::catalog::{AssetEntry, Catalog};
use crate::domain::AssetConfig;
use crate::error::{self, ManagerError, Result};
use crate::paths::Layout;
use crate::ui::Verbosity;

/// Load the catalog from the directories the environment points at
pub fn load_catalog(verbosity: &Verbosity) -> Result<Catalog> {
    let layout = Layout::from_env()?;
    verbosity.detail(format!(
        "Manager directory: {}, data directory: {}",
        layout.app_dir.display(),
        layout.data_dir.display()
    ));
    Catalog::load(layout, verbosity)
}

/// Source of an entry; untracked installations cannot be downloaded or updated
pub fn require_config(entry: &AssetEntry) -> Result<&AssetConfig> {
    entry
        .config
        .as_ref()
        .ok_or_else(|| error::source::not_found(entry.id()))
}

/// Tag to act on: `requested` when it is a known release, else the entry's
/// default version
pub fn select_version(entry: &AssetEntry, requested: Option<&str>) -> Result<String> {
    let asset = entry.asset.as_ref().ok_or_else(|| ManagerError::NoReleaseData {
        id: entry.id().to_string(),
    })?;

    match requested {
        Some(tag) if asset.version(tag).is_some() => Ok(tag.to_string()),
        Some(tag) => Err(error::install::version_not_found(&asset.id, tag)),
        None => entry.default_version().ok_or_else(|| ManagerError::NoReleaseData {
            id: entry.id().to_string(),
        }),
    }
}

/// Tag to act on: `requested` when it is a known release, else the newest
pub fn select_latest(entry: &AssetEntry, requested: Option<&str>) -> Result<String> {
    if requested.is_some() {
        return select_version(entry, requested);
    }
    entry
        .asset
        .as_ref()
        .and_then(|asset| asset.latest())
        .map(|version| version.tag.clone())
        .ok_or_else(|| ManagerError::NoReleaseData {
            id: entry.id().to_string(),
        })
}

/// Ask for confirmation unless `yes` was given
pub fn confirm(message: &str, yes: bool) -> Result<bool> {
    if yes {
        return Ok(true);
    }
    Ok(Confirm::new(message)
        .with_default(false)
        .with_help_message("Press 'y' to confirm, or Enter to cancel")
        .prompt()?)
}
