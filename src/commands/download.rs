//! Download command implementation

use std::path::PathBuf;

use console::Style;

use crate::cache;
use crate::catalog::{AssetEntry, Catalog};
use crate::cli::DownloadArgs;
use crate::commands::helpers;
use crate::error::{ManagerError, Result};
use crate::github::GitHubClient;
use crate::ui::{self, Verbosity};

/// Run download command
pub fn run(args: DownloadArgs, verbosity: Verbosity) -> Result<()> {
    let catalog = helpers::load_catalog(&verbosity)?;
    let entry = catalog.resolve(&args.id, args.kind)?;
    helpers::require_config(&entry)?;
    let tag = helpers::select_latest(&entry, args.version.as_deref())?;

    if cache::is_downloaded(&catalog.layout, entry.id(), &tag, entry.kind) {
        println!("{} {tag} is already downloaded.", entry.display_name());
        return Ok(());
    }

    let path = download(&catalog, &entry, &tag, &verbosity)?;
    println!(
        "{} Downloaded {} {}",
        Style::new().green().apply_to("✓"),
        entry.display_name(),
        Style::new().bold().apply_to(&tag)
    );
    verbosity.detail(format!("Saved to {}", path.display()));
    Ok(())
}

/// Download `tag` of an entry into the download cache
pub fn download(
    catalog: &Catalog,
    entry: &AssetEntry,
    tag: &str,
    verbosity: &Verbosity,
) -> Result<PathBuf> {
    let asset = entry.asset.as_ref().ok_or_else(|| ManagerError::NoReleaseData {
        id: entry.id().to_string(),
    })?;
    if let Some(version) = asset.version(tag) {
        verbosity.detail(format!("Downloading {}", version.url));
    }

    let client = GitHubClient::from_env()?;
    let mut reporter = ui::progress_reporter();
    cache::download_version(
        &catalog.layout,
        &client,
        asset,
        entry.kind,
        tag,
        reporter.as_mut(),
    )
}
