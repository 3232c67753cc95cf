//! Install command implementation
//!
//! Installs a downloaded version, swapping out whatever version is
//! installed. With `--download` a missing archive is fetched first.

use console::Style;

use crate::cache;
use crate::cli::InstallArgs;
use crate::commands::{download, helpers};
use crate::error::{self, Result};
use crate::installer;
use crate::ui::Verbosity;

/// Run install command
pub fn run(args: InstallArgs, verbosity: Verbosity) -> Result<()> {
    let catalog = helpers::load_catalog(&verbosity)?;
    let entry = catalog.resolve(&args.id, args.kind)?;
    let config = helpers::require_config(&entry)?;
    let tag = helpers::select_latest(&entry, args.version.as_deref())?;

    if entry.is_installed(Some(&tag)) {
        println!("{} {tag} is already installed.", entry.display_name());
        return Ok(());
    }

    if !cache::is_downloaded(&catalog.layout, &config.id, &tag, entry.kind) {
        if !args.download {
            return Err(error::install::not_downloaded(&config.id, &tag));
        }
        download::download(&catalog, &entry, &tag, &verbosity)?;
    }

    let previous = entry.installed_version();
    let existing = entry.manifest.as_ref().map(|m| m.path());
    let dest = installer::install_version(&catalog.layout, &config.id, &tag, entry.kind, existing)?;

    match previous {
        Some(previous) => println!(
            "{} Updated {} from {} to {}",
            Style::new().green().apply_to("✓"),
            entry.display_name(),
            previous,
            Style::new().bold().apply_to(&tag)
        ),
        None => println!(
            "{} Installed {} {}",
            Style::new().green().apply_to("✓"),
            entry.display_name(),
            Style::new().bold().apply_to(&tag)
        ),
    }
    verbosity.detail(format!("Installed into {}", dest.display()));

    Ok(())
}
