//! Changelog command implementation

use console::Style;

use crate::changelog;
use crate::cli::ChangelogArgs;
use crate::commands::helpers;
use crate::error::{self, Result};
use crate::ui::Verbosity;

/// Run changelog command
pub fn run(args: ChangelogArgs, verbosity: Verbosity) -> Result<()> {
    let catalog = helpers::load_catalog(&verbosity)?;
    let entry = catalog.resolve(&args.id, args.kind)?;
    let tag = helpers::select_version(&entry, args.version.as_deref())?;

    let version = entry
        .asset
        .as_ref()
        .and_then(|asset| asset.version(&tag))
        .ok_or_else(|| error::install::version_not_found(entry.id(), &tag))?;

    println!(
        "{} {}",
        Style::new().bold().yellow().apply_to(entry.display_name()),
        Style::new().bold().apply_to(&tag)
    );
    println!();
    if version.changelog.trim().is_empty() {
        println!("{}", Style::new().dim().apply_to("No changelog provided."));
    } else {
        println!("{}", changelog::render(&version.changelog));
    }

    Ok(())
}
