//! Uninstall command implementation

use console::Style;

use crate::cli::UninstallArgs;
use crate::commands::helpers;
use crate::error::{ManagerError, Result};
use crate::installer;
use crate::ui::Verbosity;

/// Run uninstall command
pub fn run(args: UninstallArgs, verbosity: Verbosity) -> Result<()> {
    let catalog = helpers::load_catalog(&verbosity)?;
    let entry = catalog.resolve(&args.id, args.kind)?;
    let manifest = entry.manifest.as_ref().ok_or_else(|| ManagerError::NotInstalled {
        id: entry.id().to_string(),
    })?;

    println!(
        "{} {}",
        Style::new().bold().apply_to("Will remove:"),
        manifest.path().display()
    );
    let message = format!("Uninstall {}?", entry.display_name());
    if !helpers::confirm(&message, args.yes)? {
        println!("Uninstall cancelled.");
        return Ok(());
    }

    installer::uninstall(entry.id(), manifest.path())?;
    println!(
        "{} Uninstalled {}",
        Style::new().green().apply_to("✓"),
        entry.display_name()
    );

    Ok(())
}
