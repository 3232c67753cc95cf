//! List command implementation
//!
//! Lists installed plugins and templates first, then configured ones that
//! are not installed yet.

use console::Style;

use crate::cli::ListArgs;
use crate::commands::helpers;
use crate::domain::AssetKind;
use crate::error::Result;
use crate::ui::Verbosity;
use crate::ui::display::display_entries;

/// Run list command
pub fn run(args: ListArgs, verbosity: Verbosity) -> Result<()> {
    let catalog = helpers::load_catalog(&verbosity)?;

    for (i, kind) in AssetKind::selected(args.kind).into_iter().enumerate() {
        if i > 0 {
            println!();
        }
        display_entries(kind, &catalog.entries(kind));
    }

    if catalog.cache.is_empty() {
        println!();
        println!(
            "{}",
            Style::new()
                .dim()
                .apply_to("No release data yet. Run 'fraytools-manager refresh' to fetch it.")
        );
    }

    Ok(())
}
