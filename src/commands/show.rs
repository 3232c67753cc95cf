//! Show command implementation

use crate::cli::ShowArgs;
use crate::commands::helpers;
use crate::error::Result;
use crate::ui::Verbosity;
use crate::ui::display::display_entry_detailed;

/// Run show command
pub fn run(args: ShowArgs, verbosity: Verbosity) -> Result<()> {
    let catalog = helpers::load_catalog(&verbosity)?;
    let entry = catalog.resolve(&args.id, args.kind)?;
    display_entry_detailed(&catalog.layout, &entry);
    Ok(())
}
