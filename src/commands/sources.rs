//! Sources command implementation

use console::Style;

use crate::catalog::Catalog;
use crate::cli::sources::{
    AddSourceArgs, EditSourceArgs, RemoveSourceArgs, ResetSourcesArgs, SourcesListArgs,
};
use crate::cli::{SourcesArgs, SourcesSubcommand};
use crate::commands::helpers;
use crate::domain::AssetKind;
use crate::error::Result;
use crate::paths::Layout;
use crate::ui::Verbosity;

/// Run sources command
pub fn run(args: SourcesArgs, verbosity: Verbosity) -> Result<()> {
    match args.command {
        None => list_sources(SourcesListArgs { kind: None }, &verbosity),
        Some(SourcesSubcommand::List(list_args)) => list_sources(list_args, &verbosity),
        Some(SourcesSubcommand::Add(add_args)) => add_source(add_args, &verbosity),
        Some(SourcesSubcommand::Edit(edit_args)) => edit_source(edit_args, &verbosity),
        Some(SourcesSubcommand::Remove(remove_args)) => remove_source(remove_args, &verbosity),
        // works without a loadable sources.json
        Some(SourcesSubcommand::Reset(reset_args)) => reset_sources(reset_args),
    }
}

fn list_sources(args: SourcesListArgs, verbosity: &Verbosity) -> Result<()> {
    let catalog = helpers::load_catalog(verbosity)?;
    println!("Sources: {}", catalog.layout.sources_file().display());

    for kind in AssetKind::selected(args.kind) {
        let entries = catalog.sources.entries(kind);
        println!();
        println!(
            "{}",
            Style::new()
                .bold()
                .apply_to(format!("{}s ({}):", kind.label(), entries.len()))
        );
        for entry in entries {
            let cached = if catalog.cache.exists(&entry.id, kind) {
                String::new()
            } else {
                format!(" {}", Style::new().dim().apply_to("(not fetched)"))
            };
            println!(
                "  {} {}{}",
                Style::new().bold().yellow().apply_to(&entry.id),
                Style::new().cyan().apply_to(entry.repository()),
                cached
            );
        }
    }

    Ok(())
}

fn add_source(args: AddSourceArgs, verbosity: &Verbosity) -> Result<()> {
    let mut catalog = helpers::load_catalog(verbosity)?;
    catalog.add_source(&args.owner, &args.repo, &args.id, args.kind)?;
    println!(
        "{} Added {} source {}",
        Style::new().green().apply_to("✓"),
        args.kind,
        args.id.trim()
    );
    println!("Run 'fraytools-manager refresh {}' to fetch its releases.", args.id.trim());
    Ok(())
}

fn edit_source(args: EditSourceArgs, verbosity: &Verbosity) -> Result<()> {
    let mut catalog = helpers::load_catalog(verbosity)?;
    let kind = catalog.source_kind(&args.id, args.kind)?;
    catalog.edit_source(&args.id, &args.owner, &args.repo, args.new_id.as_deref(), kind)?;
    println!(
        "{} Updated {} source {}",
        Style::new().green().apply_to("✓"),
        kind,
        args.new_id.as_deref().unwrap_or(&args.id)
    );
    Ok(())
}

fn remove_source(args: RemoveSourceArgs, verbosity: &Verbosity) -> Result<()> {
    let mut catalog = helpers::load_catalog(verbosity)?;
    let kind = catalog.source_kind(&args.id, args.kind)?;
    let removed = catalog.remove_source(&args.id, kind)?;
    println!(
        "{} Removed {} source {} ({})",
        Style::new().green().apply_to("✓"),
        kind,
        removed.id,
        removed.repository()
    );
    Ok(())
}

fn reset_sources(args: ResetSourcesArgs) -> Result<()> {
    if !helpers::confirm("Replace all sources with the defaults?", args.yes)? {
        println!("Reset cancelled.");
        return Ok(());
    }
    Catalog::reset_sources(&Layout::from_env()?)?;
    println!("{} Sources reset to defaults.", Style::new().green().apply_to("✓"));
    Ok(())
}
