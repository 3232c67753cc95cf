//! FrayTools Manager - plugin and template manager for FrayTools
//!
//! Downloads FrayTools plugins and templates from GitHub releases, installs
//! them into the FrayTools data directory and swaps between versions.

use clap::Parser;
use miette::Diagnostic;

mod cache;
mod catalog;
mod changelog;
mod cli;
mod commands;
mod config;
mod domain;
mod error;
mod github;
mod hash;
mod installer;
mod paths;
mod ui;

#[cfg(test)]
mod test_fixtures;

use cli::{Cli, Commands};
use ui::Verbosity;

fn main() {
    let cli = Cli::parse();
    let verbosity = Verbosity::new(cli.verbose);

    let result = match cli.command {
        Commands::List(args) => commands::list::run(args, verbosity),
        Commands::Show(args) => commands::show::run(args, verbosity),
        Commands::Changelog(args) => commands::changelog::run(args, verbosity),
        Commands::Refresh(args) => commands::refresh::run(args, verbosity),
        Commands::Download(args) => commands::download::run(args, verbosity),
        Commands::Install(args) => commands::install::run(args, verbosity),
        Commands::Uninstall(args) => commands::uninstall::run(args, verbosity),
        Commands::Sources(args) => commands::sources::run(args, verbosity),
        Commands::Cache(args) => commands::cache::run(args, verbosity),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        if let Some(help) = e.help() {
            eprintln!("  help: {help}");
        }
        std::process::exit(1);
    }
}
