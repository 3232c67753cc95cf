//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - asset: list, show, changelog, refresh, download, install and uninstall
//! - sources: Sources command arguments
//! - cache: Cache command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};

pub mod asset;
pub mod cache;
pub mod completions;
pub mod sources;

pub use asset::{
    ChangelogArgs, DownloadArgs, InstallArgs, ListArgs, RefreshArgs, ShowArgs, UninstallArgs,
};
pub use cache::{CacheArgs, CacheSubcommand};
pub use completions::CompletionsArgs;
pub use sources::{SourcesArgs, SourcesSubcommand};

/// FrayTools Manager - plugin and template manager for FrayTools
///
/// Download, install and swap versions of FrayTools plugins and templates
/// published as GitHub releases.
#[derive(Parser, Debug)]
#[command(
    name = "fraytools-manager",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Plugin and template manager for FrayTools",
    long_about = "FrayTools Manager downloads FrayTools plugins and templates from their GitHub \
                  releases, installs them into ~/FrayToolsData and swaps between versions.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  fraytools-manager refresh                          \x1b[90m# Fetch release data for all sources\x1b[0m\n   \
                  fraytools-manager list                             \x1b[90m# List plugins and templates\x1b[0m\n   \
                  fraytools-manager install stagetemplate --download \x1b[90m# Download and install the newest release\x1b[0m\n   \
                  fraytools-manager changelog stagetemplate          \x1b[90m# Show release notes\x1b[0m\n   \
                  fraytools-manager sources add owner repo id        \x1b[90m# Add a custom plugin source\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List plugins and templates
    List(ListArgs),

    /// Show details and versions of a plugin or template
    Show(ShowArgs),

    /// Show release notes of a version
    Changelog(ChangelogArgs),

    /// Fetch release data from GitHub
    Refresh(RefreshArgs),

    /// Download a version into the cache
    Download(DownloadArgs),

    /// Install a downloaded version
    Install(InstallArgs),

    /// Remove an installed plugin or template
    Uninstall(UninstallArgs),

    /// Manage plugin and template sources
    Sources(SourcesArgs),

    /// Manage downloads and cached release data
    #[command(name = "cache")]
    Cache(CacheArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AssetKind;

    #[test]
    fn test_cli_parsing_list() {
        let cli = Cli::try_parse_from(["fraytools-manager", "list"]).unwrap();
        match cli.command {
            Commands::List(args) => assert_eq!(args.kind, None),
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn test_cli_parsing_list_kind() {
        let cli = Cli::try_parse_from(["fraytools-manager", "list", "--kind", "templates"]).unwrap();
        match cli.command {
            Commands::List(args) => assert_eq!(args.kind, Some(AssetKind::Template)),
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_kind() {
        assert!(Cli::try_parse_from(["fraytools-manager", "list", "--kind", "skin"]).is_err());
    }

    #[test]
    fn test_cli_parsing_install() {
        let cli = Cli::try_parse_from([
            "fraytools-manager",
            "install",
            "stagetemplate",
            "--version",
            "v1.0.0",
            "--download",
        ])
        .unwrap();
        match cli.command {
            Commands::Install(args) => {
                assert_eq!(args.id, "stagetemplate");
                assert_eq!(args.version.as_deref(), Some("v1.0.0"));
                assert!(args.download);
                assert_eq!(args.kind, None);
            }
            _ => panic!("Expected Install command"),
        }
    }

    #[test]
    fn test_cli_parsing_refresh_all() {
        let cli = Cli::try_parse_from(["fraytools-manager", "refresh"]).unwrap();
        match cli.command {
            Commands::Refresh(args) => assert_eq!(args.id, None),
            _ => panic!("Expected Refresh command"),
        }
    }

    #[test]
    fn test_cli_parsing_uninstall_yes() {
        let cli = Cli::try_parse_from(["fraytools-manager", "uninstall", "x", "-y"]).unwrap();
        match cli.command {
            Commands::Uninstall(args) => assert!(args.yes),
            _ => panic!("Expected Uninstall command"),
        }
    }

    #[test]
    fn test_cli_parsing_sources_add() {
        let cli = Cli::try_parse_from([
            "fraytools-manager",
            "sources",
            "add",
            "someone",
            "my-plugin",
            "com.someone.Plugin",
            "--kind",
            "plugin",
        ])
        .unwrap();
        match cli.command {
            Commands::Sources(SourcesArgs {
                command: Some(SourcesSubcommand::Add(args)),
            }) => {
                assert_eq!(args.owner, "someone");
                assert_eq!(args.kind, AssetKind::Plugin);
            }
            _ => panic!("Expected Sources Add command"),
        }
    }

    #[test]
    fn test_cli_parsing_cache_default() {
        let cli = Cli::try_parse_from(["fraytools-manager", "cache"]).unwrap();
        match cli.command {
            Commands::Cache(args) => assert!(args.command.is_none()),
            _ => panic!("Expected Cache command"),
        }
    }

    #[test]
    fn test_cli_cache_verify_requires_version() {
        assert!(Cli::try_parse_from(["fraytools-manager", "cache", "verify", "x"]).is_err());
    }

    #[test]
    fn test_cli_parsing_version() {
        let cli = Cli::try_parse_from(["fraytools-manager", "version"]).unwrap();
        assert!(matches!(cli.command, Commands::Version));
    }

    #[test]
    fn test_cli_global_verbose() {
        let cli = Cli::try_parse_from(["fraytools-manager", "list", "-v"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_parsing_completions() {
        let cli =
            Cli::try_parse_from(["fraytools-manager", "completions", "--shell", "bash"]).unwrap();
        match cli.command {
            Commands::Completions(args) => {
                assert_eq!(args.shell, clap_complete::Shell::Bash);
            }
            _ => panic!("Expected Completions command"),
        }
    }

    #[test]
    fn test_cli_completions_shell_is_validated() {
        let cli =
            Cli::try_parse_from(["fraytools-manager", "completions", "--shell", "ZSH"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Completions(args) if args.shell == clap_complete::Shell::Zsh
        ));

        let err = Cli::try_parse_from(["fraytools-manager", "completions", "--shell", "tcsh"])
            .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }
}
