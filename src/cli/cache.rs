use clap::{Parser, Subcommand};

use crate::domain::AssetKind;

/// Arguments for cache command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show cache statistics:\n    fraytools-manager cache\n\n\
                  List downloaded versions:\n    fraytools-manager cache list\n\n\
                  Clear downloads and release data:\n    fraytools-manager cache clear\n\n\
                  Remove one downloaded version:\n    fraytools-manager cache remove stagetemplate --version v0.2.0")]
pub struct CacheArgs {
    #[command(subcommand)]
    pub command: Option<CacheSubcommand>,
}

/// Cache subcommands
#[derive(Subcommand, Debug)]
pub enum CacheSubcommand {
    /// List downloaded versions
    List,

    /// Clear downloads and/or cached release data
    Clear(ClearCacheArgs),

    /// Remove downloads of one plugin or template
    Remove(RemoveCacheArgs),

    /// Check a download against its recorded digest
    Verify(VerifyCacheArgs),
}

/// Arguments for cache clear command
///
/// Without `--sources` or `--downloads` both are cleared.
#[derive(Parser, Debug)]
pub struct ClearCacheArgs {
    /// Clear cached release data (sources-lock.json)
    #[arg(long)]
    pub sources: bool,

    /// Clear downloaded archives
    #[arg(long)]
    pub downloads: bool,

    /// Skip confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

/// Arguments for cache remove command
#[derive(Parser, Debug)]
pub struct RemoveCacheArgs {
    /// Manifest id of the plugin or template
    pub id: String,

    /// Remove only this version
    #[arg(long, value_name = "TAG")]
    pub version: Option<String>,

    /// Look the id up in this kind only
    #[arg(long, short = 'k')]
    pub kind: Option<AssetKind>,
}

/// Arguments for cache verify command
#[derive(Parser, Debug)]
pub struct VerifyCacheArgs {
    /// Manifest id of the plugin or template
    pub id: String,

    /// Version to verify
    #[arg(long, value_name = "TAG")]
    pub version: String,

    /// Look the id up in this kind only
    #[arg(long, short = 'k')]
    pub kind: Option<AssetKind>,
}
