use clap::{Parser, Subcommand};

use crate::domain::AssetKind;

/// Arguments for sources command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List configured sources:\n    fraytools-manager sources\n\n\
                  Add a plugin source:\n    fraytools-manager sources add someone my-plugin com.someone.MyPlugin --kind plugin\n\n\
                  Point a template at a fork:\n    fraytools-manager sources edit stagetemplate someone stage-template-fork --kind template\n\n\
                  Restore the default sources:\n    fraytools-manager sources reset")]
pub struct SourcesArgs {
    #[command(subcommand)]
    pub command: Option<SourcesSubcommand>,
}

/// Sources subcommands
#[derive(Subcommand, Debug)]
pub enum SourcesSubcommand {
    /// List configured sources
    List(SourcesListArgs),

    /// Add a source
    Add(AddSourceArgs),

    /// Change the repository (or id) of a source
    Edit(EditSourceArgs),

    /// Remove a source and its cached release data
    Remove(RemoveSourceArgs),

    /// Replace all sources with the defaults
    Reset(ResetSourcesArgs),
}

/// Arguments for sources list command
#[derive(Parser, Debug)]
pub struct SourcesListArgs {
    /// Only list sources of this kind
    #[arg(long, short = 'k')]
    pub kind: Option<AssetKind>,
}

/// Arguments for sources add command
#[derive(Parser, Debug)]
pub struct AddSourceArgs {
    /// GitHub user or organization
    pub owner: String,

    /// GitHub repository name
    pub repo: String,

    /// Manifest id of the plugin, or resourceId of the template
    pub id: String,

    /// Kind of asset the repository publishes
    #[arg(long, short = 'k')]
    pub kind: AssetKind,
}

/// Arguments for sources edit command
#[derive(Parser, Debug)]
pub struct EditSourceArgs {
    /// Id of the source to edit
    pub id: String,

    /// New GitHub user or organization
    pub owner: String,

    /// New GitHub repository name
    pub repo: String,

    /// Rename the source's id
    #[arg(long, value_name = "ID")]
    pub new_id: Option<String>,

    /// Look the id up in this kind only
    #[arg(long, short = 'k')]
    pub kind: Option<AssetKind>,
}

/// Arguments for sources remove command
#[derive(Parser, Debug)]
pub struct RemoveSourceArgs {
    /// Id of the source to remove
    pub id: String,

    /// Look the id up in this kind only
    #[arg(long, short = 'k')]
    pub kind: Option<AssetKind>,
}

/// Arguments for sources reset command
#[derive(Parser, Debug)]
pub struct ResetSourcesArgs {
    /// Skip confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}
