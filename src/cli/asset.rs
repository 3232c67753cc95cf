use clap::Parser;

use crate::domain::AssetKind;

/// Arguments for list command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List plugins and templates:\n    fraytools-manager list\n\n\
                  List templates only:\n    fraytools-manager list --kind template")]
pub struct ListArgs {
    /// Only list this kind (plugin or template)
    #[arg(long, short = 'k')]
    pub kind: Option<AssetKind>,
}

/// Arguments for show command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Manifest id of the plugin or template
    pub id: String,

    /// Look the id up in this kind only
    #[arg(long, short = 'k')]
    pub kind: Option<AssetKind>,
}

/// Arguments for changelog command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Release notes of the installed or newest version:\n    fraytools-manager changelog charactertemplate\n\n\
                  Release notes of a specific version:\n    fraytools-manager changelog charactertemplate --version v1.2.0")]
pub struct ChangelogArgs {
    /// Manifest id of the plugin or template
    pub id: String,

    /// Release tag (defaults to the installed version, else the newest)
    #[arg(long, value_name = "TAG")]
    pub version: Option<String>,

    /// Look the id up in this kind only
    #[arg(long, short = 'k')]
    pub kind: Option<AssetKind>,
}

/// Arguments for refresh command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Refresh every source:\n    fraytools-manager refresh\n\n\
                  Refresh plugin sources:\n    fraytools-manager refresh --kind plugin\n\n\
                  Refresh one source:\n    fraytools-manager refresh stagetemplate")]
pub struct RefreshArgs {
    /// Only refresh the source with this id
    pub id: Option<String>,

    /// Only refresh sources of this kind
    #[arg(long, short = 'k')]
    pub kind: Option<AssetKind>,
}

/// Arguments for download command
#[derive(Parser, Debug)]
pub struct DownloadArgs {
    /// Manifest id of the plugin or template
    pub id: String,

    /// Release tag (defaults to the installed version, else the newest)
    #[arg(long, value_name = "TAG")]
    pub version: Option<String>,

    /// Look the id up in this kind only
    #[arg(long, short = 'k')]
    pub kind: Option<AssetKind>,
}

/// Arguments for install command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Install the newest downloaded release:\n    fraytools-manager install com.fraymakers.ContentExporter\n\n\
                  Download and install a specific version:\n    fraytools-manager install stagetemplate --version v0.3.0 --download")]
pub struct InstallArgs {
    /// Manifest id of the plugin or template
    pub id: String,

    /// Release tag (defaults to the newest)
    #[arg(long, value_name = "TAG")]
    pub version: Option<String>,

    /// Look the id up in this kind only
    #[arg(long, short = 'k')]
    pub kind: Option<AssetKind>,

    /// Download the archive first when it is not cached
    #[arg(long, short = 'd')]
    pub download: bool,
}

/// Arguments for uninstall command
#[derive(Parser, Debug)]
pub struct UninstallArgs {
    /// Manifest id of the plugin or template
    pub id: String,

    /// Look the id up in this kind only
    #[arg(long, short = 'k')]
    pub kind: Option<AssetKind>,

    /// Skip confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}
