use clap::Parser;
use clap_complete::Shell;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    fraytools-manager completions --shell bash > ~/.bash_completion.d/fraytools-manager\n\n\
                  Generate zsh completions:\n    fraytools-manager completions --shell zsh > ~/.zfunc/_fraytools-manager\n\n\
                  Generate fish completions:\n    fraytools-manager completions --shell fish > ~/.config/fish/completions/fraytools-manager.fish\n\n\
                  Generate PowerShell completions:\n    fraytools-manager completions --shell powershell")]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(long, short = 's', value_enum, ignore_case = true)]
    pub shell: Shell,
}
