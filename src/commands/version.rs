//! Version command implementation

use crate::error::Result;
use crate::github;

/// Run version command
pub fn run() -> Result<()> {
    println!("fraytools-manager {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  Rust version: {}", rustc_version());
    println!("  Profile: {}", build_profile());
    println!("  GitHub API: {}", github_api());

    Ok(())
}

fn rustc_version() -> &'static str {
    env!("CARGO_PKG_RUST_VERSION")
}

fn github_api() -> String {
    std::env::var(github::API_ENV).unwrap_or_else(|_| github::DEFAULT_API.to_string())
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
