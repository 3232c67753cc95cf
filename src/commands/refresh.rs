//! Refresh command implementation
//!
//! Fetches release data for configured sources. Every source is attempted
//! even when some fail; the command reports failure at the end.

use console::Style;

use crate::cli::RefreshArgs;
use crate::commands::helpers;
use crate::error::{ManagerError, Result};
use crate::github::GitHubClient;
use crate::ui::Verbosity;

/// Run refresh command
pub fn run(args: RefreshArgs, verbosity: Verbosity) -> Result<()> {
    let mut catalog = helpers::load_catalog(&verbosity)?;
    let client = GitHubClient::from_env()?;

    let report = catalog.refresh(&client, args.id.as_deref(), args.kind, &verbosity)?;

    for (kind, id, versions) in &report.refreshed {
        println!(
            "{} {} {}",
            Style::new().green().apply_to("✓"),
            id,
            Style::new()
                .dim()
                .apply_to(format!("({kind}, {versions} version{})", plural(*versions)))
        );
    }
    for (_, id, e) in &report.failed {
        eprintln!("{} {id}: {e}", Style::new().red().apply_to("✗"));
    }

    if report.is_success() {
        return Ok(());
    }
    if report.rate_limited {
        return Err(ManagerError::RateLimited);
    }

    let ids: Vec<&str> = report.failed.iter().map(|(_, id, _)| id.as_str()).collect();
    Err(ManagerError::SourceFetchFailed {
        id: ids.join(", "),
        reason: format!(
            "{} of {} sources failed",
            report.failed.len(),
            report.failed.len() + report.refreshed.len()
        ),
    })
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}
