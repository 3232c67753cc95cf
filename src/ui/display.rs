//! Display functions for catalog entries
//!
//! `list` shows one line per entry, `show` a detail block with every known
//! version and its local state.

use console::Style;

use crate::catalog::AssetEntry;
use crate::domain::{AssetKind, InstalledManifest};
use crate::paths::Layout;

macro_rules! display_field {
    ($label:expr, $value:expr) => {
        println!("    {} {}", Style::new().bold().apply_to($label), $value);
    };
}

/// Short status of an entry for its default version
pub fn entry_status(entry: &AssetEntry) -> String {
    if entry.manifest.is_some() {
        return match entry.installed_version() {
            Some(current) => format!("installed {current}"),
            None => "installed".to_string(),
        };
    }
    match entry.default_version() {
        Some(latest) => format!("available {latest}"),
        None => "not fetched".to_string(),
    }
}

/// Whether a newer release than the installed one is known
pub fn update_available(entry: &AssetEntry) -> bool {
    let Some(latest) = entry.asset.as_ref().and_then(|a| a.latest()) else {
        return false;
    };
    entry.manifest.is_some() && !entry.is_installed(Some(&latest.tag)) && entry.config.is_some()
}

/// Print the entries of one kind as a list
pub fn display_entries(kind: AssetKind, entries: &[AssetEntry]) {
    println!("{}", Style::new().bold().apply_to(format!("{}s:", kind.label())));
    if entries.is_empty() {
        println!("  {}", Style::new().dim().apply_to("none"));
        return;
    }

    for entry in entries {
        let status = entry_status(entry);
        let status = if entry.manifest.is_some() {
            Style::new().green().apply_to(status)
        } else {
            Style::new().dim().apply_to(status)
        };
        let update = if update_available(entry) {
            format!(" {}", Style::new().yellow().apply_to("(update available)"))
        } else {
            String::new()
        };
        println!(
            "  {} {}{}",
            Style::new().bold().yellow().apply_to(entry.display_name()),
            status,
            update
        );
    }
}

/// Print everything known about one entry
pub fn display_entry_detailed(layout: &Layout, entry: &AssetEntry) {
    println!(
        "{} {}",
        Style::new().bold().yellow().apply_to(entry.display_name()),
        Style::new().dim().apply_to(format!("[{}]", entry.kind))
    );

    display_field!(format!("{}:", entry.kind.id_field()), entry.id());

    if let Some(manifest) = &entry.manifest {
        if let InstalledManifest::Plugin(plugin) = manifest {
            display_field!("Type:", &plugin.plugin_type);
            if !plugin.description.is_empty() {
                display_field!("Description:", &plugin.description);
            }
        }
        display_field!("Location:", manifest.path().display());
    }

    match &entry.config {
        Some(config) => {
            display_field!("Source:", config.repository());
        }
        None => {
            display_field!("Source:", Style::new().dim().apply_to("not configured"));
        }
    }

    if let Some(version) = entry.installed_version() {
        display_field!("Installed:", Style::new().green().apply_to(version));
    }

    let Some(asset) = &entry.asset else {
        display_field!(
            "Versions:",
            Style::new().dim().apply_to("no release data, run 'fraytools-manager refresh'")
        );
        return;
    };

    println!("    {}", Style::new().bold().apply_to("Versions:"));
    if asset.versions.is_empty() {
        println!("      {}", Style::new().dim().apply_to("no downloadable releases"));
    }
    for tag in asset.tags() {
        let mut flags = Vec::new();
        if entry.manifest.is_some() && entry.is_installed(Some(tag)) {
            flags.push(Style::new().green().apply_to("installed").to_string());
        }
        if layout.download_file(&asset.id, tag, entry.kind).is_file() {
            flags.push(Style::new().cyan().apply_to("downloaded").to_string());
        }
        if flags.is_empty() {
            println!("      {tag}");
        } else {
            println!("      {tag} ({})", flags.join(", "));
        }
    }
}
