//! Cache command implementation

use std::fs;

use console::Style;

use crate::cache::{self, CacheStats, SourcesCache};
use crate::cli::cache::{ClearCacheArgs, RemoveCacheArgs, VerifyCacheArgs};
use crate::cli::{CacheArgs, CacheSubcommand};
use crate::commands::helpers;
use crate::domain::AssetKind;
use crate::error::{self, Result};
use crate::hash;
use crate::paths::{self, Layout};
use crate::ui::Verbosity;

/// Run cache command
///
/// Works from the directory layout alone so a corrupt release cache can
/// still be inspected and cleared.
pub fn run(args: CacheArgs, verbosity: Verbosity) -> Result<()> {
    let layout = Layout::from_env()?;
    layout.ensure()?;
    verbosity.detail(format!("Cache directory: {}", layout.cache_dir().display()));

    match args.command {
        None => show_cache_stats(&layout, &verbosity),
        Some(CacheSubcommand::List) => list_downloads(&layout, &verbosity),
        Some(CacheSubcommand::Clear(clear_args)) => clear_cache(&layout, clear_args),
        Some(CacheSubcommand::Remove(remove_args)) => remove_cached(&layout, remove_args),
        Some(CacheSubcommand::Verify(verify_args)) => verify_download(&layout, verify_args),
    }
}

/// Number of sources with cached release data; an unreadable cache counts as empty
fn cached_sources(layout: &Layout, verbosity: &Verbosity) -> usize {
    match SourcesCache::read_from_disk(&layout.sources_lock_file()) {
        Ok(cache) => cache.len(),
        Err(e) => {
            verbosity.warn(e.to_string());
            0
        }
    }
}

fn print_stats(layout: &Layout, verbosity: &Verbosity) -> Result<CacheStats> {
    let stats = cache::cache_stats(layout, cached_sources(layout, verbosity))?;

    println!("Cache Statistics:");
    println!("  Location: {}", layout.cache_dir().display());
    println!("  Sources with release data: {}", stats.sources);
    println!("  Downloaded assets: {}", stats.assets);
    println!("  Versions: {}", stats.versions);
    println!("  Size: {}", stats.formatted_size());

    Ok(stats)
}

fn show_cache_stats(layout: &Layout, verbosity: &Verbosity) -> Result<()> {
    let stats = print_stats(layout, verbosity)?;

    if stats.sources == 0 && stats.assets == 0 {
        println!("\nCache is empty.");
    } else {
        println!("\nRun 'fraytools-manager cache list' to list downloaded versions.");
        println!("Run 'fraytools-manager cache clear' to remove everything from cache.");
        println!("Run 'fraytools-manager cache remove <id>' to remove downloads of one asset.");
    }

    Ok(())
}

fn list_downloads(layout: &Layout, verbosity: &Verbosity) -> Result<()> {
    print_stats(layout, verbosity)?;
    println!();

    let downloads = cache::list_downloads(layout)?;
    if downloads.is_empty() {
        println!("No downloads.");
        return Ok(());
    }

    println!("Downloads ({}):", downloads.len());
    for download in &downloads {
        println!(
            "  {} {} ({} version{}, {})",
            Style::new().bold().yellow().apply_to(&download.id),
            Style::new().dim().apply_to(format!("[{}]", download.kind)),
            download.tags.len(),
            if download.tags.len() == 1 { "" } else { "s" },
            download.formatted_size()
        );
        for tag in &download.tags {
            println!("    {tag}");
        }
    }

    Ok(())
}

fn clear_cache(layout: &Layout, args: ClearCacheArgs) -> Result<()> {
    // no selection clears both
    let (sources, downloads) = if args.sources || args.downloads {
        (args.sources, args.downloads)
    } else {
        (true, true)
    };

    let what = match (sources, downloads) {
        (true, true) => "downloads and cached release data",
        (true, false) => "cached release data",
        _ => "downloads",
    };
    if !helpers::confirm(&format!("Remove all {what}?"), args.yes)? {
        println!("Clear cancelled.");
        return Ok(());
    }

    if downloads {
        cache::clear_downloads(layout)?;
    }
    if sources {
        let lock = layout.sources_lock_file();
        if lock.exists() {
            fs::remove_file(&lock).map_err(error::cache::write_failed)?;
        }
    }
    println!("Cache cleared successfully.");
    Ok(())
}

/// Kind an id has downloads under, plugins first
fn downloaded_kind(layout: &Layout, id: &str, kind: Option<AssetKind>) -> Result<AssetKind> {
    paths::check_id(id)?;
    AssetKind::selected(kind)
        .into_iter()
        .find(|kind| layout.download_dir(id, *kind).is_dir())
        .ok_or_else(|| error::cache::operation_failed(format!("No downloads for '{id}'")))
}

fn remove_cached(layout: &Layout, args: RemoveCacheArgs) -> Result<()> {
    let kind = downloaded_kind(layout, &args.id, args.kind)?;

    match args.version {
        Some(tag) => {
            if !cache::remove_download(layout, &args.id, &tag, kind)? {
                return Err(error::install::not_downloaded(&args.id, &tag));
            }
            println!("Removed download: {} {tag}", args.id);
        }
        None => {
            cache::remove_downloads(layout, &args.id, kind)?;
            println!("Removed downloads: {}", args.id);
        }
    }
    Ok(())
}

fn verify_download(layout: &Layout, args: VerifyCacheArgs) -> Result<()> {
    let kind = downloaded_kind(layout, &args.id, args.kind)?;
    let archive = layout.download_file(&args.id, &args.version, kind);
    if !archive.is_file() {
        return Err(error::install::not_downloaded(&args.id, &args.version));
    }

    if hash::verify_archive(&archive)? {
        println!(
            "{} {} {} matches its recorded digest",
            Style::new().green().apply_to("✓"),
            args.id,
            args.version
        );
    } else {
        println!(
            "{} {} {} has no recorded digest",
            Style::new().yellow().apply_to("?"),
            args.id,
            args.version
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{create_layout, write_zip};

    #[test]
    fn test_clear_downloads_only_keeps_release_data() {
        let (_temp, layout) = create_layout();
        let archive = layout.download_file("stagetemplate", "v1", AssetKind::Template);
        write_zip(&archive, &[("a.txt", "a")]);
        fs::write(layout.sources_lock_file(), r#"{"plugins": {}, "templates": {}}"#).unwrap();

        clear_cache(
            &layout,
            ClearCacheArgs {
                sources: false,
                downloads: true,
                yes: true,
            },
        )
        .unwrap();

        assert!(!archive.exists());
        assert!(layout.sources_lock_file().exists());

        clear_cache(
            &layout,
            ClearCacheArgs {
                sources: true,
                downloads: false,
                yes: true,
            },
        )
        .unwrap();
        assert!(!layout.sources_lock_file().exists());
    }

    #[test]
    fn test_corrupt_release_cache_counts_as_empty() {
        let (_temp, layout) = create_layout();
        fs::write(layout.sources_lock_file(), "{ nope").unwrap();
        assert_eq!(cached_sources(&layout, &Verbosity::default()), 0);
    }

    #[test]
    fn test_remove_single_version() {
        let (_temp, layout) = create_layout();
        let archive = layout.download_file("stagetemplate", "v1", AssetKind::Template);
        write_zip(&archive, &[("a.txt", "a")]);

        remove_cached(
            &layout,
            RemoveCacheArgs {
                id: "stagetemplate".to_string(),
                version: Some("v1".to_string()),
                kind: None,
            },
        )
        .unwrap();
        assert!(!archive.exists());

        let err = remove_cached(
            &layout,
            RemoveCacheArgs {
                id: "stagetemplate".to_string(),
                version: Some("v1".to_string()),
                kind: None,
            },
        )
        .unwrap_err();
        assert!(matches!(err, crate::error::ManagerError::NotDownloaded { .. }));
    }

    #[test]
    fn test_downloaded_kind_unknown_id() {
        let (_temp, layout) = create_layout();
        assert!(downloaded_kind(&layout, "nothing", None).is_err());
    }

    #[test]
    fn test_verify_detects_tampering() {
        let (_temp, layout) = create_layout();
        let archive = layout.download_file("musictemplate", "v2", AssetKind::Template);
        write_zip(&archive, &[("a.txt", "a")]);
        hash::write_digest(&archive).unwrap();

        let args = || VerifyCacheArgs {
            id: "musictemplate".to_string(),
            version: "v2".to_string(),
            kind: Some(AssetKind::Template),
        };
        verify_download(&layout, args()).unwrap();

        std::fs::write(&archive, "tampered").unwrap();
        let err = verify_download(&layout, args()).unwrap_err();
        assert!(matches!(err, crate::error::ManagerError::IntegrityMismatch { .. }));
    }
}
