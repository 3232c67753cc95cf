//! Download cache statistics and listing

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::domain::AssetKind;
use crate::error::{self, Result};
use crate::paths::{self, Layout};

/// Downloaded versions of one asset
#[derive(Debug, Clone)]
pub struct CachedDownload {
    pub kind: AssetKind,
    pub id: String,
    /// Tags recovered from archive names, sorted
    pub tags: Vec<String>,
    /// Total size in bytes
    pub size: u64,
}

impl CachedDownload {
    pub fn formatted_size(&self) -> String {
        format_size(self.size)
    }
}

/// Cache statistics
#[derive(Debug, Default)]
pub struct CacheStats {
    /// Assets with at least one download
    pub assets: usize,
    /// Downloaded archives
    pub versions: usize,
    /// Total size of the download cache in bytes
    pub total_size: u64,
    /// Sources with cached release metadata
    pub sources: usize,
}

impl CacheStats {
    pub fn formatted_size(&self) -> String {
        format_size(self.total_size)
    }
}

/// Format size as human-readable string
pub fn format_size(bytes: u64) -> String {
    let size = bytes as f64;
    if size < 1024.0 {
        format!("{bytes} B")
    } else if size < 1024.0 * 1024.0 {
        format!("{:.1} KB", size / 1024.0)
    } else if size < 1024.0 * 1024.0 * 1024.0 {
        format!("{:.1} MB", size / (1024.0 * 1024.0))
    } else {
        format!("{:.1} GB", size / (1024.0 * 1024.0 * 1024.0))
    }
}

/// List downloaded archives grouped by asset, plugins first
pub fn list_downloads(layout: &Layout) -> Result<Vec<CachedDownload>> {
    let mut downloads = Vec::new();

    for kind in AssetKind::ALL {
        let kind_dir = layout.cache_dir().join(kind.dir_name());
        if !kind_dir.is_dir() {
            continue;
        }

        for entry in fs::read_dir(&kind_dir).map_err(|e| {
            error::cache::operation_failed(format!("Failed to read cache directory: {e}"))
        })? {
            let entry = entry.map_err(|e| {
                error::cache::operation_failed(format!("Failed to read entry: {e}"))
            })?;
            if !entry.path().is_dir() {
                continue;
            }

            let id = entry.file_name().to_string_lossy().to_string();
            let mut tags = archive_tags(&entry.path(), &id);
            if tags.is_empty() {
                continue;
            }
            tags.sort();

            downloads.push(CachedDownload {
                kind,
                size: dir_size(&entry.path()),
                id,
                tags,
            });
        }
    }

    downloads.sort_by(|a, b| (a.kind, &a.id).cmp(&(b.kind, &b.id)));
    Ok(downloads)
}

/// Tags of the `<id>-<tag>.zip` archives in an asset's download directory
fn archive_tags(dir: &Path, id: &str) -> Vec<String> {
    let prefix = format!("{id}-");
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };

    entries
        .flatten()
        .filter_map(|entry| {
            let name = entry.file_name().to_string_lossy().to_string();
            name.strip_prefix(&prefix)
                .and_then(|rest| rest.strip_suffix(".zip"))
                .map(paths::decode_tag)
        })
        .collect()
}

fn dir_size(path: &Path) -> u64 {
    WalkDir::new(path)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| e.metadata().ok())
        .map(|m| m.len())
        .sum()
}

/// Statistics over the download cache and release metadata
pub fn cache_stats(layout: &Layout, sources: usize) -> Result<CacheStats> {
    let downloads = list_downloads(layout)?;
    Ok(CacheStats {
        assets: downloads.len(),
        versions: downloads.iter().map(|d| d.tags.len()).sum(),
        total_size: downloads.iter().map(|d| d.size).sum(),
        sources,
    })
}
