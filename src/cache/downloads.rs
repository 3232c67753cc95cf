//! Download cache: release archives per asset and version

use std::fs::{self, File};
use std::io::{Read, Write};

use tempfile::NamedTempFile;
use zip::ZipArchive;

use crate::domain::{Asset, AssetKind};
use crate::error::{self, Result};
use crate::github::ArchiveFetcher;
use crate::hash;
use crate::paths::{self, Layout};
use crate::ui::ProgressReporter;

const CHUNK_SIZE: usize = 128 * 1024;

/// Whether the archive for `id`/`tag` is in the download cache
pub fn is_downloaded(layout: &Layout, id: &str, tag: &str, kind: AssetKind) -> bool {
    layout.download_file(id, tag, kind).is_file()
}

/// Download one version of an asset into the download cache
///
/// The archive is streamed into a temporary file inside the download
/// directory and only moved into place once it opens as a zip, so an
/// interrupted or corrupt download never leaves a cache entry behind.
pub fn download_version(
    layout: &Layout,
    fetcher: &dyn ArchiveFetcher,
    asset: &Asset,
    kind: AssetKind,
    tag: &str,
    reporter: &mut dyn ProgressReporter,
) -> Result<std::path::PathBuf> {
    let version = asset
        .version(tag)
        .ok_or_else(|| error::install::version_not_found(&asset.id, tag))?;

    paths::check_id(&asset.id)?;
    let dir = layout.download_dir(&asset.id, kind);
    paths::ensure_dir(&dir)?;
    let dest = layout.download_file(&asset.id, tag, kind);

    let mut stream = fetcher.fetch(&version.url)?;
    let mut part = tempfile::Builder::new()
        .prefix(".download-")
        .suffix(".part")
        .tempfile_in(&dir)
        .map_err(|e| error::fs::write_failed(&dir, e))?;

    reporter.start(&format!("{}-{}", asset.id, tag), stream.len);
    if let Err(e) = copy_stream(stream.reader.as_mut(), &mut part, reporter) {
        reporter.abandon();
        return Err(error::github::download_failed(&version.url, e));
    }
    reporter.finish();

    validate_archive(&part)?;

    part.persist(&dest)
        .map_err(|e| error::fs::write_failed(&dest, e.error))?;
    hash::write_digest(&dest)?;

    Ok(dest)
}

fn copy_stream(
    reader: &mut dyn Read,
    out: &mut NamedTempFile,
    reporter: &mut dyn ProgressReporter,
) -> std::io::Result<()> {
    let mut buf = vec![0u8; CHUNK_SIZE];
    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            break;
        }
        out.write_all(&buf[..n])?;
        reporter.advance(n as u64);
    }
    out.flush()
}

fn validate_archive(part: &NamedTempFile) -> Result<()> {
    let file = File::open(part.path()).map_err(|e| error::fs::read_failed(part.path(), e))?;
    ZipArchive::new(file)
        .map(|_| ())
        .map_err(|e| error::install::invalid_archive(part.path(), e))
}

/// Remove one downloaded version and its digest
///
/// Returns whether an archive was removed.
pub fn remove_download(layout: &Layout, id: &str, tag: &str, kind: AssetKind) -> Result<bool> {
    paths::check_id(id)?;
    let archive = layout.download_file(id, tag, kind);
    let digest = hash::digest_path(&archive);

    if digest.exists() {
        fs::remove_file(&digest).map_err(|e| error::fs::write_failed(&digest, e))?;
    }
    if !archive.exists() {
        return Ok(false);
    }
    fs::remove_file(&archive).map_err(|e| error::fs::write_failed(&archive, e))?;
    Ok(true)
}

/// Remove every downloaded version of an asset
pub fn remove_downloads(layout: &Layout, id: &str, kind: AssetKind) -> Result<bool> {
    paths::check_id(id)?;
    let dir = layout.download_dir(id, kind);
    if !dir.exists() {
        return Ok(false);
    }
    fs::remove_dir_all(&dir).map_err(|e| {
        error::cache::operation_failed(format!("Failed to remove {}: {e}", dir.display()))
    })?;
    Ok(true)
}

/// Remove every download, keeping the release metadata cache
pub fn clear_downloads(layout: &Layout) -> Result<()> {
    let cache_dir = layout.cache_dir();
    if !cache_dir.exists() {
        return Ok(());
    }

    for entry in fs::read_dir(&cache_dir).map_err(|e| {
        error::cache::operation_failed(format!("Failed to read cache directory: {e}"))
    })? {
        let entry = entry.map_err(|e| {
            error::cache::operation_failed(format!("Failed to read entry: {e}"))
        })?;
        if entry.path().is_dir() {
            fs::remove_dir_all(entry.path()).map_err(|e| {
                error::cache::operation_failed(format!("Failed to clear cache: {e}"))
            })?;
        }
    }

    Ok(())
}
