//! Installing downloaded versions into FrayToolsData
//!
//! This module handles:
//! - Detecting installed plugins and templates from their manifests
//! - Extracting a cached archive into the install directory
//! - Recording the installed tag in a version marker
//! - Removing installed assets

pub mod detection;
pub mod unzip;

use std::fs;
use std::path::{Path, PathBuf};

use crate::cache;
use crate::domain::AssetKind;
use crate::error::{self, ManagerError, Result};
use crate::paths::{self, Layout, VERSION_MARKER};

pub use detection::detect;
pub use unzip::extract_without_root;

/// Install a downloaded version
///
/// With `existing` set (an installation with the same id was detected), the
/// archive is extracted over that directory so a user-chosen directory name
/// survives. Otherwise `<data>/<kind>/<id>` is emptied and used.
///
/// A download that fails to open as an archive is removed from the cache so
/// it can be fetched again.
pub fn install_version(
    layout: &Layout,
    id: &str,
    tag: &str,
    kind: AssetKind,
    existing: Option<&Path>,
) -> Result<PathBuf> {
    paths::check_id(id)?;
    let archive = layout.download_file(id, tag, kind);
    if !archive.is_file() {
        return Err(error::install::not_downloaded(id, tag));
    }

    let dest = match existing {
        Some(path) => path.to_path_buf(),
        None => {
            let dest = layout.install_root(kind).join(id);
            clear_dir(&dest)?;
            dest
        }
    };

    if let Err(e) = extract_without_root(&archive, &dest) {
        if matches!(e, ManagerError::InvalidArchive { .. }) {
            cache::remove_download(layout, id, tag, kind)?;
        }
        return Err(e);
    }

    write_version_marker(&dest, tag)?;
    Ok(dest)
}

/// Remove an installed asset directory
pub fn uninstall(id: &str, path: &Path) -> Result<()> {
    if !path.is_dir() {
        return Err(ManagerError::NotInstalled { id: id.to_string() });
    }
    fs::remove_dir_all(path).map_err(|e| error::fs::write_failed(path, e))
}

/// Tag recorded by the last install into `dir`
pub fn read_version_marker(dir: &Path) -> Option<String> {
    fs::read_to_string(dir.join(VERSION_MARKER))
        .ok()
        .map(|tag| tag.trim_end().to_string())
        .filter(|tag| !tag.is_empty())
}

fn write_version_marker(dir: &Path, tag: &str) -> Result<()> {
    let path = dir.join(VERSION_MARKER);
    fs::write(&path, tag).map_err(|e| error::fs::write_failed(&path, e))
}

/// Create `dir` or empty it
fn clear_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| error::fs::write_failed(dir, e))?;
    for entry in fs::read_dir(dir).map_err(|e| error::fs::read_failed(dir, e))? {
        let path = entry.map_err(|e| error::fs::read_failed(dir, e))?.path();
        let removed = if path.is_dir() {
            fs::remove_dir_all(&path)
        } else {
            fs::remove_file(&path)
        };
        removed.map_err(|e| error::fs::write_failed(&path, e))?;
    }
    Ok(())
}
