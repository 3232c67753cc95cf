//! Archive extraction
//!
//! GitHub release zips usually wrap their contents in one top-level
//! directory (`owner-repo-sha/` for zipballs). FrayTools expects the
//! manifest directly in the install directory, so that wrapper is stripped.

use std::collections::BTreeSet;
use std::fs::{self, File};
use std::io;
use std::path::{Component, Path, PathBuf};

use zip::ZipArchive;

use crate::error::{self, Result};

/// Extract `archive` into `dest`, dropping a single shared root directory
///
/// Entries whose names would escape `dest` are skipped.
pub fn extract_without_root(archive: &Path, dest: &Path) -> Result<()> {
    let file = File::open(archive).map_err(|e| error::fs::read_failed(archive, e))?;
    let mut zip = ZipArchive::new(file).map_err(|e| error::install::invalid_archive(archive, e))?;
    fs::create_dir_all(dest).map_err(|e| error::fs::write_failed(dest, e))?;

    let names: Vec<Option<PathBuf>> = (0..zip.len())
        .map(|i| {
            zip.by_index_raw(i)
                .ok()
                .and_then(|f| f.enclosed_name().map(Path::to_path_buf))
        })
        .collect();
    let root = shared_root(names.iter().flatten());

    for (i, name) in names.into_iter().enumerate() {
        let Some(name) = name else {
            continue;
        };
        let relative = match &root {
            Some(root) => match name.strip_prefix(root) {
                Ok(rest) => rest.to_path_buf(),
                Err(_) => continue,
            },
            None => name,
        };
        if relative.as_os_str().is_empty() {
            continue;
        }

        let mut entry = zip
            .by_index(i)
            .map_err(|e| error::install::invalid_archive(archive, e))?;
        let out = dest.join(&relative);

        if entry.is_dir() {
            fs::create_dir_all(&out).map_err(|e| error::fs::write_failed(&out, e))?;
            continue;
        }
        if let Some(parent) = out.parent() {
            fs::create_dir_all(parent).map_err(|e| error::fs::write_failed(parent, e))?;
        }
        let mut target = File::create(&out).map_err(|e| error::fs::write_failed(&out, e))?;
        io::copy(&mut entry, &mut target)
            .map_err(|e| error::install::invalid_archive(archive, e))?;
    }

    Ok(())
}

/// The top-level directory every entry lives under, if there is exactly one
fn shared_root<'a>(names: impl Iterator<Item = &'a PathBuf>) -> Option<PathBuf> {
    let mut tops = BTreeSet::new();
    let mut nested = false;

    for name in names {
        let mut components = name.components().filter(|c| matches!(c, Component::Normal(_)));
        if let Some(first) = components.next() {
            tops.insert(first.as_os_str().to_os_string());
        }
        if components.next().is_some() {
            nested = true;
        }
    }

    // a lone top-level file is content, not a wrapper
    if tops.len() == 1 && nested {
        tops.into_iter().next().map(PathBuf::from)
    } else {
        None
    }
}
