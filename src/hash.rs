//! BLAKE3 hashing utilities for download integrity
//!
//! Every archive in the download cache gets a sidecar `<archive>.blake3` file
//! holding its digest, written right after the download completes.

use std::fs::{self, File};
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use blake3::Hasher;

use crate::error::{self, ManagerError, Result};

/// Hash prefix for BLAKE3 hashes
pub const HASH_PREFIX: &str = "blake3:";

const DIGEST_EXTENSION: &str = "blake3";

/// Calculate BLAKE3 hash of a file
pub fn hash_file(path: &Path) -> Result<String> {
    let file = File::open(path).map_err(|e| error::fs::read_failed(path, e))?;

    let mut reader = BufReader::new(file);
    let mut hasher = Hasher::new();
    let mut buffer = [0u8; 8192];

    loop {
        let bytes_read = reader
            .read(&mut buffer)
            .map_err(|e| error::fs::read_failed(path, e))?;

        if bytes_read == 0 {
            break;
        }

        hasher.update(&buffer[..bytes_read]);
    }

    Ok(format!("{}{}", HASH_PREFIX, hasher.finalize().to_hex()))
}

/// Verify a hash matches the expected value
pub fn verify_hash(expected: &str, actual: &str) -> bool {
    let normalize = |h: &str| {
        let h = h.trim();
        if h.starts_with(HASH_PREFIX) {
            h.to_string()
        } else {
            format!("{HASH_PREFIX}{h}")
        }
    };

    normalize(expected) == normalize(actual)
}

/// Path of the digest sidecar for an archive
pub fn digest_path(archive: &Path) -> PathBuf {
    let mut name = archive.file_name().unwrap_or_default().to_os_string();
    name.push(".");
    name.push(DIGEST_EXTENSION);
    archive.with_file_name(name)
}

/// Hash an archive and store the digest next to it
pub fn write_digest(archive: &Path) -> Result<String> {
    let digest = hash_file(archive)?;
    let path = digest_path(archive);
    fs::write(&path, format!("{digest}\n")).map_err(|e| error::fs::write_failed(&path, e))?;
    Ok(digest)
}

/// Read the stored digest of an archive, if one was recorded
pub fn read_digest(archive: &Path) -> Result<Option<String>> {
    let path = digest_path(archive);
    if !path.is_file() {
        return Ok(None);
    }
    let digest = fs::read_to_string(&path).map_err(|e| error::fs::read_failed(&path, e))?;
    Ok(Some(digest.trim().to_string()))
}

/// Check an archive against its stored digest
///
/// Returns `Ok(false)` when no digest was recorded.
pub fn verify_archive(archive: &Path) -> Result<bool> {
    let Some(expected) = read_digest(archive)? else {
        return Ok(false);
    };
    let actual = hash_file(archive)?;
    if verify_hash(&expected, &actual) {
        Ok(true)
    } else {
        Err(ManagerError::IntegrityMismatch {
            path: archive.display().to_string(),
            expected,
            actual,
        })
    }
}
