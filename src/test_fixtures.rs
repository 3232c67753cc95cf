//! Test fixtures shared by unit tests
//!
//! Builds release archives in memory and lays out installed plugins and
//! templates the way FrayTools stores them.

use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use zip::ZipWriter;
use zip::write::FileOptions;

use crate::paths::Layout;

/// Build a zip archive from `(name, contents)` pairs
///
/// Names ending in `/` become directory entries.
///
/// # Panics
///
/// Panics if the archive cannot be written.
#[must_use]
pub fn zip_bytes(entries: &[(&str, &str)]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = FileOptions::default();

    for (name, contents) in entries {
        if name.ends_with('/') {
            writer
                .add_directory(*name, options)
                .expect("Failed to add directory");
        } else {
            writer.start_file(*name, options).expect("Failed to start file");
            writer
                .write_all(contents.as_bytes())
                .expect("Failed to write file");
        }
    }

    writer.finish().expect("Failed to finish zip").into_inner()
}

/// Write an archive to disk, creating parent directories
///
/// # Panics
///
/// Panics if the file cannot be written.
pub fn write_zip(path: &Path, entries: &[(&str, &str)]) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create archive directory");
    }
    std::fs::write(path, zip_bytes(entries)).expect("Failed to write archive");
}

/// Temp directory with a layout rooted inside it
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_layout() -> (TempDir, Layout) {
    let temp = TempDir::new().expect("Failed to create temp directory");
    let layout = Layout::new(temp.path().join("manager"), temp.path().join("FrayToolsData"));
    layout.ensure().expect("Failed to create layout");
    (temp, layout)
}

/// JSON for a plugin `manifest.json`
#[must_use]
pub fn plugin_manifest_json(id: &str, version: &str) -> String {
    format!(
        r#"{{"name": "Test Plugin", "type": "publisher", "id": "{id}", "version": "{version}", "description": "A test plugin"}}"#
    )
}

/// JSON for a template `library/manifest.json`
#[must_use]
pub fn template_manifest_json(id: &str) -> String {
    format!(r#"{{"resourceId": "{id}", "content": []}}"#)
}

/// Install a plugin by hand under `<data>/plugins/<dir>`
///
/// # Panics
///
/// Panics if the files cannot be written.
pub fn install_plugin(layout: &Layout, dir: &str, id: &str, version: &str) -> PathBuf {
    let path = layout.data_dir.join("plugins").join(dir);
    std::fs::create_dir_all(&path).expect("Failed to create plugin directory");
    std::fs::write(path.join("manifest.json"), plugin_manifest_json(id, version))
        .expect("Failed to write manifest");
    path
}

/// Install a template by hand under `<data>/templates/<dir>`
///
/// # Panics
///
/// Panics if the files cannot be written.
pub fn install_template(layout: &Layout, dir: &str, id: &str) -> PathBuf {
    let path = layout.data_dir.join("templates").join(dir);
    std::fs::create_dir_all(path.join("library")).expect("Failed to create template directory");
    std::fs::write(path.join("library").join("manifest.json"), template_manifest_json(id))
        .expect("Failed to write manifest");
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zip_bytes_readable() {
        let bytes = zip_bytes(&[("root/", ""), ("root/a.txt", "hello")]);
        let archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 2);
    }

    #[test]
    fn test_install_helpers() {
        let (_temp, layout) = create_layout();
        let plugin = install_plugin(&layout, "exporter", "com.example.Exporter", "1.0.0");
        let template = install_template(&layout, "character", "charactertemplate");
        assert!(plugin.join("manifest.json").is_file());
        assert!(template.join("library/manifest.json").is_file());
    }
}
