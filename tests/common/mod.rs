//! Common test utilities for fraytools-manager integration tests

use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;
use zip::ZipWriter;
use zip::write::FileOptions;

/// Unreachable API endpoint so tests never talk to GitHub
const OFFLINE_API: &str = "http://127.0.0.1:9";

/// An isolated manager directory and FrayTools data directory
pub struct TestEnv {
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Manager directory (`sources.json`, `cache/`)
    pub home: PathBuf,
    /// FrayTools data directory (`plugins/`, `templates/`)
    pub data: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let home = temp.path().join("manager");
        let data = temp.path().join("FrayToolsData");
        Self { temp, home, data }
    }

    /// Command running the binary against this environment
    #[allow(deprecated)]
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("fraytools-manager").unwrap();
        cmd.env("FRAYTOOLS_MANAGER_HOME", &self.home);
        cmd.env("FRAYTOOLS_DATA_DIR", &self.data);
        cmd.env("FRAYTOOLS_MANAGER_GITHUB_API", OFFLINE_API);
        cmd.env("NO_COLOR", "1");
        cmd
    }

    /// Write a file relative to the temp root
    #[allow(dead_code)]
    pub fn write_file(&self, path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Seed `cache/sources-lock.json`
    #[allow(dead_code)]
    pub fn write_sources_lock(&self, json: &str) {
        self.write_file(&self.home.join("cache").join("sources-lock.json"), json);
    }

    /// Place a release archive in the download cache
    #[allow(dead_code)]
    pub fn write_download(&self, kind_dir: &str, id: &str, tag: &str, entries: &[(&str, &str)]) -> PathBuf {
        let path = self
            .home
            .join("cache")
            .join(kind_dir)
            .join(id)
            .join(format!("{id}-{tag}.zip"));
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create download directory");
        }
        std::fs::write(&path, zip_bytes(entries)).expect("Failed to write archive");
        path
    }

    /// Lay out an installed plugin by hand
    #[allow(dead_code)]
    pub fn install_plugin(&self, dir: &str, id: &str, version: &str) -> PathBuf {
        let path = self.data.join("plugins").join(dir);
        self.write_file(&path.join("manifest.json"), &plugin_manifest(id, version));
        path
    }

    /// Read a file from the data directory
    #[allow(dead_code)]
    pub fn read_data_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.data.join(path)).expect("Failed to read file")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// JSON for a plugin `manifest.json`
#[allow(dead_code)]
pub fn plugin_manifest(id: &str, version: &str) -> String {
    format!(
        r#"{{"name": "Content Exporter", "type": "publisher", "id": "{id}", "version": "{version}", "description": "Exports content"}}"#
    )
}

/// Build a zip archive from `(name, contents)` pairs; names ending in `/`
/// become directory entries
#[allow(dead_code)]
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_directories_are_separate() {
        let env = TestEnv::new();
        assert_ne!(env.home, env.data);
        assert!(env.home.starts_with(env.temp.path()));
    }

    #[test]
    fn test_write_download_path() {
        let env = TestEnv::new();
        let path = env.write_download("plugins", "a.b", "v1", &[("manifest.json", "{}")]);
        assert!(path.ends_with("cache/plugins/a.b/a.b-v1.zip"));
        assert!(path.is_file());
    }
}
