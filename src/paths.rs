//! Directory layout for the manager and for FrayTools data
//!
//! ```text
//! ~/.config/FrayToolsManager/        (~/FrayToolsManager on Windows)
//! ├── sources.json
//! └── cache/
//!     ├── sources-lock.json
//!     ├── plugins/<id>/<id>-<tag>.zip
//!     └── templates/<id>/<id>-<tag>.zip
//!
//! ~/FrayToolsData/
//! ├── plugins/<dir>/manifest.json
//! └── templates/<dir>/library/manifest.json
//! ```
//!
//! Both roots can be overridden with `FRAYTOOLS_MANAGER_HOME` and
//! `FRAYTOOLS_DATA_DIR`.

use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::domain::AssetKind;
use crate::error::{self, Result};

/// Environment variable overriding the manager's own directory
pub const HOME_ENV: &str = "FRAYTOOLS_MANAGER_HOME";

/// Environment variable overriding the FrayTools data directory
pub const DATA_ENV: &str = "FRAYTOOLS_DATA_DIR";

/// Name of the sources configuration file
pub const SOURCES_FILE: &str = "sources.json";

/// Name of the release metadata cache file
pub const SOURCES_LOCK_FILE: &str = "sources-lock.json";

/// File written into an install directory holding the installed tag
pub const VERSION_MARKER: &str = ".fraytools-manager-version";

const CACHE_DIR: &str = "cache";

/// Resolved directory roots
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Manager directory holding `sources.json` and the cache
    pub app_dir: PathBuf,
    /// FrayTools data directory holding installed plugins and templates
    pub data_dir: PathBuf,
}

impl Layout {
    pub fn new(app_dir: impl Into<PathBuf>, data_dir: impl Into<PathBuf>) -> Self {
        Self {
            app_dir: app_dir.into(),
            data_dir: data_dir.into(),
        }
    }

    /// Resolve the layout from environment overrides or the home directory
    pub fn from_env() -> Result<Self> {
        let home = dirs::home_dir();

        let app_dir = match std::env::var_os(HOME_ENV) {
            Some(dir) => PathBuf::from(dir),
            None => default_app_dir(home.as_deref())?,
        };

        let data_dir = match std::env::var_os(DATA_ENV) {
            Some(dir) => PathBuf::from(dir),
            None => home
                .ok_or_else(|| error::fs::io_error("Could not determine home directory"))?
                .join("FrayToolsData"),
        };

        Ok(Self { app_dir, data_dir })
    }

    pub fn sources_file(&self) -> PathBuf {
        self.app_dir.join(SOURCES_FILE)
    }

    pub fn cache_dir(&self) -> PathBuf {
        self.app_dir.join(CACHE_DIR)
    }

    pub fn sources_lock_file(&self) -> PathBuf {
        self.cache_dir().join(SOURCES_LOCK_FILE)
    }

    /// Directory FrayTools loads assets of `kind` from
    pub fn install_root(&self, kind: AssetKind) -> PathBuf {
        self.data_dir.join(kind.dir_name())
    }

    /// Download directory for one asset
    pub fn download_dir(&self, id: &str, kind: AssetKind) -> PathBuf {
        self.cache_dir().join(kind.dir_name()).join(id)
    }

    /// Archive path for one downloaded version
    pub fn download_file(&self, id: &str, tag: &str, kind: AssetKind) -> PathBuf {
        self.download_dir(id, kind)
            .join(format!("{id}-{}.zip", encode_tag(tag)))
    }

    /// Create the manager, cache and install directories
    pub fn ensure(&self) -> Result<()> {
        for dir in [
            self.app_dir.clone(),
            self.cache_dir(),
            self.install_root(AssetKind::Plugin),
            self.install_root(AssetKind::Template),
        ] {
            ensure_dir(&dir)?;
        }
        Ok(())
    }
}

fn default_app_dir(home: Option<&Path>) -> Result<PathBuf> {
    let home = home.ok_or_else(|| error::fs::io_error("Could not determine home directory"))?;

    if cfg!(windows) {
        Ok(home.join("FrayToolsManager"))
    } else {
        Ok(home.join(".config").join("FrayToolsManager"))
    }
}

/// Create a directory and its parents if missing
pub fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| error::fs::write_failed(dir, e))
}

/// Whether `name` is usable as one directory name under a root
///
/// Rejects empty names, `.`, `..`, separators and anything else that is not
/// a single normal path component.
pub fn is_plain_component(name: &str) -> bool {
    if name.is_empty() || name.contains(['/', '\\']) {
        return false;
    }
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// Ids name download and install directories, so they must be one plain
/// path component
pub fn check_id(id: &str) -> Result<()> {
    if is_plain_component(id) {
        Ok(())
    } else {
        Err(error::source::invalid(format!(
            "'{id}' is not a valid id, ids cannot contain path separators or be '.' or '..'"
        )))
    }
}

/// Release names may contain path separators; keep archive names flat and
/// distinct by percent-encoding them
pub fn encode_tag(tag: &str) -> String {
    let mut out = String::with_capacity(tag.len());
    for c in tag.chars() {
        match c {
            '%' => out.push_str("%25"),
            '/' => out.push_str("%2F"),
            '\\' => out.push_str("%5C"),
            c => out.push(c),
        }
    }
    out
}

/// Inverse of [`encode_tag`]; unknown escapes are kept as written
pub fn decode_tag(encoded: &str) -> String {
    let mut out = String::with_capacity(encoded.len());
    let mut rest = encoded;
    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        let escape = rest.get(pos..pos + 3);
        let decoded = match escape {
            Some("%25") => Some('%'),
            Some("%2F" | "%2f") => Some('/'),
            Some("%5C" | "%5c") => Some('\\'),
            _ => None,
        };
        match decoded {
            Some(c) => {
                out.push(c);
                rest = &rest[pos + 3..];
            }
            None => {
                out.push('%');
                rest = &rest[pos + 1..];
            }
        }
    }
    out.push_str(rest);
    out
}
