//! Caching for FrayTools Manager
//!
//! Two caches live under the manager's `cache/` directory:
//!
//! ```text
//! cache/
//! ├── sources-lock.json          release metadata per configured source
//! ├── plugins/<id>/<id>-<tag>.zip
//! └── templates/<id>/<id>-<tag>.zip
//! ```
//!
//! The release metadata lets every command except `refresh` and `download`
//! run offline. Each archive has a `.blake3` digest sidecar.

pub mod downloads;
pub mod sources_lock;
pub mod stats;

pub use downloads::{clear_downloads, download_version, is_downloaded, remove_download, remove_downloads};
pub use sources_lock::SourcesCache;
pub use stats::{CacheStats, cache_stats, list_downloads};
