//! Configuration file handling for FrayTools Manager
//!
//! This module contains data structures for:
//! - `sources.json` - GitHub repositories providing plugins and templates

pub mod sources;

pub use sources::SourcesConfig;
