//! Command implementations for FrayTools Manager CLI

pub mod cache;
pub mod changelog;
pub mod completions;
pub mod download;
pub mod helpers;
pub mod install;
pub mod list;
pub mod refresh;
pub mod show;
pub mod sources;
pub mod uninstall;
pub mod version;
