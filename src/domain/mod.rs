//! Domain models for FrayTools Manager
//!
//! Pure domain objects: asset kinds, releases and installed manifests.
//! These types carry no IO beyond what serde needs to read and write them.

pub mod asset;
pub mod manifest;

pub use asset::{Asset, AssetConfig, AssetKind, AssetVersion};
pub use manifest::{InstalledManifest, PluginManifest, TemplateManifest};
