//! The catalog joins sources, cached release data and installed manifests
//!
//! It is loaded once per command from disk. Everything except [`Catalog::refresh`]
//! works offline.

pub mod entry;

use std::collections::HashSet;

use crate::cache::SourcesCache;
use crate::config::SourcesConfig;
use crate::domain::{AssetConfig, AssetKind, InstalledManifest};
use crate::error::{ManagerError, Result};
use crate::github::{self, ReleaseProvider};
use crate::installer;
use crate::paths::Layout;
use crate::ui::Verbosity;

pub use entry::AssetEntry;

/// Loaded state of the manager
#[derive(Debug)]
pub struct Catalog {
    pub layout: Layout,
    pub sources: SourcesConfig,
    pub cache: SourcesCache,
    plugins: Vec<InstalledManifest>,
    templates: Vec<InstalledManifest>,
}

/// Outcome of a refresh
#[derive(Debug, Default)]
pub struct RefreshReport {
    /// Sources refreshed, with the number of versions found
    pub refreshed: Vec<(AssetKind, String, usize)>,
    pub failed: Vec<(AssetKind, String, ManagerError)>,
    /// Refreshing stopped early on the API rate limit
    pub rate_limited: bool,
}

impl RefreshReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty() && !self.rate_limited
    }
}

impl Catalog {
    /// Load sources (writing the defaults on first run), the release cache
    /// and installed manifests
    pub fn load(layout: Layout, verbosity: &Verbosity) -> Result<Self> {
        layout.ensure()?;
        let sources = SourcesConfig::load_or_default(&layout.sources_file(), false)?;
        let cache = SourcesCache::read_from_disk(&layout.sources_lock_file())?;
        let plugins = installer::detect(&layout, AssetKind::Plugin, verbosity)?;
        let templates = installer::detect(&layout, AssetKind::Template, verbosity)?;

        verbosity.detail(format!(
            "Loaded {} sources, {} cached, {} installed",
            sources.plugins.len() + sources.templates.len(),
            cache.len(),
            plugins.len() + templates.len()
        ));

        Ok(Self {
            layout,
            sources,
            cache,
            plugins,
            templates,
        })
    }

    fn manifests(&self, kind: AssetKind) -> &[InstalledManifest] {
        match kind {
            AssetKind::Plugin => &self.plugins,
            AssetKind::Template => &self.templates,
        }
    }

    /// Entries of one kind: installed ones first, then configured ones that
    /// are not installed
    ///
    /// When two directories carry the same manifest id, the first one in
    /// directory order wins.
    pub fn entries(&self, kind: AssetKind) -> Vec<AssetEntry> {
        let mut seen = HashSet::new();
        let mut entries = Vec::new();

        for manifest in self.manifests(kind) {
            if !seen.insert(manifest.id().to_string()) {
                continue;
            }
            entries.push(AssetEntry {
                kind,
                config: self.sources.find(manifest.id(), kind).cloned(),
                asset: self.cache.get(manifest.id(), kind).cloned(),
                manifest: Some(manifest.clone()),
            });
        }

        for config in self.sources.entries(kind) {
            if seen.contains(&config.id) {
                continue;
            }
            entries.push(AssetEntry {
                kind,
                manifest: None,
                asset: self.cache.get(&config.id, kind).cloned(),
                config: Some(config.clone()),
            });
        }

        entries
    }

    /// Find an entry by id, in plugins first unless `kind` is given
    pub fn resolve(&self, id: &str, kind: Option<AssetKind>) -> Result<AssetEntry> {
        AssetKind::selected(kind)
            .into_iter()
            .flat_map(|kind| self.entries(kind))
            .find(|entry| entry.id() == id)
            .ok_or_else(|| ManagerError::UnknownAsset { id: id.to_string() })
    }

    /// Fetch release data for configured sources and store it in the cache
    ///
    /// With `id`, only that source is refreshed. A failing source does not
    /// stop the others, except for the rate limit which fails every request
    /// after it.
    pub fn refresh(
        &mut self,
        provider: &dyn ReleaseProvider,
        id: Option<&str>,
        kind: Option<AssetKind>,
        verbosity: &Verbosity,
    ) -> Result<RefreshReport> {
        let targets = self.refresh_targets(id, kind)?;
        let mut report = RefreshReport::default();

        for (kind, source) in targets {
            verbosity.detail(format!("Fetching {} from {}", source.id, source.repository()));
            match github::fetch_asset(provider, &source, kind) {
                Ok(asset) => {
                    report
                        .refreshed
                        .push((kind, source.id.clone(), asset.versions.len()));
                    self.cache.add(asset, kind);
                }
                Err(ManagerError::RateLimited) => {
                    report.rate_limited = true;
                    break;
                }
                Err(e) => report.failed.push((kind, source.id.clone(), e)),
            }
        }

        if !report.refreshed.is_empty() {
            self.cache.write_to_disk(&self.layout.sources_lock_file())?;
        }
        Ok(report)
    }

    fn refresh_targets(
        &self,
        id: Option<&str>,
        kind: Option<AssetKind>,
    ) -> Result<Vec<(AssetKind, AssetConfig)>> {
        let targets: Vec<_> = AssetKind::selected(kind)
            .into_iter()
            .flat_map(|kind| {
                self.sources
                    .entries(kind)
                    .iter()
                    .filter(|source| id.is_none_or(|id| source.id == id))
                    .map(move |source| (kind, source.clone()))
            })
            .collect();

        match id {
            Some(id) if targets.is_empty() => Err(ManagerError::SourceNotFound { id: id.to_string() }),
            // an id configured for both kinds refreshes as a plugin
            Some(_) => Ok(targets.into_iter().take(1).collect()),
            None => Ok(targets),
        }
    }

    /// Add a source and save sources.json
    pub fn add_source(&mut self, owner: &str, repo: &str, id: &str, kind: AssetKind) -> Result<()> {
        self.sources.add_entry(owner, repo, id, kind)?;
        self.sources.save(&self.layout.sources_file())
    }

    /// Edit a source and save sources.json
    ///
    /// Cached release data of the old entry no longer describes the source,
    /// so it is dropped.
    pub fn edit_source(
        &mut self,
        id: &str,
        owner: &str,
        repo: &str,
        new_id: Option<&str>,
        kind: AssetKind,
    ) -> Result<()> {
        self.sources.edit_entry(id, owner, repo, new_id, kind)?;
        self.sources.save(&self.layout.sources_file())?;
        if self.cache.delete(id, kind).is_some() {
            self.cache.write_to_disk(&self.layout.sources_lock_file())?;
        }
        Ok(())
    }

    /// Remove a source and its cached release data
    pub fn remove_source(&mut self, id: &str, kind: AssetKind) -> Result<AssetConfig> {
        let removed = self.sources.remove_entry(id, kind)?;
        self.sources.save(&self.layout.sources_file())?;
        if self.cache.delete(id, kind).is_some() {
            self.cache.write_to_disk(&self.layout.sources_lock_file())?;
        }
        Ok(removed)
    }

    /// Restore the default sources
    ///
    /// Needs no loaded catalog so a broken `sources.json` can be replaced.
    pub fn reset_sources(layout: &Layout) -> Result<SourcesConfig> {
        layout.ensure()?;
        SourcesConfig::load_or_default(&layout.sources_file(), true)
    }

    /// Kind a configured source id belongs to, plugins first
    pub fn source_kind(&self, id: &str, kind: Option<AssetKind>) -> Result<AssetKind> {
        AssetKind::selected(kind)
            .into_iter()
            .find(|kind| self.sources.find(id, *kind).is_some())
            .ok_or_else(|| ManagerError::SourceNotFound { id: id.to_string() })
    }
}
