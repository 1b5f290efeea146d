//! Startup configuration for a browser session.

use anyhow::{Context, Result};
use data_loader::{Catalog, LoadOptions};
use pipeline::DEFAULT_RECOMMENDATION_LIMIT;
use posters::PosterResolver;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Everything needed to load the catalog and build a `MovieBrowser`.
#[derive(Debug, Clone)]
pub struct BrowserConfig {
    /// CSV dataset
    pub data_path: PathBuf,
    /// Directory poster references are resolved against
    pub asset_dir: PathBuf,
    pub load_options: LoadOptions,
    /// Optional `(from, to)` leading-segment rewrite for poster references
    pub poster_rewrite: Option<(String, String)>,
    /// Recommendations per selection
    pub limit: usize,
}

impl BrowserConfig {
    pub fn new(data_path: impl Into<PathBuf>, asset_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_path: data_path.into(),
            asset_dir: asset_dir.into(),
            load_options: LoadOptions::default(),
            poster_rewrite: None,
            limit: DEFAULT_RECOMMENDATION_LIMIT,
        }
    }

    pub fn with_load_options(mut self, options: LoadOptions) -> Self {
        self.load_options = options;
        self
    }

    pub fn with_poster_rewrite(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.poster_rewrite = Some((from.into(), to.into()));
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Load the catalog once and build the browser around it.
    pub fn build(&self) -> Result<crate::MovieBrowser> {
        let catalog = Catalog::load_from_file(&self.data_path, &self.load_options)
            .with_context(|| format!("Failed to load movie dataset {}", self.data_path.display()))?;
        info!("Catalog ready with {} movies", catalog.len());

        let mut posters = PosterResolver::new(&self.asset_dir);
        if let Some((from, to)) = &self.poster_rewrite {
            posters = posters.with_prefix_rewrite(from.clone(), to.clone());
        }

        Ok(crate::MovieBrowser::new(Arc::new(catalog), posters).with_limit(self.limit))
    }
}
