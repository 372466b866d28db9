//! Application state shared across handlers.

use crate::config::Config;
use crate::covers::{CoverPipeline, CoverRoot, SeedSource, ThreadRngSeeds, raster};
use crate::error::Result;
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<Config>,
    /// Cover pipeline.
    pub pipeline: Arc<CoverPipeline>,
}

impl AppState {
    /// Create state from configuration, opening the cover root.
    pub fn new(config: Config) -> Result<Self> {
        Self::with_seeds(config, Arc::new(ThreadRngSeeds))
    }

    /// Create state with an explicit seed source.
    pub fn with_seeds(config: Config, seeds: Arc<dyn SeedSource>) -> Result<Self> {
        let root = CoverRoot::open(&config.covers.root)?;
        raster::init_fonts(config.fonts.dir.as_deref());

        tracing::info!(
            root = %root.path().display(),
            max_concurrent = config.processing.max_concurrent,
            timeout_ms = config.processing.timeout_ms,
            cache = config.cache.enabled,
            "Cover pipeline ready"
        );

        let pipeline = CoverPipeline::new(root, &config, seeds);
        Ok(Self {
            config: Arc::new(config),
            pipeline: Arc::new(pipeline),
        })
    }

    /// Quality used when a request carries none.
    pub fn default_quality(&self) -> u8 {
        self.config.covers.default_quality
    }
}
