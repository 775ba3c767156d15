//! # Recommendation Service
//!
//! Async facade over the recommendation engine:
//! 1. Validate the request up front
//! 2. Run the engine on the blocking pool (it is CPU-bound)
//! 3. Log result count and latency
//!
//! Clones are cheap and share one catalog and one engine, so a single
//! service can be handed to many concurrent tasks.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, instrument};

use catalog::Catalog;
use engine::{EngineConfig, RankedResult, RecommendationEngine, RecommendationRequest};

/// Shared, read-only access to a catalog plus the engine that queries it
#[derive(Clone)]
pub struct RecommendationService {
    catalog: Arc<Catalog>,
    engine: Arc<RecommendationEngine>,
}

impl RecommendationService {
    /// Create a service over `catalog` with the standard attribute filters
    ///
    /// Fails only if `config` is invalid.
    pub fn new(catalog: Arc<Catalog>, config: EngineConfig) -> Result<Self> {
        let engine = RecommendationEngine::new(config).context("Invalid engine configuration")?;
        Ok(Self {
            catalog,
            engine: Arc::new(engine),
        })
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Main entry point: get recommendations for one request
    ///
    /// # Returns
    /// Up to `top_n` results, best first. Empty when nothing matches.
    #[instrument(skip_all, fields(cuisine = %request.cuisine_type))]
    pub async fn recommend(&self, request: RecommendationRequest) -> Result<Vec<RankedResult>> {
        let start_time = Instant::now();

        request.validate().context("Invalid recommendation request")?;

        let catalog = self.catalog.clone();
        let engine = self.engine.clone();
        let results = tokio::task::spawn_blocking(move || engine.recommend(&catalog, &request))
            .await
            .context("Recommendation task panicked")?
            .context("Recommendation query failed")?;

        info!(
            "Returned {} recommendations in {:.2?}",
            results.len(),
            start_time.elapsed()
        );
        Ok(results)
    }
}
