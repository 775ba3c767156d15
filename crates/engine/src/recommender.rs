//! The recommendation query engine.
//!
//! A single pass over an immutable catalog:
//! 1. Validate the request
//! 2. Attribute filters (cuisine, rating, parking, WiFi)
//! 3. Annotate each survivor with its distance to the user
//! 4. Drop everything beyond `max_distance_km`
//! 5. Keep the best record per business name
//! 6. Order globally and take the top N
//! 7. Project to `RankedResult`
//!
//! The engine holds no per-query state, so one instance can serve many
//! threads at once.

use crate::error::{EngineError, Result};
use crate::filter_pipeline::FilterPipeline;
use crate::geo;
use crate::ranking::{self, RankedResult};
use crate::request::RecommendationRequest;
use catalog::{Catalog, RestaurantRecord};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// How many results a query returns unless configured otherwise
pub const DEFAULT_TOP_N: usize = 5;

/// Engine settings that are fixed for the lifetime of an engine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Maximum number of results per query
    pub top_n: usize,
}

impl EngineConfig {
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.top_n == 0 {
            return Err(EngineError::InvalidConfig(
                "top_n must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
        }
    }
}

/// Runs recommendation queries against a catalog.
pub struct RecommendationEngine {
    pipeline: FilterPipeline,
    config: EngineConfig,
}

impl RecommendationEngine {
    /// Engine with the standard attribute filters
    pub fn new(config: EngineConfig) -> Result<Self> {
        Self::with_pipeline(FilterPipeline::attribute_filters(), config)
    }

    /// Engine with a custom attribute stage
    pub fn with_pipeline(pipeline: FilterPipeline, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { pipeline, config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Recommend up to `top_n` restaurants for `request`.
    ///
    /// An empty vector means nothing matched; it is not an error. The only
    /// error is an invalid request.
    #[instrument(skip_all, fields(cuisine = %request.cuisine_type, top_n = self.config.top_n))]
    pub fn recommend(
        &self,
        catalog: &Catalog,
        request: &RecommendationRequest,
    ) -> Result<Vec<RankedResult>> {
        request.validate()?;

        let candidates: Vec<&RestaurantRecord> = catalog.records().iter().collect();
        let filtered = self.pipeline.apply(candidates, request)?;

        let annotated = geo::annotate_distances(filtered, request.user_location);
        let nearby = geo::within_distance(annotated, request.max_distance_km);
        debug!(
            "{} candidates within {} km",
            nearby.len(),
            request.max_distance_km
        );

        let per_name = ranking::best_per_name(nearby);
        debug!("{} distinct names after per-name selection", per_name.len());

        let top = ranking::top_n(per_name, self.config.top_n);
        Ok(top.into_iter().map(RankedResult::from).collect())
    }
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self {
            pipeline: FilterPipeline::attribute_filters(),
            config: EngineConfig::default(),
        }
    }
}

/// Run one query with the default engine (standard filters, top 5)
pub fn recommend(catalog: &Catalog, request: &RecommendationRequest) -> Result<Vec<RankedResult>> {
    RecommendationEngine::default().recommend(catalog, request)
}
