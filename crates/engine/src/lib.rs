//! Recommendation query engine for the restaurant catalog.
//!
//! This crate provides:
//! - `RecommendationRequest` / `RawRequest` for user queries
//! - Filter trait and the attribute filters (cuisine, rating, parking, WiFi)
//! - FilterPipeline for composing filters
//! - Haversine distance and the distance stage
//! - Per-name best-record selection and global top-N ranking
//!
//! ## Architecture
//! The engine processes a query in stages:
//! 1. Filters remove records that fail the user's hard requirements
//! 2. Distances to the user are attached and the radius is enforced
//! 3. Each business name keeps its best record
//! 4. The survivors are ranked and the top N projected to `RankedResult`
//!
//! ## Example Usage
//! ```ignore
//! use catalog::{Catalog, GeoPoint};
//! use engine::{RecommendationEngine, EngineConfig, RecommendationRequest};
//!
//! let catalog = Catalog::load_from_file(Path::new("data/restaurants.csv"))?;
//! let engine = RecommendationEngine::new(EngineConfig::default())?;
//!
//! let request = RecommendationRequest::new(GeoPoint::new(40.71, -74.0), 4.0, "Italian")
//!     .with_parking(true);
//! let results = engine.recommend(&catalog, &request)?;
//! ```

pub mod error;
pub mod filter_pipeline;
pub mod filters;
pub mod geo;
pub mod ranking;
pub mod recommender;
pub mod request;
pub mod traits;

// Re-export main types
pub use catalog::GeoPoint;
pub use error::{EngineError, Result};
pub use filter_pipeline::FilterPipeline;
pub use geo::{EARTH_RADIUS_KM, ScoredRecord, haversine_km};
pub use ranking::RankedResult;
pub use recommender::{DEFAULT_TOP_N, EngineConfig, RecommendationEngine, recommend};
pub use request::{DEFAULT_MAX_DISTANCE_KM, RawRequest, RecommendationRequest};
pub use traits::Filter;
