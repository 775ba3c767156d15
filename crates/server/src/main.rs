//! Simple test harness for the recommendation service.
//!
//! Loads a catalog and runs one sample request end to end.
//! Usage: server [path/to/restaurants.csv]

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use catalog::Catalog;
use engine::{EngineConfig, RecommendationRequest};
use server::RecommendationService;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter("info,server=debug,engine=debug,catalog=debug")
        .init();

    info!("Starting restaurant recommender test harness");

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data/restaurants.csv"));

    let catalog = Arc::new(
        Catalog::load_from_file(&path)
            .with_context(|| format!("Failed to load catalog from {}", path.display()))?,
    );

    // Most common cuisine, so the sample request has something to match
    let cuisine = catalog
        .cuisine_index()
        .entries()
        .first()
        .map(|entry| entry.label.clone())
        .context("Catalog has no restaurants")?;

    let service = RecommendationService::new(catalog.clone(), EngineConfig::default())?;

    let origin = catalog.records()[0].location();
    let request = RecommendationRequest::new(origin, 3.0, cuisine);

    info!("Requesting {:?}", request);
    let recommendations = service.recommend(request).await?;

    info!("Received {} recommendations:", recommendations.len());
    for (i, rec) in recommendations.iter().enumerate() {
        info!(
            "{}. {} ({}) - Rating: {:.1}, {:.2} km",
            i + 1,
            rec.bus_name,
            rec.business_id,
            rec.rating,
            rec.distance_km
        );
        info!("   {}", rec.address);
    }

    Ok(())
}
