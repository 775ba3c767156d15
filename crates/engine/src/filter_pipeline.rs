//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! attribute filters together using the builder pattern.

use crate::error::Result;
use crate::filters::{CuisineFilter, MinimumRatingFilter, ParkingFilter, WifiFilter};
use crate::request::RecommendationRequest;
use crate::traits::Filter;
use catalog::RestaurantRecord;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(CuisineFilter)
///     .add_filter(MinimumRatingFilter);
///
/// let filtered = pipeline.apply(candidates, &request)?;
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// The standard attribute stage: cuisine, rating, parking, WiFi.
    ///
    /// Cuisine goes first since an exact label match usually removes the
    /// most rows. All four are independent predicates, so the order never
    /// changes the surviving set.
    pub fn attribute_filters() -> Self {
        Self::new()
            .add_filter(CuisineFilter)
            .add_filter(MinimumRatingFilter)
            .add_filter(ParkingFilter)
            .add_filter(WifiFilter)
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Names of the configured filters, in application order
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|filter| filter.name()).collect()
    }

    /// Apply all filters in sequence to the candidates.
    ///
    /// # Returns
    /// * `Ok(Vec<&RestaurantRecord>)` - The records that passed every filter
    /// * `Err` - If any filter fails
    pub fn apply<'a>(
        &self,
        candidates: Vec<&'a RestaurantRecord>,
        request: &RecommendationRequest,
    ) -> Result<Vec<&'a RestaurantRecord>> {
        let mut current = candidates;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current, request)?;
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
            if current.is_empty() {
                break;
            }
        }
        Ok(current)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::attribute_filters()
    }
}
