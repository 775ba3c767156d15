//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible attribute filters over catalog records.

use crate::error::Result;
use crate::request::RecommendationRequest;
use catalog::RestaurantRecord;

/// Core trait for filtering candidate records.
///
/// Filters receive borrowed records so the catalog itself is never copied
/// or modified; they only decide which references survive.
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of candidates.
    ///
    /// # Arguments
    /// * `candidates` - The candidates to filter (takes ownership of the list)
    /// * `request` - The user's request, holding thresholds and requirements
    fn apply<'a>(
        &self,
        candidates: Vec<&'a RestaurantRecord>,
        request: &RecommendationRequest,
    ) -> Result<Vec<&'a RestaurantRecord>>;
}
