//! Filter to enforce the user's minimum rating.

use crate::error::Result;
use crate::request::RecommendationRequest;
use crate::traits::Filter;
use catalog::RestaurantRecord;

/// Keeps records with `rating >= request.min_rating` (inclusive).
pub struct MinimumRatingFilter;

impl Filter for MinimumRatingFilter {
    fn name(&self) -> &str {
        "MinimumRatingFilter"
    }

    fn apply<'a>(
        &self,
        candidates: Vec<&'a RestaurantRecord>,
        request: &RecommendationRequest,
    ) -> Result<Vec<&'a RestaurantRecord>> {
        let filtered: Vec<&RestaurantRecord> = candidates
            .into_iter()
            .filter(|record| record.rating >= request.min_rating)
            .collect();

        Ok(filtered)
    }
}
