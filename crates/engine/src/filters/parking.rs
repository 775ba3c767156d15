//! Filter for the parking requirement.

use crate::error::Result;
use crate::request::RecommendationRequest;
use crate::traits::Filter;
use catalog::RestaurantRecord;

/// When parking is required, removes every record without it.
///
/// Records lacking parking are excluded, not ranked lower. When the
/// request does not need parking the candidates pass through unchanged.
pub struct ParkingFilter;

impl Filter for ParkingFilter {
    fn name(&self) -> &str {
        "ParkingFilter"
    }

    fn apply<'a>(
        &self,
        candidates: Vec<&'a RestaurantRecord>,
        request: &RecommendationRequest,
    ) -> Result<Vec<&'a RestaurantRecord>> {
        if !request.need_parking {
            return Ok(candidates);
        }
        Ok(candidates
            .into_iter()
            .filter(|record| record.has_parking)
            .collect())
    }
}
