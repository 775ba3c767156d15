//! Filter for the WiFi requirement.

use crate::error::Result;
use crate::request::RecommendationRequest;
use crate::traits::Filter;
use catalog::RestaurantRecord;

/// When WiFi is required, removes every record without it.
pub struct WifiFilter;

impl Filter for WifiFilter {
    fn name(&self) -> &str {
        "WifiFilter"
    }

    fn apply<'a>(
        &self,
        candidates: Vec<&'a RestaurantRecord>,
        request: &RecommendationRequest,
    ) -> Result<Vec<&'a RestaurantRecord>> {
        if !request.need_wifi {
            return Ok(candidates);
        }
        Ok(candidates
            .into_iter()
            .filter(|record| record.has_wifi)
            .collect())
    }
}
