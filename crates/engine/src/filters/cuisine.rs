//! Filter to keep only the requested cuisine.

use crate::error::Result;
use crate::request::RecommendationRequest;
use crate::traits::Filter;
use catalog::RestaurantRecord;

/// Keeps records whose `cuisine_type` equals the requested label exactly.
///
/// The comparison is case-sensitive: "thai" does not match "Thai".
pub struct CuisineFilter;

impl Filter for CuisineFilter {
    fn name(&self) -> &str {
        "CuisineFilter"
    }

    fn apply<'a>(
        &self,
        candidates: Vec<&'a RestaurantRecord>,
        request: &RecommendationRequest,
    ) -> Result<Vec<&'a RestaurantRecord>> {
        Ok(candidates
            .into_iter()
            .filter(|record| record.cuisine_type == request.cuisine_type)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::test_support::record;
    use catalog::GeoPoint;

    #[test]
    fn test_cuisine_filter_exact_match() {
        let records = vec![
            record("1", 4.0, "Thai"),
            record("2", 4.0, "thai"),
            record("3", 4.0, "Thai Fusion"),
            record("4", 4.0, "Italian"),
        ];
        let request = RecommendationRequest::new(GeoPoint::new(0.0, 0.0), 0.0, "Thai");

        let filtered = CuisineFilter.apply(records.iter().collect(), &request).unwrap();

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].business_id, "1");
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let records = vec![record("1", 4.0, "Thai")];
        let request = RecommendationRequest::new(GeoPoint::new(0.0, 0.0), 0.0, "Sushi");

        let filtered = CuisineFilter.apply(records.iter().collect(), &request).unwrap();
        assert!(filtered.is_empty());
    }
}
