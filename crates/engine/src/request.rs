//! The user request and its validation.
//!
//! `RecommendationRequest` is the typed form the engine consumes.
//! `RawRequest` holds the strings an interactive shell collects and turns
//! them into a request, rejecting anything that does not parse.

use crate::error::{EngineError, Result};
use catalog::GeoPoint;
use serde::{Deserialize, Serialize};

/// Search radius used when the caller does not give one
pub const DEFAULT_MAX_DISTANCE_KM: f64 = 60.0;

/// One recommendation query.
///
/// Built per call and never modified by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    pub user_location: GeoPoint,
    /// Inclusive lower bound on `rating`
    pub min_rating: f64,
    pub need_parking: bool,
    pub need_wifi: bool,
    /// Exact, case-sensitive cuisine label
    pub cuisine_type: String,
    /// Inclusive upper bound on distance from `user_location`, in km
    pub max_distance_km: f64,
}

impl RecommendationRequest {
    /// Request with no amenity requirements and the default radius
    pub fn new(user_location: GeoPoint, min_rating: f64, cuisine_type: impl Into<String>) -> Self {
        Self {
            user_location,
            min_rating,
            need_parking: false,
            need_wifi: false,
            cuisine_type: cuisine_type.into(),
            max_distance_km: DEFAULT_MAX_DISTANCE_KM,
        }
    }

    pub fn with_parking(mut self, need_parking: bool) -> Self {
        self.need_parking = need_parking;
        self
    }

    pub fn with_wifi(mut self, need_wifi: bool) -> Self {
        self.need_wifi = need_wifi;
        self
    }

    pub fn with_max_distance_km(mut self, max_distance_km: f64) -> Self {
        self.max_distance_km = max_distance_km;
        self
    }

    /// Reject values the engine cannot interpret.
    ///
    /// Location must be finite and on the globe, `min_rating` finite,
    /// `max_distance_km` finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        let GeoPoint {
            latitude,
            longitude,
        } = self.user_location;

        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(EngineError::invalid_input("latitude", latitude));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(EngineError::invalid_input("longitude", longitude));
        }
        if !self.min_rating.is_finite() {
            return Err(EngineError::invalid_input("min_rating", self.min_rating));
        }
        if !self.max_distance_km.is_finite() || self.max_distance_km < 0.0 {
            return Err(EngineError::invalid_input(
                "max_distance_km",
                self.max_distance_km,
            ));
        }
        Ok(())
    }
}

/// Unparsed answers as typed by a user.
#[derive(Debug, Clone, Default)]
pub struct RawRequest {
    pub latitude: String,
    pub longitude: String,
    pub min_rating: String,
    /// "yes" (any case) means required
    pub need_parking: String,
    /// "yes" (any case) means required
    pub need_wifi: String,
    pub cuisine_type: String,
}

impl RawRequest {
    /// Parse into a validated request with the default search radius
    pub fn parse(&self) -> Result<RecommendationRequest> {
        let latitude = parse_number("latitude", &self.latitude)?;
        let longitude = parse_number("longitude", &self.longitude)?;
        let min_rating = parse_number("min_rating", &self.min_rating)?;

        let request = RecommendationRequest::new(
            GeoPoint::new(latitude, longitude),
            min_rating,
            self.cuisine_type.trim(),
        )
        .with_parking(parse_yes_no(&self.need_parking))
        .with_wifi(parse_yes_no(&self.need_wifi));

        request.validate()?;
        Ok(request)
    }
}

fn parse_number(field: &str, value: &str) -> Result<f64> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| EngineError::invalid_input(field, value))
}

fn parse_yes_no(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("yes")
}
