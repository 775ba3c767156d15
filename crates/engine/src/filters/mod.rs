//! Filter implementations for the attribute stage.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod cuisine;
pub mod minimum_rating;
pub mod parking;
pub mod wifi;

// Re-export for convenience
pub use cuisine::CuisineFilter;
pub use minimum_rating::MinimumRatingFilter;
pub use parking::ParkingFilter;
pub use wifi::WifiFilter;
