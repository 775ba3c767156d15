//! Server crate for the restaurant recommender.
//!
//! This crate contains the service that shares one loaded catalog across
//! concurrent recommendation requests.

pub mod service;

pub use service::RecommendationService;
