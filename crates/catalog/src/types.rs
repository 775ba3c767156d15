//! Core domain types for the restaurant catalog.
//!
//! A `Catalog` is built once by the loader and then only ever read. The
//! recommendation engine borrows records from it and never writes back.

use crate::encoding::CuisineIndex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a business (opaque string from the source data)
pub type BusinessId = String;

// =============================================================================
// Geography
// =============================================================================

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

// =============================================================================
// Restaurant Record
// =============================================================================

/// One cleaned row of the catalog.
///
/// All fields are present and typed. `bus_name` is a display name and is
/// not unique: chains and duplicate data entry both produce repeats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantRecord {
    pub business_id: BusinessId,
    pub bus_name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Rating, expected in 0.0 - 5.0
    pub rating: f64,
    pub cuisine_type: String,
    /// Frequency-ordered code for `cuisine_type`, assigned by the catalog
    pub cuisine_type_encoded: f64,
    pub has_parking: bool,
    pub has_wifi: bool,
}

impl RestaurantRecord {
    /// Location of this restaurant
    pub fn location(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}

// =============================================================================
// Catalog - The Immutable In-Memory Table
// =============================================================================

/// The cleaned, enriched restaurant table.
///
/// Construct it with `Catalog::from_records` or `Catalog::load_from_file`.
/// There are no mutators: share it as `Arc<Catalog>` between threads.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub(crate) records: Vec<RestaurantRecord>,
    /// business_id -> position in `records`
    pub(crate) id_index: HashMap<BusinessId, usize>,
    pub(crate) cuisine_index: CuisineIndex,
}

impl Catalog {
    /// All records in load order
    pub fn records(&self) -> &[RestaurantRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by its business id
    pub fn get(&self, business_id: &str) -> Option<&RestaurantRecord> {
        self.id_index
            .get(business_id)
            .map(|&position| &self.records[position])
    }

    /// The cuisine label <-> code mapping built at load time
    pub fn cuisine_index(&self) -> &CuisineIndex {
        &self.cuisine_index
    }

    /// Records whose name contains `needle`, case-insensitively
    pub fn search_by_name(&self, needle: &str) -> Vec<&RestaurantRecord> {
        let needle = needle.to_lowercase();
        self.records
            .iter()
            .filter(|record| record.bus_name.to_lowercase().contains(&needle))
            .collect()
    }
}
