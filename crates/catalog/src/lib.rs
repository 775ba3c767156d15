//! # Catalog Crate
//!
//! Loads the restaurant data set and exposes it as an immutable table.
//!
//! ## Main Components
//!
//! - **types**: `RestaurantRecord`, `GeoPoint`, `Catalog`
//! - **parser**: read the raw CSV, drop incomplete rows, normalize amenity flags
//! - **encoding**: frequency-ordered cuisine codes
//! - **index**: build and validate a `Catalog`
//! - **error**: error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::Catalog;
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_file(Path::new("data/restaurants.csv"))?;
//! for entry in catalog.cuisine_index().entries() {
//!     println!("{} ({}): {} restaurants", entry.label, entry.code, entry.count);
//! }
//! ```

pub mod encoding;
pub mod error;
pub mod index;
pub mod parser;
pub mod types;

pub use encoding::{CuisineEntry, CuisineIndex};
pub use error::{CatalogError, Result};
pub use types::{BusinessId, Catalog, GeoPoint, RestaurantRecord};
