//! Catalog building and validation.
//!
//! Turns parsed rows into an immutable `Catalog`:
//! - assign cuisine codes from the full set of labels
//! - build the business_id lookup
//! - validate integrity before anyone can query it

use crate::encoding::CuisineIndex;
use crate::error::{CatalogError, Result};
use crate::parser;
use crate::types::{Catalog, RestaurantRecord};
use rayon::prelude::*;
use std::collections::HashMap;
use std::path::Path;
use std::time::Instant;
use tracing::info;

impl Catalog {
    /// Load and clean a restaurant CSV file.
    ///
    /// Steps:
    /// 1. Parse rows, dropping incomplete ones
    /// 2. Encode cuisine labels
    /// 3. Index by business id
    /// 4. Validate
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let start = Instant::now();
        info!("Loading restaurant catalog from {}", path.display());

        let records = parser::parse_restaurants(path)?;
        let catalog = Self::from_records(records)?;

        info!(
            "Loaded {} restaurants ({} cuisines) in {:?}",
            catalog.len(),
            catalog.cuisine_index.len(),
            start.elapsed()
        );
        Ok(catalog)
    }

    /// Build a catalog from already-typed records.
    ///
    /// Any `cuisine_type_encoded` value on the input is overwritten.
    pub fn from_records(mut records: Vec<RestaurantRecord>) -> Result<Self> {
        let cuisine_index =
            CuisineIndex::fit(records.iter().map(|record| record.cuisine_type.as_str()));

        for record in &mut records {
            record.cuisine_type_encoded = cuisine_index
                .encode(&record.cuisine_type)
                .ok_or_else(|| CatalogError::InvalidValue {
                    field: "cuisine_type".to_string(),
                    value: record.cuisine_type.clone(),
                })?;
        }

        let mut id_index = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            if id_index.insert(record.business_id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateBusinessId(record.business_id.clone()));
            }
        }

        let catalog = Self {
            records,
            id_index,
            cuisine_index,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Validate data integrity
    ///
    /// Checks that every numeric field is finite and that the id index
    /// covers every record. Coordinate ranges are not checked here.
    pub fn validate(&self) -> Result<()> {
        if self.id_index.len() != self.records.len() {
            return Err(CatalogError::ValidationError(format!(
                "id index has {} entries for {} records",
                self.id_index.len(),
                self.records.len()
            )));
        }

        let bad = self.records.par_iter().find_any(|record| {
            !(record.latitude.is_finite()
                && record.longitude.is_finite()
                && record.rating.is_finite())
        });

        match bad {
            Some(record) => Err(CatalogError::InvalidValue {
                field: "latitude/longitude/rating".to_string(),
                value: record.business_id.clone(),
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn record(id: &str, name: &str, cuisine: &str) -> RestaurantRecord {
        RestaurantRecord {
            business_id: id.to_string(),
            bus_name: name.to_string(),
            address: "1 Test St".to_string(),
            latitude: 40.0,
            longitude: -74.0,
            rating: 4.0,
            cuisine_type: cuisine.to_string(),
            cuisine_type_encoded: -1.0,
            has_parking: true,
            has_wifi: false,
        }
    }

    #[test]
    fn test_from_records_encodes_cuisines() {
        let catalog = Catalog::from_records(vec![
            record("b1", "A", "Thai"),
            record("b2", "B", "Italian"),
            record("b3", "C", "Thai"),
        ])
        .unwrap();

        assert_eq!(catalog.get("b1").unwrap().cuisine_type_encoded, 0.0);
        assert_eq!(catalog.get("b2").unwrap().cuisine_type_encoded, 1.0);
        assert_eq!(catalog.get("b3").unwrap().cuisine_type_encoded, 0.0);
    }

    #[test]
    fn test_duplicate_business_id_rejected() {
        let err = Catalog::from_records(vec![record("b1", "A", "Thai"), record("b1", "B", "Thai")])
            .unwrap_err();

        assert!(matches!(err, CatalogError::DuplicateBusinessId(ref id) if id == "b1"));
    }

    #[test]
    fn test_non_finite_rating_rejected() {
        let mut bad = record("b1", "A", "Thai");
        bad.rating = f64::NAN;

        let err = Catalog::from_records(vec![bad]).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidValue { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let dir = std::env::temp_dir().join(format!("catalog-load-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("restaurants.csv");
        fs::write(
            &path,
            "business_id,bus_name,address,latitude,longitude,rating,cuisine_type,parking,WiFi\n\
             b1,Joe's Diner,12 Main St,40.7,-74.0,4.2,American,Yes,No\n\
             b2,Joe's Diner,14 Main St,40.7,-74.0,3.5,American,No,No\n\
             b3,,1 Nowhere,40.7,-74.0,3.5,American,No,No\n",
        )
        .unwrap();

        let catalog = Catalog::load_from_file(&path).unwrap();
        fs::remove_dir_all(&dir).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.search_by_name("joe").len(), 2);
        assert_eq!(catalog.cuisine_index().encode("American"), Some(0.0));
    }
}
