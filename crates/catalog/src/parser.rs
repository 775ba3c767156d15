//! Parser for the raw restaurant CSV file.
//!
//! Expected header (extra columns are ignored, order does not matter):
//! `business_id,bus_name,address,latitude,longitude,rating,cuisine_type,parking,WiFi`
//!
//! Cleaning rules:
//! - a row with any required field empty or missing is dropped
//! - `parking` / `WiFi` are `"Yes"` for true, anything else is false
//! - a present numeric field that does not parse is an error, never coerced
//!
//! `cuisine_type_encoded` is left at `0.0` here; `Catalog::from_records`
//! assigns the real codes once every label has been seen.

use crate::error::{CatalogError, Result};
use crate::types::RestaurantRecord;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

const REQUIRED_COLUMNS: [&str; 9] = [
    "business_id",
    "bus_name",
    "address",
    "latitude",
    "longitude",
    "rating",
    "cuisine_type",
    "parking",
    "WiFi",
];

/// One row exactly as it appears in the file
#[derive(Debug, Deserialize)]
struct RawRow {
    business_id: Option<String>,
    bus_name: Option<String>,
    address: Option<String>,
    latitude: Option<String>,
    longitude: Option<String>,
    rating: Option<String>,
    cuisine_type: Option<String>,
    parking: Option<String>,
    #[serde(rename = "WiFi", alias = "wifi")]
    wifi: Option<String>,
}

/// Parse a restaurant CSV file from disk
pub fn parse_restaurants(path: &Path) -> Result<Vec<RestaurantRecord>> {
    let file = File::open(path).map_err(|_| CatalogError::FileNotFound {
        path: path.display().to_string(),
    })?;
    parse_restaurants_from_reader(file)
}

/// Parse restaurant rows from any `Read` source
pub fn parse_restaurants_from_reader(reader: impl Read) -> Result<Vec<RestaurantRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    check_required_columns(&headers)?;

    let mut records = Vec::new();
    let mut dropped = 0usize;

    for result in csv_reader.records() {
        let row = result?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);
        let raw: RawRow = row.deserialize(Some(&headers))?;

        match clean_row(raw, line)? {
            Some(record) => records.push(record),
            None => {
                debug!("Dropping incomplete row at line {}", line);
                dropped += 1;
            }
        }
    }

    if dropped > 0 {
        warn!("Dropped {} rows with missing fields", dropped);
    }

    Ok(records)
}

fn check_required_columns(headers: &csv::StringRecord) -> Result<()> {
    for column in REQUIRED_COLUMNS {
        let found = headers.iter().any(|h| {
            h == column || (column == "WiFi" && h == "wifi")
        });
        if !found {
            return Err(CatalogError::MissingColumn(column.to_string()));
        }
    }
    Ok(())
}

/// Returns `Ok(None)` when the row has a missing field and must be dropped.
fn clean_row(raw: RawRow, line: u64) -> Result<Option<RestaurantRecord>> {
    let (
        Some(business_id),
        Some(bus_name),
        Some(address),
        Some(latitude),
        Some(longitude),
        Some(rating),
        Some(cuisine_type),
        Some(parking),
        Some(wifi),
    ) = (
        present(raw.business_id),
        present(raw.bus_name),
        present(raw.address),
        present(raw.latitude),
        present(raw.longitude),
        present(raw.rating),
        present(raw.cuisine_type),
        present(raw.parking),
        present(raw.wifi),
    )
    else {
        return Ok(None);
    };

    Ok(Some(RestaurantRecord {
        business_id,
        bus_name,
        address,
        latitude: parse_number("latitude", &latitude, line)?,
        longitude: parse_number("longitude", &longitude, line)?,
        rating: parse_number("rating", &rating, line)?,
        cuisine_type,
        cuisine_type_encoded: 0.0,
        has_parking: parse_yes(&parking),
        has_wifi: parse_yes(&wifi),
    }))
}

fn present(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.is_empty())
}

fn parse_number(field: &str, value: &str, line: u64) -> Result<f64> {
    let parsed: f64 = value.parse().map_err(|e| CatalogError::ParseError {
        line,
        reason: format!("Invalid {}: {:?} ({})", field, value, e),
    })?;
    if !parsed.is_finite() {
        return Err(CatalogError::ParseError {
            line,
            reason: format!("Invalid {}: {:?} is not finite", field, value),
        });
    }
    Ok(parsed)
}

/// Amenity flags: only the exact string "Yes" means true
fn parse_yes(value: &str) -> bool {
    value == "Yes"
}
