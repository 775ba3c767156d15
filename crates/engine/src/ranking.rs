//! Per-name best-record selection, global top-N and projection.
//!
//! Both stages use the same total order so output is reproducible:
//! 1. `rating` descending
//! 2. `distance_km` ascending
//! 3. `business_id` ascending

use crate::geo::ScoredRecord;
use catalog::BusinessId;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

/// One recommended restaurant as returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    pub business_id: BusinessId,
    pub bus_name: String,
    pub address: String,
    pub rating: f64,
    #[serde(rename = "distance")]
    pub distance_km: f64,
    pub cuisine_type: String,
}

impl From<ScoredRecord<'_>> for RankedResult {
    fn from(scored: ScoredRecord<'_>) -> Self {
        let record = scored.record;
        Self {
            business_id: record.business_id.clone(),
            bus_name: record.bus_name.clone(),
            address: record.address.clone(),
            rating: record.rating,
            distance_km: scored.distance_km,
            cuisine_type: record.cuisine_type.clone(),
        }
    }
}

/// `Less` means `a` ranks ahead of `b`.
pub fn rank_order(a: &ScoredRecord<'_>, b: &ScoredRecord<'_>) -> Ordering {
    b.record
        .rating
        .total_cmp(&a.record.rating)
        .then_with(|| a.distance_km.total_cmp(&b.distance_km))
        .then_with(|| a.record.business_id.cmp(&b.record.business_id))
}

/// Keep exactly one record per `bus_name`: the best by `rank_order`.
///
/// This changes which branch is reported for a name, not just how many
/// rows there are. Output order is unspecified; pass it to `top_n`.
pub fn best_per_name<'a>(scored: Vec<ScoredRecord<'a>>) -> Vec<ScoredRecord<'a>> {
    let mut best: HashMap<&'a str, ScoredRecord<'a>> = HashMap::with_capacity(scored.len());

    for candidate in scored {
        best.entry(candidate.record.bus_name.as_str())
            .and_modify(|existing| {
                if rank_order(&candidate, existing) == Ordering::Less {
                    *existing = candidate;
                }
            })
            .or_insert(candidate);
    }

    best.into_values().collect()
}

/// Sort by `rank_order` and keep the first `limit`
pub fn top_n<'a>(mut scored: Vec<ScoredRecord<'a>>, limit: usize) -> Vec<ScoredRecord<'a>> {
    scored.sort_by(rank_order);
    scored.truncate(limit);
    scored
}
