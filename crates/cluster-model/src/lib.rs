//! Loader for a previously trained restaurant clustering artifact.
//!
//! The artifact is the output of an offline training job: the list of
//! assembled feature columns, the fitted standard scaler, and the k-means
//! centroids. This crate only reads it back and assigns records to
//! clusters. Training is done elsewhere.
//!
//! The recommendation engine does not depend on this crate. The CLI loads a
//! model only when asked and uses it to report cluster membership.
//!
//! Artifact layout (JSON):
//! ```text
//! {
//!   "feature_columns": ["latitude", "longitude", "rating", ...],
//!   "scaler": { "mean": [...], "std": [...], "with_mean": false, "with_std": true },
//!   "centroids": [[...], [...], ...]
//! }
//! ```

use catalog::{Catalog, RestaurantRecord};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur when loading or using a clustering artifact
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Failed to read model artifact {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed model artifact: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid model artifact: {0}")]
    InvalidArtifact(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;

/// A record column that can be assembled into the feature vector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    Latitude,
    Longitude,
    Rating,
    CuisineTypeEncoded,
    HasParking,
    HasWifi,
}

impl Feature {
    fn extract(self, record: &RestaurantRecord) -> f64 {
        match self {
            Feature::Latitude => record.latitude,
            Feature::Longitude => record.longitude,
            Feature::Rating => record.rating,
            Feature::CuisineTypeEncoded => record.cuisine_type_encoded,
            Feature::HasParking => f64::from(u8::from(record.has_parking)),
            Feature::HasWifi => f64::from(u8::from(record.has_wifi)),
        }
    }
}

/// Fitted standard scaler
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    pub mean: Vec<f64>,
    pub std: Vec<f64>,
    #[serde(default)]
    pub with_mean: bool,
    #[serde(default = "default_with_std")]
    pub with_std: bool,
}

fn default_with_std() -> bool {
    true
}

impl StandardScaler {
    /// Scale one vector in place. A zero standard deviation maps to 0.0.
    pub fn transform(&self, features: &mut [f64]) {
        for (i, value) in features.iter_mut().enumerate() {
            if self.with_mean {
                *value -= self.mean[i];
            }
            if self.with_std {
                let std = self.std[i];
                *value = if std == 0.0 { 0.0 } else { *value / std };
            }
        }
    }
}

/// A loaded k-means clustering pipeline: assemble, scale, nearest centroid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterModel {
    pub feature_columns: Vec<Feature>,
    pub scaler: StandardScaler,
    pub centroids: Vec<Vec<f64>>,
}

impl ClusterModel {
    /// Load and validate an artifact from disk
    pub fn load(path: &Path) -> Result<Self> {
        info!("Loading clustering model from {}", path.display());

        let raw = fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let model = Self::from_json(&raw)?;

        info!(
            "Loaded clustering model: {} features, {} clusters",
            model.feature_columns.len(),
            model.centroids.len()
        );
        Ok(model)
    }

    /// Parse and validate an artifact from a JSON string
    pub fn from_json(raw: &str) -> Result<Self> {
        let model: ClusterModel = serde_json::from_str(raw)?;
        model.validate()?;
        Ok(model)
    }

    /// Check that all dimensions agree and every value is usable
    pub fn validate(&self) -> Result<()> {
        let dims = self.feature_columns.len();
        if dims == 0 {
            return Err(ModelError::InvalidArtifact(
                "no feature columns".to_string(),
            ));
        }
        if self.scaler.mean.len() != dims || self.scaler.std.len() != dims {
            return Err(ModelError::InvalidArtifact(format!(
                "scaler has {} means and {} stds for {} features",
                self.scaler.mean.len(),
                self.scaler.std.len(),
                dims
            )));
        }
        if self.centroids.is_empty() {
            return Err(ModelError::InvalidArtifact("no centroids".to_string()));
        }
        for (k, centroid) in self.centroids.iter().enumerate() {
            if centroid.len() != dims {
                return Err(ModelError::InvalidArtifact(format!(
                    "centroid {} has {} values for {} features",
                    k,
                    centroid.len(),
                    dims
                )));
            }
        }

        let all_finite = self
            .scaler
            .mean
            .iter()
            .chain(&self.scaler.std)
            .chain(self.centroids.iter().flatten())
            .all(|value| value.is_finite());
        if !all_finite {
            return Err(ModelError::InvalidArtifact(
                "non-finite scaler or centroid value".to_string(),
            ));
        }
        Ok(())
    }

    pub fn num_clusters(&self) -> usize {
        self.centroids.len()
    }

    /// Raw feature vector for a record, in `feature_columns` order
    pub fn assemble(&self, record: &RestaurantRecord) -> Vec<f64> {
        self.feature_columns
            .iter()
            .map(|feature| feature.extract(record))
            .collect()
    }

    /// Index of the nearest centroid to the scaled features of `record`.
    ///
    /// Squared Euclidean distance; the lowest index wins a tie.
    pub fn predict(&self, record: &RestaurantRecord) -> usize {
        let mut features = self.assemble(record);
        self.scaler.transform(&mut features);

        let mut best = 0;
        let mut best_distance = f64::INFINITY;
        for (k, centroid) in self.centroids.iter().enumerate() {
            let distance: f64 = features
                .iter()
                .zip(centroid)
                .map(|(x, c)| (x - c).powi(2))
                .sum();
            if distance < best_distance {
                best = k;
                best_distance = distance;
            }
        }
        best
    }

    /// Number of catalog records assigned to each cluster
    pub fn cluster_sizes(&self, catalog: &Catalog) -> Vec<usize> {
        let k = self.num_clusters();
        let sizes = catalog
            .records()
            .par_iter()
            .fold(
                || vec![0usize; k],
                |mut counts, record| {
                    counts[self.predict(record)] += 1;
                    counts
                },
            )
            .reduce(
                || vec![0usize; k],
                |mut left, right| {
                    for (l, r) in left.iter_mut().zip(right) {
                        *l += r;
                    }
                    left
                },
            );
        debug!("Cluster sizes: {:?}", sizes);
        sizes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARTIFACT: &str = r#"{
        "feature_columns": ["latitude", "longitude", "has_parking"],
        "scaler": { "mean": [0.0, 0.0, 0.0], "std": [10.0, 10.0, 0.0], "with_mean": false, "with_std": true },
        "centroids": [[0.0, 0.0, 0.0], [4.0, 4.0, 0.0]]
    }"#;

    fn record(id: &str, latitude: f64, longitude: f64) -> RestaurantRecord {
        RestaurantRecord {
            business_id: id.to_string(),
            bus_name: id.to_string(),
            address: "1 Test St".to_string(),
            latitude,
            longitude,
            rating: 4.0,
            cuisine_type: "Thai".to_string(),
            cuisine_type_encoded: 0.0,
            has_parking: true,
            has_wifi: false,
        }
    }

    #[test]
    fn test_parse_artifact() {
        let model = ClusterModel::from_json(ARTIFACT).unwrap();

        assert_eq!(model.num_clusters(), 2);
        assert_eq!(
            model.feature_columns,
            vec![Feature::Latitude, Feature::Longitude, Feature::HasParking]
        );
        assert_eq!(model.assemble(&record("a", 1.5, -2.0)), vec![1.5, -2.0, 1.0]);
    }

    #[test]
    fn test_predict_nearest_centroid() {
        let model = ClusterModel::from_json(ARTIFACT).unwrap();

        // Scaled by 1/10: (0.5, 0.5) is nearer (0, 0); (35, 38) is nearer (4, 4)
        assert_eq!(model.predict(&record("a", 5.0, 5.0)), 0);
        assert_eq!(model.predict(&record("b", 35.0, 38.0)), 1);
        // Exactly halfway goes to the lower index
        assert_eq!(model.predict(&record("c", 20.0, 20.0)), 0);
    }

    #[test]
    fn test_cluster_sizes() {
        let model = ClusterModel::from_json(ARTIFACT).unwrap();
        let catalog = Catalog::from_records(vec![
            record("a", 1.0, 1.0),
            record("b", 2.0, 0.0),
            record("c", 40.0, 40.0),
        ])
        .unwrap();

        assert_eq!(model.cluster_sizes(&catalog), vec![2, 1]);
    }

    #[test]
    fn test_dimension_mismatch_rejected() {
        let raw = r#"{
            "feature_columns": ["latitude", "longitude"],
            "scaler": { "mean": [0.0, 0.0], "std": [1.0, 1.0] },
            "centroids": [[0.0, 0.0], [1.0]]
        }"#;
        let err = ClusterModel::from_json(raw).unwrap_err();
        assert!(matches!(err, ModelError::InvalidArtifact(_)));
    }

    #[test]
    fn test_unknown_feature_rejected() {
        let raw = r#"{
            "feature_columns": ["price"],
            "scaler": { "mean": [0.0], "std": [1.0] },
            "centroids": [[0.0]]
        }"#;
        let err = ClusterModel::from_json(raw).unwrap_err();
        assert!(matches!(err, ModelError::Json(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = ClusterModel::load(Path::new("no/such/model.json")).unwrap_err();
        assert!(matches!(err, ModelError::Io { .. }));
    }
}
