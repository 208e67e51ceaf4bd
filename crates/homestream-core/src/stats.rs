//! Feature statistics schema shared by the trainer, predictor, and simulator.
//!
//! The trainer writes one [`FeatureStats`] artifact per training run; the
//! simulator reads it to reconstruct plausible synthetic listings without
//! access to the raw data. The artifact is pretty-printed JSON carrying an
//! explicit schema version that is validated on load, so version skew fails
//! fast instead of surfacing as a low-level deserialization error.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CoreError, Result};

/// Schema version written into every stats artifact.
pub const STATS_SCHEMA_VERSION: u32 = 1;

/// How a feature's sampled values should be interpreted.
///
/// Binary features are indicator columns (e.g. "Central Air" after N/Y
/// mapping); the simulator rounds their sampled values to the nearest
/// integer instead of special-casing feature names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureKind {
    /// A real-valued measurement.
    Continuous,
    /// A 0/1 indicator.
    Binary,
}

/// Summary statistics for a single feature column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureSummary {
    /// Smallest observed value.
    pub min: f64,
    /// Largest observed value.
    pub max: f64,
    /// Arithmetic mean.
    pub mean: f64,
    /// Population standard deviation (ddof = 0).
    pub std: f64,
    /// Value interpretation for the simulator.
    pub kind: FeatureKind,
}

impl FeatureSummary {
    /// Builds a summary, enforcing `min <= mean <= max`, `std >= 0`, and
    /// finiteness of every field.
    pub fn new(feature: &str, min: f64, max: f64, mean: f64, std: f64, kind: FeatureKind) -> Result<Self> {
        let summary = Self { min, max, mean, std, kind };
        summary.check(feature)?;
        Ok(summary)
    }

    fn check(&self, feature: &str) -> Result<()> {
        let fields = [self.min, self.max, self.mean, self.std];
        if fields.iter().any(|v| !v.is_finite()) {
            return Err(CoreError::InvalidStats {
                feature: feature.to_string(),
                message: "non-finite value".to_string(),
            });
        }
        if !(self.min <= self.mean && self.mean <= self.max) {
            return Err(CoreError::InvalidStats {
                feature: feature.to_string(),
                message: format!(
                    "expected min <= mean <= max, got min={} mean={} max={}",
                    self.min, self.mean, self.max
                ),
            });
        }
        if self.std < 0.0 {
            return Err(CoreError::InvalidStats {
                feature: feature.to_string(),
                message: format!("negative std {}", self.std),
            });
        }
        if self.kind == FeatureKind::Binary {
            let indicator = |v: f64| v == 0.0 || v == 1.0;
            if !indicator(self.min) || !indicator(self.max) {
                return Err(CoreError::InvalidStats {
                    feature: feature.to_string(),
                    message: format!(
                        "binary feature bounds must be 0 or 1, got min={} max={}",
                        self.min, self.max
                    ),
                });
            }
        }
        Ok(())
    }
}

/// The persisted statistics artifact.
///
/// Target summary values and the training test fraction are scalar fields
/// rather than map entries, so they can never leak into a simulated event
/// payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureStats {
    /// Artifact schema version; must equal [`STATS_SCHEMA_VERSION`] on load.
    pub schema_version: u32,
    /// Per-feature summaries, keyed by column name.
    pub features: BTreeMap<String, FeatureSummary>,
    /// Mean of the target over the training split.
    pub target_mean: f64,
    /// Population std of the target over the training split.
    pub target_std: f64,
    /// Test fraction used for the split (provenance only).
    pub test_size: f64,
}

impl FeatureStats {
    /// Builds a stats record with the current schema version.
    pub fn new(
        features: BTreeMap<String, FeatureSummary>,
        target_mean: f64,
        target_std: f64,
        test_size: f64,
    ) -> Self {
        Self {
            schema_version: STATS_SCHEMA_VERSION,
            features,
            target_mean,
            target_std,
            test_size,
        }
    }

    /// Feature names in deterministic (sorted) order.
    pub fn feature_names(&self) -> Vec<&str> {
        self.features.keys().map(String::as_str).collect()
    }

    /// Looks up the summary for one feature.
    pub fn get(&self, feature: &str) -> Option<&FeatureSummary> {
        self.features.get(feature)
    }

    /// Writes the artifact as pretty JSON via a temp file and rename.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| CoreError::io(parent, e))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        write_atomic(path, json.as_bytes())?;
        debug!(path = %path.display(), features = self.features.len(), "wrote feature stats");
        Ok(())
    }

    /// Loads and validates an artifact.
    ///
    /// Rejects schema-version mismatches and summaries violating their
    /// ordering invariants.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| CoreError::io(path, e))?;
        let stats: FeatureStats = serde_json::from_str(&text)?;
        if stats.schema_version != STATS_SCHEMA_VERSION {
            return Err(CoreError::SchemaVersion {
                path: path.to_path_buf(),
                expected: STATS_SCHEMA_VERSION,
                found: stats.schema_version,
            });
        }
        for (feature, summary) in &stats.features {
            summary.check(feature)?;
        }
        Ok(stats)
    }
}

/// Writes `bytes` to `path` through a sibling temp file and an atomic rename.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, bytes).map_err(|e| CoreError::io(&tmp, e))?;
    fs::rename(&tmp, path).map_err(|e| CoreError::io(path, e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_stats() -> FeatureStats {
        let mut features = BTreeMap::new();
        features.insert(
            "Gr Liv Area".to_string(),
            FeatureSummary::new("Gr Liv Area", 334.0, 5642.0, 1499.7, 505.5, FeatureKind::Continuous)
                .unwrap(),
        );
        features.insert(
            "Central Air".to_string(),
            FeatureSummary::new("Central Air", 0.0, 1.0, 0.93, 0.25, FeatureKind::Binary).unwrap(),
        );
        FeatureStats::new(features, 180796.06, 79886.69, 0.2)
    }

    #[test]
    fn test_summary_rejects_mean_outside_range() {
        let err =
            FeatureSummary::new("x", 0.0, 10.0, 11.0, 1.0, FeatureKind::Continuous).unwrap_err();
        assert!(err.to_string().contains("min <= mean <= max"));
    }

    #[test]
    fn test_summary_rejects_fractional_binary_bounds() {
        // Rounding a clamped draw must stay inside [min, max], which only
        // holds for indicator bounds.
        let err =
            FeatureSummary::new("air", 0.4, 0.6, 0.5, 0.1, FeatureKind::Binary).unwrap_err();
        assert!(err.to_string().contains("must be 0 or 1"));

        assert!(FeatureSummary::new("air", 0.0, 1.0, 0.5, 0.1, FeatureKind::Binary).is_ok());
        assert!(FeatureSummary::new("air", 1.0, 1.0, 1.0, 0.0, FeatureKind::Binary).is_ok());
    }

    #[test]
    fn test_summary_rejects_non_finite() {
        let err =
            FeatureSummary::new("x", 0.0, f64::NAN, 0.5, 1.0, FeatureKind::Continuous).unwrap_err();
        assert!(err.to_string().contains("non-finite"));
    }

    #[test]
    fn test_round_trip_preserves_values() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("feature_stats.json");
        let stats = sample_stats();
        stats.save(&path).unwrap();

        let loaded = FeatureStats::load(&path).unwrap();
        assert_eq!(loaded, stats);
        let area = loaded.get("Gr Liv Area").unwrap();
        assert_eq!(area.min, 334.0);
        assert_eq!(area.max, 5642.0);
        assert_eq!(area.mean, 1499.7);
        assert_eq!(area.std, 505.5);
    }

    #[test]
    fn test_load_rejects_version_skew() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("feature_stats.json");
        let mut stats = sample_stats();
        stats.schema_version = 99;
        let json = serde_json::to_string_pretty(&stats).unwrap();
        fs::write(&path, json).unwrap();

        let err = FeatureStats::load(&path).unwrap_err();
        assert!(matches!(
            err,
            CoreError::SchemaVersion { expected: STATS_SCHEMA_VERSION, found: 99, .. }
        ));
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let err = FeatureStats::load(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, CoreError::Io { .. }));
    }

    #[test]
    fn test_scalar_entries_are_not_feature_keys() {
        let stats = sample_stats();
        let names = stats.feature_names();
        assert!(!names.contains(&"target_mean"));
        assert!(!names.contains(&"target_std"));
        assert!(!names.contains(&"test_size"));
        assert_eq!(names, vec!["Central Air", "Gr Liv Area"]);
    }
}
