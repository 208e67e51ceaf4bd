//! The two-stage model: standardization followed by OLS regression.
//!
//! A [`Pipeline`] carries its training feature names so inference inputs can
//! be validated against the exact training-time feature set instead of
//! failing deep inside matrix arithmetic. The persisted form is a bincode
//! [`ModelEnvelope`] with an explicit format version.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};
use tracing::debug;

use homestream_core::stats::write_atomic;

use crate::error::{Result, TrainError};
use crate::regression::LinearRegression;
use crate::scaler::StandardScaler;

/// Format version written into every model artifact.
pub const MODEL_FORMAT_VERSION: u32 = 1;

/// A fitted scale-then-regress pipeline over named features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pipeline {
    feature_names: Vec<String>,
    scaler: StandardScaler,
    regressor: LinearRegression,
}

impl Pipeline {
    /// Fits the scaler and regressor on `(x, y)`.
    ///
    /// `feature_names` must match the columns of `x` in order.
    pub fn fit(feature_names: Vec<String>, x: &Array2<f64>, y: &Array1<f64>) -> Result<Self> {
        let scaler = StandardScaler::fit(x);
        let scaled = scaler.transform(x);
        let regressor = LinearRegression::fit(&scaled, y)?;
        Ok(Self {
            feature_names,
            scaler,
            regressor,
        })
    }

    /// The training-time feature names, in model order.
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    /// Predicts over a raw (unscaled) design matrix.
    pub fn predict_matrix(&self, x: &Array2<f64>) -> Array1<f64> {
        self.regressor.predict(&self.scaler.transform(x))
    }

    /// Predicts a single price from a feature-name → value mapping.
    ///
    /// The mapping must contain exactly the training feature set; missing or
    /// extraneous names produce [`TrainError::FeatureMismatch`].
    pub fn predict_row(&self, features: &BTreeMap<String, f64>) -> Result<f64> {
        let x = self.rows_to_matrix(std::slice::from_ref(features))?;
        Ok(self.predict_matrix(&x)[0])
    }

    /// Predicts one price per row, preserving input order.
    pub fn predict_rows(&self, rows: &[BTreeMap<String, f64>]) -> Result<Vec<f64>> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }
        let x = self.rows_to_matrix(rows)?;
        Ok(self.predict_matrix(&x).to_vec())
    }

    /// Assembles named rows into a matrix in training feature order.
    fn rows_to_matrix(&self, rows: &[BTreeMap<String, f64>]) -> Result<Array2<f64>> {
        let k = self.feature_names.len();
        let mut data = Vec::with_capacity(rows.len() * k);
        for row in rows {
            self.validate_keys(row)?;
            for name in &self.feature_names {
                data.push(row[name]);
            }
        }
        Ok(Array2::from_shape_vec((rows.len(), k), data)
            .expect("validated rows are rectangular"))
    }

    fn validate_keys(&self, row: &BTreeMap<String, f64>) -> Result<()> {
        let missing: Vec<String> = self
            .feature_names
            .iter()
            .filter(|name| !row.contains_key(*name))
            .cloned()
            .collect();
        let unexpected: Vec<String> = row
            .keys()
            .filter(|key| !self.feature_names.contains(key))
            .cloned()
            .collect();
        if missing.is_empty() && unexpected.is_empty() {
            Ok(())
        } else {
            Err(TrainError::FeatureMismatch { missing, unexpected })
        }
    }
}

/// Versioned on-disk wrapper around a [`Pipeline`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelEnvelope {
    /// Format version; must equal [`MODEL_FORMAT_VERSION`] on load.
    pub format_version: u32,
    /// The fitted pipeline.
    pub pipeline: Pipeline,
}

impl ModelEnvelope {
    /// Wraps a pipeline with the current format version.
    pub fn new(pipeline: Pipeline) -> Self {
        Self {
            format_version: MODEL_FORMAT_VERSION,
            pipeline,
        }
    }

    /// Serializes the envelope to `path` via a temp file and rename.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| TrainError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
        let bytes = bincode::serialize(self).map_err(|e| TrainError::ModelSerialization {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        write_atomic(path, &bytes)?;
        debug!(path = %path.display(), "wrote model artifact");
        Ok(())
    }
}
