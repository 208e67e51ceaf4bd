//! Inference helpers for the homestream regression model.
//!
//! The predictor is read-only: it deserializes the pipeline the trainer
//! persisted and exposes single-row and batch prediction over feature-name
//! mappings. Input mappings are validated against the training-time feature
//! set before any matrix work happens.

pub mod error;

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use homestream_train::{ModelEnvelope, MODEL_FORMAT_VERSION};

pub use error::{PredictError, Result};

// Consumers hold the loaded pipeline without depending on the train crate.
pub use homestream_train::Pipeline;

/// Loads and verifies a persisted model artifact.
///
/// Distinct errors cover a missing file, undecodable bytes, and a format
/// version this build does not understand.
pub fn load_model(path: &Path) -> Result<Pipeline> {
    let bytes = fs::read(path).map_err(|e| PredictError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let envelope: ModelEnvelope =
        bincode::deserialize(&bytes).map_err(|e| PredictError::Corrupt {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    if envelope.format_version != MODEL_FORMAT_VERSION {
        return Err(PredictError::FormatVersion {
            path: path.to_path_buf(),
            expected: MODEL_FORMAT_VERSION,
            found: envelope.format_version,
        });
    }
    debug!(path = %path.display(), features = envelope.pipeline.feature_names().len(), "loaded model");
    Ok(envelope.pipeline)
}

/// Predicts a single house price from a feature mapping.
pub fn predict_price(model: &Pipeline, features: &BTreeMap<String, f64>) -> Result<f64> {
    Ok(model.predict_row(features)?)
}

/// Predicts prices for many houses, one output per input row, in order.
pub fn batch_predict(model: &Pipeline, rows: &[BTreeMap<String, f64>]) -> Result<Vec<f64>> {
    Ok(model.predict_rows(rows)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use homestream_train::TrainError;
    use ndarray::array;
    use tempfile::TempDir;

    fn dummy_model_file(dir: &TempDir) -> std::path::PathBuf {
        let x = array![[1.0], [2.0], [3.0]];
        let y = array![100_000.0, 150_000.0, 200_000.0];
        let pipeline = Pipeline::fit(vec!["feature".to_string()], &x, &y).unwrap();
        let path = dir.path().join("dummy.bin");
        ModelEnvelope::new(pipeline).save(&path).unwrap();
        path
    }

    fn row(value: f64) -> BTreeMap<String, f64> {
        BTreeMap::from([("feature".to_string(), value)])
    }

    #[test]
    fn test_predict_price_returns_finite_value() {
        let dir = TempDir::new().unwrap();
        let model = load_model(&dummy_model_file(&dir)).unwrap();

        let price = predict_price(&model, &row(1.5)).unwrap();
        assert!(price.is_finite());
        assert!(price > 0.0);
    }

    #[test]
    fn test_batch_predict_handles_multiple_rows() {
        let dir = TempDir::new().unwrap();
        let model = load_model(&dummy_model_file(&dir)).unwrap();

        let predictions = batch_predict(&model, &[row(1.0), row(2.0)]).unwrap();
        assert_eq!(predictions.len(), 2);
        // Order preserved: the larger input predicts the larger price.
        assert!(predictions[1] > predictions[0]);
    }

    #[test]
    fn test_load_model_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = load_model(&dir.path().join("absent.bin")).unwrap_err();
        assert!(matches!(err, PredictError::Io { .. }));
    }

    #[test]
    fn test_load_model_corrupt_bytes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("garbage.bin");
        std::fs::write(&path, b"not a model").unwrap();
        let err = load_model(&path).unwrap_err();
        assert!(matches!(err, PredictError::Corrupt { .. }));
    }

    #[test]
    fn test_load_model_rejects_version_skew() {
        let dir = TempDir::new().unwrap();
        let path = dummy_model_file(&dir);

        let bytes = std::fs::read(&path).unwrap();
        let mut envelope: ModelEnvelope = bincode::deserialize(&bytes).unwrap();
        envelope.format_version = 99;
        std::fs::write(&path, bincode::serialize(&envelope).unwrap()).unwrap();

        let err = load_model(&path).unwrap_err();
        assert!(matches!(
            err,
            PredictError::FormatVersion { expected: MODEL_FORMAT_VERSION, found: 99, .. }
        ));
    }

    #[test]
    fn test_predict_price_rejects_wrong_features() {
        let dir = TempDir::new().unwrap();
        let model = load_model(&dummy_model_file(&dir)).unwrap();

        let bad = BTreeMap::from([("other".to_string(), 1.0)]);
        let err = predict_price(&model, &bad).unwrap_err();
        assert!(matches!(
            err,
            PredictError::Inference(TrainError::FeatureMismatch { .. })
        ));
    }
}
