//! Settings loading and filesystem layout.
//!
//! Configuration lives in a YAML file with `training`, `simulator`, and `app`
//! sections. All keys are required; a missing key fails loudly at load time.
//! The on-disk layout (raw data, processed data, models, artifacts, logs) is
//! derived from an explicit project root passed by the caller rather than
//! inferred from the config file's location.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Filesystem layout for all pipeline inputs and outputs.
///
/// Every path is derived deterministically from the project root.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Paths {
    /// Root directory everything else hangs off.
    pub project_root: PathBuf,
    /// Raw downloaded dataset files.
    pub data_raw: PathBuf,
    /// Cleaned dataset files.
    pub data_processed: PathBuf,
    /// Serialized model artifacts.
    pub models: PathBuf,
    /// Non-model artifacts (feature statistics).
    pub artifacts: PathBuf,
    /// Event logs written by the front end.
    pub logs: PathBuf,
}

impl Paths {
    /// Derives the standard layout under `root`.
    pub fn from_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            data_raw: root.join("data").join("raw"),
            data_processed: root.join("data").join("processed"),
            models: root.join("models"),
            artifacts: root.join("artifacts"),
            logs: root.join("logs"),
            project_root: root,
        }
    }

    /// Location of the raw downloaded dataset subset.
    pub fn raw_csv(&self) -> PathBuf {
        self.data_raw.join("ames_subset.csv")
    }

    /// Location of the cleaned dataset.
    pub fn processed_csv(&self) -> PathBuf {
        self.data_processed.join("ames_subset_clean.csv")
    }

    /// Location of the serialized regression pipeline.
    pub fn model_file(&self) -> PathBuf {
        self.models.join("linear_regression.bin")
    }

    /// Location of the feature statistics artifact.
    pub fn stats_file(&self) -> PathBuf {
        self.artifacts.join("feature_stats.json")
    }

    /// Location of the append-only event log.
    pub fn event_log(&self) -> PathBuf {
        self.logs.join("events.jsonl")
    }
}

/// Training hyperparameters from the `training` section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrainingConfig {
    /// Name of the target column.
    pub target: String,
    /// Names of the feature columns, in model order.
    pub features: Vec<String>,
    /// Fraction of rows held out for evaluation, in (0, 1).
    pub test_size: f64,
    /// Seed for the train/test split.
    pub random_state: u64,
}

/// Event simulator pacing from the `simulator` section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimulatorConfig {
    /// Seconds to wait between event batches.
    pub interval_seconds: f64,
    /// Number of events per batch.
    pub batch_size: usize,
}

/// Front-end display options from the `app` section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Dashboard title.
    pub title: String,
    /// UI refresh rate in seconds.
    pub refresh_rate: f64,
}

/// Raw on-disk config shape, before path resolution and validation.
#[derive(Debug, Deserialize)]
struct RawConfig {
    training: TrainingConfig,
    simulator: SimulatorConfig,
    app: AppConfig,
}

/// Immutable settings resolved once at startup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    /// Derived filesystem layout.
    pub paths: Paths,
    /// Training hyperparameters.
    pub training: TrainingConfig,
    /// Simulator pacing.
    pub simulator: SimulatorConfig,
    /// Display options.
    pub app: AppConfig,
}

impl Settings {
    /// Loads settings from a YAML file, resolving paths under `project_root`.
    ///
    /// Fails when the file is absent, malformed, missing a required key, or
    /// when a value is out of range.
    pub fn load(config_path: &Path, project_root: &Path) -> Result<Settings> {
        let text =
            fs::read_to_string(config_path).map_err(|e| CoreError::io(config_path, e))?;
        let raw: RawConfig = serde_yaml::from_str(&text)
            .map_err(|e| CoreError::config(config_path, e.to_string()))?;

        let settings = Settings {
            paths: Paths::from_root(project_root),
            training: raw.training,
            simulator: raw.simulator,
            app: raw.app,
        };
        settings.validate(config_path)?;
        Ok(settings)
    }

    fn validate(&self, config_path: &Path) -> Result<()> {
        let t = &self.training;
        if t.features.is_empty() {
            return Err(CoreError::config(config_path, "`training.features` is empty"));
        }
        if !(t.test_size > 0.0 && t.test_size < 1.0) {
            return Err(CoreError::config(
                config_path,
                format!("`training.test_size` must be in (0, 1), got {}", t.test_size),
            ));
        }
        if t.features.iter().any(|f| f == &t.target) {
            return Err(CoreError::config(
                config_path,
                format!("target column `{}` also listed as a feature", t.target),
            ));
        }
        if self.simulator.batch_size == 0 {
            return Err(CoreError::config(config_path, "`simulator.batch_size` must be >= 1"));
        }
        if !(self.simulator.interval_seconds > 0.0) {
            return Err(CoreError::config(
                config_path,
                "`simulator.interval_seconds` must be positive",
            ));
        }
        if !(self.app.refresh_rate > 0.0) {
            return Err(CoreError::config(config_path, "`app.refresh_rate` must be positive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const GOOD_YAML: &str = r#"
training:
  target: "SalePrice"
  features: ["Overall Qual", "Overall Cond", "Gr Liv Area", "Central Air", "Total Bsmt SF"]
  test_size: 0.2
  random_state: 42
simulator:
  interval_seconds: 30.0
  batch_size: 2
app:
  title: "Ames Housing Live Prices"
  refresh_rate: 1.0
"#;

    fn write_config(dir: &TempDir, text: &str) -> PathBuf {
        let path = dir.path().join("default.yaml");
        fs::write(&path, text).unwrap();
        path
    }

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, GOOD_YAML);

        let settings = Settings::load(&path, dir.path()).unwrap();
        assert_eq!(settings.training.target, "SalePrice");
        assert_eq!(settings.training.features.len(), 5);
        assert_eq!(settings.simulator.batch_size, 2);
        assert_eq!(settings.paths.project_root, dir.path());
        assert_eq!(
            settings.paths.raw_csv(),
            dir.path().join("data").join("raw").join("ames_subset.csv")
        );
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let err = Settings::load(&dir.path().join("absent.yaml"), dir.path()).unwrap_err();
        assert!(matches!(err, CoreError::Io { .. }));
    }

    #[test]
    fn test_load_missing_section_fails() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "training:\n  target: \"SalePrice\"\n");
        let err = Settings::load(&path, dir.path()).unwrap_err();
        assert!(matches!(err, CoreError::Config { .. }));
    }

    #[test]
    fn test_load_rejects_bad_test_size() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, &GOOD_YAML.replace("0.2", "1.5"));
        let err = Settings::load(&path, dir.path()).unwrap_err();
        assert!(err.to_string().contains("test_size"));
    }

    #[test]
    fn test_load_rejects_zero_batch() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, &GOOD_YAML.replace("batch_size: 2", "batch_size: 0"));
        let err = Settings::load(&path, dir.path()).unwrap_err();
        assert!(err.to_string().contains("batch_size"));
    }

    #[test]
    fn test_paths_derived_from_explicit_root() {
        let paths = Paths::from_root("/srv/homestream");
        assert_eq!(paths.models, PathBuf::from("/srv/homestream/models"));
        assert_eq!(
            paths.stats_file(),
            PathBuf::from("/srv/homestream/artifacts/feature_stats.json")
        );
        assert_eq!(
            paths.event_log(),
            PathBuf::from("/srv/homestream/logs/events.jsonl")
        );
    }
}
