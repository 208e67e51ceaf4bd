//! Offline training orchestration: prepare data, fit, evaluate, persist.
//!
//! This is a single linear batch job with no checkpointing or resumability;
//! rerunning it regenerates both artifacts from scratch.

use ndarray::{Array1, Array2};
use tracing::info;

use homestream_core::stats::FeatureStats;
use homestream_core::Settings;
use homestream_data::{download, load_processed, preprocess, Table, AMES_URL, SELECTED_COLUMNS};

use crate::error::Result;
use crate::pipeline::{ModelEnvelope, Pipeline};
use crate::split::train_test_split;
use crate::stats::{compute_feature_stats, mean_and_std};

/// Held-out evaluation metrics reported after a fit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    /// Root mean squared error over the test split.
    pub rmse: f64,
    /// Coefficient of determination over the test split.
    pub r2: f64,
}

/// Ensures raw data exists, cleans it, and loads the processed table.
///
/// The download is skipped when the raw file is already present; cleaning
/// always re-runs.
pub fn prepare_data(settings: &Settings) -> Result<Table> {
    let raw = settings.paths.raw_csv();
    if raw.exists() {
        info!(path = %raw.display(), "raw dataset present, skipping download");
    } else {
        download(AMES_URL, &raw, &SELECTED_COLUMNS)?;
    }

    let processed = settings.paths.processed_csv();
    preprocess(&raw, &processed)?;
    Ok(load_processed(&processed)?)
}

/// Runs the full training pass: split, fit, evaluate, compute statistics.
///
/// Feature summaries cover the full cleaned table while target mean/std are
/// computed over the training split only, mirroring what the fitted model
/// actually saw.
pub fn train_model(settings: &Settings) -> Result<(Pipeline, FeatureStats)> {
    let table = prepare_data(settings)?;
    let training = &settings.training;
    let processed = settings.paths.processed_csv();

    let feature_cols = table.select(&training.features, &processed)?;
    let target_col = table
        .select(std::slice::from_ref(&training.target), &processed)?
        .remove(0);

    let split = train_test_split(table.num_rows(), training.test_size, training.random_state)?;
    let (x_train, y_train) = gather(&feature_cols, target_col, &split.train);
    let (x_test, y_test) = gather(&feature_cols, target_col, &split.test);

    let pipeline = Pipeline::fit(training.features.clone(), &x_train, &y_train)?;
    let eval = evaluate(&pipeline, &x_test, &y_test);
    info!(
        rows = table.num_rows(),
        train_rows = split.train.len(),
        test_rows = split.test.len(),
        rmse = eval.rmse,
        r2 = eval.r2,
        "fitted regression pipeline"
    );

    let features = compute_feature_stats(&table, &training.target)?;
    let (target_mean, target_std) = mean_and_std(y_train.as_slice().unwrap_or(&[]));
    let stats = FeatureStats::new(features, target_mean, target_std, training.test_size);

    Ok((pipeline, stats))
}

/// Persists both artifacts under the configured model/artifact directories.
pub fn save_artifacts(
    pipeline: &Pipeline,
    stats: &FeatureStats,
    settings: &Settings,
) -> Result<()> {
    let model_path = settings.paths.model_file();
    let stats_path = settings.paths.stats_file();

    ModelEnvelope::new(pipeline.clone()).save(&model_path)?;
    stats.save(&stats_path)?;

    info!(
        model = %model_path.display(),
        stats = %stats_path.display(),
        "saved training artifacts"
    );
    Ok(())
}

/// Convenience entry point: train and persist in one call.
pub fn run(settings: &Settings) -> Result<()> {
    let (pipeline, stats) = train_model(settings)?;
    save_artifacts(&pipeline, &stats, settings)
}

/// Computes held-out RMSE and R².
pub fn evaluate(pipeline: &Pipeline, x_test: &Array2<f64>, y_test: &Array1<f64>) -> Evaluation {
    let preds = pipeline.predict_matrix(x_test);
    let n = y_test.len() as f64;

    let mse = preds
        .iter()
        .zip(y_test.iter())
        .map(|(p, t)| (p - t).powi(2))
        .sum::<f64>()
        / n;
    let mean = y_test.sum() / n;
    let ss_tot = y_test.iter().map(|t| (t - mean).powi(2)).sum::<f64>();
    let ss_res = mse * n;
    let r2 = if ss_tot == 0.0 { 0.0 } else { 1.0 - ss_res / ss_tot };

    Evaluation {
        rmse: mse.sqrt(),
        r2,
    }
}

/// Materializes the selected rows into a design matrix and target vector.
fn gather(feature_cols: &[&[f64]], target_col: &[f64], rows: &[usize]) -> (Array2<f64>, Array1<f64>) {
    let k = feature_cols.len();
    let mut x = Vec::with_capacity(rows.len() * k);
    let mut y = Vec::with_capacity(rows.len());
    for &row in rows {
        for col in feature_cols {
            x.push(col[row]);
        }
        y.push(target_col[row]);
    }
    (
        Array2::from_shape_vec((rows.len(), k), x).expect("row-major gather is rectangular"),
        Array1::from_vec(y),
    )
}
