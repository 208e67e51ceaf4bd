//! Per-column standardization (zero mean, unit variance).

use ndarray::{Array2, Axis};
use serde::{Deserialize, Serialize};

/// Standardizes columns to zero mean and unit variance.
///
/// Fit on the training split only. Columns with zero variance are scaled by
/// 1.0 so transforming them centers without dividing by zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    /// Per-column means from the fit data.
    pub means: Vec<f64>,
    /// Per-column population standard deviations (zero replaced by 1.0).
    pub stds: Vec<f64>,
}

impl StandardScaler {
    /// Fits means and stds over the rows of `x`.
    pub fn fit(x: &Array2<f64>) -> Self {
        let n = x.nrows() as f64;
        let mut means = Vec::with_capacity(x.ncols());
        let mut stds = Vec::with_capacity(x.ncols());

        for col in x.axis_iter(Axis(1)) {
            let mean = col.sum() / n;
            let var = col.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
            let std = var.sqrt();
            means.push(mean);
            stds.push(if std == 0.0 { 1.0 } else { std });
        }

        Self { means, stds }
    }

    /// Centers and scales each column of `x`.
    pub fn transform(&self, x: &Array2<f64>) -> Array2<f64> {
        let mut out = x.clone();
        for (j, mut col) in out.axis_iter_mut(Axis(1)).enumerate() {
            col.mapv_inplace(|v| (v - self.means[j]) / self.stds[j]);
        }
        out
    }
}
