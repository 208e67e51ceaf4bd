//! Ordinary least squares fit via the normal equations.

use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TrainError};

/// A fitted linear regressor: `y = x · weights + intercept`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearRegression {
    /// One weight per input column.
    pub weights: Vec<f64>,
    /// Bias term.
    pub intercept: f64,
}

impl LinearRegression {
    /// Fits weights and intercept minimizing squared error over `(x, y)`.
    ///
    /// Solves `Aᵀ A β = Aᵀ y` for the design matrix `A = [x | 1]` with
    /// Gaussian elimination. Fails on a singular system (e.g. perfectly
    /// collinear columns).
    pub fn fit(x: &Array2<f64>, y: &Array1<f64>) -> Result<Self> {
        let (n, k) = (x.nrows(), x.ncols());
        let mut design = Array2::<f64>::ones((n, k + 1));
        design.slice_mut(ndarray::s![.., ..k]).assign(x);

        let gram = design.t().dot(&design);
        let rhs = design.t().dot(y);
        let beta = solve(gram, rhs)?;

        let mut weights = beta.to_vec();
        let intercept = weights.pop().unwrap_or(0.0);
        Ok(Self { weights, intercept })
    }

    /// Predicts one value per row of `x`.
    pub fn predict(&self, x: &Array2<f64>) -> Array1<f64> {
        let w = Array1::from_vec(self.weights.clone());
        x.dot(&w) + self.intercept
    }
}

/// Solves `a · x = b` by Gaussian elimination with partial pivoting.
fn solve(mut a: Array2<f64>, mut b: Array1<f64>) -> Result<Array1<f64>> {
    let n = a.nrows();
    for col in 0..n {
        // Pivot on the largest remaining magnitude in this column.
        let pivot_row = (col..n)
            .max_by(|&i, &j| {
                a[[i, col]]
                    .abs()
                    .partial_cmp(&a[[j, col]].abs())
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .unwrap_or(col);
        if a[[pivot_row, col]].abs() < 1e-12 {
            return Err(TrainError::SingularMatrix {
                message: format!("zero pivot at column {col}"),
            });
        }
        if pivot_row != col {
            for j in 0..n {
                let tmp = a[[col, j]];
                a[[col, j]] = a[[pivot_row, j]];
                a[[pivot_row, j]] = tmp;
            }
            b.swap(col, pivot_row);
        }

        for row in (col + 1)..n {
            let factor = a[[row, col]] / a[[col, col]];
            for j in col..n {
                a[[row, j]] -= factor * a[[col, j]];
            }
            b[row] -= factor * b[col];
        }
    }

    // Back substitution.
    let mut x = Array1::<f64>::zeros(n);
    for row in (0..n).rev() {
        let mut acc = b[row];
        for j in (row + 1)..n {
            acc -= a[[row, j]] * x[j];
        }
        x[row] = acc / a[[row, row]];
    }
    Ok(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_fit_recovers_exact_linear_relationship() {
        // y = 2a - 3b + 5
        let x = array![
            [1.0, 1.0],
            [2.0, 0.0],
            [3.0, 4.0],
            [0.0, 2.0],
            [5.0, 1.0],
        ];
        let y = x.map_axis(ndarray::Axis(1), |row| 2.0 * row[0] - 3.0 * row[1] + 5.0);

        let model = LinearRegression::fit(&x, &y).unwrap();
        assert!((model.weights[0] - 2.0).abs() < 1e-8);
        assert!((model.weights[1] + 3.0).abs() < 1e-8);
        assert!((model.intercept - 5.0).abs() < 1e-8);

        let preds = model.predict(&x);
        for (p, t) in preds.iter().zip(y.iter()) {
            assert!((p - t).abs() < 1e-8);
        }
    }

    #[test]
    fn test_fit_univariate_noisy_data_is_finite() {
        let x = array![[1.0], [2.0], [3.0], [4.0]];
        let y = array![2.1, 3.9, 6.2, 7.8];
        let model = LinearRegression::fit(&x, &y).unwrap();
        assert!(model.weights[0].is_finite());
        assert!(model.intercept.is_finite());
        // Slope of roughly 2.
        assert!((model.weights[0] - 1.94).abs() < 0.2);
    }

    #[test]
    fn test_fit_rejects_collinear_columns() {
        // Second column is exactly twice the first.
        let x = array![[1.0, 2.0], [2.0, 4.0], [3.0, 6.0], [4.0, 8.0]];
        let y = array![1.0, 2.0, 3.0, 4.0];
        let err = LinearRegression::fit(&x, &y).unwrap_err();
        assert!(matches!(err, TrainError::SingularMatrix { .. }));
    }
}
