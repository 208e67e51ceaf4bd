//! Deterministic train/test row splitting.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::error::{Result, TrainError};

/// Row indices assigned to the training and test sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split {
    /// Indices of training rows.
    pub train: Vec<usize>,
    /// Indices of held-out rows.
    pub test: Vec<usize>,
}

/// Shuffles `num_rows` indices with a seeded RNG and splits off a test set.
///
/// The split is deterministic for a given `(num_rows, test_size, seed)`
/// triple. Both sides are guaranteed non-empty, which requires at least two
/// rows.
pub fn train_test_split(num_rows: usize, test_size: f64, seed: u64) -> Result<Split> {
    if num_rows < 2 {
        return Err(TrainError::TooFewRows { rows: num_rows, min: 2 });
    }

    let mut indices: Vec<usize> = (0..num_rows).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let test_len = ((num_rows as f64) * test_size).round() as usize;
    let test_len = test_len.clamp(1, num_rows - 1);

    let train = indices.split_off(test_len);
    Ok(Split { train, test: indices })
}
