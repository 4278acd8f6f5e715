//! Seeded train/test partition of row indices.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::error::{Error, Result};

/// Smallest dataset that leaves one row on each side.
pub const MIN_ROWS: usize = 2;

/// Row indices of each partition, in permutation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split {
    pub train: Vec<usize>,
    pub test: Vec<usize>,
}

/// Shuffle `0..n_rows` with `seed` and hold out `ceil(test_size * n_rows)` rows.
///
/// The held-out count is clamped so both partitions are non-empty. The same
/// `(n_rows, test_size, seed)` always gives the same split.
pub fn train_test_split(n_rows: usize, test_size: f64, seed: u64) -> Result<Split> {
    if n_rows < MIN_ROWS {
        return Err(Error::InsufficientData {
            rows: n_rows,
            required: MIN_ROWS,
        });
    }
    if !(test_size > 0.0 && test_size < 1.0) {
        return Err(Error::InvalidConfig(format!(
            "test_size must be in (0, 1), got {test_size}"
        )));
    }

    let n_test = ((test_size * n_rows as f64).ceil() as usize).clamp(1, n_rows - 1);

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut indices: Vec<usize> = (0..n_rows).collect();
    indices.shuffle(&mut rng);

    let train = indices.split_off(n_test);
    tracing::debug!(train = train.len(), test = indices.len(), seed, "split rows");
    Ok(Split {
        train,
        test: indices,
    })
}
