//! Seeded synthetic Gomoku pattern counts.
//!
//! Each row holds six counts, one per [`Feature`](crate::features::Feature),
//! drawn uniformly from `{0, 1, 2}`. Labels are `+1.0` or `-1.0` with equal
//! probability and carry no relation to the counts.

use crate::dataset::InMemoryDataset;
use crate::error::{Result, WeightsError};
use crate::features::FEATURE_COUNT;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Exclusive upper bound on a generated pattern count.
pub const MAX_COUNT: u32 = 3;

/// Generator for synthetic board feature vectors.
pub struct SyntheticBoards;

impl SyntheticBoards {
    /// Draws `n_samples` rows from a generator seeded with `seed`.
    ///
    /// The same `(n_samples, seed)` always produces the same dataset.
    ///
    /// ```
    /// use gomoku_weights::dataset::SyntheticBoards;
    ///
    /// let data = SyntheticBoards::generate(10, 0).unwrap();
    /// assert_eq!(data.n_samples(), 10);
    /// assert_eq!(data.n_features(), 6);
    /// ```
    pub fn generate(n_samples: usize, seed: u64) -> Result<InMemoryDataset> {
        if n_samples == 0 {
            return Err(WeightsError::EmptyData(
                "cannot generate zero samples".into(),
            ));
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let x: Vec<Vec<f64>> = (0..n_samples)
            .map(|_| {
                (0..FEATURE_COUNT)
                    .map(|_| f64::from(rng.random_range(0..MAX_COUNT)))
                    .collect()
            })
            .collect();
        let y: Vec<f64> = (0..n_samples)
            .map(|_| if rng.random_bool(0.5) { 1.0 } else { -1.0 })
            .collect();

        log::debug!("generated {n_samples} synthetic boards (seed {seed})");
        InMemoryDataset::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_is_deterministic() {
        let a = SyntheticBoards::generate(200, 0).unwrap();
        let b = SyntheticBoards::generate(200, 0).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_values_in_range() {
        let data = SyntheticBoards::generate(500, 7).unwrap();

        for row in data.rows() {
            assert_eq!(row.len(), FEATURE_COUNT);
            assert!(row.iter().all(|v| [0.0, 1.0, 2.0].contains(v)));
        }
        assert!(data.targets().iter().all(|t| *t == 1.0 || *t == -1.0));
    }

    #[test]
    fn test_generate_uses_every_count_and_label() {
        let data = SyntheticBoards::generate(2000, 0).unwrap();
        let flat: Vec<f64> = data.rows().iter().flatten().copied().collect();

        for count in [0.0, 1.0, 2.0] {
            assert!(flat.contains(&count));
        }
        let positives = data.targets().iter().filter(|t| **t > 0.0).count();
        assert!(positives > 800 && positives < 1200);
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = SyntheticBoards::generate(100, 0).unwrap();
        let b = SyntheticBoards::generate(100, 1).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_generate_zero_samples_errors() {
        assert!(matches!(
            SyntheticBoards::generate(0, 0),
            Err(WeightsError::EmptyData(_))
        ));
    }
}
