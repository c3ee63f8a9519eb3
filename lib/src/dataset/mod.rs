//! Dataset abstractions for training.
//!
//! A [`Dataset`] is a source of `(X, y)` pairs: `X` is `(n_samples, n_features)`
//! and `y` is `(n_samples,)`. [`DatasetBatchIter`] walks it in contiguous
//! mini-batches.
//!
//! # Example
//!
//! ```rust
//! use gomoku_weights::backend::CpuBackend;
//! use gomoku_weights::dataset::{Dataset, InMemoryDataset};
//!
//! let x = vec![vec![1.0, 0.0], vec![2.0, 1.0], vec![0.0, 2.0]];
//! let y = vec![1.0, -1.0, 1.0];
//! let dataset = InMemoryDataset::new(x, y).unwrap();
//!
//! let sizes: Vec<usize> = dataset
//!     .batches::<CpuBackend>(2)
//!     .map(|batch| batch.unwrap().0.shape().0)
//!     .collect();
//! assert_eq!(sizes, vec![2, 1]);
//! ```

use crate::backend::{Backend, Tensor1D, Tensor2D};
use std::{fmt::Debug, marker::PhantomData, ops::Range};

pub mod memory;
pub mod synthetic;

pub use self::memory::InMemoryDataset;
pub use self::synthetic::SyntheticBoards;

/// Uniform access to training data.
pub trait Dataset {
    /// Error type returned when accessing data.
    type Error: Debug + 'static;

    /// Type of a single dataset item.
    type Item: ?Sized;

    /// Total number of samples, or `None` when unknown (streams).
    fn len(&self) -> Option<usize>;

    fn is_empty(&self) -> bool {
        self.len() == Some(0)
    }

    /// Iterator over consecutive batches of `batch_size` samples; the last
    /// batch may be smaller.
    fn batches<B: Backend>(&self, batch_size: usize) -> DatasetBatchIter<'_, B, Self>
    where
        Self: Sized,
    {
        DatasetBatchIter {
            dataset: self,
            batch_size,
            current: 0,
            _backend: PhantomData,
        }
    }

    /// Loads samples `range.start..range.end` as tensors.
    fn get_batch<B: Backend>(
        &self,
        range: Range<usize>,
    ) -> Result<(Tensor2D<B>, Tensor1D<B>), Self::Error>;
}

/// Iterator over dataset batches, created by [`Dataset::batches`].
///
/// Data is fetched lazily on `next()`. Errors from `get_batch` are yielded as
/// `Some(Err(e))`; iteration ends once all samples are consumed. A
/// `batch_size` of zero yields nothing.
pub struct DatasetBatchIter<'a, B: Backend, D: ?Sized> {
    dataset: &'a D,
    batch_size: usize,
    current: usize,
    _backend: PhantomData<B>,
}

impl<B: Backend, D: Dataset> Iterator for DatasetBatchIter<'_, B, D> {
    type Item = Result<(Tensor2D<B>, Tensor1D<B>), D::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let total = self.dataset.len()?;
        if self.batch_size == 0 || self.current >= total {
            return None;
        }

        let end = (self.current + self.batch_size).min(total);
        let range = self.current..end;
        self.current = end;

        Some(self.dataset.get_batch::<B>(range))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::CpuBackend;

    struct MockDataset {
        len: usize,
    }

    impl Dataset for MockDataset {
        type Error = &'static str;
        type Item = ();

        fn len(&self) -> Option<usize> {
            Some(self.len)
        }

        fn get_batch<B: Backend>(
            &self,
            range: Range<usize>,
        ) -> Result<(Tensor2D<B>, Tensor1D<B>), Self::Error> {
            if range.end > self.len {
                return Err("range out of bounds");
            }
            let n = range.len();
            let x: Vec<f64> = (0..n * 2).map(|i| (range.start * 2 + i) as f64).collect();
            let y: Vec<f64> = range.map(|i| i as f64).collect();
            Ok((Tensor2D::new(x, n, 2), Tensor1D::new(y)))
        }
    }

    #[test]
    fn test_dataset_is_empty() {
        assert!(MockDataset { len: 0 }.is_empty());
        assert!(!MockDataset { len: 1 }.is_empty());
    }

    #[test]
    fn test_batches_full() {
        let dataset = MockDataset { len: 6 };
        let mut iter = dataset.batches::<CpuBackend>(2);

        for i in 0..3 {
            let (x, y) = iter.next().unwrap().unwrap();
            assert_eq!(x.shape(), (2, 2));
            assert_eq!(y.to_vec(), vec![i as f64 * 2.0, i as f64 * 2.0 + 1.0]);
        }
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_batches_partial_last() {
        let dataset = MockDataset { len: 5 };
        let mut iter = dataset.batches::<CpuBackend>(2);

        assert_eq!(iter.next().unwrap().unwrap().0.shape(), (2, 2));
        assert_eq!(iter.next().unwrap().unwrap().0.shape(), (2, 2));
        assert_eq!(iter.next().unwrap().unwrap().0.shape(), (1, 2));
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_batches_larger_than_dataset() {
        let dataset = MockDataset { len: 3 };
        let mut iter = dataset.batches::<CpuBackend>(10);

        assert_eq!(iter.next().unwrap().unwrap().0.shape(), (3, 2));
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_batches_zero_batch_size_yields_nothing() {
        let dataset = MockDataset { len: 3 };
        assert!(dataset.batches::<CpuBackend>(0).next().is_none());
    }
}
