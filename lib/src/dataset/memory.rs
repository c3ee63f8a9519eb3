use crate::backend::{Backend, Tensor1D, Tensor2D};
use crate::dataset::Dataset;
use crate::error::{Result, WeightsError};
use std::ops::Range;

/// Rows of features and their targets, held in memory.
#[derive(Debug, Clone, PartialEq)]
pub struct InMemoryDataset {
    x: Vec<Vec<f64>>,
    y: Vec<f64>,
}

impl InMemoryDataset {
    /// Validates and wraps the data.
    ///
    /// Fails when `x` and `y` differ in length, when there are no rows, or
    /// when rows have differing feature counts.
    pub fn new(x: Vec<Vec<f64>>, y: Vec<f64>) -> Result<Self> {
        if x.len() != y.len() {
            return Err(WeightsError::InvalidParameter(format!(
                "x has {} rows but y has {} targets",
                x.len(),
                y.len()
            )));
        }
        let Some(first) = x.first() else {
            return Err(WeightsError::EmptyData("dataset has no rows".into()));
        };
        let n_features = first.len();
        if let Some(row) = x.iter().find(|row| row.len() != n_features) {
            return Err(WeightsError::FeatureMismatch {
                expected: n_features,
                got: row.len(),
            });
        }
        Ok(Self { x, y })
    }

    pub fn n_samples(&self) -> usize {
        self.x.len()
    }

    pub fn n_features(&self) -> usize {
        self.x[0].len()
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.x
    }

    pub fn targets(&self) -> &[f64] {
        &self.y
    }
}

impl Dataset for InMemoryDataset {
    type Error = WeightsError;
    type Item = (Vec<f64>, f64);

    fn len(&self) -> Option<usize> {
        Some(self.x.len())
    }

    fn get_batch<B: Backend>(
        &self,
        range: Range<usize>,
    ) -> std::result::Result<(Tensor2D<B>, Tensor1D<B>), Self::Error> {
        if range.start > range.end || range.end > self.x.len() {
            return Err(WeightsError::Data(format!(
                "batch {:?} out of bounds for {} samples",
                range,
                self.x.len()
            )));
        }
        let batch_x = &self.x[range.clone()];
        let batch_y = &self.y[range];

        let data = batch_x.iter().flat_map(|row| row.iter()).copied().collect();
        let x_tensor = Tensor2D::<B>::new(data, batch_x.len(), self.n_features());
        let y_tensor = Tensor1D::<B>::new(batch_y.to_vec());

        Ok((x_tensor, y_tensor))
    }
}
