use super::tensor1d::Tensor1D;
use crate::backend::Backend;
use std::marker::PhantomData;

/// Backend-typed row-major matrix, one sample per row.
#[derive(Clone)]
pub struct Tensor2D<B: Backend> {
    pub(crate) data: B::Tensor2D,
    pub(crate) backend: PhantomData<B>,
}

impl<B: Backend> Tensor2D<B> {
    /// Builds a `(rows, cols)` matrix from row-major host data.
    ///
    /// # Panics
    /// If `data.len() != rows * cols`.
    pub fn new(data: Vec<f64>, rows: usize, cols: usize) -> Self {
        Self {
            data: B::from_vec_2d(data, rows, cols),
            backend: PhantomData,
        }
    }

    /// Matrix-vector product `self · other`.
    pub fn dot(&self, other: &Tensor1D<B>) -> Tensor1D<B> {
        Tensor1D {
            data: B::matvec(&self.data, &other.data),
            backend: PhantomData,
        }
    }

    /// Transposed product `selfᵀ · other`.
    pub fn tdot(&self, other: &Tensor1D<B>) -> Tensor1D<B> {
        Tensor1D {
            data: B::matvec_transposed(&self.data, &other.data),
            backend: PhantomData,
        }
    }

    pub fn shape(&self) -> (usize, usize) {
        B::shape(&self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::CpuBackend;

    #[test]
    fn test_tensor2d_matvec_ops() {
        // A = [[1, 2],
        //      [3, 4]]
        let a = Tensor2D::<CpuBackend>::new(vec![1.0, 2.0, 3.0, 4.0], 2, 2);
        let x = Tensor1D::<CpuBackend>::new(vec![1.0, 0.0]);

        assert_eq!(a.dot(&x).to_vec(), vec![1.0, 3.0]);
        // Aᵀ = [[1, 3],
        //       [2, 4]]
        assert_eq!(a.tdot(&x).to_vec(), vec![1.0, 2.0]);
    }

    #[test]
    fn test_tensor2d_shape() {
        let t = Tensor2D::<CpuBackend>::new(vec![1.0, 2.0, 3.0], 3, 1);
        assert_eq!(t.shape(), (3, 1));

        let empty = Tensor2D::<CpuBackend>::new(vec![], 0, 6);
        assert_eq!(empty.shape(), (0, 6));
    }
}
