use super::scalar::Scalar;
use crate::backend::Backend;
use std::marker::PhantomData;

/// Backend-typed 1D tensor.
///
/// Wraps a backend's native vector (`B::Tensor1D`) and carries the backend as
/// a phantom type, so a weight vector from one backend cannot be combined with
/// a prediction vector from another.
///
/// # Example
/// ```
/// use gomoku_weights::backend::{CpuBackend, Scalar, Tensor1D};
///
/// let x: Tensor1D<CpuBackend> = Tensor1D::new(vec![1.0, 2.0, 3.0]);
/// let y = x.scale(&Scalar::new(2.0));
/// assert_eq!(y.to_vec(), vec![2.0, 4.0, 6.0]);
/// ```
#[derive(Clone)]
pub struct Tensor1D<B: Backend> {
    pub(crate) data: B::Tensor1D,
    pub(crate) backend: PhantomData<B>,
}

impl<B: Backend> Tensor1D<B> {
    /// Creates a tensor from host values.
    pub fn new(data: Vec<f64>) -> Self {
        Self {
            data: B::from_vec_1d(data),
            backend: PhantomData,
        }
    }

    /// Creates a tensor of `len` zeros.
    ///
    /// ```
    /// use gomoku_weights::backend::{CpuBackend, Tensor1D};
    ///
    /// let zeros: Tensor1D<CpuBackend> = Tensor1D::zeros(6);
    /// assert_eq!(zeros.to_vec(), vec![0.0; 6]);
    /// ```
    pub fn zeros(len: usize) -> Self {
        Self {
            data: B::zeros_1d(len),
            backend: PhantomData,
        }
    }

    /// Element-wise `self + other`.
    pub fn add(&self, other: &Self) -> Self {
        Self {
            data: B::add_1d(&self.data, &other.data),
            backend: PhantomData,
        }
    }

    /// Element-wise `self - other`.
    pub fn sub(&self, other: &Self) -> Self {
        Self {
            data: B::sub_1d(&self.data, &other.data),
            backend: PhantomData,
        }
    }

    /// Multiplies every element by `a`.
    pub fn scale(&self, a: &Scalar<B>) -> Self {
        Self {
            data: B::mul_scalar_1d(&self.data, &a.data),
            backend: PhantomData,
        }
    }

    /// Adds `a` to every element.
    pub fn add_scalar(&self, a: &Scalar<B>) -> Self {
        Self {
            data: B::add_scalar_1d(&self.data, &a.data),
            backend: PhantomData,
        }
    }

    /// Inner product `Σᵢ selfᵢ · otherᵢ`.
    ///
    /// ```
    /// use gomoku_weights::backend::{CpuBackend, Tensor1D};
    ///
    /// let a = Tensor1D::<CpuBackend>::new(vec![1.0, 2.0, 3.0]);
    /// let b = Tensor1D::<CpuBackend>::new(vec![4.0, 5.0, 6.0]);
    /// assert_eq!(a.dot(&b).to_f64(), 32.0);
    /// ```
    pub fn dot(&self, other: &Self) -> Scalar<B> {
        let prod = B::mul_1d(&self.data, &other.data);
        Scalar {
            data: B::sum_all_1d(&prod),
            backend: PhantomData,
        }
    }

    /// Sum of all elements.
    pub fn sum(&self) -> Scalar<B> {
        Scalar {
            data: B::sum_all_1d(&self.data),
            backend: PhantomData,
        }
    }

    /// Copies the tensor to host memory.
    pub fn to_vec(&self) -> Vec<f64> {
        B::to_vec_1d(&self.data)
    }

    pub fn len(&self) -> usize {
        B::len_1d(&self.data)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
