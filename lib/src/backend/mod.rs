//! # Backend Abstraction
//!
//! The fitting routine is written against a small [`Backend`] trait rather than
//! against concrete vectors, so the linear model, losses and optimizer never
//! touch storage details directly.
//!
//! Only the operations needed to fit and evaluate a linear regressor with
//! stochastic gradient descent are part of the trait:
//!
//! - construction from host `f64` data,
//! - element-wise 1D arithmetic and scalar broadcasting,
//! - the `sum` reduction and the inner product,
//! - matrix-vector products `X·w` and `Xᵀ·g`.
//!
//! ## Available Backends
//!
//! | Backend      | Storage                          |
//! |--------------|----------------------------------|
//! | `CpuBackend` | `Vec<f64>` / row-major `Vec<f64>` |
//!
//! ## Example
//!
//! ```rust
//! use gomoku_weights::backend::{CpuBackend, Tensor1D, Tensor2D};
//!
//! let x: Tensor1D<CpuBackend> = Tensor1D::new(vec![1.0, 2.0]);
//! let a: Tensor2D<CpuBackend> = Tensor2D::new(vec![0.5, 0.5, 1.0, -1.0], 2, 2);
//!
//! let y = a.dot(&x);
//! assert_eq!(y.to_vec(), vec![1.5, -1.0]);
//! ```

pub mod cpu;
pub use cpu::{CpuBackend, CpuTensor2D};

/// Scalar value representation and arithmetic operations.
pub mod scalar;
/// One-dimensional tensor abstraction.
pub mod tensor1d;
/// Two-dimensional tensor abstraction.
pub mod tensor2d;

pub use scalar::{Scalar, ScalarOps};
pub use tensor1d::Tensor1D;
pub use tensor2d::Tensor2D;

/// Abstraction over tensor storage and the numeric kernels used in training.
///
/// Implementations provide concrete tensor types; the typed wrappers
/// [`Tensor1D`], [`Tensor2D`] and [`Scalar`] carry the backend as a phantom
/// parameter so tensors from different backends cannot be mixed.
///
/// # Shape checking
///
/// `matvec` and `matvec_transposed` panic on shape mismatch. Element-wise
/// operations assume equal lengths.
pub trait Backend: Clone + Copy + 'static {
    /// Scalar type supporting arithmetic operations.
    type Scalar: ScalarOps + Clone + std::fmt::Debug;

    /// One-dimensional tensor type.
    type Tensor1D: Clone + Send + Sync;

    /// Two-dimensional tensor type.
    type Tensor2D: Clone + Send + Sync;

    // --- Constructors ---

    /// Creates a 1D tensor filled with zeros of given length.
    fn zeros_1d(len: usize) -> Self::Tensor1D;

    /// Constructs a 1D tensor from owned host data.
    fn from_vec_1d(data: Vec<f64>) -> Self::Tensor1D;

    /// Constructs a 2D tensor from row-major ordered data.
    ///
    /// # Panics
    /// If `data.len() != rows * cols`.
    fn from_vec_2d(data: Vec<f64>, rows: usize, cols: usize) -> Self::Tensor2D;

    // --- Element-wise operations ---

    /// Element-wise addition of two 1D tensors.
    fn add_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> Self::Tensor1D;

    /// Element-wise subtraction of two 1D tensors.
    fn sub_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> Self::Tensor1D;

    /// Element-wise multiplication of two 1D tensors.
    fn mul_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> Self::Tensor1D;

    /// Multiplies each element of tensor by a scalar.
    fn mul_scalar_1d(t: &Self::Tensor1D, s: &Self::Scalar) -> Self::Tensor1D;

    /// Adds a scalar to each element of tensor.
    fn add_scalar_1d(t: &Self::Tensor1D, s: &Self::Scalar) -> Self::Tensor1D;

    // --- Reductions ---

    /// Sum of all elements in a 1D tensor.
    fn sum_all_1d(t: &Self::Tensor1D) -> Self::Scalar;

    // --- Scalars and host access ---

    /// Creates a backend-specific scalar from an f64 value.
    fn scalar_f64(value: f64) -> Self::Scalar;

    /// Copies a 1D tensor back to host memory.
    fn to_vec_1d(t: &Self::Tensor1D) -> Vec<f64>;

    /// Number of elements in a 1D tensor.
    fn len_1d(t: &Self::Tensor1D) -> usize;

    // --- Linear algebra ---

    /// Computes `A · x` where `A` is (m × n) and `x` is (n,).
    ///
    /// # Panics
    /// If `A.cols() != x.len()`.
    fn matvec(a: &Self::Tensor2D, x: &Self::Tensor1D) -> Self::Tensor1D;

    /// Computes `Aᵀ · x` where `A` is (m × n) and `x` is (m,).
    ///
    /// # Panics
    /// If `A.rows() != x.len()`.
    fn matvec_transposed(a: &Self::Tensor2D, x: &Self::Tensor1D) -> Self::Tensor1D;

    /// Returns the shape of a 2D tensor as (rows, cols).
    fn shape(t: &Self::Tensor2D) -> (usize, usize);
}
