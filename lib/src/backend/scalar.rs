use crate::backend::Backend;
use std::marker::PhantomData;

/// Scalar operations required from a backend's native number type.
///
/// # Example
/// ```
/// use gomoku_weights::backend::ScalarOps;
///
/// assert_eq!(f64::zero(), 0.0);
/// assert_eq!(f64::one(), 1.0);
/// assert_eq!((-2.5f64).abs(), 2.5);
/// ```
pub trait ScalarOps:
    Clone
    + Copy
    + Send
    + Sync
    + std::ops::Add<Output = Self>
    + std::ops::Mul<Output = Self>
    + std::ops::Sub<Output = Self>
    + std::ops::Div<Output = Self>
{
    /// Returns the absolute value of the scalar.
    fn abs(self) -> Self;

    /// Returns the additive identity.
    fn zero() -> Self;

    /// Returns the multiplicative identity.
    fn one() -> Self;

    /// Converts an `f64` value to this scalar type.
    fn from_f64(v: f64) -> Self;

    /// Converts this scalar to an `f64` value.
    fn to_f64(self) -> f64;
}

impl ScalarOps for f64 {
    fn abs(self) -> Self {
        self.abs()
    }

    fn zero() -> Self {
        0.0
    }

    fn one() -> Self {
        1.0
    }

    fn from_f64(v: f64) -> Self {
        v
    }

    fn to_f64(self) -> f64 {
        self
    }
}

/// Backend-typed scalar wrapper.
///
/// Carries the originating backend as a phantom type so scalars from different
/// backends cannot be combined.
///
/// # Example
/// ```
/// use gomoku_weights::backend::{CpuBackend, Scalar};
///
/// let lr: Scalar<CpuBackend> = Scalar::new(0.01);
/// let step = lr * Scalar::new(2.0);
/// assert_eq!(step.to_f64(), 0.02);
/// ```
#[derive(Clone, Debug, Copy)]
pub struct Scalar<B: Backend> {
    pub(crate) data: B::Scalar,
    pub(crate) backend: PhantomData<B>,
}

impl<B: Backend> Scalar<B> {
    /// Creates a new scalar from an `f64` host value.
    pub fn new(f: f64) -> Self {
        Self {
            data: B::scalar_f64(f),
            backend: PhantomData,
        }
    }

    /// Converts this backend scalar to a host `f64` value.
    pub fn to_f64(&self) -> f64 {
        self.data.to_f64()
    }

    /// Returns `true` if the value is neither NaN nor infinite.
    pub fn is_finite(&self) -> bool {
        self.to_f64().is_finite()
    }
}

impl<B: Backend> std::ops::Add for Scalar<B> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            data: self.data + rhs.data,
            backend: PhantomData,
        }
    }
}

impl<B: Backend> std::ops::Sub for Scalar<B> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self {
            data: self.data - rhs.data,
            backend: PhantomData,
        }
    }
}

impl<B: Backend> std::ops::Mul for Scalar<B> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self {
            data: self.data * rhs.data,
            backend: PhantomData,
        }
    }
}

/// # Panics
/// Follows the backend's scalar semantics on division by zero (IEEE 754 for `f64`).
impl<B: Backend> std::ops::Div for Scalar<B> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        Self {
            data: self.data / rhs.data,
            backend: PhantomData,
        }
    }
}
