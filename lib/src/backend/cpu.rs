use super::Backend;

/// Pure-Rust CPU backend: 1D tensors are `Vec<f64>`, 2D tensors are row-major.
#[derive(Clone, Debug, Copy)]
pub struct CpuBackend;

/// Row-major matrix: `(data, rows, cols)`.
#[derive(Debug, Clone)]
pub struct CpuTensor2D(pub Vec<f64>, pub usize, pub usize);

impl CpuTensor2D {
    pub fn new(data: Vec<f64>, rows: usize, cols: usize) -> Self {
        assert_eq!(data.len(), rows * cols, "Inconsistent shape");
        Self(data, rows, cols)
    }
}

impl Backend for CpuBackend {
    type Scalar = f64;
    type Tensor1D = Vec<f64>;
    type Tensor2D = CpuTensor2D;

    fn zeros_1d(len: usize) -> Self::Tensor1D {
        vec![0.; len]
    }

    fn from_vec_1d(data: Vec<f64>) -> Self::Tensor1D {
        data
    }

    fn from_vec_2d(data: Vec<f64>, rows: usize, cols: usize) -> Self::Tensor2D {
        CpuTensor2D::new(data, rows, cols)
    }

    fn add_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> Self::Tensor1D {
        a.iter().zip(b.iter()).map(|(a, b)| a + b).collect()
    }

    fn sub_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> Self::Tensor1D {
        a.iter().zip(b.iter()).map(|(a, b)| a - b).collect()
    }

    fn mul_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> Self::Tensor1D {
        a.iter().zip(b.iter()).map(|(a, b)| a * b).collect()
    }

    fn mul_scalar_1d(t: &Self::Tensor1D, s: &Self::Scalar) -> Self::Tensor1D {
        t.iter().map(|x| x * s).collect()
    }

    fn add_scalar_1d(t: &Self::Tensor1D, s: &Self::Scalar) -> Self::Tensor1D {
        t.iter().map(|x| x + s).collect()
    }

    fn sum_all_1d(t: &Self::Tensor1D) -> Self::Scalar {
        t.iter().sum::<f64>()
    }

    fn scalar_f64(value: f64) -> Self::Scalar {
        value
    }

    fn to_vec_1d(t: &Self::Tensor1D) -> Vec<f64> {
        t.clone()
    }

    fn len_1d(t: &Self::Tensor1D) -> usize {
        t.len()
    }

    fn matvec(a: &Self::Tensor2D, x: &Self::Tensor1D) -> Self::Tensor1D {
        let CpuTensor2D(data, rows, cols) = a;
        assert_eq!(*cols, x.len(), "matvec: A has {} cols, x has len {}", cols, x.len());
        if *cols == 0 {
            return vec![0.0; *rows];
        }
        data.chunks_exact(*cols)
            .map(|row| row.iter().zip(x.iter()).map(|(a, b)| a * b).sum())
            .collect()
    }

    fn matvec_transposed(a: &Self::Tensor2D, x: &Self::Tensor1D) -> Self::Tensor1D {
        let CpuTensor2D(data, rows, cols) = a;
        assert_eq!(
            *rows,
            x.len(),
            "matvec_transposed: A has {} rows, x has len {}",
            rows,
            x.len()
        );
        // Accumulate row by row so the matrix is walked in storage order.
        let mut out = vec![0.0; *cols];
        for (i, xi) in x.iter().enumerate() {
            let row = &data[i * cols..(i + 1) * cols];
            for (o, a) in out.iter_mut().zip(row) {
                *o += a * xi;
            }
        }
        out
    }

    fn shape(t: &Self::Tensor2D) -> (usize, usize) {
        (t.1, t.2)
    }
}

#[cfg(test)]
mod matvec_tests {
    use super::*;

    #[test]
    fn test_matvec_transpose() {
        // X = [[1, 2],
        //      [3, 4],
        //      [5, 6]]
        // Xᵀ @ [1, 0, 2] = [1 + 10, 2 + 12] = [11, 14]
        let x = CpuTensor2D::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 3, 2);
        let v = vec![1.0, 0.0, 2.0];

        let result = CpuBackend::matvec_transposed(&x, &v);
        assert_eq!(result, vec![11.0, 14.0]);

        // Column vector: (4, 1)
        let x2 = CpuTensor2D::new(vec![2.0, 3.0, 4.0, 5.0], 4, 1);
        let result2 = CpuBackend::matvec_transposed(&x2, &vec![1.0; 4]);
        assert_eq!(result2, vec![14.0]);
    }

    #[test]
    fn test_matvec_six_features() {
        // One board row with all six pattern counts.
        let x = CpuTensor2D::new(vec![1.0, 0.0, 2.0, 1.0, 0.0, 2.0], 1, 6);
        let w = vec![0.1, 0.2, -0.3, 0.4, -0.5, 0.6];

        let result = CpuBackend::matvec(&x, &w);
        // 0.1 - 0.6 + 0.4 + 1.2 = 1.1
        assert!((result[0] - 1.1).abs() < 1e-12);
    }

    #[test]
    fn test_matvec_zero_rows() {
        let x = CpuTensor2D::new(vec![], 0, 6);
        assert!(CpuBackend::matvec(&x, &vec![0.0; 6]).is_empty());
        assert_eq!(CpuBackend::matvec_transposed(&x, &vec![]), vec![0.0; 6]);
    }

    #[test]
    #[should_panic(expected = "matvec")]
    fn test_matvec_shape_mismatch_panics() {
        let x = CpuTensor2D::new(vec![1.0, 2.0], 1, 2);
        let _ = CpuBackend::matvec(&x, &vec![1.0, 2.0, 3.0]);
    }

    #[test]
    #[should_panic(expected = "Inconsistent shape")]
    fn test_tensor2d_inconsistent_shape_panics() {
        let _ = CpuTensor2D::new(vec![1.0, 2.0, 3.0], 2, 2);
    }
}
