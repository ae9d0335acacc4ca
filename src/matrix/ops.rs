use alloc::vec::Vec;
use core::ops::{Add, Mul};

use crate::error::{LinalgError, Operation};
use crate::traits::FloatScalar;

use super::Matrix;

// ── Checked arithmetic ──────────────────────────────────────────────

impl<T: FloatScalar> Matrix<T> {
    /// Element-wise sum `self + rhs`.
    ///
    /// Fails with [`LinalgError::DimensionMismatch`] unless both operands
    /// have the same shape.
    ///
    /// ```
    /// use vecmat::Matrix;
    /// let a = Matrix::from_rows(&[[1.0_f64, 2.0], [3.0, 4.0]]).unwrap();
    /// let b = Matrix::from_rows(&[[5.0_f64, 6.0], [7.0, 8.0]]).unwrap();
    /// let c = a.try_add(&b).unwrap();
    /// assert_eq!(c.to_rows(), vec![vec![6.0, 8.0], vec![10.0, 12.0]]);
    /// ```
    pub fn try_add(&self, rhs: &Self) -> Result<Self, LinalgError> {
        if self.shape() != rhs.shape() {
            return Err(LinalgError::DimensionMismatch {
                op: Operation::Add,
                lhs: self.shape(),
                rhs: rhs.shape(),
            });
        }
        Ok(self.add_kernel(rhs))
    }

    /// Matrix product `self * rhs`: `(M×N) * (N×P) → (M×P)`.
    ///
    /// Fails with [`LinalgError::DimensionMismatch`] when `self.ncols() !=
    /// rhs.nrows()`.
    ///
    /// ```
    /// use vecmat::Matrix;
    /// let a = Matrix::from_rows(&[[1.0_f64, 2.0], [3.0, 4.0]]).unwrap();
    /// let b = Matrix::from_rows(&[[2.0_f64, 0.0], [1.0, 2.0]]).unwrap();
    /// let c = a.try_matmul(&b).unwrap();
    /// assert_eq!(c.to_rows(), vec![vec![4.0, 4.0], vec![10.0, 8.0]]);
    /// ```
    pub fn try_matmul(&self, rhs: &Self) -> Result<Self, LinalgError> {
        if self.ncols != rhs.nrows {
            return Err(LinalgError::DimensionMismatch {
                op: Operation::Multiply,
                lhs: self.shape(),
                rhs: rhs.shape(),
            });
        }
        Ok(self.matmul_kernel(rhs))
    }

    /// Transpose: (M×N) → (N×M).
    ///
    /// ```
    /// use vecmat::Matrix;
    /// let a = Matrix::from_rows(&[[1.0_f64, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
    /// let t = a.transpose();
    /// assert_eq!(t.shape(), (3, 2));
    /// assert_eq!(t[(2, 0)], 3.0);
    /// ```
    pub fn transpose(&self) -> Self {
        let m = self.nrows;
        let n = self.ncols;
        crate::trace!("transpose {}x{}", m, n);
        let mut data = Vec::with_capacity(m * n);
        for j in 0..n {
            for i in 0..m {
                data.push(self.data[i * n + j]);
            }
        }
        Matrix::from_parts(n, m, data)
    }

    fn add_kernel(&self, rhs: &Self) -> Self {
        crate::trace!(
            "add {}x{} + {}x{}",
            self.nrows,
            self.ncols,
            rhs.nrows,
            rhs.ncols
        );
        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(&a, &b)| a + b)
            .collect();
        Matrix::from_parts(self.nrows, self.ncols, data)
    }

    /// Row by row, column by column, inner index ascending, each sum
    /// starting from zero.
    fn matmul_kernel(&self, rhs: &Self) -> Self {
        let m = self.nrows;
        let n = self.ncols;
        let p = rhs.ncols;
        crate::trace!("matmul {}x{} * {}x{}", m, n, rhs.nrows, p);
        let mut data = Vec::with_capacity(m * p);
        for i in 0..m {
            for j in 0..p {
                let mut sum = T::zero();
                for k in 0..n {
                    sum = sum + self.data[i * n + k] * rhs.data[k * p + j];
                }
                data.push(sum);
            }
        }
        Matrix::from_parts(m, p, data)
    }
}

// ── Operator sugar (panics on mismatch) ─────────────────────────────

impl<T: FloatScalar> Add<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    fn add(self, rhs: &Matrix<T>) -> Matrix<T> {
        assert_eq!(
            self.shape(),
            rhs.shape(),
            "dimension mismatch: {}x{} + {}x{}",
            self.nrows,
            self.ncols,
            rhs.nrows,
            rhs.ncols,
        );
        self.add_kernel(rhs)
    }
}

impl<T: FloatScalar> Add for Matrix<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        &self + &rhs
    }
}

impl<T: FloatScalar> Add<&Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;

    fn add(self, rhs: &Matrix<T>) -> Matrix<T> {
        &self + rhs
    }
}

impl<T: FloatScalar> Mul<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: &Matrix<T>) -> Matrix<T> {
        assert_eq!(
            self.ncols,
            rhs.nrows,
            "dimension mismatch: {}x{} * {}x{}",
            self.nrows,
            self.ncols,
            rhs.nrows,
            rhs.ncols,
        );
        self.matmul_kernel(rhs)
    }
}

impl<T: FloatScalar> Mul for Matrix<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        &self * &rhs
    }
}

impl<T: FloatScalar> Mul<&Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: &Matrix<T>) -> Matrix<T> {
        &self * rhs
    }
}
