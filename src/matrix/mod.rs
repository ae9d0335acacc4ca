mod ops;
mod util;

use alloc::vec::Vec;
use core::ops::Index;

use crate::error::LinalgError;
use crate::traits::FloatScalar;
use crate::validate;
use crate::vector::Vector;

/// Heap-allocated rectangular matrix of real numbers.
///
/// Row-major `Vec<T>` storage with runtime dimensions. Every constructor
/// validates its input: at least one row and one column, rows of equal
/// length, every element finite. A `Matrix` is an immutable value; all
/// operations return new matrices.
///
/// Results of arithmetic are not re-checked, so an addition or product that
/// overflows may hold infinities.
///
/// # Examples
///
/// ```
/// use vecmat::Matrix;
///
/// let a = Matrix::from_rows(&[[1.0_f64, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
/// assert_eq!(a.shape(), (2, 3));
/// assert_eq!(a[(1, 0)], 4.0);
///
/// let t = a.transpose();
/// assert_eq!(t.to_rows(), vec![vec![1.0, 4.0], vec![2.0, 5.0], vec![3.0, 6.0]]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    data: Vec<T>,
    nrows: usize,
    ncols: usize,
}

// ── Constructors ────────────────────────────────────────────────────

impl<T: FloatScalar> Matrix<T> {
    /// Create a matrix from a sequence of rows.
    ///
    /// Fails with a shape error on no rows, an empty row, or rows of
    /// differing length, and with [`LinalgError::NonFinite`] on a NaN or
    /// infinite element.
    ///
    /// ```
    /// use vecmat::{LinalgError, Matrix};
    ///
    /// let m = Matrix::from_rows(&[vec![1.0_f64, 2.0], vec![3.0, 4.0]]).unwrap();
    /// assert_eq!(m[(0, 1)], 2.0);
    ///
    /// let bad = Matrix::from_rows(&[[1.0_f64, f64::NAN]]);
    /// assert_eq!(bad.unwrap_err(), LinalgError::NonFinite { row: 0, col: 1 });
    /// ```
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self, LinalgError> {
        let (nrows, ncols) = validate::matrix_shape(rows)?;
        validate::finite_rows(rows)?;
        let mut data = Vec::with_capacity(nrows * ncols);
        for row in rows {
            data.extend_from_slice(row.as_ref());
        }
        Ok(Self { data, nrows, ncols })
    }

    /// Create a matrix from an owned `Vec<T>` in row-major order.
    ///
    /// ```
    /// use vecmat::{LinalgError, Matrix};
    ///
    /// let m = Matrix::from_vec(2, 3, vec![1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    /// assert_eq!(m[(1, 2)], 6.0);
    ///
    /// let short = Matrix::from_vec(2, 2, vec![1.0_f64, 2.0, 3.0]);
    /// assert_eq!(short.unwrap_err(), LinalgError::LengthMismatch { expected: 4, got: 3 });
    /// ```
    pub fn from_vec(nrows: usize, ncols: usize, data: Vec<T>) -> Result<Self, LinalgError> {
        validate::flat_shape(nrows, ncols, &data)?;
        Ok(Self { data, nrows, ncols })
    }

    /// Create a matrix by calling `f(row, col)` for each element.
    ///
    /// The shape is checked before anything is allocated or `f` is called.
    ///
    /// ```
    /// use vecmat::Matrix;
    /// let id = Matrix::from_fn(3, 3, |i, j| if i == j { 1.0_f64 } else { 0.0 }).unwrap();
    /// assert_eq!(id[(1, 1)], 1.0);
    /// assert_eq!(id[(0, 2)], 0.0);
    /// ```
    pub fn from_fn(
        nrows: usize,
        ncols: usize,
        f: impl Fn(usize, usize) -> T,
    ) -> Result<Self, LinalgError> {
        let count = validate::element_count::<T>(nrows, ncols)?;
        let mut data = Vec::with_capacity(count);
        for i in 0..nrows {
            for j in 0..ncols {
                data.push(f(i, j));
            }
        }
        Self::from_vec(nrows, ncols, data)
    }
}

impl<T> Matrix<T> {
    /// Number of rows.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Whether the matrix is square.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// Element at `(row, col)`, or `None` when out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.nrows && col < self.ncols {
            self.data.get(row * self.ncols + col)
        } else {
            None
        }
    }

    /// Row-major view of all elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Row `i` as a slice.
    ///
    /// Panics if `i >= nrows`.
    #[inline]
    pub fn row_slice(&self, i: usize) -> &[T] {
        let start = i * self.ncols;
        &self.data[start..start + self.ncols]
    }

    /// Iterate over rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.data.chunks_exact(self.ncols)
    }

    /// Assemble from parts already known to satisfy the invariants.
    #[inline]
    pub(crate) fn from_parts(nrows: usize, ncols: usize, data: Vec<T>) -> Self {
        debug_assert_eq!(data.len(), nrows * ncols);
        Self { data, nrows, ncols }
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.nrows && col < self.ncols,
            "index ({}, {}) out of bounds for {}x{} matrix",
            row,
            col,
            self.nrows,
            self.ncols,
        );
        &self.data[row * self.ncols + col]
    }
}

// ── Conversions ─────────────────────────────────────────────────────

impl<T: FloatScalar> TryFrom<Vec<Vec<T>>> for Matrix<T> {
    type Error = LinalgError;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Self, Self::Error> {
        Self::from_rows(&rows)
    }
}

impl<T> From<Vector<T>> for Matrix<T> {
    /// A vector becomes a `1 x n` row matrix.
    ///
    /// ```
    /// use vecmat::{Matrix, Vector};
    /// let v = Vector::from_slice(&[1.0_f64, 2.0, 3.0]).unwrap();
    /// let m: Matrix<f64> = v.into();
    /// assert_eq!(m.shape(), (1, 3));
    /// ```
    fn from(v: Vector<T>) -> Self {
        let data = v.into_vec();
        let ncols = data.len();
        Self::from_parts(1, ncols, data)
    }
}
