//! Free functions over plain containers.
//!
//! Matrices are given as slices of rows (`&[Vec<T>]`, `&[[T; N]]`,
//! `&[&[T]]`, ...) and vectors as slices. Each function validates its inputs,
//! runs the corresponding [`Matrix`] or [`Vector`] operation and hands back a
//! plain `Vec` or scalar.

use alloc::vec::Vec;

use crate::error::LinalgError;
use crate::matrix::Matrix;
use crate::traits::FloatScalar;
use crate::validate;
use crate::vector::Vector;

/// Element-wise sum of two matrices.
///
/// ```
/// use vecmat::matrix_add;
/// let c = matrix_add(&[[1.0_f64, 2.0], [3.0, 4.0]], &[[5.0, 6.0], [7.0, 8.0]]).unwrap();
/// assert_eq!(c, vec![vec![6.0, 8.0], vec![10.0, 12.0]]);
/// ```
pub fn matrix_add<T, A, B>(a: &[A], b: &[B]) -> Result<Vec<Vec<T>>, LinalgError>
where
    T: FloatScalar,
    A: AsRef<[T]>,
    B: AsRef<[T]>,
{
    let a = Matrix::from_rows(a)?;
    let b = Matrix::from_rows(b)?;
    Ok(a.try_add(&b)?.to_rows())
}

/// Matrix product `a * b`.
///
/// ```
/// use vecmat::matrix_multiply;
/// let c = matrix_multiply(&[[1.0_f64, 2.0], [3.0, 4.0]], &[[2.0, 0.0], [1.0, 2.0]]).unwrap();
/// assert_eq!(c, vec![vec![4.0, 4.0], vec![10.0, 8.0]]);
/// ```
pub fn matrix_multiply<T, A, B>(a: &[A], b: &[B]) -> Result<Vec<Vec<T>>, LinalgError>
where
    T: FloatScalar,
    A: AsRef<[T]>,
    B: AsRef<[T]>,
{
    let a = Matrix::from_rows(a)?;
    let b = Matrix::from_rows(b)?;
    Ok(a.try_matmul(&b)?.to_rows())
}

/// Transpose of a matrix.
///
/// Checks shape only (no rows, empty or ragged rows). Elements are copied
/// as they are, so NaN and infinities pass through.
///
/// ```
/// use vecmat::matrix_transpose;
/// let t = matrix_transpose(&[[1.0_f64, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
/// assert_eq!(t, vec![vec![1.0, 4.0], vec![2.0, 5.0], vec![3.0, 6.0]]);
/// ```
pub fn matrix_transpose<T, A>(a: &[A]) -> Result<Vec<Vec<T>>, LinalgError>
where
    T: FloatScalar,
    A: AsRef<[T]>,
{
    let (nrows, ncols) = validate::matrix_shape(a)?;
    crate::trace!("transpose {}x{} (shape-only)", nrows, ncols);
    Ok((0..ncols)
        .map(|j| a.iter().map(|row| row.as_ref()[j]).collect())
        .collect())
}

/// Dot product of two vectors.
///
/// ```
/// use vecmat::dot_product;
/// assert_eq!(dot_product(&[1.0_f64, 2.0, 3.0], &[4.0, 5.0, 6.0]).unwrap(), 32.0);
/// ```
pub fn dot_product<T: FloatScalar>(v1: &[T], v2: &[T]) -> Result<T, LinalgError> {
    let v1 = Vector::from_slice(v1)?;
    let v2 = Vector::from_slice(v2)?;
    v1.dot(&v2)
}

/// Euclidean length of a vector.
///
/// ```
/// use vecmat::vector_length;
/// assert_eq!(vector_length(&[3.0_f64, 4.0]).unwrap(), 5.0);
/// assert_eq!(vector_length(&[0.0_f64, 0.0]).unwrap(), 0.0);
/// ```
pub fn vector_length<T: FloatScalar>(v: &[T]) -> Result<T, LinalgError> {
    Ok(Vector::from_slice(v)?.norm())
}

/// Angle between two vectors in radians, in `[0, π]`.
///
/// ```
/// use vecmat::{angle_between, LinalgError};
/// let a = angle_between(&[1.0_f64, 0.0], &[0.0, 1.0]).unwrap();
/// assert!((a - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
/// assert_eq!(angle_between(&[0.0_f64, 0.0], &[1.0, 0.0]), Err(LinalgError::ZeroVector));
/// ```
pub fn angle_between<T: FloatScalar>(v1: &[T], v2: &[T]) -> Result<T, LinalgError> {
    let v1 = Vector::from_slice(v1)?;
    let v2 = Vector::from_slice(v2)?;
    v1.angle(&v2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, Operation};
    use alloc::vec;

    #[test]
    fn add_mixed_containers() {
        let a = vec![vec![1.0_f64, 2.0]];
        let b: [&[f64]; 1] = [&[0.5, 0.5]];
        assert_eq!(matrix_add(&a, &b).unwrap(), vec![vec![1.5, 2.5]]);
    }

    #[test]
    fn add_validates_each_operand() {
        let good = [[1.0_f64, 2.0]];
        let ragged = vec![vec![1.0_f64, 2.0], vec![3.0]];
        assert_eq!(
            matrix_add(&good, &ragged).unwrap_err().kind(),
            ErrorKind::Shape
        );
        assert_eq!(
            matrix_add(&[[f64::NAN, 1.0]], &good).unwrap_err(),
            LinalgError::NonFinite { row: 0, col: 0 }
        );
    }

    #[test]
    fn multiply_mismatch() {
        let err = matrix_multiply(&[[1.0_f64, 2.0, 3.0]], &[[1.0], [2.0]]).unwrap_err();
        assert_eq!(
            err,
            LinalgError::DimensionMismatch {
                op: Operation::Multiply,
                lhs: (1, 3),
                rhs: (2, 1),
            }
        );
    }

    #[test]
    fn transpose_shape_only() {
        let t = matrix_transpose(&[[1.0_f64, f64::NAN]]).unwrap();
        assert_eq!(t.len(), 2);
        assert_eq!(t[0], vec![1.0]);
        assert!(t[1][0].is_nan());
    }

    #[test]
    fn transpose_shape_errors() {
        let empty: Vec<Vec<f64>> = vec![];
        assert_eq!(matrix_transpose(&empty).unwrap_err(), LinalgError::Empty);
        let ragged = vec![vec![1.0_f64], vec![2.0, 3.0]];
        assert_eq!(
            matrix_transpose(&ragged).unwrap_err(),
            LinalgError::Ragged { row: 1, expected: 1, got: 2 }
        );
    }

    #[test]
    fn vector_functions() {
        assert_eq!(dot_product(&[1.0_f64, 2.0], &[3.0, 4.0]).unwrap(), 11.0);
        assert_eq!(
            dot_product(&[1.0_f64, 2.0], &[1.0, 2.0, 3.0]).unwrap_err().kind(),
            ErrorKind::DimensionMismatch
        );
        assert_eq!(vector_length(&[1.0_f64, 0.0]).unwrap(), 1.0);
        assert_eq!(vector_length::<f64>(&[]).unwrap_err(), LinalgError::Empty);
        assert_eq!(
            vector_length(&[f64::NAN]).unwrap_err().kind(),
            ErrorKind::ElementType
        );
    }

    #[test]
    fn angle_validates_before_zero_check() {
        assert_eq!(
            angle_between(&[0.0_f64, 0.0], &[f64::INFINITY]).unwrap_err(),
            LinalgError::NonFinite { row: 0, col: 0 }
        );
    }
}
