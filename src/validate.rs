//! Shape and element checks shared by [`Matrix`](crate::Matrix) and
//! [`Vector`](crate::Vector) construction and by the free functions.
//!
//! Shape is always checked before elements, so a ragged grid holding a NaN
//! reports the shape problem.

use crate::error::LinalgError;
use crate::traits::FloatScalar;

/// Infer `(nrows, ncols)` from candidate rows.
///
/// Row 0 fixes the expected width. Fails on no rows, an empty row, or a row
/// whose length differs from row 0.
pub(crate) fn matrix_shape<T, R: AsRef<[T]>>(rows: &[R]) -> Result<(usize, usize), LinalgError> {
    let first = rows.first().ok_or(LinalgError::Empty)?;
    let ncols = first.as_ref().len();
    for (i, row) in rows.iter().enumerate() {
        let got = row.as_ref().len();
        if got == 0 {
            return Err(LinalgError::EmptyRow { row: i });
        }
        if got != ncols {
            return Err(LinalgError::Ragged {
                row: i,
                expected: ncols,
                got,
            });
        }
    }
    Ok((rows.len(), ncols))
}

/// Check every element of `rows` is finite, scanning in row-major order.
pub(crate) fn finite_rows<T: FloatScalar, R: AsRef<[T]>>(rows: &[R]) -> Result<(), LinalgError> {
    for (i, row) in rows.iter().enumerate() {
        finite_row(i, row.as_ref())?;
    }
    Ok(())
}

/// Check every element of a single row is finite.
pub(crate) fn finite_row<T: FloatScalar>(row: usize, data: &[T]) -> Result<(), LinalgError> {
    match data.iter().position(|x| !x.is_finite()) {
        Some(col) => Err(LinalgError::NonFinite { row, col }),
        None => Ok(()),
    }
}

/// Number of elements in an `nrows x ncols` matrix of `T`.
///
/// Fails with [`LinalgError::Empty`] on a zero dimension and with
/// [`LinalgError::TooLarge`] when the count, or its size in bytes, exceeds
/// what a single `Vec<T>` can hold.
pub(crate) fn element_count<T>(nrows: usize, ncols: usize) -> Result<usize, LinalgError> {
    if nrows == 0 || ncols == 0 {
        return Err(LinalgError::Empty);
    }
    let too_large = LinalgError::TooLarge { nrows, ncols };
    let count = nrows.checked_mul(ncols).ok_or(too_large)?;
    match count.checked_mul(core::mem::size_of::<T>()) {
        Some(bytes) if bytes <= isize::MAX as usize => Ok(count),
        _ => Err(too_large),
    }
}

/// Check a flat row-major buffer against an `nrows x ncols` shape.
pub(crate) fn flat_shape<T: FloatScalar>(
    nrows: usize,
    ncols: usize,
    data: &[T],
) -> Result<(), LinalgError> {
    let expected = element_count::<T>(nrows, ncols)?;
    if data.len() != expected {
        return Err(LinalgError::LengthMismatch {
            expected,
            got: data.len(),
        });
    }
    match data.iter().position(|x| !x.is_finite()) {
        Some(idx) => Err(LinalgError::NonFinite {
            row: idx / ncols,
            col: idx % ncols,
        }),
        None => Ok(()),
    }
}

/// Check a candidate vector: non-empty, every element finite.
pub(crate) fn vector<T: FloatScalar>(data: &[T]) -> Result<(), LinalgError> {
    if data.is_empty() {
        return Err(LinalgError::Empty);
    }
    finite_row(0, data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    #[test]
    fn shape_of_rectangle() {
        let rows = [[1.0_f64, 2.0, 3.0], [4.0, 5.0, 6.0]];
        assert_eq!(matrix_shape(&rows), Ok((2, 3)));
    }

    #[test]
    fn shape_empty_outer() {
        let rows: [Vec<f64>; 0] = [];
        assert_eq!(matrix_shape(&rows), Err(LinalgError::Empty));
    }

    #[test]
    fn shape_empty_row() {
        let rows: Vec<Vec<f64>> = vec![vec![], vec![]];
        assert_eq!(matrix_shape(&rows), Err(LinalgError::EmptyRow { row: 0 }));
        let rows = vec![vec![1.0_f64], vec![]];
        assert_eq!(matrix_shape(&rows), Err(LinalgError::EmptyRow { row: 1 }));
    }

    #[test]
    fn shape_ragged() {
        let rows = vec![vec![1.0_f64, 2.0], vec![3.0, 4.0], vec![5.0]];
        assert_eq!(
            matrix_shape(&rows),
            Err(LinalgError::Ragged { row: 2, expected: 2, got: 1 })
        );
    }

    #[test]
    fn shape_ignores_elements() {
        let rows = [[f64::NAN, f64::INFINITY]];
        assert_eq!(matrix_shape(&rows), Ok((1, 2)));
    }

    #[test]
    fn finite_rows_reports_first_offender() {
        let rows = [[1.0_f64, 2.0], [3.0, f64::NAN], [f64::INFINITY, 0.0]];
        assert_eq!(
            finite_rows(&rows),
            Err(LinalgError::NonFinite { row: 1, col: 1 })
        );
        assert_eq!(finite_rows(&[[1.0_f32, -2.0]]), Ok(()));
    }

    #[test]
    fn flat_shape_checks() {
        assert_eq!(flat_shape(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]), Ok(()));
        assert_eq!(flat_shape::<f64>(0, 3, &[]), Err(LinalgError::Empty));
        assert_eq!(
            flat_shape(2, 2, &[1.0_f64, 2.0, 3.0]),
            Err(LinalgError::LengthMismatch { expected: 4, got: 3 })
        );
        assert_eq!(
            flat_shape(2, 3, &[0.0_f64, 0.0, 0.0, 0.0, f64::NEG_INFINITY, 0.0]),
            Err(LinalgError::NonFinite { row: 1, col: 1 })
        );
    }

    #[test]
    fn element_count_overflow() {
        assert_eq!(element_count::<f64>(3, 4), Ok(12));
        assert_eq!(element_count::<f64>(3, 0), Err(LinalgError::Empty));
        assert_eq!(
            element_count::<f64>(usize::MAX, 2),
            Err(LinalgError::TooLarge { nrows: usize::MAX, ncols: 2 })
        );
        // count fits in usize, bytes do not
        assert_eq!(
            element_count::<f64>(usize::MAX / 8 + 1, 1),
            Err(LinalgError::TooLarge { nrows: usize::MAX / 8 + 1, ncols: 1 })
        );
    }

    #[test]
    fn flat_shape_too_large() {
        assert_eq!(
            flat_shape(usize::MAX, 2, &[1.0_f64]),
            Err(LinalgError::TooLarge { nrows: usize::MAX, ncols: 2 })
        );
        assert_eq!(
            flat_shape(usize::MAX / 2 + 1, 2, &[1.0_f32]),
            Err(LinalgError::TooLarge { nrows: usize::MAX / 2 + 1, ncols: 2 })
        );
    }

    #[test]
    fn vector_checks() {
        assert_eq!(vector(&[1.0_f64]), Ok(()));
        assert_eq!(vector::<f64>(&[]), Err(LinalgError::Empty));
        assert_eq!(
            vector(&[0.0_f64, 1.0, f64::NAN]),
            Err(LinalgError::NonFinite { row: 0, col: 2 })
        );
    }
}
