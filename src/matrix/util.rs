use alloc::format;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt::{self, Write as _};

use crate::vector::Vector;

use super::Matrix;

// ── Plain-container conversion ──────────────────────────────────────

impl<T: Copy> Matrix<T> {
    /// Copy out as a `Vec` of rows.
    ///
    /// ```
    /// use vecmat::Matrix;
    /// let m = Matrix::from_vec(2, 2, vec![1.0_f64, 2.0, 3.0, 4.0]).unwrap();
    /// assert_eq!(m.to_rows(), vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
    /// ```
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.rows().map(|r| r.to_vec()).collect()
    }

    /// Extract row `i` as a [`Vector`].
    ///
    /// Panics if `i >= nrows`.
    ///
    /// ```
    /// use vecmat::Matrix;
    /// let m = Matrix::from_rows(&[[1.0_f64, 2.0], [3.0, 4.0]]).unwrap();
    /// let r = m.row(1);
    /// assert_eq!(r.as_slice(), &[3.0, 4.0]);
    /// ```
    pub fn row(&self, i: usize) -> Vector<T> {
        Vector::from_parts(self.row_slice(i).to_vec())
    }

    /// Extract column `j` as a [`Vector`].
    ///
    /// Panics if `j >= ncols`.
    pub fn col(&self, j: usize) -> Vector<T> {
        assert!(j < self.ncols, "column {} out of bounds", j);
        Vector::from_parts(self.rows().map(|r| r[j]).collect())
    }
}

// ── Display ─────────────────────────────────────────────────────────

/// One bracketed line per row, `[a, b, c]`, each column right-aligned to its
/// widest entry. A precision (`{:.3}`) applies to every element.
///
/// ```
/// use vecmat::Matrix;
/// let m = Matrix::from_rows(&[[1.0_f64, 100.0], [1000.0, 2.0]]).unwrap();
/// assert_eq!(m.to_string(), "[   1, 100]\n[1000,   2]");
/// assert_eq!(format!("{:.1}", m), "[   1.0, 100.0]\n[1000.0,   2.0]");
/// ```
impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<String> = self
            .data
            .iter()
            .map(|x| match f.precision() {
                Some(p) => format!("{:.*}", p, x),
                None => format!("{}", x),
            })
            .collect();

        let mut widths = vec![0; self.ncols];
        for row in cells.chunks_exact(self.ncols) {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.chars().count());
            }
        }

        for (i, row) in cells.chunks_exact(self.ncols).enumerate() {
            if i > 0 {
                f.write_char('\n')?;
            }
            f.write_char('[')?;
            for (j, (cell, &w)) in row.iter().zip(&widths).enumerate() {
                if j > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{:>w$}", cell, w = w)?;
            }
            f.write_char(']')?;
        }
        Ok(())
    }
}
