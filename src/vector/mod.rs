mod norm;
mod ops;

use alloc::vec::Vec;
use core::fmt;
use core::ops::{Index, Neg};

use crate::error::LinalgError;
use crate::traits::FloatScalar;
use crate::validate;

/// Heap-allocated vector of real numbers.
///
/// Non-empty, every element finite at construction. Like
/// [`Matrix`](crate::Matrix), a `Vector` is an immutable value and every
/// operation returns a new value.
///
/// # Examples
///
/// ```
/// use vecmat::Vector;
///
/// let v = Vector::from_slice(&[3.0_f64, 4.0]).unwrap();
/// assert_eq!(v.len(), 2);
/// assert_eq!(v.norm(), 5.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Vector<T> {
    data: Vec<T>,
}

impl<T: FloatScalar> Vector<T> {
    /// Create a vector from a slice.
    ///
    /// Fails with [`LinalgError::Empty`] on an empty slice and with
    /// [`LinalgError::NonFinite`] (`row = 0`) on a NaN or infinite element.
    ///
    /// ```
    /// use vecmat::{LinalgError, Vector};
    /// let v = Vector::from_slice(&[1.0_f64, 2.0, 3.0]).unwrap();
    /// assert_eq!(v[2], 3.0);
    /// assert_eq!(Vector::<f64>::from_slice(&[]).unwrap_err(), LinalgError::Empty);
    /// ```
    pub fn from_slice(data: &[T]) -> Result<Self, LinalgError> {
        validate::vector(data)?;
        Ok(Self {
            data: data.to_vec(),
        })
    }

    /// Create a vector from an owned `Vec`.
    pub fn from_vec(data: Vec<T>) -> Result<Self, LinalgError> {
        validate::vector(&data)?;
        Ok(Self { data })
    }
}

impl<T> Vector<T> {
    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always `false`: construction rejects empty input.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Element `i`, or `None` when out of bounds.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        self.data.get(i)
    }

    /// View the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterate over the elements.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Unwrap into the underlying `Vec`.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Wrap data already known to satisfy the invariants.
    #[inline]
    pub(crate) fn from_parts(data: Vec<T>) -> Self {
        debug_assert!(!data.is_empty());
        Self { data }
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.data[i]
    }
}

// ── Negation ────────────────────────────────────────────────────────

impl<T: FloatScalar> Neg for &Vector<T> {
    type Output = Vector<T>;

    fn neg(self) -> Vector<T> {
        Vector::from_parts(self.data.iter().map(|&x| -x).collect())
    }
}

impl<T: FloatScalar> Neg for Vector<T> {
    type Output = Vector<T>;

    fn neg(self) -> Vector<T> {
        -&self
    }
}

// ── Conversions ─────────────────────────────────────────────────────

impl<T: FloatScalar> TryFrom<Vec<T>> for Vector<T> {
    type Error = LinalgError;

    fn try_from(data: Vec<T>) -> Result<Self, Self::Error> {
        Self::from_vec(data)
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

// ── Display ─────────────────────────────────────────────────────────

/// `[a, b, c]`, with any precision applied to every element.
impl<T: fmt::Display> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, x) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match f.precision() {
                Some(p) => write!(f, "{:.*}", p, x)?,
                None => write!(f, "{}", x)?,
            }
        }
        write!(f, "]")
    }
}
