use crate::error::LinalgError;
use crate::traits::FloatScalar;

use super::Vector;

impl<T: FloatScalar> Vector<T> {
    /// Sum of squared elements, accumulated in ascending index order.
    ///
    /// ```
    /// use vecmat::Vector;
    /// let v = Vector::from_slice(&[3.0_f64, 4.0]).unwrap();
    /// assert_eq!(v.norm_squared(), 25.0);
    /// ```
    pub fn norm_squared(&self) -> T {
        let mut sum = T::zero();
        for &x in &self.data {
            sum = sum + x * x;
        }
        sum
    }

    /// L2 (Euclidean) norm. Exactly zero for the zero vector.
    ///
    /// The squares are summed unscaled. Elements whose squares overflow
    /// (around `1e155` for `f64`) give an infinite norm, and a vector whose
    /// squares all underflow (such as `[1e-200]`) has norm zero, so
    /// [`normalize`](Self::normalize) and [`angle`](Self::angle) report it as
    /// [`LinalgError::ZeroVector`].
    ///
    /// ```
    /// use vecmat::Vector;
    /// let v = Vector::from_slice(&[3.0_f64, 4.0]).unwrap();
    /// assert_eq!(v.norm(), 5.0);
    /// ```
    pub fn norm(&self) -> T {
        crate::trace!("norm len {}", self.len());
        self.norm_squared().sqrt()
    }

    /// Unit vector in the same direction.
    ///
    /// Fails with [`LinalgError::ZeroVector`] when the norm is zero.
    ///
    /// ```
    /// use vecmat::Vector;
    /// let v = Vector::from_slice(&[3.0_f64, 4.0]).unwrap();
    /// let u = v.normalize().unwrap();
    /// assert!((u.norm() - 1.0).abs() < 1e-12);
    /// assert!((u[0] - 0.6).abs() < 1e-12);
    /// ```
    pub fn normalize(&self) -> Result<Self, LinalgError> {
        let n = self.norm();
        if n == T::zero() {
            return Err(LinalgError::ZeroVector);
        }
        Ok(Vector::from_parts(self.data.iter().map(|&x| x / n).collect()))
    }
}
