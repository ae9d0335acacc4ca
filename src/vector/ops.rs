use num_traits::Float;

use crate::error::{LinalgError, Operation};
use crate::traits::FloatScalar;

use super::Vector;

impl<T: FloatScalar> Vector<T> {
    /// Dot product, accumulated from zero in ascending index order.
    ///
    /// Fails with [`LinalgError::DimensionMismatch`] when the lengths differ.
    ///
    /// ```
    /// use vecmat::Vector;
    /// let a = Vector::from_slice(&[1.0_f64, 2.0, 3.0]).unwrap();
    /// let b = Vector::from_slice(&[4.0_f64, 5.0, 6.0]).unwrap();
    /// assert_eq!(a.dot(&b).unwrap(), 32.0);
    /// ```
    pub fn dot(&self, rhs: &Self) -> Result<T, LinalgError> {
        if self.len() != rhs.len() {
            return Err(LinalgError::DimensionMismatch {
                op: Operation::Dot,
                lhs: (1, self.len()),
                rhs: (1, rhs.len()),
            });
        }
        crate::trace!("dot len {}", self.len());
        let mut sum = T::zero();
        for (&a, &b) in self.data.iter().zip(rhs.data.iter()) {
            sum = sum + a * b;
        }
        Ok(sum)
    }

    /// Angle between `self` and `rhs` in radians, in `[0, π]`.
    ///
    /// Both norms are computed first, so a zero vector is reported as
    /// [`LinalgError::ZeroVector`] even when the lengths also differ. A length
    /// difference between two nonzero vectors surfaces from [`dot`](Self::dot).
    /// The cosine is taken from copies of both vectors scaled by their
    /// largest magnitude, so elements whose squares overflow still give a
    /// finite cosine. It is clamped into `[-1, 1]` before `acos`.
    ///
    /// ```
    /// use vecmat::Vector;
    /// let x = Vector::from_slice(&[1.0_f64, 0.0]).unwrap();
    /// let y = Vector::from_slice(&[0.0_f64, 1.0]).unwrap();
    /// let a = x.angle(&y).unwrap();
    /// assert!((a - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    /// ```
    pub fn angle(&self, rhs: &Self) -> Result<T, LinalgError> {
        let n1 = self.norm();
        let n2 = rhs.norm();
        if n1 == T::zero() || n2 == T::zero() {
            return Err(LinalgError::ZeroVector);
        }
        let u = self.scaled();
        let w = rhs.scaled();
        let cosine = u.dot(&w)? / (u.norm() * w.norm());
        debug_assert!(cosine.is_finite());
        let cosine = Float::min(Float::max(cosine, -T::one()), T::one());
        Ok(cosine.acos())
    }

    /// Copy divided by the largest element magnitude, leaving every element
    /// in `[-1, 1]`. Requires a nonzero vector.
    fn scaled(&self) -> Self {
        let m = self
            .data
            .iter()
            .fold(T::zero(), |acc, &x| Float::max(acc, x.abs()));
        Vector::from_parts(self.data.iter().map(|&x| x / m).collect())
    }
}
