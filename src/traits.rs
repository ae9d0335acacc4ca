use core::fmt::{Debug, Display};
use num_traits::{Float, Num, One, Zero};

/// Trait for types that can be used as matrix and vector elements.
///
/// Blanket-implemented for all types satisfying the bounds.
pub trait Scalar: Copy + PartialEq + Debug + Display + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Display + Zero + One + Num> Scalar for T {}

/// Trait for real floating-point elements.
///
/// Every `Matrix` and `Vector` is built over a `FloatScalar`. Required for
/// the finiteness check at construction, `sqrt` in norms and `acos` in
/// angles. Covers `f32` and `f64`.
pub trait FloatScalar: Scalar + Float {}

impl<T: Scalar + Float> FloatScalar for T {}
