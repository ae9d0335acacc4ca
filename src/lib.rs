//! # vecmat
//!
//! Elementary matrix and vector arithmetic over real numbers, no-std
//! compatible (requires `alloc`). Addition, multiplication and transpose of
//! matrices; dot product, Euclidean length and angle of vectors. Plain loops,
//! no blocking or SIMD.
//!
//! ## Quick start
//!
//! ```
//! use vecmat::{Matrix, Vector};
//!
//! let a = Matrix::from_rows(&[[1.0_f64, 2.0], [3.0, 4.0]]).unwrap();
//! let b = Matrix::from_rows(&[[2.0_f64, 0.0], [1.0, 2.0]]).unwrap();
//! let c = a.try_matmul(&b).unwrap();
//! assert_eq!(c.to_rows(), vec![vec![4.0, 4.0], vec![10.0, 8.0]]);
//!
//! let x = Vector::from_slice(&[1.0_f64, 0.0]).unwrap();
//! let y = Vector::from_slice(&[0.0_f64, 1.0]).unwrap();
//! assert!((x.angle(&y).unwrap() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
//! ```
//!
//! The same operations are available as free functions over nested slices:
//!
//! ```
//! use vecmat::{dot_product, matrix_transpose, vector_length};
//!
//! assert_eq!(dot_product(&[1.0_f64, 2.0, 3.0], &[4.0, 5.0, 6.0]).unwrap(), 32.0);
//! assert_eq!(vector_length(&[3.0_f64, 4.0]).unwrap(), 5.0);
//! assert_eq!(
//!     matrix_transpose(&[[1.0_f64, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap(),
//!     vec![vec![1.0, 4.0], vec![2.0, 5.0], vec![3.0, 6.0]],
//! );
//! ```
//!
//! ## Modules
//!
//! - [`matrix`] — `Matrix<T>` with runtime dimensions, row-major `Vec<T>`
//!   storage. Checked construction (`from_rows`, `from_vec`, `from_fn`),
//!   `try_add`, `try_matmul`, `transpose`, and `+` / `*` operators that
//!   panic on mismatched shapes.
//!
//! - [`vector`] — `Vector<T>`: `dot`, `norm`, `norm_squared`, `normalize`,
//!   `angle`, negation.
//!
//! - [`error`] — [`LinalgError`] and its [`ErrorKind`] classification
//!   (shape, element type, dimension mismatch, zero vector).
//!
//! - [`functions`] — `matrix_add`, `matrix_multiply`, `matrix_transpose`,
//!   `dot_product`, `vector_length`, `angle_between` over plain containers.
//!   `matrix_transpose` checks shape only and does not reject non-finite
//!   elements.
//!
//! - [`traits`] — Element traits:
//!   - [`Scalar`] — `Copy + PartialEq + Debug + Display + Num`
//!   - [`FloatScalar`] — real floats (`Scalar + Float`), the element type of
//!     every `Matrix` and `Vector`
//!
//! ## Invariants
//!
//! Every `Matrix` has at least one row and one column with rows of equal
//! length; every `Vector` has at least one element. Elements are finite at
//! construction. Empty input is always a [`LinalgError::Empty`] or
//! [`LinalgError::EmptyRow`] error, never a degenerate result.
//!
//! ## Cargo features
//!
//! | Feature | Default  | Description |
//! |---------|----------|-------------|
//! | `std`   | yes      | `std::error::Error` for `LinalgError`, hardware FPU via system libm |
//! | `libm`  | baseline | Pure-Rust software float fallback |
//! | `log`   | no       | `trace`-level records of operand shapes via the `log` crate |
//! | `all`   | no       | `std` + `log` |

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "log")]
macro_rules! trace {
    ($($arg:tt)+) => {
        log::trace!(target: "vecmat", $($arg)+)
    };
}

#[cfg(not(feature = "log"))]
macro_rules! trace {
    ($($arg:tt)+) => {
        if false {
            let _ = format_args!($($arg)+);
        }
    };
}

pub(crate) use trace;

pub mod error;
pub mod functions;
pub mod matrix;
pub mod traits;
mod validate;
pub mod vector;

pub use error::{ErrorKind, LinalgError, Operation};
pub use functions::{
    angle_between, dot_product, matrix_add, matrix_multiply, matrix_transpose, vector_length,
};
pub use matrix::Matrix;
pub use traits::{FloatScalar, Scalar};
pub use vector::Vector;
