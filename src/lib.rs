//! Lineal: fixed-size vectors and matrices with exact cofactor algebra.
//!
//! Lineal provides dimension-generic, stack-allocated linear algebra
//! primitives for small fixed dimensions. Shape agreement is enforced by
//! the type system: addition requires equal shapes, multiplication requires
//! matching inner dimensions, and determinants and inverses exist only on
//! square matrices. Arithmetic is exact for integer scalars; float
//! comparisons share a single documented tolerance.
//!
//! # Quick Start
//!
//! ```
//! use lineal::prelude::*;
//!
//! let a = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
//! let inv = a.inverse().unwrap();
//! assert!((a * inv).approx_eq(&Matrix::identity()));
//!
//! let v = Vector::new([3.0, 4.0]);
//! assert!((a * v).approx_eq(&Vector::new([11.0, 25.0])));
//! assert_eq!(a.determinant(), -2.0);
//! ```
//!
//! # Modules
//!
//! - [`vector`]: Fixed-dimension geometric tuples (dot, cross, norms, angles)
//! - [`matrix`]: Fixed-size matrices (products, determinants, inverses)
//! - [`scalar`]: Element traits and the comparison tolerance policy
//! - [`error`]: Error types and the crate Result alias

pub mod error;
pub mod matrix;
pub mod prelude;
pub mod scalar;
pub mod vector;

pub use error::{LinealError, Result};
pub use matrix::{Matrix, Matrix2, Matrix3, Matrix4};
pub use scalar::{FloatScalar, Scalar};
pub use vector::{Vector, Vector2, Vector3};
