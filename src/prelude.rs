//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use lineal::prelude::*;
//! ```

pub use crate::error::{LinealError, Result};
pub use crate::matrix::{Matrix, Matrix2, Matrix3, Matrix4};
pub use crate::scalar::{FloatScalar, Scalar};
pub use crate::vector::{Vector, Vector2, Vector3};
