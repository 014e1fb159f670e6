//! Scalar element traits shared by vectors and matrices.
//!
//! These traits define the numeric contract for element types: exact
//! arithmetic with additive and multiplicative identities, ordering, and a
//! single comparison policy used everywhere values are tested for equality
//! or zero.

use std::fmt::{Debug, Display};
use std::ops::Neg;

use num_traits::{Float, Num, NumAssign};

/// Element type for vectors and matrices.
///
/// Covers the signed integer and floating-point primitives. Integer scalars
/// compare exactly; float scalars compare within [`FloatScalar::TOLERANCE`].
/// All comparison-based operations (`approx_eq` on vectors and matrices,
/// diagonality checks, singularity detection) go through this one policy.
///
/// # Examples
///
/// ```
/// use lineal::scalar::Scalar;
///
/// assert!(3_i32.approx_eq(3));
/// assert!(!3_i32.approx_eq(4));
/// assert!((0.1_f64 + 0.2).approx_eq(0.3));
/// assert!(0.0_f32.approx_zero());
/// ```
pub trait Scalar:
    Copy + PartialEq + PartialOrd + Debug + Display + Num + NumAssign + Neg<Output = Self>
{
    /// Tests two values for equality under the crate comparison policy.
    fn approx_eq(self, other: Self) -> bool;

    /// Tests a value for zero under the crate comparison policy.
    fn approx_zero(self) -> bool {
        self.approx_eq(Self::zero())
    }
}

/// Floating-point scalar, required by magnitude, normalization, and angle
/// operations.
///
/// `TOLERANCE` is the comparison tolerance for the width: two values within
/// `TOLERANCE` of each other are considered equal, and a determinant within
/// `TOLERANCE` of zero marks a matrix singular.
///
/// # Examples
///
/// ```
/// use lineal::scalar::FloatScalar;
///
/// assert!(f32::TOLERANCE > 0.0);
/// assert!(f64::TOLERANCE < f32::TOLERANCE as f64);
/// ```
pub trait FloatScalar: Scalar + Float {
    /// Comparison tolerance for this float width.
    const TOLERANCE: Self;
}

macro_rules! impl_scalar_exact {
    ($($t:ty),* $(,)?) => {
        $(
            impl Scalar for $t {
                #[inline]
                fn approx_eq(self, other: Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

impl_scalar_exact!(i8, i16, i32, i64, i128, isize);

macro_rules! impl_scalar_float {
    ($($t:ty => $tol:expr),* $(,)?) => {
        $(
            impl Scalar for $t {
                #[inline]
                fn approx_eq(self, other: Self) -> bool {
                    (self - other).abs() <= <$t as FloatScalar>::TOLERANCE
                }
            }

            impl FloatScalar for $t {
                const TOLERANCE: Self = $tol;
            }
        )*
    };
}

impl_scalar_float!(f32 => 1e-5, f64 => 1e-9);
