//! Fixed-dimension vector type (geometric tuple).

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use rand::distributions::uniform::SampleUniform;
use rand::Rng;
use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{LinealError, Result};
use crate::scalar::{FloatScalar, Scalar};

/// A fixed-dimension vector of `D` scalar components.
///
/// Stack-allocated and `Copy`. Elementwise addition, subtraction, and scalar
/// multiplication are operators; fallible operations (scalar division,
/// normalization, angles) return [`Result`]. The dimension is part of the
/// type, so mixing dimensions is a compile error.
///
/// # Examples
///
/// ```
/// use lineal::Vector;
///
/// let a = Vector::new([1.0, 2.0, 3.0]);
/// let b = Vector::new([4.0, 5.0, 6.0]);
/// assert_eq!(a + b, Vector::new([5.0, 7.0, 9.0]));
/// assert_eq!(a.dot(&b), 32.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vector<T, const D: usize> {
    components: [T; D],
}

/// Two-dimensional vector.
pub type Vector2<T> = Vector<T, 2>;

/// Three-dimensional vector.
pub type Vector3<T> = Vector<T, 3>;

impl<T: Scalar, const D: usize> Vector<T, D> {
    // Zero-dimension vectors are rejected when a constructor is instantiated.
    const DIM_NONZERO: () = assert!(D > 0, "Vector dimension must be at least 1");

    /// Creates a vector from its components.
    #[must_use]
    pub fn new(components: [T; D]) -> Self {
        let _ = Self::DIM_NONZERO;
        Self { components }
    }

    /// Creates a vector with every component set to `value`.
    #[must_use]
    pub fn repeat(value: T) -> Self {
        Self::new([value; D])
    }

    /// Creates the zero vector.
    #[must_use]
    pub fn zeros() -> Self {
        Self::repeat(T::zero())
    }

    /// Creates a vector of ones.
    #[must_use]
    pub fn ones() -> Self {
        Self::repeat(T::one())
    }

    /// Creates a vector with components drawn uniformly from `[min, max]`.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    #[must_use]
    pub fn random<R: Rng + ?Sized>(rng: &mut R, min: T, max: T) -> Self
    where
        T: SampleUniform,
    {
        let mut components = [T::zero(); D];
        for c in &mut components {
            *c = rng.gen_range(min..=max);
        }
        Self::new(components)
    }

    /// Returns the number of components (the dimension `D`).
    #[must_use]
    pub fn len(&self) -> usize {
        D
    }

    /// Always false: the dimension is at least 1.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Returns the components as an array reference.
    #[must_use]
    pub fn as_array(&self) -> &[T; D] {
        &self.components
    }

    /// Consumes the vector, returning its component array.
    #[must_use]
    pub fn into_array(self) -> [T; D] {
        self.components
    }

    /// Returns the components as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.components
    }

    /// Dot product.
    #[must_use]
    pub fn dot(&self, other: &Self) -> T {
        let mut sum = T::zero();
        for i in 0..D {
            sum += self.components[i] * other.components[i];
        }
        sum
    }

    /// Squared magnitude, `self . self`. Exact for integer scalars.
    #[must_use]
    pub fn norm_squared(&self) -> T {
        self.dot(self)
    }

    /// Tests componentwise equality under the crate comparison policy.
    #[must_use]
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.components
            .iter()
            .zip(other.components.iter())
            .all(|(a, b)| a.approx_eq(*b))
    }

    /// Divides every component by a scalar.
    ///
    /// # Errors
    ///
    /// Returns [`LinealError::DivisionByZero`] if `scalar` is zero.
    pub fn div_scalar(&self, scalar: T) -> Result<Self> {
        let mut out = *self;
        out.div_scalar_assign(scalar)?;
        Ok(out)
    }

    /// Divides every component by a scalar in place.
    ///
    /// # Errors
    ///
    /// Returns [`LinealError::DivisionByZero`] if `scalar` is zero.
    pub fn div_scalar_assign(&mut self, scalar: T) -> Result<()> {
        if scalar.approx_zero() {
            return Err(LinealError::division_by_zero("vector scalar division"));
        }
        for c in &mut self.components {
            *c /= scalar;
        }
        Ok(())
    }
}

impl<T: FloatScalar, const D: usize> Vector<T, D> {
    /// Magnitude (Euclidean norm).
    #[must_use]
    pub fn norm(&self) -> T {
        self.norm_squared().sqrt()
    }

    /// Rescales the vector in place to magnitude 1.
    ///
    /// # Errors
    ///
    /// Returns [`LinealError::DivisionByZero`] if the magnitude is zero.
    pub fn normalize(&mut self) -> Result<()> {
        let norm = self.norm();
        if norm.approx_zero() {
            return Err(LinealError::division_by_zero("normalize"));
        }
        for c in &mut self.components {
            *c /= norm;
        }
        Ok(())
    }

    /// Returns a unit vector pointing in the same direction.
    ///
    /// # Errors
    ///
    /// Returns [`LinealError::DivisionByZero`] if the magnitude is zero.
    pub fn normalized(&self) -> Result<Self> {
        let mut out = *self;
        out.normalize()?;
        Ok(out)
    }

    /// Angle between two vectors in radians, in `[0, pi]`.
    ///
    /// The cosine is clamped to `[-1, 1]` so rounding in the norms cannot
    /// push `acos` out of its domain.
    ///
    /// # Errors
    ///
    /// Returns [`LinealError::DivisionByZero`] if either vector has zero
    /// magnitude.
    pub fn angle_between(&self, other: &Self) -> Result<T> {
        let denom = (self.norm_squared() * other.norm_squared()).sqrt();
        if denom.approx_zero() {
            return Err(LinealError::division_by_zero("angle_between"));
        }
        let cos = (self.dot(other) / denom).max(-T::one()).min(T::one());
        Ok(cos.acos())
    }
}

impl<T: Scalar> Vector<T, 2> {
    /// First component.
    #[must_use]
    pub fn x(&self) -> T {
        self.components[0]
    }

    /// Second component.
    #[must_use]
    pub fn y(&self) -> T {
        self.components[1]
    }

    /// 2D cross product, the signed area of the parallelogram spanned by
    /// the two vectors: `x1*y2 - y1*x2`.
    #[must_use]
    pub fn cross(&self, other: &Self) -> T {
        self.x() * other.y() - self.y() * other.x()
    }
}

impl<T: Scalar> Vector<T, 3> {
    /// First component.
    #[must_use]
    pub fn x(&self) -> T {
        self.components[0]
    }

    /// Second component.
    #[must_use]
    pub fn y(&self) -> T {
        self.components[1]
    }

    /// Third component.
    #[must_use]
    pub fn z(&self) -> T {
        self.components[2]
    }

    /// 3D cross product. The result is perpendicular to both operands.
    #[must_use]
    pub fn cross(&self, other: &Self) -> Self {
        Self::new([
            self.y() * other.z() - self.z() * other.y(),
            self.z() * other.x() - self.x() * other.z(),
            self.x() * other.y() - self.y() * other.x(),
        ])
    }

    /// Scalar triple product `self . (b x c)`, the signed volume of the
    /// parallelepiped spanned by the three vectors.
    #[must_use]
    pub fn scalar_triple(&self, b: &Self, c: &Self) -> T {
        self.dot(&b.cross(c))
    }
}

impl<T, const D: usize> Index<usize> for Vector<T, D> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.components[index]
    }
}

impl<T, const D: usize> IndexMut<usize> for Vector<T, D> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.components[index]
    }
}

impl<T: Scalar, const D: usize> Add for Vector<T, D> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl<T: Scalar, const D: usize> AddAssign for Vector<T, D> {
    fn add_assign(&mut self, rhs: Self) {
        for i in 0..D {
            self.components[i] += rhs.components[i];
        }
    }
}

impl<T: Scalar, const D: usize> Sub for Vector<T, D> {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

impl<T: Scalar, const D: usize> SubAssign for Vector<T, D> {
    fn sub_assign(&mut self, rhs: Self) {
        for i in 0..D {
            self.components[i] -= rhs.components[i];
        }
    }
}

impl<T: Scalar, const D: usize> Neg for Vector<T, D> {
    type Output = Self;

    fn neg(mut self) -> Self {
        for c in &mut self.components {
            *c = -*c;
        }
        self
    }
}

impl<T: Scalar, const D: usize> Mul<T> for Vector<T, D> {
    type Output = Self;

    fn mul(mut self, scalar: T) -> Self {
        self *= scalar;
        self
    }
}

impl<T: Scalar, const D: usize> MulAssign<T> for Vector<T, D> {
    fn mul_assign(&mut self, scalar: T) {
        for c in &mut self.components {
            *c *= scalar;
        }
    }
}

// Scalar-on-the-left multiplication. Coherence forbids a blanket impl over
// every Scalar, so each primitive gets its own.
macro_rules! impl_scalar_vector_mul {
    ($($t:ty),* $(,)?) => {
        $(
            impl<const D: usize> Mul<Vector<$t, D>> for $t {
                type Output = Vector<$t, D>;

                fn mul(self, rhs: Vector<$t, D>) -> Vector<$t, D> {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_vector_mul!(i8, i16, i32, i64, i128, isize, f32, f64);

impl<T: fmt::Display, const D: usize> fmt::Display for Vector<T, D> {
    /// Formats as `(e0,e1,...,e{D-1})`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.components.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, ")")
    }
}

impl<T: Serialize, const D: usize> Serialize for Vector<T, D> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut tup = serializer.serialize_tuple(D)?;
        for c in &self.components {
            tup.serialize_element(c)?;
        }
        tup.end()
    }
}

// serde only derives Deserialize for arrays up to 32 elements, so the
// visitor is written out to cover every D.
impl<'de, T, const D: usize> Deserialize<'de> for Vector<T, D>
where
    T: Scalar + Deserialize<'de>,
{
    fn deserialize<De>(deserializer: De) -> std::result::Result<Self, De::Error>
    where
        De: Deserializer<'de>,
    {
        struct ComponentsVisitor<T, const D: usize>(PhantomData<T>);

        impl<'de, T, const D: usize> Visitor<'de> for ComponentsVisitor<T, D>
        where
            T: Scalar + Deserialize<'de>,
        {
            type Value = Vector<T, D>;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(formatter, "a sequence of {D} scalar components")
            }

            fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut components = [T::zero(); D];
                for (i, slot) in components.iter_mut().enumerate() {
                    *slot = seq
                        .next_element()?
                        .ok_or_else(|| de::Error::invalid_length(i, &self))?;
                }
                Ok(Vector::new(components))
            }
        }

        deserializer.deserialize_tuple(D, ComponentsVisitor(PhantomData))
    }
}

#[cfg(test)]
#[path = "vector_tests.rs"]
mod tests;
