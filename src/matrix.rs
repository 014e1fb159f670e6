//! Fixed-size matrix type with exact cofactor algebra.

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use rand::distributions::uniform::SampleUniform;
use rand::Rng;
use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{LinealError, Result};
use crate::scalar::Scalar;
use crate::vector::Vector;

/// An `M` by `N` matrix in row-major order, representing a linear map from
/// `N`-dimensional to `M`-dimensional space.
///
/// Stack-allocated and `Copy`. Shape agreement is part of the type system:
/// addition requires equal shapes, multiplication requires the inner
/// dimensions to match, and determinant, inversion, and identity exist only
/// on square matrices. Arithmetic is exact for integer scalars.
///
/// # Examples
///
/// ```
/// use lineal::Matrix;
///
/// let a = Matrix::new([[1, 2], [3, 4]]);
/// // 1*4 - 2*3 = -2
/// assert_eq!(a.determinant(), -2);
///
/// let i = Matrix::<i32, 2, 2>::identity();
/// assert_eq!(a * i, a);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Matrix<T, const M: usize, const N: usize> {
    rows: [[T; N]; M],
}

/// 2x2 matrix.
pub type Matrix2<T> = Matrix<T, 2, 2>;

/// 3x3 matrix.
pub type Matrix3<T> = Matrix<T, 3, 3>;

/// 4x4 matrix.
pub type Matrix4<T> = Matrix<T, 4, 4>;

impl<T: Scalar, const M: usize, const N: usize> Matrix<T, M, N> {
    // Zero-dimension matrices are rejected when a constructor is instantiated.
    const DIMS_NONZERO: () = assert!(M > 0 && N > 0, "Matrix dimensions must be at least 1x1");

    /// Creates a matrix from nested rows (row-major).
    #[must_use]
    pub fn new(rows: [[T; N]; M]) -> Self {
        let _ = Self::DIMS_NONZERO;
        Self { rows }
    }

    /// Creates a matrix of zeros.
    #[must_use]
    pub fn zeros() -> Self {
        Self::new([[T::zero(); N]; M])
    }

    /// Creates a matrix with elements drawn uniformly from `[min, max]`.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    #[must_use]
    pub fn random<R: Rng + ?Sized>(rng: &mut R, min: T, max: T) -> Self
    where
        T: SampleUniform,
    {
        let mut out = Self::zeros();
        for row in &mut out.rows {
            for elem in row {
                *elem = rng.gen_range(min..=max);
            }
        }
        out
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (M, N)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        M
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        N
    }

    /// Gets element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.rows[row][col]
    }

    /// Sets element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.rows[row][col] = value;
    }

    /// Returns a row as a Vector.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    #[must_use]
    pub fn row(&self, row: usize) -> Vector<T, N> {
        Vector::new(self.rows[row])
    }

    /// Returns a column as a Vector.
    ///
    /// # Panics
    ///
    /// Panics if `col` is out of bounds.
    #[must_use]
    pub fn column(&self, col: usize) -> Vector<T, M> {
        let mut out = Vector::zeros();
        for i in 0..M {
            out[i] = self.rows[i][col];
        }
        out
    }

    /// Returns the rows as a nested array reference.
    #[must_use]
    pub fn as_rows(&self) -> &[[T; N]; M] {
        &self.rows
    }

    /// Transposes the matrix: `result[c][r] = self[r][c]`.
    #[must_use]
    pub fn transpose(&self) -> Matrix<T, N, M> {
        let mut out = Matrix::zeros();
        for i in 0..M {
            for j in 0..N {
                out.rows[j][i] = self.rows[i][j];
            }
        }
        out
    }

    /// Tests elementwise equality under the crate comparison policy.
    #[must_use]
    pub fn approx_eq(&self, other: &Self) -> bool {
        for i in 0..M {
            for j in 0..N {
                if !self.rows[i][j].approx_eq(other.rows[i][j]) {
                    return false;
                }
            }
        }
        true
    }

    /// Divides every element by a scalar.
    ///
    /// # Errors
    ///
    /// Returns [`LinealError::DivisionByZero`] if `scalar` is zero.
    pub fn div_scalar(&self, scalar: T) -> Result<Self> {
        let mut out = *self;
        out.div_scalar_assign(scalar)?;
        Ok(out)
    }

    /// Divides every element by a scalar in place.
    ///
    /// # Errors
    ///
    /// Returns [`LinealError::DivisionByZero`] if `scalar` is zero.
    pub fn div_scalar_assign(&mut self, scalar: T) -> Result<()> {
        if scalar.approx_zero() {
            return Err(LinealError::division_by_zero("matrix scalar division"));
        }
        for row in &mut self.rows {
            for elem in row {
                *elem /= scalar;
            }
        }
        Ok(())
    }

    /// Extracts the submatrix left by removing one row and one column,
    /// preserving the order of the remaining elements.
    ///
    /// Stable Rust cannot express `M - 1` in the return type, so the output
    /// shape is named by the caller and validated here.
    ///
    /// # Errors
    ///
    /// Returns [`LinealError::IndexOutOfRange`] if `row >= M` or `col >= N`,
    /// and [`LinealError::DimensionMismatch`] unless `P == M - 1` and
    /// `Q == N - 1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lineal::Matrix;
    ///
    /// let m = Matrix::new([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
    /// let sub: Matrix<i32, 2, 2> = m.submatrix(0, 0).unwrap();
    /// assert_eq!(sub, Matrix::new([[5, 6], [8, 9]]));
    /// ```
    pub fn submatrix<const P: usize, const Q: usize>(
        &self,
        row: usize,
        col: usize,
    ) -> Result<Matrix<T, P, Q>> {
        if row >= M {
            return Err(LinealError::index_out_of_range(row, M));
        }
        if col >= N {
            return Err(LinealError::index_out_of_range(col, N));
        }
        if P + 1 != M || Q + 1 != N {
            return Err(LinealError::shape_mismatch((M - 1, N - 1), (P, Q)));
        }
        let mut out = Matrix::zeros();
        let mut r = 0;
        for i in 0..M {
            if i == row {
                continue;
            }
            let mut c = 0;
            for j in 0..N {
                if j == col {
                    continue;
                }
                out.rows[r][c] = self.rows[i][j];
                c += 1;
            }
            r += 1;
        }
        Ok(out)
    }

    /// Direct sum of two equal-shaped matrices: the block-diagonal matrix
    ///
    /// ```text
    /// | A 0 |
    /// | 0 B |
    /// ```
    ///
    /// Stable Rust cannot express `2 * M` in the return type, so the output
    /// shape is named by the caller and validated here.
    ///
    /// # Errors
    ///
    /// Returns [`LinealError::DimensionMismatch`] unless `P == 2 * M` and
    /// `Q == 2 * N`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lineal::Matrix;
    ///
    /// let a = Matrix::new([[1]]);
    /// let b = Matrix::new([[2]]);
    /// let sum: Matrix<i32, 2, 2> = a.direct_sum(&b).unwrap();
    /// assert_eq!(sum, Matrix::new([[1, 0], [0, 2]]));
    /// ```
    pub fn direct_sum<const P: usize, const Q: usize>(
        &self,
        other: &Self,
    ) -> Result<Matrix<T, P, Q>> {
        if P != 2 * M || Q != 2 * N {
            return Err(LinealError::shape_mismatch((2 * M, 2 * N), (P, Q)));
        }
        let mut out = Matrix::zeros();
        for i in 0..M {
            for j in 0..N {
                out.rows[i][j] = self.rows[i][j];
                out.rows[M + i][N + j] = other.rows[i][j];
            }
        }
        Ok(out)
    }
}

impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    /// Creates the identity matrix.
    #[must_use]
    pub fn identity() -> Self {
        Self::diagonal(T::one())
    }

    /// Creates a matrix with `value` along the diagonal and zeros elsewhere.
    #[must_use]
    pub fn diagonal(value: T) -> Self {
        let mut out = Self::zeros();
        for i in 0..N {
            out.rows[i][i] = value;
        }
        out
    }

    /// Creates a matrix with the given diagonal and zeros elsewhere.
    #[must_use]
    pub fn from_diagonal(diag: &Vector<T, N>) -> Self {
        let mut out = Self::zeros();
        for i in 0..N {
            out.rows[i][i] = diag[i];
        }
        out
    }

    /// Determinant by recursive cofactor expansion along the first row.
    ///
    /// Exact for integer scalars. Runs in `O(N!)`; intended for the small
    /// fixed dimensions this crate targets.
    #[must_use]
    pub fn determinant(&self) -> T {
        let idx: [usize; N] = std::array::from_fn(|i| i);
        self.minor_det(&idx, &idx)
    }

    // Determinant of the minor spanned by the given row and column indices.
    // Index lists live on the stack, so the recursion never allocates.
    fn minor_det(&self, rows: &[usize], cols: &[usize]) -> T {
        if rows.len() == 1 {
            return self.rows[rows[0]][cols[0]];
        }
        let mut det = T::zero();
        let mut sign = T::one();
        let sub_rows = &rows[1..];
        for (skip, &col) in cols.iter().enumerate() {
            let mut sub_cols = [0usize; N];
            let mut k = 0;
            for (j, &c) in cols.iter().enumerate() {
                if j != skip {
                    sub_cols[k] = c;
                    k += 1;
                }
            }
            det += sign * self.rows[rows[0]][col] * self.minor_det(sub_rows, &sub_cols[..k]);
            sign = -sign;
        }
        det
    }

    /// Cofactor at (row, col): `(-1)^(row+col)` times the determinant of the
    /// minor left by removing that row and column.
    ///
    /// # Errors
    ///
    /// Returns [`LinealError::IndexOutOfRange`] if `row >= N` or `col >= N`.
    pub fn cofactor(&self, row: usize, col: usize) -> Result<T> {
        if row >= N {
            return Err(LinealError::index_out_of_range(row, N));
        }
        if col >= N {
            return Err(LinealError::index_out_of_range(col, N));
        }
        let minor = if N == 1 {
            // empty determinant
            T::one()
        } else {
            let mut rows = [0usize; N];
            let mut r = 0;
            for i in 0..N {
                if i != row {
                    rows[r] = i;
                    r += 1;
                }
            }
            let mut cols = [0usize; N];
            let mut c = 0;
            for j in 0..N {
                if j != col {
                    cols[c] = j;
                    c += 1;
                }
            }
            self.minor_det(&rows[..N - 1], &cols[..N - 1])
        };
        if (row + col) % 2 == 0 {
            Ok(minor)
        } else {
            Ok(-minor)
        }
    }

    /// Whether every off-diagonal element is zero under the crate comparison
    /// policy.
    #[must_use]
    pub fn is_diagonal(&self) -> bool {
        for i in 0..N {
            for j in 0..N {
                if i != j && !self.rows[i][j].approx_zero() {
                    return false;
                }
            }
        }
        true
    }

    /// Inverse by the adjugate method: `inv[i][j] = cofactor(j, i) / det`.
    ///
    /// For integer scalars the result is exact only when the determinant
    /// divides every cofactor (unimodular matrices, for instance).
    ///
    /// # Errors
    ///
    /// Returns [`LinealError::SingularMatrix`] if the determinant is zero
    /// under the crate comparison policy.
    pub fn inverse(&self) -> Result<Self> {
        let det = self.determinant();
        if det.approx_zero() {
            return Err(LinealError::singular_matrix(det));
        }
        let mut inv = Self::zeros();
        for i in 0..N {
            for j in 0..N {
                inv.rows[i][j] = self.cofactor(j, i)? / det;
            }
        }
        Ok(inv)
    }
}

impl<T: Scalar, const M: usize, const N: usize> Add for Matrix<T, M, N> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl<T: Scalar, const M: usize, const N: usize> AddAssign for Matrix<T, M, N> {
    fn add_assign(&mut self, rhs: Self) {
        for i in 0..M {
            for j in 0..N {
                self.rows[i][j] += rhs.rows[i][j];
            }
        }
    }
}

impl<T: Scalar, const M: usize, const N: usize> Sub for Matrix<T, M, N> {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

impl<T: Scalar, const M: usize, const N: usize> SubAssign for Matrix<T, M, N> {
    fn sub_assign(&mut self, rhs: Self) {
        for i in 0..M {
            for j in 0..N {
                self.rows[i][j] -= rhs.rows[i][j];
            }
        }
    }
}

impl<T: Scalar, const M: usize, const N: usize> Neg for Matrix<T, M, N> {
    type Output = Self;

    fn neg(mut self) -> Self {
        for row in &mut self.rows {
            for elem in row {
                *elem = -*elem;
            }
        }
        self
    }
}

impl<T: Scalar, const M: usize, const N: usize> Mul<T> for Matrix<T, M, N> {
    type Output = Self;

    fn mul(mut self, scalar: T) -> Self {
        self *= scalar;
        self
    }
}

impl<T: Scalar, const M: usize, const N: usize> MulAssign<T> for Matrix<T, M, N> {
    fn mul_assign(&mut self, scalar: T) {
        for row in &mut self.rows {
            for elem in row {
                *elem *= scalar;
            }
        }
    }
}

// Scalar-on-the-left multiplication, one impl per primitive as for Vector.
macro_rules! impl_scalar_matrix_mul {
    ($($t:ty),* $(,)?) => {
        $(
            impl<const M: usize, const N: usize> Mul<Matrix<$t, M, N>> for $t {
                type Output = Matrix<$t, M, N>;

                fn mul(self, rhs: Matrix<$t, M, N>) -> Matrix<$t, M, N> {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_matrix_mul!(i8, i16, i32, i64, i128, isize, f32, f64);

/// Matrix product: `(M, N) * (N, P) = (M, P)`. The inner dimensions must
/// agree, which the types enforce at compile time.
impl<T: Scalar, const M: usize, const N: usize, const P: usize> Mul<Matrix<T, N, P>>
    for Matrix<T, M, N>
{
    type Output = Matrix<T, M, P>;

    fn mul(self, rhs: Matrix<T, N, P>) -> Matrix<T, M, P> {
        let mut out = Matrix::zeros();
        for i in 0..M {
            for j in 0..P {
                let mut sum = T::zero();
                for k in 0..N {
                    sum += self.rows[i][k] * rhs.rows[k][j];
                }
                out.rows[i][j] = sum;
            }
        }
        out
    }
}

/// Applies the matrix as a linear map to a vector: `(M, N) * N = M`.
impl<T: Scalar, const M: usize, const N: usize> Mul<Vector<T, N>> for Matrix<T, M, N> {
    type Output = Vector<T, M>;

    fn mul(self, rhs: Vector<T, N>) -> Vector<T, M> {
        let mut out = Vector::zeros();
        for i in 0..M {
            out[i] = self.row(i).dot(&rhs);
        }
        out
    }
}

impl<T: fmt::Display, const M: usize, const N: usize> fmt::Display for Matrix<T, M, N> {
    /// Formats each row as `| e0 e1 ... |`, one row per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.rows.iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            write!(f, "|")?;
            for elem in row {
                write!(f, " {elem}")?;
            }
            write!(f, " |")?;
        }
        Ok(())
    }
}

impl<T: Serialize, const M: usize, const N: usize> Serialize for Matrix<T, M, N> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // serde only implements Serialize for arrays up to 32 elements, so
        // each row is serialized as a tuple by hand to cover every N.
        struct Row<'a, T, const N: usize>(&'a [T; N]);

        impl<T: Serialize, const N: usize> Serialize for Row<'_, T, N> {
            fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                let mut tup = serializer.serialize_tuple(N)?;
                for elem in self.0 {
                    tup.serialize_element(elem)?;
                }
                tup.end()
            }
        }

        let mut tup = serializer.serialize_tuple(M)?;
        for row in &self.rows {
            tup.serialize_element(&Row(row))?;
        }
        tup.end()
    }
}

// Rows deserialize through Vector to sidestep serde's 32-element array limit.
impl<'de, T, const M: usize, const N: usize> Deserialize<'de> for Matrix<T, M, N>
where
    T: Scalar + Deserialize<'de>,
{
    fn deserialize<De>(deserializer: De) -> std::result::Result<Self, De::Error>
    where
        De: Deserializer<'de>,
    {
        struct RowsVisitor<T, const M: usize, const N: usize>(PhantomData<T>);

        impl<'de, T, const M: usize, const N: usize> Visitor<'de> for RowsVisitor<T, M, N>
        where
            T: Scalar + Deserialize<'de>,
        {
            type Value = Matrix<T, M, N>;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(formatter, "a sequence of {M} rows of {N} scalars")
            }

            fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut rows = [[T::zero(); N]; M];
                for (i, slot) in rows.iter_mut().enumerate() {
                    let row: Vector<T, N> = seq
                        .next_element()?
                        .ok_or_else(|| de::Error::invalid_length(i, &self))?;
                    *slot = row.into_array();
                }
                Ok(Matrix::new(rows))
            }
        }

        deserializer.deserialize_tuple(M, RowsVisitor(PhantomData))
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;
