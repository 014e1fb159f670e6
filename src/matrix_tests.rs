pub(crate) use super::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_new_and_shape() {
    let m = Matrix::new([[1.0_f32, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    assert_eq!(m.shape(), (2, 3));
    assert_eq!(m.n_rows(), 2);
    assert_eq!(m.n_cols(), 3);
    assert!((m.get(0, 0) - 1.0).abs() < 1e-6);
    assert!((m.get(1, 2) - 6.0).abs() < 1e-6);
}

#[test]
fn test_get_set() {
    let mut m = Matrix::<f32, 2, 2>::zeros();
    m.set(0, 1, 5.0);
    assert!((m.get(0, 1) - 5.0).abs() < 1e-6);
}

#[test]
fn test_zeros() {
    let m = Matrix::<i32, 2, 3>::zeros();
    assert_eq!(m, Matrix::new([[0, 0, 0], [0, 0, 0]]));
}

#[test]
fn test_identity() {
    let i = Matrix::<i32, 3, 3>::identity();
    assert_eq!(i, Matrix::new([[1, 0, 0], [0, 1, 0], [0, 0, 1]]));
}

#[test]
fn test_diagonal() {
    let d = Matrix::<i32, 3, 3>::diagonal(7);
    assert_eq!(d, Matrix::new([[7, 0, 0], [0, 7, 0], [0, 0, 7]]));
}

#[test]
fn test_from_diagonal() {
    let d = Matrix::from_diagonal(&Vector::new([1, 2, 3]));
    assert_eq!(d, Matrix::new([[1, 0, 0], [0, 2, 0], [0, 0, 3]]));
    assert!(d.is_diagonal());
}

#[test]
fn test_random_within_bounds() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..100 {
        let m = Matrix::<i32, 2, 3>::random(&mut rng, -10, 10);
        for i in 0..2 {
            for j in 0..3 {
                assert!((-10..=10).contains(&m.get(i, j)));
            }
        }
    }
}

#[test]
fn test_random_reproducible() {
    let mut rng_a = StdRng::seed_from_u64(7);
    let mut rng_b = StdRng::seed_from_u64(7);
    let a = Matrix::<i64, 3, 3>::random(&mut rng_a, -100, 100);
    let b = Matrix::<i64, 3, 3>::random(&mut rng_b, -100, 100);
    assert_eq!(a, b);
}

#[test]
fn test_row_and_column() {
    let m = Matrix::new([[1, 2, 3], [4, 5, 6]]);
    assert_eq!(m.row(1), Vector::new([4, 5, 6]));
    assert_eq!(m.column(1), Vector::new([2, 5]));
}

#[test]
fn test_as_rows() {
    let m = Matrix::new([[1, 2], [3, 4]]);
    assert_eq!(m.as_rows(), &[[1, 2], [3, 4]]);
}

#[test]
fn test_add_and_add_assign_agree() {
    let mut a = Matrix::new([[1, 2], [3, 4]]);
    let b = Matrix::new([[5, 6], [7, 8]]);
    let c = a + b;
    a += b;
    assert_eq!(a, c);
    assert_eq!(c, Matrix::new([[6, 8], [10, 12]]));
}

#[test]
fn test_sub_and_sub_assign_agree() {
    let mut a = Matrix::new([[10, 8], [6, 12]]);
    let b = Matrix::new([[4, 3], [2, 7]]);
    let c = a - b;
    a -= b;
    assert_eq!(a, c);
    assert_eq!(c, Matrix::new([[6, 5], [4, 5]]));
}

#[test]
fn test_neg() {
    let m = Matrix::new([[1, -2], [0, 4]]);
    assert_eq!(-m, Matrix::new([[-1, 2], [0, -4]]));
}

#[test]
fn test_scalar_mul_both_sides() {
    let m = Matrix::new([[1, 2], [3, 4]]);
    assert_eq!(m * 2, Matrix::new([[2, 4], [6, 8]]));
    assert_eq!(2 * m, m * 2);

    let mut n = m;
    n *= 3;
    assert_eq!(n, Matrix::new([[3, 6], [9, 12]]));
}

#[test]
fn test_div_scalar() {
    let m = Matrix::new([[2.0_f64, 4.0], [6.0, 8.0]]);
    let half = m.div_scalar(2.0).expect("divisor 2.0 is nonzero");
    assert!(half.approx_eq(&Matrix::new([[1.0, 2.0], [3.0, 4.0]])));
}

#[test]
fn test_div_scalar_zero_errors() {
    let m = Matrix::new([[1.0_f64, 2.0], [3.0, 4.0]]);
    let err = m.div_scalar(0.0).expect_err("division by zero must fail");
    assert!(matches!(err, LinealError::DivisionByZero { .. }));

    let mi = Matrix::new([[1, 2], [3, 4]]);
    assert!(mi.div_scalar(0).is_err());
}

#[test]
fn test_transpose() {
    let m = Matrix::new([[1, 2, 3], [4, 5, 6]]);
    let t = m.transpose();
    assert_eq!(t.shape(), (3, 2));
    assert_eq!(t, Matrix::new([[1, 4], [2, 5], [3, 6]]));
}

#[test]
fn test_transpose_involution() {
    let m = Matrix::new([[1, 2, 3], [4, 5, 6]]);
    assert_eq!(m.transpose().transpose(), m);
}

#[test]
fn test_matmul() {
    // 2x3 * 3x2 = 2x2
    let a = Matrix::new([[1, 2, 3], [4, 5, 6]]);
    let b = Matrix::new([[7, 8], [9, 10], [11, 12]]);
    let c = a * b;

    assert_eq!(c.shape(), (2, 2));
    // c[0,0] = 1*7 + 2*9 + 3*11 = 7 + 18 + 33 = 58
    // c[0,1] = 1*8 + 2*10 + 3*12 = 8 + 20 + 36 = 64
    // c[1,0] = 4*7 + 5*9 + 6*11 = 28 + 45 + 66 = 139
    // c[1,1] = 4*8 + 5*10 + 6*12 = 32 + 50 + 72 = 154
    assert_eq!(c, Matrix::new([[58, 64], [139, 154]]));
}

#[test]
fn test_matmul_identity() {
    let a = Matrix::new([[1, 2], [3, 4]]);
    let i = Matrix::<i32, 2, 2>::identity();
    assert_eq!(a * i, a);
    assert_eq!(i * a, a);
}

#[test]
fn test_matvec() {
    let m = Matrix::new([[1, 2, 3], [4, 5, 6]]);
    let v = Vector::new([1, 2, 3]);
    let result = m * v;

    // result[0] = 1*1 + 2*2 + 3*3 = 14
    // result[1] = 4*1 + 5*2 + 6*3 = 32
    assert_eq!(result, Vector::new([14, 32]));
}

#[test]
fn test_submatrix_of_identity() {
    let i3 = Matrix::<i32, 3, 3>::identity();
    let sub: Matrix<i32, 2, 2> = i3
        .submatrix(0, 0)
        .expect("removing row 0 and col 0 of a 3x3 leaves a 2x2");
    assert_eq!(sub, Matrix::<i32, 2, 2>::identity());
}

#[test]
fn test_submatrix_preserves_order() {
    let m = Matrix::new([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
    let sub: Matrix<i32, 2, 2> = m
        .submatrix(1, 1)
        .expect("removing row 1 and col 1 of a 3x3 leaves a 2x2");
    assert_eq!(sub, Matrix::new([[1, 3], [7, 9]]));
}

#[test]
fn test_submatrix_non_square() {
    let m = Matrix::new([[1, 2, 3], [4, 5, 6]]);
    let sub: Matrix<i32, 1, 2> = m
        .submatrix(0, 2)
        .expect("removing row 0 and col 2 of a 2x3 leaves a 1x2");
    assert_eq!(sub, Matrix::new([[4, 5]]));
}

#[test]
fn test_submatrix_index_out_of_range() {
    let m = Matrix::new([[1, 2], [3, 4]]);
    let row_err = m
        .submatrix::<1, 1>(2, 0)
        .expect_err("row 2 does not exist in a 2x2");
    assert!(matches!(
        row_err,
        LinealError::IndexOutOfRange { index: 2, len: 2 }
    ));

    let col_err = m
        .submatrix::<1, 1>(0, 5)
        .expect_err("col 5 does not exist in a 2x2");
    assert!(matches!(
        col_err,
        LinealError::IndexOutOfRange { index: 5, len: 2 }
    ));
}

#[test]
fn test_submatrix_wrong_output_shape() {
    let m = Matrix::new([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
    let err = m
        .submatrix::<1, 1>(0, 0)
        .expect_err("a 3x3 minor is 2x2, not 1x1");
    assert!(matches!(err, LinealError::DimensionMismatch { .. }));
}

#[test]
fn test_direct_sum_1x1() {
    let a = Matrix::new([[1]]);
    let b = Matrix::new([[2]]);
    let sum: Matrix<i32, 2, 2> = a.direct_sum(&b).expect("1x1 blocks combine into a 2x2");
    assert_eq!(sum, Matrix::new([[1, 0], [0, 2]]));
}

#[test]
fn test_direct_sum_blocks_and_zeros() {
    let a = Matrix::new([[1, 2], [3, 4]]);
    let b = Matrix::new([[5, 6], [7, 8]]);
    let sum: Matrix<i32, 4, 4> = a.direct_sum(&b).expect("2x2 blocks combine into a 4x4");
    assert_eq!(
        sum,
        Matrix::new([
            [1, 2, 0, 0],
            [3, 4, 0, 0],
            [0, 0, 5, 6],
            [0, 0, 7, 8],
        ])
    );
}

#[test]
fn test_direct_sum_wrong_output_shape() {
    let a = Matrix::new([[1]]);
    let b = Matrix::new([[2]]);
    let err = a
        .direct_sum::<3, 3>(&b)
        .expect_err("the direct sum of two 1x1 blocks is 2x2, not 3x3");
    assert!(matches!(err, LinealError::DimensionMismatch { .. }));
}

#[test]
fn test_determinant_1x1() {
    let m = Matrix::new([[7]]);
    assert_eq!(m.determinant(), 7);
}

#[test]
fn test_determinant_2x2() {
    let m = Matrix::new([[1, 2], [3, 4]]);
    // 1*4 - 2*3 = -2
    assert_eq!(m.determinant(), -2);
}

#[test]
fn test_determinant_3x3() {
    let m = Matrix::new([[6, 1, 1], [4, -2, 5], [2, 8, 7]]);
    // 6*(-14-40) - 1*(28-10) + 1*(32+4) = -324 - 18 + 36 = -306
    assert_eq!(m.determinant(), -306);
}

#[test]
fn test_determinant_4x4() {
    let m = Matrix::new([
        [1, 0, 2, -1],
        [3, 0, 0, 5],
        [2, 1, 4, -3],
        [1, 0, 5, 0],
    ]);
    assert_eq!(m.determinant(), 30);
}

#[test]
fn test_determinant_identity_is_one() {
    assert_eq!(Matrix::<i32, 1, 1>::identity().determinant(), 1);
    assert_eq!(Matrix::<i32, 2, 2>::identity().determinant(), 1);
    assert_eq!(Matrix::<i32, 3, 3>::identity().determinant(), 1);
    assert_eq!(Matrix::<i32, 4, 4>::identity().determinant(), 1);
}

#[test]
fn test_determinant_of_transpose() {
    let m = Matrix::new([[6, 1, 1], [4, -2, 5], [2, 8, 7]]);
    assert_eq!(m.transpose().determinant(), m.determinant());

    let f = Matrix::new([[0.5_f64, -1.25, 2.0], [3.5, 0.25, -0.75], [1.0, 2.5, -2.0]]);
    assert!(f.transpose().determinant().approx_eq(f.determinant()));
}

#[test]
fn test_determinant_singular_is_zero() {
    // second row is twice the first
    let m = Matrix::new([[1, 2], [2, 4]]);
    assert_eq!(m.determinant(), 0);
}

#[test]
fn test_cofactor() {
    let m = Matrix::new([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
    // minor(0,0) = det [[5,6],[8,9]] = 45 - 48 = -3, sign +
    assert_eq!(m.cofactor(0, 0).expect("indices in range"), -3);
    // minor(0,1) = det [[4,6],[7,9]] = 36 - 42 = -6, sign -
    assert_eq!(m.cofactor(0, 1).expect("indices in range"), 6);
    // minor(1,2) = det [[1,2],[7,8]] = 8 - 14 = -6, sign -
    assert_eq!(m.cofactor(1, 2).expect("indices in range"), 6);
}

#[test]
fn test_cofactor_1x1() {
    let m = Matrix::new([[9]]);
    assert_eq!(m.cofactor(0, 0).expect("indices in range"), 1);
}

#[test]
fn test_cofactor_index_out_of_range() {
    let m = Matrix::new([[1, 2], [3, 4]]);
    assert!(m.cofactor(2, 0).is_err());
    assert!(m.cofactor(0, 2).is_err());
}

#[test]
fn test_is_diagonal() {
    let d = Matrix::new([[2, 0], [0, 3]]);
    assert!(d.is_diagonal());

    let m = Matrix::new([[2, 1], [0, 3]]);
    assert!(!m.is_diagonal());

    // off-diagonal noise below the comparison tolerance still counts
    let noisy = Matrix::new([[2.0_f64, 1e-12], [-1e-12, 3.0]]);
    assert!(noisy.is_diagonal());
}

#[test]
fn test_inverse_2x2() {
    let m = Matrix::new([[4.0_f64, 7.0], [2.0, 6.0]]);
    // det = 24 - 14 = 10, adjugate [[6,-7],[-2,4]]
    let inv = m.inverse().expect("determinant 10 is nonzero");
    assert!(inv.approx_eq(&Matrix::new([[0.6, -0.7], [-0.2, 0.4]])));
}

#[test]
fn test_inverse_times_self_is_identity() {
    let m = Matrix::new([[3.0_f64, 0.0, 2.0], [2.0, 0.0, -2.0], [0.0, 1.0, 1.0]]);
    let inv = m.inverse().expect("determinant 10 is nonzero");
    let identity = Matrix::<f64, 3, 3>::identity();
    assert!((m * inv).approx_eq(&identity));
    assert!((inv * m).approx_eq(&identity));
}

#[test]
fn test_inverse_1x1() {
    let m = Matrix::new([[4.0_f64]]);
    let inv = m.inverse().expect("determinant 4 is nonzero");
    assert!(inv.approx_eq(&Matrix::new([[0.25]])));
}

#[test]
fn test_inverse_integer_unimodular_is_exact() {
    let m = Matrix::new([[2, 1], [1, 1]]);
    // det = 1, so the adjugate is the exact inverse
    let inv = m.inverse().expect("determinant 1 is nonzero");
    assert_eq!(inv, Matrix::new([[1, -1], [-1, 2]]));
    assert_eq!(m * inv, Matrix::<i32, 2, 2>::identity());
}

#[test]
fn test_inverse_singular_errors() {
    let m = Matrix::new([[1.0_f64, 2.0], [2.0, 4.0]]);
    let err = m.inverse().expect_err("rows are linearly dependent");
    assert!(matches!(err, LinealError::SingularMatrix { .. }));

    let mi = Matrix::new([[1, 2], [2, 4]]);
    assert!(mi.inverse().is_err());

    let zero_row = Matrix::new([[1, 2], [0, 0]]);
    assert!(zero_row.inverse().is_err());
}

#[test]
fn test_diagonal_matrices_commute() {
    let a = Matrix::new([[2, 0], [0, 3]]);
    let b = Matrix::new([[5, 0], [0, 7]]);
    assert_eq!(a * b, b * a);
}

#[test]
fn test_non_diagonal_matrices_need_not_commute() {
    let a = Matrix::new([[1, 2], [3, 4]]);
    let b = Matrix::new([[0, 1], [1, 0]]);
    // a*b = [[2,1],[4,3]], b*a = [[3,4],[1,2]]
    assert_ne!(a * b, b * a);
}

#[test]
fn test_display_format() {
    let m = Matrix::new([[1, 2], [3, 4]]);
    assert_eq!(m.to_string(), "| 1 2 |\n| 3 4 |");

    let single = Matrix::new([[-5]]);
    assert_eq!(single.to_string(), "| -5 |");
}

#[test]
fn test_approx_eq_floats() {
    let a = Matrix::new([[1.0_f64, 2.0], [3.0, 4.0]]);
    let b = Matrix::new([[1.0 + 1e-12, 2.0], [3.0, 4.0 - 1e-12]]);
    assert!(a.approx_eq(&b));

    let c = Matrix::new([[1.0 + 1e-6, 2.0], [3.0, 4.0]]);
    assert!(!a.approx_eq(&c));
}

#[test]
fn test_serde_round_trip() {
    let m = Matrix::new([[1, 2], [3, 4]]);
    let json = serde_json::to_string(&m).expect("matrix serializes to nested JSON arrays");
    assert_eq!(json, "[[1,2],[3,4]]");

    let back: Matrix<i32, 2, 2> = serde_json::from_str(&json).expect("round trip preserves values");
    assert_eq!(back, m);
}

#[test]
fn test_serde_rejects_wrong_shape() {
    let short_row: std::result::Result<Matrix<i32, 2, 2>, _> = serde_json::from_str("[[1,2],[3]]");
    assert!(short_row.is_err());

    let missing_row: std::result::Result<Matrix<i32, 2, 2>, _> = serde_json::from_str("[[1,2]]");
    assert!(missing_row.is_err());
}
