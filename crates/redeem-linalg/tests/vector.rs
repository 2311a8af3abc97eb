//! Integration tests for the `Vector` type.

use approx::assert_abs_diff_eq;
use redeem_linalg::{LinalgError, Vector};
use std::f64::consts::FRAC_PI_2;

fn v(values: &[f64]) -> Vector {
    Vector::from_vec(values.to_vec()).unwrap()
}

// ---------------------------------------------------------------------------
// Construction and access
// ---------------------------------------------------------------------------

#[test]
fn from_vec_and_dim() {
    let a = v(&[1.0, 2.0, 3.0]);
    assert_eq!(a.dim(), 3);
    assert_eq!(a.to_vec(), vec![1.0, 2.0, 3.0]);
}

#[test]
fn empty_vector_is_rejected() {
    let err = Vector::from_vec(vec![]).unwrap_err();
    assert!(matches!(err, LinalgError::Construction(_)));
    assert!(Vector::zeros(0).is_err());
}

#[test]
fn zeros_has_requested_dim() {
    let z = Vector::zeros(4).unwrap();
    assert_eq!(z.dim(), 4);
    assert!(z.iter().all(|&x| x == 0.0));
}

#[test]
fn try_from_vec() {
    let a = Vector::try_from(vec![5.0, 6.0]).unwrap();
    assert_eq!(a[1], 6.0);
    let back: Vec<f64> = a.into();
    assert_eq!(back, vec![5.0, 6.0]);
}

#[test]
fn get_and_set_in_range() {
    let mut a = v(&[1.0, 2.0, 3.0]);
    assert_eq!(a.get(2).unwrap(), 3.0);
    a.set(0, 9.0).unwrap();
    assert_eq!(a.get(0).unwrap(), 9.0);
}

#[test]
fn get_out_of_range_errors() {
    let a = v(&[1.0, 2.0, 3.0]);
    assert_eq!(
        a.get(3).unwrap_err(),
        LinalgError::OutOfBounds { index: 3, len: 3 }
    );
}

#[test]
fn set_out_of_range_errors_and_leaves_vector_untouched() {
    let mut a = v(&[1.0, 2.0]);
    assert!(a.set(2, 5.0).is_err());
    assert_eq!(a.to_vec(), vec![1.0, 2.0]);
}

// ---------------------------------------------------------------------------
// Norms and scaling
// ---------------------------------------------------------------------------

#[test]
fn magnitude_is_euclidean_norm() {
    assert_eq!(v(&[3.0, 4.0]).magnitude(), 5.0);
    assert_eq!(v(&[0.0, 0.0, 0.0]).magnitude(), 0.0);
}

#[test]
fn scale_returns_new_vector() {
    let a = v(&[1.0, -2.0, 3.0]);
    let b = a.scale(2.0);
    assert_eq!(b.to_vec(), vec![2.0, -4.0, 6.0]);
    assert_eq!(a.to_vec(), vec![1.0, -2.0, 3.0]);
}

#[test]
fn scale_in_place_mutates() {
    let mut a = v(&[1.0, -2.0, 3.0]);
    a.scale_in_place(-1.0);
    assert_eq!(a.to_vec(), vec![-1.0, 2.0, -3.0]);
}

#[test]
fn unit_vector_has_magnitude_one() {
    let u = v(&[3.0, 0.0, 4.0]).unit_vector().unwrap();
    assert_abs_diff_eq!(u.magnitude(), 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(u[0], 0.6, epsilon = 1e-12);
    assert_abs_diff_eq!(u[2], 0.8, epsilon = 1e-12);
}

#[test]
fn unit_vector_of_zero_vector_errors() {
    let err = Vector::zeros(3).unwrap().unit_vector().unwrap_err();
    assert!(matches!(err, LinalgError::InvalidOperation(_)));
}

// ---------------------------------------------------------------------------
// Products and angles
// ---------------------------------------------------------------------------

#[test]
fn dot_product() {
    let a = v(&[1.0, 2.0, 3.0]);
    let b = v(&[4.0, -5.0, 6.0]);
    assert_eq!(a.dot(&b).unwrap(), 12.0);
    assert_eq!(Vector::dot(&b, &a).unwrap(), 12.0);
}

#[test]
fn dot_dimension_mismatch() {
    let err = v(&[1.0, 2.0]).dot(&v(&[1.0, 2.0, 3.0])).unwrap_err();
    assert!(matches!(err, LinalgError::DimensionMismatch { op: "dot", .. }));
}

#[test]
fn cross_product_known_value() {
    let a = v(&[1.0, 2.0, 3.0]);
    let b = v(&[3.0, 2.0, 1.0]);
    assert_eq!(a.cross_product(&b).unwrap().to_vec(), vec![-4.0, 8.0, -4.0]);
}

#[test]
fn cross_product_of_basis_vectors() {
    let x = v(&[1.0, 0.0, 0.0]);
    let y = v(&[0.0, 1.0, 0.0]);
    assert_eq!(x.cross_product(&y).unwrap().to_vec(), vec![0.0, 0.0, 1.0]);
}

#[test]
fn cross_product_requires_both_vectors_3d() {
    let a3 = v(&[1.0, 2.0, 3.0]);
    let b2 = v(&[1.0, 2.0]);
    assert!(a3.cross_product(&b2).is_err());
    assert!(b2.cross_product(&a3).is_err());
    assert!(b2.cross_product(&b2).is_err());
}

#[test]
fn angle_between_orthogonal_vectors() {
    let a = v(&[1.0, 0.0]);
    let b = v(&[0.0, 2.0]);
    assert_abs_diff_eq!(a.angle_between(&b).unwrap(), FRAC_PI_2, epsilon = 1e-12);
}

#[test]
fn angle_between_parallel_vectors_is_zero() {
    let a = v(&[1.0, 2.0, 3.0]);
    let b = a.scale(3.0);
    assert_abs_diff_eq!(a.angle_between(&b).unwrap(), 0.0, epsilon = 1e-7);
}

#[test]
fn angle_between_cross_product_and_operands_is_right_angle() {
    let a = v(&[1.0, 2.0, 3.0]);
    let b = v(&[3.0, 2.0, 1.0]);
    let c = a.cross_product(&b).unwrap();
    assert_abs_diff_eq!(c.angle_between(&b).unwrap().to_degrees(), 90.0, epsilon = 1e-9);
    assert_abs_diff_eq!(c.angle_between(&a).unwrap().to_degrees(), 90.0, epsilon = 1e-9);
}

#[test]
fn angle_with_zero_vector_is_nan() {
    let a = v(&[1.0, 0.0]);
    let z = Vector::zeros(2).unwrap();
    assert!(a.angle_between(&z).unwrap().is_nan());
}

#[test]
fn angle_between_dimension_mismatch() {
    assert!(v(&[1.0, 0.0]).angle_between(&v(&[1.0, 0.0, 0.0])).is_err());
}

// ---------------------------------------------------------------------------
// Matrix bridge and display
// ---------------------------------------------------------------------------

#[test]
fn to_column_and_row_matrix() {
    let a = v(&[1.0, 2.0, 3.0]);
    let col = a.to_column_matrix();
    assert_eq!(col.shape(), (3, 1));
    assert_eq!(col.column(0).unwrap(), a);
    let row = a.to_row_matrix();
    assert_eq!(row.shape(), (1, 3));
    assert_eq!(row.row(0).unwrap(), a);
}

#[test]
fn display_is_space_separated() {
    assert_eq!(v(&[1.5, -2.0, 3.25]).to_string(), "[1.5 -2 3.25]");
    assert_eq!(v(&[7.0]).to_string(), "[7]");
}

#[test]
fn display_honors_precision() {
    assert_eq!(format!("{:.2}", v(&[1.0, 0.5])), "[1.00 0.50]");
}

#[test]
fn approx_eq_checks_dim_and_tolerance() {
    let a = v(&[1.0, 2.0]);
    assert!(a.approx_eq(&v(&[1.0 + 1e-12, 2.0]), 1e-9));
    assert!(!a.approx_eq(&v(&[1.1, 2.0]), 1e-9));
    assert!(!a.approx_eq(&v(&[1.0, 2.0, 0.0]), 1e-9));
}
