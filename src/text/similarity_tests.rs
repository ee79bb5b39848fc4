pub(crate) use super::*;
pub(crate) use crate::primitives::{Matrix, Vector};

#[test]
fn test_cosine_similarity_identical() {
    let v = Vector::from_slice(&[1.0, 2.0, 3.0]);
    let sim = cosine_similarity(&v, &v).expect("should succeed");
    assert!((sim - 1.0).abs() < 1e-10);
}

#[test]
fn test_cosine_similarity_orthogonal() {
    let v1 = Vector::from_slice(&[1.0, 0.0, 0.0]);
    let v2 = Vector::from_slice(&[0.0, 1.0, 0.0]);
    let sim = cosine_similarity(&v1, &v2).expect("should succeed");
    assert!(sim.abs() < 1e-10);
}

#[test]
fn test_cosine_similarity_zero_vector() {
    let v1 = Vector::from_slice(&[0.0, 0.0, 0.0]);
    let v2 = Vector::from_slice(&[1.0, 2.0, 3.0]);
    let sim = cosine_similarity(&v1, &v2).expect("should succeed");
    assert_eq!(sim, 0.0);
}

#[test]
fn test_cosine_similarity_scale_invariant() {
    let v1 = Vector::from_slice(&[1.0, 2.0]);
    let v2 = Vector::from_slice(&[10.0, 20.0]);
    let sim = cosine_similarity(&v1, &v2).expect("should succeed");
    assert!((sim - 1.0).abs() < 1e-10);
}

#[test]
fn test_cosine_similarity_different_lengths() {
    let v1 = Vector::from_slice(&[1.0, 2.0]);
    let v2 = Vector::from_slice(&[1.0, 2.0, 3.0]);
    assert!(cosine_similarity(&v1, &v2).is_err());
}

#[test]
fn test_cosine_similarity_empty() {
    let v1 = Vector::from_slice(&[]);
    let v2 = Vector::from_slice(&[]);
    assert!(cosine_similarity(&v1, &v2).is_err());
}

#[test]
fn test_similarity_matrix_symmetric_exactly() {
    let terms = Matrix::from_vec(
        3,
        3,
        vec![0.3, 0.7, 0.1, 0.9, 0.2, 0.4, 0.0, 0.5, 0.5],
    )
    .expect("should create");

    let sim = similarity_matrix(&terms);
    for i in 0..3 {
        for j in 0..3 {
            // bitwise equality, not tolerance: values are mirrored
            assert_eq!(sim.get(i, j), sim.get(j, i));
        }
    }
}

#[test]
fn test_similarity_matrix_diagonal_is_one() {
    let terms = Matrix::from_vec(2, 2, vec![1.0, 0.0, 0.0, 1.0]).expect("should create");
    let sim = similarity_matrix(&terms);
    assert_eq!(sim.get(0, 0), 1.0);
    assert_eq!(sim.get(1, 1), 1.0);
}

#[test]
fn test_similarity_matrix_zero_row_convention() {
    // Row 1 is all zeros: similar to itself (diagonal convention) and to
    // nothing else.
    let terms = Matrix::from_vec(2, 2, vec![1.0, 0.0, 0.0, 0.0]).expect("should create");
    let sim = similarity_matrix(&terms);
    assert_eq!(sim.get(1, 1), 1.0);
    assert_eq!(sim.get(0, 1), 0.0);
    assert_eq!(sim.get(1, 0), 0.0);
}

#[test]
fn test_similarity_matrix_values_in_unit_range() {
    let terms = Matrix::from_vec(
        3,
        2,
        vec![0.6, 0.8, 1.0, 0.0, 0.5, 0.5],
    )
    .expect("should create");

    let sim = similarity_matrix(&terms);
    for &value in sim.as_slice() {
        assert!((0.0..=1.0 + 1e-12).contains(&value));
    }
}

#[test]
fn test_similarity_matrix_single_row() {
    let terms = Matrix::from_vec(1, 2, vec![0.5, 0.5]).expect("should create");
    let sim = similarity_matrix(&terms);
    assert_eq!(sim.shape(), (1, 1));
    assert_eq!(sim.get(0, 0), 1.0);
}
