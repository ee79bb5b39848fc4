pub(crate) use super::*;

#[test]
fn test_from_slice() {
    let v = Vector::from_slice(&[1.0, 2.0, 3.0]);
    assert_eq!(v.len(), 3);
    assert_eq!(v.as_slice(), &[1.0, 2.0, 3.0]);
}

#[test]
fn test_from_vec() {
    let v = Vector::from_vec(vec![1.0, 2.0]);
    assert_eq!(v.len(), 2);
    assert!(!v.is_empty());
}

#[test]
fn test_empty() {
    let v = Vector::from_slice(&[]);
    assert!(v.is_empty());
    assert_eq!(v.len(), 0);
}

#[test]
fn test_dot() {
    let a = Vector::from_slice(&[1.0, 2.0, 3.0]);
    let b = Vector::from_slice(&[4.0, 5.0, 6.0]);
    assert!((a.dot(&b) - 32.0).abs() < 1e-12);
}

#[test]
#[should_panic(expected = "equal lengths")]
fn test_dot_length_mismatch_panics() {
    let a = Vector::from_slice(&[1.0, 2.0]);
    let b = Vector::from_slice(&[1.0]);
    let _ = a.dot(&b);
}

#[test]
fn test_norm() {
    let v = Vector::from_slice(&[3.0, 4.0]);
    assert!((v.norm() - 5.0).abs() < 1e-12);
}

#[test]
fn test_norm_zero_vector() {
    let v = Vector::from_slice(&[0.0, 0.0, 0.0]);
    assert_eq!(v.norm(), 0.0);
}

#[test]
fn test_index() {
    let v = Vector::from_slice(&[1.5, 2.5]);
    assert_eq!(v[0], 1.5);
    assert_eq!(v[1], 2.5);
}
