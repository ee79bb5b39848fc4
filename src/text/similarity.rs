//! Cosine similarity between term-weight vectors.
//!
//! # Quick Start
//!
//! ```
//! use recomendar::text::cosine_similarity;
//! use recomendar::primitives::Vector;
//!
//! let v1 = Vector::from_slice(&[1.0, 2.0, 3.0]);
//! let v2 = Vector::from_slice(&[2.0, 3.0, 4.0]);
//!
//! let sim = cosine_similarity(&v1, &v2).expect("cosine similarity should succeed");
//! assert!(sim > 0.9);
//! ```

use crate::error::{RecomendarError, Result};
use crate::primitives::{Matrix, Vector};

/// Compute cosine similarity between two vectors.
///
/// Measures the angle between two vectors in n-dimensional space:
/// 1.0 for identical direction, 0.0 for orthogonal. For the non-negative
/// TF-IDF vectors produced by this crate the result lies in [0, 1].
///
/// # Formula
/// ```text
/// cosine_sim(A, B) = (A · B) / (||A|| * ||B||)
/// ```
///
/// If either vector has zero norm the similarity is 0.0.
///
/// # Errors
///
/// Returns `InvalidInput` if the vectors are empty or of different lengths.
pub fn cosine_similarity(a: &Vector, b: &Vector) -> Result<f64> {
    if a.len() != b.len() {
        return Err(RecomendarError::invalid_input(
            "vectors must have the same length",
        ));
    }
    if a.is_empty() {
        return Err(RecomendarError::invalid_input("vectors cannot be empty"));
    }

    Ok(cosine_from_slices(a.as_slice(), b.as_slice()))
}

/// Build the full pairwise similarity matrix for a term matrix, one row
/// per item.
///
/// The result is computed as a Gram matrix: the upper triangle is computed
/// once and mirrored, so `sim(i, j) == sim(j, i)` holds exactly, not just
/// within floating-point tolerance.
///
/// The diagonal is fixed at 1.0. This includes rows with zero norm (items
/// whose labels vanished during stop word removal): such an item is still
/// maximally similar to itself by convention, while its similarity to every
/// other item is 0.0.
///
/// # Examples
///
/// ```
/// use recomendar::primitives::Matrix;
/// use recomendar::text::similarity_matrix;
///
/// // Two identical rows and one orthogonal row
/// let terms = Matrix::from_vec(3, 2, vec![
///     1.0, 0.0,
///     1.0, 0.0,
///     0.0, 1.0,
/// ]).unwrap();
///
/// let sim = similarity_matrix(&terms);
/// assert_eq!(sim.shape(), (3, 3));
/// assert!((sim.get(0, 1) - 1.0).abs() < 1e-12);
/// assert_eq!(sim.get(0, 2), 0.0);
/// assert_eq!(sim.get(2, 2), 1.0);
/// ```
#[must_use]
pub fn similarity_matrix(term_matrix: &Matrix) -> Matrix {
    let n = term_matrix.n_rows();
    let mut result = Matrix::zeros(n, n);

    let norms: Vec<f64> = (0..n)
        .map(|i| {
            term_matrix
                .row_slice(i)
                .iter()
                .map(|w| w * w)
                .sum::<f64>()
                .sqrt()
        })
        .collect();

    for i in 0..n {
        result.set(i, i, 1.0);
        for j in (i + 1)..n {
            let sim = if norms[i] > 0.0 && norms[j] > 0.0 {
                dot(term_matrix.row_slice(i), term_matrix.row_slice(j)) / (norms[i] * norms[j])
            } else {
                0.0
            };
            result.set(i, j, sim);
            result.set(j, i, sim);
        }
    }

    result
}

fn cosine_from_slices(a: &[f64], b: &[f64]) -> f64 {
    let norm_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0; // zero vector is orthogonal to everything
    }

    dot(a, b) / (norm_a * norm_b)
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

#[cfg(test)]
#[path = "similarity_tests.rs"]
mod tests;
