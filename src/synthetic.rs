//! Synthetic catalog generation for tests, demos and benchmarks.
//!
//! # Quick Start
//!
//! ```
//! use recomendar::synthetic::CatalogGenerator;
//!
//! let catalog = CatalogGenerator::new(100).with_random_state(42).generate();
//! assert_eq!(catalog.len(), 100);
//!
//! // Same seed, same catalog
//! let again = CatalogGenerator::new(100).with_random_state(42).generate();
//! assert_eq!(catalog, again);
//! ```

use crate::catalog::{Catalog, Item};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Genre pool sampled by the generator.
pub const GENRES: &[&str] = &[
    "Action",
    "Comedy",
    "Drama",
    "Horror",
    "Sci-Fi",
    "Romance",
    "Documentary",
];

/// Generator for synthetic movie catalogs.
///
/// Each generated item is named `"Movie {i}"` (1-based), carries one genre
/// drawn uniformly from [`GENRES`], and a rating uniform in [1.0, 5.0]
/// rounded to one decimal.
#[derive(Debug, Clone)]
pub struct CatalogGenerator {
    n_items: usize,
    random_state: Option<u64>,
}

impl CatalogGenerator {
    /// Create a generator for `n_items` items.
    #[must_use]
    pub fn new(n_items: usize) -> Self {
        Self {
            n_items,
            random_state: None,
        }
    }

    /// Set the random seed for reproducibility.
    #[must_use]
    pub fn with_random_state(mut self, seed: u64) -> Self {
        self.random_state = Some(seed);
        self
    }

    /// Generate the catalog. Deterministic for a fixed seed.
    #[must_use]
    pub fn generate(&self) -> Catalog {
        let mut rng = match self.random_state {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        (1..=self.n_items)
            .map(|i| {
                let genre = GENRES[rng.gen_range(0..GENRES.len())];
                let rating = (rng.gen_range(1.0_f32..=5.0) * 10.0).round() / 10.0;
                Item::new(i as i64, format!("Movie {i}"), genre, rating)
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "synthetic_tests.rs"]
mod tests;
