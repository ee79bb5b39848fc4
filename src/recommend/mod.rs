//! Content-based recommendation.
//!
//! Given a catalog of items with category label text, recommends the items
//! most similar to a queried title: labels are TF-IDF vectorized, pairwise
//! cosine similarity is computed over the whole catalog, and the query's
//! nearest neighbors are returned by name.
//!
//! # Quick Start
//!
//! ```
//! use recomendar::catalog::{Catalog, Item};
//! use recomendar::recommend::recommend;
//!
//! let catalog = Catalog::from_items(vec![
//!     Item::new(1, "Heat", "Action Crime", 4.7),
//!     Item::new(2, "Ronin", "Action Crime", 4.1),
//!     Item::new(3, "Airplane!", "Comedy", 4.4),
//! ]);
//!
//! let similar = recommend(&catalog, "Heat", 2).expect("title exists");
//! assert_eq!(similar, vec!["Ronin", "Airplane!"]);
//! ```
//!
//! For repeated queries against a slowly-changing catalog, use
//! [`ContentRecommender`], which caches the similarity matrix behind a
//! catalog content fingerprint.

mod content_based;

pub use content_based::{recommend, ContentRecommender, DEFAULT_COUNT};
