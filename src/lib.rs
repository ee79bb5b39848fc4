//! Recomendar: content-based recommendation engine in pure Rust.
//!
//! Recommends the items most similar to a queried title using nothing but
//! each item's category label text: labels are TF-IDF vectorized over the
//! whole catalog, pairwise cosine similarity is computed between all
//! items, and the query's nearest neighbors come back ranked best first.
//!
//! # Quick Start
//!
//! ```
//! use recomendar::prelude::*;
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
//! # Modules
//!
//! - [`catalog`]: Item and Catalog data model, name index, deduplication
//! - [`text`]: Tokenization, stop words, TF-IDF vectorization, cosine similarity
//! - [`recommend`]: Ranking and the cached [`ContentRecommender`](recommend::ContentRecommender)
//! - [`loading`]: CSV catalog loading and saving
//! - [`synthetic`]: Seeded synthetic catalog generation
//! - [`primitives`]: Core Vector and Matrix types
//! - [`error`]: Error types
//!
//! # Determinism
//!
//! For a fixed catalog and query, every stage is deterministic: the
//! vocabulary has a fixed column order, the similarity matrix is symmetric
//! by construction, and ranking ties resolve to catalog row order. Two
//! identical calls always return identical ordered output.

pub mod catalog;
pub mod error;
pub mod loading;
pub mod prelude;
pub mod primitives;
pub mod recommend;
pub mod synthetic;
pub mod text;

pub use error::{RecomendarError, Result};
