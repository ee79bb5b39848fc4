//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use recomendar::prelude::*;
//! ```

pub use crate::catalog::{Catalog, Item};
pub use crate::error::{RecomendarError, Result};
pub use crate::loading::{load_catalog, save_catalog};
pub use crate::primitives::{Matrix, Vector};
pub use crate::recommend::{recommend, ContentRecommender, DEFAULT_COUNT};
pub use crate::synthetic::CatalogGenerator;
pub use crate::text::{cosine_similarity, similarity_matrix, TfidfVectorizer};
