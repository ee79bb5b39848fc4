//! Text processing for category labels.
//!
//! This module turns free-text category labels into the numeric inputs of
//! the recommendation pipeline:
//! - Tokenization ([`tokenize`])
//! - Stop word removal ([`stopwords`])
//! - TF-IDF vectorization ([`vectorize`])
//! - Cosine similarity ([`similarity`])
//!
//! # Quick Start
//!
//! ```
//! use recomendar::text::{similarity_matrix, TfidfVectorizer};
//!
//! let labels = vec!["Action Crime", "Action Crime", "Comedy"];
//! let mut vectorizer = TfidfVectorizer::new().with_stop_words_english();
//!
//! let terms = vectorizer.fit_transform(&labels).expect("fit_transform should succeed");
//! let sim = similarity_matrix(&terms);
//!
//! assert!((sim.get(0, 1) - 1.0).abs() < 1e-10); // identical labels
//! assert!(sim.get(0, 2).abs() < 1e-10); // disjoint labels
//! ```

pub mod similarity;
pub mod stopwords;
pub mod tokenize;
pub mod vectorize;

pub use similarity::{cosine_similarity, similarity_matrix};
pub use stopwords::{StopWordsFilter, ENGLISH_STOP_WORDS};
pub use tokenize::{WhitespaceTokenizer, WordTokenizer};
pub use vectorize::TfidfVectorizer;

use crate::error::Result;

/// Trait for text tokenizers.
///
/// Implementations split raw label text into candidate terms; the
/// vectorizer handles lowercasing and stop word removal afterwards.
pub trait Tokenizer {
    /// Tokenize text into terms.
    ///
    /// # Errors
    ///
    /// Returns an error if tokenization fails.
    fn tokenize(&self, text: &str) -> Result<Vec<String>>;
}
