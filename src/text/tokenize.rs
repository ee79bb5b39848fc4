//! Tokenization for category label text.
//!
//! Two strategies are provided:
//! - [`WordTokenizer`]: alphanumeric runs of at least two characters,
//!   punctuation and single-letter fragments dropped. The default for
//!   category labels, where "Sci-Fi, Drama" should yield
//!   `["Sci", "Fi", "Drama"]`.
//! - [`WhitespaceTokenizer`]: splits on Unicode whitespace only, keeping
//!   punctuation attached. Useful when labels are already clean tokens.

use super::Tokenizer;
use crate::error::Result;

/// Minimum character length for a [`WordTokenizer`] term.
const MIN_TOKEN_CHARS: usize = 2;

/// Word tokenizer that extracts alphanumeric runs.
///
/// Splits on every non-alphanumeric character and discards fragments
/// shorter than two characters, so hyphenated and comma-separated labels
/// come apart into bare words.
///
/// # Examples
///
/// ```
/// use recomendar::text::{Tokenizer, WordTokenizer};
///
/// let tokenizer = WordTokenizer::new();
///
/// let tokens = tokenizer.tokenize("Sci-Fi, Drama").expect("tokenize should succeed");
/// assert_eq!(tokens, vec!["Sci", "Fi", "Drama"]);
///
/// // Single-letter fragments are dropped
/// let tokens = tokenizer.tokenize("a Action").expect("tokenize should succeed");
/// assert_eq!(tokens, vec!["Action"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct WordTokenizer;

impl WordTokenizer {
    /// Create a new word tokenizer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        let tokens = text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|run| run.chars().count() >= MIN_TOKEN_CHARS)
            .map(ToString::to_string)
            .collect();

        Ok(tokens)
    }
}

/// Whitespace tokenizer that splits text on Unicode whitespace characters.
///
/// Preserves punctuation attached to words.
///
/// # Examples
///
/// ```
/// use recomendar::text::{Tokenizer, WhitespaceTokenizer};
///
/// let tokenizer = WhitespaceTokenizer::new();
///
/// let tokens = tokenizer.tokenize("Action  Crime\tThriller").expect("tokenize should succeed");
/// assert_eq!(tokens, vec!["Action", "Crime", "Thriller"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        let tokens = text.split_whitespace().map(ToString::to_string).collect();

        Ok(tokens)
    }
}

#[cfg(test)]
#[path = "tokenize_tests.rs"]
mod tests;
