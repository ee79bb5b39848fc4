//! TF-IDF vectorization of category label text.
//!
//! Transforms a catalog's label strings into a matrix of TF-IDF weighted
//! features: terms frequent in one item's labels but rare across the
//! catalog get the highest weight.
//!
//! **Formula** (smoothed, with document count `n`):
//! ```text
//! tfidf(t, d) = tf(t, d) × idf(t)
//! idf(t) = ln((1 + n) / (1 + df(t))) + 1
//! ```
//! where `tf(t, d)` is the count of term `t` in document `d` and `df(t)` the
//! number of documents containing `t`. Every row is then L2-normalized, so
//! cosine similarity between documents reduces to a dot product.

use super::stopwords::StopWordsFilter;
use super::tokenize::WordTokenizer;
use super::Tokenizer;
use crate::error::{RecomendarError, Result};
use crate::primitives::Matrix;
use std::collections::{HashMap, HashSet};

/// TF-IDF vectorizer that converts text to a TF-IDF weighted matrix.
///
/// The vocabulary is every distinct term surviving tokenization,
/// lowercasing and stop word removal, ordered alphabetically so the column
/// layout is deterministic across runs.
///
/// # Examples
///
/// ```
/// use recomendar::text::TfidfVectorizer;
///
/// let labels = vec!["Action Crime", "Action Thriller", "Comedy"];
///
/// let mut vectorizer = TfidfVectorizer::new().with_stop_words_english();
/// let matrix = vectorizer.fit_transform(&labels).expect("fit_transform should succeed");
///
/// assert_eq!(matrix.n_rows(), 3);
/// assert_eq!(matrix.n_cols(), vectorizer.vocabulary_size());
/// ```
#[allow(missing_debug_implementations)]
pub struct TfidfVectorizer {
    tokenizer: Box<dyn Tokenizer>,
    stop_words: Option<StopWordsFilter>,
    lowercase: bool,
    /// Term → column index, learned by `fit`
    vocabulary: HashMap<String, usize>,
    /// Inverse document frequency per column, learned by `fit`
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    /// Create a new vectorizer with a [`WordTokenizer`], lowercasing on and
    /// no stop word removal.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tokenizer: Box::new(WordTokenizer::new()),
            stop_words: None,
            lowercase: true,
            vocabulary: HashMap::new(),
            idf: Vec::new(),
        }
    }

    /// Remove English stop words before building the vocabulary.
    #[must_use]
    pub fn with_stop_words_english(mut self) -> Self {
        self.stop_words = Some(StopWordsFilter::english());
        self
    }

    /// Remove a custom stop word set.
    #[must_use]
    pub fn with_stop_words(mut self, words: &[&str]) -> Self {
        self.stop_words = Some(StopWordsFilter::new(words));
        self
    }

    /// Set the tokenizer to use.
    ///
    /// # Examples
    ///
    /// ```
    /// use recomendar::text::{TfidfVectorizer, WhitespaceTokenizer};
    ///
    /// let vectorizer = TfidfVectorizer::new()
    ///     .with_tokenizer(Box::new(WhitespaceTokenizer::new()));
    /// ```
    #[must_use]
    pub fn with_tokenizer(mut self, tokenizer: Box<dyn Tokenizer>) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Set whether to convert terms to lowercase.
    #[must_use]
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    /// Tokenize one document and apply lowercasing and stop word removal.
    fn process(&self, text: &str) -> Result<Vec<String>> {
        let tokens = self.tokenizer.tokenize(text)?;

        Ok(tokens
            .into_iter()
            .map(|t| if self.lowercase { t.to_lowercase() } else { t })
            .filter(|t| {
                self.stop_words
                    .as_ref()
                    .map_or(true, |sw| !sw.is_stop_word(t))
            })
            .collect())
    }

    /// Learn vocabulary and IDF weights from documents.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `documents` is empty, or if no usable term
    /// survives stop word removal across the whole collection.
    pub fn fit<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<()> {
        if documents.is_empty() {
            return Err(RecomendarError::invalid_input(
                "cannot fit on an empty document collection",
            ));
        }

        let n_docs = documents.len();
        let mut doc_freq: HashMap<String, usize> = HashMap::new();

        for doc in documents {
            let terms = self.process(doc.as_ref())?;
            let unique: HashSet<String> = terms.into_iter().collect();
            for term in unique {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        if doc_freq.is_empty() {
            return Err(RecomendarError::invalid_input(
                "no usable vocabulary: all documents empty after stop word removal",
            ));
        }

        // Alphabetical column order keeps the matrix layout deterministic.
        let mut terms: Vec<(String, usize)> = doc_freq.into_iter().collect();
        terms.sort_by(|a, b| a.0.cmp(&b.0));

        self.idf = terms
            .iter()
            .map(|(_, df)| ((1.0 + n_docs as f64) / (1.0 + *df as f64)).ln() + 1.0)
            .collect();
        self.vocabulary = terms
            .into_iter()
            .enumerate()
            .map(|(idx, (term, _))| (term, idx))
            .collect();

        Ok(())
    }

    /// Transform documents to an L2-normalized TF-IDF matrix using the
    /// learned vocabulary.
    ///
    /// A document with no in-vocabulary terms (empty, or all stop words)
    /// yields an all-zero row; this is not an error.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `documents` is empty or `fit` has not been
    /// called.
    pub fn transform<S: AsRef<str>>(&self, documents: &[S]) -> Result<Matrix> {
        if documents.is_empty() {
            return Err(RecomendarError::invalid_input(
                "cannot transform an empty document collection",
            ));
        }
        if self.vocabulary.is_empty() {
            return Err(RecomendarError::invalid_input(
                "vocabulary is empty: call fit() first",
            ));
        }

        let n_docs = documents.len();
        let vocab_size = self.vocabulary.len();
        let mut data = vec![0.0; n_docs * vocab_size];

        for (doc_idx, doc) in documents.iter().enumerate() {
            let row = &mut data[doc_idx * vocab_size..(doc_idx + 1) * vocab_size];

            for term in self.process(doc.as_ref())? {
                if let Some(&col) = self.vocabulary.get(&term) {
                    row[col] += 1.0;
                }
            }

            for (col, weight) in row.iter_mut().enumerate() {
                *weight *= self.idf[col];
            }

            let norm = row.iter().map(|w| w * w).sum::<f64>().sqrt();
            if norm > 0.0 {
                for weight in row.iter_mut() {
                    *weight /= norm;
                }
            }
        }

        Matrix::from_vec(n_docs, vocab_size, data)
    }

    /// Learn vocabulary from documents and transform them in one step.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` under the same conditions as [`fit`] and
    /// [`transform`].
    ///
    /// [`fit`]: TfidfVectorizer::fit
    /// [`transform`]: TfidfVectorizer::transform
    pub fn fit_transform<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<Matrix> {
        self.fit(documents)?;
        self.transform(documents)
    }

    /// The learned vocabulary (term → column index).
    #[must_use]
    pub fn vocabulary(&self) -> &HashMap<String, usize> {
        &self.vocabulary
    }

    /// The learned vocabulary size.
    #[must_use]
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// The learned inverse document frequencies, one per column.
    #[must_use]
    pub fn idf(&self) -> &[f64] {
        &self.idf
    }
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "vectorize_tests.rs"]
mod tests;
