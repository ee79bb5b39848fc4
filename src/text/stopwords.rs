//! Stop words filtering for text preprocessing.
//!
//! Stop words are common words (like "the", "and", "of") that carry no
//! discriminative signal for similarity and are removed before vocabulary
//! construction.
//!
//! # Examples
//!
//! ```
//! use recomendar::text::StopWordsFilter;
//!
//! let filter = StopWordsFilter::english();
//!
//! let tokens = vec!["the", "great", "escape"];
//! let filtered = filter.filter(&tokens);
//! assert_eq!(filtered, vec!["great", "escape"]);
//! ```

use std::collections::HashSet;

/// Stop words filter that removes common words from token lists.
///
/// Matching is case-insensitive; stop words are stored lowercase and
/// checked through a `HashSet` for O(1) lookup.
///
/// # Examples
///
/// ```
/// use recomendar::text::StopWordsFilter;
///
/// // Default English stop words
/// let filter = StopWordsFilter::english();
/// assert!(filter.is_stop_word("The"));
/// assert!(!filter.is_stop_word("action"));
///
/// // Custom stop words
/// let custom = StopWordsFilter::new(vec!["foo", "bar"]);
/// assert!(custom.is_stop_word("FOO"));
/// ```
#[derive(Debug, Clone)]
pub struct StopWordsFilter {
    /// Stored in lowercase for case-insensitive matching
    stop_words: HashSet<String>,
}

impl StopWordsFilter {
    /// Create a filter with custom stop words (converted to lowercase).
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let stop_words = words
            .into_iter()
            .map(|s| s.as_ref().to_lowercase())
            .collect();

        Self { stop_words }
    }

    /// Create a filter with the fixed English stop word list.
    #[must_use]
    pub fn english() -> Self {
        Self::new(ENGLISH_STOP_WORDS)
    }

    /// Filter stop words from a list of tokens, preserving original case
    /// and order of the survivors.
    ///
    /// # Examples
    ///
    /// ```
    /// use recomendar::text::StopWordsFilter;
    ///
    /// let filter = StopWordsFilter::english();
    /// let filtered = filter.filter(&["The", "Good", "THE", "Bad"]);
    /// assert_eq!(filtered, vec!["Good", "Bad"]);
    /// ```
    pub fn filter<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<String> {
        tokens
            .iter()
            .map(|t| t.as_ref().to_string())
            .filter(|t| !self.is_stop_word(t))
            .collect()
    }

    /// Check if a word is a stop word (case-insensitive).
    #[must_use]
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(&word.to_lowercase())
    }

    /// Number of stop words in the filter.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the filter is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

/// Fixed English stop word list (171 common words).
///
/// Covers articles, pronouns, question words, prepositions, conjunctions,
/// auxiliary verbs and high-frequency fillers, in line with the lists
/// shipped by common NLP toolkits.
///
/// # Examples
///
/// ```
/// use recomendar::text::ENGLISH_STOP_WORDS;
///
/// assert!(ENGLISH_STOP_WORDS.contains(&"the"));
/// assert!(!ENGLISH_STOP_WORDS.contains(&"thriller"));
/// ```
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "again", "against", "all", "along", "also", "am",
    "among", "an", "and", "another", "any", "are", "around", "as", "at", "back", "be", "because",
    "been", "before", "behind", "being", "below", "beneath", "beside", "between", "beyond",
    "both", "but", "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each",
    "even", "ever", "every", "few", "for", "from", "get", "give", "go", "got", "had", "has",
    "have", "having", "he", "her", "here", "hers", "herself", "him", "himself", "his", "how",
    "i", "if", "in", "inside", "into", "is", "it", "its", "itself", "just", "made", "make",
    "may", "me", "might", "more", "most", "much", "must", "my", "myself", "near", "neither",
    "no", "none", "not", "now", "of", "off", "on", "one", "only", "onto", "or", "other",
    "ought", "our", "ours", "ourselves", "out", "outside", "over", "own", "same", "say", "see",
    "several", "shall", "she", "should", "since", "so", "some", "such", "take", "than", "that",
    "the", "their", "theirs", "them", "themselves", "then", "there", "these", "they", "this",
    "those", "though", "through", "throughout", "to", "too", "toward", "under", "underneath",
    "unless", "until", "up", "upon", "very", "was", "way", "we", "were", "what", "when",
    "where", "which", "while", "who", "whom", "whose", "why", "will", "with", "within",
    "without", "would", "you", "your", "yours", "yourself", "yourselves",
];

#[cfg(test)]
#[path = "stopwords_tests.rs"]
mod tests;
