//! Item-to-item recommendation from TF-IDF cosine similarity.

use crate::catalog::Catalog;
use crate::error::{RecomendarError, Result};
use crate::primitives::Matrix;
use crate::text::{similarity_matrix, TfidfVectorizer};
use std::collections::HashMap;

/// Default number of recommendations returned for a query.
pub const DEFAULT_COUNT: usize = 5;

/// Recommend the `count` items most similar to `title`, best first.
///
/// The full pipeline runs on every call: category labels are TF-IDF
/// vectorized over the current catalog, the pairwise similarity matrix is
/// built, and the query's similarity row is ranked. Ranking is
/// deterministic: scores sort descending and exact ties keep catalog row
/// order. The query item itself is excluded by row index, so a
/// duplicate-named item elsewhere in the catalog can still be returned.
///
/// Fewer than `count` names are returned when the catalog minus the query
/// has fewer than `count` items; this is not an error.
///
/// # Errors
///
/// - `InvalidInput` if the catalog is empty, or no usable vocabulary
///   survives stop word removal across the whole catalog.
/// - `TitleNotFound` if `title` has no matching item name.
///
/// # Examples
///
/// ```
/// use recomendar::catalog::{Catalog, Item};
/// use recomendar::recommend::{recommend, DEFAULT_COUNT};
///
/// let catalog = Catalog::from_items(vec![
///     Item::new(1, "Alien", "Horror Sci-Fi", 4.6),
///     Item::new(2, "The Thing", "Horror Sci-Fi", 4.5),
///     Item::new(3, "Notting Hill", "Romance Comedy", 3.9),
/// ]);
///
/// let similar = recommend(&catalog, "Alien", DEFAULT_COUNT).expect("title exists");
/// assert_eq!(similar[0], "The Thing");
/// ```
pub fn recommend(catalog: &Catalog, title: &str, count: usize) -> Result<Vec<String>> {
    CatalogIndex::build(catalog)?.recommend(title, count)
}

/// Everything derived from one catalog snapshot, aligned by row index.
#[derive(Debug, Clone)]
struct CatalogIndex {
    fingerprint: u64,
    names: Vec<String>,
    name_index: HashMap<String, usize>,
    similarity: Matrix,
}

impl CatalogIndex {
    fn build(catalog: &Catalog) -> Result<Self> {
        if catalog.is_empty() {
            return Err(RecomendarError::invalid_input("catalog is empty"));
        }

        let mut vectorizer = TfidfVectorizer::new().with_stop_words_english();
        let term_matrix = vectorizer.fit_transform(&catalog.category_texts())?;

        Ok(Self {
            fingerprint: catalog.fingerprint(),
            names: catalog.names().into_iter().map(String::from).collect(),
            name_index: catalog.name_index(),
            similarity: similarity_matrix(&term_matrix),
        })
    }

    fn recommend(&self, title: &str, count: usize) -> Result<Vec<String>> {
        let &query = self
            .name_index
            .get(title)
            .ok_or_else(|| RecomendarError::title_not_found(title))?;

        let mut scored: Vec<(usize, f64)> = self
            .similarity
            .row_slice(query)
            .iter()
            .copied()
            .enumerate()
            .collect();

        // Stable sort: equal scores keep catalog row order.
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        // Drop the query itself by row index, not by position: among
        // tied-top entries it need not be first.
        scored.retain(|&(row, _)| row != query);
        scored.truncate(count);

        Ok(scored
            .into_iter()
            .map(|(row, _)| self.names[row].clone())
            .collect())
    }
}

/// Recommender with a content-hash-guarded cache.
///
/// [`recommend`](ContentRecommender::recommend) gives results identical to
/// the free [`recommend`](crate::recommend::recommend) function, but the
/// name index and similarity matrix are only recomputed when the catalog's
/// [fingerprint](Catalog::fingerprint) changes, so repeated queries against
/// an unchanged catalog skip the vectorization entirely.
///
/// # Examples
///
/// ```
/// use recomendar::catalog::{Catalog, Item};
/// use recomendar::recommend::ContentRecommender;
///
/// let mut catalog = Catalog::from_items(vec![
///     Item::new(1, "Heat", "Action Crime", 4.7),
///     Item::new(2, "Ronin", "Action Crime", 4.1),
/// ]);
///
/// let mut recommender = ContentRecommender::new();
/// assert_eq!(
///     recommender.recommend(&catalog, "Heat", 1).expect("title exists"),
///     vec!["Ronin"]
/// );
///
/// // A catalog change invalidates the cache on the next call
/// catalog.push(Item::new(3, "Le Samouraï", "Action Crime", 4.5));
/// let similar = recommender.recommend(&catalog, "Heat", 5).expect("title exists");
/// assert_eq!(similar.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ContentRecommender {
    cache: Option<CatalogIndex>,
}

impl ContentRecommender {
    /// Create a recommender with an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self { cache: None }
    }

    /// Recommend the `count` items most similar to `title`, best first.
    ///
    /// # Errors
    ///
    /// Same failure modes as the free [`recommend`](crate::recommend::recommend)
    /// function.
    pub fn recommend(&mut self, catalog: &Catalog, title: &str, count: usize) -> Result<Vec<String>> {
        let fingerprint = catalog.fingerprint();
        let fresh = matches!(&self.cache, Some(index) if index.fingerprint == fingerprint);
        if !fresh {
            self.cache = Some(CatalogIndex::build(catalog)?);
        }

        match &self.cache {
            Some(index) => index.recommend(title, count),
            // unreachable: the branch above either populated the cache or
            // returned the build error
            None => Err(RecomendarError::invalid_input("catalog is empty")),
        }
    }
}

#[cfg(test)]
#[path = "content_based_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "proptests.rs"]
mod proptests;
