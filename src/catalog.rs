//! Catalog data model: items with free-text category labels.
//!
//! A [`Catalog`] is an ordered sequence of [`Item`]s. Row order matters:
//! it is the alignment key between the term matrix, the similarity matrix
//! and the name index, so every structure derived from a catalog refers to
//! items by row index.

use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::collections::{HashMap, HashSet};
use std::hash::{Hash, Hasher};

/// One catalog row: an item with its category label text.
///
/// # Examples
///
/// ```
/// use recomendar::catalog::Item;
///
/// let item = Item::new(1, "Heat", "Action Crime", 4.7);
/// assert_eq!(item.name, "Heat");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Item identifier, expected (not required) to be unique
    pub id: i64,
    /// Public lookup key for recommendations
    pub name: String,
    /// Free text, one or more whitespace/comma-separated category labels
    pub categories: String,
    /// Carried through from the source table, unused by the similarity
    /// pipeline
    pub rating: f32,
}

impl Item {
    /// Create a new item.
    pub fn new(id: i64, name: impl Into<String>, categories: impl Into<String>, rating: f32) -> Self {
        Self {
            id,
            name: name.into(),
            categories: categories.into(),
            rating,
        }
    }
}

/// An ordered sequence of items, indexed 0..n-1.
///
/// # Examples
///
/// ```
/// use recomendar::catalog::{Catalog, Item};
///
/// let catalog = Catalog::from_items(vec![
///     Item::new(1, "Heat", "Action Crime", 4.7),
///     Item::new(2, "Airplane!", "Comedy", 4.4),
/// ]);
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog.names(), vec!["Heat", "Airplane!"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Create a catalog from a vector of items, preserving order.
    #[must_use]
    pub fn from_items(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Append an item.
    pub fn push(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if the catalog has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The item at a row index, if any.
    #[must_use]
    pub fn get(&self, row: usize) -> Option<&Item> {
        self.items.get(row)
    }

    /// All items in row order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Item names in row order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.name.as_str()).collect()
    }

    /// Category label text in row order; the vectorizer's input.
    #[must_use]
    pub fn category_texts(&self) -> Vec<&str> {
        self.items
            .iter()
            .map(|item| item.categories.as_str())
            .collect()
    }

    /// Build the name → row index lookup by one forward scan.
    ///
    /// On duplicate names the **first** occurrence's index wins; later
    /// rows with the same name are silently shadowed, matching
    /// drop-duplicates-keep-first upstream semantics. This is documented
    /// behavior, not an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use recomendar::catalog::{Catalog, Item};
    ///
    /// let catalog = Catalog::from_items(vec![
    ///     Item::new(1, "Twin", "Action", 3.0),
    ///     Item::new(2, "Twin", "Comedy", 4.0),
    /// ]);
    /// assert_eq!(catalog.name_index()["Twin"], 0);
    /// ```
    #[must_use]
    pub fn name_index(&self) -> HashMap<String, usize> {
        let mut index = HashMap::with_capacity(self.items.len());
        for (row, item) in self.items.iter().enumerate() {
            index.entry(item.name.clone()).or_insert(row);
        }
        index
    }

    /// Remove rows duplicated on `(name, categories)`, keeping the first
    /// occurrence of each pair. Returns the number of rows removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use recomendar::catalog::{Catalog, Item};
    ///
    /// let mut catalog = Catalog::from_items(vec![
    ///     Item::new(1, "Heat", "Action Crime", 4.7),
    ///     Item::new(2, "Heat", "Action Crime", 4.5),
    ///     Item::new(3, "Heat", "Documentary", 3.0),
    /// ]);
    /// assert_eq!(catalog.dedup(), 1);
    /// assert_eq!(catalog.len(), 2);
    /// ```
    pub fn dedup(&mut self) -> usize {
        let before = self.items.len();
        let mut seen: HashSet<(String, String)> = HashSet::with_capacity(before);
        self.items
            .retain(|item| seen.insert((item.name.clone(), item.categories.clone())));
        before - self.items.len()
    }

    /// Content fingerprint over row count and every `(name, categories)`
    /// pair, in row order.
    ///
    /// `id` and `rating` are excluded: neither the similarity signal nor
    /// the name index can observe them, so two catalogs differing only
    /// there produce identical recommendations. Used to guard the
    /// recommender's cache.
    #[must_use]
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.items.len().hash(&mut hasher);
        for item in &self.items {
            item.name.hash(&mut hasher);
            item.categories.hash(&mut hasher);
        }
        hasher.finish()
    }
}

impl FromIterator<Item> for Catalog {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
