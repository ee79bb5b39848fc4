pub(crate) use super::*;
pub(crate) use crate::catalog::{Catalog, Item};
use crate::text::{similarity_matrix, TfidfVectorizer};
use proptest::prelude::*;

const GENRE_POOL: &[&str] = &[
    "action",
    "comedy",
    "drama",
    "horror",
    "scifi",
    "romance",
    "documentary",
];

/// Build a catalog from per-item genre index lists; names are unique.
fn catalog_from_genres(genres: &[Vec<usize>]) -> Catalog {
    genres
        .iter()
        .enumerate()
        .map(|(i, picks)| {
            let labels: Vec<&str> = picks.iter().map(|&g| GENRE_POOL[g]).collect();
            Item::new(i as i64, format!("Movie {i}"), labels.join(" "), 3.0)
        })
        .collect()
}

fn arb_genres(min_items: usize) -> impl Strategy<Value = Vec<Vec<usize>>> {
    prop::collection::vec(
        prop::collection::vec(0..GENRE_POOL.len(), 1..=3),
        min_items..12,
    )
}

proptest! {
    /// The query item never appears in its own recommendations.
    #[test]
    fn prop_never_includes_query(
        genres in arb_genres(2),
        query in any::<prop::sample::Index>(),
        count in 0..10_usize
    ) {
        let catalog = catalog_from_genres(&genres);
        let q = query.index(catalog.len());
        let title = format!("Movie {q}");

        let result = recommend(&catalog, &title, count).expect("title resolves");
        prop_assert!(!result.contains(&title));
    }

    /// A resolving query returns exactly min(count, n - 1) names.
    #[test]
    fn prop_result_length(
        genres in arb_genres(1),
        query in any::<prop::sample::Index>(),
        count in 0..15_usize
    ) {
        let catalog = catalog_from_genres(&genres);
        let q = query.index(catalog.len());
        let title = format!("Movie {q}");

        let result = recommend(&catalog, &title, count).expect("title resolves");
        prop_assert_eq!(result.len(), count.min(catalog.len() - 1));
    }

    /// Identical arguments against an unchanged catalog give identical
    /// ordered output.
    #[test]
    fn prop_deterministic(
        genres in arb_genres(1),
        query in any::<prop::sample::Index>(),
        count in 0..10_usize
    ) {
        let catalog = catalog_from_genres(&genres);
        let q = query.index(catalog.len());
        let title = format!("Movie {q}");

        let first = recommend(&catalog, &title, count).expect("title resolves");
        let second = recommend(&catalog, &title, count).expect("title resolves");
        prop_assert_eq!(first, second);
    }

    /// The similarity matrix is exactly symmetric with a unit diagonal,
    /// and every entry lies in [0, 1].
    #[test]
    fn prop_similarity_matrix_invariants(genres in arb_genres(1)) {
        let catalog = catalog_from_genres(&genres);

        let mut vectorizer = TfidfVectorizer::new().with_stop_words_english();
        let terms = vectorizer
            .fit_transform(&catalog.category_texts())
            .expect("genre labels are never all stop words");
        let sim = similarity_matrix(&terms);

        let n = catalog.len();
        prop_assert_eq!(sim.shape(), (n, n));
        for i in 0..n {
            prop_assert!((sim.get(i, i) - 1.0).abs() < 1e-12);
            for j in 0..n {
                prop_assert_eq!(sim.get(i, j), sim.get(j, i));
                prop_assert!(sim.get(i, j) >= 0.0);
                prop_assert!(sim.get(i, j) <= 1.0 + 1e-12);
            }
        }
    }
}
