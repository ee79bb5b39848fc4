//! End-to-end pipeline tests: generate → save → load → dedup → recommend.

use recomendar::prelude::*;
use recomendar::synthetic::GENRES;

#[test]
fn test_csv_round_trip_preserves_recommendations() {
    let catalog = CatalogGenerator::new(100).with_random_state(42).generate();

    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("movies.csv");
    save_catalog(&path, &catalog).expect("should save");
    let loaded = load_catalog(&path).expect("should load");

    assert_eq!(loaded, catalog);
    assert_eq!(
        recommend(&loaded, "Movie 1", DEFAULT_COUNT).expect("title exists"),
        recommend(&catalog, "Movie 1", DEFAULT_COUNT).expect("title exists"),
    );
}

#[test]
fn test_full_pipeline_over_synthetic_catalog() {
    let mut catalog = CatalogGenerator::new(100).with_random_state(7).generate();
    catalog.dedup();

    let mut recommender = ContentRecommender::new();
    let query = "Movie 10";
    let similar = recommender
        .recommend(&catalog, query, DEFAULT_COUNT)
        .expect("title exists");

    assert_eq!(similar.len(), DEFAULT_COUNT);
    assert!(!similar.contains(&query.to_string()));

    // single-genre labels: same-genre matches (similarity 1.0) must all
    // rank ahead of cross-genre ones (similarity 0.0)
    let index = catalog.name_index();
    let query_genre = catalog.get(index[query]).expect("query row").categories.clone();
    let mut seen_other_genre = false;
    for name in &similar {
        let item = catalog.get(index[name.as_str()]).expect("result row");
        if item.categories == query_genre {
            assert!(
                !seen_other_genre,
                "same-genre item ranked below a cross-genre item"
            );
        } else {
            seen_other_genre = true;
        }
    }

    // identical repeat call, served from cache
    let again = recommender
        .recommend(&catalog, query, DEFAULT_COUNT)
        .expect("title exists");
    assert_eq!(again, similar);
}

#[test]
fn test_recommendations_stay_deterministic_across_recomputes() {
    let catalog = CatalogGenerator::new(60).with_random_state(3).generate();

    let direct = recommend(&catalog, "Movie 30", 10).expect("title exists");
    let mut recommender = ContentRecommender::new();
    let cached = recommender
        .recommend(&catalog, "Movie 30", 10)
        .expect("title exists");

    assert_eq!(direct, cached);
}

#[test]
fn test_unknown_title_surfaces_not_found() {
    let catalog = CatalogGenerator::new(10).with_random_state(1).generate();

    let err = recommend(&catalog, "Movie 999", 5).expect_err("should fail");
    assert!(matches!(err, RecomendarError::TitleNotFound { .. }));
}

#[test]
fn test_every_genre_yields_some_neighbor() {
    // 200 items over 7 genres: each genre appears several times, so any
    // query has at least one perfect-match neighbor ranked first.
    let catalog = CatalogGenerator::new(200).with_random_state(11).generate();
    let index = catalog.name_index();

    for genre in GENRES {
        let members: Vec<&Item> = catalog
            .items()
            .iter()
            .filter(|item| &item.categories == genre)
            .collect();
        if members.len() < 2 {
            continue; // no same-genre neighbor possible
        }

        let similar = recommend(&catalog, &members[0].name, 1).expect("title exists");
        assert_eq!(similar.len(), 1);
        let neighbor = catalog.get(index[similar[0].as_str()]).expect("row");
        assert_eq!(&neighbor.categories, genre);
    }
}
