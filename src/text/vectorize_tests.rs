pub(crate) use super::*;
pub(crate) use crate::error::RecomendarError;
pub(crate) use crate::text::tokenize::WhitespaceTokenizer;

#[test]
fn test_fit_transform_shape() {
    let docs = vec!["Action Crime", "Action Thriller", "Comedy"];

    let mut vectorizer = TfidfVectorizer::new();
    let matrix = vectorizer
        .fit_transform(&docs)
        .expect("fit_transform should succeed");

    assert_eq!(matrix.n_rows(), 3);
    assert_eq!(matrix.n_cols(), 4); // action, comedy, crime, thriller
    assert_eq!(matrix.n_cols(), vectorizer.vocabulary_size());
}

#[test]
fn test_vocabulary_is_lowercased_and_alphabetical() {
    let docs = vec!["Drama Action", "Comedy"];

    let mut vectorizer = TfidfVectorizer::new();
    vectorizer.fit(&docs).expect("fit should succeed");

    let vocab = vectorizer.vocabulary();
    assert_eq!(vocab.get("action"), Some(&0));
    assert_eq!(vocab.get("comedy"), Some(&1));
    assert_eq!(vocab.get("drama"), Some(&2));
    assert!(!vocab.contains_key("Action"));
}

#[test]
fn test_stop_words_removed_from_vocabulary() {
    let docs = vec!["the action", "the comedy"];

    let mut vectorizer = TfidfVectorizer::new().with_stop_words_english();
    vectorizer.fit(&docs).expect("fit should succeed");

    assert_eq!(vectorizer.vocabulary_size(), 2);
    assert!(!vectorizer.vocabulary().contains_key("the"));
}

#[test]
fn test_idf_upweights_rare_terms() {
    // "action" appears in 2 of 3 docs, "comedy" in 1 of 3
    let docs = vec!["action", "action", "comedy"];

    let mut vectorizer = TfidfVectorizer::new();
    vectorizer.fit(&docs).expect("fit should succeed");

    let vocab = vectorizer.vocabulary();
    let idf = vectorizer.idf();
    let action_idf = idf[vocab["action"]];
    let comedy_idf = idf[vocab["comedy"]];
    assert!(comedy_idf > action_idf);
}

#[test]
fn test_idf_smoothed_formula() {
    let docs = vec!["action", "comedy"];

    let mut vectorizer = TfidfVectorizer::new();
    vectorizer.fit(&docs).expect("fit should succeed");

    // df = 1, n = 2: idf = ln(3 / 2) + 1
    let expected = (3.0_f64 / 2.0).ln() + 1.0;
    for &idf in vectorizer.idf() {
        assert!((idf - expected).abs() < 1e-12);
    }
}

#[test]
fn test_rows_are_l2_normalized() {
    let docs = vec!["Action Crime Crime", "Thriller"];

    let mut vectorizer = TfidfVectorizer::new();
    let matrix = vectorizer
        .fit_transform(&docs)
        .expect("fit_transform should succeed");

    for i in 0..matrix.n_rows() {
        let norm = matrix
            .row_slice(i)
            .iter()
            .map(|w| w * w)
            .sum::<f64>()
            .sqrt();
        assert!((norm - 1.0).abs() < 1e-10, "row {i} norm was {norm}");
    }
}

#[test]
fn test_all_stop_word_document_yields_zero_row() {
    let docs = vec!["the and of", "action crime"];

    let mut vectorizer = TfidfVectorizer::new().with_stop_words_english();
    let matrix = vectorizer
        .fit_transform(&docs)
        .expect("fit_transform should succeed");

    assert!(matrix.row_slice(0).iter().all(|&w| w == 0.0));
    assert!(matrix.row_slice(1).iter().any(|&w| w > 0.0));
}

#[test]
fn test_fit_empty_documents_fails() {
    let docs: Vec<&str> = Vec::new();
    let mut vectorizer = TfidfVectorizer::new();
    let err = vectorizer.fit(&docs).expect_err("should fail");
    assert!(matches!(err, RecomendarError::InvalidInput { .. }));
}

#[test]
fn test_fit_all_stop_words_fails() {
    let docs = vec!["the and", "of to"];
    let mut vectorizer = TfidfVectorizer::new().with_stop_words_english();
    let err = vectorizer.fit(&docs).expect_err("should fail");
    assert!(matches!(err, RecomendarError::InvalidInput { .. }));
}

#[test]
fn test_transform_before_fit_fails() {
    let vectorizer = TfidfVectorizer::new();
    let err = vectorizer.transform(&["action"]).expect_err("should fail");
    assert!(matches!(err, RecomendarError::InvalidInput { .. }));
}

#[test]
fn test_fit_transform_equals_fit_then_transform() {
    let docs = vec!["Action Crime", "Comedy Drama", "Action Comedy"];

    let mut v1 = TfidfVectorizer::new().with_stop_words_english();
    let combined = v1.fit_transform(&docs).expect("should succeed");

    let mut v2 = TfidfVectorizer::new().with_stop_words_english();
    v2.fit(&docs).expect("should succeed");
    let separate = v2.transform(&docs).expect("should succeed");

    assert_eq!(combined, separate);
}

#[test]
fn test_deterministic_across_runs() {
    let docs = vec!["Horror Thriller", "Romance", "Horror Comedy"];

    let mut v1 = TfidfVectorizer::new();
    let m1 = v1.fit_transform(&docs).expect("should succeed");
    let mut v2 = TfidfVectorizer::new();
    let m2 = v2.fit_transform(&docs).expect("should succeed");

    assert_eq!(m1, m2);
    assert_eq!(v1.vocabulary(), v2.vocabulary());
}

#[test]
fn test_custom_stop_words() {
    let docs = vec!["action filler", "comedy filler"];

    let mut vectorizer = TfidfVectorizer::new().with_stop_words(&["filler"]);
    vectorizer.fit(&docs).expect("fit should succeed");

    assert_eq!(vectorizer.vocabulary_size(), 2);
    assert!(!vectorizer.vocabulary().contains_key("filler"));
}

#[test]
fn test_lowercase_disabled() {
    let docs = vec!["Action action"];

    let mut vectorizer = TfidfVectorizer::new().with_lowercase(false);
    vectorizer.fit(&docs).expect("fit should succeed");

    assert_eq!(vectorizer.vocabulary_size(), 2);
    assert!(vectorizer.vocabulary().contains_key("Action"));
    assert!(vectorizer.vocabulary().contains_key("action"));
}

#[test]
fn test_whitespace_tokenizer_keeps_hyphenated_labels() {
    let docs = vec!["Sci-Fi", "Drama"];

    let mut vectorizer = TfidfVectorizer::new()
        .with_tokenizer(Box::new(WhitespaceTokenizer::new()));
    vectorizer.fit(&docs).expect("fit should succeed");

    assert!(vectorizer.vocabulary().contains_key("sci-fi"));
}

#[test]
fn test_identical_documents_identical_rows() {
    let docs = vec!["Action Crime", "Action Crime"];

    let mut vectorizer = TfidfVectorizer::new();
    let matrix = vectorizer
        .fit_transform(&docs)
        .expect("fit_transform should succeed");

    assert_eq!(matrix.row_slice(0), matrix.row_slice(1));
}
