//! Similarity Journey
//!
//! "More like this title" and free-text search against the sample catalogue.

use reelmatch_core::{FeatureFields, RecommendError, RecommenderConfig};
use reelmatch_e2e_tests::TestCatalogueManager;

fn titles(recs: &[reelmatch_core::Recommendation]) -> Vec<&str> {
    recs.iter().map(|r| r.record.title.as_str()).collect()
}

#[test]
fn test_similar_to_inception() {
    let catalogue = TestCatalogueManager::with_sample();
    let recommender = catalogue.recommender();

    let similar = recommender.similar_to_title("inception", 5).unwrap();

    // Shares "adventure" and "sci-fi", then "sci-fi" only
    assert_eq!(&titles(&similar)[..2], &["Interstellar", "Alien"]);
    assert!(similar.windows(2).all(|w| w[0].score >= w[1].score));
}

#[test]
fn test_self_never_in_own_results() {
    let catalogue = TestCatalogueManager::with_sample();
    let recommender = catalogue.recommender();

    for record in recommender.corpus() {
        let similar = recommender.similar_to_index(record.index, 20).unwrap();
        assert_eq!(similar.len(), recommender.corpus().len() - 1);
        assert!(similar.iter().all(|r| r.record.index != record.index));
    }
}

#[test]
fn test_similarity_matrix_properties() {
    let catalogue = TestCatalogueManager::with_sample();
    let recommender = catalogue.recommender();
    let matrix = recommender.matrix();

    for i in 0..matrix.len() {
        assert_eq!(matrix.get(i, i), Some(1.0));
        for j in 0..matrix.len() {
            let s = matrix.get(i, j).unwrap();
            assert!((0.0..=1.0 + 1e-12).contains(&s));
            assert_eq!(Some(s), matrix.get(j, i));
        }
    }
}

#[test]
fn test_title_lookup_is_trimmed_and_case_insensitive() {
    let catalogue = TestCatalogueManager::with_sample();
    let recommender = catalogue.recommender();

    let a = recommender.similar_to_title("  THE DARK KNIGHT ", 3).unwrap();
    let b = recommender.similar_to_title("The Dark Knight", 3).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_unknown_title() {
    let catalogue = TestCatalogueManager::with_sample();
    let recommender = catalogue.recommender();

    let err = recommender.similar_to_title("Paddington 2", 5).unwrap_err();
    assert!(matches!(err, RecommendError::TitleNotFound(_)));
}

#[test]
fn test_free_text_search() {
    let catalogue = TestCatalogueManager::with_sample();
    let recommender = catalogue.recommender();

    let results = recommender.search("Horror", 5).unwrap();
    let mut horror = titles(&results)[..2].to_vec();
    horror.sort_unstable();
    assert_eq!(horror, vec!["Alien", "Nosferatu"]);
    assert!(results[..2].iter().all(|r| r.score.unwrap() > 0.0));
    assert!(results[2..].iter().all(|r| r.score == Some(0.0)));
}

#[test]
fn test_free_text_without_overlap_returns_first_records() {
    let catalogue = TestCatalogueManager::with_sample();
    let recommender = catalogue.recommender();

    let results = recommender.search("xylophone", 3).unwrap();
    assert_eq!(
        titles(&results),
        vec!["The Shawshank Redemption", "The Godfather", "The Dark Knight"]
    );
}

#[test]
fn test_overview_features_change_neighbours() {
    let catalogue = TestCatalogueManager::with_sample();
    let recommender = catalogue.recommender_with(
        RecommenderConfig::default().with_features(FeatureFields::GenreDirectorOverview),
    );

    // Director names now carry weight
    let similar = recommender.similar_to_title("Inception", 2).unwrap();
    assert!(
        similar
            .iter()
            .all(|r| r.record.director == "Christopher Nolan")
    );
}

#[test]
fn test_top_n_respected() {
    let catalogue = TestCatalogueManager::with_sample();
    let recommender = catalogue.recommender_with(RecommenderConfig::default().with_top_n(2));

    let similar = recommender
        .similar_to_title("Toy Story", recommender.top_n())
        .unwrap();
    assert_eq!(similar.len(), 2);
}
