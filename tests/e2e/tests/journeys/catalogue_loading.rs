//! Catalogue Loading Journey
//!
//! Reading catalogue files from disk, including the malformed ones.

use reelmatch_core::filter::FieldFilter;
use reelmatch_core::{Corpus, RecommendError, Recommender, RecommenderConfig};
use reelmatch_e2e_tests::{BatchConfig, TestCatalogueManager, TestDataFactory};

#[test]
fn test_sample_catalogue_stats() {
    let catalogue = TestCatalogueManager::with_sample();
    let stats = catalogue.recommender().stats();

    assert_eq!(stats.total_records, 14);
    assert_eq!(stats.rated_records, 13);
    assert_eq!(stats.dated_records, 13);
    assert_eq!(stats.earliest_year, Some(1922));
    assert_eq!(stats.latest_year, Some(2014));
    assert!(stats.vocabulary_size > 0);
}

#[test]
fn test_imdb_columns_mapped() {
    let catalogue = TestCatalogueManager::with_sample();
    let corpus = catalogue.load();
    let godfather = corpus.get(1).unwrap();

    assert_eq!(godfather.title, "The Godfather");
    assert_eq!(godfather.genre, "Crime, Drama");
    assert_eq!(godfather.director, "Francis Ford Coppola");
    assert_eq!(godfather.cast.len(), 4);
    assert_eq!(godfather.rating(), Some(9.2));
}

#[test]
fn test_non_numeric_year_never_passes_year_filters() {
    let catalogue = TestCatalogueManager::with_sample();
    let corpus = catalogue.load();

    let after = FieldFilter::year("1900", true).unwrap().apply(&corpus);
    assert_eq!(after.len(), 13);
    assert!(after.iter().all(|r| r.title != "Apollo 13"));
}

#[test]
fn test_ragged_rows_are_coerced() {
    let catalogue = TestCatalogueManager::with_csv(&TestDataFactory::ragged_csv());
    let corpus = catalogue.load();

    assert_eq!(corpus.len(), 3);
    let ronin = corpus.get(1).unwrap();
    assert_eq!(ronin.genre, "Thriller");
    assert_eq!(ronin.director, "");
    assert_eq!(ronin.year(), None);
    assert_eq!(corpus.get(2).unwrap().rating(), None);

    let recommender = Recommender::new(corpus, RecommenderConfig::default()).unwrap();
    assert_eq!(recommender.stats().rated_records, 1);
}

#[test]
fn test_missing_genre_column_is_fatal() {
    let catalogue = TestCatalogueManager::with_csv(&TestDataFactory::missing_genre_csv());
    let err = Corpus::from_path(catalogue.path()).unwrap_err();
    assert!(matches!(err, RecommendError::MissingColumn(_)));
}

#[test]
fn test_missing_file_is_fatal() {
    let catalogue = TestCatalogueManager::new_temp();
    let err = Corpus::from_path(catalogue.path()).unwrap_err();
    assert!(matches!(err, RecommendError::Io(_)));
}

#[test]
fn test_header_only_catalogue_cannot_build() {
    let catalogue = TestCatalogueManager::with_csv("Title,Genre\n");
    let corpus = catalogue.load();
    assert!(corpus.is_empty());

    let err = Recommender::new(corpus, RecommenderConfig::default()).unwrap_err();
    assert!(matches!(err, RecommendError::EmptyCorpus));
}

#[test]
fn test_generated_catalogue() {
    let csv = TestDataFactory::generated_catalogue_csv(&BatchConfig {
        count: 200,
        ..Default::default()
    });
    let catalogue = TestCatalogueManager::with_csv(&csv);
    let recommender = catalogue.recommender();

    assert_eq!(recommender.corpus().len(), 200);
    assert_eq!(recommender.matrix().len(), 200);
    assert_eq!(recommender.recommend_by_genre("sci-fi").len(), 5);

    let similar = recommender.similar_to_title("Generated Movie 7", 5).unwrap();
    assert_eq!(similar.len(), 5);
}

#[test]
fn test_unrated_generated_catalogue() {
    let csv = TestDataFactory::generated_catalogue_csv(&BatchConfig {
        count: 10,
        with_ratings: false,
        ..Default::default()
    });
    let catalogue = TestCatalogueManager::with_csv(&csv);
    let recommender = catalogue.recommender();

    // Every record is unrated, so rating order keeps corpus order
    let top = recommender.top_rated(3);
    let indices: Vec<usize> = top.iter().map(|r| r.record.index).collect();
    assert_eq!(indices, vec![0, 1, 2]);
    assert!(recommender.recommend_by_rating("1").unwrap().is_empty());
}
