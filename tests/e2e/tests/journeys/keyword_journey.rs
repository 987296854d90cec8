//! Keyword Journey
//!
//! Free-text requests routed through intent classification, field filters
//! and rating order.

use rand::SeedableRng;
use rand::rngs::StdRng;
use reelmatch_core::{Intent, Recommendation, RecommendError, Response};
use reelmatch_e2e_tests::TestCatalogueManager;

fn titles(recs: &[Recommendation]) -> Vec<&str> {
    recs.iter().map(|r| r.record.title.as_str()).collect()
}

fn ask(input: &str) -> Response {
    let catalogue = TestCatalogueManager::with_sample();
    let recommender = catalogue.recommender();
    let mut rng = StdRng::seed_from_u64(11);
    recommender.respond(input, &mut rng)
}

#[test]
fn test_genre_request() {
    let response = ask("Show me a comedy");
    assert_eq!(response.intent(), Intent::Genre("comedy".into()));
    assert_eq!(
        titles(response.recommendations()),
        vec!["Toy Story", "The Grand Budapest Hotel", "Groundhog Day", "Superbad"]
    );
}

#[test]
fn test_genre_request_puts_unrated_last() {
    let response = ask("any horror tonight?");
    assert_eq!(titles(response.recommendations()), vec!["Alien", "Nosferatu"]);
}

#[test]
fn test_director_request() {
    let response = ask("movies by Christopher Nolan");
    assert_eq!(response.intent(), Intent::Director("Christopher Nolan".into()));
    assert_eq!(
        titles(response.recommendations()),
        vec!["The Dark Knight", "Inception", "Interstellar"]
    );
}

#[test]
fn test_director_by_surname() {
    let response = ask("something directed by zemeckis");
    assert_eq!(response.intent(), Intent::Director("Robert Zemeckis".into()));
    assert_eq!(
        titles(response.recommendations()),
        vec!["Forrest Gump", "Cast Away"]
    );
}

#[test]
fn test_actor_request_searches_every_cast_column() {
    let response = ask("films starring Tom Hanks");
    assert_eq!(response.intent(), Intent::Actor("Tom Hanks".into()));
    assert_eq!(
        titles(response.recommendations()),
        vec!["Forrest Gump", "Toy Story", "Cast Away", "Apollo 13"]
    );
}

#[test]
fn test_actor_outside_catalogue() {
    let response = ask("movies with Greta Gerwig");
    assert_eq!(
        response,
        Response::NoResults {
            intent: Intent::Actor("Greta Gerwig".into())
        }
    );
}

#[test]
fn test_year_requests() {
    let response = ask("Films after 2010");
    assert_eq!(response.intent(), Intent::YearAfter("2010".into()));
    assert_eq!(
        titles(response.recommendations()),
        vec!["Inception", "Interstellar", "The Grand Budapest Hotel"]
    );

    let response = ask("movies before 1980");
    assert_eq!(
        titles(response.recommendations()),
        vec!["The Godfather", "Alien", "Nosferatu"]
    );
}

#[test]
fn test_rating_request() {
    let response = ask("rating above 8.8");
    assert_eq!(response.intent(), Intent::RatingAbove("8.8".into()));
    assert_eq!(
        titles(response.recommendations()),
        vec![
            "The Shawshank Redemption",
            "The Godfather",
            "The Dark Knight",
            "Inception",
            "Forrest Gump"
        ]
    );
}

#[test]
fn test_top_request() {
    let response = ask("top movies");
    assert_eq!(response.intent(), Intent::Top);
    assert_eq!(response.recommendations().len(), 5);
    assert_eq!(
        response.recommendations()[0].record.title,
        "The Shawshank Redemption"
    );
}

#[test]
fn test_random_request_returns_one_record() {
    let catalogue = TestCatalogueManager::with_sample();
    let recommender = catalogue.recommender();

    for seed in 0..10 {
        let mut rng = StdRng::seed_from_u64(seed);
        let response = recommender.respond("random movie", &mut rng);
        assert_eq!(response.intent(), Intent::Random);
        assert_eq!(response.recommendations().len(), 1);
        let pick = &response.recommendations()[0].record;
        assert_eq!(recommender.corpus().get(pick.index), Some(pick));
    }
}

#[test]
fn test_unknown_request() {
    let response = ask("hello there");
    assert!(matches!(response, Response::NotUnderstood { ref input } if input == "hello there"));
    assert!(response.recommendations().is_empty());

    assert!(matches!(ask("movies with a twist"), Response::NotUnderstood { .. }));
}

#[test]
fn test_no_results() {
    let response = ask("films after 2050");
    assert_eq!(
        response,
        Response::NoResults {
            intent: Intent::YearAfter("2050".into())
        }
    );
}

#[test]
fn test_direct_filters() {
    let catalogue = TestCatalogueManager::with_sample();
    let recommender = catalogue.recommender();

    assert_eq!(
        recommender.recommend_by_genre("COMEDY"),
        recommender.recommend_by_genre("comedy")
    );
    assert!(
        recommender
            .recommend_by_year("2010", true)
            .unwrap()
            .iter()
            .all(|r| r.record.year().is_some_and(|y| y >= 2010))
    );
    assert!(matches!(
        recommender.recommend_by_year("abc", true),
        Err(RecommendError::InvalidFilterValue { field: "year", .. })
    ));
    assert!(matches!(
        recommender.recommend_by_rating("very good"),
        Err(RecommendError::InvalidFilterValue { field: "rating", .. })
    ));
}
