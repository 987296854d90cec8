//! # Reelmatch Core
//!
//! Movie recommendation engine over a tabular catalogue. Two pipelines share
//! one immutable [`Recommender`] context:
//!
//! - **Similarity**: `FeatureCombiner` → `TfidfVectorizer` → `SimilarityMatrix`
//!   → `Ranker`. "More like this title" and free-text search, scored by cosine
//!   similarity over TF-IDF vectors.
//! - **Keyword**: `IntentClassifier` → `FieldFilter` → `Sorter`. Free-text
//!   requests like "comedy", "films after 2010" or "movies by Christopher
//!   Nolan" routed to a field filter and sorted by rating.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use reelmatch_core::{Corpus, Recommender, RecommenderConfig};
//!
//! let corpus = Corpus::from_path("movies.csv")?;
//! let recommender = Recommender::new(corpus, RecommenderConfig::from_env()?)?;
//!
//! for rec in recommender.similar_to_title("Inception", 5)? {
//!     println!("{} ({:.2})", rec.record.title, rec.score.unwrap_or_default());
//! }
//!
//! let mut rng = rand::thread_rng();
//! let response = recommender.respond("comedy", &mut rng);
//! println!("{} results", response.recommendations().len());
//! # Ok::<(), reelmatch_core::RecommendError>(())
//! ```
//!
//! ## Catalogue format
//!
//! Comma-delimited with a header row. `Title` and `Genre` are required;
//! `Director`, `Star1`..`Star4`, `Released_Year`, `IMDB_Rating`, `Overview`
//! and `Poster_Link` are optional. The IMDB top-1000 export headers
//! (`Series_Title` and friends) are accepted as well.

#![warn(rustdoc::missing_crate_level_docs)]

// ============================================================================
// MODULES
// ============================================================================

pub mod config;
pub mod error;
pub mod filter;
pub mod intent;
pub mod movie;
pub mod recommender;
pub mod similarity;
pub mod text;
pub mod vectorize;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

pub use config::{RecommenderConfig, DEFAULT_TOP_N};
pub use error::{RecommendError, Result};

// Catalogue
pub use movie::{Corpus, CorpusStats, MovieField, MovieRecord};

// Similarity pipeline
pub use similarity::{cosine_similarity, Ranker, ScoredIndex, SimilarityMatrix};
pub use vectorize::{
    FeatureCombiner, FeatureFields, SparseVector, TextVectorizer, TfidfVectorizer,
};

// Keyword pipeline
pub use filter::{FieldFilter, Sorter};
pub use intent::{
    CapitalizedNameExtractor, ChainedExtractor, EntityExtractor, GazetteerExtractor, Intent,
    IntentClassifier,
};

// Context
pub use recommender::{Recommendation, Recommender, RecommenderBuilder, Response};

// ============================================================================
// VERSION INFO
// ============================================================================

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// PRELUDE
// ============================================================================

/// Convenient imports for common usage
pub mod prelude {
    pub use crate::{
        Corpus, FeatureFields, Intent, MovieRecord, Recommendation, RecommendError, Recommender,
        RecommenderConfig, Response, Result, TextVectorizer,
    };
}
