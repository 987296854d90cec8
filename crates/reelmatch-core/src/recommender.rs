//! # Recommender
//!
//! The immutable context both pipelines run against. It owns the corpus,
//! the fitted vectorizer, every record's feature vector, the similarity
//! matrix and the intent classifier. Everything is built once in
//! [`RecommenderBuilder::build`] and never mutated afterwards.
//!
//! ```
//! use reelmatch_core::{Corpus, MovieRecord, Recommender};
//!
//! let corpus = Corpus::from_records(vec![
//!     MovieRecord::new(0, "Heat", "Crime, Drama").with_rating("8.3"),
//!     MovieRecord::new(1, "Ronin", "Crime, Thriller").with_rating("7.2"),
//!     MovieRecord::new(2, "Up", "Animation, Family").with_rating("8.2"),
//! ]);
//! let recommender = Recommender::builder(corpus).build()?;
//!
//! let similar = recommender.similar_to_title("heat", 1)?;
//! assert_eq!(similar[0].record.title, "Ronin");
//! # Ok::<(), reelmatch_core::RecommendError>(())
//! ```

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::RecommenderConfig;
use crate::error::{RecommendError, Result};
use crate::filter::{FieldFilter, Sorter};
use crate::intent::{ChainedExtractor, EntityExtractor, Intent, IntentClassifier};
use crate::movie::{Corpus, CorpusStats, MovieRecord};
use crate::similarity::{cosine_row, Ranker, ScoredIndex, SimilarityMatrix};
use crate::text::StopWords;
use crate::vectorize::{FeatureCombiner, SparseVector, TextVectorizer, TfidfVectorizer};

// ============================================================================
// RESULT TYPES
// ============================================================================

/// A recommended record. `score` is the cosine similarity for the
/// similarity pipeline and `None` for keyword results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// The recommended record
    pub record: MovieRecord,
    /// Similarity to the query, when ranked by similarity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl Recommendation {
    fn scored(record: &MovieRecord, score: f64) -> Self {
        Self {
            record: record.clone(),
            score: Some(score),
        }
    }

    fn unscored(record: &MovieRecord) -> Self {
        Self {
            record: record.clone(),
            score: None,
        }
    }
}

/// Outcome of the keyword pipeline for one input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Response {
    /// At least one record matched
    Results {
        /// Classified intent
        intent: Intent,
        /// Matching records, best first
        recommendations: Vec<Recommendation>,
    },
    /// The intent was understood but nothing matched
    NoResults {
        /// Classified intent
        intent: Intent,
    },
    /// No rule matched the input
    NotUnderstood {
        /// The raw input
        input: String,
    },
    /// The intent carried a number that does not parse
    InvalidFilter {
        /// Classified intent
        intent: Intent,
        /// Error message
        message: String,
    },
}

impl Response {
    /// Recommendations carried by the response (empty unless `Results`)
    pub fn recommendations(&self) -> &[Recommendation] {
        match self {
            Self::Results {
                recommendations, ..
            } => recommendations,
            _ => &[],
        }
    }

    /// Classified intent, `Unknown` for `NotUnderstood`
    pub fn intent(&self) -> Intent {
        match self {
            Self::Results { intent, .. }
            | Self::NoResults { intent }
            | Self::InvalidFilter { intent, .. } => intent.clone(),
            Self::NotUnderstood { .. } => Intent::Unknown,
        }
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Builder for [`Recommender`]
#[derive(Debug)]
pub struct RecommenderBuilder {
    corpus: Corpus,
    config: RecommenderConfig,
    vectorizer: Option<Box<dyn TextVectorizer>>,
    extractor: Option<Box<dyn EntityExtractor>>,
}

impl RecommenderBuilder {
    /// Use this configuration instead of the defaults
    pub fn config(mut self, config: RecommenderConfig) -> Self {
        self.config = config;
        self
    }

    /// Use an unfitted vectorizer other than TF-IDF
    pub fn vectorizer(mut self, vectorizer: impl TextVectorizer + 'static) -> Self {
        self.vectorizer = Some(Box::new(vectorizer));
        self
    }

    /// Use a different person-name extractor for intent classification
    pub fn extractor(mut self, extractor: impl EntityExtractor + 'static) -> Self {
        self.extractor = Some(Box::new(extractor));
        self
    }

    /// Fit the vocabulary, vectorise the corpus and compute the matrix
    pub fn build(self) -> Result<Recommender> {
        let Self {
            corpus,
            config,
            vectorizer,
            extractor,
        } = self;

        config.validate()?;
        if corpus.is_empty() {
            return Err(RecommendError::EmptyCorpus);
        }

        let combiner = FeatureCombiner::new(config.features, config.separator.clone());
        let documents = combiner.combine_all(&corpus);

        let mut vectorizer: Box<dyn TextVectorizer> = vectorizer.unwrap_or_else(|| {
            let mut stop_words = StopWords::english();
            stop_words.extend(&config.extra_stop_words);
            Box::new(TfidfVectorizer::with_stop_words(stop_words))
        });
        let vectors = vectorizer.fit_transform(&documents)?;
        let matrix = SimilarityMatrix::from_vectors(&vectors);

        let extractor: Box<dyn EntityExtractor> =
            extractor.unwrap_or_else(|| Box::new(ChainedExtractor::for_corpus(&corpus)));
        let classifier = IntentClassifier::with_boxed_extractor(extractor);

        info!(
            records = corpus.len(),
            vocabulary = vectorizer.vocabulary_size(),
            features = %config.features,
            extractor = classifier.extractor_name(),
            "Recommender ready"
        );

        Ok(Recommender {
            sorter: Sorter::new(config.top_n),
            corpus,
            config,
            combiner,
            vectorizer,
            vectors,
            matrix,
            classifier,
        })
    }
}

// ============================================================================
// RECOMMENDER
// ============================================================================

/// Read-only recommendation context
#[derive(Debug)]
pub struct Recommender {
    corpus: Corpus,
    config: RecommenderConfig,
    combiner: FeatureCombiner,
    vectorizer: Box<dyn TextVectorizer>,
    vectors: Vec<SparseVector>,
    matrix: SimilarityMatrix,
    classifier: IntentClassifier,
    sorter: Sorter,
}

impl Recommender {
    /// Start building a recommender over a corpus
    pub fn builder(corpus: Corpus) -> RecommenderBuilder {
        RecommenderBuilder {
            corpus,
            config: RecommenderConfig::default(),
            vectorizer: None,
            extractor: None,
        }
    }

    /// Recommender with the given configuration and default components
    pub fn new(corpus: Corpus, config: RecommenderConfig) -> Result<Self> {
        Self::builder(corpus).config(config).build()
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    /// The catalogue
    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// Active configuration
    pub fn config(&self) -> &RecommenderConfig {
        &self.config
    }

    /// Pairwise similarity of every record
    pub fn matrix(&self) -> &SimilarityMatrix {
        &self.matrix
    }

    /// Feature vector of a record
    pub fn vector(&self, index: usize) -> Option<&SparseVector> {
        self.vectors.get(index)
    }

    /// Combined feature text of a record
    pub fn feature_text(&self, index: usize) -> Option<String> {
        self.corpus.get(index).map(|r| self.combiner.combine(r))
    }

    /// The intent classifier
    pub fn classifier(&self) -> &IntentClassifier {
        &self.classifier
    }

    /// Default result count
    pub fn top_n(&self) -> usize {
        self.config.top_n
    }

    // ------------------------------------------------------------------------
    // Similarity pipeline
    // ------------------------------------------------------------------------

    /// The `n` records most similar to a title, excluding the title itself
    pub fn similar_to_title(&self, title: &str, n: usize) -> Result<Vec<Recommendation>> {
        let index = self
            .corpus
            .find_title(title)
            .ok_or_else(|| RecommendError::TitleNotFound(title.trim().to_string()))?;
        self.similar_to_index(index, n)
    }

    /// The `n` records most similar to the record at `index`, excluding it
    pub fn similar_to_index(&self, index: usize, n: usize) -> Result<Vec<Recommendation>> {
        let row = self
            .matrix
            .row(index)
            .ok_or(RecommendError::IndexOutOfRange {
                index,
                len: self.corpus.len(),
            })?;

        let ranked = Ranker::new(n).rank_similar(row, index);
        debug!(index, results = ranked.len(), "Ranked similar records");
        Ok(self.to_recommendations(&ranked))
    }

    /// The `n` records most similar to free text
    pub fn search(&self, text: &str, n: usize) -> Result<Vec<Recommendation>> {
        let query = self.vectorizer.transform(&text.to_lowercase())?;
        if query.is_zero() {
            debug!(text, "Query shares no terms with the vocabulary");
        }

        let row = cosine_row(&query, &self.vectors);
        Ok(self.to_recommendations(&Ranker::new(n).rank_query(&row)))
    }

    fn to_recommendations(&self, ranked: &[ScoredIndex]) -> Vec<Recommendation> {
        ranked
            .iter()
            .filter_map(|s| {
                self.corpus
                    .get(s.index)
                    .map(|r| Recommendation::scored(r, s.score))
            })
            .collect()
    }

    // ------------------------------------------------------------------------
    // Keyword pipeline
    // ------------------------------------------------------------------------

    /// Classify free text into an intent
    pub fn classify(&self, input: &str) -> Intent {
        self.classifier.classify(input)
    }

    /// Records whose genre contains `value`, best rated first
    pub fn recommend_by_genre(&self, value: &str) -> Vec<Recommendation> {
        self.filtered(&FieldFilter::genre(value))
    }

    /// Records whose director contains `value`, best rated first
    pub fn recommend_by_director(&self, value: &str) -> Vec<Recommendation> {
        self.filtered(&FieldFilter::director(value))
    }

    /// Records with a cast member containing `value`, best rated first
    pub fn recommend_by_actor(&self, value: &str) -> Vec<Recommendation> {
        self.filtered(&FieldFilter::actor(value))
    }

    /// Records released in or after (`after`) or in or before the year
    pub fn recommend_by_year(&self, value: &str, after: bool) -> Result<Vec<Recommendation>> {
        Ok(self.filtered(&FieldFilter::year(value, after)?))
    }

    /// Records rated at least `value`
    pub fn recommend_by_rating(&self, value: &str) -> Result<Vec<Recommendation>> {
        Ok(self.filtered(&FieldFilter::rating(value)?))
    }

    /// The `n` highest-rated records in the corpus
    pub fn top_rated(&self, n: usize) -> Vec<Recommendation> {
        Sorter::new(n)
            .top_rated(&self.corpus)
            .into_iter()
            .map(Recommendation::unscored)
            .collect()
    }

    /// One record chosen uniformly from the whole corpus
    pub fn random_pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Recommendation> {
        self.sorter
            .random_pick(&self.corpus, rng)
            .map(Recommendation::unscored)
    }

    /// Run the keyword pipeline end to end
    pub fn respond<R: Rng + ?Sized>(&self, input: &str, rng: &mut R) -> Response {
        let intent = self.classify(input);

        let recommendations = match &intent {
            Intent::Unknown => {
                return Response::NotUnderstood {
                    input: input.to_string(),
                };
            }
            Intent::Random => self.random_pick(rng).into_iter().collect(),
            Intent::Top => self.top_rated(self.config.top_n),
            other => match FieldFilter::from_intent(other) {
                Ok(Some(filter)) => self.filtered(&filter),
                Ok(None) => Vec::new(),
                Err(e) => {
                    return Response::InvalidFilter {
                        intent: intent.clone(),
                        message: e.to_string(),
                    };
                }
            },
        };

        if recommendations.is_empty() {
            Response::NoResults { intent }
        } else {
            Response::Results {
                intent,
                recommendations,
            }
        }
    }

    fn filtered(&self, filter: &FieldFilter) -> Vec<Recommendation> {
        self.sorter
            .by_rating(filter.apply(&self.corpus))
            .into_iter()
            .map(Recommendation::unscored)
            .collect()
    }

    // ------------------------------------------------------------------------
    // Stats
    // ------------------------------------------------------------------------

    /// Corpus summary plus the fitted vocabulary size
    pub fn stats(&self) -> CorpusStats {
        CorpusStats {
            vocabulary_size: self.vectorizer.vocabulary_size(),
            ..self.corpus.stats()
        }
    }
}
