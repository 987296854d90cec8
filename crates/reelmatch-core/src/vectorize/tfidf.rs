//! TF-IDF Vectorizer
//!
//! ```text
//! tfidf(t, d) = tf(t, d) × idf(t)
//! tf(t, d)    = count of t in d
//! idf(t)      = ln((1 + n) / (1 + df(t))) + 1
//! ```
//!
//! Rows are L2-normalised so the dot product of two rows is their cosine.

use std::collections::{BTreeSet, HashMap, HashSet};

use tracing::{debug, warn};

use super::{SparseVector, TextVectorizer};
use crate::error::{RecommendError, Result};
use crate::text::{analyze, StopWords};

/// TF-IDF vectorizer with smooth idf and a stop-word list
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    stop_words: StopWords,
    /// term -> column
    vocabulary: HashMap<String, usize>,
    /// idf per column
    idf: Vec<f64>,
    fitted: bool,
}

impl TfidfVectorizer {
    /// Vectorizer removing the English stop-word list
    pub fn new() -> Self {
        Self::with_stop_words(StopWords::english())
    }

    /// Vectorizer with a custom stop-word list
    pub fn with_stop_words(stop_words: StopWords) -> Self {
        Self {
            stop_words,
            vocabulary: HashMap::new(),
            idf: Vec::new(),
            fitted: false,
        }
    }

    /// Column of a term, if it is in the vocabulary
    pub fn term_index(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }

    /// idf of a term, if it is in the vocabulary
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.term_index(term).map(|i| self.idf[i])
    }

    fn terms(&self, text: &str) -> Vec<String> {
        analyze(text)
            .into_iter()
            .filter(|t| !self.stop_words.contains(t))
            .collect()
    }
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextVectorizer for TfidfVectorizer {
    fn fit(&mut self, documents: &[String]) -> Result<()> {
        if self.fitted {
            return Err(RecommendError::AlreadyFitted);
        }
        if documents.is_empty() {
            return Err(RecommendError::EmptyCorpus);
        }

        let n_docs = documents.len();
        let mut doc_freq: HashMap<String, usize> = HashMap::new();

        for doc in documents {
            let unique: HashSet<String> = self.terms(doc).into_iter().collect();
            for term in unique {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        // Alphabetical columns keep the vocabulary layout deterministic.
        let sorted: BTreeSet<&String> = doc_freq.keys().collect();
        let vocabulary: HashMap<String, usize> = sorted
            .into_iter()
            .enumerate()
            .map(|(idx, term)| (term.clone(), idx))
            .collect();

        let mut idf = vec![0.0; vocabulary.len()];
        for (term, &idx) in &vocabulary {
            let df = doc_freq.get(term).copied().unwrap_or(0);
            idf[idx] = ((1.0 + n_docs as f64) / (1.0 + df as f64)).ln() + 1.0;
        }

        if vocabulary.is_empty() {
            warn!(documents = n_docs, "Fitted an empty vocabulary; every vector will be zero");
        }
        debug!(documents = n_docs, vocabulary = vocabulary.len(), "TF-IDF vocabulary fitted");

        self.vocabulary = vocabulary;
        self.idf = idf;
        self.fitted = true;
        Ok(())
    }

    fn transform(&self, document: &str) -> Result<SparseVector> {
        if !self.fitted {
            return Err(RecommendError::NotFitted);
        }

        let mut counts: HashMap<usize, f64> = HashMap::new();
        for term in self.terms(document) {
            // Out-of-vocabulary terms carry no weight.
            if let Some(&idx) = self.vocabulary.get(&term) {
                *counts.entry(idx).or_insert(0.0) += 1.0;
            }
        }

        let weighted = counts
            .into_iter()
            .map(|(idx, tf)| (idx, tf * self.idf[idx]))
            .collect();

        Ok(SparseVector::from_entries(weighted).normalized())
    }

    fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    fn is_fitted(&self) -> bool {
        self.fitted
    }
}
