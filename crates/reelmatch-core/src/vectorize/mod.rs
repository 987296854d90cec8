//! Vectorize Module
//!
//! Turns combined record text into sparse term-weight vectors:
//! - `FeatureCombiner`: field concatenation
//! - `TextVectorizer`: the fit-once / transform seam
//! - `TfidfVectorizer`: the default implementation

mod features;
mod tfidf;

pub use features::{FeatureCombiner, FeatureFields};
pub use tfidf::TfidfVectorizer;

use crate::error::Result;

// ============================================================================
// VECTORIZER TRAIT
// ============================================================================

/// Text vectorizer with a vocabulary that is fit once and then frozen.
///
/// `fit` must fail on a second call and `transform` must fail before the
/// first; queries are projected into the fitted vocabulary only.
pub trait TextVectorizer: std::fmt::Debug + Send + Sync {
    /// Learn the vocabulary from the corpus documents
    fn fit(&mut self, documents: &[String]) -> Result<()>;

    /// Project one document into the fitted vocabulary
    fn transform(&self, document: &str) -> Result<SparseVector>;

    /// Number of vocabulary terms
    fn vocabulary_size(&self) -> usize;

    /// Whether `fit` has run
    fn is_fitted(&self) -> bool;

    /// Fit, then transform every document
    fn fit_transform(&mut self, documents: &[String]) -> Result<Vec<SparseVector>> {
        self.fit(documents)?;
        documents.iter().map(|d| self.transform(d)).collect()
    }
}

// ============================================================================
// SPARSE VECTOR
// ============================================================================

/// Sparse vector of `(column, weight)` pairs, sorted by column
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    /// Build from unsorted entries; zero weights are dropped
    pub fn from_entries(mut entries: Vec<(usize, f64)>) -> Self {
        entries.retain(|(_, w)| *w != 0.0);
        entries.sort_by_key(|(idx, _)| *idx);
        Self { entries }
    }

    /// Non-zero entries in column order
    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    /// Number of non-zero entries
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// True when every weight is zero
    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    /// Euclidean norm
    pub fn norm(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt()
    }

    /// Unit-length copy (zero stays zero)
    pub fn normalized(mut self) -> Self {
        let norm = self.norm();
        if norm > 0.0 {
            for (_, w) in &mut self.entries {
                *w /= norm;
            }
        }
        self
    }

    /// Dot product by merging the two sorted entry lists
    pub fn dot(&self, other: &SparseVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (a_idx, a_w) = self.entries[i];
            let (b_idx, b_w) = other.entries[j];
            match a_idx.cmp(&b_idx) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += a_w * b_w;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }
}
