//! Error types shared by every pipeline stage.

/// Recommendation engine error type
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum RecommendError {
    /// IO error while opening the catalogue
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Malformed CSV structure (not a bad cell, those are coerced)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    /// A required column is absent from the header row
    #[error("Missing required column: {0}")]
    MissingColumn(String),
    /// The catalogue contains no rows
    #[error("Catalogue is empty")]
    EmptyCorpus,
    /// Vectorizer used before `fit()`
    #[error("Vectorizer is not fitted. Call fit() first")]
    NotFitted,
    /// Vectorizer fit a second time; the vocabulary is frozen after the first fit
    #[error("Vectorizer is already fitted; vocabulary is frozen")]
    AlreadyFitted,
    /// No record with this title
    #[error("Title not found: {0}")]
    TitleNotFound(String),
    /// Row index outside the corpus
    #[error("Index {index} out of range for corpus of {len} records")]
    IndexOutOfRange {
        /// Requested row
        index: usize,
        /// Corpus length
        len: usize,
    },
    /// Numeric filter value that does not parse (year or rating)
    #[error("Invalid filter value for {field}: {value:?}")]
    InvalidFilterValue {
        /// Field being filtered ("year" or "rating")
        field: &'static str,
        /// Raw value supplied by the caller
        value: String,
    },
    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Result type for the recommendation engine
pub type Result<T> = std::result::Result<T, RecommendError>;
