//! Recommender configuration
//!
//! Defaults are title + genre features and five results. Each value
//! can be overridden from the environment and then from explicit setters.

use serde::{Deserialize, Serialize};

use crate::error::{RecommendError, Result};
use crate::vectorize::FeatureFields;

/// Default number of results returned by every ranking operation
pub const DEFAULT_TOP_N: usize = 5;

/// Default separator placed between concatenated text fields
pub const DEFAULT_SEPARATOR: &str = " ";

/// Environment variable overriding [`RecommenderConfig::top_n`]
pub const ENV_TOP_N: &str = "REELMATCH_TOP_N";

/// Environment variable overriding [`RecommenderConfig::features`]
pub const ENV_FEATURES: &str = "REELMATCH_FEATURES";

/// Configuration for building a [`crate::Recommender`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommenderConfig {
    /// Which record fields feed the similarity pipeline
    pub features: FeatureFields,
    /// Separator used when concatenating fields
    pub separator: String,
    /// Number of results returned by ranking operations
    pub top_n: usize,
    /// Stop words removed in addition to the built-in English list
    pub extra_stop_words: Vec<String>,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            features: FeatureFields::TitleGenre,
            separator: DEFAULT_SEPARATOR.to_string(),
            top_n: DEFAULT_TOP_N,
            extra_stop_words: Vec::new(),
        }
    }
}

impl RecommenderConfig {
    /// Defaults overridden by `REELMATCH_TOP_N` and `REELMATCH_FEATURES`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`] with an injectable variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_TOP_N) {
            config.top_n = parse_top_n(&raw)?;
        }
        if let Some(raw) = lookup(ENV_FEATURES) {
            config.features = raw.parse()?;
        }

        Ok(config)
    }

    /// Set the feature preset
    pub fn with_features(mut self, features: FeatureFields) -> Self {
        self.features = features;
        self
    }

    /// Set the result count
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Set the field separator
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Add stop words on top of the English list
    pub fn with_extra_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extra_stop_words
            .extend(words.into_iter().map(|w| w.as_ref().to_lowercase()));
        self
    }

    /// Reject values no ranking operation can honour
    pub fn validate(&self) -> Result<()> {
        if self.top_n == 0 {
            return Err(RecommendError::Config("top_n must be at least 1".to_string()));
        }
        Ok(())
    }
}

fn parse_top_n(raw: &str) -> Result<usize> {
    match raw.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(RecommendError::Config(format!(
            "{ENV_TOP_N} must be a positive integer, got {raw:?}"
        ))),
    }
}
