//! Field filters for the keyword pipeline.
//!
//! Text filters are case-insensitive substring matches. Numeric filters are
//! inclusive comparisons; records whose year or rating cell is not a number
//! never match them.

mod sorter;

pub use sorter::Sorter;

use serde::{Deserialize, Serialize};

use crate::error::{RecommendError, Result};
use crate::intent::Intent;
use crate::movie::{Corpus, MovieRecord};

/// One predicate over a record field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum FieldFilter {
    /// Genre contains the (lower-cased) value
    Genre(String),
    /// Director contains the value
    Director(String),
    /// Any cast member contains the value
    Actor(String),
    /// Released in or after the year
    YearAtLeast(f64),
    /// Released in or before the year
    YearAtMost(f64),
    /// Rated at least the value
    RatingAtLeast(f64),
}

impl FieldFilter {
    /// Genre substring filter
    pub fn genre(value: &str) -> Self {
        Self::Genre(value.trim().to_lowercase())
    }

    /// Director substring filter
    pub fn director(value: &str) -> Self {
        Self::Director(value.trim().to_lowercase())
    }

    /// Cast substring filter (OR across cast members)
    pub fn actor(value: &str) -> Self {
        Self::Actor(value.trim().to_lowercase())
    }

    /// Year filter; `after` selects `>=`, otherwise `<=`
    pub fn year(value: &str, after: bool) -> Result<Self> {
        let year = parse_value("year", value)?;
        Ok(if after {
            Self::YearAtLeast(year)
        } else {
            Self::YearAtMost(year)
        })
    }

    /// Minimum rating filter
    pub fn rating(value: &str) -> Result<Self> {
        parse_value("rating", value).map(Self::RatingAtLeast)
    }

    /// Filter for an intent; `None` for intents that do not filter
    pub fn from_intent(intent: &Intent) -> Result<Option<Self>> {
        let filter = match intent {
            Intent::Genre(v) => Self::genre(v),
            Intent::Director(v) => Self::director(v),
            Intent::Actor(v) => Self::actor(v),
            Intent::YearAfter(v) => Self::year(v, true)?,
            Intent::YearBefore(v) => Self::year(v, false)?,
            Intent::RatingAbove(v) => Self::rating(v)?,
            Intent::Random | Intent::Top | Intent::Unknown => return Ok(None),
        };
        Ok(Some(filter))
    }

    /// Whether the record passes
    pub fn matches(&self, record: &MovieRecord) -> bool {
        match self {
            Self::Genre(needle) => contains_ci(&record.genre, needle),
            Self::Director(needle) => contains_ci(&record.director, needle),
            Self::Actor(needle) => record.cast.iter().any(|name| contains_ci(name, needle)),
            Self::YearAtLeast(min) => record.year().is_some_and(|y| f64::from(y) >= *min),
            Self::YearAtMost(max) => record.year().is_some_and(|y| f64::from(y) <= *max),
            Self::RatingAtLeast(min) => record.rating().is_some_and(|r| r >= *min),
        }
    }

    /// Matching records in corpus order
    pub fn apply<'a>(&self, corpus: &'a Corpus) -> Vec<&'a MovieRecord> {
        let matched: Vec<&MovieRecord> = corpus.iter().filter(|r| self.matches(r)).collect();
        tracing::debug!(filter = ?self, matched = matched.len(), "Applied filter");
        matched
    }
}

fn contains_ci(haystack: &str, lowered_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowered_needle)
}

fn parse_value(field: &'static str, value: &str) -> Result<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| RecommendError::InvalidFilterValue {
            field,
            value: value.to_string(),
        })
}
