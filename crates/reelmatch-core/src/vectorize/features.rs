//! Feature combiner - which record fields feed the similarity pipeline.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RecommendError;
use crate::movie::{MovieField, MovieRecord};

/// Field presets for the combined text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeatureFields {
    /// Title followed by genre
    #[default]
    TitleGenre,
    /// Genre, director, then overview
    GenreDirectorOverview,
}

impl FeatureFields {
    /// Fields in concatenation order
    pub fn fields(&self) -> &'static [MovieField] {
        match self {
            FeatureFields::TitleGenre => &[MovieField::Title, MovieField::Genre],
            FeatureFields::GenreDirectorOverview => &[
                MovieField::Genre,
                MovieField::Director,
                MovieField::Overview,
            ],
        }
    }

    /// Kebab-case name
    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureFields::TitleGenre => "title-genre",
            FeatureFields::GenreDirectorOverview => "genre-director-overview",
        }
    }
}

impl fmt::Display for FeatureFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeatureFields {
    type Err = RecommendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "title-genre" => Ok(FeatureFields::TitleGenre),
            "genre-director-overview" => Ok(FeatureFields::GenreDirectorOverview),
            other => Err(RecommendError::Config(format!(
                "unknown feature preset {other:?} (expected title-genre or genre-director-overview)"
            ))),
        }
    }
}

/// Concatenates the configured fields of a record with a separator
#[derive(Debug, Clone)]
pub struct FeatureCombiner {
    fields: Vec<MovieField>,
    separator: String,
}

impl FeatureCombiner {
    /// Combiner for a preset
    pub fn new(preset: FeatureFields, separator: impl Into<String>) -> Self {
        Self::with_fields(preset.fields().to_vec(), separator)
    }

    /// Combiner for an explicit field list
    pub fn with_fields(fields: Vec<MovieField>, separator: impl Into<String>) -> Self {
        Self {
            fields,
            separator: separator.into(),
        }
    }

    /// Combined text of one record
    pub fn combine(&self, record: &MovieRecord) -> String {
        self.fields
            .iter()
            .map(|field| record.field(*field))
            .collect::<Vec<_>>()
            .join(&self.separator)
    }

    /// Combined text of every record, in order
    pub fn combine_all<'a, I>(&self, records: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a MovieRecord>,
    {
        records.into_iter().map(|r| self.combine(r)).collect()
    }
}
