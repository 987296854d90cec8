//! Movie Record - one row of the catalogue
//!
//! Every text cell is kept verbatim (missing cells become empty strings).
//! Release year and rating are additionally parsed into numerics; a cell that
//! does not parse yields `None` and the record simply never passes a numeric
//! filter.

use serde::{Deserialize, Serialize};

/// Maximum number of cast names carried per record
pub const MAX_CAST: usize = 4;

// ============================================================================
// RAW ROW (serde target for the CSV reader)
// ============================================================================

/// Header-mapped row as read from disk. Accepts both the short column names
/// and the IMDB-export names.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct RawRow {
    #[serde(default, rename = "Title", alias = "Series_Title", alias = "title")]
    pub(crate) title: String,
    #[serde(default, rename = "Genre", alias = "genre", alias = "Genres")]
    pub(crate) genre: String,
    #[serde(default, rename = "Director", alias = "director")]
    pub(crate) director: String,
    #[serde(default, rename = "Star1")]
    pub(crate) star1: String,
    #[serde(default, rename = "Star2")]
    pub(crate) star2: String,
    #[serde(default, rename = "Star3")]
    pub(crate) star3: String,
    #[serde(default, rename = "Star4")]
    pub(crate) star4: String,
    #[serde(default, rename = "Released_Year", alias = "Year", alias = "year")]
    pub(crate) released_year: String,
    #[serde(default, rename = "IMDB_Rating", alias = "Rating", alias = "rating")]
    pub(crate) rating: String,
    #[serde(default, rename = "Overview", alias = "overview")]
    pub(crate) overview: String,
    #[serde(default, rename = "Poster_Link", alias = "Poster", alias = "poster")]
    pub(crate) poster: String,
    #[serde(default, rename = "Certificate")]
    pub(crate) certificate: String,
    #[serde(default, rename = "Runtime")]
    pub(crate) runtime: String,
    #[serde(default, rename = "Meta_score")]
    pub(crate) meta_score: String,
    #[serde(default, rename = "No_of_Votes")]
    pub(crate) votes: String,
    #[serde(default, rename = "Gross")]
    pub(crate) gross: String,
}

impl RawRow {
    /// Header names accepted for the required columns
    pub(crate) const TITLE_COLUMNS: [&'static str; 3] = ["Title", "Series_Title", "title"];
    pub(crate) const GENRE_COLUMNS: [&'static str; 3] = ["Genre", "genre", "Genres"];
}

// ============================================================================
// MOVIE RECORD
// ============================================================================

/// A single catalogue entry, identified by its row position in the corpus
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieRecord {
    /// Row position in the corpus
    pub index: usize,
    /// Display title
    pub title: String,
    /// Genre cell, usually comma separated ("Action, Sci-Fi")
    pub genre: String,
    /// Director name
    pub director: String,
    /// Up to four cast names, empty cells removed
    pub cast: Vec<String>,
    /// Raw release year cell
    pub released_year: String,
    /// Raw rating cell
    pub rating_text: String,
    /// Plot overview
    pub overview: String,
    /// Poster reference (URL or path)
    pub poster: String,
    /// Age certificate, when the export carries one
    pub certificate: String,
    /// Runtime cell ("142 min")
    pub runtime: String,
    /// Critic meta score cell
    pub meta_score: String,
    /// Vote count cell
    pub votes: String,
    /// Box office cell
    pub gross: String,
}

impl MovieRecord {
    /// Build a record from a title and genre; every other field empty
    pub fn new(index: usize, title: impl Into<String>, genre: impl Into<String>) -> Self {
        Self {
            index,
            title: title.into(),
            genre: genre.into(),
            director: String::new(),
            cast: Vec::new(),
            released_year: String::new(),
            rating_text: String::new(),
            overview: String::new(),
            poster: String::new(),
            certificate: String::new(),
            runtime: String::new(),
            meta_score: String::new(),
            votes: String::new(),
            gross: String::new(),
        }
    }

    /// Set the director
    pub fn with_director(mut self, director: impl Into<String>) -> Self {
        self.director = director.into();
        self
    }

    /// Set the cast, keeping at most [`MAX_CAST`] non-empty names
    pub fn with_cast<I, S>(mut self, cast: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cast = cast
            .into_iter()
            .map(Into::<String>::into)
            .filter(|name| !name.trim().is_empty())
            .take(MAX_CAST)
            .collect();
        self
    }

    /// Set the raw release year cell
    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.released_year = year.into();
        self
    }

    /// Set the raw rating cell
    pub fn with_rating(mut self, rating: impl Into<String>) -> Self {
        self.rating_text = rating.into();
        self
    }

    /// Set the overview
    pub fn with_overview(mut self, overview: impl Into<String>) -> Self {
        self.overview = overview.into();
        self
    }

    /// Set the poster reference
    pub fn with_poster(mut self, poster: impl Into<String>) -> Self {
        self.poster = poster.into();
        self
    }

    pub(crate) fn from_raw(index: usize, raw: RawRow) -> Self {
        let mut record = Self::new(index, raw.title, raw.genre)
            .with_director(raw.director)
            .with_cast([raw.star1, raw.star2, raw.star3, raw.star4])
            .with_year(raw.released_year)
            .with_rating(raw.rating)
            .with_overview(raw.overview)
            .with_poster(raw.poster);
        record.certificate = raw.certificate;
        record.runtime = raw.runtime;
        record.meta_score = raw.meta_score;
        record.votes = raw.votes;
        record.gross = raw.gross;
        record
    }

    /// Parsed release year, `None` when the cell is not a whole number
    pub fn year(&self) -> Option<i32> {
        self.released_year.trim().parse().ok()
    }

    /// Parsed rating, `None` when the cell is not a finite number
    pub fn rating(&self) -> Option<f64> {
        self.rating_text
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|r| r.is_finite())
    }

    /// Text of the named field, used by the feature combiner
    pub fn field(&self, field: MovieField) -> String {
        match field {
            MovieField::Title => self.title.clone(),
            MovieField::Genre => self.genre.clone(),
            MovieField::Director => self.director.clone(),
            MovieField::Cast => self.cast.join(" "),
            MovieField::Overview => self.overview.clone(),
        }
    }
}

/// Text fields that can feed the similarity pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovieField {
    /// Title
    Title,
    /// Genre cell
    Genre,
    /// Director
    Director,
    /// All cast names, space separated
    Cast,
    /// Plot overview
    Overview,
}
