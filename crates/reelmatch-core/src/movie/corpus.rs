//! Corpus - the ordered, read-only catalogue
//!
//! Loaded once from a comma-delimited file with a header row. Bad cells are
//! coerced to empty strings; only a missing file, a structurally broken file
//! or an absent Title/Genre column is fatal.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::record::{MovieRecord, RawRow};
use crate::error::{RecommendError, Result};

/// Ordered sequence of movie records. Row position is the record identity.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    records: Vec<MovieRecord>,
}

impl Corpus {
    /// Build a corpus from records already in memory. Indices are reassigned
    /// to match position.
    pub fn from_records(records: Vec<MovieRecord>) -> Self {
        let records = records
            .into_iter()
            .enumerate()
            .map(|(index, mut record)| {
                record.index = index;
                record
            })
            .collect();
        Self { records }
    }

    /// Load a catalogue file from disk
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let corpus = Self::from_reader(file)?;
        info!(
            path = %path.display(),
            records = corpus.len(),
            "Catalogue loaded"
        );
        Ok(corpus)
    }

    /// Load a catalogue from any reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        require_column(&headers, &RawRow::TITLE_COLUMNS)?;
        require_column(&headers, &RawRow::GENRE_COLUMNS)?;
        debug!(columns = headers.len(), "Catalogue header validated");

        let mut records = Vec::new();
        let mut coerced = 0usize;

        for (row, result) in reader.byte_records().enumerate() {
            let mut string_record = csv::StringRecord::from_byte_record_lossy(result?);
            if string_record.len() < headers.len() {
                coerced += 1;
                while string_record.len() < headers.len() {
                    string_record.push_field("");
                }
            }

            let raw = match string_record.deserialize::<RawRow>(Some(&headers)) {
                Ok(raw) => raw,
                Err(e) => {
                    // Keep the row position so indices stay aligned with the file.
                    warn!(row, error = %e, "Coercing malformed row to empty fields");
                    coerced += 1;
                    RawRow::default()
                }
            };
            records.push(MovieRecord::from_raw(records.len(), raw));
        }

        if coerced > 0 {
            warn!(coerced, "Some catalogue rows had missing or malformed cells");
        }

        Ok(Self { records })
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the corpus has no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at a row position
    pub fn get(&self, index: usize) -> Option<&MovieRecord> {
        self.records.get(index)
    }

    /// All records in corpus order
    pub fn records(&self) -> &[MovieRecord] {
        &self.records
    }

    /// Iterate records in corpus order
    pub fn iter(&self) -> std::slice::Iter<'_, MovieRecord> {
        self.records.iter()
    }

    /// Row position of a title. Case-insensitive and whitespace-trimmed;
    /// the first match in corpus order wins.
    pub fn find_title(&self, title: &str) -> Option<usize> {
        let wanted = title.trim().to_lowercase();
        if wanted.is_empty() {
            return None;
        }
        self.records
            .iter()
            .position(|r| r.title.trim().to_lowercase() == wanted)
    }

    /// Summary counts for display
    pub fn stats(&self) -> CorpusStats {
        let rated: Vec<f64> = self.records.iter().filter_map(MovieRecord::rating).collect();
        let years: Vec<i32> = self.records.iter().filter_map(MovieRecord::year).collect();

        CorpusStats {
            total_records: self.records.len(),
            rated_records: rated.len(),
            dated_records: years.len(),
            average_rating: if rated.is_empty() {
                None
            } else {
                Some(rated.iter().sum::<f64>() / rated.len() as f64)
            },
            earliest_year: years.iter().copied().min(),
            latest_year: years.iter().copied().max(),
            vocabulary_size: 0,
        }
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a MovieRecord;
    type IntoIter = std::slice::Iter<'a, MovieRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Corpus statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorpusStats {
    /// Total records
    pub total_records: usize,
    /// Records with a numeric rating
    pub rated_records: usize,
    /// Records with a numeric release year
    pub dated_records: usize,
    /// Mean rating over rated records
    pub average_rating: Option<f64>,
    /// Earliest numeric release year
    pub earliest_year: Option<i32>,
    /// Latest numeric release year
    pub latest_year: Option<i32>,
    /// Fitted vocabulary size (0 until a vectorizer is fitted)
    pub vocabulary_size: usize,
}

fn require_column(headers: &csv::StringRecord, accepted: &[&str]) -> Result<()> {
    if headers.iter().any(|h| accepted.contains(&h)) {
        Ok(())
    } else {
        Err(RecommendError::MissingColumn(accepted[0].to_string()))
    }
}
