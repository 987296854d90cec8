//! Rating order, top-N selection and random picks.

use std::cmp::Ordering;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::config::DEFAULT_TOP_N;
use crate::movie::{Corpus, MovieRecord};

/// Orders filtered records by rating, best first
#[derive(Debug, Clone, Copy)]
pub struct Sorter {
    limit: usize,
}

impl Default for Sorter {
    fn default() -> Self {
        Self::new(DEFAULT_TOP_N)
    }
}

impl Sorter {
    /// Sorter keeping `limit` records
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    /// Configured result count
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Stable sort by rating descending, unrated last, then truncate
    pub fn by_rating<'a>(&self, mut records: Vec<&'a MovieRecord>) -> Vec<&'a MovieRecord> {
        records.sort_by(|a, b| compare_ratings(a.rating(), b.rating()));
        records.truncate(self.limit);
        records
    }

    /// Highest-rated records across the corpus
    pub fn top_rated<'a>(&self, corpus: &'a Corpus) -> Vec<&'a MovieRecord> {
        self.by_rating(corpus.iter().collect())
    }

    /// One record chosen uniformly; `None` only for an empty corpus
    pub fn random_pick<'a, R: Rng + ?Sized>(
        &self,
        corpus: &'a Corpus,
        rng: &mut R,
    ) -> Option<&'a MovieRecord> {
        corpus.records().choose(rng)
    }
}

fn compare_ratings(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
