//! Person-name extraction for the director and actor intents.
//!
//! Extraction sits behind [`EntityExtractor`] so the classifier does not
//! care whether names come from a gazetteer, a regex, or a real NER model.

use std::collections::HashMap;

use regex::Regex;

use crate::movie::Corpus;

/// Minimum length of a gazetteer name or surname
const MIN_NAME_CHARS: usize = 4;

/// Words that open a capitalised run but are never part of a name
const NON_NAME_WORDS: &[&str] = &[
    "a", "actor", "actress", "all", "any", "best", "by", "directed", "director", "film",
    "films", "find", "give", "i", "me", "movie", "movies", "recommend", "show", "some",
    "starring", "suggest", "the", "top", "want", "what", "with",
];

/// Words joining two names in one capitalised run
const CONNECTOR_WORDS: &[&str] = &["and", "or", "&", "plus"];

/// Capitalised word runs; a segment of two or more words makes a name
const CAPITALIZED_RUN: &str = r"\p{Lu}[\p{Ll}'’.\-]*(?:\s+\p{Lu}[\p{Ll}'’.\-]*)+";

// ============================================================================
// TRAIT
// ============================================================================

/// Finds a person name in free-text input
pub trait EntityExtractor: std::fmt::Debug + Send + Sync {
    /// Short name for logging
    fn name(&self) -> &str;

    /// First person name found in the input, if any
    fn extract_person(&self, input: &str) -> Option<String>;
}

// ============================================================================
// GAZETTEER
// ============================================================================

/// Matches director and cast names known to the corpus, case-insensitively.
///
/// Full names are tried longest first. A surname also matches when exactly
/// one person in the corpus carries it ("movies by nolan").
#[derive(Debug, Clone, Default)]
pub struct GazetteerExtractor {
    /// (lower-cased name, display name), longest first
    names: Vec<(String, String)>,
    /// lower-cased surname -> display name, unique surnames only
    surnames: HashMap<String, String>,
}

impl GazetteerExtractor {
    /// Gazetteer from explicit names
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen: HashMap<String, String> = HashMap::new();
        for name in names {
            let display = name.as_ref().trim();
            if display.chars().count() < MIN_NAME_CHARS {
                continue;
            }
            seen.entry(display.to_lowercase())
                .or_insert_with(|| display.to_string());
        }

        let mut surname_counts: HashMap<String, (usize, String)> = HashMap::new();
        for (lower, display) in &seen {
            if let Some(surname) = lower.split_whitespace().last() {
                if surname.chars().count() >= MIN_NAME_CHARS && surname != lower {
                    let entry = surname_counts
                        .entry(surname.to_string())
                        .or_insert((0, display.clone()));
                    entry.0 += 1;
                }
            }
        }
        let surnames = surname_counts
            .into_iter()
            .filter(|(_, (count, _))| *count == 1)
            .map(|(surname, (_, display))| (surname, display))
            .collect();

        let mut names: Vec<(String, String)> = seen.into_iter().collect();
        names.sort_by(|a, b| {
            b.0.chars()
                .count()
                .cmp(&a.0.chars().count())
                .then_with(|| a.0.cmp(&b.0))
        });

        Self { names, surnames }
    }

    /// Gazetteer of every director and cast name in the corpus
    pub fn from_corpus(corpus: &Corpus) -> Self {
        Self::new(corpus.iter().flat_map(|record| {
            std::iter::once(record.director.as_str())
                .chain(record.cast.iter().map(String::as_str))
        }))
    }

    /// Number of distinct full names
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True when no names are known
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl EntityExtractor for GazetteerExtractor {
    fn name(&self) -> &str {
        "gazetteer"
    }

    fn extract_person(&self, input: &str) -> Option<String> {
        let lower = input.to_lowercase();

        if let Some((_, display)) = self
            .names
            .iter()
            .find(|(name, _)| contains_phrase(&lower, name))
        {
            return Some(display.clone());
        }

        lower
            .split(|c: char| !c.is_alphanumeric() && c != '\'' && c != '-')
            .find_map(|word| self.surnames.get(word).cloned())
    }
}

// ============================================================================
// CAPITALISED NAMES
// ============================================================================

/// Treats a run of two or more capitalised words as a person name
#[derive(Debug, Clone)]
pub struct CapitalizedNameExtractor {
    pattern: Option<Regex>,
}

impl CapitalizedNameExtractor {
    /// Extractor with the built-in pattern
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(CAPITALIZED_RUN).ok(),
        }
    }
}

impl Default for CapitalizedNameExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityExtractor for CapitalizedNameExtractor {
    fn name(&self) -> &str {
        "capitalized"
    }

    fn extract_person(&self, input: &str) -> Option<String> {
        let pattern = self.pattern.as_ref()?;

        pattern.find_iter(input).find_map(|m| {
            m.as_str()
                .split_whitespace()
                .collect::<Vec<_>>()
                .split(|w| {
                    let lower = w.to_lowercase();
                    NON_NAME_WORDS.contains(&lower.as_str())
                        || CONNECTOR_WORDS.contains(&lower.as_str())
                })
                .find(|segment| segment.len() >= 2)
                .map(|segment| segment.join(" "))
        })
    }
}

// ============================================================================
// CHAIN
// ============================================================================

/// Tries each extractor in order; first hit wins
#[derive(Debug, Default)]
pub struct ChainedExtractor {
    extractors: Vec<Box<dyn EntityExtractor>>,
}

impl ChainedExtractor {
    /// Empty chain (never finds a name)
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an extractor
    pub fn with(mut self, extractor: impl EntityExtractor + 'static) -> Self {
        self.extractors.push(Box::new(extractor));
        self
    }

    /// Gazetteer from the corpus, then capitalised runs
    pub fn for_corpus(corpus: &Corpus) -> Self {
        Self::new()
            .with(GazetteerExtractor::from_corpus(corpus))
            .with(CapitalizedNameExtractor::new())
    }
}

impl EntityExtractor for ChainedExtractor {
    fn name(&self) -> &str {
        "chain"
    }

    fn extract_person(&self, input: &str) -> Option<String> {
        self.extractors
            .iter()
            .find_map(|extractor| extractor.extract_person(input))
    }
}

/// Whether `phrase` occurs in `text` on word boundaries
fn contains_phrase(text: &str, phrase: &str) -> bool {
    text.match_indices(phrase).any(|(start, _)| {
        let before = text[..start].chars().next_back();
        let after = text[start + phrase.len()..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}
