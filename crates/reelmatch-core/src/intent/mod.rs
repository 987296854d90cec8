//! # Intent Classification
//!
//! Maps a free-text request onto one of a fixed set of intents that the
//! keyword pipeline knows how to answer.
//!
//! ## Rules
//!
//! Rules run in priority order and the first match wins:
//!
//! 1. **genre**: a token is a known genre
//! 2. **director**: "director"/"by" plus a person name
//! 3. **actor**: "actor"/"starring"/"with" plus a person name
//! 4. **year-after**: "after" plus a number
//! 5. **year-before**: "before" plus a number
//! 6. **rating-above**: "rating"/"above" plus a number
//! 7. **random**: "random"/"suggest"
//! 8. **top**: "top"/"best"
//!
//! Anything else is [`Intent::Unknown`]. A director or actor keyword without
//! a recognisable name falls through to the later rules. The numeric rules
//! take the first number after their keyword, so "top 10 films after 2010"
//! asks for 2010 onwards.
//!
//! ## Example
//!
//! ```
//! use reelmatch_core::intent::{Intent, IntentClassifier};
//!
//! let classifier = IntentClassifier::default();
//! assert_eq!(
//!     classifier.classify("Films after 2010"),
//!     Intent::YearAfter("2010".to_string())
//! );
//! assert_eq!(classifier.classify("hello there"), Intent::Unknown);
//! ```

mod entities;

pub use entities::{
    CapitalizedNameExtractor, ChainedExtractor, EntityExtractor, GazetteerExtractor,
};

use serde::{Deserialize, Serialize};

use crate::text::query_tokens;

/// Genres recognised by the genre rule (lower-case)
pub const GENRE_VOCABULARY: &[&str] = &[
    "action",
    "adventure",
    "animation",
    "biography",
    "comedy",
    "crime",
    "documentary",
    "drama",
    "family",
    "fantasy",
    "film-noir",
    "history",
    "horror",
    "music",
    "musical",
    "mystery",
    "romance",
    "sci-fi",
    "sport",
    "thriller",
    "war",
    "western",
];

const DIRECTOR_KEYWORDS: &[&str] = &["director", "by"];
const ACTOR_KEYWORDS: &[&str] = &["actor", "starring", "with"];
const AFTER_KEYWORDS: &[&str] = &["after"];
const BEFORE_KEYWORDS: &[&str] = &["before"];
const RATING_KEYWORDS: &[&str] = &["rating", "above"];
const RANDOM_KEYWORDS: &[&str] = &["random", "suggest"];
const TOP_KEYWORDS: &[&str] = &["top", "best"];

// ============================================================================
// INTENT
// ============================================================================

/// What the user is asking for
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "intent", content = "value", rename_all = "snake_case")]
pub enum Intent {
    /// Records whose genre contains the value
    Genre(String),
    /// Records directed by the named person
    Director(String),
    /// Records whose cast includes the named person
    Actor(String),
    /// Records released in or after the year
    YearAfter(String),
    /// Records released in or before the year
    YearBefore(String),
    /// Records rated at least the value
    RatingAbove(String),
    /// One record chosen at random
    Random,
    /// Highest-rated records overall
    Top,
    /// Nothing recognised
    Unknown,
}

impl Intent {
    /// Extracted entity, when the intent carries one
    pub fn entity(&self) -> Option<&str> {
        match self {
            Self::Genre(v)
            | Self::Director(v)
            | Self::Actor(v)
            | Self::YearAfter(v)
            | Self::YearBefore(v)
            | Self::RatingAbove(v) => Some(v),
            Self::Random | Self::Top | Self::Unknown => None,
        }
    }

    /// Short kind name, without the entity
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Genre(_) => "genre",
            Self::Director(_) => "director",
            Self::Actor(_) => "actor",
            Self::YearAfter(_) => "year-after",
            Self::YearBefore(_) => "year-before",
            Self::RatingAbove(_) => "rating-above",
            Self::Random => "random",
            Self::Top => "top",
            Self::Unknown => "unknown",
        }
    }

    /// Whether the classifier recognised the input
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// Human-readable description
    pub fn description(&self) -> String {
        match self {
            Self::Genre(g) => format!("{} movies", g),
            Self::Director(d) => format!("movies directed by {}", d),
            Self::Actor(a) => format!("movies starring {}", a),
            Self::YearAfter(y) => format!("movies released in or after {}", y),
            Self::YearBefore(y) => format!("movies released in or before {}", y),
            Self::RatingAbove(r) => format!("movies rated {} or higher", r),
            Self::Random => "a random movie".to_string(),
            Self::Top => "the top-rated movies".to_string(),
            Self::Unknown => "an unrecognised request".to_string(),
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.entity() {
            Some(entity) => write!(f, "{}({})", self.kind(), entity),
            None => f.write_str(self.kind()),
        }
    }
}

// ============================================================================
// QUERY CONTEXT
// ============================================================================

/// Pre-processed input shared by every rule
#[derive(Debug, Clone)]
pub struct QueryContext {
    /// Input as typed
    pub original: String,
    /// Lower-cased whitespace tokens with edge punctuation removed
    pub tokens: Vec<String>,
    /// First token that parses as a number, as written
    pub number: Option<String>,
    /// Person name found by the extractor
    pub person: Option<String>,
}

impl QueryContext {
    /// Tokenise the input and run the extractor once
    pub fn new(input: &str, extractor: &dyn EntityExtractor) -> Self {
        let tokens = query_tokens(input);
        let number = tokens.iter().find(|t| is_number(t)).cloned();
        let person = extractor.extract_person(input);

        Self {
            original: input.to_string(),
            tokens,
            number,
            person,
        }
    }

    /// Whether any token equals one of the keywords
    pub fn has_any(&self, keywords: &[&str]) -> bool {
        self.tokens.iter().any(|t| keywords.contains(&t.as_str()))
    }

    /// First number following any of the keywords, else the first number
    /// anywhere in the input
    pub fn number_after(&self, keywords: &[&str]) -> Option<String> {
        self.tokens
            .iter()
            .enumerate()
            .filter(|(_, t)| keywords.contains(&t.as_str()))
            .find_map(|(i, _)| self.tokens[i + 1..].iter().find(|t| is_number(t)))
            .cloned()
            .or_else(|| self.number.clone())
    }
}

fn is_number(token: &str) -> bool {
    token.parse::<f64>().is_ok_and(f64::is_finite)
}

// ============================================================================
// RULES
// ============================================================================

/// A named predicate producing an intent
#[allow(clippy::type_complexity)]
pub struct IntentRule {
    name: &'static str,
    matcher: Box<dyn Fn(&QueryContext) -> Option<Intent> + Send + Sync>,
}

impl IntentRule {
    /// Rule from a name and matcher
    pub fn new(
        name: &'static str,
        matcher: impl Fn(&QueryContext) -> Option<Intent> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name,
            matcher: Box::new(matcher),
        }
    }

    /// Rule name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Apply the rule
    pub fn apply(&self, context: &QueryContext) -> Option<Intent> {
        (self.matcher)(context)
    }
}

impl std::fmt::Debug for IntentRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntentRule").field("name", &self.name).finish()
    }
}

/// Keyword-and-entity classifier with an ordered rule list
#[derive(Debug)]
pub struct IntentClassifier {
    rules: Vec<IntentRule>,
    extractor: Box<dyn EntityExtractor>,
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new(CapitalizedNameExtractor::new())
    }
}

impl IntentClassifier {
    /// Classifier using the given person-name extractor
    pub fn new(extractor: impl EntityExtractor + 'static) -> Self {
        Self::with_boxed_extractor(Box::new(extractor))
    }

    /// Classifier from an already boxed extractor
    pub fn with_boxed_extractor(extractor: Box<dyn EntityExtractor>) -> Self {
        Self {
            rules: Self::build_rules(),
            extractor,
        }
    }

    /// Classify the input; first matching rule wins
    pub fn classify(&self, input: &str) -> Intent {
        let context = QueryContext::new(input, self.extractor.as_ref());

        for rule in &self.rules {
            if let Some(intent) = rule.apply(&context) {
                tracing::debug!(rule = rule.name(), intent = %intent, "Classified input");
                return intent;
            }
        }

        tracing::debug!(input, "No intent rule matched");
        Intent::Unknown
    }

    /// Rules in priority order
    pub fn rules(&self) -> &[IntentRule] {
        &self.rules
    }

    /// Name of the configured extractor
    pub fn extractor_name(&self) -> &str {
        self.extractor.name()
    }

    fn build_rules() -> Vec<IntentRule> {
        vec![
            IntentRule::new("genre", |ctx| {
                ctx.tokens
                    .iter()
                    .find(|t| GENRE_VOCABULARY.contains(&t.as_str()))
                    .map(|t| Intent::Genre(t.clone()))
            }),
            IntentRule::new("director", |ctx| {
                if !ctx.has_any(DIRECTOR_KEYWORDS) {
                    return None;
                }
                ctx.person.clone().map(Intent::Director)
            }),
            IntentRule::new("actor", |ctx| {
                if !ctx.has_any(ACTOR_KEYWORDS) {
                    return None;
                }
                ctx.person.clone().map(Intent::Actor)
            }),
            IntentRule::new("year-after", |ctx| {
                if !ctx.has_any(AFTER_KEYWORDS) {
                    return None;
                }
                ctx.number_after(AFTER_KEYWORDS).map(Intent::YearAfter)
            }),
            IntentRule::new("year-before", |ctx| {
                if !ctx.has_any(BEFORE_KEYWORDS) {
                    return None;
                }
                ctx.number_after(BEFORE_KEYWORDS).map(Intent::YearBefore)
            }),
            IntentRule::new("rating-above", |ctx| {
                if !ctx.has_any(RATING_KEYWORDS) {
                    return None;
                }
                ctx.number_after(RATING_KEYWORDS).map(Intent::RatingAbove)
            }),
            IntentRule::new("random", |ctx| {
                ctx.has_any(RANDOM_KEYWORDS).then_some(Intent::Random)
            }),
            IntentRule::new("top", |ctx| ctx.has_any(TOP_KEYWORDS).then_some(Intent::Top)),
        ]
    }
}
