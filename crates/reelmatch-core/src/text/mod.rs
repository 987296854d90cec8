//! Text Module
//!
//! Tokenisation and stop-word filtering shared by the vectorizer and the
//! intent classifier.

mod stopwords;
mod tokenize;

pub use stopwords::{StopWords, ENGLISH_STOP_WORDS};
pub use tokenize::{analyze, query_tokens, MIN_TOKEN_CHARS};
