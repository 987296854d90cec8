//! Movie Module
//!
//! The catalogue data model:
//! - `MovieRecord`: one immutable row
//! - `Corpus`: the ordered, read-only sequence of records
//! - CSV loading with cell coercion

mod corpus;
mod record;

pub use corpus::{Corpus, CorpusStats};
pub use record::{MovieField, MovieRecord, MAX_CAST};
