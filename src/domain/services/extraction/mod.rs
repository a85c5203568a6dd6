//! Fact extraction
//!
//! `rules` holds the individual pattern rules; `FactExtractor` applies the
//! rules that fit a file's language family and assembles a `ProjectFact`.

mod extractor;
pub mod rules;

pub use extractor::FactExtractor;
