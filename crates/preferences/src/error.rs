//! Error types for the preferences crate.
//!
//! Extraction itself never fails; only compiling the recognition patterns
//! from a lexicon can.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatternError {
    /// A generated pattern failed to compile
    #[error("Failed to compile {pattern} pattern: {source}")]
    Compile {
        pattern: &'static str,
        #[source]
        source: regex::Error,
    },

    /// The lexicon has no synonyms to build the genre alternation from
    #[error("Genre lexicon is empty")]
    EmptyLexicon,
}

pub type Result<T> = std::result::Result<T, PatternError>;
