//! Error types for the catalog crate.
//!
//! Loading is the only fallible part of the catalog: once a `Catalog` is
//! built it is read-only and every lookup returns `Option`.

use thiserror::Error;

use crate::types::MovieId;

/// Errors that can occur while building or loading a catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// I/O error occurred while reading or writing a catalog file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// A line in the catalog file couldn't be parsed
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        reason: String,
    },

    /// Expected number of columns doesn't match actual
    #[error("Expected {expected} fields but found {found} in line {line}")]
    FieldCountMismatch {
        expected: usize,
        found: usize,
        line: usize,
    },

    /// Two rows share the same movie id
    #[error("Duplicate movie id {0}")]
    DuplicateId(MovieId),

    /// A movie was supplied without any genre tags
    #[error("Movie {id} ({title}) has no genres")]
    EmptyGenres { id: MovieId, title: String },

    /// Popularity must be a finite number
    #[error("Movie {id} has invalid popularity {value}")]
    InvalidPopularity { id: MovieId, value: f32 },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
