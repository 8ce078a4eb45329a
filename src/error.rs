//! Error types for the wordbook library

use thiserror::Error;

/// Custom error type for dictionary operations
#[derive(Error, Debug)]
pub enum DictError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Word not found: {0}")]
    NotFound(String),

    #[error("Word must not be empty")]
    EmptyWord,

    #[error("Synonyms must not be empty")]
    EmptySynonym,

    #[error("{field} is too long: {len} characters (maximum {max})")]
    FieldTooLong {
        field: &'static str,
        max: usize,
        len: usize,
    },

    #[error("Too many synonyms: {count} (maximum {max})")]
    TooManySynonyms { max: usize, count: usize },

    #[error("{field} must not contain {ch:?}")]
    ReservedCharacter { field: &'static str, ch: char },

    #[error("Malformed line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },

    #[error("Line pattern error: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Encoding error: {0}")]
    EncodingError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for dictionary operations
pub type Result<T> = std::result::Result<T, DictError>;
