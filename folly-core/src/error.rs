//! Error types for the Easter Folly core library.

use thiserror::Error;

/// Top-level error type for all Easter Folly rule operations.
#[derive(Error, Debug)]
pub enum FollyError {
    /// A field update addressed a position past the end of the record.
    #[error("Field index {index} out of bounds for record with {field_count} fields")]
    FieldOutOfBounds {
        /// Position that was addressed.
        index: usize,
        /// Number of fields the record actually has.
        field_count: usize,
    },

    /// No localized gift line exists for the recipient.
    #[error("Missing localized dialogue: {key}")]
    MissingDialogue {
        /// Translation key that was looked up.
        key: String,
    },

    /// The host relationship table has no record for the recipient.
    #[error("Relationship record not found: {key}")]
    RecordNotFound {
        /// Recipient key that was looked up.
        key: String,
    },

    /// The translation table could not be parsed.
    #[error("Translation error: {0}")]
    Translation(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type alias.
pub type Result<T> = std::result::Result<T, FollyError>;
