//! Error types for record conversion.

use thiserror::Error;

/// Errors that can occur when decoding persisted record fields.
///
/// Every variant is a data-corruption condition: the persisted value does
/// not correspond to anything this records layer can represent. Callers
/// must surface these, never substitute a default.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// The persisted event type tag is not a recognized member.
    #[error("unknown event type tag: '{0}'")]
    UnknownEventType(String),

    /// The persisted performer role tag is not a recognized member.
    #[error("unknown performer role tag: '{0}'")]
    UnknownPerformerRole(String),

    /// The persisted performed_date value is not a valid RFC 3339 timestamp.
    #[error("invalid performed_date timestamp '{value}': {reason}")]
    InvalidTimestamp { value: String, reason: String },

    /// A persisted record or relation ID failed to parse.
    #[error("invalid record ID: {0}")]
    InvalidId(#[from] pass_id::IdError),
}
