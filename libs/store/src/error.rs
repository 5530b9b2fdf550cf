//! Storage error types.

use pass_records::RecordError;
use thiserror::Error;

/// Storage operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to connect to the database.
    #[error("failed to connect to database: {0}")]
    Connect(#[source] sqlx::Error),

    /// Failed to execute a query.
    #[error("query failed: {0}")]
    Query(#[source] sqlx::Error),

    /// A persisted row holds a value the records layer cannot decode.
    ///
    /// This is a data-corruption condition, not a normal state; it is
    /// reported loudly at the point of read.
    #[error("data integrity violation in row '{id}': {source}")]
    DataIntegrity {
        id: String,
        #[source]
        source: RecordError,
    },

    /// Optimistic-lock conflict: the row was updated (or deleted) since the
    /// given version was read.
    #[error("version conflict on row '{id}': version {expected} is stale")]
    VersionConflict { id: String, expected: i64 },

    /// The operation requires a persisted identity but the record has none.
    #[error("record has no identity; it has never been persisted")]
    MissingIdentity,
}
