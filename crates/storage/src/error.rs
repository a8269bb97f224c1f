//! Typed error enum for the storage layer.
//!
//! Lets callers tell a broken row apart from a broken connection instead of
//! downcasting an opaque error.

use thiserror::Error;

/// Storage-layer error.
#[derive(Debug, Error)]
pub enum StorageError {
    /// SQL / connection / timeout failure.
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),

    /// A row was returned but its `count` column could not be read as an integer.
    #[error("failed to decode column {column}: {source}")]
    Decode {
        column: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

impl StorageError {
    /// Whether this error is likely transient (worth retrying by the caller).
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Database(sqlx::Error::PoolTimedOut | sqlx::Error::Io(_)))
    }
}

/// Custom `From<sqlx::Error>`, NOT blanket `#[from]`.
///
/// - column decode failures → `Decode`
/// - everything else → `Database`
impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::ColumnNotFound(_)
            | sqlx::Error::ColumnIndexOutOfBounds { .. }
            | sqlx::Error::Decode(_) => Self::Decode { column: "count", source: err },
            _ => Self::Database(err),
        }
    }
}
