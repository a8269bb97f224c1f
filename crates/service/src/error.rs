//! Typed error enums for the service layer.

use viewer_count_storage::StorageError;
use thiserror::Error;

/// Failure while folding a cursor into a total.
#[derive(Debug, Error)]
pub enum AggregateError {
    /// A row's `count` column could not be decoded.
    #[error("failed to decode row {row}: {source}")]
    Decode {
        row: u64,
        #[source]
        source: StorageError,
    },

    /// The cursor itself failed (e.g. connection dropped mid-stream).
    #[error("cursor terminated after {rows} rows: {source}")]
    Cursor {
        rows: u64,
        #[source]
        source: StorageError,
    },

    /// The running total no longer fits in an `i64`.
    #[error("total overflowed after {rows} rows")]
    Overflow { rows: u64 },
}

/// Service-layer error unifying storage and aggregation failures.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The count query could not be executed.
    #[error("query failed: {0}")]
    Storage(#[from] StorageError),

    /// Reading the query results failed.
    #[error("aggregation failed: {0}")]
    Aggregate(#[from] AggregateError),

    /// An id lookup matched no rows.
    #[error("no viewer with id {0}")]
    NotFound(i64),
}

impl ServiceError {
    /// Whether this error represents a not-found condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Whether this error is likely transient (worth retrying).
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Storage(e) | Self::Aggregate(AggregateError::Cursor { source: e, .. }) => {
                e.is_transient()
            },
            _ => false,
        }
    }
}
