//! Storage trait abstraction.
//!
//! The handler never sees sqlx types: a query hands back a [`CountCursor`]
//! whose rows decode their own `count` column.

use async_trait::async_trait;
use futures_util::stream::BoxStream;
use viewer_count_core::ViewerFilter;

use crate::error::StorageError;

/// A single result row exposing the `count` column.
pub trait CountRow: Send {
    /// Decode the row's `count` value.
    fn count(&self) -> Result<i64, StorageError>;
}

/// Row cursor over a count query.
///
/// Owns its connection for as long as it lives; dropping the cursor releases
/// the connection back to the pool, on every exit path.
pub type CountCursor = BoxStream<'static, Result<Box<dyn CountRow>, StorageError>>;

/// Read access to the `viewers` table.
#[async_trait]
pub trait ViewerStore: Send + Sync {
    /// Run the count query matching `filter` and return a cursor over its rows.
    ///
    /// Fails up front when no connection can be obtained; failures while
    /// reading rows surface as `Err` items on the cursor.
    async fn query_counts(&self, filter: &ViewerFilter) -> Result<CountCursor, StorageError>;

    /// Round-trip to the store to confirm it is reachable.
    async fn ping(&self) -> Result<(), StorageError>;
}
