//! Storage layer for viewer-count.
//!
//! Read-only access to the `viewers(id, name, count)` table. The HTTP layer
//! talks to the [`ViewerStore`] trait; [`PgStorage`] is the PostgreSQL
//! implementation backed by a sqlx pool.

mod error;
mod pg_storage;
pub mod traits;

pub use error::StorageError;
pub use pg_storage::{PgStorage, count_sql};
pub use traits::{CountCursor, CountRow, ViewerStore};
