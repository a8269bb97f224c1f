//! Folds a count cursor into a single total.

use futures_util::StreamExt;
use viewer_count_storage::CountCursor;

use crate::error::AggregateError;

/// Sum of `count` over the rows a cursor produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountTotal {
    pub total: i64,
    /// Number of rows folded into `total`.
    pub rows: u64,
}

/// Drain `cursor`, summing each row's `count`.
///
/// Stops at the first failing row or cursor error and discards the partial
/// total. The cursor is consumed, so it is released when this returns on
/// every path.
pub async fn aggregate_counts(mut cursor: CountCursor) -> Result<CountTotal, AggregateError> {
    let mut acc = CountTotal::default();
    while let Some(item) = cursor.next().await {
        let row = item.map_err(|source| AggregateError::Cursor { rows: acc.rows, source })?;
        let count =
            row.count().map_err(|source| AggregateError::Decode { row: acc.rows, source })?;
        acc.total =
            acc.total.checked_add(count).ok_or(AggregateError::Overflow { rows: acc.rows })?;
        acc.rows += 1;
    }
    Ok(acc)
}
