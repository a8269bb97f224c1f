use std::sync::Arc;

use viewer_count_core::ViewerFilter;
use viewer_count_storage::ViewerStore;

use crate::ServiceError;
use crate::aggregate::aggregate_counts;

/// Resolves a filter against the store and folds the result into one number.
pub struct CountService {
    store: Arc<dyn ViewerStore>,
}

impl CountService {
    #[must_use]
    pub fn new(store: Arc<dyn ViewerStore>) -> Self {
        Self { store }
    }

    /// Total viewer count for `filter`.
    ///
    /// An id lookup with no matching row is [`ServiceError::NotFound`]; a name
    /// or unfiltered query with no rows is a valid zero.
    pub async fn count(&self, filter: &ViewerFilter) -> Result<i64, ServiceError> {
        let cursor = self.store.query_counts(filter).await?;
        let total = aggregate_counts(cursor).await?;
        tracing::debug!(%filter, rows = total.rows, total = total.total, "aggregated viewer count");
        match (filter, total.rows) {
            (ViewerFilter::Id(id), 0) => Err(ServiceError::NotFound(*id)),
            _ => Ok(total.total),
        }
    }

    pub async fn ping(&self) -> Result<(), ServiceError> {
        Ok(self.store.ping().await?)
    }
}
