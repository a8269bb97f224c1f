//! In-memory `viewers` table for driving the router without PostgreSQL.

#![allow(dead_code, reason = "not every test binary uses every helper")]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use futures_util::stream;
use tower::ServiceExt;
use viewer_count_core::ViewerFilter;
use viewer_count_http::{AppState, create_router};
use viewer_count_service::CountService;
use viewer_count_storage::{CountCursor, CountRow, StorageError, ViewerStore};

pub struct Viewer {
    pub id: i64,
    pub name: &'static str,
    /// `None` simulates a row whose `count` cannot be decoded.
    pub count: Option<i64>,
}

struct MemRow(Option<i64>);

impl CountRow for MemRow {
    fn count(&self) -> Result<i64, StorageError> {
        self.0.ok_or_else(|| StorageError::from(sqlx::Error::ColumnNotFound("count".to_owned())))
    }
}

struct CursorGuard(Arc<AtomicUsize>);

impl Drop for CursorGuard {
    fn drop(&mut self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

#[derive(Default)]
pub struct MemStore {
    pub viewers: Vec<Viewer>,
    /// Fail every query before a cursor is handed out.
    pub unreachable: bool,
    /// Fail the cursor after yielding its matching rows.
    pub drop_connection_mid_stream: bool,
    pub cursors_opened: AtomicUsize,
    pub cursors_released: Arc<AtomicUsize>,
}

impl MemStore {
    pub fn with_viewers(viewers: Vec<Viewer>) -> Self {
        Self { viewers, ..Self::default() }
    }

    pub fn opened(&self) -> usize {
        self.cursors_opened.load(Ordering::SeqCst)
    }

    pub fn released(&self) -> usize {
        self.cursors_released.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ViewerStore for MemStore {
    async fn query_counts(&self, filter: &ViewerFilter) -> Result<CountCursor, StorageError> {
        if self.unreachable {
            return Err(StorageError::from(sqlx::Error::PoolTimedOut));
        }
        let mut items: Vec<Result<Box<dyn CountRow>, StorageError>> = self
            .viewers
            .iter()
            .filter(|v| match filter {
                ViewerFilter::All => true,
                ViewerFilter::Id(id) => v.id == *id,
                ViewerFilter::Name(name) => v.name == name.as_str(),
            })
            .map(|v| Ok(Box::new(MemRow(v.count)) as Box<dyn CountRow>))
            .collect();
        if self.drop_connection_mid_stream {
            items.push(Err(StorageError::from(sqlx::Error::PoolClosed)));
        }
        self.cursors_opened.fetch_add(1, Ordering::SeqCst);
        let guard = CursorGuard(Arc::clone(&self.cursors_released));
        let rows = items.into_iter().map(move |item| {
            let _held = &guard;
            item
        });
        Ok(Box::pin(stream::iter(rows)))
    }

    async fn ping(&self) -> Result<(), StorageError> {
        if self.unreachable {
            return Err(StorageError::from(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

pub fn sample_viewers() -> Vec<Viewer> {
    vec![
        Viewer { id: 1, name: "alice", count: Some(10) },
        Viewer { id: 2, name: "bob", count: Some(0) },
        Viewer { id: 3, name: "alice", count: Some(5) },
        Viewer { id: 4, name: "carol", count: Some(27) },
    ]
}

pub fn router_for(store: &Arc<MemStore>) -> Router {
    let service = CountService::new(Arc::clone(store) as Arc<dyn ViewerStore>);
    create_router(Arc::new(AppState::new(Arc::new(service))))
}

pub async fn get(router: &Router, uri: &str) -> (StatusCode, String) {
    let response = router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}
