//! PostgreSQL storage backend using sqlx.

use async_stream::try_stream;
use async_trait::async_trait;
use futures_util::{Stream, TryStreamExt};
use sqlx::pool::PoolConnection;
use sqlx::postgres::{PgArguments, PgPoolOptions, PgRow};
use sqlx::query::Query;
use sqlx::{PgPool, Postgres, Row};
use viewer_count_core::ViewerFilter;

use crate::error::StorageError;
use crate::traits::{CountCursor, CountRow, ViewerStore};

const COUNT_ALL: &str = "SELECT count FROM viewers";
const COUNT_BY_ID: &str = "SELECT count FROM viewers WHERE id = $1";
const COUNT_BY_NAME: &str = "SELECT count FROM viewers WHERE name = $1";

/// SQL text executed for `filter`.
#[must_use]
pub fn count_sql(filter: &ViewerFilter) -> &'static str {
    match filter {
        ViewerFilter::All => COUNT_ALL,
        ViewerFilter::Id(_) => COUNT_BY_ID,
        ViewerFilter::Name(_) => COUNT_BY_NAME,
    }
}

fn count_query(filter: &ViewerFilter) -> Query<'static, Postgres, PgArguments> {
    let query = sqlx::query(count_sql(filter));
    match filter {
        ViewerFilter::All => query,
        ViewerFilter::Id(id) => query.bind(*id),
        ViewerFilter::Name(name) => query.bind(name.clone()),
    }
}

#[derive(Clone, Debug)]
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    /// Connect with driver-default pool settings.
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new().connect(database_url).await?;
        tracing::info!("PgStorage initialized");
        Ok(Self { pool })
    }

    #[must_use]
    pub const fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// `count` is read as BIGINT, falling back to INTEGER for narrower schemas.
impl CountRow for PgRow {
    fn count(&self) -> Result<i64, StorageError> {
        match self.try_get::<i64, _>(0) {
            Ok(count) => Ok(count),
            Err(wide) => self.try_get::<i32, _>(0).map(i64::from).map_err(|_| wide.into()),
        }
    }
}

fn stream_counts(
    mut conn: PoolConnection<Postgres>,
    filter: ViewerFilter,
) -> impl Stream<Item = Result<Box<dyn CountRow>, StorageError>> + Send + 'static {
    try_stream! {
        let mut rows = count_query(&filter).fetch(&mut *conn);
        while let Some(row) = rows.try_next().await? {
            yield Box::new(row) as Box<dyn CountRow>;
        }
    }
}

#[async_trait]
impl ViewerStore for PgStorage {
    async fn query_counts(&self, filter: &ViewerFilter) -> Result<CountCursor, StorageError> {
        let conn = self.pool.acquire().await?;
        tracing::debug!(%filter, sql = count_sql(filter), "executing count query");
        Ok(Box::pin(stream_counts(conn, filter.clone())))
    }

    async fn ping(&self) -> Result<(), StorageError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
