//! Database connection provider
//!
//! Wraps a single sqlx PgPool for the process lifetime. Opened once at
//! startup, handed to the HTTP layer through `AppState`, closed on shutdown.
//! Pooling is left to sqlx; nothing here retries or reconnects.

use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{FromRow, PgPool};

use super::query::{Fragment, SqlParam};

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Shared store handle. Cloning is cheap and shares the pool.
#[derive(Debug, Clone)]
pub struct Store {
    pool: PgPool,
}

impl Store {
    /// Connect to PostgreSQL with the default pool size.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection fails.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let store = Store::connect("postgres://localhost/todoctl").await?;
    /// ```
    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        Self::connect_with(database_url, DEFAULT_MAX_CONNECTIONS).await
    }

    /// Connect to PostgreSQL with a custom pool size.
    pub async fn connect_with(database_url: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        tracing::debug!(max_connections, "database pool connected");
        Ok(Self { pool })
    }

    /// Wrap an already configured pool.
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Run one parameterized statement and decode every returned row.
    ///
    /// Failures are logged here and handed back unchanged.
    pub async fn query<T>(&self, fragment: &Fragment) -> Result<Vec<T>, sqlx::Error>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        tracing::debug!(sql = %fragment.text, params = fragment.params.len(), "query");

        let mut query = sqlx::query_as::<_, T>(&fragment.text);
        for param in &fragment.params {
            query = match param {
                SqlParam::Int(v) => query.bind(*v),
                SqlParam::Text(v) => query.bind(v.as_str()),
                SqlParam::Bool(v) => query.bind(*v),
                SqlParam::Date(v) => query.bind(*v),
            };
        }

        query.fetch_all(&self.pool).await.inspect_err(|e| {
            tracing::error!(error = %e, sql = %fragment.text, "query failed");
        })
    }

    /// Close the pool, waiting for checked-out connections to return.
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::debug!("database pool closed");
    }
}
