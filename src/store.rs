//! Customer store
//!
//! The persistence boundary: a thin repository over a pooled SQLite
//! connection. Every statement binds its parameters; user input is never
//! interpolated into SQL text. The store imposes no locking of its own and
//! relies on the engine's guarantees.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use thiserror::Error;

use crate::customer::{Customer, CustomerFields};

/// An engine-level failure, surfaced verbatim to the caller
#[derive(Debug, Error)]
#[error(transparent)]
pub struct StoreError(#[from] sqlx::Error);

const SCHEMA: &str = "\
CREATE TABLE IF NOT EXISTS customers (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name TEXT,
    last_name TEXT,
    phone_number TEXT,
    email TEXT,
    address TEXT
)";

const SELECT_COLUMNS: &str =
    "SELECT id, first_name, last_name, phone_number, email, address FROM customers";

/// Repository for the single `customers` table
///
/// Cheap to clone; clones share the underlying pool. Constructed once at
/// startup and handed to the router (closed when the pool drops).
#[derive(Debug, Clone)]
pub struct CustomerStore {
    pool: SqlitePool,
}

impl CustomerStore {
    /// Open (creating if absent) a file-backed store and bootstrap the schema
    pub async fn open(path: &str) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        Self::with_options(options, 5).await
    }

    /// Open an in-memory store; rows vanish when the store is dropped
    pub async fn open_in_memory() -> Result<Self, StoreError> {
        // A single pooled connection keeps the in-memory database alive.
        Self::with_options(SqliteConnectOptions::new().in_memory(true), 1).await
    }

    async fn with_options(
        options: SqliteConnectOptions,
        max_connections: u32,
    ) -> Result<Self, StoreError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        sqlx::query(SCHEMA).execute(&pool).await?;

        Ok(Self { pool })
    }

    /// Append a row and return the storage-assigned id
    pub async fn insert(&self, fields: &CustomerFields) -> Result<i64, StoreError> {
        let result = sqlx::query(
            "INSERT INTO customers (first_name, last_name, phone_number, email, address) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&fields.first_name)
        .bind(&fields.last_name)
        .bind(&fields.phone_number)
        .bind(&fields.email)
        .bind(&fields.address)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Exact-match lookup; `None` when no row has this id
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Customer>, StoreError> {
        let row = sqlx::query_as::<_, Customer>(&format!("{SELECT_COLUMNS} WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row)
    }

    /// Rewrite all five mutable fields; returns rows affected (0 = not found)
    pub async fn update(&self, id: i64, fields: &CustomerFields) -> Result<u64, StoreError> {
        let result = sqlx::query(
            "UPDATE customers \
             SET first_name = ?, last_name = ?, phone_number = ?, email = ?, address = ? \
             WHERE id = ?",
        )
        .bind(&fields.first_name)
        .bind(&fields.last_name)
        .bind(&fields.phone_number)
        .bind(&fields.email)
        .bind(&fields.address)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Remove a row; returns rows affected (0 = not found)
    pub async fn delete(&self, id: i64) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM customers WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Case-insensitive substring match across name, email, and address
    ///
    /// SQLite `LIKE` is case-insensitive for ASCII; the pattern is bound as a
    /// parameter. `%` and `_` in the term keep their wildcard meaning, and
    /// there is no result cap.
    pub async fn search(&self, term: &str) -> Result<Vec<Customer>, StoreError> {
        let pattern = format!("%{term}%");
        let rows = sqlx::query_as::<_, Customer>(&format!(
            "{SELECT_COLUMNS} \
             WHERE first_name LIKE ? OR last_name LIKE ? OR email LIKE ? OR address LIKE ?"
        ))
        .bind(&pattern)
        .bind(&pattern)
        .bind(&pattern)
        .bind(&pattern)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Total row count, for pagination arithmetic
    pub async fn count(&self) -> Result<i64, StoreError> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM customers")
            .fetch_one(&self.pool)
            .await?;

        Ok(total)
    }

    /// One fixed-size slice in natural row order
    ///
    /// `page_number` is 1-based and assumed already coerced to >= 1.
    pub async fn page(&self, page_number: i64, limit: i64) -> Result<Vec<Customer>, StoreError> {
        let offset = (page_number - 1) * limit;
        let rows = sqlx::query_as::<_, Customer>(&format!("{SELECT_COLUMNS} LIMIT ? OFFSET ?"))
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }
}
