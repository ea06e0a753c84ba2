//! # Persistence Layer
//!
//! SQLite storage for test cases and their steps.
//!
//! A single `TestCaseStore` wraps a connection pool. It is cheap to clone and
//! is handed to every request handler; nothing here is process-global.
//!
//! ```rust,ignore
//! use tms::store::{NewTestCase, NewStep, TestCaseStore};
//!
//! let store = TestCaseStore::open("testcases.db").await?;
//! let id = store.insert_test_case(&NewTestCase::new("Login", "Verify login")).await?;
//! store.insert_step(&NewStep::new(id, "Enter credentials", "Fields accept input")).await?;
//! let steps = store.list_steps_for_test_case(id).await?;
//! ```

mod errors;
mod schema;
mod steps;
mod test_cases;
mod types;

pub use errors::{StoreError, StoreResult};
pub use types::{NewStep, NewTestCase, Step, TestCase};

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::info;

/// Connections kept open against a file-backed store
const MAX_CONNECTIONS: u32 = 5;

/// Handle to the test case database
#[derive(Clone, Debug)]
pub struct TestCaseStore {
    pool: SqlitePool,
}

impl TestCaseStore {
    /// Open or create a store at the given path.
    ///
    /// Creates the parent directory and all tables if they don't exist.
    pub async fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(options)
            .await?;

        let store = Self { pool };
        store.ensure_schema().await?;

        info!(path = %path.display(), "Database opened");
        Ok(store)
    }

    /// Open a private in-memory store.
    ///
    /// Every SQLite in-memory connection is its own database, so the pool is
    /// pinned to one connection that is never recycled.
    pub async fn open_in_memory() -> StoreResult<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .connect_with(options)
            .await?;

        let store = Self { pool };
        store.ensure_schema().await?;
        Ok(store)
    }

    /// Close all connections.
    pub async fn close(self) {
        self.pool.close().await;
    }
}
