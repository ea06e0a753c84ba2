//! Table creation. Every statement is safe to run against an existing store.

use tracing::info;

use super::errors::StoreResult;
use super::TestCaseStore;

impl TestCaseStore {
    /// Ensure both tables and the step lookup index exist.
    pub(crate) async fn ensure_schema(&self) -> StoreResult<()> {
        sqlx::query(
            r#"CREATE TABLE IF NOT EXISTS test_case (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name VARCHAR(200) NOT NULL,
                description VARCHAR(500) NOT NULL,
                precondition VARCHAR(500),
                postcondition VARCHAR(500),
                comment VARCHAR(500)
            )"#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"CREATE TABLE IF NOT EXISTS step (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                test_case_id INTEGER NOT NULL REFERENCES test_case(id),
                description VARCHAR(500) NOT NULL,
                expected_result VARCHAR(500) NOT NULL
            )"#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_step_test_case ON step(test_case_id)")
            .execute(&self.pool)
            .await?;

        info!("Database schema verified");
        Ok(())
    }
}
