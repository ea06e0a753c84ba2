//! Test case operations

use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use super::errors::{StoreError, StoreResult};
use super::types::{NewTestCase, TestCase};
use super::TestCaseStore;

impl TestCaseStore {
    /// Insert a test case and return its generated id.
    pub async fn insert_test_case(&self, test_case: &NewTestCase) -> StoreResult<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO test_case (name, description, precondition, postcondition, comment)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&test_case.name)
        .bind(&test_case.description)
        .bind(&test_case.precondition)
        .bind(&test_case.postcondition)
        .bind(&test_case.comment)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Get a test case by id
    pub async fn get_test_case(&self, id: i64) -> StoreResult<TestCase> {
        let row = sqlx::query(
            "SELECT id, name, description, precondition, postcondition, comment FROM test_case WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => row_to_test_case(&row),
            None => Err(StoreError::TestCaseNotFound(id)),
        }
    }

    /// Whether a test case with this id exists
    pub async fn test_case_exists(&self, id: i64) -> StoreResult<bool> {
        let row = sqlx::query("SELECT 1 FROM test_case WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.is_some())
    }
}

fn row_to_test_case(row: &SqliteRow) -> StoreResult<TestCase> {
    Ok(TestCase {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        precondition: row.try_get("precondition")?,
        postcondition: row.try_get("postcondition")?,
        comment: row.try_get("comment")?,
    })
}
