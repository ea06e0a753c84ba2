//! Step operations

use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use tracing::debug;

use super::errors::{StoreError, StoreResult};
use super::types::{NewStep, Step};
use super::TestCaseStore;

impl TestCaseStore {
    /// Insert a step and return its generated id.
    ///
    /// Fails with `TestCaseNotFound` when the owning test case is absent, so
    /// orphan steps are never persisted.
    pub async fn insert_step(&self, step: &NewStep) -> StoreResult<i64> {
        if !self.test_case_exists(step.test_case_id).await? {
            debug!(test_case_id = step.test_case_id, "Rejecting step for unknown test case");
            return Err(StoreError::TestCaseNotFound(step.test_case_id));
        }

        let result = sqlx::query(
            "INSERT INTO step (test_case_id, description, expected_result) VALUES (?, ?, ?)",
        )
        .bind(step.test_case_id)
        .bind(&step.description)
        .bind(&step.expected_result)
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            // The foreign key catches a test case that vanished after the check
            sqlx::Error::Database(ref db) if db.is_foreign_key_violation() => {
                StoreError::TestCaseNotFound(step.test_case_id)
            }
            other => StoreError::Database(other),
        })?;

        Ok(result.last_insert_rowid())
    }

    /// All steps of a test case in insertion order. Empty when there are none.
    pub async fn list_steps_for_test_case(&self, test_case_id: i64) -> StoreResult<Vec<Step>> {
        let rows = sqlx::query(
            "SELECT id, test_case_id, description, expected_result FROM step WHERE test_case_id = ? ORDER BY id ASC",
        )
        .bind(test_case_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_step).collect()
    }
}

fn row_to_step(row: &SqliteRow) -> StoreResult<Step> {
    Ok(Step {
        id: row.try_get("id")?,
        test_case_id: row.try_get("test_case_id")?,
        description: row.try_get("description")?,
        expected_result: row.try_get("expected_result")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::NewTestCase;

    #[tokio::test]
    async fn test_steps_come_back_in_insertion_order() {
        let store = TestCaseStore::open_in_memory().await.unwrap();
        let id = store.insert_test_case(&NewTestCase::new("Login", "Verify login")).await.unwrap();

        for i in 1..=3 {
            store
                .insert_step(&NewStep::new(id, format!("step {i}"), format!("result {i}")))
                .await
                .unwrap();
        }

        let steps = store.list_steps_for_test_case(id).await.unwrap();
        let descriptions: Vec<_> = steps.iter().map(|s| s.description.as_str()).collect();
        assert_eq!(descriptions, vec!["step 1", "step 2", "step 3"]);
        assert!(steps.iter().all(|s| s.test_case_id == id));
    }

    #[tokio::test]
    async fn test_steps_are_scoped_to_their_test_case() {
        let store = TestCaseStore::open_in_memory().await.unwrap();
        let a = store.insert_test_case(&NewTestCase::new("a", "a")).await.unwrap();
        let b = store.insert_test_case(&NewTestCase::new("b", "b")).await.unwrap();

        store.insert_step(&NewStep::new(a, "a1", "ok")).await.unwrap();
        store.insert_step(&NewStep::new(b, "b1", "ok")).await.unwrap();
        store.insert_step(&NewStep::new(a, "a2", "ok")).await.unwrap();

        let steps = store.list_steps_for_test_case(a).await.unwrap();
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[1].description, "a2");
    }

    #[tokio::test]
    async fn test_no_steps_is_empty() {
        let store = TestCaseStore::open_in_memory().await.unwrap();
        let id = store.insert_test_case(&NewTestCase::new("a", "b")).await.unwrap();

        assert!(store.list_steps_for_test_case(id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_orphan_step_is_rejected() {
        let store = TestCaseStore::open_in_memory().await.unwrap();

        let result = store.insert_step(&NewStep::new(404, "x", "y")).await;
        assert!(matches!(result, Err(StoreError::TestCaseNotFound(404))));

        let orphans = store.list_steps_for_test_case(404).await.unwrap();
        assert!(orphans.is_empty());
    }
}
