//! Record types for the two persisted tables.

use serde::{Deserialize, Serialize};

/// A stored test case
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub precondition: Option<String>,
    pub postcondition: Option<String>,
    pub comment: Option<String>,
}

/// Fields for a test case that has not been inserted yet
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewTestCase {
    pub name: String,
    pub description: String,
    pub precondition: Option<String>,
    pub postcondition: Option<String>,
    pub comment: Option<String>,
}

impl NewTestCase {
    /// Create a test case with only the required fields set
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            ..Default::default()
        }
    }
}

/// A stored step. Steps of one test case are ordered by `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub id: i64,
    pub test_case_id: i64,
    pub description: String,
    pub expected_result: String,
}

/// Fields for a step that has not been inserted yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStep {
    pub test_case_id: i64,
    pub description: String,
    pub expected_result: String,
}

impl NewStep {
    pub fn new(
        test_case_id: i64,
        description: impl Into<String>,
        expected_result: impl Into<String>,
    ) -> Self {
        Self {
            test_case_id,
            description: description.into(),
            expected_result: expected_result.into(),
        }
    }
}
