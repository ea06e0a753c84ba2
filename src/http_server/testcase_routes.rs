//! Test Case HTTP Routes
//!
//! Endpoints for creating test cases, adding steps, and exporting documents.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::errors::{ApiError, ApiResult};
use crate::export::Exporter;
use crate::store::{NewStep, NewTestCase, TestCaseStore};

// ==================
// Shared State
// ==================

/// State shared across test case handlers
#[derive(Debug, Clone)]
pub struct TestCaseState {
    pub store: TestCaseStore,
    pub exporter: Exporter,
}

impl TestCaseState {
    pub fn new(store: TestCaseStore, exporter: Exporter) -> Self {
        Self { store, exporter }
    }
}

// ==================
// Request/Response Types
// ==================

/// Body of `POST /testcases`. Every field is optional at the wire level so
/// missing ones can be reported together.
#[derive(Debug, Default, Deserialize)]
pub struct CreateTestCaseRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub precondition: Option<String>,
    pub postcondition: Option<String>,
    pub comment: Option<String>,
}

impl CreateTestCaseRequest {
    pub fn validate(self) -> ApiResult<NewTestCase> {
        let mut missing = Vec::new();
        let name = require(self.name, "name", &mut missing);
        let description = require(self.description, "description", &mut missing);

        match (name, description) {
            (Some(name), Some(description)) => Ok(NewTestCase {
                name,
                description,
                precondition: self.precondition,
                postcondition: self.postcondition,
                comment: self.comment,
            }),
            _ => Err(ApiError::MissingFields(missing)),
        }
    }
}

/// Body of `POST /steps`
#[derive(Debug, Default, Deserialize)]
pub struct AddStepRequest {
    pub test_case_id: Option<i64>,
    pub description: Option<String>,
    pub expected_result: Option<String>,
}

impl AddStepRequest {
    pub fn validate(self) -> ApiResult<NewStep> {
        let mut missing = Vec::new();
        let test_case_id = require(self.test_case_id, "test_case_id", &mut missing);
        let description = require(self.description, "description", &mut missing);
        let expected_result = require(self.expected_result, "expected_result", &mut missing);

        match (test_case_id, description, expected_result) {
            (Some(test_case_id), Some(description), Some(expected_result)) => Ok(NewStep {
                test_case_id,
                description,
                expected_result,
            }),
            _ => Err(ApiError::MissingFields(missing)),
        }
    }
}

fn require<T>(value: Option<T>, field: &'static str, missing: &mut Vec<&'static str>) -> Option<T> {
    if value.is_none() {
        missing.push(field);
    }
    value
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateTestCaseResponse {
    pub message: String,
    pub id: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AddStepResponse {
    pub message: String,
    pub id: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

// ==================
// Test Case Routes
// ==================

/// Create test case routes
pub fn testcase_routes(state: Arc<TestCaseState>) -> Router {
    Router::new()
        .route("/testcases", post(create_test_case_handler))
        .route("/steps", post(add_step_handler))
        .route("/export/:test_case_id", get(export_handler))
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn create_test_case_handler(
    State(state): State<Arc<TestCaseState>>,
    payload: Result<Json<CreateTestCaseRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<CreateTestCaseResponse>)> {
    let Json(request) = payload.map_err(|e| ApiError::InvalidBody(e.body_text()))?;
    let new_test_case = request.validate()?;

    let id = state.store.insert_test_case(&new_test_case).await?;
    info!(id, name = %new_test_case.name, "Test case created");

    Ok((
        StatusCode::CREATED,
        Json(CreateTestCaseResponse {
            message: "Test case created!".to_string(),
            id,
        }),
    ))
}

async fn add_step_handler(
    State(state): State<Arc<TestCaseState>>,
    payload: Result<Json<AddStepRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<AddStepResponse>)> {
    let Json(request) = payload.map_err(|e| ApiError::InvalidBody(e.body_text()))?;
    let new_step = request.validate()?;

    let id = state.store.insert_step(&new_step).await?;
    info!(id, test_case_id = new_step.test_case_id, "Step added");

    Ok((
        StatusCode::CREATED,
        Json(AddStepResponse {
            message: "Step added!".to_string(),
            id,
        }),
    ))
}

async fn export_handler(
    State(state): State<Arc<TestCaseState>>,
    test_case_id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Path(test_case_id) = test_case_id.map_err(|e| ApiError::InvalidPath(e.body_text()))?;

    let exported = state.exporter.export(&state.store, test_case_id).await?;

    Ok(Json(MessageResponse {
        message: format!("Exported to {}", exported.file_name),
    }))
}
