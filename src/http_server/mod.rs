//! # HTTP Server Module
//!
//! Axum server exposing the test case API.
//!
//! # Endpoints
//!
//! - `GET /` - Plaintext liveness message
//! - `GET /health` - Health check
//! - `POST /testcases` - Create a test case
//! - `POST /steps` - Add a step to a test case
//! - `GET /export/:test_case_id` - Export a test case to `.docx`

pub mod errors;
pub mod observability_routes;
pub mod server;
pub mod testcase_routes;

pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use server::HttpServer;
pub use testcase_routes::TestCaseState;
