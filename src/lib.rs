//! tms - a minimal test case management API
//!
//! Test cases and their ordered steps live in SQLite. An axum server exposes
//! create and add-step endpoints, and exports a test case as a `.docx`
//! document.

pub mod cli;
pub mod export;
pub mod http_server;
pub mod observability;
pub mod store;
