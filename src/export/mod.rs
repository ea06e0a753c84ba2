//! # Document Export
//!
//! Turns one test case and its ordered steps into a `.docx` file named
//! `TestCase_<id>.docx`.
//!
//! - `document`: the flat document model and the rendering rules
//! - `docx`: the WordprocessingML package encoder
//! - `exporter`: reads the store and writes files

mod document;
mod docx;
mod errors;
mod exporter;

pub use document::{render_test_case, Document, ExportLabels, Table, STEP_TABLE_COLUMNS};
pub use docx::{document_xml, encode_docx, DOCUMENT_PART};
pub use errors::{ExportError, ExportResult};
pub use exporter::{export_file_name, ExportedDocument, Exporter};
