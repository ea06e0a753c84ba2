//! Writes exported test cases to the local file system.

use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use super::document::{render_test_case, ExportLabels};
use super::docx::encode_docx;
use super::errors::ExportResult;
use crate::store::TestCaseStore;

/// Name of the file an export of `test_case_id` is written to
pub fn export_file_name(test_case_id: i64) -> String {
    format!("TestCase_{}.docx", test_case_id)
}

/// Result of a successful export
#[derive(Debug, Clone, Serialize)]
pub struct ExportedDocument {
    pub test_case_id: i64,
    pub file_name: String,
    pub path: PathBuf,
    pub step_count: usize,
}

/// Renders test cases to `.docx` files in one output directory
#[derive(Debug, Clone)]
pub struct Exporter {
    output_dir: PathBuf,
    labels: ExportLabels,
}

impl Exporter {
    /// Create an exporter writing to `output_dir` with default labels
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self::with_labels(output_dir, ExportLabels::default())
    }

    pub fn with_labels(output_dir: impl Into<PathBuf>, labels: ExportLabels) -> Self {
        Self {
            output_dir: output_dir.into(),
            labels,
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Full path an export of `test_case_id` is written to
    pub fn path_for(&self, test_case_id: i64) -> PathBuf {
        self.output_dir.join(export_file_name(test_case_id))
    }

    /// Export one test case with its steps.
    ///
    /// The test case is read before anything touches the file system, so an
    /// unknown id leaves no file behind. Repeated exports overwrite the same
    /// file. The package is staged in a temporary file and renamed into
    /// place; concurrent exports of one id resolve to the last rename.
    pub async fn export(
        &self,
        store: &TestCaseStore,
        test_case_id: i64,
    ) -> ExportResult<ExportedDocument> {
        let test_case = store.get_test_case(test_case_id).await?;
        let steps = store.list_steps_for_test_case(test_case_id).await?;

        let document = render_test_case(&test_case, &steps, &self.labels);
        let bytes = encode_docx(&document, Utc::now())?;

        tokio::fs::create_dir_all(&self.output_dir).await?;

        let file_name = export_file_name(test_case_id);
        let path = self.path_for(test_case_id);
        let staging = self
            .output_dir
            .join(format!(".{}.{}.tmp", file_name, Uuid::new_v4()));

        if let Err(e) = write_then_rename(&staging, &path, &bytes).await {
            if let Err(cleanup) = tokio::fs::remove_file(&staging).await {
                warn!(
                    path = %staging.display(),
                    error = %cleanup,
                    "Failed to remove staging file"
                );
            }
            return Err(e.into());
        }

        info!(
            test_case_id,
            steps = steps.len(),
            path = %path.display(),
            "Test case exported"
        );

        Ok(ExportedDocument {
            test_case_id,
            file_name,
            path,
            step_count: steps.len(),
        })
    }
}

async fn write_then_rename(staging: &Path, target: &Path, bytes: &[u8]) -> std::io::Result<()> {
    tokio::fs::write(staging, bytes).await?;
    tokio::fs::rename(staging, target).await
}
