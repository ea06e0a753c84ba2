//! Document model and the test case rendering rules.
//!
//! Rendering is pure: it maps one test case and its ordered steps to a
//! `Document` without touching the store or the file system.

use serde::{Deserialize, Serialize};

use crate::store::{Step, TestCase};

/// Number of columns in the step table
pub const STEP_TABLE_COLUMNS: usize = 3;

/// Text labels used in exported documents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportLabels {
    /// Prefix for the precondition paragraph
    pub precondition: String,
    /// Prefix for the postcondition paragraph
    pub postcondition: String,
    /// Prefix for the comment paragraph
    pub comment: String,
    /// Header of the step description column
    pub steps: String,
    /// Header of the expected result column
    pub expected_result: String,
    /// Header of the column left blank for the tester
    pub actual_result: String,
}

impl Default for ExportLabels {
    fn default() -> Self {
        Self {
            precondition: "Precondition".to_string(),
            postcondition: "Postcondition".to_string(),
            comment: "Comment".to_string(),
            steps: "Steps".to_string(),
            expected_result: "Expected result".to_string(),
            actual_result: "Actual result".to_string(),
        }
    }
}

/// A flat document: heading, body paragraphs, one table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub title: String,
    pub paragraphs: Vec<String>,
    pub table: Table,
}

/// A table whose first row is the header
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Header row, if the table has one
    pub fn header(&self) -> Option<&[String]> {
        self.rows.first().map(Vec::as_slice)
    }

    /// Rows after the header
    pub fn body(&self) -> &[Vec<String>] {
        self.rows.get(1..).unwrap_or(&[])
    }

    /// Widest row; used for the table grid
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }
}

/// Render a test case and its steps (in order) into a document.
///
/// Optional fields that are absent or empty produce no paragraph. Each step
/// becomes one row with the third cell left blank.
pub fn render_test_case(test_case: &TestCase, steps: &[Step], labels: &ExportLabels) -> Document {
    let mut paragraphs = vec![test_case.description.clone()];

    let optional = [
        (&labels.precondition, &test_case.precondition),
        (&labels.postcondition, &test_case.postcondition),
        (&labels.comment, &test_case.comment),
    ];
    for (label, value) in optional {
        if let Some(text) = value.as_deref().filter(|t| !t.is_empty()) {
            paragraphs.push(format!("{}: {}", label, text));
        }
    }

    let mut rows = Vec::with_capacity(steps.len() + 1);
    rows.push(vec![
        labels.steps.clone(),
        labels.expected_result.clone(),
        labels.actual_result.clone(),
    ]);
    rows.extend(
        steps
            .iter()
            .map(|step| vec![step.description.clone(), step.expected_result.clone(), String::new()]),
    );

    Document {
        title: test_case.name.clone(),
        paragraphs,
        table: Table { rows },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn login() -> TestCase {
        TestCase {
            id: 1,
            name: "Login".to_string(),
            description: "Verify login".to_string(),
            precondition: None,
            postcondition: None,
            comment: None,
        }
    }

    fn step(id: i64, description: &str, expected: &str) -> Step {
        Step {
            id,
            test_case_id: 1,
            description: description.to_string(),
            expected_result: expected.to_string(),
        }
    }

    #[test]
    fn test_login_scenario() {
        let steps = vec![step(1, "Enter credentials", "Fields accept input")];
        let doc = render_test_case(&login(), &steps, &ExportLabels::default());

        assert_eq!(doc.title, "Login");
        assert_eq!(doc.paragraphs, vec!["Verify login"]);
        assert_eq!(doc.table.rows.len(), 2);
        assert_eq!(
            doc.table.header().unwrap(),
            &["Steps", "Expected result", "Actual result"]
        );
        assert_eq!(
            doc.table.body()[0],
            vec!["Enter credentials", "Fields accept input", ""]
        );
    }

    #[test]
    fn test_row_per_step_in_order() {
        let steps: Vec<_> = (1..=5)
            .map(|i| step(i, &format!("do {i}"), &format!("see {i}")))
            .collect();
        let doc = render_test_case(&login(), &steps, &ExportLabels::default());

        assert_eq!(doc.table.rows.len(), 6);
        for (i, row) in doc.table.body().iter().enumerate() {
            assert_eq!(row[0], format!("do {}", i + 1));
            assert_eq!(row[1], format!("see {}", i + 1));
            assert_eq!(row[2], "");
        }
        assert_eq!(doc.table.column_count(), STEP_TABLE_COLUMNS);
    }

    #[test]
    fn test_no_steps_keeps_header() {
        let doc = render_test_case(&login(), &[], &ExportLabels::default());
        assert_eq!(doc.table.rows.len(), 1);
        assert!(doc.table.body().is_empty());
    }

    #[test]
    fn test_optional_paragraphs() {
        let mut test_case = login();
        test_case.precondition = Some("User exists".to_string());
        test_case.postcondition = Some(String::new());
        test_case.comment = Some("Flaky on CI".to_string());

        let doc = render_test_case(&test_case, &[], &ExportLabels::default());
        assert_eq!(
            doc.paragraphs,
            vec!["Verify login", "Precondition: User exists", "Comment: Flaky on CI"]
        );
    }

    #[test]
    fn test_custom_labels() {
        let labels = ExportLabels {
            precondition: "Предусловие".to_string(),
            steps: "Шаги".to_string(),
            ..Default::default()
        };
        let mut test_case = login();
        test_case.precondition = Some("Открыт браузер".to_string());

        let doc = render_test_case(&test_case, &[], &labels);
        assert_eq!(doc.paragraphs[1], "Предусловие: Открыт браузер");
        assert_eq!(doc.table.rows[0][0], "Шаги");
    }
}
