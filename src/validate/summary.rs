//! Human-readable rendering of validation failures.

use serde::{Deserialize, Serialize};

use super::node_rules::ValidationResult;

/// Lines shown per node before truncating.
pub const MAX_LISTED_ERRORS: usize = 5;

/// Validation outcome for one node, as shown to the user before compiling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeReport {
    pub node_id: String,
    pub label: String,
    pub result: ValidationResult,
}

impl NodeReport {
    pub fn summary(&self) -> String {
        summarize_errors(&self.node_id, &self.label, &self.result)
    }
}

/// Render up to five errors for a node, with a trailing count of the rest.
/// Valid results render as an empty string.
pub fn summarize_errors(node_id: &str, node_label: &str, result: &ValidationResult) -> String {
    if result.valid {
        return String::new();
    }

    let mut lines = vec![format!(
        "Node {} ({}) has validation errors:",
        node_label, node_id
    )];
    lines.extend(
        result
            .errors
            .iter()
            .take(MAX_LISTED_ERRORS)
            .map(|e| format!("- {}: {}", e.path, e.message)),
    );
    if result.errors.len() > MAX_LISTED_ERRORS {
        lines.push(format!(
            "...and {} more.",
            result.errors.len() - MAX_LISTED_ERRORS
        ));
    }
    lines.join("\n")
}

/// One block per failing node, separated by blank lines.
pub fn summarize_reports(reports: &[NodeReport]) -> String {
    reports
        .iter()
        .filter(|r| !r.result.valid)
        .map(NodeReport::summary)
        .collect::<Vec<_>>()
        .join("\n\n")
}
