//! Issue/diagnostic types for analysis results

use serde::Serialize;
use std::path::PathBuf;

/// Severity level for issues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Error - a configured rule was violated
    Error,
    /// Warning - analysis degraded (e.g. a file did not fully parse)
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A single issue found during analysis
#[derive(Debug, Clone, Serialize)]
pub struct Issue {
    /// The check that found this issue (e.g., "generics.missing")
    pub check_id: String,
    /// Severity level
    pub severity: Severity,
    /// Human-readable message, including the suggested replacement
    pub message: String,
    /// File where the issue was found
    pub file: PathBuf,
    /// Line number (1-based)
    pub line: usize,
    /// Column number (1-based)
    pub column: usize,
}

impl Issue {
    /// Create a new error issue
    pub fn error(
        check_id: impl Into<String>,
        message: impl Into<String>,
        file: PathBuf,
        line: usize,
        column: usize,
    ) -> Self {
        Self {
            check_id: check_id.into(),
            severity: Severity::Error,
            message: message.into(),
            file,
            line,
            column,
        }
    }

    /// Create a new warning issue
    pub fn warning(
        check_id: impl Into<String>,
        message: impl Into<String>,
        file: PathBuf,
        line: usize,
        column: usize,
    ) -> Self {
        Self {
            check_id: check_id.into(),
            severity: Severity::Warning,
            message: message.into(),
            file,
            line,
            column,
        }
    }
}

/// Collection of issues from analysis
#[derive(Debug, Default)]
pub struct IssueCollection {
    issues: Vec<Issue>,
}

impl IssueCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, issue: Issue) {
        self.issues.push(issue);
    }

    pub fn extend(&mut self, issues: impl IntoIterator<Item = Issue>) {
        self.issues.extend(issues);
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn into_issues(self) -> Vec<Issue> {
        self.issues
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
            .count()
    }

    /// Sort issues by file, then line, then column
    pub fn sort(&mut self) {
        self.issues.sort_by(|a, b| {
            a.file
                .cmp(&b.file)
                .then_with(|| a.line.cmp(&b.line))
                .then_with(|| a.column.cmp(&b.column))
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_creation() {
        let issue = Issue::error(
            "generics.missing",
            "Function 'useState' must be called with explicit generics",
            PathBuf::from("/test.ts"),
            10,
            5,
        );

        assert_eq!(issue.check_id, "generics.missing");
        assert_eq!(issue.severity, Severity::Error);
        assert_eq!(issue.line, 10);
        assert_eq!(issue.column, 5);
    }

    #[test]
    fn test_issue_collection_counts() {
        let mut collection = IssueCollection::new();
        collection.add(Issue::error("test", "Error 1", PathBuf::from("/a.ts"), 1, 1));
        collection.add(Issue::warning("test", "Warning 1", PathBuf::from("/b.ts"), 2, 1));

        assert_eq!(collection.len(), 2);
        assert_eq!(collection.error_count(), 1);
        assert_eq!(collection.warning_count(), 1);
    }

    #[test]
    fn test_sort_orders_by_file_line_column() {
        let mut collection = IssueCollection::new();
        collection.add(Issue::error("test", "b", PathBuf::from("/b.ts"), 1, 1));
        collection.add(Issue::error("test", "a2", PathBuf::from("/a.ts"), 2, 1));
        collection.add(Issue::error("test", "a1", PathBuf::from("/a.ts"), 1, 9));

        collection.sort();
        let messages: Vec<_> = collection.issues().iter().map(|i| i.message.as_str()).collect();
        assert_eq!(messages, vec!["a1", "a2", "b"]);
    }
}
