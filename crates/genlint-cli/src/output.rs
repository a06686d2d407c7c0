//! Output formatting for genlint
//!
//! Supports text (colored terminal) and JSON output formats.

use colored::*;
use genlint_core::{Issue, IssueCollection, Severity};
use serde::Serialize;

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<OutputFormat> {
        match s.to_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// One issue as rendered in JSON output
#[derive(Debug, Clone, Serialize)]
pub struct IssueInfo {
    pub check: String,
    pub severity: String,
    pub file: String,
    pub line: usize,
    pub column: usize,
    pub message: String,
}

impl IssueInfo {
    fn from_issue(issue: &Issue) -> Self {
        Self {
            check: issue.check_id.clone(),
            severity: issue.severity.to_string(),
            file: issue.file.display().to_string(),
            line: issue.line,
            column: issue.column,
            message: issue.message.clone(),
        }
    }
}

/// Summary statistics
#[derive(Debug, Clone, Default, Serialize)]
pub struct Summary {
    pub files_scanned: usize,
    pub issues: usize,
    pub warnings: usize,
}

/// Full JSON output structure
#[derive(Debug, Serialize)]
pub struct JsonOutput {
    pub version: String,
    pub summary: Summary,
    pub issues: Vec<IssueInfo>,
}

/// Renders analysis results in the selected format
pub struct Reporter {
    format: OutputFormat,
    verbose: bool,
}

impl Reporter {
    pub fn new(format: OutputFormat, verbose: bool) -> Self {
        Self { format, verbose }
    }

    pub fn report(&self, issues: &IssueCollection, files_scanned: usize) {
        match self.format {
            OutputFormat::Text => self.report_text(issues, files_scanned),
            OutputFormat::Json => self.report_json(issues, files_scanned),
        }
    }

    fn report_text(&self, issues: &IssueCollection, files_scanned: usize) {
        for issue in issues.issues() {
            let severity = match issue.severity {
                Severity::Error => "error".red().bold(),
                Severity::Warning => "warning".yellow().bold(),
            };
            println!(
                "{}:{}:{}: {}: {}",
                issue.file.display(),
                issue.line,
                issue.column,
                severity,
                issue.message
            );
        }

        if !issues.is_empty() {
            println!();
        }

        let errors = issues.error_count();
        let warnings = issues.warning_count();
        if errors == 0 {
            println!(
                "{} ({} files checked)",
                "No issues found".green().bold(),
                files_scanned
            );
        } else {
            println!(
                "{} ({} files checked, {} issues)",
                "Issues found".red().bold(),
                files_scanned,
                errors
            );
        }
        if self.verbose && warnings > 0 {
            println!("{} files did not fully parse", warnings);
        }
    }

    fn report_json(&self, issues: &IssueCollection, files_scanned: usize) {
        let output = JsonOutput {
            version: env!("CARGO_PKG_VERSION").to_string(),
            summary: Summary {
                files_scanned,
                issues: issues.error_count(),
                warnings: issues.warning_count(),
            },
            issues: issues.issues().iter().map(IssueInfo::from_issue).collect(),
        };
        match serde_json::to_string_pretty(&output) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("{}: Failed to serialize output: {}", "Error".red(), e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_format_from_str() {
        assert_eq!(OutputFormat::from_str("text"), Some(OutputFormat::Text));
        assert_eq!(OutputFormat::from_str("JSON"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_str("xml"), None);
    }

    #[test]
    fn test_issue_info_carries_position() {
        let issue = Issue::error(
            "generics.missing",
            "Function 'useState' must be called with explicit generics.",
            PathBuf::from("src/app.ts"),
            4,
            11,
        );
        let info = IssueInfo::from_issue(&issue);

        assert_eq!(info.check, "generics.missing");
        assert_eq!(info.severity, "error");
        assert_eq!(info.file, "src/app.ts");
        assert_eq!(info.line, 4);
        assert_eq!(info.column, 11);
    }

    #[test]
    fn test_json_output_serializes() {
        let mut issues = IssueCollection::new();
        issues.add(Issue::error(
            "generics.missing",
            "message",
            PathBuf::from("a.ts"),
            1,
            1,
        ));
        let output = JsonOutput {
            version: "0.1.0".to_string(),
            summary: Summary {
                files_scanned: 1,
                issues: 1,
                warnings: 0,
            },
            issues: issues.issues().iter().map(IssueInfo::from_issue).collect(),
        };

        let json = serde_json::to_string(&output).unwrap();
        assert!(json.contains("\"files_scanned\":1"));
        assert!(json.contains("\"generics.missing\""));
    }
}
