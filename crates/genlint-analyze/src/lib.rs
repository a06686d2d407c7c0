//! genlint-analyze: TypeScript analysis host for the explicit-generics check
//!
//! This crate supplies everything the core audit leaves to the host:
//!
//! - Tree-sitter parsing of TypeScript/TSX sources
//! - Call-site extraction into the core's read-only views
//! - Multi-file analysis with parallel execution
//! - The one-time advisory when no names are configured
//!
//! # Example
//!
//! ```no_run
//! use genlint_analyze::Analyzer;
//! use genlint_core::RuleOptions;
//! use std::path::PathBuf;
//!
//! let options = RuleOptions::Names(vec!["useState".to_string()]);
//! let analyzer = Analyzer::new(&options);
//! let issues = analyzer.analyze_paths(&[PathBuf::from("src/")]);
//! for issue in issues.issues() {
//!     println!("{}:{}:{}: {}", issue.file.display(), issue.line, issue.column, issue.message);
//! }
//! ```

pub mod extract;
pub mod parser;

use genlint_core::{
    check_call_sites, warn_unconfigured, AdvisoryFlag, CheckContext, ExpectedCounts, Issue,
    IssueCollection, RuleOptions,
};
use parser::Dialect;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Main analyzer that runs the explicit-generics check over files
pub struct Analyzer {
    counts: ExpectedCounts,
    advisory: AdvisoryFlag,
}

impl Analyzer {
    /// Create an analyzer from raw rule options
    pub fn new(options: &RuleOptions) -> Self {
        Self {
            counts: ExpectedCounts::from_options(options),
            advisory: AdvisoryFlag::new(),
        }
    }

    /// Analyzer with no configured names. Every file analyzes clean and
    /// the advisory prints once for the whole process.
    pub fn unconfigured() -> Self {
        Self {
            counts: ExpectedCounts::new(),
            advisory: AdvisoryFlag::new(),
        }
    }

    /// The canonical name-to-count map this analyzer audits against
    pub fn expected_counts(&self) -> &ExpectedCounts {
        &self.counts
    }

    /// Analyze source code with a given path
    pub fn analyze_source(
        &self,
        path: &Path,
        source: &str,
    ) -> Result<IssueCollection, AnalyzeError> {
        let mut issues = IssueCollection::new();

        // With nothing configured the audit can never match; skip the
        // parse entirely and surface the one-time advisory instead.
        if self.counts.is_empty() {
            warn_unconfigured(&self.advisory);
            return Ok(issues);
        }

        let dialect = Dialect::from_path(path).unwrap_or(Dialect::TypeScript);
        let tree = parser::parse_source(source, dialect)
            .ok_or_else(|| AnalyzeError::Parse(path.to_path_buf()))?;

        // Tree-sitter recovers from syntax errors, so analysis continues
        // on whatever did parse; the warning flags the degraded result.
        if parser::has_parse_errors(&tree) {
            issues.add(Issue::warning(
                "parse.error",
                "File did not fully parse; analysis may be incomplete",
                path.to_path_buf(),
                1,
                1,
            ));
        }

        let sites = extract::extract_call_sites(&tree, source);
        let ctx = CheckContext { file_path: path };
        issues.extend(check_call_sites(&sites, &self.counts, &ctx));
        Ok(issues)
    }

    /// Analyze a single file
    pub fn analyze_file(&self, path: &Path) -> Result<IssueCollection, AnalyzeError> {
        let source = fs::read_to_string(path)?;
        self.analyze_source(path, &source)
    }

    /// Analyze files in parallel and combine the results
    ///
    /// Per-file failures are reported to stderr and skipped; one
    /// unreadable file does not abort the run.
    pub fn analyze_files(&self, files: &[PathBuf]) -> IssueCollection {
        let results: Vec<_> = files
            .par_iter()
            .map(|file| (file, self.analyze_file(file)))
            .collect();

        let mut combined = IssueCollection::new();
        for (file, result) in results {
            match result {
                Ok(issues) => combined.extend(issues.into_issues()),
                Err(e) => eprintln!("Warning: {}: {}", file.display(), e),
            }
        }
        combined.sort();
        combined
    }

    /// Analyze files and directories, walking directories recursively
    pub fn analyze_paths(&self, paths: &[PathBuf]) -> IssueCollection {
        self.analyze_files(&collect_files(paths))
    }
}

/// Collect TypeScript files under the given files and directories
pub fn collect_files(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_file() {
            files.push(path.clone());
        } else if path.is_dir() {
            for entry in WalkDir::new(path)
                .follow_links(true)
                .into_iter()
                .filter_map(|e| e.ok())
            {
                let entry_path = entry.path();
                if entry_path.is_file() && parser::is_typescript_file(entry_path) {
                    files.push(entry_path.to_path_buf());
                }
            }
        }
    }
    files
}

/// Errors that can occur during analysis
#[derive(Debug, thiserror::Error)]
pub enum AnalyzeError {
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse {}", .0.display())]
    Parse(PathBuf),
}
