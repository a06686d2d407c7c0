//! genlint-core: Core audit logic for the explicit-generics check
//!
//! This crate provides:
//! - `CallSite`: A read-only view of one call, constructor, or tagged-template invocation
//! - `ExpectedCounts`: The canonical name to minimum-generic-count map
//! - `candidate_names()`: Candidate-name resolution for a call site
//! - `check_call_site()`: The audit that produces issues
//! - `Issue`/`IssueCollection`: Diagnostic types
//!
//! The crate is parser-agnostic: the host extracts `CallSite` views from
//! whatever syntax tree it owns and hands them to the audit.

pub mod callsite;
pub mod check;
pub mod config;
pub mod example;
pub mod issue;
pub mod names;

pub use callsite::{CallKind, CallSite, Callee, Span};
pub use check::{check_call_site, check_call_sites, CheckContext};
pub use config::{warn_unconfigured, AdvisoryFlag, ExpectedCounts, RuleOptions};
pub use example::example_generics;
pub use issue::{Issue, IssueCollection, Severity};
pub use names::candidate_names;
