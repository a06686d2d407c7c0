//! The explicit-generics audit
//!
//! Given a call-site view and the canonical count map, decides whether
//! the site violates its configured minimum and synthesizes the issue.
//! This is a minimum-count check: generics beyond the expected count are
//! never flagged.

use crate::callsite::CallSite;
use crate::config::ExpectedCounts;
use crate::example::example_generics;
use crate::issue::Issue;
use crate::names::candidate_names;
use std::path::Path;

/// Check id for a call with no explicit generics at all
pub const MISSING_GENERICS: &str = "generics.missing";
/// Check id for a call with some, but too few, explicit generics
pub const TOO_FEW_GENERICS: &str = "generics.tooFew";

/// Per-file context provided to the audit
pub struct CheckContext<'a> {
    /// The file being analyzed
    pub file_path: &'a Path,
}

/// Audit a single call site against the canonical map
///
/// Returns `None` when no configured name applies or the site already
/// carries enough explicit generics.
pub fn check_call_site(
    site: &CallSite,
    counts: &ExpectedCounts,
    ctx: &CheckContext<'_>,
) -> Option<Issue> {
    let names = candidate_names(site);
    let matched = names.iter().find(|name| counts.contains(name.as_str()))?;
    let expected = counts.get(matched)?;
    if expected == 0 {
        // A zero minimum disables the entry. The config loader rejects
        // zero upstream; this only guards hand-built maps.
        return None;
    }

    let actual = site.explicit_generic_count();
    if actual >= expected {
        return None;
    }

    // The displayed name is always the most specific candidate, even
    // when a wildcard or bare-name entry was the one that matched.
    let name = &names[0];
    let generics = example_generics(expected);
    let (check_id, message) = if actual == 0 {
        (
            MISSING_GENERICS,
            format!(
                "{} '{}' must be called with explicit generics. \
                 Replace with '{}<{}>(...)' to fix this.",
                site.kind.label(),
                name,
                name,
                generics
            ),
        )
    } else {
        (
            TOO_FEW_GENERICS,
            format!(
                "{} '{}' called with too few explicit generics. \
                 Received {}, expected {}. \
                 Replace with '{}<{}>(...)' to fix this.",
                site.kind.label(),
                name,
                actual,
                expected,
                name,
                generics
            ),
        )
    };

    Some(Issue::error(
        check_id,
        message,
        ctx.file_path.to_path_buf(),
        site.callee_span.line,
        site.callee_span.column,
    ))
}

/// Audit every call site extracted from one file
pub fn check_call_sites(
    sites: &[CallSite],
    counts: &ExpectedCounts,
    ctx: &CheckContext<'_>,
) -> Vec<Issue> {
    sites
        .iter()
        .filter_map(|site| check_call_site(site, counts, ctx))
        .collect()
}
