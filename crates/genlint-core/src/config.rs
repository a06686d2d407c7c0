//! Rule configuration: accepted input shapes and the canonical count map
//!
//! Configuration arrives in one of two shapes: a list of callable names
//! (each requiring exactly one explicit generic) or a map of names to
//! minimum counts. Both normalize into `ExpectedCounts` before analysis
//! starts; the map is immutable afterwards.

use serde::Deserialize;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

/// Where the advisory points users for details
pub const DOCS_URL: &str = "https://github.com/genlint/genlint";

/// Raw rule options as written in configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RuleOptions {
    /// `require = ["useState", "Map"]`
    Names(Vec<String>),
    /// `require = { Map = 2, "*.get" = 1 }`
    Counts(HashMap<String, usize>),
}

/// Canonical mapping from callable name to minimum explicit-generic count
#[derive(Debug, Clone, Default)]
pub struct ExpectedCounts {
    counts: HashMap<String, usize>,
}

impl ExpectedCounts {
    /// An empty map; the audit matches nothing
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize raw options into the canonical map
    ///
    /// List entries require exactly one explicit generic; map entries are
    /// taken verbatim. Duplicate names resolve last-write-wins. Counts
    /// must be at least 1; the configuration loader rejects zero before
    /// this point and the audit treats a zero defensively as disabled.
    pub fn from_options(options: &RuleOptions) -> Self {
        let mut counts = HashMap::new();
        match options {
            RuleOptions::Names(names) => {
                for name in names {
                    counts.insert(name.clone(), 1);
                }
            }
            RuleOptions::Counts(map) => {
                for (name, count) in map {
                    counts.insert(name.clone(), *count);
                }
            }
        }
        Self { counts }
    }

    pub fn get(&self, name: &str) -> Option<usize> {
        self.counts.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.counts.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }
}

/// Tracks whether the unconfigured advisory has been emitted
///
/// Process-scoped: the host creates one flag at startup and shares it
/// across every file it analyzes, so the advisory prints at most once
/// per process. Reset only happens at process start. Tests create a
/// fresh flag per case.
#[derive(Debug, Default)]
pub struct AdvisoryFlag {
    warned: AtomicBool,
}

impl AdvisoryFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` the first time it is called, `false` afterwards
    pub fn trigger(&self) -> bool {
        !self.warned.swap(true, Ordering::Relaxed)
    }

    pub fn has_warned(&self) -> bool {
        self.warned.load(Ordering::Relaxed)
    }
}

/// Emit the one-time advisory for a run with no configured names
pub fn warn_unconfigured(flag: &AdvisoryFlag) {
    if !flag.trigger() {
        return;
    }
    eprintln!("genlint was not passed any function or constructor names to check");
    eprintln!("Add a list of names, or a map of names to expected counts, under [generics] in .genlint.toml");
    eprintln!("For more details visit: {}", DOCS_URL);
}
