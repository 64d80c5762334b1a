//! Core types shared across gen-sources modules

use std::path::PathBuf;

/// Result of source discovery
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoveryResult {
    /// Manifest entries, forward-slash separated and relative to the base directory
    pub sources: Vec<String>,
    /// Walked entries that matched none of the recognized suffixes
    pub skipped: usize,
}

impl DiscoveryResult {
    pub fn source_count(&self) -> usize {
        self.sources.len()
    }
}

/// What a successful write produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub output: PathBuf,
    pub source_count: usize,
}

/// State of the manifest on disk compared with a fresh rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    UpToDate,
    Stale,
    Missing,
}

impl std::fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckOutcome::UpToDate => write!(f, "up to date"),
            CheckOutcome::Stale => write!(f, "out of date"),
            CheckOutcome::Missing => write!(f, "missing"),
        }
    }
}

impl CheckOutcome {
    pub fn is_up_to_date(self) -> bool {
        self == CheckOutcome::UpToDate
    }
}
