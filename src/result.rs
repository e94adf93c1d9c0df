//! Result types for outlining output.

use serde::{Deserialize, Serialize};

/// Counts from one pipeline run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineReport {
    /// Text nodes wrapped into new outline units by this run.
    pub wrapped: usize,

    /// Clone containers whose stroke was (re)applied by this run.
    ///
    /// Counted per root, so overlapping roots count a clone once per root.
    pub refreshed: usize,
}

/// Serialized document plus the run's counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineResult {
    /// The full document after outlining, serialized as HTML.
    pub html: String,

    /// What the run did.
    pub report: OutlineReport,
}
