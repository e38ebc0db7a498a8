//! Comparison results and per-feature breakdowns

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// How one live feature compared against its profile entry.
///
/// `z_score` is the continuous standardized deviation; `score` is the
/// feature's 0-100 value truncated to an integer for display. The
/// aggregate in [`ComparisonResult`] is computed from the untruncated
/// per-feature values, so summing `score` fields will not in general
/// reproduce it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreDetail {
    /// The live measured value.
    pub user_value: f64,
    /// The profile mean the value was compared against.
    pub mean: f64,
    /// The profile standard deviation the value was compared against.
    pub std: f64,
    /// Absolute deviation from the mean in units of the standard
    /// deviation; 0 when the profile has no observed spread.
    pub z_score: f64,
    /// Per-feature score in `[0, 100]`, truncated to an integer.
    pub score: u8,
}

/// The outcome of scoring one feature vector against one profile.
///
/// Owned outright by the caller; nothing is shared or mutated after the
/// comparison returns.
///
/// A `final_score` of 0 with empty `details` means no feature could be
/// compared (no profile, no overlap, or no usable entries). A 0 with
/// populated `details` is a genuine score: every compared feature deviated
/// by four standard deviations or more.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Aggregate quality score in `[0, 100]`.
    pub final_score: u8,
    /// Per-feature breakdown, keyed by the live vector's original feature
    /// names.
    pub details: BTreeMap<String, ScoreDetail>,
}

impl ComparisonResult {
    /// The "cannot score" sentinel: score 0 with no details.
    #[must_use]
    pub fn unscored() -> Self {
        Self {
            final_score: 0,
            details: BTreeMap::new(),
        }
    }

    /// Whether this result means "nothing could be compared" rather than
    /// "compared and scored 0".
    #[must_use]
    pub fn is_unscored(&self) -> bool {
        self.details.is_empty()
    }
}
