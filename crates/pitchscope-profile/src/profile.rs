//! Comparison profiles with normalized feature keys
//!
//! A [`Profile`] maps feature names to [`DistributionSummary`] entries and
//! identifies where the statistics came from. Keys are lower-cased exactly
//! once, at construction, so that every later lookup only has to normalize
//! the query side — the builder and the scorer can never disagree on
//! normalization rules.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::summary::DistributionSummary;

/// Where a profile's statistics came from.
///
/// Reference profiles are loaded read-only from an external model store and
/// never mutated here; history profiles are computed fresh per request and
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, Serialize, Deserialize)]
pub enum ProfileSource {
    /// A stored reference model, e.g. an elite pitcher's statistics.
    #[display("reference model '{model_name}'")]
    Reference {
        /// Lookup key of the model in the external store.
        model_name: String,
    },
    /// Computed on the fly from the subject's own session history.
    #[display("{player_name} historical average")]
    History {
        /// The subject the history belongs to.
        player_name: String,
    },
}

/// A per-feature statistical summary used as a comparison benchmark.
///
/// # Examples
///
/// ```
/// use pitchscope_profile::{
///     profile::{Profile, ProfileSource},
///     summary::DistributionSummary,
/// };
///
/// let source = ProfileSource::Reference {
///     model_name: "Sasaki, Roki_all_v1".to_string(),
/// };
/// let velocity = DistributionSummary::from_values(&[148.0, 152.0, 150.0]).unwrap();
/// let profile = Profile::new(
///     "Sasaki, Roki",
///     source,
///     [("Velocity".to_string(), velocity)],
/// );
///
/// // Keys were normalized at construction; lookup is case-insensitive
/// assert!(profile.summary("VELOCITY").is_some());
/// assert!(profile.summary("velocity").is_some());
/// assert!(profile.summary("spin_rate").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    label: String,
    source: ProfileSource,
    features: BTreeMap<String, DistributionSummary>,
}

impl Profile {
    /// Creates a profile, lower-casing every feature key.
    ///
    /// If two keys collapse to the same lower-cased name, the later entry
    /// wins.
    #[must_use]
    pub fn new<I>(label: impl Into<String>, source: ProfileSource, features: I) -> Self
    where
        I: IntoIterator<Item = (String, DistributionSummary)>,
    {
        let features = features
            .into_iter()
            .map(|(name, summary)| (name.to_lowercase(), summary))
            .collect();
        Self {
            label: label.into(),
            source,
            features,
        }
    }

    /// Human-readable name for reports.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Where the statistics came from.
    #[must_use]
    pub fn source(&self) -> &ProfileSource {
        &self.source
    }

    /// Case-insensitive lookup of one feature's summary.
    #[must_use]
    pub fn summary(&self, feature_name: &str) -> Option<&DistributionSummary> {
        self.features.get(&feature_name.to_lowercase())
    }

    /// Iterates over `(normalized name, summary)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DistributionSummary)> {
        self.features
            .iter()
            .map(|(name, summary)| (name.as_str(), summary))
    }

    /// Number of features the profile summarizes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Whether the profile summarizes no features at all.
    ///
    /// An empty profile cannot be compared against; the scorer reports
    /// "cannot score" for it.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}
