use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use pitchscope_profile::{
    profile::{Profile, ProfileSource},
    summary::DistributionSummary,
};
use serde::{Deserialize, Serialize};

/// A stored reference model: an elite pitcher's per-feature statistics.
///
/// Models are keyed by `model_name` (the `{player}_{pitch_type}_v1`
/// convention) and carry a `display_name` for reports. `profile_data`
/// entries may be partial; usability per feature is decided at scoring
/// time, not at load time.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReferenceModel {
    pub model_name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub trained_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub profile_data: BTreeMap<String, DistributionSummary>,
}

impl ReferenceModel {
    /// The name to show in reports: `display_name` when present, the
    /// model name otherwise.
    #[must_use]
    pub fn display_label(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.model_name)
    }

    /// Number of features the model carries statistics for.
    #[must_use]
    pub fn num_features(&self) -> usize {
        self.profile_data.len()
    }

    /// Converts the stored model into a comparison [`Profile`].
    ///
    /// Feature keys are normalized here, whatever casing the stored file
    /// used.
    #[must_use]
    pub fn into_profile(self) -> Profile {
        let label = self.display_name.unwrap_or_else(|| self.model_name.clone());
        let source = ProfileSource::Reference {
            model_name: self.model_name,
        };
        Profile::new(label, source, self.profile_data)
    }
}
