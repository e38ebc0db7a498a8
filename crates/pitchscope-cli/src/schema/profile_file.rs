use std::collections::BTreeMap;

use pitchscope_profile::{
    profile::{Profile, ProfileSource},
    summary::DistributionSummary,
};
use serde::Deserialize;

/// A profile supplied as a file: either a stored reference model or the
/// output of `build-profile`.
///
/// The two layouts are distinguished by their fields (`model_name` +
/// `profile_data` vs `label` + `source` + `features`).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ProfileFile {
    Model(super::reference_model::ReferenceModel),
    Profile(ProfileDoc),
}

/// The serialized form of a built [`Profile`].
///
/// Deserialized separately so that keys pass through [`Profile::new`]'s
/// normalization again; hand-edited files cannot bypass it.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileDoc {
    pub label: String,
    pub source: ProfileSource,
    #[serde(default)]
    pub features: BTreeMap<String, DistributionSummary>,
}

impl ProfileFile {
    /// Converts whichever layout was read into a comparison [`Profile`].
    #[must_use]
    pub fn into_profile(self) -> Profile {
        match self {
            ProfileFile::Model(model) => model.into_profile(),
            ProfileFile::Profile(doc) => Profile::new(doc.label, doc.source, doc.features),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_model_layout() {
        let file: ProfileFile = serde_json::from_str(
            r#"{
                "model_name": "Imanaga, Shota_all_v1",
                "profile_data": {"velocity": {"mean": 149.0, "std": 2.0}}
            }"#,
        )
        .unwrap();

        let profile = file.into_profile();
        assert_eq!(profile.label(), "Imanaga, Shota_all_v1");
        assert_eq!(profile.len(), 1);
    }

    #[test]
    fn test_built_profile_layout() {
        let file: ProfileFile = serde_json::from_str(
            r#"{
                "label": "Jane Doe historical average",
                "source": {"History": {"player_name": "Jane Doe"}},
                "features": {"Velocity": {"mean": 142.0, "std": 3.0}}
            }"#,
        )
        .unwrap();

        let profile = file.into_profile();
        assert_eq!(profile.label(), "Jane Doe historical average");
        // Keys are re-normalized on the way in
        assert!(profile.summary("velocity").is_some());
        assert_eq!(
            profile.source(),
            &ProfileSource::History {
                player_name: "Jane Doe".to_string()
            }
        );
    }
}
