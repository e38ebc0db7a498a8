//! Historical-average profile construction
//!
//! [`build_profile`] aggregates a subject's session history into a
//! [`Profile`]: per feature, every session that measured the feature
//! contributes one value, and the observed values are condensed into a
//! [`DistributionSummary`].
//!
//! The builder is a pure function over its input. Sample order is
//! irrelevant, nothing is cached between calls, and any recency filtering
//! (e.g. "sessions before this date only") is the caller's job.

use std::collections::BTreeMap;

use crate::{
    feature::FeatureSample,
    profile::{Profile, ProfileSource},
    summary::DistributionSummary,
};

/// Builds a subject's historical-average profile.
///
/// Per feature name observed anywhere in the history, every present value
/// is collected (sessions where the feature is absent contribute nothing —
/// absence is never treated as zero) and summarized. Feature keys in the
/// resulting profile are lower-cased.
///
/// # Returns
///
/// * `Some(Profile)` labeled as the subject's own history, if at least one
///   feature has at least one observed value
/// * `None` - if the history is empty or contains no measured values;
///   "insufficient history" is an expected outcome for new subjects, not
///   an error
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use pitchscope_profile::{
///     builder::build_profile,
///     feature::{FeatureSample, FeatureVector},
/// };
///
/// let session = |day, angle, speed| {
///     let mut features = FeatureVector::new();
///     features.insert("Release_Angle", angle);
///     features.insert("Arm_Speed", speed);
///     FeatureSample::new(
///         Utc.with_ymd_and_hms(2025, 4, day, 0, 0, 0).unwrap(),
///         features,
///     )
/// };
/// let history = vec![
///     session(1, Some(33.0), Some(20.5)),
///     session(8, Some(35.0), None),
/// ];
///
/// let profile = build_profile("Jane Doe", &history).unwrap();
/// assert_eq!(profile.label(), "Jane Doe historical average");
/// assert_eq!(profile.summary("release_angle").unwrap().mean, Some(34.0));
/// // Only one session measured arm speed; its spread is zero
/// assert_eq!(profile.summary("arm_speed").unwrap().std, Some(0.0));
/// ```
#[must_use]
pub fn build_profile(player_name: &str, history: &[FeatureSample]) -> Option<Profile> {
    if history.is_empty() {
        return None;
    }

    let mut values_by_feature: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    for sample in history {
        for (name, value) in sample.features.iter() {
            if let Some(value) = value {
                values_by_feature
                    .entry(name.to_lowercase())
                    .or_default()
                    .push(value);
            }
        }
    }

    let source = ProfileSource::History {
        player_name: player_name.to_string(),
    };
    let label = source.to_string();
    let profile = Profile::new(
        label,
        source,
        values_by_feature.into_iter().filter_map(|(name, values)| {
            DistributionSummary::from_values(&values).map(|summary| (name, summary))
        }),
    );

    if profile.is_empty() {
        return None;
    }
    Some(profile)
}
