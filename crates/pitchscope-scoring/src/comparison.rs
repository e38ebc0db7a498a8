//! The comparison scoring algorithm

use pitchscope_profile::{feature::FeatureVector, profile::Profile};

use crate::result::{ComparisonResult, ScoreDetail};

/// Score at the profile mean; every standard deviation of distance costs
/// [`SCORE_PER_SIGMA`] points, reaching 0 at four standard deviations.
const FULL_SCORE: f64 = 100.0;
const SCORE_PER_SIGMA: f64 = 25.0;

/// Scores one live feature vector against one benchmark profile.
///
/// Each live feature is looked up in the profile case-insensitively and
/// contributes `max(0, 100 - 25 * z)` to the average, where `z` is the
/// absolute deviation from the profile mean in standard deviations. A
/// profile entry with a standard deviation of exactly 0 contributes `z = 0`
/// — a full-score match no matter how far the live value is from the mean.
/// This keeps single-sample profile entries from penalizing anyone, at the
/// cost of masking genuine deviation for those entries.
///
/// Features are skipped silently (excluded from the average, not counted
/// as zero) when the live value is absent, the profile has no entry for
/// the name, or the entry lacks a usable mean or standard deviation.
///
/// The aggregate is the arithmetic mean of the untruncated per-feature
/// scores, truncated to an integer once at the end. Per-feature detail
/// scores are truncated independently for display, so the aggregate is
/// not derivable from the detail integers.
///
/// # Returns
///
/// The aggregate score and per-feature details, keyed by the live
/// vector's original feature names. When nothing could be compared — the
/// profile is empty, the vector is empty, or every feature was skipped —
/// the result is the `(0, {})` sentinel, never an error.
///
/// # Examples
///
/// ```
/// use pitchscope_profile::{
///     feature::FeatureVector,
///     profile::{Profile, ProfileSource},
///     summary::DistributionSummary,
/// };
/// use pitchscope_scoring::comparison::score_features;
///
/// let profile = Profile::new(
///     "league average",
///     ProfileSource::Reference { model_name: "league_all_v1".to_string() },
///     [(
///         "release_angle".to_string(),
///         DistributionSummary {
///             mean: Some(33.0),
///             std: Some(2.0),
///             ..Default::default()
///         },
///     )],
/// );
///
/// let mut features = FeatureVector::new();
/// features.insert("Release_Angle", Some(35.0));
///
/// let result = score_features(&features, &profile);
/// assert_eq!(result.final_score, 75);
/// // Detail keys keep the live vector's casing
/// assert!(result.details.contains_key("Release_Angle"));
/// ```
#[must_use]
pub fn score_features(features: &FeatureVector, profile: &Profile) -> ComparisonResult {
    if profile.is_empty() {
        return ComparisonResult::unscored();
    }

    let mut total_score = 0.0;
    let mut scored_count = 0_u32;
    let mut details = std::collections::BTreeMap::new();

    for (name, value) in features.iter() {
        let Some(user_value) = value else {
            continue;
        };
        let Some(summary) = profile.summary(name) else {
            continue;
        };
        let Some((mean, std)) = summary.comparison_stats() else {
            continue;
        };

        let z_score = if std == 0.0 {
            0.0
        } else {
            ((user_value - mean) / std).abs()
        };
        let feature_score = (FULL_SCORE - SCORE_PER_SIGMA * z_score).max(0.0);

        total_score += feature_score;
        scored_count += 1;
        details.insert(
            name.to_string(),
            ScoreDetail {
                user_value,
                mean,
                std,
                z_score,
                score: truncate_score(feature_score),
            },
        );
    }

    if scored_count == 0 {
        return ComparisonResult::unscored();
    }

    ComparisonResult {
        final_score: truncate_score(total_score / f64::from(scored_count)),
        details,
    }
}

/// Truncates a score in `[0, 100]` toward zero.
#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn truncate_score(score: f64) -> u8 {
    score as u8
}

#[cfg(test)]
mod tests {
    use pitchscope_profile::{profile::ProfileSource, summary::DistributionSummary};

    use super::*;

    fn profile(entries: &[(&str, f64, f64)]) -> Profile {
        Profile::new(
            "test benchmark",
            ProfileSource::Reference {
                model_name: "test_all_v1".to_string(),
            },
            entries.iter().map(|(name, mean, std)| {
                (
                    (*name).to_string(),
                    DistributionSummary {
                        mean: Some(*mean),
                        std: Some(*std),
                        ..Default::default()
                    },
                )
            }),
        )
    }

    fn vector(entries: &[(&str, Option<f64>)]) -> FeatureVector {
        entries
            .iter()
            .map(|(name, value)| ((*name).to_string(), *value))
            .collect()
    }

    #[test]
    fn test_one_sigma_deviation_scores_75() {
        let profile = profile(&[("velocity", 80.0, 4.0)]);
        let features = vector(&[("velocity", Some(84.0))]);

        let result = score_features(&features, &profile);
        assert_eq!(result.final_score, 75);
        let detail = &result.details["velocity"];
        assert_eq!(detail.user_value, 84.0);
        assert_eq!(detail.mean, 80.0);
        assert_eq!(detail.std, 4.0);
        assert_eq!(detail.z_score, 1.0);
        assert_eq!(detail.score, 75);
    }

    #[test]
    fn test_zero_spread_entry_always_scores_full() {
        // Spread of 0 means z is defined as 0; the deviation is masked.
        // Intentional for entries built from a single historical sample.
        let profile = profile(&[("velocity", 80.0, 4.0), ("angle", 30.0, 0.0)]);
        let features = vector(&[("velocity", Some(88.0)), ("angle", Some(45.0))]);

        let result = score_features(&features, &profile);
        assert_eq!(result.details["velocity"].score, 50);
        assert_eq!(result.details["angle"].z_score, 0.0);
        assert_eq!(result.details["angle"].score, 100);
        assert_eq!(result.final_score, 75);
    }

    #[test]
    fn test_exact_match_on_every_feature_is_100() {
        let profile = profile(&[("a", 10.0, 1.0), ("b", -4.0, 2.5), ("c", 0.0, 0.1)]);
        let features = vector(&[("a", Some(10.0)), ("b", Some(-4.0)), ("c", Some(0.0))]);

        let result = score_features(&features, &profile);
        assert_eq!(result.final_score, 100);
        assert!(result.details.values().all(|detail| detail.score == 100));
    }

    #[test]
    fn test_score_floors_at_zero_beyond_four_sigma() {
        let profile = profile(&[("velocity", 80.0, 4.0)]);

        let at_four_sigma = score_features(&vector(&[("velocity", Some(96.0))]), &profile);
        assert_eq!(at_four_sigma.final_score, 0);
        assert!(!at_four_sigma.is_unscored());

        let far_beyond = score_features(&vector(&[("velocity", Some(400.0))]), &profile);
        assert_eq!(far_beyond.final_score, 0);
        assert_eq!(far_beyond.details["velocity"].score, 0);
    }

    #[test]
    fn test_feature_score_is_non_increasing_in_z() {
        let profile = profile(&[("velocity", 0.0, 1.0)]);
        let mut last_score = u8::MAX;
        for step in 0..=20 {
            let value = f64::from(step) * 0.25;
            let result = score_features(&vector(&[("velocity", Some(value))]), &profile);
            assert!(result.final_score <= last_score, "score rose at z={value}");
            last_score = result.final_score;
        }
        assert_eq!(last_score, 0);
    }

    #[test]
    fn test_aggregate_truncates_once_at_the_end() {
        // Per-feature scores 1.5 and 0.75: the float mean is 1.125, so the
        // aggregate is 1. Averaging the truncated details (1 and 0) would
        // give 0 instead.
        let profile = profile(&[("a", 0.0, 4.0), ("b", 0.0, 4.0)]);
        let features = vector(&[("a", Some(15.76)), ("b", Some(15.88))]);

        let result = score_features(&features, &profile);
        assert_eq!(result.details["a"].score, 1);
        assert_eq!(result.details["b"].score, 0);
        assert_eq!(result.final_score, 1);
    }

    #[test]
    fn test_lookup_is_case_insensitive_and_details_keep_live_casing() {
        let profile = profile(&[("max_shoulder_rotation", 160.0, 5.0)]);
        let features = vector(&[("Max_Shoulder_Rotation", Some(160.0))]);

        let result = score_features(&features, &profile);
        assert_eq!(result.final_score, 100);
        assert!(result.details.contains_key("Max_Shoulder_Rotation"));
        assert!(!result.details.contains_key("max_shoulder_rotation"));
    }

    #[test]
    fn test_unmatched_and_absent_features_are_skipped_silently() {
        let profile = profile(&[("velocity", 80.0, 4.0)]);
        let features = vector(&[
            ("velocity", Some(84.0)),
            ("velocity_unknown_to_profile", Some(1.0)),
            ("stride_length", None),
        ]);

        let result = score_features(&features, &profile);
        // Only velocity participates; the skips neither penalize nor appear
        assert_eq!(result.final_score, 75);
        assert_eq!(result.details.len(), 1);
    }

    #[test]
    fn test_entry_without_mean_or_std_is_skipped() {
        let incomplete = Profile::new(
            "test benchmark",
            ProfileSource::Reference {
                model_name: "test_all_v1".to_string(),
            },
            [
                (
                    "mean_only".to_string(),
                    DistributionSummary {
                        mean: Some(10.0),
                        ..Default::default()
                    },
                ),
                (
                    "std_only".to_string(),
                    DistributionSummary {
                        std: Some(2.0),
                        ..Default::default()
                    },
                ),
                (
                    "complete".to_string(),
                    DistributionSummary {
                        mean: Some(10.0),
                        std: Some(2.0),
                        ..Default::default()
                    },
                ),
            ],
        );
        let features = vector(&[
            ("mean_only", Some(10.0)),
            ("std_only", Some(10.0)),
            ("complete", Some(10.0)),
        ]);

        let result = score_features(&features, &incomplete);
        assert_eq!(result.final_score, 100);
        assert_eq!(result.details.len(), 1);
        assert!(result.details.contains_key("complete"));
    }

    #[test]
    fn test_empty_profile_and_empty_vector_are_unscored() {
        let empty_profile = Profile::new(
            "empty",
            ProfileSource::Reference {
                model_name: "empty_all_v1".to_string(),
            },
            [],
        );
        let features = vector(&[("velocity", Some(84.0))]);
        assert!(score_features(&features, &empty_profile).is_unscored());

        let populated = profile(&[("velocity", 80.0, 4.0)]);
        assert!(score_features(&FeatureVector::new(), &populated).is_unscored());
    }

    #[test]
    fn test_no_overlap_is_unscored() {
        let populated = profile(&[("velocity", 80.0, 4.0)]);
        let features = vector(&[("spin_rate", Some(2200.0))]);
        assert!(score_features(&features, &populated).is_unscored());
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let profile = profile(&[("a", 3.1, 0.7), ("b", -2.0, 1.3), ("c", 50.0, 0.0)]);
        let features = vector(&[("a", Some(2.6)), ("b", Some(-0.5)), ("c", Some(48.0))]);

        let first = score_features(&features, &profile);
        let second = score_features(&features, &profile);
        assert_eq!(first, second);
    }

    #[test]
    fn test_final_score_stays_within_bounds() {
        let profile = profile(&[("a", 0.0, 1.0), ("b", 10.0, 2.0)]);
        for (a, b) in [(0.0, 10.0), (1.7, 13.2), (-50.0, 10.0), (3.9, 2.0)] {
            let result = score_features(&vector(&[("a", Some(a)), ("b", Some(b))]), &profile);
            assert!(result.final_score <= 100);
        }
    }
}
