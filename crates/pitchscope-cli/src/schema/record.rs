use chrono::{DateTime, Utc};
use pitchscope_profile::feature::{FeatureSample, FeatureVector};
use serde::Deserialize;
use serde_json::{Map, Value};

/// One stored analysis session, as exported from the results database.
///
/// Only the fields the profile builder needs are read; everything else in
/// a record (scores, video URLs, keyframe links) is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisRecord {
    /// The player the session belongs to.
    pub player_name: String,
    /// When the analysis was stored.
    pub created_at: DateTime<Utc>,
    /// Extracted biomechanical measurements, as raw JSON values.
    #[serde(default)]
    pub biomechanics_features: Map<String, Value>,
}

impl AnalysisRecord {
    /// Converts the record into an engine-ready sample.
    ///
    /// Non-numeric feature values survive as named-but-absent entries, so
    /// they are excluded from aggregates without losing the feature name.
    pub fn to_sample(&self) -> FeatureSample {
        let features = feature_vector_from_json(&self.biomechanics_features);
        FeatureSample::new(self.created_at, features)
    }
}

/// Converts a raw JSON feature map into a [`FeatureVector`], keeping only
/// numeric values.
pub fn feature_vector_from_json(raw: &Map<String, Value>) -> FeatureVector {
    raw.iter()
        .map(|(name, value)| (name.clone(), value.as_f64()))
        .collect()
}

/// Selects one player's samples from exported records, optionally keeping
/// only those created strictly before `before`.
pub fn collect_history(
    records: &[AnalysisRecord],
    player_name: &str,
    before: Option<DateTime<Utc>>,
) -> Vec<FeatureSample> {
    records
        .iter()
        .filter(|record| record.player_name == player_name)
        .map(AnalysisRecord::to_sample)
        .filter(|sample| before.is_none_or(|cutoff| sample.recorded_before(cutoff)))
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn record(player: &str, day: u32, features: Value) -> AnalysisRecord {
        let Value::Object(features) = features else {
            panic!("expected an object");
        };
        AnalysisRecord {
            player_name: player.to_string(),
            created_at: Utc.with_ymd_and_hms(2025, 6, day, 0, 0, 0).unwrap(),
            biomechanics_features: features,
        }
    }

    #[test]
    fn test_non_numeric_values_become_absent() {
        let record = record(
            "Jane Doe",
            1,
            serde_json::json!({
                "release_angle": 34.5,
                "release_frame": 42,
                "handedness": "left",
                "stride_length": null,
            }),
        );

        let sample = record.to_sample();
        assert_eq!(sample.features.value("release_angle"), Some(34.5));
        assert_eq!(sample.features.value("release_frame"), Some(42.0));
        assert_eq!(sample.features.value("handedness"), None);
        assert_eq!(sample.features.value("stride_length"), None);
        // The names are still carried
        assert_eq!(sample.features.len(), 4);
    }

    #[test]
    fn test_record_ignores_unrelated_fields() {
        let json = serde_json::json!({
            "id": 7,
            "player_name": "Jane Doe",
            "created_at": "2025-06-01T00:00:00Z",
            "pose_score": 88,
            "video_path": "https://example.invalid/rendered.mp4",
            "biomechanics_features": {"velocity": 142.0},
        });
        let record: AnalysisRecord = serde_json::from_value(json).unwrap();
        assert_eq!(record.biomechanics_features.len(), 1);
    }

    #[test]
    fn test_missing_feature_map_defaults_to_empty() {
        let json = serde_json::json!({
            "player_name": "Jane Doe",
            "created_at": "2025-06-01T00:00:00Z",
        });
        let record: AnalysisRecord = serde_json::from_value(json).unwrap();
        assert!(record.biomechanics_features.is_empty());
    }

    #[test]
    fn test_collect_history_filters_by_player_and_cutoff() {
        let records = vec![
            record("Jane Doe", 1, serde_json::json!({"velocity": 140.0})),
            record("Jane Doe", 10, serde_json::json!({"velocity": 144.0})),
            record("Someone Else", 2, serde_json::json!({"velocity": 150.0})),
        ];

        let all = collect_history(&records, "Jane Doe", None);
        assert_eq!(all.len(), 2);

        // The cutoff is exclusive
        let cutoff = Utc.with_ymd_and_hms(2025, 6, 10, 0, 0, 0).unwrap();
        let before = collect_history(&records, "Jane Doe", Some(cutoff));
        assert_eq!(before.len(), 1);
        assert_eq!(before[0].features.value("velocity"), Some(140.0));
    }
}
