//! Feature vectors and timestamped samples
//!
//! A [`FeatureVector`] is one session's worth of extracted biomechanical
//! measurements: a mapping from feature name to a value that may be absent.
//! A [`FeatureSample`] tags a vector with the time it was recorded, which
//! callers use to apply recency windows before handing history to the
//! profile builder.
//!
//! Vectors are immutable once handed to the engine; the builder and scorer
//! only read them.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One session's extracted measurements, keyed by feature name.
///
/// Keys keep whatever casing the extraction stage produced; matching
/// against profiles is case-insensitive and happens at lookup time.
/// A value of `None` records that the feature could not be measured for
/// this session — it is carried, not dropped, so downstream consumers can
/// distinguish "absent" from "never extracted".
///
/// # Examples
///
/// ```
/// use pitchscope_profile::feature::FeatureVector;
///
/// let mut features = FeatureVector::new();
/// features.insert("Max_Shoulder_Rotation", Some(168.2));
/// features.insert("Stride_Length", None);
///
/// assert_eq!(features.value("Max_Shoulder_Rotation"), Some(168.2));
/// assert_eq!(features.value("Stride_Length"), None);
/// assert_eq!(features.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureVector {
    values: BTreeMap<String, Option<f64>>,
}

impl FeatureVector {
    /// Creates an empty feature vector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a measurement, replacing any previous value for the name.
    pub fn insert(&mut self, name: impl Into<String>, value: Option<f64>) {
        self.values.insert(name.into(), value);
    }

    /// Returns the measured value for `name`, or `None` if the feature is
    /// absent or was recorded without a value.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied().flatten()
    }

    /// Iterates over `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<f64>)> {
        self.values.iter().map(|(name, value)| (name.as_str(), *value))
    }

    /// Number of named features, including those without a value.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the vector names no features at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(String, Option<f64>)> for FeatureVector {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (String, Option<f64>)>,
    {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// One historical feature vector tagged with its recording time.
///
/// The timestamp exists only so callers can filter history by a cutoff
/// before building a profile; the builder itself ignores it and treats the
/// history as an unordered collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureSample {
    /// When the session was recorded.
    pub recorded_at: DateTime<Utc>,
    /// The measurements extracted from the session.
    pub features: FeatureVector,
}

impl FeatureSample {
    /// Creates a sample from a recording time and its measurements.
    #[must_use]
    pub fn new(recorded_at: DateTime<Utc>, features: FeatureVector) -> Self {
        Self {
            recorded_at,
            features,
        }
    }

    /// Whether this sample was recorded strictly before `cutoff`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use pitchscope_profile::feature::{FeatureSample, FeatureVector};
    ///
    /// let recorded = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
    /// let sample = FeatureSample::new(recorded, FeatureVector::new());
    ///
    /// let later = Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).unwrap();
    /// assert!(sample.recorded_before(later));
    /// assert!(!sample.recorded_before(recorded));
    /// ```
    #[must_use]
    pub fn recorded_before(&self, cutoff: DateTime<Utc>) -> bool {
        self.recorded_at < cutoff
    }
}
