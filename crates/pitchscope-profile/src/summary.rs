//! Per-feature distribution summaries
//!
//! A [`DistributionSummary`] condenses every observed value of one feature
//! into the statistics the scorer and reporting layers need: mean,
//! population standard deviation, extrema, and the 10th/50th/90th
//! percentiles.
//!
//! Summaries built by this crate always carry every field. Summaries loaded
//! from an external model store may not: every field is optional so that a
//! partial entry deserializes instead of failing, and consumers branch on
//! what is actually present.

use pitchscope_stats::{descriptive::DescriptiveStats, percentiles::compute_percentile};
use serde::{Deserialize, Serialize};

/// Distribution statistics for a single feature.
///
/// Invariants for summaries produced by [`DistributionSummary::from_values`]:
/// the standard deviation is non-negative and uses the population divisor
/// (one observed value gives `std == 0`), and
/// `min <= p10 <= p50 <= p90 <= max`.
///
/// # Examples
///
/// ```
/// use pitchscope_profile::summary::DistributionSummary;
///
/// let summary = DistributionSummary::from_values(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
/// assert_eq!(summary.mean, Some(3.0));
/// assert_eq!(summary.min, Some(1.0));
/// assert_eq!(summary.p50, Some(3.0));
/// assert!((summary.std.unwrap() - 1.4142).abs() < 1e-3);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistributionSummary {
    /// Arithmetic mean of the observed values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean: Option<f64>,
    /// Population standard deviation of the observed values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub std: Option<f64>,
    /// Smallest observed value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// Largest observed value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// 10th percentile (linear interpolation between order statistics).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub p10: Option<f64>,
    /// Median. Older model exports label this field `p50_median`.
    #[serde(alias = "p50_median", skip_serializing_if = "Option::is_none")]
    pub p50: Option<f64>,
    /// 90th percentile (linear interpolation between order statistics).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub p90: Option<f64>,
}

impl DistributionSummary {
    /// Computes a fully-populated summary from observed values.
    ///
    /// # Returns
    ///
    /// * `Some(DistributionSummary)` with every field present, if at least
    ///   one value was observed
    /// * `None` - if `values` is empty
    #[must_use]
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let stats = DescriptiveStats::from_sorted(&sorted)?;
        Some(Self {
            mean: Some(stats.mean),
            std: Some(stats.std_dev),
            min: Some(stats.min),
            max: Some(stats.max),
            p10: Some(compute_percentile(&sorted, 10.0)),
            p50: Some(compute_percentile(&sorted, 50.0)),
            p90: Some(compute_percentile(&sorted, 90.0)),
        })
    }

    /// Returns `(mean, std)` when both are present.
    ///
    /// This is the usability gate for comparison scoring: an entry that
    /// lacks either statistic cannot be compared against and is skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// use pitchscope_profile::summary::DistributionSummary;
    ///
    /// let full = DistributionSummary::from_values(&[80.0, 84.0]).unwrap();
    /// assert_eq!(full.comparison_stats(), Some((82.0, 2.0)));
    ///
    /// let partial = DistributionSummary { mean: Some(82.0), ..Default::default() };
    /// assert_eq!(partial.comparison_stats(), None);
    /// ```
    #[must_use]
    pub fn comparison_stats(&self) -> Option<(f64, f64)> {
        Some((self.mean?, self.std?))
    }
}
