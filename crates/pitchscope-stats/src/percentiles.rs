/// Precomputed percentile values for a dataset.
///
/// This structure stores percentile-value pairs for efficient lookup
/// of commonly used percentile points.
///
/// # Examples
///
/// ```
/// use pitchscope_stats::percentiles::Percentiles;
///
/// let values = vec![1.0, 2.0, 3.0, 4.0, 5.0];
/// let percentiles = Percentiles::new(&values, &[10.0, 50.0, 90.0]);
///
/// assert_eq!(percentiles.get(50.0), Some(3.0));
/// assert!((percentiles.get(90.0).unwrap() - 4.6).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct Percentiles {
    /// Percentile-value pairs, sorted by percentile.
    /// Each tuple contains (percentile, value) where percentile is 0.0-100.0.
    values: Vec<(f64, f64)>,
}

impl Percentiles {
    /// Computes percentiles from sorted values.
    ///
    /// # Arguments
    ///
    /// * `sorted_values` - Values sorted in ascending order
    /// * `percentile_points` - The percentile points to compute (e.g., [10.0, 50.0, 90.0])
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use pitchscope_stats::percentiles::Percentiles;
    ///
    /// let mut values = vec![5.0, 2.0, 8.0, 1.0, 9.0];
    /// values.sort_by(f64::total_cmp);
    /// let percentiles = Percentiles::from_sorted(&values, &[50.0, 90.0]);
    /// assert_eq!(percentiles.get(50.0), Some(5.0));
    /// ```
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64], percentile_points: &[f64]) -> Self {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let values = percentile_points
            .iter()
            .map(|&p| (p, compute_percentile(sorted_values, p)))
            .collect();
        Self { values }
    }

    /// Computes percentiles from unsorted values.
    ///
    /// This method will sort the values internally before computing percentiles.
    ///
    /// # Examples
    ///
    /// ```
    /// use pitchscope_stats::percentiles::Percentiles;
    ///
    /// let values = vec![5.0, 2.0, 8.0, 1.0, 9.0];
    /// let percentiles = Percentiles::new(&values, &[50.0]);
    ///
    /// assert_eq!(percentiles.get(50.0), Some(5.0));
    /// ```
    #[must_use]
    pub fn new(values: &[f64], percentile_points: &[f64]) -> Self {
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        Self::from_sorted(&sorted, percentile_points)
    }

    /// Gets the value at a specific percentile.
    ///
    /// Returns `None` if the percentile was not precomputed.
    ///
    /// # Examples
    ///
    /// ```
    /// use pitchscope_stats::percentiles::Percentiles;
    ///
    /// let values = vec![1.0, 2.0, 3.0, 4.0, 5.0];
    /// let percentiles = Percentiles::new(&values, &[50.0, 90.0]);
    ///
    /// assert_eq!(percentiles.get(50.0), Some(3.0));
    /// assert_eq!(percentiles.get(25.0), None); // Not precomputed
    /// ```
    #[must_use]
    pub fn get(&self, percentile: f64) -> Option<f64> {
        self.values.iter().find_map(|(p, value)| {
            if (*p - percentile).abs() < f64::EPSILON {
                Some(*value)
            } else {
                None
            }
        })
    }

    /// Returns an iterator over all (percentile, value) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.values.iter().copied()
    }

    /// Returns all percentile-value pairs as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[(f64, f64)] {
        &self.values
    }
}

/// Computes a single percentile value from sorted data.
///
/// This function uses linear interpolation between order statistics: the
/// target rank is `percentile / 100 * (N - 1)`, and fractional ranks
/// interpolate linearly between the two adjacent sorted values. For `N = 1`
/// every percentile is the single value itself.
///
/// # Arguments
///
/// * `sorted_values` - Values sorted in ascending order
/// * `percentile` - The percentile to compute (0.0 to 100.0)
///
/// # Returns
///
/// The value at the specified percentile. Returns `f64::NAN` if the input is empty.
///
/// # Examples
///
/// ```
/// use pitchscope_stats::percentiles::compute_percentile;
///
/// let values = vec![1.0, 2.0, 3.0, 4.0, 5.0];
///
/// assert_eq!(compute_percentile(&values, 50.0), 3.0);
/// assert!((compute_percentile(&values, 10.0) - 1.4).abs() < 1e-12);
/// assert!((compute_percentile(&values, 90.0) - 4.6).abs() < 1e-12);
/// ```
#[expect(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss
)]
#[must_use]
pub fn compute_percentile(sorted_values: &[f64], percentile: f64) -> f64 {
    if sorted_values.is_empty() {
        return f64::NAN;
    }

    let rank = (percentile / 100.0) * (sorted_values.len() - 1) as f64;
    let rank = rank.clamp(0.0, (sorted_values.len() - 1) as f64);
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    if lower == upper {
        return sorted_values[lower];
    }

    let fraction = rank - lower as f64;
    sorted_values[lower] + (sorted_values[upper] - sorted_values[lower]) * fraction
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_nan() {
        assert!(compute_percentile(&[], 50.0).is_nan());
    }

    #[test]
    fn test_single_value() {
        let values = [3.5];
        assert_eq!(compute_percentile(&values, 0.0), 3.5);
        assert_eq!(compute_percentile(&values, 50.0), 3.5);
        assert_eq!(compute_percentile(&values, 100.0), 3.5);
    }

    #[test]
    fn test_interpolated_ranks() {
        // rank(p) = p/100 * 4 for five values
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(compute_percentile(&values, 0.0), 1.0);
        assert!((compute_percentile(&values, 10.0) - 1.4).abs() < 1e-12);
        assert_eq!(compute_percentile(&values, 25.0), 2.0);
        assert_eq!(compute_percentile(&values, 50.0), 3.0);
        assert!((compute_percentile(&values, 90.0) - 4.6).abs() < 1e-12);
        assert_eq!(compute_percentile(&values, 100.0), 5.0);
    }

    #[test]
    fn test_interpolation_between_two_values() {
        let values = [10.0, 20.0];
        assert_eq!(compute_percentile(&values, 50.0), 15.0);
        assert_eq!(compute_percentile(&values, 75.0), 17.5);
    }

    #[test]
    fn test_percentiles_ordering_invariant() {
        let values = [4.0, 9.0, 1.0, 7.0, 2.0, 6.0];
        let percentiles = Percentiles::new(&values, &[10.0, 50.0, 90.0]);
        let p10 = percentiles.get(10.0).unwrap();
        let p50 = percentiles.get(50.0).unwrap();
        let p90 = percentiles.get(90.0).unwrap();
        assert!(p10 <= p50 && p50 <= p90);
        assert!(1.0 <= p10 && p90 <= 9.0);
    }

    #[test]
    fn test_lookup_of_missing_point() {
        let percentiles = Percentiles::new(&[1.0, 2.0, 3.0], &[50.0]);
        assert_eq!(percentiles.get(25.0), None);
    }
}
