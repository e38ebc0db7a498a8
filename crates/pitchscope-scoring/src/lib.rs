//! Deviation scoring of live measurements against a profile
//!
//! This crate turns one live [`FeatureVector`] and one benchmark
//! [`Profile`] into an interpretable 0-100 quality score with a
//! per-feature breakdown.
//!
//! # How It Works
//!
//! For every feature the live vector and the profile have in common:
//!
//! 1. **Standardize** - `z = |value - mean| / std` (z is 0 when the
//!    profile has no observed spread)
//! 2. **Score** - `feature_score = max(0, 100 - 25 * z)`: 100 at the
//!    profile mean, falling linearly to 0 at four standard deviations
//! 3. **Aggregate** - the final score is the mean of the per-feature
//!    scores, truncated to an integer once at the end
//!
//! Features that cannot be compared — missing from the profile, measured
//! without a value, or backed by a profile entry that lacks a mean or
//! standard deviation — are skipped silently. They shrink the average
//! instead of dragging it down, so sparse data degrades gracefully.
//!
//! # Reading the Result
//!
//! A [`result::ComparisonResult`] with a score of 0 is ambiguous on its
//! own; the detail map disambiguates. Empty details mean nothing could be
//! compared at all, while populated details mean every compared feature
//! genuinely scored 0.
//!
//! # Examples
//!
//! ```
//! use pitchscope_profile::{
//!     feature::FeatureVector,
//!     profile::{Profile, ProfileSource},
//!     summary::DistributionSummary,
//! };
//! use pitchscope_scoring::comparison::score_features;
//!
//! let profile = Profile::new(
//!     "Sasaki, Roki",
//!     ProfileSource::Reference { model_name: "Sasaki, Roki_all_v1".to_string() },
//!     [(
//!         "velocity".to_string(),
//!         DistributionSummary {
//!             mean: Some(80.0),
//!             std: Some(4.0),
//!             ..Default::default()
//!         },
//!     )],
//! );
//!
//! let mut features = FeatureVector::new();
//! features.insert("velocity", Some(84.0));
//!
//! let result = score_features(&features, &profile);
//! assert_eq!(result.final_score, 75);
//! assert_eq!(result.details["velocity"].z_score, 1.0);
//! ```

pub mod comparison;
pub mod result;
