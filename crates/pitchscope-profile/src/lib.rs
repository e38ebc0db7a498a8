//! Statistical profiles of pitching biomechanics
//!
//! This crate provides the data model and profile-building half of the
//! comparison engine: it aggregates a subject's historical per-session
//! measurements into a per-feature distribution summary that the scoring
//! crate can compare live measurements against.
//!
//! # Overview
//!
//! The profile workflow has three stages:
//!
//! 1. **Collect Samples** ([`feature::FeatureSample`]): Timestamped
//!    feature vectors produced by an external motion-analysis stage
//! 2. **Build Profile** ([`builder::build_profile`]): Aggregate the
//!    history into per-feature distribution summaries
//! 3. **Look Up Benchmarks** ([`store::ProfileStore`],
//!    [`store::resolve_benchmark`]): Load stored reference profiles
//!    (elite-pitcher models) with pitch-type fallback
//!
//! Profiles come from two places and are interchangeable to the scorer:
//! built fresh from a subject's own history (never persisted), or loaded
//! read-only from an external store of reference models.
//!
//! # Missing Data
//!
//! Absence is a first-class state throughout:
//!
//! - A feature missing from one session is excluded from that feature's
//!   aggregate, never zero-filled
//! - An empty history yields no profile (`None`), not an error
//! - A stored profile entry may lack fields; whether it is usable for
//!   comparison is an explicit branch
//!   ([`summary::DistributionSummary::comparison_stats`])
//!
//! # Feature Name Matching
//!
//! Feature names are matched case-insensitively. Profile keys are
//! lower-cased exactly once, when the profile is constructed; lookups
//! lower-case only the query key. Live feature vectors keep their original
//! casing.
//!
//! # Examples
//!
//! ## Building a profile from history
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use pitchscope_profile::{
//!     builder::build_profile,
//!     feature::{FeatureSample, FeatureVector},
//! };
//!
//! let vector = |v| {
//!     let mut features = FeatureVector::new();
//!     features.insert("Release_Angle", Some(v));
//!     features
//! };
//! let history = vec![
//!     FeatureSample::new(Utc.with_ymd_and_hms(2025, 5, 1, 0, 0, 0).unwrap(), vector(34.0)),
//!     FeatureSample::new(Utc.with_ymd_and_hms(2025, 5, 8, 0, 0, 0).unwrap(), vector(36.0)),
//! ];
//!
//! let profile = build_profile("Jane Doe", &history).unwrap();
//! let summary = profile.summary("release_angle").unwrap();
//! assert_eq!(summary.mean, Some(35.0));
//! ```
//!
//! ## Resolving a benchmark model
//!
//! ```
//! use pitchscope_profile::{
//!     profile::{Profile, ProfileSource},
//!     store::{ProfileStore, resolve_benchmark},
//! };
//!
//! struct SingleModel(Profile);
//! impl ProfileStore for SingleModel {
//!     fn find(&self, model_name: &str) -> Option<Profile> {
//!         (model_name == self.0.label()).then(|| self.0.clone())
//!     }
//! }
//!
//! let store = SingleModel(Profile::new(
//!     "Sasaki, Roki_all_v1",
//!     ProfileSource::Reference { model_name: "Sasaki, Roki_all_v1".to_string() },
//!     [],
//! ));
//!
//! // Tries "Sasaki, Roki_FF_v1" first, then falls back to the generic model
//! let benchmark = resolve_benchmark(&store, "Sasaki, Roki", Some("FF"));
//! assert!(benchmark.is_some());
//! ```

pub mod builder;
pub mod feature;
pub mod profile;
pub mod store;
pub mod summary;
