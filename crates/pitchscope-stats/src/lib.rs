//! Statistical primitives for the pitchscope project.
//!
//! This crate provides the numeric building blocks used to summarize
//! biomechanical measurement histories:
//!
//! - **Descriptive statistics**: min, max, mean, variance, standard deviation
//! - **Percentiles**: interpolated percentile computation and storage
//!
//! All computations are pure functions over `f64` slices; datasets with no
//! values yield `None` rather than an error, since "no data yet" is an
//! expected state for a new subject.
//!
//! # Modules
//!
//! - [`descriptive`]: Descriptive statistics for summarizing datasets
//! - [`percentiles`]: Percentile computation and storage
//!
//! # Examples
//!
//! ## Computing descriptive statistics
//!
//! ```
//! use pitchscope_stats::descriptive::DescriptiveStats;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let stats = DescriptiveStats::new(values).unwrap();
//! assert_eq!(stats.mean, 3.0);
//! ```
//!
//! ## Computing percentiles
//!
//! ```
//! use pitchscope_stats::percentiles::Percentiles;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let percentiles = Percentiles::new(&values, &[10.0, 50.0, 90.0]);
//! assert_eq!(percentiles.get(50.0), Some(3.0));
//! ```

pub mod descriptive;
pub mod percentiles;
