//! # chebzero-tracker
//!
//! Bookkeeping for a subdivision solve built on the chebzero checks.
//!
//! This crate provides:
//! - [`IntervalTracker`]: runs the configured checks on boxes and batches of
//!   sub-boxes, and records what eliminated each box
//! - [`ProvenanceRegistry`] and [`Resolution`]: the ordered record of
//!   resolved boxes per check or terminal outcome
//! - [`Coverage`]: resolved volume against the active box
//! - polishing mode, which re-examines near-root boxes without touching the
//!   registry
//! - [`ProgressReporter`], [`ResultsSummary`], [`PlotLayer`]: read-only
//!   reporting
//! - [`DegreeStats`]: caller-owned per-degree approximation statistics
//!
//! ## Example
//!
//! ```
//! use chebzero_core::{ChebCoeffs, Interval};
//! use chebzero_tracker::IntervalTracker;
//! use ndarray::IxDyn;
//!
//! let mut tracker = IntervalTracker::new(Interval::unit(2));
//! let mut f = ChebCoeffs::zeros(IxDyn(&[2, 2]));
//! f[[0, 0]] = 10.0;
//! f[[1, 0]] = 1.0;
//!
//! // 10 + x never vanishes on the box
//! assert!(!tracker.check_interval(&f, 0.0, &Interval::unit(2)).unwrap());
//! assert_eq!(tracker.percent_finished(), 100.0);
//! ```
//!
//! Logging goes through `tracing`; install a subscriber to see it.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod coverage;
pub mod polish;
pub mod registry;
pub mod report;
pub mod stats;
pub mod tracker;

pub use config::{ReporterConfig, TrackerConfig, DEFAULT_PROGRESS_EVERY};
pub use coverage::Coverage;
pub use registry::{ProvenanceRegistry, Resolution};
pub use report::{MethodShare, PlotLayer, ProgressReporter, ResultsSummary};
pub use stats::{log_degree_stats, DegreeStats, DegreeSummary};
pub use tracker::IntervalTracker;

#[cfg(test)]
mod proptests;
#[cfg(test)]
mod tests;
