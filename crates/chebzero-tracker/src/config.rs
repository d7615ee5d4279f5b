//! Tracker and reporter configuration.

use chebzero_checks::{IntervalCheck, SubintervalCheck};

/// How often [`crate::ProgressReporter`] logs, in calls.
pub const DEFAULT_PROGRESS_EVERY: usize = 100;

/// Which checks a tracker runs, and in which order.
///
/// Checks run front to back; the first one that eliminates a box decides
/// which identifier the box is recorded under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackerConfig {
    /// Whole-box checks run by `check_interval`.
    pub interval_checks: Vec<IntervalCheck>,
    /// Batch checks run by `check_subintervals`.
    pub subinterval_checks: Vec<SubintervalCheck>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            interval_checks: IntervalCheck::ALL.to_vec(),
            subinterval_checks: SubintervalCheck::ALL.to_vec(),
        }
    }
}

/// Configuration for progress reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReporterConfig {
    /// Log once every this many `print_progress` calls. Zero behaves as one.
    pub every: usize,
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self {
            every: DEFAULT_PROGRESS_EVERY,
        }
    }
}
