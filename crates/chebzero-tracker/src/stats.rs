//! Per-degree approximation statistics.
//!
//! The approximation step records, for each attempted degree, the
//! approximation error it measured, the error introduced by trimming
//! negligible coefficients, and the degree it finally settled on. The
//! record is owned by the caller and handed to reporting explicitly.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::info;

#[derive(Clone, Debug, Default)]
struct DegreeRecord {
    approx_errors: Vec<f64>,
    trim_errors: Vec<f64>,
    good_degrees: Vec<usize>,
}

/// Approximation statistics keyed by attempted degree.
#[derive(Clone, Debug, Default)]
pub struct DegreeStats {
    records: BTreeMap<usize, DegreeRecord>,
}

impl DegreeStats {
    /// An empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the approximation error measured at `degree`.
    pub fn record_approx_error(&mut self, degree: usize, error: f64) {
        self.records.entry(degree).or_default().approx_errors.push(error);
    }

    /// Records the error introduced by trimming at `degree`.
    pub fn record_trim_error(&mut self, degree: usize, error: f64) {
        self.records.entry(degree).or_default().trim_errors.push(error);
    }

    /// Records that an approximation attempted at `degree` settled on
    /// `good_degree`.
    pub fn record_good_degree(&mut self, degree: usize, good_degree: usize) {
        self.records
            .entry(degree)
            .or_default()
            .good_degrees
            .push(good_degree);
    }

    /// Forgets everything, as between independent solves.
    pub fn reset(&mut self) {
        self.records.clear();
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// One line per degree, ascending.
    #[must_use]
    pub fn summary(&self) -> Vec<DegreeSummary> {
        self.records
            .iter()
            .map(|(&degree, record)| DegreeSummary {
                degree,
                samples: record
                    .approx_errors
                    .len()
                    .max(record.trim_errors.len())
                    .max(record.good_degrees.len()),
                mean_approx_error: mean(&record.approx_errors),
                max_approx_error: max(&record.approx_errors),
                mean_trim_error: mean(&record.trim_errors),
                max_trim_error: max(&record.trim_errors),
                mean_good_degree: mean_degree(&record.good_degrees),
            })
            .collect()
    }
}

/// Aggregates for one attempted degree. Means and maxima are `None` when
/// nothing of that kind was recorded.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DegreeSummary {
    /// Attempted degree.
    pub degree: usize,
    /// Largest number of samples of any kind.
    pub samples: usize,
    /// Mean approximation error.
    pub mean_approx_error: Option<f64>,
    /// Largest approximation error.
    pub max_approx_error: Option<f64>,
    /// Mean trimming error.
    pub mean_trim_error: Option<f64>,
    /// Largest trimming error.
    pub max_trim_error: Option<f64>,
    /// Mean degree settled on.
    pub mean_good_degree: Option<f64>,
}

#[allow(clippy::cast_precision_loss)]
fn mean(values: &[f64]) -> Option<f64> {
    (!values.is_empty()).then(|| values.iter().sum::<f64>() / values.len() as f64)
}

#[allow(clippy::cast_precision_loss)]
fn mean_degree(degrees: &[usize]) -> Option<f64> {
    (!degrees.is_empty())
        .then(|| degrees.iter().map(|&d| d as f64).sum::<f64>() / degrees.len() as f64)
}

fn max(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::max)
}

/// Logs `stats` one degree per line.
pub fn log_degree_stats(stats: &DegreeStats) {
    for line in stats.summary() {
        info!(
            degree = line.degree,
            samples = line.samples,
            mean_approx_error = ?line.mean_approx_error,
            max_approx_error = ?line.max_approx_error,
            mean_trim_error = ?line.mean_trim_error,
            max_trim_error = ?line.max_trim_error,
            mean_good_degree = ?line.mean_good_degree,
            "approximation degree statistics"
        );
    }
}
