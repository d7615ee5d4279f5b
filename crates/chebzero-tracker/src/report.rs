//! Read-only reporting over a tracker.
//!
//! Nothing here mutates the tracker. Progress ticks are owned by the
//! [`ProgressReporter`] so that reporting can be sprinkled through a solve
//! without touching solver state.

use chebzero_core::{CheckError, CheckResult};
use serde::Serialize;
use tracing::info;

use crate::config::ReporterConfig;
use crate::registry::Resolution;
use crate::tracker::IntervalTracker;

/// Logs solve progress every few calls.
#[derive(Clone, Debug, Default)]
pub struct ProgressReporter {
    config: ReporterConfig,
    tick: usize,
}

impl ProgressReporter {
    /// A reporter with the given configuration.
    #[must_use]
    pub fn new(config: ReporterConfig) -> Self {
        Self { config, tick: 0 }
    }

    /// Counts one call and logs the tracker's progress on every
    /// `config.every`-th. Returns true if it logged.
    pub fn print_progress(&mut self, tracker: &IntervalTracker) -> bool {
        self.tick += 1;
        if self.tick < self.config.every.max(1) {
            return false;
        }
        self.tick = 0;

        let percent = tracker.percent_finished();
        match tracker.polish_position() {
            Some((index, count)) => info!(
                round = tracker.polish_round(),
                interval = index + 1,
                count,
                "polishing: {percent:.2}% finished"
            ),
            None => info!("{percent:.2}% finished"),
        }
        true
    }
}

/// How much one resolution contributed.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MethodShare {
    /// The resolution.
    pub method: Resolution,
    /// Boxes it resolved.
    pub count: usize,
    /// Share of all recorded boxes, in percent.
    pub percent: f64,
}

/// Snapshot of a solve's bookkeeping.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ResultsSummary {
    /// Recorded boxes across all resolutions.
    pub total_intervals: usize,
    /// One entry per registry slot, in registry order.
    pub methods: Vec<MethodShare>,
    /// Percentage of the active box resolved.
    pub percent_finished: f64,
}

impl ResultsSummary {
    /// JSON rendering.
    ///
    /// # Errors
    ///
    /// Propagates serializer failures.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Rectangles one resolution covered in a planar domain.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlotLayer {
    /// The resolution.
    pub method: Resolution,
    /// `[x, y, width, height]` per box, in recording order.
    pub rectangles: Vec<[f64; 4]>,
}

impl IntervalTracker {
    /// How many boxes each resolution accounts for.
    #[must_use]
    pub fn summary(&self) -> ResultsSummary {
        let total = self.registry().total();
        let methods = self
            .registry()
            .iter()
            .map(|(method, boxes)| {
                let count = boxes.len();
                #[allow(clippy::cast_precision_loss)]
                let percent = if total == 0 {
                    0.0
                } else {
                    100.0 * count as f64 / total as f64
                };
                MethodShare {
                    method,
                    count,
                    percent,
                }
            })
            .collect();

        ResultsSummary {
            total_intervals: total,
            methods,
            percent_finished: self.percent_finished(),
        }
    }

    /// Logs [`summary`](Self::summary).
    pub fn print_results(&self) {
        let summary = self.summary();
        info!("total intervals checked: {}", summary.total_intervals);
        for share in &summary.methods {
            info!(
                method = %share.method,
                count = share.count,
                "{:.4}% of intervals",
                share.percent
            );
        }
    }

    /// The boxes each resolution covered, as rectangles.
    ///
    /// Every registry slot yields a layer, empty ones included, so layer
    /// positions stay stable across solves.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::NotPlanar`] unless the domain is 2-dimensional.
    pub fn plot_results(&self) -> CheckResult<Vec<PlotLayer>> {
        let dim = self.domain().dim();
        if dim != 2 {
            return Err(CheckError::NotPlanar(dim));
        }

        Ok(self
            .registry()
            .iter()
            .map(|(method, boxes)| PlotLayer {
                method,
                rectangles: boxes
                    .iter()
                    .map(|b| {
                        let (lo, hi) = (b.lower(), b.upper());
                        [lo[0], lo[1], hi[0] - lo[0], hi[1] - lo[1]]
                    })
                    .collect(),
            })
            .collect())
    }
}
