//! The interval tracker.
//!
//! One tracker lives for one top-level solve. The subdivision driver calls
//! [`IntervalTracker::check_interval`] on every box before subdividing and
//! [`IntervalTracker::check_subintervals`] on the children that remain; the
//! tracker runs the configured checks and keeps the books on what each one
//! eliminated.

use chebzero_core::{
    validate_coeffs, validate_tolerance, ChebCoeffs, CheckError, CheckResult, Interval,
};
use tracing::{debug, trace};

use crate::config::TrackerConfig;
use crate::coverage::Coverage;
use crate::polish::PolishState;
use crate::registry::{ProvenanceRegistry, Resolution};

/// Runs elimination checks and tracks what happened to every box.
#[derive(Clone, Debug)]
pub struct IntervalTracker {
    domain: Interval,
    config: TrackerConfig,
    registry: ProvenanceRegistry,
    coverage: Coverage,
    polish: Option<PolishState>,
    polish_round: usize,
}

impl IntervalTracker {
    /// A tracker over `domain` running the default checks.
    #[must_use]
    pub fn new(domain: Interval) -> Self {
        Self::with_config(domain, TrackerConfig::default())
    }

    /// A tracker over `domain` running the checks of `config`.
    #[must_use]
    pub fn with_config(domain: Interval, config: TrackerConfig) -> Self {
        let registry = ProvenanceRegistry::for_config(&config);
        let coverage = Coverage::new(domain.volume());
        Self {
            domain,
            config,
            registry,
            coverage,
            polish: None,
            polish_round: 0,
        }
    }

    /// Runs the whole-box checks on `interval`.
    ///
    /// `coeffs` approximates the function on `interval` to within `error`.
    /// Returns `Ok(false)` if some check proves the box zero-free; the box
    /// is then tracked under that check. Returns `Ok(true)` otherwise, with
    /// nothing tracked.
    ///
    /// # Errors
    ///
    /// Fails before running any check if `error` is not a valid tolerance,
    /// `coeffs` is empty, or the dimensions of `coeffs`, `interval` and the
    /// domain disagree.
    pub fn check_interval(
        &mut self,
        coeffs: &ChebCoeffs,
        error: f64,
        interval: &Interval,
    ) -> CheckResult<bool> {
        validate_tolerance(error)?;
        self.validate_box(interval)?;
        validate_coeffs(coeffs, self.domain.dim())?;

        let eliminated_by = self
            .config
            .interval_checks
            .iter()
            .copied()
            .find(|check| !check.evaluate(coeffs, error));

        match eliminated_by {
            Some(check) => {
                self.track_interval(Resolution::Interval(check), interval.clone());
                Ok(false)
            }
            None => Ok(true),
        }
    }

    /// Runs the batch checks on candidate sub-boxes against every function.
    ///
    /// `subintervals` are the candidates in absolute coordinates and
    /// `scaled_subintervals` the same boxes in the `[-1, 1]^n` frame of the
    /// coefficient tensors. `polys[k]` approximates function `k` to within
    /// `errors[k]`. A candidate survives only if every check keeps it for
    /// every function; each check and function only sees the candidates
    /// that survived the ones before. Eliminated candidates are tracked
    /// under the eliminating check. Survivors are returned in absolute
    /// coordinates, in input order.
    ///
    /// # Errors
    ///
    /// Fails before running any check if the paired lists differ in length,
    /// some error bound is invalid, or some tensor or box has the wrong
    /// dimension.
    pub fn check_subintervals(
        &mut self,
        subintervals: Vec<Interval>,
        scaled_subintervals: Vec<Interval>,
        polys: &[ChebCoeffs],
        errors: &[f64],
    ) -> CheckResult<Vec<Interval>> {
        if scaled_subintervals.len() != subintervals.len() {
            return Err(CheckError::LengthMismatch {
                what: "scaled_subintervals",
                expected: subintervals.len(),
                found: scaled_subintervals.len(),
            });
        }
        if errors.len() != polys.len() {
            return Err(CheckError::LengthMismatch {
                what: "errors",
                expected: polys.len(),
                found: errors.len(),
            });
        }
        for &error in errors {
            validate_tolerance(error)?;
        }
        for poly in polys {
            validate_coeffs(poly, self.domain.dim())?;
        }
        for interval in subintervals.iter().chain(&scaled_subintervals) {
            self.validate_box(interval)?;
        }

        let mut absolute = subintervals;
        let mut scaled = scaled_subintervals;
        let checks = self.config.subinterval_checks.clone();
        for check in checks {
            for (poly, &error) in polys.iter().zip(errors) {
                if absolute.is_empty() {
                    return Ok(absolute);
                }
                let mask = check.evaluate_many(poly, &scaled, error);

                let mut kept_absolute = Vec::with_capacity(absolute.len());
                let mut kept_scaled = Vec::with_capacity(scaled.len());
                for ((abs, frame), keep) in absolute.into_iter().zip(scaled).zip(mask) {
                    if keep {
                        kept_absolute.push(abs);
                        kept_scaled.push(frame);
                    } else {
                        self.track_interval(Resolution::Subinterval(check), abs);
                    }
                }
                absolute = kept_absolute;
                scaled = kept_scaled;
            }
        }

        Ok(absolute)
    }

    /// Records that `interval` was resolved by `resolution`.
    ///
    /// The volume always counts toward coverage. The registry entry is
    /// skipped while polishing.
    pub fn track_interval(&mut self, resolution: Resolution, interval: Interval) {
        self.coverage.accrue(interval.volume());
        if self.polish.is_some() {
            trace!(%resolution, ?interval, "resolved while polishing, not recorded");
        } else {
            trace!(%resolution, ?interval, "resolved");
            self.registry.record(resolution, interval);
        }
    }

    /// Enters polishing mode with a fresh queue of boxes.
    ///
    /// Calling this again while a round is running replaces the queue and
    /// starts a new round; the coverage restored by
    /// [`finish_polishing`](Self::finish_polishing) stays the one from
    /// before the first round.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::DimensionMismatch`] if a queued box does not
    /// match the domain.
    pub fn add_polish_intervals(&mut self, intervals: Vec<Interval>) -> CheckResult<()> {
        for interval in &intervals {
            self.validate_box(interval)?;
        }
        let saved = self
            .polish
            .as_ref()
            .map_or(self.coverage, PolishState::saved);
        self.polish_round += 1;
        debug!(
            round = self.polish_round,
            count = intervals.len(),
            "polishing round queued"
        );
        self.polish = Some(PolishState::new(intervals, saved));
        Ok(())
    }

    /// Activates the next queued polish box and rescales coverage to it.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::PolishExhausted`] if the queue is used up or
    /// no round was queued.
    pub fn start_polish_interval(&mut self) -> CheckResult<&Interval> {
        let Some(state) = self.polish.as_mut() else {
            return Err(CheckError::PolishExhausted(0));
        };
        let (index, count) = (state.cursor().map_or(0, |c| c + 1), state.len());
        let active = state.advance()?;
        self.coverage = Coverage::new(active.volume());
        debug!(round = self.polish_round, index, count, "polishing interval started");
        Ok(active)
    }

    /// Leaves polishing mode and restores the normal-mode coverage.
    ///
    /// Does nothing outside polishing mode.
    pub fn finish_polishing(&mut self) {
        if let Some(state) = self.polish.take() {
            self.coverage = state.saved();
            debug!(round = self.polish_round, "polishing finished");
        }
    }

    fn validate_box(&self, interval: &Interval) -> CheckResult<()> {
        if interval.dim() == self.domain.dim() {
            Ok(())
        } else {
            Err(CheckError::DimensionMismatch {
                expected: self.domain.dim(),
                found: interval.dim(),
            })
        }
    }

    /// The box the whole solve runs on.
    #[must_use]
    pub fn domain(&self) -> &Interval {
        &self.domain
    }

    /// The checks this tracker runs.
    #[must_use]
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Returns true while a polishing round is active.
    #[must_use]
    pub fn is_polishing(&self) -> bool {
        self.polish.is_some()
    }

    /// Number of polishing rounds queued so far.
    #[must_use]
    pub fn polish_round(&self) -> usize {
        self.polish_round
    }

    /// Zero-based index of the active polish box and the queue length.
    #[must_use]
    pub fn polish_position(&self) -> Option<(usize, usize)> {
        let state = self.polish.as_ref()?;
        Some((state.cursor()?, state.len()))
    }

    /// Boxes recorded under `resolution`.
    #[must_use]
    pub fn results(&self, resolution: Resolution) -> &[Interval] {
        self.registry.get(resolution)
    }

    /// The full provenance record.
    #[must_use]
    pub fn registry(&self) -> &ProvenanceRegistry {
        &self.registry
    }

    /// Volume of the active box.
    #[must_use]
    pub fn total_area(&self) -> f64 {
        self.coverage.total_area()
    }

    /// Volume resolved within the active box.
    #[must_use]
    pub fn current_area(&self) -> f64 {
        self.coverage.current_area()
    }

    /// Percentage of the active box resolved.
    #[must_use]
    pub fn percent_finished(&self) -> f64 {
        self.coverage.percent_finished()
    }

    /// Coverage of the active box.
    #[must_use]
    pub fn progress(&self) -> Coverage {
        self.coverage
    }
}
