//! # chebzero
//!
//! Elimination checks for subdivision root isolation with Chebyshev
//! approximations.
//!
//! A subdivision solver approximates each function on a box by a tensor of
//! Chebyshev coefficients with a known sup-norm error, and throws away every
//! box on which some function provably has no zero. chebzero is that
//! throwing-away step, plus the bookkeeping around it.
//!
//! ## Features
//!
//! - **Constant-term check**: O(1) dominance test on the constant coefficient
//! - **Quadratic check**: exact box extrema of the degree-≤2 truncation,
//!   closed form in 2 and 3 variables, factored linear algebra beyond
//! - **Interval tracking**: provenance per check, resolved-volume coverage,
//!   and a polishing mode that leaves provenance untouched
//! - **Reporting**: progress logging, JSON summaries, planar plot layers
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use chebzero::prelude::*;
//!
//! let mut tracker = IntervalTracker::new(Interval::unit(2));
//! if tracker.check_interval(&coeffs, error, &interval)? {
//!     let survivors = tracker.check_subintervals(children, scaled, &polys, &errors)?;
//! }
//! tracker.print_results();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use chebzero_checks as checks;
pub use chebzero_core as core;
pub use chebzero_linalg as linalg;
pub use chebzero_tracker as tracker;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use chebzero_checks::{
        constant_term_check, quadratic_check, IntervalCheck, SubintervalCheck,
    };
    pub use chebzero_core::{ChebCoeffs, CheckError, CheckResult, Interval};
    pub use chebzero_tracker::{
        DegreeStats, IntervalTracker, ProgressReporter, ReporterConfig, Resolution,
        TrackerConfig,
    };
}
