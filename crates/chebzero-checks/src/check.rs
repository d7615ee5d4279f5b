//! The available checks, as data.
//!
//! A tracker runs an ordered list of whole-box checks and an ordered list
//! of sub-box checks. Each variant knows its report name and how to run
//! itself, so configurations are plain `Vec`s of these enums.

use std::fmt;

use chebzero_core::{ChebCoeffs, Interval};

use crate::constant::constant_term_check;
use crate::quadratic::quadratic_check;

/// O(1)-style checks that look at one whole box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IntervalCheck {
    /// See [`constant_term_check`].
    ConstantTerm,
}

impl IntervalCheck {
    /// Every interval check, in the default run order.
    pub const ALL: [IntervalCheck; 1] = [IntervalCheck::ConstantTerm];

    /// Name under which eliminated boxes are reported.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            IntervalCheck::ConstantTerm => "constant_term_check",
        }
    }

    /// Returns `false` if the box is provably zero-free, `true` otherwise.
    #[must_use]
    pub fn evaluate(self, coeffs: &ChebCoeffs, tol: f64) -> bool {
        match self {
            IntervalCheck::ConstantTerm => constant_term_check(coeffs, tol),
        }
    }
}

impl fmt::Display for IntervalCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Checks that decide many sub-boxes of a coefficient tensor's frame at once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SubintervalCheck {
    /// See [`quadratic_check`].
    Quadratic,
}

impl SubintervalCheck {
    /// Every subinterval check, in the default run order.
    pub const ALL: [SubintervalCheck; 1] = [SubintervalCheck::Quadratic];

    /// Name under which eliminated boxes are reported.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            SubintervalCheck::Quadratic => "quadratic_check",
        }
    }

    /// One verdict per sub-box: `false` if provably zero-free, `true` otherwise.
    #[must_use]
    pub fn evaluate_many(self, coeffs: &ChebCoeffs, intervals: &[Interval], tol: f64) -> Vec<bool> {
        match self {
            SubintervalCheck::Quadratic => quadratic_check(coeffs, intervals, tol),
        }
    }
}

impl fmt::Display for SubintervalCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
