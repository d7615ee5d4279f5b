//! # chebzero-checks
//!
//! Cheap closed-form tests that prove a Chebyshev approximation has no zero
//! on a box.
//!
//! This crate provides:
//! - [`constant_term_check`]: the constant coefficient against the total mass
//! - [`quadratic_check`]: box-constrained extrema of the degree-≤2 truncation,
//!   with closed forms in 2 and 3 variables and a factored linear-algebra
//!   path for any dimension
//! - [`fixed_subsets`]: the memoized face enumeration the n-D path walks
//! - [`IntervalCheck`] / [`SubintervalCheck`]: the checks as configurable data
//!
//! ## Verdicts
//!
//! Every check answers `true` for "cannot rule out a zero, keep" and `false`
//! for "provably zero-free, discard". Ties keep. The answer is only as sound
//! as the error bound the caller passes in.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::many_single_char_names)]

pub mod check;
pub mod constant;
pub mod quadratic;
pub mod subsets;

pub use check::{IntervalCheck, SubintervalCheck};
pub use constant::constant_term_check;
pub use quadratic::{
    quadratic_check, quadratic_check_2d, quadratic_check_3d, quadratic_check_nd, QuadraticPart,
};
pub use subsets::{fixed_subsets, FaceSubset, IndexSet};

#[cfg(test)]
mod proptests;
