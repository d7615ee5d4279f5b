//! # chebzero-core
//!
//! Shared vocabulary for the chebzero elimination engine.
//!
//! This crate provides:
//! - [`Interval`]: axis-aligned boxes with validated bounds
//! - [`ChebCoeffs`]: n-dimensional Chebyshev coefficient tensors
//! - [`CheckError`]: caller contract violations reported by the engine
//!
//! Everything numerical lives in `chebzero-checks`; this crate only fixes
//! the data model so the checks and the tracker agree on it.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod coeffs;
pub mod error;
pub mod interval;

pub use coeffs::{constant_term, total_mass, validate_coeffs, validate_tolerance, ChebCoeffs};
pub use error::{CheckError, CheckResult};
pub use interval::Interval;
