//! # chebzero-linalg
//!
//! Small dense linear algebra for the chebzero elimination checks.
//!
//! This crate provides:
//! - Dense row-major matrices over any [`num_traits::Float`]
//! - LU factorization with partial pivoting, refusing only exactly zero
//!   pivots, and substitution solves against it
//!
//! ## Sizes
//!
//! Systems solved while hunting box-constrained extrema have one row per
//! free variable, so they stay at a handful of rows.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod dense_matrix;

pub use dense_matrix::{DenseMatrix, Lu};

#[cfg(test)]
mod proptests;
