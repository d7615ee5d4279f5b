//! The constant-term check.
//!
//! Every nonconstant Chebyshev basis function is bounded by 1 in magnitude
//! on the unit box, so the represented polynomial stays within
//! `Σ|c| - |c0|` of its constant term `c0`. When `|c0|` beats that spread
//! by more than the approximation error, the function keeps the sign of
//! `c0` everywhere and cannot vanish.

use chebzero_core::{constant_term, total_mass, ChebCoeffs};

/// Returns `false` if the function is guaranteed to never be zero on the
/// unit box, `true` otherwise.
///
/// The test is `2·|c0| > Σ|c| + tol`; equality keeps the box.
#[must_use]
pub fn constant_term_check(coeffs: &ChebCoeffs, tol: f64) -> bool {
    let total = total_mass(coeffs);
    let eliminates = 2.0 * constant_term(coeffs).abs() > total + tol;
    !eliminates
}
