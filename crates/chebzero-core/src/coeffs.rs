//! Chebyshev coefficient tensors.
//!
//! Entry `[k_0, …, k_{n-1}]` of a [`ChebCoeffs`] tensor is the coefficient
//! of `T_{k_0}(x_0) · … · T_{k_{n-1}}(x_{n-1})` on the box `[-1, 1]^n`.

use ndarray::ArrayD;

use crate::error::{CheckError, CheckResult};

/// Coefficients of a tensor-product Chebyshev approximation.
pub type ChebCoeffs = ArrayD<f64>;

/// Sum of the absolute values of all coefficients.
///
/// Every Chebyshev basis function is bounded by 1 on the unit box, so this
/// bounds the sup norm of the represented polynomial.
#[must_use]
pub fn total_mass(coeffs: &ChebCoeffs) -> f64 {
    coeffs.iter().map(|c| c.abs()).sum()
}

/// The coefficient at the all-zero index (the constant term).
///
/// Returns `0.0` for an empty tensor.
#[must_use]
pub fn constant_term(coeffs: &ChebCoeffs) -> f64 {
    coeffs.iter().next().copied().unwrap_or(0.0)
}

/// Rejects negative or non-finite error bounds.
///
/// # Errors
///
/// Returns [`CheckError::NegativeTolerance`] for anything but a finite
/// value `>= 0`.
pub fn validate_tolerance(tol: f64) -> CheckResult<()> {
    if tol.is_finite() && tol >= 0.0 {
        Ok(())
    } else {
        Err(CheckError::NegativeTolerance(tol))
    }
}

/// Checks that `coeffs` is a nonempty tensor with `dim` axes.
///
/// # Errors
///
/// Returns [`CheckError::EmptyCoefficients`] for a zero-dimensional or empty
/// tensor and [`CheckError::DimensionMismatch`] when the axis count differs
/// from `dim`.
pub fn validate_coeffs(coeffs: &ChebCoeffs, dim: usize) -> CheckResult<()> {
    if coeffs.ndim() == 0 || coeffs.is_empty() {
        return Err(CheckError::EmptyCoefficients);
    }
    if coeffs.ndim() != dim {
        return Err(CheckError::DimensionMismatch {
            expected: dim,
            found: coeffs.ndim(),
        });
    }
    Ok(())
}
