//! The quadratic extremum check.
//!
//! The coefficient tensor splits into its degree-≤2 truncation and a
//! remainder. The remainder (plus the approximation error) can move the
//! function by at most `other_sum = Σ|remainder| + tol` anywhere on the unit
//! box. So a sub-box is zero-free whenever the truncation, rewritten as an
//! ordinary quadratic `q`, stays above `other_sum` or below `-other_sum` on
//! all of it.
//!
//! Deciding that only needs the extrema of `q` over the sub-box. Those sit
//! at a corner, at the interior critical point, or at a critical point of
//! `q` restricted to a face, and every such candidate is enumerated exactly.
//! Evaluation stops as soon as one value `≤ other_sum` and one value
//! `≥ -other_sum` have been seen, since the box must then be kept.
//!
//! Dimensions 2 and 3 use closed-form inverses; everything else goes
//! through [`quadratic_check_nd`], which factors the reduced stationarity
//! systems once per tensor.

mod dim2;
mod dim3;
mod nd;

use chebzero_core::{ChebCoeffs, Interval};
use chebzero_linalg::DenseMatrix;
use ndarray::Dimension;

pub use dim2::quadratic_check_2d;
pub use dim3::quadratic_check_3d;
pub use nd::quadratic_check_nd;

/// Runs the quadratic extremum check on every sub-box.
///
/// `intervals` are expressed in the `[-1, 1]^n` frame of `coeffs`. Returns
/// one verdict per sub-box: `false` if the function is guaranteed to never
/// be zero there, `true` otherwise.
#[must_use]
pub fn quadratic_check(coeffs: &ChebCoeffs, intervals: &[Interval], tol: f64) -> Vec<bool> {
    match coeffs.ndim() {
        2 => quadratic_check_2d(coeffs, intervals, tol),
        3 => quadratic_check_3d(coeffs, intervals, tol),
        _ => quadratic_check_nd(coeffs, intervals, tol),
    }
}

/// The degree-≤2 truncation of a coefficient tensor, in monomial form.
///
/// With `T0 = 1`, `T1 = x`, `T2 = 2x² - 1` the truncation becomes
/// `q(x) = k0 + Σ_i (B_i + 2p_i x_i + Σ_{j>i} c_ij x_j) x_i` where `B` holds
/// the linear coefficients, `p` the pure quadratic ones, `c_ij` the cross
/// ones, and `k0 = c0 - Σ p_i`.
#[derive(Clone, Debug)]
pub struct QuadraticPart {
    dim: usize,
    k0: f64,
    linear: Vec<f64>,
    pure: Vec<f64>,
    hessian: DenseMatrix<f64>,
    other_sum: f64,
}

impl QuadraticPart {
    /// Splits `coeffs` into its quadratic truncation and remainder bound.
    ///
    /// Coefficients missing from small tensors count as zero. The tensor
    /// itself is only read.
    #[must_use]
    pub fn extract(coeffs: &ChebCoeffs, tol: f64) -> Self {
        let dim = coeffs.ndim();
        let mut constant = 0.0;
        let mut linear = vec![0.0; dim];
        let mut pure = vec![0.0; dim];
        let mut hessian = DenseMatrix::zeros(dim, dim);
        let mut remainder = 0.0;

        for (index, &c) in coeffs.indexed_iter() {
            let index = index.slice();
            let degree: usize = index.iter().sum();
            match degree {
                0 => constant = c,
                1 => {
                    if let Some(i) = index.iter().position(|&k| k == 1) {
                        linear[i] = c;
                    }
                }
                2 => {
                    let mut nonzero = index.iter().enumerate().filter(|(_, &k)| k != 0);
                    match (nonzero.next(), nonzero.next()) {
                        (Some((i, _)), None) => pure[i] = c,
                        (Some((i, _)), Some((j, _))) => {
                            hessian[(i, j)] = c;
                            hessian[(j, i)] = c;
                        }
                        _ => {}
                    }
                }
                _ => remainder += c.abs(),
            }
        }

        for (i, p) in pure.iter().enumerate() {
            hessian[(i, i)] = 4.0 * p;
        }
        let k0 = pure.iter().fold(constant, |acc, p| acc - p);

        Self {
            dim,
            k0,
            linear,
            pure,
            hessian,
            other_sum: remainder + tol,
        }
    }

    /// Number of variables.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Bound on how far the true function can sit from `q`.
    #[must_use]
    pub fn other_sum(&self) -> f64 {
        self.other_sum
    }

    /// Linear coefficients `B`.
    #[must_use]
    pub fn linear(&self) -> &[f64] {
        &self.linear
    }

    /// Pure quadratic Chebyshev coefficients `p` (of `T2(x_i)`).
    #[must_use]
    pub fn pure(&self) -> &[f64] {
        &self.pure
    }

    /// Cross coefficient of `x_i x_j`, `i != j`.
    #[must_use]
    pub fn cross(&self, i: usize, j: usize) -> f64 {
        self.hessian[(i, j)]
    }

    /// The stationarity matrix: `4p_i` on the diagonal, `c_ij` off it.
    ///
    /// `∇q(x) = 0` reads `H x = -B`.
    #[must_use]
    pub fn hessian(&self) -> &DenseMatrix<f64> {
        &self.hessian
    }

    /// Constant of the monomial form, `c0 - Σ p_i`.
    #[must_use]
    pub fn k0(&self) -> f64 {
        self.k0
    }

    /// Evaluates `q` at `point` in Horner form.
    ///
    /// The dimension-specialized routines spell out the same operation
    /// order, so all three produce bit-identical values.
    #[must_use]
    pub fn eval(&self, point: &[f64]) -> f64 {
        debug_assert_eq!(point.len(), self.dim);
        let mut sum = self.k0;
        for i in 0..self.dim {
            let mut term = self.linear[i] + 2.0 * self.pure[i] * point[i];
            for j in i + 1..self.dim {
                term += self.hessian[(i, j)] * point[j];
            }
            sum += term * point[i];
        }
        sum
    }
}

/// Running record of which side of the remainder band `q` has reached.
#[derive(Clone, Copy, Debug)]
struct ExtremaFlags {
    bound: f64,
    below: bool,
    above: bool,
}

impl ExtremaFlags {
    fn new(bound: f64) -> Self {
        Self {
            bound,
            below: false,
            above: false,
        }
    }

    /// Records one candidate value; returns true once the box must be kept.
    #[inline]
    fn observe(&mut self, value: f64) -> bool {
        self.below |= value <= self.bound;
        self.above |= value >= -self.bound;
        self.below && self.above
    }
}

/// Closed-interval membership used for every candidate coordinate.
#[inline]
fn within(value: f64, lower: f64, upper: f64) -> bool {
    lower <= value && value <= upper
}
