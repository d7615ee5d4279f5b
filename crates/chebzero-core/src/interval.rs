//! Axis-aligned boxes.
//!
//! An [`Interval`] is the hyperrectangle `[lower[0], upper[0]] × … ×
//! [lower[n-1], upper[n-1]]`. Bounds are validated once on construction and
//! never change afterwards; subdivision produces new boxes.

use serde::{Deserialize, Serialize};

use crate::error::{CheckError, CheckResult};

/// An axis-aligned box in `n`-dimensional space.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawInterval")]
pub struct Interval {
    lower: Vec<f64>,
    upper: Vec<f64>,
}

/// Unchecked wire form, validated through [`Interval::new`].
#[derive(Deserialize)]
struct RawInterval {
    lower: Vec<f64>,
    upper: Vec<f64>,
}

impl TryFrom<RawInterval> for Interval {
    type Error = CheckError;

    fn try_from(raw: RawInterval) -> CheckResult<Self> {
        Self::new(raw.lower, raw.upper)
    }
}

impl Interval {
    /// Creates a box from its lower and upper corners.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::DimensionMismatch`] when the corners have
    /// different lengths or are empty, and [`CheckError::MalformedInterval`]
    /// when some axis has `lower > upper` or a non-finite bound.
    pub fn new(lower: Vec<f64>, upper: Vec<f64>) -> CheckResult<Self> {
        if lower.len() != upper.len() || lower.is_empty() {
            return Err(CheckError::DimensionMismatch {
                expected: lower.len().max(1),
                found: upper.len(),
            });
        }
        for (axis, (&lo, &hi)) in lower.iter().zip(&upper).enumerate() {
            if !(lo.is_finite() && hi.is_finite() && lo <= hi) {
                return Err(CheckError::MalformedInterval {
                    axis,
                    lower: lo,
                    upper: hi,
                });
            }
        }
        Ok(Self { lower, upper })
    }

    /// The box `[-1, 1]^dim`, the frame every coefficient tensor lives in.
    #[must_use]
    pub fn unit(dim: usize) -> Self {
        Self {
            lower: vec![-1.0; dim],
            upper: vec![1.0; dim],
        }
    }

    /// Number of axes.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.lower.len()
    }

    /// Lower corner.
    #[must_use]
    pub fn lower(&self) -> &[f64] {
        &self.lower
    }

    /// Upper corner.
    #[must_use]
    pub fn upper(&self) -> &[f64] {
        &self.upper
    }

    /// Product of the side lengths.
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.lower
            .iter()
            .zip(&self.upper)
            .map(|(lo, hi)| hi - lo)
            .product()
    }

    /// Returns true if `point` lies in the closed box.
    #[must_use]
    pub fn contains(&self, point: &[f64]) -> bool {
        point.len() == self.dim()
            && point
                .iter()
                .zip(self.lower.iter().zip(&self.upper))
                .all(|(x, (lo, hi))| lo <= x && x <= hi)
    }

    /// Maps this box into the `[-1, 1]^n` frame of `parent`.
    ///
    /// This is the transformation a subdivision driver applies to child
    /// boxes before handing them to the subinterval checks alongside the
    /// parent's coefficient tensor. Results are clamped to `[-1, 1]` so that
    /// rounding never pushes a child outside its parent's frame.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::DimensionMismatch`] if the boxes disagree in
    /// dimension.
    pub fn rescale_into(&self, parent: &Interval) -> CheckResult<Self> {
        if parent.dim() != self.dim() {
            return Err(CheckError::DimensionMismatch {
                expected: parent.dim(),
                found: self.dim(),
            });
        }

        let map = |x: f64, lo: f64, hi: f64| {
            let width = hi - lo;
            if width == 0.0 {
                // Degenerate axis collapses to the centre of the frame.
                0.0
            } else {
                (2.0 * (x - lo) / width - 1.0).clamp(-1.0, 1.0)
            }
        };

        let mut lower = Vec::with_capacity(self.dim());
        let mut upper = Vec::with_capacity(self.dim());
        for axis in 0..self.dim() {
            let (lo, hi) = (parent.lower[axis], parent.upper[axis]);
            lower.push(map(self.lower[axis], lo, hi));
            upper.push(map(self.upper[axis], lo, hi));
        }
        Ok(Self { lower, upper })
    }
}
