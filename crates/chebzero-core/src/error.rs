//! Errors raised when a caller breaks the engine's input contract.
//!
//! Numerical degeneracy (singular systems, vanishing coefficients) is never
//! an error: the affected candidate point is simply skipped.

use thiserror::Error;

/// Result alias used by the fallible entry points.
pub type CheckResult<T> = Result<T, CheckError>;

/// Precondition violations detected before any check runs.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum CheckError {
    /// The approximation error bound was negative, NaN, or infinite.
    #[error("tolerance must be finite and nonnegative, got {0}")]
    NegativeTolerance(f64),

    /// A box had `lower > upper` (or a non-finite bound) on some axis.
    #[error("malformed interval on axis {axis}: lower {lower} > upper {upper}")]
    MalformedInterval {
        /// Offending axis.
        axis: usize,
        /// Lower bound on that axis.
        lower: f64,
        /// Upper bound on that axis.
        upper: f64,
    },

    /// Dimensions of a tensor and a box (or two boxes) disagree.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Dimension the operation required.
        expected: usize,
        /// Dimension actually supplied.
        found: usize,
    },

    /// Two lists that must be parallel have different lengths.
    #[error("length mismatch for {what}: expected {expected}, found {found}")]
    LengthMismatch {
        /// Which list was too short or too long.
        what: &'static str,
        /// Required length.
        expected: usize,
        /// Supplied length.
        found: usize,
    },

    /// A coefficient tensor had no axes or no entries.
    #[error("coefficient tensor is empty")]
    EmptyCoefficients,

    /// `start_polish_interval` was called past the end of the polish queue.
    #[error("no polish interval left (queue holds {0})")]
    PolishExhausted(usize),

    /// A planar-only report was requested for a domain of another dimension.
    #[error("plotting needs a 2-dimensional domain, got {0} dimensions")]
    NotPlanar(usize),
}
