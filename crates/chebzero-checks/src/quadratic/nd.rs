//! Quadratic check in any number of variables.
//!
//! Fixing the coordinates in `fixed` to bounds leaves the stationarity
//! system `H_ff x_f = -B_f - H_{f,fixed} x_fixed` over the free coordinates.
//! Its matrix does not depend on which bounds were picked, nor on the
//! sub-box, so each face family is factored once per tensor and reused for
//! every boundary choice of every sub-box.

use chebzero_core::{ChebCoeffs, Interval};
use chebzero_linalg::{DenseMatrix, Lu};
use smallvec::SmallVec;

use super::{within, ExtremaFlags, QuadraticPart};
use crate::subsets::{fixed_subsets, FaceSubset};

/// The reduced stationarity system of one face family.
struct FaceSystem<'a> {
    subset: &'a FaceSubset,
    lu: Lu<f64>,
    /// `H_{free,fixed}`, one row per free coordinate.
    coupling: DenseMatrix<f64>,
    /// `-B_free`.
    neg_linear: Vec<f64>,
}

impl<'a> FaceSystem<'a> {
    fn new(part: &QuadraticPart, subset: &'a FaceSubset) -> Option<Self> {
        let reduced = part.hessian().submatrix(&subset.free, &subset.free);
        let lu = solvable(&reduced)?;
        Some(Self {
            subset,
            lu,
            coupling: part.hessian().submatrix(&subset.free, &subset.fixed),
            neg_linear: subset.free.iter().map(|&i| -part.linear()[i]).collect(),
        })
    }
}

/// Factors a stationarity matrix if it can carry a definite extremum.
///
/// A diagonal that changes sign between neighbours rules out definiteness,
/// and an exactly zero pivot leaves no isolated critical point; both mean
/// the candidate is absent. Nearly singular systems are still solved.
fn solvable(matrix: &DenseMatrix<f64>) -> Option<Lu<f64>> {
    let diagonal = matrix.diagonal();
    if diagonal.windows(2).any(|w| w[0] * w[1] < 0.0) {
        return None;
    }
    matrix.lu()
}

/// Quadratic extremum check for any dimension.
///
/// Candidates are visited in the order corners, faces with the most fixed
/// coordinates first, then the interior critical point.
#[must_use]
pub fn quadratic_check_nd(coeffs: &ChebCoeffs, intervals: &[Interval], tol: f64) -> Vec<bool> {
    let part = QuadraticPart::extract(coeffs, tol);
    let dim = part.dim();

    let subsets = fixed_subsets(dim);
    let faces: Vec<FaceSystem<'_>> = subsets
        .iter()
        .filter_map(|subset| FaceSystem::new(&part, subset))
        .collect();

    let interior: Option<Vec<f64>> = solvable(part.hessian()).map(|lu| {
        let rhs: Vec<f64> = part.linear().iter().map(|b| -b).collect();
        lu.solve(&rhs)
    });

    intervals
        .iter()
        .map(|interval| may_vanish(&part, &faces, interior.as_deref(), interval))
        .collect()
}

fn may_vanish(
    part: &QuadraticPart,
    faces: &[FaceSystem<'_>],
    interior: Option<&[f64]>,
    interval: &Interval,
) -> bool {
    let dim = part.dim();
    let (lower, upper) = (interval.lower(), interval.upper());
    let bound = |axis: usize, upper_side: bool| if upper_side { upper[axis] } else { lower[axis] };
    let mut flags = ExtremaFlags::new(part.other_sum());
    let mut point = vec![0.0; dim];

    // Corners, first axis varying slowest
    for corner in 0..1usize << dim {
        for (axis, x) in point.iter_mut().enumerate() {
            *x = bound(axis, (corner >> (dim - 1 - axis)) & 1 == 1);
        }
        if flags.observe(part.eval(&point)) {
            return true;
        }
    }

    let mut pinned: SmallVec<[f64; 4]> = SmallVec::new();
    let mut rhs: SmallVec<[f64; 4]> = SmallVec::new();
    for face in faces {
        let fixed = &face.subset.fixed;
        let free = &face.subset.free;

        for side in 0..1usize << fixed.len() {
            pinned.clear();
            pinned.extend(
                fixed
                    .iter()
                    .enumerate()
                    .map(|(k, &axis)| bound(axis, (side >> (fixed.len() - 1 - k)) & 1 == 1)),
            );

            rhs.clear();
            rhs.extend(face.neg_linear.iter().enumerate().map(|(row, &b)| {
                let coupled: f64 = face
                    .coupling
                    .row(row)
                    .iter()
                    .zip(&pinned)
                    .map(|(h, x)| h * x)
                    .sum();
                b - coupled
            }));

            let solution = face.lu.solve(&rhs);
            let inside = free
                .iter()
                .zip(&solution)
                .all(|(&axis, &x)| within(x, lower[axis], upper[axis]));
            if !inside {
                continue;
            }

            for (&axis, &x) in fixed.iter().zip(&pinned) {
                point[axis] = x;
            }
            for (&axis, &x) in free.iter().zip(&solution) {
                point[axis] = x;
            }
            if flags.observe(part.eval(&point)) {
                return true;
            }
        }
    }

    if let Some(critical) = interior {
        if interval.contains(critical) && flags.observe(part.eval(critical)) {
            return true;
        }
    }

    false
}
