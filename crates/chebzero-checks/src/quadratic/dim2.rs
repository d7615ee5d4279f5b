//! Closed-form quadratic check in two variables.

use chebzero_core::{ChebCoeffs, Interval};

use super::{within, ExtremaFlags, QuadraticPart};

/// Quadratic extremum check specialized to two variables.
///
/// With `c1, c2` linear, `c3, c5` pure quadratic and `c4` cross
/// coefficients, the gradient conditions are
///
/// ```text
/// Dx: 4c3 x +  c4 y = -c1
/// Dy:  c4 x + 4c5 y = -c2
/// ```
///
/// so edge critical points need one division and the interior point a
/// 2×2 inverse, computed once for all sub-boxes.
#[must_use]
pub fn quadratic_check_2d(coeffs: &ChebCoeffs, intervals: &[Interval], tol: f64) -> Vec<bool> {
    if coeffs.ndim() != 2 {
        return vec![true; intervals.len()];
    }

    let part = QuadraticPart::extract(coeffs, tol);
    let other_sum = part.other_sum();
    let (c1, c2) = (part.linear()[0], part.linear()[1]);
    let (c3, c5) = (part.pure()[0], part.pure()[1]);
    let c4 = part.cross(0, 1);
    let k0 = part.k0();
    let k3 = 2.0 * c3;
    let k5 = 2.0 * c5;
    let eval = |x: f64, y: f64| k0 + (c1 + k3 * x + c4 * y) * x + (c2 + k5 * y) * y;

    // Interior critical point, shared by every sub-box
    let det = 16.0 * c3 * c5 - c4 * c4;
    let interior = (det != 0.0).then(|| {
        (
            (c2 * c4 - 4.0 * c1 * c5) / det,
            (c1 * c4 - 4.0 * c2 * c3) / det,
        )
    });

    let may_vanish = |interval: &Interval| -> bool {
        let (x0, y0) = (interval.lower()[0], interval.lower()[1]);
        let (x1, y1) = (interval.upper()[0], interval.upper()[1]);
        let mut flags = ExtremaFlags::new(other_sum);

        for (x, y) in [(x0, y0), (x1, y0), (x0, y1), (x1, y1)] {
            if flags.observe(eval(x, y)) {
                return true;
            }
        }

        // x pinned: Dy = 0 gives y = -(c2 + c4 x) / 4c5
        if c5 != 0.0 {
            let cc5 = 4.0 * c5;
            for x in [x0, x1] {
                let y = -(c2 + c4 * x) / cc5;
                if within(y, y0, y1) && flags.observe(eval(x, y)) {
                    return true;
                }
            }
        }

        // y pinned: Dx = 0 gives x = -(c1 + c4 y) / 4c3
        if c3 != 0.0 {
            let cc3 = 4.0 * c3;
            for y in [y0, y1] {
                let x = -(c1 + c4 * y) / cc3;
                if within(x, x0, x1) && flags.observe(eval(x, y)) {
                    return true;
                }
            }
        }

        if let Some((x, y)) = interior {
            if within(x, x0, x1) && within(y, y0, y1) && flags.observe(eval(x, y)) {
                return true;
            }
        }

        false
    };

    intervals.iter().map(may_vanish).collect()
}
