//! Closed-form quadratic check in three variables.

use chebzero_core::{ChebCoeffs, Interval};

use super::{within, ExtremaFlags, QuadraticPart};

/// Quadratic extremum check specialized to three variables.
///
/// Coefficients are named `c1..c3` (linear in x, y, z), `c4..c6` (cross
/// xy, xz, yz) and `c7..c9` (pure quadratic in x, y, z). The gradient
/// conditions are
///
/// ```text
/// Dx: 4c7 x +  c4 y +  c5 z = -c1
/// Dy:  c4 x + 4c8 y +  c6 z = -c2
/// Dz:  c5 x +  c6 y + 4c9 z = -c3
/// ```
///
/// Edges (one free variable) need a single division, faces (two free) a
/// 2×2 inverse built from the cofactors below, and the interior point the
/// full adjugate. All cofactors are computed once per tensor.
#[must_use]
#[allow(clippy::too_many_lines, clippy::similar_names)]
pub fn quadratic_check_3d(coeffs: &ChebCoeffs, intervals: &[Interval], tol: f64) -> Vec<bool> {
    if coeffs.ndim() != 3 {
        return vec![true; intervals.len()];
    }

    let part = QuadraticPart::extract(coeffs, tol);
    let other_sum = part.other_sum();
    let (c1, c2, c3) = (part.linear()[0], part.linear()[1], part.linear()[2]);
    let (c4, c5, c6) = (part.cross(0, 1), part.cross(0, 2), part.cross(1, 2));
    let (c7, c8, c9) = (part.pure()[0], part.pure()[1], part.pure()[2]);
    let k0 = part.k0();
    let (k7, k8, k9) = (2.0 * c7, 2.0 * c8, 2.0 * c9);
    let eval = |x: f64, y: f64, z: f64| {
        k0 + (c1 + k7 * x + c4 * y + c5 * z) * x + (c2 + k8 * y + c6 * z) * y + (c3 + k9 * z) * z
    };

    let (kk7, kk8, kk9) = (2.0 * k7, 2.0 * k8, 2.0 * k9);
    let fix_x_det = kk8 * kk9 - c6 * c6;
    let fix_y_det = kk7 * kk9 - c5 * c5;
    let fix_z_det = kk7 * kk8 - c4 * c4;
    let minor_1_2 = kk9 * c4 - c5 * c6;
    let minor_1_3 = c4 * c6 - kk8 * c5;
    let minor_2_3 = kk7 * c6 - c4 * c5;
    let det = kk7 * fix_x_det - c4 * minor_1_2 + c5 * minor_1_3;
    let interior = (det != 0.0).then(|| {
        (
            (c1 * -fix_x_det + c2 * minor_1_2 + c3 * -minor_1_3) / det,
            (c1 * minor_1_2 + c2 * -fix_y_det + c3 * minor_2_3) / det,
            (c1 * -minor_1_3 + c2 * minor_2_3 + c3 * -fix_z_det) / det,
        )
    });

    let may_vanish = |interval: &Interval| -> bool {
        let (x0, y0, z0) = (interval.lower()[0], interval.lower()[1], interval.lower()[2]);
        let (x1, y1, z1) = (interval.upper()[0], interval.upper()[1], interval.upper()[2]);
        let mut flags = ExtremaFlags::new(other_sum);

        let corners = [
            (x0, y0, z0),
            (x1, y0, z0),
            (x0, y1, z0),
            (x0, y0, z1),
            (x1, y1, z0),
            (x1, y0, z1),
            (x0, y1, z1),
            (x1, y1, z1),
        ];
        for (x, y, z) in corners {
            if flags.observe(eval(x, y, z)) {
                return true;
            }
        }

        // x and y pinned: Dz = 0 gives z = -(c3 + c5 x + c6 y) / 4c9
        if c9 != 0.0 {
            for (x, y) in [(x0, y0), (x0, y1), (x1, y0), (x1, y1)] {
                let z = -((c5 * x + c3) + c6 * y) / kk9;
                if within(z, z0, z1) && flags.observe(eval(x, y, z)) {
                    return true;
                }
            }
        }

        // x and z pinned: Dy = 0 gives y = -(c2 + c4 x + c6 z) / 4c8
        if c8 != 0.0 {
            for (x, z) in [(x0, z0), (x0, z1), (x1, z0), (x1, z1)] {
                let y = -((c2 + c4 * x) + c6 * z) / kk8;
                if within(y, y0, y1) && flags.observe(eval(x, y, z)) {
                    return true;
                }
            }
        }

        // y and z pinned: Dx = 0 gives x = -(c1 + c4 y + c5 z) / 4c7
        if c7 != 0.0 {
            for (y, z) in [(y0, z0), (y0, z1), (y1, z0), (y1, z1)] {
                let x = -((c1 + c4 * y) + c5 * z) / kk7;
                if within(x, x0, x1) && flags.observe(eval(x, y, z)) {
                    return true;
                }
            }
        }

        // x pinned: solve Dy = Dz = 0 with inverse [4c9 -c6; -c6 4c8] / fix_x_det
        if fix_x_det != 0.0 {
            for x in [x0, x1] {
                let a = c2 + c4 * x;
                let b = c3 + c5 * x;
                let y = (-kk9 * a + c6 * b) / fix_x_det;
                let z = (c6 * a - kk8 * b) / fix_x_det;
                if within(y, y0, y1) && within(z, z0, z1) && flags.observe(eval(x, y, z)) {
                    return true;
                }
            }
        }

        // y pinned: solve Dx = Dz = 0 with inverse [4c9 -c5; -c5 4c7] / fix_y_det
        if fix_y_det != 0.0 {
            for y in [y0, y1] {
                let a = c1 + c4 * y;
                let b = c3 + c6 * y;
                let x = (-kk9 * a + c5 * b) / fix_y_det;
                let z = (c5 * a - kk7 * b) / fix_y_det;
                if within(x, x0, x1) && within(z, z0, z1) && flags.observe(eval(x, y, z)) {
                    return true;
                }
            }
        }

        // z pinned: solve Dx = Dy = 0 with inverse [4c8 -c4; -c4 4c7] / fix_z_det
        if fix_z_det != 0.0 {
            for z in [z0, z1] {
                let a = c1 + c5 * z;
                let b = c2 + c6 * z;
                let x = (-kk8 * a + c4 * b) / fix_z_det;
                let y = (c4 * a - kk7 * b) / fix_z_det;
                if within(x, x0, x1) && within(y, y0, y1) && flags.observe(eval(x, y, z)) {
                    return true;
                }
            }
        }

        if let Some((x, y, z)) = interior {
            if within(x, x0, x1)
                && within(y, y0, y1)
                && within(z, z0, z1)
                && flags.observe(eval(x, y, z))
            {
                return true;
            }
        }

        false
    };

    intervals.iter().map(may_vanish).collect()
}
