//! Property-based tests for the elimination checks.

#[cfg(test)]
mod tests {
    use chebzero_core::{ChebCoeffs, Interval};
    use ndarray::{Dimension, IxDyn};
    use proptest::prelude::*;

    use crate::{constant_term_check, quadratic_check};

    // Strategy for coefficient tensors with 1 to 4 variables and 2 to 4
    // coefficients per axis
    fn coeffs() -> impl Strategy<Value = ChebCoeffs> {
        proptest::collection::vec(2usize..=4, 1..=4).prop_flat_map(|shape| {
            let len: usize = shape.iter().product();
            proptest::collection::vec(-2.0f64..2.0, len).prop_map(move |values| {
                ChebCoeffs::from_shape_vec(IxDyn(&shape), values)
                    .expect("length matches shape")
            })
        })
    }

    // Strategy for a tensor together with sub-boxes of its frame
    fn coeffs_and_boxes() -> impl Strategy<Value = (ChebCoeffs, Vec<Interval>)> {
        coeffs().prop_flat_map(|c| {
            let dim = c.ndim();
            let bounds = proptest::collection::vec((-1.0f64..1.0, -1.0f64..1.0), dim);
            let boxes = proptest::collection::vec(bounds, 1..6).prop_map(|boxes| {
                boxes
                    .into_iter()
                    .map(|axes| {
                        let (lower, upper): (Vec<f64>, Vec<f64>) =
                            axes.into_iter().map(|(a, b)| (a.min(b), a.max(b))).unzip();
                        Interval::new(lower, upper).expect("sorted bounds")
                    })
                    .collect::<Vec<_>>()
            });
            (Just(c), boxes)
        })
    }

    proptest! {
        #[test]
        fn constant_check_matches_formula(c in coeffs(), tol in 0.0f64..4.0) {
            let total: f64 = c.iter().map(|v| v.abs()).sum();
            let c0 = c.iter().next().copied().unwrap_or(0.0);
            prop_assert_eq!(constant_term_check(&c, tol), 2.0 * c0.abs() <= total + tol);
        }

        #[test]
        fn constant_check_monotone_in_tolerance(
            c in coeffs(),
            tol in 0.0f64..2.0,
            extra in 0.0f64..2.0,
        ) {
            if constant_term_check(&c, tol) {
                prop_assert!(constant_term_check(&c, tol + extra));
            }
        }

        #[test]
        fn quadratic_check_monotone_in_tolerance(
            (c, boxes) in coeffs_and_boxes(),
            tol in 0.0f64..1.0,
            extra in 0.0f64..1.0,
        ) {
            let tight = quadratic_check(&c, &boxes, tol);
            let loose = quadratic_check(&c, &boxes, tol + extra);
            prop_assert_eq!(tight.len(), boxes.len());
            for (t, l) in tight.iter().zip(&loose) {
                prop_assert!(!t || *l);
            }
        }

        #[test]
        fn quadratic_check_keeps_boxes_containing_a_sampled_zero(
            (c, boxes) in coeffs_and_boxes(),
        ) {
            // If the true function changes sign between two corners of a box,
            // no sound check may discard it
            let verdicts = quadratic_check(&c, &boxes, 0.0);
            for (interval, keep) in boxes.iter().zip(verdicts) {
                let lo = evaluate(&c, interval.lower());
                let hi = evaluate(&c, interval.upper());
                if lo * hi <= 0.0 {
                    prop_assert!(keep);
                }
            }
        }
    }

    // Direct evaluation of the Chebyshev series, T_k(x) by recurrence
    fn evaluate(c: &ChebCoeffs, point: &[f64]) -> f64 {
        c.indexed_iter()
            .map(|(index, &value)| {
                let basis: f64 = index
                    .slice()
                    .iter()
                    .zip(point)
                    .map(|(&k, &x)| chebyshev(k, x))
                    .product();
                value * basis
            })
            .sum()
    }

    fn chebyshev(k: usize, x: f64) -> f64 {
        let (mut prev, mut cur) = (1.0, x);
        if k == 0 {
            return prev;
        }
        for _ in 1..k {
            let next = 2.0 * x * cur - prev;
            prev = cur;
            cur = next;
        }
        cur
    }
}
