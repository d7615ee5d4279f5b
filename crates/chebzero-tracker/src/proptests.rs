//! Property-based tests for tracker bookkeeping.

#[cfg(test)]
mod tests {
    use chebzero_core::{ChebCoeffs, Interval};
    use ndarray::IxDyn;
    use proptest::prelude::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    use crate::{IntervalTracker, Resolution};

    // Strategy for boxes with 1 to 3 axes and positive side lengths
    fn domain() -> impl Strategy<Value = Interval> {
        proptest::collection::vec((-10.0f64..10.0, 0.1f64..5.0), 1..=3).prop_map(|axes| {
            let (lower, upper): (Vec<f64>, Vec<f64>) =
                axes.into_iter().map(|(lo, w)| (lo, lo + w)).unzip();
            Interval::new(lower, upper).expect("positive widths")
        })
    }

    /// Random guillotine partition: repeatedly bisect a random leaf at a
    /// random point of a random axis.
    fn partition(domain: &Interval, cuts: usize, seed: u64) -> Vec<Interval> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut leaves = vec![domain.clone()];
        for _ in 0..cuts {
            let leaf = leaves.swap_remove(rng.gen_range(0..leaves.len()));
            let axis = rng.gen_range(0..leaf.dim());
            let t: f64 = rng.gen_range(0.1..0.9);
            let (lo, hi) = (leaf.lower()[axis], leaf.upper()[axis]);
            let cut = lo + t * (hi - lo);

            let mut left_upper = leaf.upper().to_vec();
            left_upper[axis] = cut;
            let mut right_lower = leaf.lower().to_vec();
            right_lower[axis] = cut;
            leaves.push(Interval::new(leaf.lower().to_vec(), left_upper).expect("cut inside"));
            leaves.push(Interval::new(right_lower, leaf.upper().to_vec()).expect("cut inside"));
        }
        leaves
    }

    fn coeffs(dim: usize, values: &[f64]) -> ChebCoeffs {
        let mut c = ChebCoeffs::zeros(IxDyn(&vec![2; dim]));
        for (slot, v) in c.iter_mut().zip(values.iter().cycle()) {
            *slot = *v;
        }
        c
    }

    proptest! {
        #[test]
        fn partition_covers_domain(d in domain(), cuts in 0usize..40, seed in any::<u64>()) {
            let mut tracker = IntervalTracker::new(d.clone());
            for leaf in partition(&d, cuts, seed) {
                tracker.track_interval(Resolution::BaseCase, leaf);
            }
            let total = tracker.total_area();
            prop_assert!((tracker.current_area() - total).abs() <= 1e-9 * total);
            prop_assert_eq!(tracker.registry().total(), cuts + 1);
        }

        #[test]
        fn polish_partition_covers_active_box(d in domain(), cuts in 0usize..20, seed in any::<u64>()) {
            let mut tracker = IntervalTracker::new(Interval::new(
                d.lower().iter().map(|x| x - 1.0).collect(),
                d.upper().iter().map(|x| x + 1.0).collect(),
            ).expect("widened box"));
            tracker.add_polish_intervals(vec![d.clone()]).expect("same dimension");
            tracker.start_polish_interval().expect("one queued box");
            for leaf in partition(&d, cuts, seed) {
                tracker.track_interval(Resolution::Macaulay, leaf);
            }
            let total = tracker.total_area();
            prop_assert!((total - d.volume()).abs() <= 1e-12 * total);
            prop_assert!((tracker.current_area() - total).abs() <= 1e-9 * total);
            prop_assert!(tracker.registry().is_empty());
        }

        #[test]
        fn polishing_keeps_verdicts(
            d in domain(),
            values in proptest::collection::vec(-2.0f64..2.0, 1..8),
            tol in 0.0f64..1.0,
            cuts in 0usize..12,
            seed in any::<u64>(),
        ) {
            let dim = d.dim();
            let c = coeffs(dim, &values);
            let children = partition(&d, cuts, seed);
            let scaled: Vec<Interval> = children
                .iter()
                .map(|child| child.rescale_into(&d).expect("same dimension"))
                .collect();

            let mut normal = IntervalTracker::new(d.clone());
            let mut polishing = IntervalTracker::new(d.clone());
            polishing.add_polish_intervals(vec![d.clone()]).expect("same dimension");
            polishing.start_polish_interval().expect("one queued box");

            let whole_normal = normal.check_interval(&c, tol, &d).expect("valid input");
            let whole_polishing = polishing.check_interval(&c, tol, &d).expect("valid input");
            prop_assert_eq!(whole_normal, whole_polishing);

            let kept_normal = normal
                .check_subintervals(children.clone(), scaled.clone(), &[c.clone()], &[tol])
                .expect("valid input");
            let kept_polishing = polishing
                .check_subintervals(children, scaled, &[c], &[tol])
                .expect("valid input");
            prop_assert_eq!(kept_normal, kept_polishing);

            prop_assert!(polishing.registry().is_empty());
            prop_assert_eq!(normal.current_area(), polishing.current_area());
        }
    }
}
