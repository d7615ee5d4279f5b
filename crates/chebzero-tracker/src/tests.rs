//! Integration tests for chebzero-tracker.

#[cfg(test)]
mod integration_tests {
    use chebzero_checks::{IntervalCheck, SubintervalCheck};
    use chebzero_core::{ChebCoeffs, Interval};
    use ndarray::IxDyn;

    use crate::{IntervalTracker, Resolution};

    const QUADRATIC: Resolution = Resolution::Subinterval(SubintervalCheck::Quadratic);
    const CONSTANT: Resolution = Resolution::Interval(IntervalCheck::ConstantTerm);

    /// Exact coefficients of the coordinate function `x_axis` on `interval`.
    fn coordinate(axis: usize, interval: &Interval) -> ChebCoeffs {
        let dim = interval.dim();
        let mut shape = vec![1; dim];
        shape[axis] = 2;
        let mut c = ChebCoeffs::zeros(IxDyn(&shape));
        let (lo, hi) = (interval.lower()[axis], interval.upper()[axis]);
        let mut index = vec![0; dim];
        c[index.as_slice()] = 0.5 * (lo + hi);
        index[axis] = 1;
        c[index.as_slice()] = 0.5 * (hi - lo);
        c
    }

    fn boxed(lower: [f64; 2], upper: [f64; 2]) -> Interval {
        Interval::new(lower.to_vec(), upper.to_vec()).unwrap()
    }

    fn quadrants(interval: &Interval) -> Vec<Interval> {
        let (lo, hi) = (interval.lower(), interval.upper());
        let mid = [0.5 * (lo[0] + hi[0]), 0.5 * (lo[1] + hi[1])];
        vec![
            boxed([lo[0], lo[1]], [mid[0], mid[1]]),
            boxed([mid[0], lo[1]], [hi[0], mid[1]]),
            boxed([lo[0], mid[1]], [mid[0], hi[1]]),
            boxed([mid[0], mid[1]], [hi[0], hi[1]]),
        ]
    }

    #[test]
    fn test_known_root_retained() {
        let domain = Interval::unit(2);
        let mut tracker = IntervalTracker::new(domain.clone());
        let polys = [coordinate(0, &domain), coordinate(1, &domain)];

        // Every quadrant touches the origin
        let children = quadrants(&domain);
        let survivors = tracker
            .check_subintervals(children.clone(), children.clone(), &polys, &[0.0, 0.0])
            .unwrap();
        assert_eq!(survivors, children);
        assert!(tracker.registry().is_empty());

        // A centred box and boxes right of x = 0.5
        let centre = boxed([-0.25, -0.25], [0.25, 0.25]);
        let right = boxed([0.6, -1.0], [1.0, 1.0]);
        let right_top = boxed([0.75, 0.5], [1.0, 1.0]);
        let candidates = vec![right.clone(), centre.clone(), right_top.clone()];
        let survivors = tracker
            .check_subintervals(candidates.clone(), candidates, &polys, &[0.0, 0.0])
            .unwrap();
        assert_eq!(survivors, vec![centre]);
        assert_eq!(tracker.results(QUADRATIC), &[right, right_top]);
    }

    #[test]
    fn test_survivors_returned_in_absolute_coordinates() {
        let domain = boxed([2.0, 2.0], [4.0, 6.0]);
        let mut tracker = IntervalTracker::new(domain.clone());
        // x - 3 vanishes on the vertical line x = 3
        let mut f = coordinate(0, &domain);
        f[[0, 0]] -= 3.0;

        let children = quadrants(&domain);
        let scaled: Vec<Interval> = children
            .iter()
            .map(|child| child.rescale_into(&domain).unwrap())
            .collect();
        let survivors = tracker
            .check_subintervals(children.clone(), scaled, &[f], &[0.0])
            .unwrap();
        assert_eq!(survivors, children);

        let left = boxed([2.0, 2.0], [2.5, 6.0]);
        let far_left = boxed([2.0, 2.0], [2.9, 4.0]);
        let children = vec![left.clone(), far_left.clone()];
        let scaled: Vec<Interval> = children
            .iter()
            .map(|child| child.rescale_into(&domain).unwrap())
            .collect();
        let mut f = coordinate(0, &domain);
        f[[0, 0]] -= 3.0;
        let survivors = tracker
            .check_subintervals(children, scaled, &[f], &[0.0])
            .unwrap();
        assert!(survivors.is_empty());
        assert_eq!(tracker.results(QUADRATIC), &[left, far_left]);
        assert!((tracker.current_area() - 1.8 - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_each_box_recorded_once_across_functions() {
        let domain = Interval::unit(2);
        let mut tracker = IntervalTracker::new(domain.clone());
        let mut ten = ChebCoeffs::zeros(IxDyn(&[3, 3]));
        ten[[0, 0]] = 10.0;
        let polys = [ten.clone(), ten];

        let children = quadrants(&domain);
        let survivors = tracker
            .check_subintervals(children.clone(), children, &polys, &[0.0, 0.0])
            .unwrap();
        assert!(survivors.is_empty());
        assert_eq!(tracker.results(QUADRATIC).len(), 4);
        assert_eq!(tracker.current_area(), tracker.total_area());
    }

    #[test]
    fn test_polishing_suppresses_registry_only() {
        let domain = Interval::unit(2);
        let polys = [coordinate(0, &domain), coordinate(1, &domain)];
        let candidates = vec![
            boxed([0.6, -1.0], [1.0, 1.0]),
            boxed([-0.25, -0.25], [0.25, 0.25]),
            boxed([-1.0, -1.0], [0.0, -0.5]),
        ];
        let mut ten = ChebCoeffs::zeros(IxDyn(&[2, 2]));
        ten[[0, 0]] = 10.0;
        let target = boxed([0.0, 0.0], [1.0, 1.0]);

        let mut normal = IntervalTracker::new(domain.clone());
        let mut polishing = IntervalTracker::new(domain.clone());
        polishing.add_polish_intervals(vec![domain.clone()]).unwrap();
        polishing.start_polish_interval().unwrap();

        for tracker in [&mut normal, &mut polishing] {
            assert!(!tracker.check_interval(&ten, 0.0, &target).unwrap());
        }
        let kept_normal = normal
            .check_subintervals(candidates.clone(), candidates.clone(), &polys, &[0.0, 0.0])
            .unwrap();
        let kept_polishing = polishing
            .check_subintervals(candidates.clone(), candidates, &polys, &[0.0, 0.0])
            .unwrap();
        assert_eq!(kept_normal, kept_polishing);

        assert_eq!(normal.results(CONSTANT), &[target]);
        assert_eq!(normal.results(QUADRATIC).len(), 2);
        assert!(polishing.registry().is_empty());
        assert_eq!(normal.current_area(), polishing.current_area());
        assert!(polishing.current_area() > 0.0);
    }

    #[test]
    fn test_subdivision_solve_isolates_origin() {
        // A miniature driver: check, then split into quadrants, down to a
        // fixed depth, with exact approximations of f = x and g = y.
        const MAX_DEPTH: usize = 4;
        let domain = Interval::unit(2);
        let mut tracker = IntervalTracker::new(domain.clone());
        let mut stack = vec![(domain, 0)];

        while let Some((interval, depth)) = stack.pop() {
            let polys = [coordinate(0, &interval), coordinate(1, &interval)];
            let mut alive = true;
            for poly in &polys {
                if !tracker.check_interval(poly, 0.0, &interval).unwrap() {
                    alive = false;
                    break;
                }
            }
            if !alive {
                continue;
            }
            if depth == MAX_DEPTH {
                tracker.track_interval(Resolution::BaseCase, interval);
                continue;
            }

            let children = quadrants(&interval);
            let scaled: Vec<Interval> = children
                .iter()
                .map(|child| child.rescale_into(&interval).unwrap())
                .collect();
            let survivors = tracker
                .check_subintervals(children, scaled, &polys, &[0.0, 0.0])
                .unwrap();
            stack.extend(survivors.into_iter().map(|child| (child, depth + 1)));
        }

        let base = tracker.results(Resolution::BaseCase);
        assert_eq!(base.len(), 4);
        assert!(base.iter().all(|b| b.contains(&[0.0, 0.0])));
        assert!((tracker.current_area() - tracker.total_area()).abs() < 1e-12);
        assert!((tracker.percent_finished() - 100.0).abs() < 1e-9);

        let summary = tracker.summary();
        assert_eq!(summary.total_intervals, tracker.registry().total());
        assert_eq!(tracker.plot_results().unwrap().len(), 5);
    }
}
