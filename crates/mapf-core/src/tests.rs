//! Unit tests for mapf-core primitives.

#[cfg(test)]
mod grid {
    use crate::{GridPos, SpaceTime};

    #[test]
    fn offset_and_at() {
        let p = GridPos::new(2, 3);
        assert_eq!(p.offset(-1, 1), GridPos::new(1, 4));
        assert_eq!(p.at(7), SpaceTime::new(2, 3, 7));
        assert_eq!(p.at(7).pos(), p);
    }

    #[test]
    fn distances() {
        let a = GridPos::new(0, 0);
        let b = GridPos::new(3, -4);
        assert_eq!(a.manhattan(b), 7);
        assert_eq!(a.chebyshev(b), 4);
    }

    #[test]
    fn adjacency_includes_diagonals_and_self() {
        let p = GridPos::new(5, 5);
        assert!(p.is_adjacent(p));
        assert!(p.is_adjacent(GridPos::new(6, 4)));
        assert!(!p.is_adjacent(GridPos::new(7, 5)));
    }

    #[test]
    fn space_time_keys_differ_by_time() {
        assert_ne!(SpaceTime::new(1, 1, 0), SpaceTime::new(1, 1, 1));
    }

    #[test]
    fn display() {
        assert_eq!(GridPos::new(1, 2).to_string(), "(1, 2)");
        assert_eq!(SpaceTime::new(1, 2, 3).to_string(), "(1, 2)@t3");
    }
}

#[cfg(test)]
mod geo {
    use crate::{Bounds, WorldPos};

    #[test]
    fn bounds_reject_inverted_and_nan() {
        assert!(Bounds::new(0.0, 10.0, 0.0, 10.0).is_ok());
        assert!(Bounds::new(10.0, 0.0, 0.0, 10.0).is_err());
        assert!(Bounds::new(0.0, 0.0, 0.0, 10.0).is_err());
        assert!(Bounds::new(0.0, f32::NAN, 0.0, 10.0).is_err());
    }

    #[test]
    fn contains_is_inclusive() {
        let b = Bounds::new(-5.0, 5.0, 0.0, 2.0).unwrap();
        assert!(b.contains(WorldPos::ground(-5.0, 0.0)));
        assert!(b.contains(WorldPos::ground(5.0, 2.0)));
        assert!(!b.contains(WorldPos::ground(5.01, 1.0)));
        assert!(!b.contains(WorldPos::ground(f32::NAN, 1.0)));
        assert_eq!(b.width(), 10.0);
        assert_eq!(b.height(), 2.0);
    }
}

#[cfg(test)]
mod heuristic {
    use crate::{GridPos, Heuristic};

    #[test]
    fn three_metrics() {
        let a = GridPos::new(0, 0);
        let b = GridPos::new(3, 4);
        assert_eq!(Heuristic::Manhattan.estimate(a, b), 7.0);
        assert!((Heuristic::Euclidean.estimate(a, b) - 5.0).abs() < 1e-6);
        assert_eq!(Heuristic::Diagonal.estimate(a, b), 4.0);
    }

    #[test]
    fn zero_at_target() {
        let p = GridPos::new(9, 2);
        for h in [Heuristic::Manhattan, Heuristic::Euclidean, Heuristic::Diagonal] {
            assert_eq!(h.estimate(p, p), 0.0, "{h:?}");
        }
    }

    #[test]
    fn default_is_manhattan() {
        assert_eq!(Heuristic::default(), Heuristic::Manhattan);
    }
}

#[cfg(test)]
mod config {
    use crate::{Heuristic, Movement, PlannerConfig};

    #[test]
    fn default_is_valid() {
        let c = PlannerConfig::default();
        assert!(c.validate().is_ok());
        assert_eq!(c.movement, Movement::Cardinal);
        assert_eq!(c.cell_count(), Some(10 * 10 * 100));
    }

    #[test]
    fn zero_dimensions_rejected() {
        assert!(PlannerConfig::new(0, 10, Heuristic::Manhattan).validate().is_err());
        assert!(PlannerConfig::new(5, 0, Heuristic::Manhattan).validate().is_err());
    }

    #[test]
    fn overflow_rejected() {
        let c = PlannerConfig::new(usize::MAX / 2, 4, Heuristic::Euclidean);
        assert!(c.validate().is_err());
    }

    #[test]
    fn non_finite_height_rejected() {
        let c = PlannerConfig::default().with_waypoint_height(f32::INFINITY);
        assert!(c.validate().is_err());
    }

    #[test]
    fn builder_helpers() {
        let c = PlannerConfig::new(8, 16, Heuristic::Diagonal)
            .with_movement(Movement::Octile)
            .with_waypoint_height(1.25);
        assert_eq!(c.resolution, 8);
        assert_eq!(c.max_time_steps, 16);
        assert_eq!(c.heuristic, Heuristic::Diagonal);
        assert_eq!(c.movement, Movement::Octile);
        assert_eq!(c.waypoint_height, 1.25);
    }
}
