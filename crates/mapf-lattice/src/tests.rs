//! Unit tests for mapf-lattice.
//!
//! All terrains are built in memory; the CSV loader is fed from a `Cursor`.

#[cfg(test)]
mod helpers {
    use mapf_core::Bounds;

    use crate::TraversabilityGrid;

    /// 10 × 10 world units.
    pub fn square_bounds() -> Bounds {
        Bounds::new(0.0, 10.0, 0.0, 10.0).unwrap()
    }

    /// 5 × 5 raster over `square_bounds` with a wall at raster cell (2, 2)
    /// and (4, 0).
    pub fn walled_terrain() -> TraversabilityGrid {
        let mut t = TraversabilityGrid::open(square_bounds(), 5, 5).unwrap();
        t.set_wall(2, 2);
        t.set_wall(4, 0);
        t
    }
}

// ── CoordinateMapper ──────────────────────────────────────────────────────────

#[cfg(test)]
mod mapper {
    use mapf_core::{GridPos, WorldPos};

    use crate::{CoordinateMapper, LatticeError};

    fn mapper() -> CoordinateMapper {
        CoordinateMapper::new(super::helpers::square_bounds(), 5, 0.5)
    }

    #[test]
    fn step_size() {
        assert_eq!(mapper().step_size(), (2.0, 2.0));
    }

    #[test]
    fn world_to_cell() {
        let m = mapper();
        assert_eq!(m.to_cell(WorldPos::ground(0.0, 0.0)).unwrap(), GridPos::new(0, 0));
        assert_eq!(m.to_cell(WorldPos::ground(3.9, 2.1)).unwrap(), GridPos::new(1, 1));
        assert_eq!(m.to_cell(WorldPos::ground(9.99, 4.0)).unwrap(), GridPos::new(4, 2));
    }

    #[test]
    fn upper_bound_belongs_to_last_cell() {
        let m = mapper();
        assert_eq!(m.to_cell(WorldPos::ground(10.0, 10.0)).unwrap(), GridPos::new(4, 4));
    }

    #[test]
    fn outside_bounds_is_an_error() {
        let m = mapper();
        for p in [
            WorldPos::ground(-0.1, 5.0),
            WorldPos::ground(5.0, 10.5),
            WorldPos::ground(f32::NAN, 1.0),
        ] {
            assert!(
                matches!(m.to_cell(p), Err(LatticeError::OutOfBounds { .. })),
                "{p} should be out of bounds"
            );
        }
    }

    #[test]
    fn cell_centre_round_trips() {
        let m = mapper();
        let centre = m.to_world(GridPos::new(3, 1));
        assert_eq!(centre, WorldPos::new(7.0, 3.0, 0.5));
        assert_eq!(m.to_cell(centre).unwrap(), GridPos::new(3, 1));
        assert_eq!(m.to_world_at(GridPos::new(0, 0), 2.0).z, 2.0);
    }

    #[test]
    fn path_to_cells_propagates_errors() {
        let m = mapper();
        let ok = [WorldPos::ground(1.0, 1.0), WorldPos::ground(3.0, 1.0)];
        assert_eq!(m.path_to_cells(&ok).unwrap(), vec![GridPos::new(0, 0), GridPos::new(1, 0)]);
        let bad = [WorldPos::ground(1.0, 1.0), WorldPos::ground(30.0, 1.0)];
        assert!(m.path_to_cells(&bad).is_err());
    }
}

// ── Terrain ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod terrain {
    use mapf_core::WorldPos;

    use crate::{LatticeError, Terrain, TraversabilityGrid};

    #[test]
    fn length_must_match() {
        let err = TraversabilityGrid::new(super::helpers::square_bounds(), 3, 3, vec![1.0; 8]);
        assert!(matches!(err, Err(LatticeError::DimensionMismatch { expected: 9, got: 8, .. })));
    }

    #[test]
    fn sample_by_world_position() {
        let t = super::helpers::walled_terrain();
        assert_eq!(t.sample(WorldPos::ground(5.0, 5.0)), Some(0.0));
        assert_eq!(t.sample(WorldPos::ground(1.0, 1.0)), Some(1.0));
        assert_eq!(t.sample(WorldPos::ground(11.0, 1.0)), None);
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use crate::{LatticeError, load_terrain_reader};

    #[test]
    fn loads_rows_as_y() {
        let csv = "1,1,1\n1,0,1\n";
        let t = load_terrain_reader(Cursor::new(csv), super::helpers::square_bounds()).unwrap();
        assert_eq!(t.dimensions(), (3, 2));
        assert_eq!(t.value(1, 1), Some(0.0));
        assert_eq!(t.value(1, 0), Some(1.0));
    }

    #[test]
    fn tolerates_whitespace() {
        let csv = " 1, 0 \n0 ,1\n";
        let t = load_terrain_reader(Cursor::new(csv), super::helpers::square_bounds()).unwrap();
        assert_eq!(t.value(1, 0), Some(0.0));
    }

    #[test]
    fn ragged_rows_rejected() {
        let csv = "1,1,1\n1,1\n";
        let r = load_terrain_reader(Cursor::new(csv), super::helpers::square_bounds());
        assert!(matches!(r, Err(LatticeError::Parse(_))));
    }

    #[test]
    fn empty_input_rejected() {
        let r = load_terrain_reader(Cursor::new(""), super::helpers::square_bounds());
        assert!(matches!(r, Err(LatticeError::Parse(_))));
    }

    #[test]
    fn non_numeric_rejected() {
        let r = load_terrain_reader(Cursor::new("1,x\n"), super::helpers::square_bounds());
        assert!(matches!(r, Err(LatticeError::Parse(_))));
    }
}

// ── Lattice ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod lattice {
    use mapf_core::{Bounds, GridPos, Heuristic, PlannerConfig, SpaceTime};

    use crate::{Lattice, LatticeError, TraversabilityGrid};

    #[test]
    fn build_replicates_walls_over_time() {
        let terrain = super::helpers::walled_terrain();
        let config = PlannerConfig::new(5, 4, Heuristic::Manhattan);
        let lat = Lattice::build(&terrain, &config).unwrap();

        assert_eq!(lat.len(), 5 * 5 * 4);
        for t in 0..4 {
            assert!(lat.is_wall(GridPos::new(2, 2), t));
            assert!(lat.is_wall(GridPos::new(4, 0), t));
            assert!(!lat.is_wall(GridPos::new(0, 0), t));
        }
    }

    #[test]
    fn seen_mirrors_wall_and_nothing_occupied() {
        let terrain = super::helpers::walled_terrain();
        let lat = Lattice::build(&terrain, &PlannerConfig::new(5, 2, Heuristic::Manhattan)).unwrap();
        let wall = lat.cell(SpaceTime::new(2, 2, 1)).unwrap();
        assert!(wall.seen && wall.wall && !wall.occupied);
        let open = lat.cell(SpaceTime::new(0, 1, 0)).unwrap();
        assert!(!open.seen && !open.wall);
        assert_eq!(lat.occupied_count(), 0);
    }

    #[test]
    fn build_at_finer_resolution_than_raster() {
        // 10×10 lattice over a 5×5 raster: each raster wall covers 2×2 cells.
        let terrain = super::helpers::walled_terrain();
        let lat = Lattice::build(&terrain, &PlannerConfig::new(10, 1, Heuristic::Manhattan)).unwrap();
        for (x, y) in [(4, 4), (5, 4), (4, 5), (5, 5)] {
            assert!(lat.is_wall(GridPos::new(x, y), 0), "({x}, {y})");
        }
        assert!(!lat.is_wall(GridPos::new(3, 4), 0));
    }

    #[test]
    fn non_unit_samples_are_walls() {
        let bounds = Bounds::new(0.0, 2.0, 0.0, 1.0).unwrap();
        let terrain = TraversabilityGrid::new(bounds, 2, 1, vec![1.0, 0.5]).unwrap();
        let lat = Lattice::build(&terrain, &PlannerConfig::new(2, 1, Heuristic::Manhattan)).unwrap();
        assert!(!lat.is_wall(GridPos::new(0, 0), 0));
        assert!(lat.is_wall(GridPos::new(1, 0), 0));
    }

    #[test]
    fn invalid_config_rejected() {
        let terrain = super::helpers::walled_terrain();
        let r = Lattice::build(&terrain, &PlannerConfig::new(0, 4, Heuristic::Manhattan));
        assert!(matches!(r, Err(LatticeError::Core(_))));
    }

    #[test]
    fn from_walls_checks_length() {
        assert!(Lattice::from_walls(3, 2, &[false; 8]).is_err());
        assert!(Lattice::from_walls(3, 2, &[false; 9]).is_ok());
    }

    #[test]
    fn bounds_and_off_lattice_queries() {
        let lat = Lattice::open(4, 3);
        assert!(lat.in_bounds(GridPos::new(0, 3)));
        assert!(!lat.in_bounds(GridPos::new(-1, 0)));
        assert!(!lat.in_bounds(GridPos::new(4, 0)));
        assert!(lat.cell(SpaceTime::new(0, 0, 3)).is_none());
        assert!(!lat.is_wall(GridPos::new(-1, 0), 0));
        assert!(!lat.is_occupied(GridPos::new(9, 9), 0));
    }

    #[test]
    fn reserve_and_reset() {
        let mut lat = Lattice::open(4, 5);
        lat.reserve(SpaceTime::new(1, 2, 3)).unwrap();
        assert!(lat.is_occupied(GridPos::new(1, 2), 3));
        assert!(!lat.is_occupied(GridPos::new(1, 2), 2));

        lat.reserve_from(GridPos::new(0, 0), 2).unwrap();
        assert_eq!(lat.occupied_count(), 1 + 3);
        assert!((2..5).all(|t| lat.is_occupied(GridPos::new(0, 0), t)));

        lat.reset_occupancy();
        assert_eq!(lat.occupied_count(), 0);
    }

    #[test]
    fn reserve_off_lattice_is_an_error() {
        let mut lat = Lattice::open(4, 5);
        assert!(matches!(
            lat.reserve(SpaceTime::new(0, 0, 5)),
            Err(LatticeError::CellOutOfRange(_))
        ));
        assert!(lat.reserve_from(GridPos::new(4, 0), 0).is_err());
        // Past the horizon: nothing to do.
        assert!(lat.reserve_from(GridPos::new(0, 0), 9).is_ok());
        assert_eq!(lat.occupied_count(), 0);
    }

    #[test]
    fn reset_keeps_walls() {
        let mut walls = vec![false; 9];
        walls[4] = true;
        let mut lat = Lattice::from_walls(3, 2, &walls).unwrap();
        lat.reserve(SpaceTime::new(0, 0, 0)).unwrap();
        lat.reset_occupancy();
        assert!(lat.is_wall(GridPos::new(1, 1), 1));
    }
}
