//! Unit tests for evac-grid.

use evac_core::{AgentId, Cell};

use crate::ObstacleGrid;

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Parse a picture: `#` = obstacle, anything else walkable.
fn grid(rows: &[&str]) -> ObstacleGrid {
    let matrix: Vec<Vec<bool>> = rows
        .iter()
        .map(|r| r.chars().map(|c| c == '#').collect())
        .collect();
    ObstacleGrid::from_matrix(&matrix).unwrap()
}

fn open(w: usize, h: usize) -> ObstacleGrid {
    ObstacleGrid::open(w, h).unwrap()
}

// ── ObstacleGrid ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod obstacle_grid {
    use super::*;
    use crate::GridError;

    #[test]
    fn dimensions_follow_matrix_shape() {
        let g = grid(&["..#", "..."]);
        assert_eq!(g.width(), 3);
        assert_eq!(g.height(), 2);
        assert_eq!(g.cell_count(), 6);
        assert_eq!(g.walkable_count(), 5);
    }

    #[test]
    fn indexed_row_then_column() {
        let g = grid(&["..#", "..."]);
        assert!(g.is_obstacle(Cell::new(2, 0)));
        assert!(!g.is_obstacle(Cell::new(0, 1)));
        assert!(!g.is_obstacle(Cell::new(2, 1)));
    }

    #[test]
    fn off_grid_is_obstacle_and_out_of_bounds() {
        let g = open(3, 3);
        for c in [Cell::new(-1, 0), Cell::new(0, -1), Cell::new(3, 0), Cell::new(0, 3)] {
            assert!(!g.in_bounds(c));
            assert!(g.is_obstacle(c));
        }
        assert!(g.in_bounds(Cell::new(2, 2)));
    }

    #[test]
    fn index_roundtrip() {
        let g = open(4, 3);
        for i in 0..g.cell_count() {
            assert_eq!(g.index_of(g.cell_at(i)), Some(i));
        }
        assert_eq!(g.index_of(Cell::new(4, 0)), None);
    }

    #[test]
    fn empty_matrix_rejected() {
        let empty: Vec<Vec<bool>> = vec![];
        assert!(matches!(ObstacleGrid::from_matrix(&empty), Err(GridError::InvalidMatrix(_))));
        assert!(matches!(ObstacleGrid::from_matrix(&[Vec::<bool>::new()]), Err(GridError::InvalidMatrix(_))));
    }

    #[test]
    fn ragged_matrix_rejected() {
        let ragged = vec![vec![false, false], vec![false]];
        assert!(matches!(ObstacleGrid::from_matrix(&ragged), Err(GridError::InvalidMatrix(_))));
    }

    #[test]
    fn neighborhood_radius_one_clockwise_from_north() {
        let g = open(5, 5);
        let n = g.neighborhood(Cell::new(2, 2), 1, false);
        assert_eq!(
            n,
            [
                Cell::new(2, 1),
                Cell::new(3, 1),
                Cell::new(3, 2),
                Cell::new(3, 3),
                Cell::new(2, 3),
                Cell::new(1, 3),
                Cell::new(1, 2),
                Cell::new(1, 1),
            ]
        );
    }

    #[test]
    fn neighborhood_clipped_at_corner() {
        let g = open(5, 5);
        let n = g.neighborhood(Cell::new(0, 0), 1, false);
        assert_eq!(n, [Cell::new(1, 0), Cell::new(1, 1), Cell::new(0, 1)]);
    }

    #[test]
    fn neighborhood_center_optional() {
        let g = open(5, 5);
        let c = Cell::new(2, 2);
        assert!(!g.neighborhood(c, 2, false).contains(&c));
        let with = g.neighborhood(c, 2, true);
        assert_eq!(with[0], c);
        assert_eq!(with.len(), 25);
    }

    #[test]
    fn neighborhood_radius_zero() {
        let g = open(5, 5);
        let c = Cell::new(2, 2);
        assert!(g.neighborhood(c, 0, false).is_empty());
        assert_eq!(g.neighborhood(c, 0, true), [c]);
    }

    #[test]
    fn neighborhood_huge_radius_covers_grid_once() {
        let g = open(4, 3);
        let n = g.neighborhood(Cell::new(1, 1), u32::MAX, true);
        assert_eq!(n.len(), 12);
    }

    #[test]
    fn neighborhood_matches_chebyshev_ball() {
        let g = open(7, 6);
        let c = Cell::new(1, 4);
        for radius in 0..5 {
            let n = g.neighborhood(c, radius, false);
            for i in 0..g.cell_count() {
                let other = g.cell_at(i);
                let d = c.chebyshev(other);
                assert_eq!(n.contains(&other), d >= 1 && d <= radius, "{other} at r={radius}");
            }
        }
    }
}

// ── Exit locator ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod exits {
    use super::*;
    use crate::find_boundary_exits;

    #[test]
    fn open_grid_scan_order() {
        let g = open(3, 3);
        assert_eq!(
            find_boundary_exits(&g),
            [
                // top row
                Cell::new(0, 0), Cell::new(1, 0), Cell::new(2, 0),
                // bottom row
                Cell::new(0, 2), Cell::new(1, 2), Cell::new(2, 2),
                // left column, no corners
                Cell::new(0, 1),
                // right column, no corners
                Cell::new(2, 1),
            ]
        );
    }

    #[test]
    fn single_opening_is_the_only_exit() {
        let g = grid(&[
            "#####",
            "#...#",
            "#....",
            "#...#",
            "#####",
        ]);
        assert_eq!(find_boundary_exits(&g), [Cell::new(4, 2)]);
    }

    #[test]
    fn single_opening_in_top_wall() {
        let g = grid(&[
            "##.##",
            "#...#",
            "#####",
        ]);
        assert_eq!(find_boundary_exits(&g), [Cell::new(2, 0)]);
    }

    #[test]
    fn sealed_border_yields_nothing() {
        let g = grid(&["###", "#.#", "###"]);
        assert!(find_boundary_exits(&g).is_empty());
    }

    #[test]
    fn single_row_counts_each_cell_once() {
        let g = grid(&[".#."]);
        assert_eq!(find_boundary_exits(&g), [Cell::new(0, 0), Cell::new(2, 0)]);
    }

    #[test]
    fn single_column_counts_each_cell_once() {
        let g = grid(&[".", ".", "."]);
        assert_eq!(
            find_boundary_exits(&g),
            [Cell::new(0, 0), Cell::new(0, 2), Cell::new(0, 1)]
        );
    }
}

// ── OccupancyGrid ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod occupancy {
    use super::*;
    use crate::{GridError, OccupancyGrid};

    #[test]
    fn place_and_query() {
        let mut occ = OccupancyGrid::new(open(3, 3));
        occ.place(AgentId(0), Cell::new(1, 1)).unwrap();
        occ.place(AgentId(1), Cell::new(1, 1)).unwrap();
        assert_eq!(occ.count(Cell::new(1, 1)), 2);
        assert_eq!(occ.occupants(Cell::new(1, 1)), [AgentId(0), AgentId(1)]);
        assert_eq!(occ.position_of(AgentId(1)), Some(Cell::new(1, 1)));
        assert_eq!(occ.agent_count(), 2);
    }

    #[test]
    fn place_twice_rejected() {
        let mut occ = OccupancyGrid::new(open(3, 3));
        occ.place(AgentId(0), Cell::new(0, 0)).unwrap();
        assert!(matches!(occ.place(AgentId(0), Cell::new(1, 0)), Err(GridError::AlreadyPlaced(_))));
        assert_eq!(occ.count(Cell::new(1, 0)), 0);
    }

    #[test]
    fn place_on_obstacle_rejected() {
        let mut occ = OccupancyGrid::new(grid(&[".#", ".."]));
        let err = occ.place(AgentId(0), Cell::new(1, 0)).unwrap_err();
        assert!(matches!(err, GridError::Obstructed(c) if c == Cell::new(1, 0)));
        assert!(err.is_rejection());
        assert_eq!(occ.agent_count(), 0);
    }

    #[test]
    fn place_off_grid_rejected() {
        let mut occ = OccupancyGrid::new(open(2, 2));
        let err = occ.place(AgentId(0), Cell::new(5, 5)).unwrap_err();
        assert!(matches!(err, GridError::OutOfBounds(_)));
        assert!(!err.is_rejection());
    }

    #[test]
    fn capacity_is_eight() {
        let mut occ = OccupancyGrid::new(open(2, 2));
        let c = Cell::new(0, 0);
        for i in 0..8 {
            occ.place(AgentId(i), c).unwrap();
        }
        let err = occ.place(AgentId(8), c).unwrap_err();
        assert!(matches!(err, GridError::CapacityExceeded { capacity: 8, .. }));
        assert_eq!(occ.count(c), 8);
        assert!(!occ.can_enter(c));
    }

    #[test]
    fn move_is_atomic() {
        let mut occ = OccupancyGrid::new(open(3, 1));
        occ.place(AgentId(0), Cell::new(0, 0)).unwrap();
        occ.move_agent(AgentId(0), Cell::new(1, 0)).unwrap();
        assert_eq!(occ.count(Cell::new(0, 0)), 0);
        assert_eq!(occ.count(Cell::new(1, 0)), 1);
        assert_eq!(occ.position_of(AgentId(0)), Some(Cell::new(1, 0)));
        assert_eq!(occ.agent_count(), 1);
    }

    #[test]
    fn rejected_move_leaves_agent_in_place() {
        let mut occ = OccupancyGrid::with_capacity(grid(&["..#"]), 1);
        occ.place(AgentId(0), Cell::new(0, 0)).unwrap();
        occ.place(AgentId(1), Cell::new(1, 0)).unwrap();

        let full = occ.move_agent(AgentId(0), Cell::new(1, 0)).unwrap_err();
        assert!(full.is_rejection());
        let wall = occ.move_agent(AgentId(1), Cell::new(2, 0)).unwrap_err();
        assert!(wall.is_rejection());

        assert_eq!(occ.position_of(AgentId(0)), Some(Cell::new(0, 0)));
        assert_eq!(occ.position_of(AgentId(1)), Some(Cell::new(1, 0)));
        assert_eq!(occ.occupants(Cell::new(0, 0)), [AgentId(0)]);
        assert_eq!(occ.occupants(Cell::new(1, 0)), [AgentId(1)]);
    }

    #[test]
    fn ninth_mover_rejected_and_stays() {
        let mut occ = OccupancyGrid::new(open(3, 3));
        let target = Cell::new(1, 1);
        let sources = [Cell::new(0, 0), Cell::new(2, 2)];
        for i in 0..9u32 {
            occ.place(AgentId(i), sources[(i % 2) as usize]).unwrap();
        }
        let results: Vec<bool> = (0..9u32)
            .map(|i| occ.move_agent(AgentId(i), target).is_ok())
            .collect();
        assert_eq!(results.iter().filter(|&&ok| ok).count(), 8);
        assert!(!results[8]);
        assert_eq!(occ.count(target), 8);
        assert_eq!(occ.position_of(AgentId(8)), Some(sources[0]));
    }

    #[test]
    fn move_onto_own_cell_is_noop_even_when_full() {
        let mut occ = OccupancyGrid::with_capacity(open(1, 1), 1);
        occ.place(AgentId(0), Cell::new(0, 0)).unwrap();
        occ.move_agent(AgentId(0), Cell::new(0, 0)).unwrap();
        assert_eq!(occ.count(Cell::new(0, 0)), 1);
    }

    #[test]
    fn move_unplaced_rejected() {
        let mut occ = OccupancyGrid::new(open(2, 2));
        assert!(matches!(occ.move_agent(AgentId(3), Cell::new(0, 0)), Err(GridError::NotPlaced(_))));
    }

    #[test]
    fn remove_frees_slot() {
        let mut occ = OccupancyGrid::new(open(2, 2));
        occ.place(AgentId(0), Cell::new(1, 1)).unwrap();
        occ.place(AgentId(1), Cell::new(1, 1)).unwrap();
        assert_eq!(occ.remove(AgentId(0)).unwrap(), Cell::new(1, 1));
        assert_eq!(occ.occupants(Cell::new(1, 1)), [AgentId(1)]);
        assert_eq!(occ.position_of(AgentId(0)), None);
        assert!(matches!(occ.remove(AgentId(0)), Err(GridError::NotPlaced(_))));
    }

    #[test]
    fn density_omits_empty_cells() {
        let mut occ = OccupancyGrid::new(open(3, 3));
        occ.place(AgentId(0), Cell::new(2, 0)).unwrap();
        occ.place(AgentId(1), Cell::new(2, 0)).unwrap();
        occ.place(AgentId(2), Cell::new(0, 1)).unwrap();
        let d = occ.density();
        assert_eq!(d.len(), 2);
        assert_eq!(d[&Cell::new(2, 0)], 2);
        assert_eq!(d[&Cell::new(0, 1)], 1);
    }

    #[test]
    fn queries_do_not_mutate() {
        let mut occ = OccupancyGrid::new(open(4, 4));
        occ.place(AgentId(0), Cell::new(1, 1)).unwrap();
        occ.place(AgentId(1), Cell::new(2, 2)).unwrap();
        let before = occ.density();
        for _ in 0..3 {
            let _ = occ.neighbors(Cell::new(1, 1), 2, true);
            let _ = occ.occupants(Cell::new(1, 1));
            let _ = occ.count(Cell::new(2, 2));
            let _ = occ.can_enter(Cell::new(3, 3));
        }
        assert_eq!(occ.density(), before);
        assert_eq!(occ.position_of(AgentId(0)), Some(Cell::new(1, 1)));
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::{Cursor, Write};

    use super::*;
    use crate::{binarize, load_floor_plan_csv, load_intensity_reader, GridError, DEFAULT_THRESHOLD};

    const PLAN: &str = "\
0,0,255,0\n\
0,200,255,0\n\
0, 127 ,128,0\n\
";

    #[test]
    fn reads_intensities_row_major() {
        let rows = load_intensity_reader(Cursor::new(PLAN)).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], [0, 0, 255, 0]);
        assert_eq!(rows[2], [0, 127, 128, 0]);
    }

    #[test]
    fn binarize_below_threshold_is_obstacle() {
        let rows = load_intensity_reader(Cursor::new(PLAN)).unwrap();
        let m = binarize(&rows, DEFAULT_THRESHOLD);
        assert_eq!(m[2], [true, true, false, true]);
        assert_eq!(m[1], [true, false, false, true]);
    }

    #[test]
    fn out_of_range_intensity_rejected() {
        let err = load_intensity_reader(Cursor::new("0,256\n")).unwrap_err();
        assert!(matches!(err, GridError::Parse(_)));
        let err = load_intensity_reader(Cursor::new("0,wall\n")).unwrap_err();
        assert!(matches!(err, GridError::Parse(_)));
    }

    #[test]
    fn ragged_rows_rejected() {
        let err = load_intensity_reader(Cursor::new("0,0,0\n0,0\n")).unwrap_err();
        assert!(matches!(err, GridError::Parse(_)));
    }

    #[test]
    fn floor_plan_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(PLAN.as_bytes()).unwrap();
        file.flush().unwrap();

        let g = load_floor_plan_csv(file.path(), DEFAULT_THRESHOLD).unwrap();
        assert_eq!((g.width(), g.height()), (4, 3));
        assert!(!g.is_obstacle(Cell::new(2, 0)));
        assert!(g.is_obstacle(Cell::new(1, 2)));
        assert!(!g.is_obstacle(Cell::new(1, 1)));
    }

    #[test]
    fn empty_file_is_invalid_matrix() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let err = load_floor_plan_csv(file.path(), DEFAULT_THRESHOLD).unwrap_err();
        assert!(matches!(err, GridError::InvalidMatrix(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_floor_plan_csv(std::path::Path::new("/nonexistent/plan.csv"), 128).unwrap_err();
        assert!(matches!(err, GridError::Io(_)));
    }
}
