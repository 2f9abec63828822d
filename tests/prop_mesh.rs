//! Property-based tests for grid construction.

use lanczos_fvm::{FaceSide, Grid, Vec2};
use proptest::prelude::*;

proptest! {
    /// Cell count and storage order follow the dimensions.
    #[test]
    fn grid_dimensions_match(nx in 1usize..32, ny in 1usize..32) {
        let grid = Grid::with_dimensions(nx, ny, 1.0, 0.01).unwrap();
        prop_assert_eq!(grid.len(), nx * ny);
        prop_assert_eq!(grid.rows().count(), ny);
        for (k, cell) in grid.cells.iter().enumerate() {
            prop_assert_eq!(cell.index, [k % nx, k / nx]);
        }
    }

    /// Corners are the scaled unit square anchored at the cell index.
    #[test]
    fn corners_match_index(
        nx in 1usize..16,
        ny in 1usize..16,
        delta_x in 0.1f64..4.0,
    ) {
        let grid = Grid::with_dimensions(nx, ny, delta_x, 0.01).unwrap();
        for cell in &grid.cells {
            let [i, j] = cell.index;
            prop_assert_eq!(cell.corners(), [
                Vec2::from_index(i, j, delta_x),
                Vec2::from_index(i + 1, j, delta_x),
                Vec2::from_index(i, j + 1, delta_x),
                Vec2::from_index(i + 1, j + 1, delta_x),
            ]);
            prop_assert!((cell.area() - delta_x * delta_x).abs() < 1e-12);
        }
    }

    /// Construction with identical inputs gives value-equal grids.
    #[test]
    fn construction_is_idempotent(nx in 1usize..16, ny in 1usize..16, delta_x in 0.1f64..4.0) {
        let first = Grid::with_dimensions(nx, ny, delta_x, 0.01).unwrap();
        let second = Grid::with_dimensions(nx, ny, delta_x, 0.01).unwrap();
        prop_assert_eq!(first, second);
    }

    /// A side is on the boundary exactly when it has no neighbour.
    #[test]
    fn boundary_sides_have_no_neighbor(
        nx in 1usize..12,
        ny in 1usize..12,
        i in 0usize..12,
        j in 0usize..12,
    ) {
        prop_assume!(i < nx && j < ny);
        let grid = Grid::with_dimensions(nx, ny, 1.0, 0.01).unwrap();
        let boundary_sides = grid.boundary_sides([i, j]).unwrap();
        for side in FaceSide::ALL {
            let neighbor = grid.neighbor([i, j], side).unwrap();
            prop_assert_eq!(neighbor.is_none(), boundary_sides.contains(&side));
        }
    }

    /// Indices outside the grid are rejected.
    #[test]
    fn out_of_bounds_indices_are_rejected(nx in 1usize..12, ny in 1usize..12, extra in 0usize..5) {
        let grid = Grid::with_dimensions(nx, ny, 1.0, 0.01).unwrap();
        prop_assert!(grid.cell([nx + extra, 0]).is_err());
        prop_assert!(grid.cell([0, ny + extra]).is_err());
        prop_assert!(grid.cell([nx - 1, ny - 1]).is_ok());
    }
}
