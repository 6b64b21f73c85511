//! Tests for the grid index mapper.

use sphere_patch::grid::{to_1d, to_2d, GridCoord};

#[test]
fn test_round_trip_over_vertex_domain() {
    for resolution in 2..=9u32 {
        for index in 0..resolution * resolution {
            let coord = to_2d(index, resolution);
            assert!(coord.row < resolution);
            assert!(coord.col < resolution);
            assert_eq!(to_1d(coord, resolution), index);
        }
    }
}

#[test]
fn test_round_trip_over_cell_domain() {
    // The cell grid reuses the same mapping at width resolution - 1.
    let resolution = 7u32;
    let cells = resolution - 1;

    for index in 0..cells * cells {
        assert_eq!(to_1d(to_2d(index, cells), cells), index);
    }
}

#[test]
fn test_row_major_layout() {
    assert_eq!(to_2d(0, 4), GridCoord::new(0, 0));
    assert_eq!(to_2d(1, 4), GridCoord::new(0, 1));
    assert_eq!(to_2d(4, 4), GridCoord::new(1, 0));
    assert_eq!(to_2d(15, 4), GridCoord::new(3, 3));

    assert_eq!(to_1d(GridCoord::new(2, 3), 4), 11);
}

#[test]
fn test_anchors_cell() {
    // Trailing row and column vertices anchor nothing.
    for col in 0..4 {
        assert!(!GridCoord::new(3, col).anchors_cell(4));
    }
    for row in 0..4 {
        assert!(!GridCoord::new(row, 3).anchors_cell(4));
    }

    assert!(GridCoord::new(0, 0).anchors_cell(4));
    assert!(GridCoord::new(2, 2).anchors_cell(4));
}
