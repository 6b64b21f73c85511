//! Linear ↔ two-dimensional grid index mapping.
//!
//! A patch is a row-major `resolution × resolution` grid of vertices; the
//! cells between them form a `(resolution - 1) × (resolution - 1)` grid. Both
//! grids use the same mapping, run at their respective width, so
//! [`to_1d`]/[`to_2d`] serve vertex indexing and cell indexing alike.

/// A `(row, column)` position of a vertex or cell within a patch's grid.
///
/// Bijective with the linear index `row * resolution + col` for
/// `row, col < resolution`. See [`to_1d`] and [`to_2d`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridCoord {
    pub row: u32,
    pub col: u32,
}

impl GridCoord {
    #[inline]
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Returns `true` if this vertex coordinate anchors a cell, i.e. it does
    /// not lie on the trailing row or column of the grid.
    #[inline]
    pub const fn anchors_cell(self, resolution: u32) -> bool {
        self.row < resolution - 1 && self.col < resolution - 1
    }
}

/// Converts a linear index into its grid coordinate.
///
/// Inverse of [`to_1d`] over `index ∈ [0, resolution²)`.
#[inline]
pub const fn to_2d(index: u32, resolution: u32) -> GridCoord {
    GridCoord {
        row: index / resolution,
        col: index % resolution,
    }
}

/// Converts a grid coordinate into its linear index.
///
/// Inverse of [`to_2d`] over `row, col ∈ [0, resolution)`.
#[inline]
pub const fn to_1d(coord: GridCoord, resolution: u32) -> u32 {
    coord.row * resolution + coord.col
}
