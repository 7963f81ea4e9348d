// src/tile/partition.rs

//! Splits the outer area into a near-square grid of cells.
//!
//! Cells are biased 2:1 wider than tall so labels fit comfortably. Pixels
//! that do not divide evenly go one each to the lowest-indexed rows and
//! columns, so the cells tile the area with no gaps or overlaps.

use crate::error::{Result, TileError};
use crate::geometry::Rect;

/// Default cap on the number of cells (two letters of a 26-symbol alphabet).
pub const DEFAULT_MAX_CELLS: u32 = 26 * 26;
/// Default lower bound on the pixel area of a single cell.
pub const DEFAULT_MIN_CELL_AREA: u32 = 25 * 50;

/// The grid computed for one outer area. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub rows: i32,
    pub columns: i32,
    pub cell_width: i32,
    pub cell_height: i32,
    /// The first `width_remainder` columns are one pixel wider than `cell_width`.
    pub width_remainder: i32,
    /// The first `height_remainder` rows are one pixel taller than `cell_height`.
    pub height_remainder: i32,
}

impl Grid {
    /// Partitions an area of `width` x `height` pixels.
    ///
    /// Fails with [`TileError::Geometry`] when the area is non-positive and
    /// with [`TileError::Config`] when `max_cells` or `min_cell_area` is zero.
    pub fn partition(width: i32, height: i32, max_cells: u32, min_cell_area: u32) -> Result<Self> {
        if width <= 0 || height <= 0 {
            log::error!("Area ({}x{}) is too small.", width, height);
            return Err(TileError::Geometry { width, height });
        }
        if max_cells == 0 {
            return Err(TileError::Config("max_cells must be positive".into()));
        }
        if min_cell_area == 0 {
            return Err(TileError::Config("min_cell_area must be positive".into()));
        }

        let area = width as f64 * height as f64;
        let target_cell_area = (area / max_cells as f64).max(min_cell_area as f64);

        let height_basis = (target_cell_area / 2.0).sqrt();
        let width_basis = (target_cell_area * 2.0).sqrt();

        let mut rows = ((height as f64 / height_basis) as i32).max(1);
        let mut columns = ((width as f64 / width_basis) as i32).max(1);

        // Float rounding can tip an exact division over by one.
        while rows as i64 * columns as i64 > max_cells as i64 {
            shrink(width, height, &mut rows, &mut columns);
        }
        // Flooring the cell size can leave cells just under the minimum.
        while ((width / columns) as i64 * (height / rows) as i64) < min_cell_area as i64
            && (rows > 1 || columns > 1)
        {
            shrink(width, height, &mut rows, &mut columns);
        }

        let grid = Self {
            rows,
            columns,
            cell_width: width / columns,
            cell_height: height / rows,
            width_remainder: width % columns,
            height_remainder: height % rows,
        };
        log::debug!(
            "Partitioned {}x{} into {} rows x {} columns of ~{}x{}",
            width,
            height,
            grid.rows,
            grid.columns,
            grid.cell_width,
            grid.cell_height
        );
        Ok(grid)
    }

    /// Number of cells, `rows * columns`.
    pub fn cell_count(&self) -> usize {
        self.rows as usize * self.columns as usize
    }

    /// Total width covered by the grid.
    pub fn width(&self) -> i32 {
        self.cell_width * self.columns + self.width_remainder
    }

    /// Total height covered by the grid.
    pub fn height(&self) -> i32 {
        self.cell_height * self.rows + self.height_remainder
    }

    /// The rectangle of the cell at `(row, column)`, relative to the grid origin.
    pub fn cell_rect(&self, row: i32, column: i32) -> Rect {
        debug_assert!((0..self.rows).contains(&row), "row {} out of range", row);
        debug_assert!(
            (0..self.columns).contains(&column),
            "column {} out of range",
            column
        );
        Rect {
            x: column * self.cell_width + column.min(self.width_remainder),
            y: row * self.cell_height + row.min(self.height_remainder),
            w: self.cell_width + i32::from(column < self.width_remainder),
            h: self.cell_height + i32::from(row < self.height_remainder),
        }
    }

    /// Column-major unranking: `(row, column)` of cell `index`.
    pub fn position(&self, index: usize) -> (i32, i32) {
        assert!(index < self.cell_count(), "cell index {} out of range", index);
        let rows = self.rows as usize;
        ((index % rows) as i32, (index / rows) as i32)
    }

    /// Column-major ranking, the inverse of [`Grid::position`].
    pub fn index(&self, row: i32, column: i32) -> usize {
        column as usize * self.rows as usize + row as usize
    }

    /// The rectangle of cell `index`, relative to the grid origin.
    pub fn index_rect(&self, index: usize) -> Rect {
        let (row, column) = self.position(index);
        self.cell_rect(row, column)
    }
}

/// Drops one row or column, whichever keeps cells closer to 2:1.
fn shrink(width: i32, height: i32, rows: &mut i32, columns: &mut i32) {
    if (width / *columns < 2 * (height / *rows) && *columns > 1) || *rows == 1 {
        *columns -= 1;
    } else {
        *rows -= 1;
    }
}
