// src/tile/view.rs

//! Read-only per-cell draw data for the tile mode.

use crate::geometry::Rect;
use crate::tile::cursor::SelectionCursor;
use crate::tile::label::Alphabet;
use crate::tile::partition::Grid;

/// A label split at the current typing depth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitLabel {
    /// Symbols already typed.
    pub typed: String,
    /// Symbols still to type.
    pub rest: String,
}

/// Draw data for one cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellView {
    pub index: usize,
    /// Cell bounds in output coordinates.
    pub rect: Rect,
    /// Present only while the cell is still selectable.
    pub label: Option<SplitLabel>,
}

impl CellView {
    pub fn is_selectable(&self) -> bool {
        self.label.is_some()
    }
}

/// A snapshot view over a tile session. Holds no state of its own.
#[derive(Debug, Clone, Copy)]
pub struct TileView<'a> {
    area: Rect,
    grid: &'a Grid,
    alphabet: &'a Alphabet,
    cursor: &'a SelectionCursor,
}

impl<'a> TileView<'a> {
    pub fn new(
        area: Rect,
        grid: &'a Grid,
        alphabet: &'a Alphabet,
        cursor: &'a SelectionCursor,
    ) -> Self {
        Self {
            area,
            grid,
            alphabet,
            cursor,
        }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn grid(&self) -> &'a Grid {
        self.grid
    }

    /// Cells in column-major order, the same order indices are assigned.
    pub fn cells(&self) -> impl Iterator<Item = CellView> + 'a {
        let Self {
            area,
            grid,
            alphabet,
            cursor,
        } = *self;
        let depth = cursor.depth();

        (0..grid.cell_count()).map(move |index| {
            let rect = grid.index_rect(index).translate(area.x, area.y);
            let label = cursor.selects(index).then(|| {
                let (typed, rest) = cursor.addressing().split_label(alphabet, index, depth);
                SplitLabel { typed, rest }
            });
            CellView { index, rect, label }
        })
    }

    /// Only the cells still reachable with the typed digits.
    pub fn selectable_cells(&self) -> impl Iterator<Item = CellView> + 'a {
        self.cells().filter(CellView::is_selectable)
    }
}
