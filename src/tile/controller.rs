// src/tile/controller.rs

//! Drives one tile session from enter to selection.

use std::rc::Rc;

use log::{debug, info, trace};

use crate::config::TileModeConfig;
use crate::error::Result;
use crate::geometry::Rect;
use crate::keys::{KeyAction, KeyEvent};
use crate::mode::KeyOutcome;
use crate::tile::cursor::SelectionCursor;
use crate::tile::label::{Alphabet, LabelAddressing};
use crate::tile::partition::Grid;
use crate::tile::view::TileView;

/// Everything needed to resume a finished tile session.
///
/// Handed to the next stage together with the selected rectangle; passing
/// it back to [`TileController::reenter`] restores the grid with the last
/// typed symbol removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileHistory {
    area: Rect,
    grid: Grid,
    alphabet: Rc<Alphabet>,
    typed: Vec<usize>,
}

impl TileHistory {
    /// The outer area of the session this history came from.
    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn typed(&self) -> &[usize] {
        &self.typed
    }
}

#[derive(Debug)]
pub struct TileController {
    area: Rect,
    grid: Grid,
    alphabet: Rc<Alphabet>,
    cursor: SelectionCursor,
}

impl TileController {
    /// Starts a fresh session over `area` (already clamped to the output).
    ///
    /// Fails when the area is empty or the configured alphabet or limits are
    /// invalid; the overlay should not be shown in that case.
    pub fn enter(area: Rect, config: &TileModeConfig) -> Result<Self> {
        let grid = Grid::partition(area.w, area.h, config.max_cells, config.min_cell_area)?;
        let alphabet = Rc::new(Alphabet::parse(&config.label_symbols)?);
        let addressing = LabelAddressing::new(&alphabet, grid.cell_count());

        info!(
            "Entering tile mode on {:?}: {}x{} cells, {}-symbol labels",
            area,
            grid.columns,
            grid.rows,
            addressing.digits()
        );

        Ok(Self {
            area,
            grid,
            alphabet,
            cursor: SelectionCursor::new(addressing),
        })
    }

    /// Resumes the session saved in `history`, one symbol shallower than
    /// where it ended.
    pub fn reenter(history: TileHistory) -> Self {
        let TileHistory {
            area,
            grid,
            alphabet,
            typed,
        } = history;
        let addressing = LabelAddressing::new(&alphabet, grid.cell_count());
        let mut cursor = SelectionCursor::with_history(addressing, typed);
        cursor.undo();

        info!(
            "Re-entering tile mode on {:?} at depth {}",
            area,
            cursor.depth()
        );

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

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn cursor(&self) -> &SelectionCursor {
        &self.cursor
    }

    pub fn view(&self) -> TileView<'_> {
        TileView::new(self.area, &self.grid, &self.alphabet, &self.cursor)
    }

    /// Output-space rectangle of cell `index`.
    pub fn cell_area(&self, index: usize) -> Rect {
        self.grid
            .index_rect(index)
            .translate(self.area.x, self.area.y)
    }

    pub fn handle_key(&mut self, event: &KeyEvent) -> KeyOutcome {
        match event.classify() {
            KeyAction::Cancel => {
                info!("Tile mode cancelled");
                KeyOutcome::Cancel
            }
            KeyAction::Undo => {
                if self.cursor.undo() {
                    debug!("Went back to depth {}", self.cursor.depth());
                    KeyOutcome::Consumed
                } else {
                    debug!("Nothing to go back to");
                    KeyOutcome::Ignored
                }
            }
            KeyAction::Text(text) => self.handle_text(text),
            KeyAction::Ignore => {
                trace!("Ignoring {:?}", event.symbol);
                KeyOutcome::Ignored
            }
        }
    }

    fn handle_text(&mut self, text: &str) -> KeyOutcome {
        let Some(digit) = self.alphabet.find(text) else {
            trace!("Text {:?} is not a label symbol", text);
            return KeyOutcome::Ignored;
        };
        if !self.cursor.append(digit) {
            return KeyOutcome::Ignored;
        }

        let Some(index) = self.cursor.completed_index() else {
            return KeyOutcome::Consumed;
        };

        let area = self.cell_area(index);
        let history = TileHistory {
            area: self.area,
            grid: self.grid,
            alphabet: Rc::clone(&self.alphabet),
            typed: self.cursor.typed().to_vec(),
        };
        // The history token owns the completed label from here on.
        self.cursor.reset();

        info!("Selected cell {} at {:?}", index, area);
        KeyOutcome::Selected { area, history }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TileError;
    use crate::keys::KeySymbol;
    use test_log::test;

    fn enter(w: i32, h: i32) -> TileController {
        TileController::enter(Rect::new(0, 0, w, h), &TileModeConfig::default()).unwrap()
    }

    fn key(c: char) -> KeyEvent {
        KeyEvent::from_char(c)
    }

    #[test]
    fn test_two_symbols_select_a_cell() {
        let mut tile = enter(1000, 500);
        assert_eq!(tile.handle_key(&key('b')), KeyOutcome::Consumed);
        match tile.handle_key(&key('c')) {
            KeyOutcome::Selected { area, history } => {
                // "bc" is index 28: column 1, row 8 of a 20-row grid.
                assert_eq!(area, Rect::new(50, 200, 50, 25));
                assert_eq!(history.typed(), &[1, 2]);
            }
            other => panic!("expected a selection, got {:?}", other),
        }
        assert_eq!(tile.cursor().depth(), 0);
    }

    #[test]
    fn test_index_zero_is_selectable() {
        let mut tile = enter(1000, 500);
        tile.handle_key(&key('a'));
        assert!(matches!(
            tile.handle_key(&key('a')),
            KeyOutcome::Selected { area, .. } if area == Rect::new(0, 0, 50, 25)
        ));
    }

    #[test]
    fn test_selection_is_offset_by_area_origin() {
        let mut tile =
            TileController::enter(Rect::new(300, 200, 1000, 500), &TileModeConfig::default())
                .unwrap();
        tile.handle_key(&key('a'));
        match tile.handle_key(&key('b')) {
            KeyOutcome::Selected { area, .. } => assert_eq!(area, Rect::new(300, 225, 50, 25)),
            other => panic!("expected a selection, got {:?}", other),
        }
    }

    #[test]
    fn test_undo_and_cancel() {
        let mut tile = enter(1000, 500);
        let backspace = KeyEvent::named(KeySymbol::Backspace);
        assert_eq!(tile.handle_key(&backspace), KeyOutcome::Ignored);
        tile.handle_key(&key('d'));
        assert_eq!(tile.handle_key(&backspace), KeyOutcome::Consumed);
        assert_eq!(tile.cursor().depth(), 0);
        assert_eq!(
            tile.handle_key(&KeyEvent::named(KeySymbol::Escape)),
            KeyOutcome::Cancel
        );
    }

    #[test]
    fn test_unmapped_keys_are_ignored() {
        let mut tile = enter(1000, 500);
        assert_eq!(tile.handle_key(&key('1')), KeyOutcome::Ignored);
        assert_eq!(tile.handle_key(&KeyEvent::named(KeySymbol::Left)), KeyOutcome::Ignored);
        // 400 cells: nothing starts with "q" (16 * 26 >= 400).
        assert_eq!(tile.handle_key(&key('q')), KeyOutcome::Ignored);
        assert_eq!(tile.cursor().depth(), 0);
    }

    #[test]
    fn test_reenter_restores_one_level() {
        let mut tile = enter(1000, 500);
        tile.handle_key(&key('b'));
        let after_first = tile.cursor().clone();
        let KeyOutcome::Selected { history, .. } = tile.handle_key(&key('c')) else {
            panic!("expected a selection");
        };

        let resumed = TileController::reenter(history);
        assert_eq!(resumed.cursor(), &after_first);
        assert_eq!(resumed.grid(), tile.grid());
        assert_eq!(resumed.area(), tile.area());
    }

    #[test]
    fn test_enter_rejects_bad_input() {
        let config = TileModeConfig::default();
        assert_eq!(
            TileController::enter(Rect::new(0, 0, 0, 500), &config).unwrap_err(),
            TileError::Geometry {
                width: 0,
                height: 500
            }
        );

        let config = TileModeConfig {
            label_symbols: "x".into(),
            ..TileModeConfig::default()
        };
        assert!(matches!(
            TileController::enter(Rect::new(0, 0, 100, 100), &config),
            Err(TileError::AlphabetTooSmall { len: 1 })
        ));
    }
}
