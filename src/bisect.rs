// src/bisect.rs

//! Hand-off point for the refinement stage that follows tile selection.
//!
//! Holds the chosen rectangle plus the history needed to return to the
//! tile grid. Further narrowing of the rectangle is not done here.

use log::info;

use crate::geometry::Rect;
use crate::keys::{KeyAction, KeyEvent, KeySymbol};
use crate::mode::KeyOutcome;
use crate::tile::TileHistory;

#[derive(Debug)]
pub struct BisectStage {
    area: Rect,
    history: Option<TileHistory>,
}

impl BisectStage {
    pub fn enter(area: Rect, history: TileHistory) -> Self {
        info!("Entering bisect stage on {:?}", area);
        Self {
            area,
            history: Some(history),
        }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    /// Enter accepts the area, Backspace goes back to the tile grid, Escape
    /// cancels. Everything else is ignored.
    pub fn handle_key(&mut self, event: &KeyEvent) -> KeyOutcome {
        if event.symbol == KeySymbol::Enter {
            info!("Accepted {:?}", self.area);
            return KeyOutcome::Accepted(self.area);
        }
        match event.classify() {
            KeyAction::Cancel => KeyOutcome::Cancel,
            KeyAction::Undo => match self.history.take() {
                Some(history) => KeyOutcome::Back(history),
                None => KeyOutcome::Ignored,
            },
            KeyAction::Text(_) | KeyAction::Ignore => KeyOutcome::Ignored,
        }
    }
}
