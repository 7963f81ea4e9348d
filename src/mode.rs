// src/mode.rs

//! The overlay's modes and the outcomes of feeding them a key.
//!
//! The host owns exactly one [`Mode`] at a time and swaps it according to
//! the [`KeyOutcome`] the active mode returns.

use crate::bisect::BisectStage;
use crate::geometry::Rect;
use crate::keys::KeyEvent;
use crate::renderer::{RenderCommand, Renderer};
use crate::tile::{TileController, TileHistory};

/// What happened to a key after the active mode saw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Not meaningful to this mode; the host may act on it itself.
    Ignored,
    /// Handled; state changed and a redraw is due.
    Consumed,
    /// Tear down the overlay without a result.
    Cancel,
    /// The tile mode picked `area`; continue with refinement.
    Selected { area: Rect, history: TileHistory },
    /// Return to the tile session saved in the history.
    Back(TileHistory),
    /// Final answer.
    Accepted(Rect),
}

/// The capability every mode offers the host.
pub trait ModeInterface {
    fn handle_key(&mut self, event: &KeyEvent) -> KeyOutcome;

    fn render(&self, renderer: &Renderer) -> Vec<RenderCommand>;
}

impl ModeInterface for TileController {
    fn handle_key(&mut self, event: &KeyEvent) -> KeyOutcome {
        TileController::handle_key(self, event)
    }

    fn render(&self, renderer: &Renderer) -> Vec<RenderCommand> {
        renderer.render_tile(&self.view())
    }
}

impl ModeInterface for BisectStage {
    fn handle_key(&mut self, event: &KeyEvent) -> KeyOutcome {
        BisectStage::handle_key(self, event)
    }

    fn render(&self, renderer: &Renderer) -> Vec<RenderCommand> {
        renderer.render_bisect(self.area())
    }
}

#[derive(Debug)]
pub enum Mode {
    Tile(TileController),
    Bisect(BisectStage),
}

impl Mode {
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Tile(_) => "tile",
            Mode::Bisect(_) => "bisect",
        }
    }

    fn active(&self) -> &dyn ModeInterface {
        match self {
            Mode::Tile(tile) => tile,
            Mode::Bisect(bisect) => bisect,
        }
    }

    fn active_mut(&mut self) -> &mut dyn ModeInterface {
        match self {
            Mode::Tile(tile) => tile,
            Mode::Bisect(bisect) => bisect,
        }
    }

    pub fn handle_key(&mut self, event: &KeyEvent) -> KeyOutcome {
        self.active_mut().handle_key(event)
    }

    pub fn render(&self, renderer: &Renderer) -> Vec<RenderCommand> {
        self.active().render(renderer)
    }
}
