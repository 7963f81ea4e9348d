// src/orchestrator.rs
//! Orchestrates the overlay: pulls key events from the driver, feeds them to
//! the active mode, swaps modes on hand-off, and pushes frames back to the
//! driver. Backend specifics stay behind the [`Driver`] trait so the loop
//! can be exercised with a mock.

use anyhow::Context;

use crate::bisect::BisectStage;
use crate::config::Config;
use crate::geometry::{clamp_to_output, Rect};
use crate::keys::KeyEvent;
use crate::mode::{KeyOutcome, Mode};
use crate::renderer::{RenderCommand, Renderer};
use crate::tile::TileController;

/// The platform side of the overlay: a keyboard and a surface.
pub trait Driver {
    /// Blocks for the next key event. `None` means the input source is gone.
    fn poll_key(&mut self) -> anyhow::Result<Option<KeyEvent>>;

    /// Paints and presents one frame.
    fn present(&mut self, commands: Vec<RenderCommand>) -> anyhow::Result<()>;

    /// Output size in pixels.
    fn output_size(&self) -> (i32, i32);
}

/// Represents the status of the orchestrator after processing an event.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum OrchestratorStatus {
    /// Keep feeding events.
    Running,
    /// The overlay is done. Carries the picked area unless it was cancelled.
    Shutdown(Option<Rect>),
}

pub struct AppOrchestrator<'a> {
    driver: &'a mut dyn Driver,
    renderer: Renderer,
    mode: Mode,
}

impl<'a> AppOrchestrator<'a> {
    /// Enters tile mode on the configured area and draws the first frame.
    pub fn new(driver: &'a mut dyn Driver, config: &Config) -> anyhow::Result<Self> {
        let (output_width, output_height) = driver.output_size();
        let area = clamp_to_output(config.area_override(), output_width, output_height);
        let tile = TileController::enter(area, &config.mode_tile)
            .context("Failed to enter tile mode")?;

        let mut orchestrator = AppOrchestrator {
            driver,
            renderer: Renderer::new(&config.mode_tile),
            mode: Mode::Tile(tile),
        };
        orchestrator.redraw()?;
        Ok(orchestrator)
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Handles one key event.
    pub fn process_event_cycle(&mut self) -> anyhow::Result<OrchestratorStatus> {
        let Some(event) = self.driver.poll_key().context("Failed to read key event")? else {
            log::info!("Orchestrator: input closed. Signaling shutdown.");
            return Ok(OrchestratorStatus::Shutdown(None));
        };
        if event.symbol.is_modifier() {
            return Ok(OrchestratorStatus::Running);
        }

        log::debug!("Orchestrator: {} mode handling {:?}", self.mode.name(), event);
        match self.mode.handle_key(&event) {
            KeyOutcome::Ignored => {
                log::trace!("Orchestrator: key ignored");
            }
            KeyOutcome::Consumed => self.redraw()?,
            KeyOutcome::Cancel => {
                log::info!("Orchestrator: cancelled. Signaling shutdown.");
                return Ok(OrchestratorStatus::Shutdown(None));
            }
            KeyOutcome::Selected { area, history } => {
                self.mode = Mode::Bisect(BisectStage::enter(area, history));
                self.redraw()?;
            }
            KeyOutcome::Back(history) => {
                self.mode = Mode::Tile(TileController::reenter(history));
                self.redraw()?;
            }
            KeyOutcome::Accepted(area) => {
                return Ok(OrchestratorStatus::Shutdown(Some(area)));
            }
        }
        Ok(OrchestratorStatus::Running)
    }

    /// Runs until shutdown, returning the picked area if any.
    pub fn run(&mut self) -> anyhow::Result<Option<Rect>> {
        loop {
            if let OrchestratorStatus::Shutdown(result) = self.process_event_cycle()? {
                return Ok(result);
            }
        }
    }

    fn redraw(&mut self) -> anyhow::Result<()> {
        let commands = self.mode.render(&self.renderer);
        self.driver
            .present(commands)
            .context("Failed to present frame")
    }
}
