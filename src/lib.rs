//! gridpick library crate.
//!
//! Keyboard-driven region picking: the output area is split into a grid of
//! labelled cells and typing a label narrows the selection to one cell,
//! which is then handed to a refinement stage.

pub mod bisect;
pub mod color;
pub mod config;
pub mod error;
pub mod geometry;
pub mod keys;
pub mod mode;
pub mod orchestrator;
pub mod renderer;
pub mod tile;

pub use error::{Result, TileError};
pub use geometry::Rect;
