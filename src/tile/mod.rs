// src/tile/mod.rs

//! Tile mode: narrows the outer area down to one grid cell by typing its label.
//!
//! - [`partition`] splits the area into a grid of cells.
//! - [`label`] addresses those cells with fixed-length symbol sequences.
//! - [`cursor`] accumulates typed symbols.
//! - [`controller`] reacts to keys and hands the chosen cell on.
//! - [`view`] exposes per-cell draw data to the renderer.

pub mod controller;
pub mod cursor;
pub mod label;
pub mod partition;
pub mod view;

pub use controller::{TileController, TileHistory};
pub use cursor::SelectionCursor;
pub use label::{Alphabet, LabelAddressing};
pub use partition::Grid;
pub use view::{CellView, SplitLabel, TileView};
