// src/config.rs

//! Defines the configuration structures for the overlay.
//!
//! The config is read from a JSON file whose path is given by the
//! `GRIDPICK_CONFIG` environment variable. Every section and field has a
//! default, so an empty object (or no file at all) yields a usable config.

use std::fs;
use std::path::Path;

use anyhow::Context;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::geometry::Rect;
use crate::tile::partition::{DEFAULT_MAX_CELLS, DEFAULT_MIN_CELL_AREA};

/// Environment variable naming the config file.
pub const CONFIG_ENV_VAR: &str = "GRIDPICK_CONFIG";

/// The process-wide config, loaded on first access.
pub static CONFIG: Lazy<Config> = Lazy::new(Config::load_or_default);

// --- Top-Level Configuration Structure ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Restricts the overlay to part of the output. `None` uses the whole output.
    pub area: Option<AreaConfig>,
    /// Settings of the tile (grid) mode.
    pub mode_tile: TileModeConfig,
}

impl Config {
    /// Parses a JSON config file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Loads the file named by `GRIDPICK_CONFIG`, falling back to defaults.
    pub fn load_or_default() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV_VAR) else {
            log::debug!("{} not set, using default config", CONFIG_ENV_VAR);
            return Self::default();
        };
        match Self::load(Path::new(&path)) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{:#}. Using default config.", e);
                Self::default()
            }
        }
    }

    /// The area override as a raw, not yet clamped rectangle.
    pub fn area_override(&self) -> Option<Rect> {
        self.area.map(|a| Rect::new(a.x, a.y, a.w, a.h))
    }
}

// --- Area Configuration ---

/// An explicit outer area in output pixels.
///
/// Negative `x`/`y` are cut at the output's origin; sizes are cut at its
/// far edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaConfig {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

// --- Tile Mode Configuration ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TileModeConfig {
    /// Label alphabet; every character is one symbol.
    pub label_symbols: String,
    pub label_font_family: String,
    /// Lower bound on a cell's pixel area.
    pub min_cell_area: u32,
    /// Upper bound on the number of cells.
    pub max_cells: u32,
    pub unselectable_bg_color: Color,
    pub selectable_bg_color: Color,
    pub selectable_border_color: Color,
    /// Color of the not yet typed part of a label.
    pub label_color: Color,
    /// Color of the already typed part of a label.
    pub label_select_color: Color,
}

impl Default for TileModeConfig {
    fn default() -> Self {
        TileModeConfig {
            label_symbols: "abcdefghijklmnopqrstuvwxyz".to_string(),
            label_font_family: "sans-serif".to_string(),
            min_cell_area: DEFAULT_MIN_CELL_AREA,
            max_cells: DEFAULT_MAX_CELLS,
            unselectable_bg_color: Color::rgba(0x22, 0x22, 0x22, 0x66),
            selectable_bg_color: Color::rgba(0x00, 0x33, 0x00, 0x44),
            selectable_border_color: Color::rgba(0x00, 0x44, 0x00, 0xcc),
            label_color: Color::rgba(0xff, 0xff, 0xff, 0xdd),
            label_select_color: Color::rgba(0xff, 0xdd, 0x00, 0xdd),
        }
    }
}
