// src/error.rs

//! Errors surfaced when a tile session cannot be entered.
//!
//! All of these are detected at construction time; once a session exists,
//! input handling never fails (unmapped keys are simply not consumed).

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TileError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TileError {
    #[error("area ({width}x{height}) is too small")]
    Geometry { width: i32, height: i32 },
    #[error("label alphabet needs at least 2 symbols, got {len}")]
    AlphabetTooSmall { len: usize },
    #[error("label alphabet contains duplicate symbol `{0}`")]
    DuplicateSymbol(String),
    #[error("label alphabet contains an empty symbol")]
    EmptySymbol,
    #[error("invalid configuration: {0}")]
    Config(String),
}
