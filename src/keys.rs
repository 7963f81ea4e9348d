// src/keys.rs

//! Key events as delivered by the keyboard backend, and the three-way
//! classification the overlay modes care about.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Represents a keyboard modifier.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct Modifiers: u8 {
        const SHIFT = 1 << 0;
        const CONTROL = 1 << 1;
        const ALT = 1 << 2; // Also known as Option on macOS
        const SUPER = 1 << 3;
        const CAPS_LOCK = 1 << 4;
        const NUM_LOCK = 1 << 5;
    }
}

/// Represents a key symbol.
///
/// Only the keys the overlay reacts to get their own variant; everything
/// else the backend reports as `Char` (when printable) or `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum KeySymbol {
    Char(char),

    Escape,
    Backspace,
    Enter,
    Tab,

    Left,
    Right,
    Up,
    Down,

    Shift,
    Control,
    Alt,
    Super,

    #[default]
    Unknown,
}

impl KeySymbol {
    /// Returns true if the key symbol represents a modifier key.
    pub fn is_modifier(&self) -> bool {
        matches!(
            self,
            KeySymbol::Shift | KeySymbol::Control | KeySymbol::Alt | KeySymbol::Super
        )
    }
}

/// One key press: the platform symbol plus whatever text it committed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KeyEvent {
    pub symbol: KeySymbol,
    #[serde(default)]
    pub modifiers: Modifiers,
    #[serde(default)]
    pub text: Option<String>,
}

/// What a key means to a mode, decided once at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction<'a> {
    /// Abandon the whole overlay.
    Cancel,
    /// Go back one step.
    Undo,
    /// Committed text, to be matched against the label alphabet.
    Text(&'a str),
    /// Anything else.
    Ignore,
}

impl KeyEvent {
    pub fn new(symbol: KeySymbol, text: Option<String>) -> Self {
        Self {
            symbol,
            modifiers: Modifiers::empty(),
            text,
        }
    }

    /// A printable key that commits its own character.
    pub fn from_char(c: char) -> Self {
        Self::new(KeySymbol::Char(c), Some(c.to_string()))
    }

    pub fn named(symbol: KeySymbol) -> Self {
        Self::new(symbol, None)
    }

    pub fn classify(&self) -> KeyAction<'_> {
        match self.symbol {
            KeySymbol::Escape => KeyAction::Cancel,
            KeySymbol::Backspace => KeyAction::Undo,
            _ => match self.text.as_deref() {
                Some(text) if !text.is_empty() => KeyAction::Text(text),
                _ => KeyAction::Ignore,
            },
        }
    }

    /// Reads a textual key token as written by scripted drivers.
    ///
    /// Named keys use their keysym names (`Escape`, `BackSpace`, `Return`,
    /// `Tab`, `Left`, ...); a single character is a printable key; any other
    /// string is committed text with an unknown symbol.
    pub fn parse(token: &str) -> Option<Self> {
        let symbol = match token {
            "" => return None,
            "Escape" | "Esc" => KeySymbol::Escape,
            "BackSpace" | "Backspace" => KeySymbol::Backspace,
            "Return" | "Enter" => KeySymbol::Enter,
            "Tab" => KeySymbol::Tab,
            "Left" => KeySymbol::Left,
            "Right" => KeySymbol::Right,
            "Up" => KeySymbol::Up,
            "Down" => KeySymbol::Down,
            _ => {
                let mut chars = token.chars();
                return Some(match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::from_char(c),
                    _ => Self::new(KeySymbol::Unknown, Some(token.to_string())),
                });
            }
        };
        Some(Self::named(symbol))
    }
}
