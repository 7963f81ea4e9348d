// src/geometry.rs

//! Pixel-space rectangles and the clamping applied to the configured outer area.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in output pixels.
///
/// `x`/`y` may be negative only on values that have not been clamped yet
/// (e.g. a raw area override from the config).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Area in pixels, zero for degenerate rectangles.
    pub fn area(&self) -> i64 {
        if self.is_empty() {
            0
        } else {
            self.w as i64 * self.h as i64
        }
    }

    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Shifts the rectangle by `(dx, dy)`.
    pub fn translate(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    /// True if `other` lies entirely within `self`.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// Resolves the outer area the overlay works on.
///
/// Without an override the whole output is used. An override is cropped to
/// the output: a negative origin eats into the size and snaps to zero, and
/// the far edges are cut at the output bounds. The result may be empty;
/// rejecting that is up to the caller.
pub fn clamp_to_output(area: Option<Rect>, output_width: i32, output_height: i32) -> Rect {
    let Some(mut area) = area else {
        return Rect::new(0, 0, output_width, output_height);
    };

    if area.x < 0 {
        area.w = area.w.saturating_add(area.x);
        area.x = 0;
    }
    if area.y < 0 {
        area.h = area.h.saturating_add(area.y);
        area.y = 0;
    }
    if area.x.saturating_add(area.w) > output_width {
        area.w = output_width.saturating_sub(area.x);
    }
    if area.y.saturating_add(area.h) > output_height {
        area.h = output_height.saturating_sub(area.y);
    }

    log::trace!(
        "Clamped outer area to {:?} within {}x{}",
        area,
        output_width,
        output_height
    );
    area
}
