// src/renderer.rs

//! Turns mode state into backend draw commands.
//!
//! The renderer decides what goes on screen and in which colors; painting,
//! text shaping and label centering are left to the drawing backend.

use serde::Serialize;

use crate::color::Color;
use crate::config::TileModeConfig;
use crate::geometry::Rect;
use crate::tile::TileView;

/// Width of cell and area outlines, in pixels.
const OUTLINE_WIDTH: i32 = 1;

/// A single drawing instruction, in output coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RenderCommand {
    /// Replaces the whole surface with `color`.
    ClearAll { color: Color },
    FillRect { rect: Rect, color: Color },
    /// Draws an outline just inside `rect`.
    StrokeRect {
        rect: Rect,
        color: Color,
        line_width: i32,
    },
    /// Font used by subsequent labels.
    SelectFont { family: String, size: i32 },
    /// A label centered in `cell`, its typed part drawn in `typed_color`
    /// followed by the remainder in `rest_color`.
    DrawLabel {
        cell: Rect,
        typed: String,
        rest: String,
        typed_color: Color,
        rest_color: Color,
    },
    /// Presents the composed frame.
    PresentFrame,
}

#[derive(Debug, Clone)]
pub struct Renderer {
    config: TileModeConfig,
}

impl Renderer {
    pub fn new(config: &TileModeConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    pub fn render_tile(&self, view: &TileView<'_>) -> Vec<RenderCommand> {
        let cfg = &self.config;
        let mut commands = vec![
            RenderCommand::SelectFont {
                family: cfg.label_font_family.clone(),
                size: view.grid().cell_height / 2,
            },
            RenderCommand::ClearAll {
                color: cfg.unselectable_bg_color,
            },
            RenderCommand::StrokeRect {
                rect: view.area(),
                color: cfg.unselectable_bg_color,
                line_width: OUTLINE_WIDTH,
            },
        ];

        let mut selectable = 0usize;
        for cell in view.cells() {
            let Some(label) = cell.label else {
                continue;
            };
            selectable += 1;
            commands.push(RenderCommand::FillRect {
                rect: cell.rect,
                color: cfg.selectable_bg_color,
            });
            commands.push(RenderCommand::StrokeRect {
                rect: cell.rect,
                color: cfg.selectable_border_color,
                line_width: OUTLINE_WIDTH,
            });
            commands.push(RenderCommand::DrawLabel {
                cell: cell.rect,
                typed: label.typed,
                rest: label.rest,
                typed_color: cfg.label_select_color,
                rest_color: cfg.label_color,
            });
        }
        commands.push(RenderCommand::PresentFrame);

        log::trace!(
            "Rendered tile frame: {} selectable cells, {} commands",
            selectable,
            commands.len()
        );
        commands
    }

    /// Highlights the area handed to the refinement stage.
    pub fn render_bisect(&self, area: Rect) -> Vec<RenderCommand> {
        let cfg = &self.config;
        vec![
            RenderCommand::ClearAll {
                color: cfg.unselectable_bg_color,
            },
            RenderCommand::FillRect {
                rect: area,
                color: cfg.selectable_bg_color,
            },
            RenderCommand::StrokeRect {
                rect: area,
                color: cfg.selectable_border_color,
                line_width: OUTLINE_WIDTH,
            },
            RenderCommand::PresentFrame,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::KeyEvent;
    use crate::tile::TileController;
    use test_log::test;

    fn labels(commands: &[RenderCommand]) -> Vec<(String, String)> {
        commands
            .iter()
            .filter_map(|c| match c {
                RenderCommand::DrawLabel { typed, rest, .. } => Some((typed.clone(), rest.clone())),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_fresh_tile_frame() {
        let config = TileModeConfig::default();
        let renderer = Renderer::new(&config);
        let tile = TileController::enter(Rect::new(0, 0, 1000, 500), &config).unwrap();

        let commands = renderer.render_tile(&tile.view());
        assert_eq!(
            commands[0],
            RenderCommand::SelectFont {
                family: "sans-serif".into(),
                size: 12
            }
        );
        assert_eq!(
            commands[1],
            RenderCommand::ClearAll {
                color: config.unselectable_bg_color
            }
        );
        assert_eq!(commands.last(), Some(&RenderCommand::PresentFrame));

        let labels = labels(&commands);
        assert_eq!(labels.len(), 400);
        assert_eq!(labels[0], (String::new(), "aa".to_string()));
    }

    #[test]
    fn test_typed_symbol_narrows_frame() {
        let config = TileModeConfig::default();
        let renderer = Renderer::new(&config);
        let mut tile = TileController::enter(Rect::new(0, 0, 1000, 500), &config).unwrap();
        tile.handle_key(&KeyEvent::from_char('c'));

        let labels = labels(&renderer.render_tile(&tile.view()));
        assert_eq!(labels.len(), 26);
        assert!(labels.iter().all(|(typed, rest)| typed == "c" && rest.len() == 1));
    }

    #[test]
    fn test_bisect_frame_highlights_area() {
        let renderer = Renderer::new(&TileModeConfig::default());
        let area = Rect::new(50, 25, 50, 25);
        let commands = renderer.render_bisect(area);
        assert!(commands
            .iter()
            .any(|c| matches!(c, RenderCommand::FillRect { rect, .. } if *rect == area)));
    }
}
