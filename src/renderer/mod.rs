//! Drawing surface abstraction
//!
//! Views draw through [`Surface`], a handful of canvas-2D style primitives.
//! The browser implementation lives in `canvas`; [`RecordingSurface`] keeps
//! the commands in memory for native runs and tests.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod recording;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use recording::{DrawCommand, RecordingSurface};

use glam::Vec2;

use crate::resources::Sprite;

/// Font used for all game text
pub const GAME_FONT: &str = "Minecraft";
/// Font used for debug overlays
pub const DEBUG_FONT: &str = "courier";

/// Colors for game elements
pub mod colors {
    pub const TEXT: &str = "white";
    pub const BUTTON_TEXT: &str = "black";
    pub const DEBUG: &str = "#ffffb3";
}

/// Horizontal text anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

/// Local rendering target for one frame
pub trait Surface {
    /// Wipe the visible area
    fn clear(&mut self, width: f32, height: f32);

    /// Blit a sprite centred on `center`, rotated by `angle` radians
    fn draw_sprite(&mut self, sprite: &Sprite, center: Vec2, angle: f32);

    /// Fill text anchored at `pos`; `font` is a CSS font string
    fn fill_text(&mut self, text: &str, pos: Vec2, font: &str, align: TextAlign, color: &str);

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: &str);

    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: &str);

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: &str);
}

/// Write game text in the game font
pub fn write_text(
    surface: &mut dyn Surface,
    text: &str,
    font_size: f32,
    pos: Vec2,
    align: TextAlign,
    color: &str,
) {
    let font = format!("{}px {}", font_size, GAME_FONT);
    surface.fill_text(text, pos, &font, align, color);
}
