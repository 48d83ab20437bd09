//! In-memory surface that records what a frame drew

use glam::Vec2;

use super::{Surface, TextAlign};
use crate::resources::Sprite;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear {
        width: f32,
        height: f32,
    },
    Sprite {
        key: String,
        center: Vec2,
        angle: f32,
    },
    Text {
        text: String,
        pos: Vec2,
        font: String,
        align: TextAlign,
        color: String,
    },
    Line {
        from: Vec2,
        to: Vec2,
    },
    Circle {
        center: Vec2,
        radius: f32,
    },
    Rect {
        origin: Vec2,
        size: Vec2,
        color: String,
    },
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop everything recorded so far
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    /// All text drawn, in order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Keys of all sprites drawn, in order
    pub fn sprite_keys(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Sprite { key, .. } => Some(key.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn circles(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.commands.push(DrawCommand::Clear { width, height });
    }

    fn draw_sprite(&mut self, sprite: &Sprite, center: Vec2, angle: f32) {
        self.commands.push(DrawCommand::Sprite {
            key: sprite.key.clone(),
            center,
            angle,
        });
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, font: &str, align: TextAlign, color: &str) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            pos,
            font: font.to_string(),
            align,
            color: color.to_string(),
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, _color: &str) {
        self.commands.push(DrawCommand::Line { from, to });
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, _color: &str) {
        self.commands.push(DrawCommand::Circle { center, radius });
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: &str) {
        self.commands.push(DrawCommand::Rect {
            origin,
            size,
            color: color.to_string(),
        });
    }
}
