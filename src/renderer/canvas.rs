//! Canvas 2D surface (wasm32 only)

use std::f64::consts::TAU;

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{Surface, TextAlign};
use crate::error::GameError;
use crate::platform::SharedImages;
use crate::resources::Sprite;

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    images: SharedImages,
}

impl CanvasSurface {
    pub fn new(canvas: &HtmlCanvasElement, images: SharedImages) -> Result<Self, GameError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| GameError::Canvas(format!("{:?}", e)))?
            .ok_or_else(|| GameError::Canvas("no 2d context".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| GameError::Canvas("not a 2d context".to_string()))?;
        Ok(Self { ctx, images })
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn draw_sprite(&mut self, sprite: &Sprite, center: Vec2, angle: f32) {
        let images = self.images.borrow();
        let Some(image) = images.get(&sprite.key) else {
            return;
        };
        self.ctx.save();
        let _ = self.ctx.translate(center.x as f64, center.y as f64);
        let _ = self.ctx.rotate(angle as f64);
        let _ = self.ctx.draw_image_with_html_image_element(
            image,
            -sprite.width as f64 / 2.0,
            -sprite.height as f64 / 2.0,
        );
        self.ctx.restore();
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, font: &str, align: TextAlign, color: &str) {
        self.ctx.set_font(font);
        self.ctx.set_fill_style_str(color);
        self.ctx.set_text_align(align.as_str());
        let _ = self.ctx.fill_text(text, pos.x as f64, pos.y as f64);
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: &str) {
        self.ctx.set_stroke_style_str(color);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: &str) {
        self.ctx.set_stroke_style_str(color);
        self.ctx.begin_path();
        let _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
        self.ctx.stroke();
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx
            .fill_rect(origin.x as f64, origin.y as f64, size.x as f64, size.y as f64);
    }
}
