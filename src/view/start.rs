//! Start screen: title, prompt and a slowly turning asteroid

use std::f32::consts::PI;

use glam::Vec2;

use crate::error::GameError;
use crate::input::{Input, keys};
use crate::renderer::{Surface, TextAlign, colors, write_text};
use crate::resources::{ResourceRepository, Sprite, sprites};
use crate::timing::Timing;

use super::{ViewBase, ViewKind};

#[derive(Debug, Clone)]
pub struct StartScreen {
    button: Sprite,
    asteroid: Sprite,
    asteroid_angle: f32,
    start_requested: bool,
}

impl StartScreen {
    pub fn init(repo: &dyn ResourceRepository) -> Result<Self, GameError> {
        Ok(Self {
            button: repo.image(sprites::BUTTON)?,
            asteroid: repo.image(sprites::BIG_ASTEROIDS[0])?,
            asteroid_angle: 0.0,
            start_requested: false,
        })
    }

    pub fn listen(&mut self, input: &Input, timing: &Timing) {
        // one degree per frame
        self.asteroid_angle = timing.view_frames as f32 * PI / 180.0;
        if input.is_key_down(keys::S) {
            self.start_requested = true;
        }
    }

    pub fn adjust(&self) -> Option<String> {
        self.start_requested
            .then(|| ViewKind::Level.name().to_string())
    }

    pub fn draw(&self, base: &ViewBase, surface: &mut dyn Surface) {
        let c = base.center;
        write_text(
            surface,
            "Asteroids",
            140.0,
            Vec2::new(c.x, 150.0),
            TextAlign::Center,
            colors::TEXT,
        );
        write_text(
            surface,
            "PRESS PLAY OR HIT 'S' TO START",
            40.0,
            c + Vec2::new(0.0, -135.0),
            TextAlign::Center,
            colors::TEXT,
        );
        surface.draw_sprite(&self.button, c + Vec2::new(0.0, 220.0), 0.0);
        write_text(
            surface,
            "Play",
            20.0,
            c + Vec2::new(0.0, 229.0),
            TextAlign::Center,
            colors::BUTTON_TEXT,
        );
        surface.draw_sprite(&self.asteroid, c + Vec2::new(0.0, 60.0), self.asteroid_angle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, RecordingSurface};
    use crate::resources::SpriteSheet;
    use crate::sim::Bounds;

    #[test]
    fn test_s_starts_level() {
        let mut screen = StartScreen::init(&SpriteSheet::space_shooter()).unwrap();
        let timing = Timing::new(0.0);

        screen.listen(&Input::new(), &timing);
        assert_eq!(screen.adjust(), None);

        screen.listen(&Input::with_keys(&[keys::S]), &timing);
        assert_eq!(screen.adjust().as_deref(), Some("level"));
    }

    #[test]
    fn test_asteroid_turns_with_view_frames() {
        let mut screen = StartScreen::init(&SpriteSheet::space_shooter()).unwrap();
        let mut timing = Timing::new(0.0);
        for i in 1..=90 {
            timing.on_frame_start(i as f64 * 16.0);
        }
        screen.listen(&Input::new(), &timing);

        let mut surface = RecordingSurface::new();
        screen.draw(&ViewBase::new(Bounds::new(800.0, 600.0)), &mut surface);
        let angle = surface.commands.iter().find_map(|c| match c {
            DrawCommand::Sprite { key, angle, .. } if key == sprites::BIG_ASTEROIDS[0] => {
                Some(*angle)
            }
            _ => None,
        });
        assert!((angle.unwrap() - PI / 2.0).abs() < 1e-5);
        assert!(surface.texts().contains(&"PRESS PLAY OR HIT 'S' TO START"));
    }

    #[test]
    fn test_missing_button_fails_init() {
        assert!(StartScreen::init(&SpriteSheet::new()).is_err());
    }
}
