//! Game over screen with the final score and the leaderboard

use glam::Vec2;

use crate::input::{Input, keys};
use crate::renderer::{Surface, TextAlign, colors, write_text};
use crate::sim::Session;

use super::{ViewBase, ViewKind};

/// Vertical distance between leaderboard rows
const ROW_HEIGHT: f32 = 40.0;

#[derive(Debug, Clone, Default)]
pub struct TitleScreen {
    restart_requested: bool,
}

impl TitleScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn listen(&mut self, input: &Input) {
        if input.is_key_down(keys::SPACE) {
            self.restart_requested = true;
        }
    }

    pub fn adjust(&self) -> Option<String> {
        self.restart_requested
            .then(|| ViewKind::Start.name().to_string())
    }

    pub fn draw(&self, base: &ViewBase, surface: &mut dyn Surface, session: &Session) {
        let c = base.center;
        write_text(
            surface,
            &format!("{} score is {}", session.player, session.score),
            80.0,
            c + Vec2::new(0.0, -100.0),
            TextAlign::Center,
            colors::TEXT,
        );
        write_text(surface, "HIGHSCORES", 40.0, c, TextAlign::Center, colors::TEXT);

        for (i, entry) in session.highscores.entries.iter().enumerate() {
            let row = Vec2::new(c.x, c.y + ROW_HEIGHT * (i + 1) as f32);
            write_text(
                surface,
                &format!("{}: {} - {}", i + 1, entry.player_name, entry.score),
                20.0,
                row,
                TextAlign::Center,
                colors::TEXT,
            );
        }
    }
}
