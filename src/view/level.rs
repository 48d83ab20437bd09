//! Playing screen: wires the level simulation to input, score and the HUD

use glam::Vec2;

use crate::consts::{SCORE_LABEL_INSET, SCORE_PER_ASTEROID};
use crate::error::GameError;
use crate::game::GameContext;
use crate::input::Input;
use crate::renderer::{Surface, TextAlign, colors, write_text};
use crate::resources::{ResourceRepository, Sprite, sprites};
use crate::sim::{AsteroidSprites, Bounds, Level, Session, Ship, TickInput};

use super::ViewKind;

#[derive(Debug, Clone)]
pub struct LevelScreen {
    pub level: Level,
    life: Sprite,
    /// Right edge of the score label
    score_x: f32,
}

impl LevelScreen {
    /// Ship at rest in the middle, `session.level` big asteroids around it
    pub fn init(ctx: &mut GameContext, repo: &dyn ResourceRepository) -> Result<Self, GameError> {
        let life = repo.image(sprites::LIFE)?;
        let ship = Ship::new(
            repo.image(sprites::SHIP)?,
            repo.image(sprites::LASER)?,
            ctx.bounds.center(),
            Vec2::ZERO,
            0.0,
            0.0,
            ctx.settings.ship_offscreen,
        );

        let mut level = Level::new(ship, AsteroidSprites::load(repo)?);
        level.populate(ctx.session.level, ctx.bounds, &mut ctx.rng);
        log::info!(
            "Level started with {} asteroids, {} lives",
            level.asteroids.len(),
            ctx.session.lives
        );

        Ok(Self {
            level,
            life,
            score_x: ctx.bounds.width - SCORE_LABEL_INSET,
        })
    }

    pub fn listen(&mut self, input: &Input) {
        self.level.apply_input(TickInput::from_input(input));
    }

    pub fn advance(&mut self, bounds: Bounds) {
        self.score_x = bounds.width - SCORE_LABEL_INSET;
        self.level.advance(bounds);
    }

    /// Score destroyed asteroids; a dead ship ends the game
    pub fn adjust(&mut self, ctx: &mut GameContext) -> Option<String> {
        let resolution = self.level.resolve(&mut ctx.rng);
        ctx.session.score += resolution.destroyed as u64 * SCORE_PER_ASTEROID;

        if resolution.ship_dead {
            log::info!("Ship lost with a score of {}", ctx.session.score);
            ctx.session.record_score();
            return Some(ViewKind::Title.name().to_string());
        }
        None
    }

    pub fn draw(&self, surface: &mut dyn Surface, session: &Session) {
        self.level.draw(surface);

        for i in 0..session.lives {
            let pos = Vec2::new(30.0 + 50.0 * i as f32, 30.0);
            surface.draw_sprite(&self.life, pos, 0.0);
        }

        write_text(
            surface,
            &format!("Your score: {}", session.score),
            20.0,
            Vec2::new(self.score_x, 30.0),
            TextAlign::Right,
            colors::TEXT,
        );
    }

    pub fn draw_debug(&self, surface: &mut dyn Surface) {
        self.level.draw_debug(surface);
    }
}
