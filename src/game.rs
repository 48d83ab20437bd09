//! Frame loop orchestration
//!
//! [`Game`] owns everything that lives longer than a view: the shared
//! [`GameContext`], the image repository, the clock and the view registry.
//! The host calls [`Game::frame`] once per animation tick.

use crate::error::GameError;
use crate::input::Input;
use crate::renderer::Surface;
use crate::resources::ResourceRepository;
use crate::settings::Settings;
use crate::sim::{Bounds, GameRng, Session, seeded_rng};
use crate::timing::{Clock, Timing};
use crate::view::{View, ViewRegistry};

/// State shared by every view
#[derive(Debug)]
pub struct GameContext {
    pub settings: Settings,
    pub session: Session,
    pub timing: Timing,
    /// Current canvas size
    pub bounds: Bounds,
    pub rng: GameRng,
}

pub struct Game {
    ctx: GameContext,
    repo: Box<dyn ResourceRepository>,
    clock: Box<dyn Clock>,
    registry: ViewRegistry,
    current: View,
}

impl Game {
    pub fn new(
        settings: Settings,
        bounds: Bounds,
        repo: Box<dyn ResourceRepository>,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self::with_registry(settings, bounds, repo, clock, ViewRegistry::standard())
    }

    /// Start on a loading screen that hands over to the first registered view
    pub fn with_registry(
        settings: Settings,
        bounds: Bounds,
        repo: Box<dyn ResourceRepository>,
        clock: Box<dyn Clock>,
        registry: ViewRegistry,
    ) -> Self {
        let now = clock.now();
        let seed = settings.seed.unwrap_or_else(|| now.to_bits());
        log::info!("Game initialized with seed: {}", seed);

        let target = registry.first().unwrap_or_default().to_string();
        let ctx = GameContext {
            session: Session::from_settings(&settings),
            settings,
            timing: Timing::new(now),
            bounds,
            rng: seeded_rng(seed),
        };

        Self {
            ctx,
            repo,
            clock,
            registry,
            current: View::loading(target, bounds),
        }
    }

    pub fn context(&self) -> &GameContext {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut GameContext {
        &mut self.ctx
    }

    pub fn current_view(&self) -> &View {
        &self.current
    }

    /// Canvas size changed
    pub fn resize(&mut self, bounds: Bounds) {
        self.ctx.bounds = bounds;
    }

    /// Run one frame: listen, move, draw, then apply any view switch.
    /// A failed switch is logged and the current view keeps running.
    pub fn frame(&mut self, input: &Input, surface: &mut dyn Surface) {
        self.ctx.timing.on_frame_start(self.clock.now());

        self.current.listen(input, &mut self.ctx);
        self.current.advance(&mut self.ctx);
        self.current.prepare_draw(surface);
        self.current.draw(surface, &self.ctx);
        if self.ctx.session.debug {
            self.current.draw_debug(surface, &self.ctx);
        }

        if let Some(next) = self.current.adjust(&mut self.ctx, self.repo.as_ref()) {
            if let Err(e) = self.switch_view_to(&next) {
                log::error!("Failed to switch view: {}", e);
            }
        }

        self.ctx.timing.on_frame_end(self.clock.now());
    }

    /// Replace the current view with a fresh one; on error the current view
    /// keeps running
    pub fn switch_view_to(&mut self, name: &str) -> Result<(), GameError> {
        let kind = self.registry.lookup(name)?;
        let view = View::init(kind, &mut self.ctx, self.repo.as_ref())?;
        log::info!("Setting view to {}", name);
        self.current = view;
        self.ctx.timing.on_view_switched(self.clock.now());
        Ok(())
    }
}
