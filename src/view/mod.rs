//! Screens of the game
//!
//! Exactly one [`View`] is active at a time. Every frame the game drives it
//! through `listen` → `advance` → `prepare_draw` → `draw` → (`draw_debug`) →
//! `adjust`; `adjust` may name the next view to switch to.
//!
//! A view is a shared [`ViewBase`] (canvas size, debug toggle, debug overlay)
//! plus one [`Screen`] holding the per-screen state.

pub mod level;
pub mod load;
pub mod registry;
pub mod start;
pub mod title;

pub use level::LevelScreen;
pub use load::LoadScreen;
pub use registry::{ViewKind, ViewRegistry};
pub use start::StartScreen;
pub use title::TitleScreen;

use glam::Vec2;

use crate::error::GameError;
use crate::game::GameContext;
use crate::input::Input;
use crate::renderer::{DEBUG_FONT, Surface, TextAlign, colors};
use crate::resources::ResourceRepository;
use crate::sim::{Bounds, Session};
use crate::timing::Timing;

/// State every screen shares
#[derive(Debug, Clone, Default)]
pub struct ViewBase {
    pub size: Vec2,
    pub center: Vec2,
    /// Latch so one press of the debug chord toggles once
    debug_keys_down: bool,
}

impl ViewBase {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            size: bounds.size(),
            center: bounds.center(),
            debug_keys_down: false,
        }
    }

    pub fn listen(&mut self, input: &Input, session: &mut Session) {
        if input.debug_chord() {
            if !self.debug_keys_down {
                session.debug = !session.debug;
                self.debug_keys_down = true;
                log::info!("Debug is set to {}", session.debug);
            }
        } else {
            self.debug_keys_down = false;
        }
    }

    pub fn advance(&mut self, bounds: Bounds) {
        self.size = bounds.size();
        self.center = bounds.center();
    }

    /// Frame rate and a load bar shading from green to red, bottom right
    pub fn draw_debug(&self, surface: &mut dyn Surface, timing: &Timing) {
        let origin = self.size - Vec2::new(123.0, 17.0);
        surface.fill_text(
            &format!("{:.1}fps", timing.fps),
            origin,
            &format!("12px {}", DEBUG_FONT),
            TextAlign::Left,
            colors::TEXT,
        );
        surface.fill_rect(origin + Vec2::new(0.0, 3.0), Vec2::new(102.0, 10.0), colors::TEXT);

        let load = timing.load.clamp(0.0, 1.0);
        let green = 255 - (255.0 * load).round() as u8;
        let red = 255 - green;
        surface.fill_rect(
            origin + Vec2::new(1.0, 4.0),
            Vec2::new(100.0 * load as f32, 8.0),
            &format!("rgb({}, {}, 0)", red, green),
        );
    }
}

/// Per-screen state
#[derive(Debug, Clone)]
pub enum Screen {
    Load(LoadScreen),
    Start(StartScreen),
    Level(LevelScreen),
    Title(TitleScreen),
}

#[derive(Debug, Clone)]
pub struct View {
    pub base: ViewBase,
    pub screen: Screen,
}

impl View {
    /// Loading screen that hands over to `target` once assets are in
    pub fn loading(target: impl Into<String>, bounds: Bounds) -> Self {
        Self {
            base: ViewBase::new(bounds),
            screen: Screen::Load(LoadScreen::new(target)),
        }
    }

    /// Build a fresh view of the given kind
    pub fn init(
        kind: ViewKind,
        ctx: &mut GameContext,
        repo: &dyn ResourceRepository,
    ) -> Result<Self, GameError> {
        let screen = match kind {
            ViewKind::Start => Screen::Start(StartScreen::init(repo)?),
            ViewKind::Level => Screen::Level(LevelScreen::init(ctx, repo)?),
            ViewKind::Title => Screen::Title(TitleScreen::new()),
        };
        Ok(Self {
            base: ViewBase::new(ctx.bounds),
            screen,
        })
    }

    pub fn name(&self) -> &'static str {
        match &self.screen {
            Screen::Load(_) => "load",
            Screen::Start(_) => ViewKind::Start.name(),
            Screen::Level(_) => ViewKind::Level.name(),
            Screen::Title(_) => ViewKind::Title.name(),
        }
    }

    pub fn listen(&mut self, input: &Input, ctx: &mut GameContext) {
        self.base.listen(input, &mut ctx.session);
        match &mut self.screen {
            Screen::Load(_) => {}
            Screen::Start(start) => start.listen(input, &ctx.timing),
            Screen::Level(level) => level.listen(input),
            Screen::Title(title) => title.listen(input),
        }
    }

    pub fn advance(&mut self, ctx: &mut GameContext) {
        self.base.advance(ctx.bounds);
        if let Screen::Level(level) = &mut self.screen {
            level.advance(ctx.bounds);
        }
    }

    pub fn prepare_draw(&self, surface: &mut dyn Surface) {
        surface.clear(self.base.size.x, self.base.size.y);
    }

    pub fn draw(&self, surface: &mut dyn Surface, ctx: &GameContext) {
        let base = &self.base;
        match &self.screen {
            Screen::Load(load) => load.draw(base, surface),
            Screen::Start(start) => start.draw(base, surface),
            Screen::Level(level) => level.draw(surface, &ctx.session),
            Screen::Title(title) => title.draw(base, surface, &ctx.session),
        }
    }

    pub fn draw_debug(&self, surface: &mut dyn Surface, ctx: &GameContext) {
        self.base.draw_debug(surface, &ctx.timing);
        if let Screen::Level(level) = &self.screen {
            level.draw_debug(surface);
        }
    }

    /// Late update; returns the name of the view to switch to, if any
    pub fn adjust(
        &mut self,
        ctx: &mut GameContext,
        repo: &dyn ResourceRepository,
    ) -> Option<String> {
        match &mut self.screen {
            Screen::Load(load) => load.adjust(&ctx.timing, repo),
            Screen::Start(start) => start.adjust(),
            Screen::Level(level) => level.adjust(ctx),
            Screen::Title(title) => title.adjust(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::keys;
    use crate::renderer::{DrawCommand, RecordingSurface};
    use crate::settings::Settings;

    #[test]
    fn test_debug_chord_is_edge_triggered() {
        let mut base = ViewBase::new(Bounds::new(800.0, 600.0));
        let mut session = Session::from_settings(&Settings::default());
        let chord = Input::with_keys(&[keys::CTRL, keys::ALT, keys::D]);

        for _ in 0..5 {
            base.listen(&chord, &mut session);
        }
        assert!(session.debug);

        base.listen(&Input::new(), &mut session);
        base.listen(&chord, &mut session);
        assert!(!session.debug);
    }

    #[test]
    fn test_debug_overlay() {
        let base = ViewBase::new(Bounds::new(800.0, 600.0));
        let mut timing = Timing::new(0.0);
        timing.fps = 60.0;
        timing.load = 0.5;

        let mut surface = RecordingSurface::new();
        base.draw_debug(&mut surface, &timing);
        assert_eq!(surface.texts(), vec!["60.0fps"]);

        let bar = surface.commands.iter().find_map(|c| match c {
            DrawCommand::Rect { size, color, .. } if color.starts_with("rgb") => {
                Some((*size, color.clone()))
            }
            _ => None,
        });
        let (size, color) = bar.unwrap();
        assert_eq!(size, Vec2::new(50.0, 8.0));
        assert_eq!(color, "rgb(128, 127, 0)");
    }
}
