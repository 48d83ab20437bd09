//! Asteroids entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use asteroids_canvas::input::Input;
    use asteroids_canvas::platform::{PerformanceClock, WebRepository, install_input_listeners};
    use asteroids_canvas::renderer::CanvasSurface;
    use asteroids_canvas::sim::Bounds;
    use asteroids_canvas::{Game, GameError, Settings};

    /// Everything the animation loop touches
    struct App {
        game: Game,
        input: Rc<RefCell<Input>>,
        surface: CanvasSurface,
        canvas: HtmlCanvasElement,
    }

    impl App {
        /// Follow the window size, like the page layout does
        fn fit_canvas(&mut self) {
            let size = self.input.borrow().window_size;
            if size.x as u32 != self.canvas.width() || size.y as u32 != self.canvas.height() {
                self.canvas.set_width(size.x as u32);
                self.canvas.set_height(size.y as u32);
                self.game.resize(Bounds::new(size.x, size.y));
            }
        }

        fn frame(&mut self) {
            self.fit_canvas();
            let input = self.input.borrow().clone();
            self.game.frame(&input, &mut self.surface);
        }
    }

    pub fn run() -> Result<(), GameError> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Asteroids starting...");

        let window = web_sys::window().ok_or_else(|| GameError::Canvas("no window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| GameError::Canvas("no document".into()))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or_else(|| GameError::Canvas("no canvas".into()))?
            .dyn_into()
            .map_err(|_| GameError::Canvas("not a canvas".into()))?;

        let mut settings = Settings::load();
        if settings.seed.is_none() {
            settings.seed = Some(js_sys::Date::now() as u64);
        }
        let repo = WebRepository::start(&settings.resource_config())?;

        let input = Rc::new(RefCell::new(Input::new()));
        install_input_listeners(input.clone())?;

        // Canvas covers the whole window
        let size = input.borrow().window_size;
        canvas.set_width(size.x as u32);
        canvas.set_height(size.y as u32);

        let surface = CanvasSurface::new(&canvas, repo.images())?;
        let game = Game::new(
            settings,
            Bounds::new(size.x, size.y),
            Box::new(repo),
            Box::new(PerformanceClock::new()?),
        );

        let app = Rc::new(RefCell::new(App {
            game,
            input,
            surface,
            canvas,
        }));

        // Start game loop
        request_animation_frame(app);

        log::info!("Asteroids running!");
        Ok(())
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>) {
        app.borrow_mut().frame();
        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_game::run() {
        log::error!("Failed to start: {}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Asteroids (native) starting...");
    log::info!("Native mode runs a scripted headless session - run with `trunk serve` for web version");

    let settings = match std::env::args().nth(1) {
        Some(path) => match load_settings(&path) {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("Ignoring settings file {}: {}", path, e);
                asteroids_canvas::Settings::default()
            }
        },
        None => asteroids_canvas::Settings::load(),
    };

    headless::run(settings);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn load_settings(path: &str) -> Result<asteroids_canvas::Settings, Box<dyn std::error::Error>> {
    let json = std::fs::read_to_string(path)?;
    Ok(asteroids_canvas::Settings::from_json(&json)?)
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::rc::Rc;

    use asteroids_canvas::input::{Input, keys};
    use asteroids_canvas::renderer::RecordingSurface;
    use asteroids_canvas::resources::SpriteSheet;
    use asteroids_canvas::sim::Bounds;
    use asteroids_canvas::timing::ManualClock;
    use asteroids_canvas::view::Screen;
    use asteroids_canvas::{Game, Settings};

    const FRAME_MS: f64 = 1000.0 / 60.0;
    const FRAMES: u32 = 900;

    /// Wait for loading, start a level, then turn and fire until time runs out
    pub fn run(settings: Settings) {
        let clock = Rc::new(ManualClock::new(0.0));
        let mut game = Game::new(
            settings,
            Bounds::new(1280.0, 720.0),
            Box::new(SpriteSheet::space_shooter()),
            Box::new(clock.clone()),
        );
        let mut surface = RecordingSurface::new();
        let mut view = game.current_view().name();

        for _ in 0..FRAMES {
            let input = match game.current_view().name() {
                "start" => Input::with_keys(&[keys::S]),
                "level" => Input::with_keys(&[keys::SPACE, keys::LEFT]),
                _ => Input::new(),
            };

            clock.advance(FRAME_MS);
            surface.reset();
            game.frame(&input, &mut surface);

            let now = game.current_view().name();
            if now != view {
                log::info!("Frame {}: {} -> {}", game.context().timing.game_frames, view, now);
                view = now;
            }
        }

        let ctx = game.context();
        let asteroids = match &game.current_view().screen {
            Screen::Level(level) => level.level.asteroids.len(),
            _ => 0,
        };
        log::info!(
            "Finished in view '{}' after {} frames: score {}, {} asteroids left, {} draw commands last frame",
            view,
            ctx.timing.game_frames,
            ctx.session.score,
            asteroids,
            surface.commands.len()
        );
        println!("{} score is {}", ctx.session.player, ctx.session.score);
    }
}
