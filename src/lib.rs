//! Asteroids Canvas - an Asteroids-style arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (items, ship, shots, asteroids, collisions)
//! - `view`: Screens (loading, start, level, title) and the view registry
//! - `game`: Frame loop orchestration and the shared game context
//! - `renderer`: Drawing surface abstraction (canvas 2D in the browser)
//! - `platform`: Browser glue (image loading, input listeners, clock)

pub mod error;
pub mod game;
pub mod highscores;
pub mod input;
pub mod platform;
pub mod renderer;
pub mod resources;
pub mod settings;
pub mod sim;
pub mod timing;
pub mod vector;
pub mod view;

pub use error::GameError;
pub use game::{Game, GameContext};
pub use highscores::HighScores;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Angular velocity change per held turn key (radians/tick)
    pub const ANGULAR_SPEED_INCREMENT: f32 = 0.0004;
    /// Ship angular velocity limit (radians/tick)
    pub const ANGULAR_SPEED_MAX: f32 = 0.02;
    /// Most shots a ship may have in flight
    pub const MAX_SHOTS: usize = 10;
    pub const FWD_THRUST_INCREMENT: f32 = 0.104;
    pub const RETRO_THRUST_INCREMENT: f32 = 0.031;
    /// Cooldown ticks after a shot while the trigger stays held
    pub const FRAMES_BETWEEN_SHOTS: u32 = 5;
    /// Shot launch speed (pixels/tick)
    pub const SHOT_SPEED: f32 = 10.0;
    /// Distance from the ship centre to where shots spawn
    pub const MUZZLE_OFFSET: f32 = 50.0;

    /// Asteroid speed range per axis (pixels/tick)
    pub const ASTEROID_MAX_SPEED: f32 = 1.3;
    /// Smallest outward push given to a fragment
    pub const FRAGMENT_MIN_NUDGE: f32 = 0.1;
    /// Share of the shot's speed passed on to fragments (divided by the tier)
    pub const FRAGMENT_SHOT_TRANSFER: f32 = 0.1;
    /// Asteroid spin = scale * uniform(-100, 100)
    pub const ASTEROID_SPIN_SCALE: f32 = 0.0005;
    pub const SCORE_PER_ASTEROID: u64 = 10;

    /// The loading screen stays up at least this long (ms)
    pub const LOAD_MIN_VIEW_TIME_MS: f64 = 1000.0;
    /// Score label distance from the right edge
    pub const SCORE_LABEL_INSET: f32 = 100.0;
}
