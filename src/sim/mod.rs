//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One call per frame, no wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (insertion order of each collection)
//! - No rendering or platform dependencies beyond the `Surface` trait

pub mod asteroid;
pub mod collision;
pub mod item;
pub mod level;
pub mod session;
pub mod ship;
pub mod shot;

pub use asteroid::{Asteroid, AsteroidSprites, AsteroidTier};
pub use collision::point_in_circle;
pub use item::{Bounds, Entity, GameItem, ItemState, OffscreenBehaviour};
pub use level::{Level, Resolution, TickInput};
pub use session::Session;
pub use ship::Ship;
pub use shot::Shot;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// RNG used by the simulation
pub type GameRng = Pcg32;

pub fn seeded_rng(seed: u64) -> GameRng {
    Pcg32::seed_from_u64(seed)
}

/// Uniform number in `[min, max)`; returns `min` for an empty range
#[inline]
pub fn random_number<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    if max <= min {
        return min;
    }
    min + rng.random::<f32>() * (max - min)
}
