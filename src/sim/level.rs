//! One level of play: the ship, its shots and the asteroid field
//!
//! Each tick runs `apply_input` → `advance` → `resolve`. The level never
//! touches the session itself; `resolve` reports what happened and the view
//! turns that into score and transitions.

use rand::Rng;

use super::asteroid::{Asteroid, AsteroidSprites, AsteroidTier};
use super::item::{Bounds, Entity};
use super::ship::Ship;
use crate::input::{Input, keys};
use crate::renderer::Surface;

/// Controls sampled for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub turn_left: bool,
    pub turn_right: bool,
    pub thrust: bool,
    pub retro_boost: bool,
    pub fire: bool,
}

impl TickInput {
    pub fn from_input(input: &Input) -> Self {
        Self {
            turn_left: input.is_key_down(keys::LEFT),
            turn_right: input.is_key_down(keys::RIGHT),
            thrust: input.is_key_down(keys::UP),
            retro_boost: input.is_key_down(keys::DOWN),
            fire: input.is_key_down(keys::SPACE),
        }
    }
}

/// Outcome of collision resolution for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Asteroids removed from the field this tick
    pub destroyed: u32,
    pub ship_dead: bool,
}

#[derive(Debug, Clone)]
pub struct Level {
    pub ship: Ship,
    pub asteroids: Vec<Asteroid>,
    sprites: AsteroidSprites,
}

impl Level {
    pub fn new(ship: Ship, sprites: AsteroidSprites) -> Self {
        Self {
            ship,
            asteroids: Vec::new(),
            sprites,
        }
    }

    /// Scatter `count` big asteroids over the field
    pub fn populate<R: Rng + ?Sized>(&mut self, count: u32, bounds: Bounds, rng: &mut R) {
        for _ in 0..count {
            let asteroid = Asteroid::build_random(AsteroidTier::Big, &self.sprites, bounds, rng);
            self.asteroids.push(asteroid);
        }
    }

    pub fn apply_input(&mut self, input: TickInput) {
        if input.turn_left {
            self.ship.decrease_angular_speed();
        }
        if input.turn_right {
            self.ship.increase_angular_speed();
        }
        if input.thrust {
            self.ship.thrust();
        }
        if input.retro_boost {
            self.ship.retro_boost();
        }
        if input.fire {
            self.ship.shoot();
        } else {
            self.ship.stop_shooting();
        }
    }

    /// Move every asteroid, then the ship and its shots
    pub fn advance(&mut self, bounds: Bounds) {
        for asteroid in &mut self.asteroids {
            asteroid.advance(bounds);
        }
        self.ship.advance(bounds);
    }

    /// Resolve shot hits, then drop dead shots and asteroids.
    ///
    /// Shots are checked in fire order against the asteroid list as it grows:
    /// fragments spawned by one hit can be struck by a later shot in the same
    /// tick. Each shot stops at its first hit.
    pub fn resolve<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Resolution {
        for i in 0..self.ship.shots().len() {
            if self.ship.shots()[i].is_dead() {
                continue;
            }
            let mut j = 0;
            while j < self.asteroids.len() {
                if !self.asteroids[j].is_dead() && self.ship.shots()[i].hits(&self.asteroids[j].item)
                {
                    self.ship.shots_mut()[i].item.die();
                    let shot = &self.ship.shots()[i];
                    let fragments = self.asteroids[j].explode(shot, &self.sprites, rng);
                    self.asteroids.extend(fragments);
                    break;
                }
                j += 1;
            }
        }

        self.ship.purge_dead_shots();

        let before = self.asteroids.len();
        self.asteroids.retain(|asteroid| !asteroid.is_dead());
        let destroyed = (before - self.asteroids.len()) as u32;

        Resolution {
            destroyed,
            ship_dead: self.ship.is_dead(),
        }
    }

    /// Asteroids, then shots, then the ship
    pub fn draw(&self, surface: &mut dyn Surface) {
        for asteroid in &self.asteroids {
            asteroid.draw(surface);
        }
        self.ship.draw(surface);
    }

    pub fn draw_debug(&self, surface: &mut dyn Surface) {
        self.ship.draw_debug(surface);
        for asteroid in &self.asteroids {
            asteroid.draw_debug(surface);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::renderer::RecordingSurface;
    use crate::resources::{ResourceRepository, SpriteSheet, sprites};
    use crate::sim::item::OffscreenBehaviour;
    use crate::sim::seeded_rng;
    use glam::Vec2;

    const BOUNDS: Bounds = Bounds {
        width: 800.0,
        height: 600.0,
    };

    fn level() -> Level {
        level_with_ship_at(Vec2::new(100.0, 168.5))
    }

    fn level_with_ship_at(position: Vec2) -> Level {
        let sheet = SpriteSheet::space_shooter();
        let ship = Ship::new(
            sheet.image(sprites::SHIP).unwrap(),
            sheet.image(sprites::LASER).unwrap(),
            position,
            Vec2::ZERO,
            0.0,
            0.0,
            OffscreenBehaviour::Overflow,
        );
        Level::new(ship, AsteroidSprites::load(&sheet).unwrap())
    }

    fn rock(level: &Level, tier: AsteroidTier) -> Asteroid {
        let mut rng = seeded_rng(1);
        Asteroid::new(
            tier,
            level.sprites.pick(tier, &mut rng),
            Vec2::new(100.0, 100.0),
            Vec2::ZERO,
            0.0,
            0.0,
        )
    }

    /// Fire once and advance until the shot strikes the field
    fn shoot_until_hit(level: &mut Level, seed: u64) -> Resolution {
        let mut rng = seeded_rng(seed);
        level.apply_input(TickInput {
            fire: true,
            ..Default::default()
        });
        for _ in 0..60 {
            let resolution = level.resolve(&mut rng);
            if resolution.destroyed > 0 {
                return resolution;
            }
            level.apply_input(TickInput::default());
            level.advance(BOUNDS);
        }
        Resolution::default()
    }

    #[test]
    fn test_input_mapping() {
        let input = Input::with_keys(&[keys::LEFT, keys::SPACE]);
        let tick = TickInput::from_input(&input);
        assert!(tick.turn_left && tick.fire);
        assert!(!tick.turn_right && !tick.thrust && !tick.retro_boost);
    }

    #[test]
    fn test_hundred_left_ticks_clamp_spin() {
        let mut level = level();
        for _ in 0..100 {
            level.apply_input(TickInput {
                turn_left: true,
                ..Default::default()
            });
        }
        assert_eq!(level.ship.item.angular_speed, -ANGULAR_SPEED_MAX);
    }

    #[test]
    fn test_big_asteroid_hit_scores_once_and_fragments() {
        let mut level = level();
        let asteroid = rock(&level, AsteroidTier::Big);
        level.asteroids.push(asteroid);

        let resolution = shoot_until_hit(&mut level, 9);
        assert_eq!(resolution.destroyed, 1);
        assert_eq!(level.asteroids.len(), 4);
        assert!(level.asteroids.iter().all(|a| a.tier == AsteroidTier::Medium));
        assert!(level.ship.shots().is_empty());
        assert!(!resolution.ship_dead);
    }

    #[test]
    fn test_shot_from_below_stops_at_first_hit() {
        // The "down" fragment appears right where the shot made contact
        for seed in 0..5 {
            let mut level = level_with_ship_at(Vec2::new(100.0, 400.0));
            let asteroid = rock(&level, AsteroidTier::Big);
            level.asteroids.push(asteroid);

            let resolution = shoot_until_hit(&mut level, seed);
            assert_eq!(resolution.destroyed, 1, "seed {}", seed);
            assert_eq!(level.asteroids.len(), 4, "seed {}", seed);
            assert!(level.asteroids.iter().all(|a| a.tier == AsteroidTier::Medium));
            assert!(level.ship.shots().is_empty());
        }
    }

    #[test]
    fn test_later_shot_hits_fresh_fragment_same_tick() {
        let mut level = level();
        let asteroid = rock(&level, AsteroidTier::Big);
        let half_width = asteroid.item.sprite.width / 2.0;
        level.asteroids.push(asteroid);

        level.ship.shoot();
        level.ship.stop_shooting();
        level.ship.shoot();
        assert_eq!(level.ship.shots().len(), 2);

        // First tip on the big centre, second on where the right fragment spawns
        let laser_half = level.ship.shots()[0].item.sprite.height / 2.0;
        level.ship.shots_mut()[0].item.position = Vec2::new(100.0, 100.0 + laser_half);
        level.ship.shots_mut()[1].item.position =
            Vec2::new(100.0 + half_width, 100.0 + laser_half);

        let resolution = level.resolve(&mut seeded_rng(3));
        assert_eq!(resolution.destroyed, 2);
        assert_eq!(level.asteroids.len(), 7);
        let medium = level.asteroids.iter().filter(|a| a.tier == AsteroidTier::Medium);
        let small = level.asteroids.iter().filter(|a| a.tier == AsteroidTier::Small);
        assert_eq!(medium.count(), 3);
        assert_eq!(small.count(), 4);
        assert!(level.ship.shots().is_empty());
    }

    #[test]
    fn test_tiny_asteroid_hit_clears_field() {
        let mut level = level();
        let asteroid = rock(&level, AsteroidTier::Tiny);
        level.asteroids.push(asteroid);

        let resolution = shoot_until_hit(&mut level, 9);
        assert_eq!(resolution.destroyed, 1);
        assert!(level.asteroids.is_empty());
    }

    #[test]
    fn test_populate_spawns_big_asteroids() {
        let mut level = level();
        let mut rng = seeded_rng(4);
        level.populate(3, BOUNDS, &mut rng);
        assert_eq!(level.asteroids.len(), 3);
        assert!(level.asteroids.iter().all(|a| a.tier == AsteroidTier::Big));
    }

    #[test]
    fn test_draw_order() {
        let mut level = level();
        let asteroid = rock(&level, AsteroidTier::Big);
        level.asteroids.push(asteroid);
        level.apply_input(TickInput {
            fire: true,
            ..Default::default()
        });
        let mut surface = RecordingSurface::new();
        level.draw(&mut surface);
        let keys = surface.sprite_keys();
        assert_eq!(keys.len(), 3);
        assert!(keys[0].starts_with("PNG.Meteors"));
        assert_eq!(keys[1], sprites::LASER);
        assert_eq!(keys[2], sprites::SHIP);
    }
}
