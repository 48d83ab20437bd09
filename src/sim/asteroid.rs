//! Asteroids: random spawning and fragmentation

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use super::item::{Bounds, Entity, GameItem, OffscreenBehaviour};
use super::random_number;
use super::shot::Shot;
use crate::consts::*;
use crate::error::GameError;
use crate::resources::{ResourceRepository, Sprite, sprites};

/// Size class of an asteroid
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AsteroidTier {
    Tiny = 0,
    Small = 1,
    Medium = 2,
    Big = 3,
}

impl AsteroidTier {
    pub const ALL: [AsteroidTier; 4] = [
        AsteroidTier::Tiny,
        AsteroidTier::Small,
        AsteroidTier::Medium,
        AsteroidTier::Big,
    ];

    pub fn value(self) -> u8 {
        self as u8
    }

    /// The tier fragments break into; `None` for the smallest
    pub fn smaller(self) -> Option<AsteroidTier> {
        match self {
            AsteroidTier::Tiny => None,
            AsteroidTier::Small => Some(AsteroidTier::Tiny),
            AsteroidTier::Medium => Some(AsteroidTier::Small),
            AsteroidTier::Big => Some(AsteroidTier::Medium),
        }
    }

    pub fn sprite_keys(self) -> &'static [&'static str] {
        match self {
            AsteroidTier::Tiny => sprites::TINY_ASTEROIDS,
            AsteroidTier::Small => sprites::SMALL_ASTEROIDS,
            AsteroidTier::Medium => sprites::MEDIUM_ASTEROIDS,
            AsteroidTier::Big => sprites::BIG_ASTEROIDS,
        }
    }
}

/// Sprite pools for every tier, resolved once when a level starts
#[derive(Debug, Clone)]
pub struct AsteroidSprites {
    pools: [Vec<Sprite>; 4],
}

impl AsteroidSprites {
    pub fn load(repo: &dyn ResourceRepository) -> Result<Self, GameError> {
        let mut pools: [Vec<Sprite>; 4] = Default::default();
        for tier in AsteroidTier::ALL {
            let pool = &mut pools[tier.value() as usize];
            for key in tier.sprite_keys() {
                pool.push(repo.image(key)?);
            }
        }
        Ok(Self { pools })
    }

    /// Random sprite of the given tier
    pub fn pick<R: Rng + ?Sized>(&self, tier: AsteroidTier, rng: &mut R) -> Sprite {
        let pool = &self.pools[tier.value() as usize];
        pool[rng.random_range(0..pool.len())].clone()
    }
}

#[derive(Debug, Clone)]
pub struct Asteroid {
    pub item: GameItem,
    pub tier: AsteroidTier,
}

impl Asteroid {
    pub fn new(
        tier: AsteroidTier,
        sprite: Sprite,
        position: Vec2,
        speed: Vec2,
        angle: f32,
        angular_speed: f32,
    ) -> Self {
        Self {
            item: GameItem::new(
                sprite,
                position,
                speed,
                angle,
                angular_speed,
                OffscreenBehaviour::Overflow,
            ),
            tier,
        }
    }

    /// Asteroid with a random sprite, position, drift and spin
    pub fn build_random<R: Rng + ?Sized>(
        tier: AsteroidTier,
        sprites: &AsteroidSprites,
        bounds: Bounds,
        rng: &mut R,
    ) -> Self {
        let sprite = sprites.pick(tier, rng);
        let position = Vec2::new(
            random_number(rng, 0.0, bounds.width - sprite.width / 2.0),
            random_number(rng, 0.0, bounds.height - sprite.height / 2.0),
        );
        let speed = Vec2::new(
            random_number(rng, -ASTEROID_MAX_SPEED, ASTEROID_MAX_SPEED),
            random_number(rng, -ASTEROID_MAX_SPEED, ASTEROID_MAX_SPEED),
        );
        let angle = random_number(rng, 0.0, TAU);
        let angular_speed = ASTEROID_SPIN_SCALE * random_number(rng, -100.0, 100.0);
        Self::new(tier, sprite, position, speed, angle, angular_speed)
    }

    /// Kill this asteroid and return its fragments.
    ///
    /// A tiny asteroid leaves nothing behind; anything bigger splits into four
    /// pieces one tier smaller, pushed right, down, left and up.
    pub fn explode<R: Rng + ?Sized>(
        &mut self,
        shot: &Shot,
        sprites: &AsteroidSprites,
        rng: &mut R,
    ) -> Vec<Asteroid> {
        self.item.die();
        let Some(tier) = self.tier.smaller() else {
            return Vec::new();
        };

        let half = Vec2::new(self.item.sprite.width, self.item.sprite.height) / 2.0;
        let transfer = shot.speed() * (FRAGMENT_SHOT_TRANSFER / self.tier.value() as f32);
        let directions = [Vec2::X, Vec2::Y, Vec2::NEG_X, Vec2::NEG_Y];

        let fragments: Vec<Asteroid> = directions
            .iter()
            .map(|&dir| {
                let nudge = random_number(rng, FRAGMENT_MIN_NUDGE, ASTEROID_MAX_SPEED);
                let position = self.item.position + dir * half;
                let speed = self.item.speed + dir * nudge + transfer;
                let angle = random_number(rng, 0.0, TAU);
                let angular_speed = ASTEROID_SPIN_SCALE * random_number(rng, -100.0, 100.0);
                Asteroid::new(tier, sprites.pick(tier, rng), position, speed, angle, angular_speed)
            })
            .collect();

        log::debug!(
            "{:?} asteroid at ({:.0}, {:.0}) broke into {} {:?}",
            self.tier,
            self.item.position.x,
            self.item.position.y,
            fragments.len(),
            tier
        );
        fragments
    }
}

impl Entity for Asteroid {
    fn item(&self) -> &GameItem {
        &self.item
    }

    fn item_mut(&mut self) -> &mut GameItem {
        &mut self.item
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::SpriteSheet;
    use crate::sim::seeded_rng;

    fn sprites() -> AsteroidSprites {
        AsteroidSprites::load(&SpriteSheet::space_shooter()).unwrap()
    }

    fn shot() -> Shot {
        Shot::new(
            Sprite::new("laser", 9.0, 37.0),
            Vec2::new(100.0, 150.0),
            Vec2::new(0.0, SHOT_SPEED),
            0.0,
        )
    }

    #[test]
    fn test_tier_order() {
        assert!(AsteroidTier::Tiny < AsteroidTier::Big);
        assert_eq!(AsteroidTier::Big.smaller(), Some(AsteroidTier::Medium));
        assert_eq!(AsteroidTier::Tiny.smaller(), None);
    }

    #[test]
    fn test_build_random_stays_in_range() {
        let sprites = sprites();
        let bounds = Bounds::new(800.0, 600.0);
        let mut rng = seeded_rng(3);
        for _ in 0..100 {
            let a = Asteroid::build_random(AsteroidTier::Big, &sprites, bounds, &mut rng);
            assert!(a.item.position.x >= 0.0 && a.item.position.x < bounds.width);
            assert!(a.item.position.y >= 0.0 && a.item.position.y < bounds.height);
            assert!(a.item.speed.x.abs() <= ASTEROID_MAX_SPEED);
            assert!(a.item.angular_speed.abs() <= ASTEROID_SPIN_SCALE * 100.0);
            assert!(AsteroidTier::Big.sprite_keys().contains(&a.item.sprite.key.as_str()));
        }
    }

    #[test]
    fn test_big_explodes_into_four_medium() {
        let sprites = sprites();
        let mut rng = seeded_rng(11);
        let mut rock = Asteroid::new(
            AsteroidTier::Big,
            sprites.pick(AsteroidTier::Big, &mut rng),
            Vec2::new(100.0, 100.0),
            Vec2::ZERO,
            0.0,
            0.0,
        );

        let fragments = rock.explode(&shot(), &sprites, &mut rng);
        assert!(rock.is_dead());
        assert_eq!(fragments.len(), 4);
        assert!(fragments.iter().all(|f| f.tier == AsteroidTier::Medium));
        assert!(fragments.iter().all(|f| !f.is_dead()));

        // right, down, left, up
        let half_w = rock.item.sprite.width / 2.0;
        let half_h = rock.item.sprite.height / 2.0;
        assert_eq!(fragments[0].item.position, Vec2::new(100.0 + half_w, 100.0));
        assert_eq!(fragments[1].item.position, Vec2::new(100.0, 100.0 + half_h));
        assert_eq!(fragments[2].item.position, Vec2::new(100.0 - half_w, 100.0));
        assert_eq!(fragments[3].item.position, Vec2::new(100.0, 100.0 - half_h));
        assert!(fragments[0].item.speed.x >= FRAGMENT_MIN_NUDGE);
        assert!(fragments[2].item.speed.x <= -FRAGMENT_MIN_NUDGE);
    }

    #[test]
    fn test_tiny_explodes_into_nothing() {
        let sprites = sprites();
        let mut rng = seeded_rng(5);
        let mut rock = Asteroid::new(
            AsteroidTier::Tiny,
            sprites.pick(AsteroidTier::Tiny, &mut rng),
            Vec2::new(100.0, 100.0),
            Vec2::ZERO,
            0.0,
            0.0,
        );
        assert!(rock.explode(&shot(), &sprites, &mut rng).is_empty());
        assert!(rock.is_dead());
    }

    #[test]
    fn test_missing_sprite_fails_to_load() {
        let err = AsteroidSprites::load(&SpriteSheet::new()).unwrap_err();
        assert!(matches!(err, GameError::AssetNotFound(_)));
    }
}
