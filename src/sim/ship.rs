//! The player's ship and its weapon

use glam::Vec2;

use super::item::{Bounds, Entity, GameItem, OffscreenBehaviour};
use super::shot::Shot;
use crate::consts::*;
use crate::renderer::Surface;
use crate::resources::Sprite;
use crate::vector::from_size_and_angle;

#[derive(Debug, Clone)]
pub struct Ship {
    pub item: GameItem,
    shot_sprite: Sprite,
    /// Ticks since the last shot while cooling down; 0 when ready
    shooting: u32,
    /// Live shots in fire order
    shots: Vec<Shot>,
}

impl Ship {
    pub fn new(
        sprite: Sprite,
        shot_sprite: Sprite,
        position: Vec2,
        speed: Vec2,
        angle: f32,
        angular_speed: f32,
        offscreen: OffscreenBehaviour,
    ) -> Self {
        Self {
            item: GameItem::new(sprite, position, speed, angle, angular_speed, offscreen),
            shot_sprite,
            shooting: 0,
            shots: Vec::new(),
        }
    }

    pub fn shots(&self) -> &[Shot] {
        &self.shots
    }

    pub fn shots_mut(&mut self) -> &mut [Shot] {
        &mut self.shots
    }

    pub fn increase_angular_speed(&mut self) {
        self.item.angular_speed =
            (self.item.angular_speed + ANGULAR_SPEED_INCREMENT).min(ANGULAR_SPEED_MAX);
    }

    pub fn decrease_angular_speed(&mut self) {
        self.item.angular_speed =
            (self.item.angular_speed - ANGULAR_SPEED_INCREMENT).max(-ANGULAR_SPEED_MAX);
    }

    pub fn thrust(&mut self) {
        self.item.speed += from_size_and_angle(FWD_THRUST_INCREMENT, self.item.angle);
    }

    pub fn retro_boost(&mut self) {
        self.item.speed += from_size_and_angle(-RETRO_THRUST_INCREMENT, self.item.angle);
    }

    /// Trigger held for one tick
    pub fn shoot(&mut self) {
        if self.shooting > 0 {
            self.shooting += 1;
            if self.shooting > FRAMES_BETWEEN_SHOTS {
                self.shooting = 0;
            }
        } else if self.shots.len() < MAX_SHOTS {
            let angle = self.item.angle;
            let position = self.item.position + from_size_and_angle(-MUZZLE_OFFSET, -angle);
            let speed = from_size_and_angle(SHOT_SPEED, angle);
            self.shots
                .push(Shot::new(self.shot_sprite.clone(), position, speed, angle));
            self.shooting = 1;
            log::debug!(
                "Shot fired at ({:.0}, {:.0}), {} in flight",
                position.x,
                position.y,
                self.shots.len()
            );
        }
    }

    /// Trigger released
    pub fn stop_shooting(&mut self) {
        self.shooting = 0;
    }

    pub fn is_cooling_down(&self) -> bool {
        self.shooting > 0
    }

    pub fn purge_dead_shots(&mut self) {
        self.shots.retain(|shot| !shot.is_dead());
    }
}

impl Entity for Ship {
    fn item(&self) -> &GameItem {
        &self.item
    }

    fn item_mut(&mut self) -> &mut GameItem {
        &mut self.item
    }

    fn advance(&mut self, bounds: Bounds) {
        self.item.advance(bounds);
        for shot in &mut self.shots {
            shot.advance(bounds);
        }
        self.purge_dead_shots();
    }

    fn draw(&self, surface: &mut dyn Surface) {
        for shot in &self.shots {
            shot.draw(surface);
        }
        self.item.draw(surface);
    }

    fn draw_debug(&self, surface: &mut dyn Surface) {
        for shot in &self.shots {
            shot.draw_debug(surface);
        }
        self.item.draw_center_info(surface);
        self.item.draw_collision_bounds(surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ship_at(position: Vec2) -> Ship {
        Ship::new(
            Sprite::new("ship", 99.0, 75.0),
            Sprite::new("laser", 9.0, 37.0),
            position,
            Vec2::ZERO,
            0.0,
            0.0,
            OffscreenBehaviour::Overflow,
        )
    }

    #[test]
    fn test_turning_is_clamped() {
        let mut ship = ship_at(Vec2::new(400.0, 300.0));
        for _ in 0..100 {
            ship.decrease_angular_speed();
        }
        assert_eq!(ship.item.angular_speed, -ANGULAR_SPEED_MAX);

        for _ in 0..200 {
            ship.increase_angular_speed();
        }
        assert_eq!(ship.item.angular_speed, ANGULAR_SPEED_MAX);
    }

    #[test]
    fn test_thrust_follows_facing() {
        let mut ship = ship_at(Vec2::new(400.0, 300.0));
        ship.thrust();
        assert!(ship.item.speed.x.abs() < 1e-6);
        assert!((ship.item.speed.y - FWD_THRUST_INCREMENT).abs() < 1e-6);

        ship.retro_boost();
        let expected = FWD_THRUST_INCREMENT - RETRO_THRUST_INCREMENT;
        assert!((ship.item.speed.y - expected).abs() < 1e-6);
    }

    #[test]
    fn test_fire_rate_and_shot_limit() {
        let mut ship = ship_at(Vec2::new(400.0, 300.0));
        let mut fired_at = Vec::new();
        let mut last_len = 0;
        for tick in 0..200 {
            ship.shoot();
            if ship.shots().len() > last_len {
                fired_at.push(tick);
            }
            last_len = ship.shots().len();
            assert!(ship.shots().len() <= MAX_SHOTS);
        }

        assert_eq!(fired_at.len(), MAX_SHOTS);
        for pair in fired_at.windows(2) {
            assert!(pair[1] - pair[0] >= 6, "shots at {:?}", pair);
        }
    }

    #[test]
    fn test_stop_shooting_resets_cooldown() {
        let mut ship = ship_at(Vec2::new(400.0, 300.0));
        ship.shoot();
        assert!(ship.is_cooling_down());
        ship.stop_shooting();
        assert!(!ship.is_cooling_down());
        ship.shoot();
        assert_eq!(ship.shots().len(), 2);
    }

    #[test]
    fn test_shot_spawns_ahead_of_ship() {
        let mut ship = ship_at(Vec2::new(400.0, 300.0));
        ship.shoot();
        let shot = &ship.shots()[0];
        assert!((shot.item.position.x - 400.0).abs() < 1e-4);
        assert!((shot.item.position.y - 250.0).abs() < 1e-4);
        assert!((shot.speed().y - SHOT_SPEED).abs() < 1e-6);
    }

    #[test]
    fn test_offscreen_shots_are_purged() {
        let bounds = Bounds::new(800.0, 600.0);
        let mut ship = ship_at(Vec2::new(400.0, 300.0));
        ship.shoot();
        for _ in 0..40 {
            ship.advance(bounds);
        }
        assert!(ship.shots().is_empty());
    }
}
