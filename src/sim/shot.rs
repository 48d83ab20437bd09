//! Projectiles fired by the ship

use glam::Vec2;

use super::collision::point_in_circle;
use super::item::{Entity, GameItem, OffscreenBehaviour};
use crate::renderer::{Surface, colors};
use crate::resources::Sprite;
use crate::vector::{from_size_and_angle, mirror_y};

#[derive(Debug, Clone)]
pub struct Shot {
    pub item: GameItem,
}

impl Shot {
    /// A shot dies when it leaves the screen and never spins
    pub fn new(sprite: Sprite, position: Vec2, speed: Vec2, angle: f32) -> Self {
        Self {
            item: GameItem::new(sprite, position, speed, angle, 0.0, OffscreenBehaviour::Die),
        }
    }

    /// Leading tip of the laser, used for hit tests
    pub fn shot_point(&self) -> Vec2 {
        let half = self.item.sprite.height / 2.0;
        self.item.position + mirror_y(from_size_and_angle(-half, self.item.angle))
    }

    pub fn hits(&self, target: &GameItem) -> bool {
        point_in_circle(self.shot_point(), target.position, target.collision_radius())
    }

    pub fn speed(&self) -> Vec2 {
        self.item.speed
    }
}

impl Entity for Shot {
    fn item(&self) -> &GameItem {
        &self.item
    }

    fn item_mut(&mut self) -> &mut GameItem {
        &mut self.item
    }

    fn draw_debug(&self, surface: &mut dyn Surface) {
        self.item.draw_center_info(surface);
        surface.stroke_circle(self.shot_point(), 4.0, colors::DEBUG);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(radius: f32) -> GameItem {
        GameItem::new(
            Sprite::new("rock", radius * 2.0, radius * 2.0),
            Vec2::new(100.0, 100.0),
            Vec2::ZERO,
            0.0,
            0.0,
            OffscreenBehaviour::Overflow,
        )
    }

    fn laser_tipped_at(tip: Vec2) -> Shot {
        // Facing up, the tip sits half a sprite above the centre
        let sprite = Sprite::new("laser", 9.0, 36.0);
        Shot::new(sprite, tip + Vec2::new(0.0, 18.0), Vec2::ZERO, 0.0)
    }

    #[test]
    fn test_shot_point_facing_up() {
        let shot = laser_tipped_at(Vec2::new(50.0, 50.0));
        let tip = shot.shot_point();
        assert!((tip.x - 50.0).abs() < 1e-4);
        assert!((tip.y - 50.0).abs() < 1e-4);
    }

    #[test]
    fn test_hit_inside_radius() {
        let rock = target(20.0);
        let shot = laser_tipped_at(Vec2::new(100.0, 100.0 + 20.0 - 0.01));
        assert!(shot.hits(&rock));
    }

    #[test]
    fn test_miss_outside_radius() {
        let rock = target(20.0);
        let shot = laser_tipped_at(Vec2::new(100.0, 100.0 + 20.0 + 0.01));
        assert!(!shot.hits(&rock));
    }

    #[test]
    fn test_shots_never_spin_and_die_offscreen() {
        let shot = laser_tipped_at(Vec2::ZERO);
        assert_eq!(shot.item.angular_speed, 0.0);
        assert_eq!(shot.item.offscreen, OffscreenBehaviour::Die);
    }
}
