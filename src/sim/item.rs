//! Base moving entity
//!
//! Every drawable thing in a level (ship, shot, asteroid) wraps a [`GameItem`]
//! and exposes it through the [`Entity`] trait.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::renderer::{DEBUG_FONT, Surface, TextAlign, colors};
use crate::resources::Sprite;

/// What happens when an item leaves the visible area
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OffscreenBehaviour {
    /// Reappear on the opposite edge
    #[default]
    Overflow,
    /// Reserved; currently leaves the position untouched
    Bounce,
    /// Die as soon as the sprite crosses an edge
    Die,
}

/// Liveness of an item. `Dead` is terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ItemState {
    #[default]
    Alive,
    /// Reserved for death animations
    Dying,
    Dead,
}

/// Size of the playfield in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// Position, velocity and spin of a sprite on the playfield
#[derive(Debug, Clone)]
pub struct GameItem {
    pub sprite: Sprite,
    pub position: Vec2,
    /// Velocity in pixels/tick; positive `y` points up the screen
    pub speed: Vec2,
    /// Facing in radians, zero pointing up
    pub angle: f32,
    pub angular_speed: f32,
    pub offscreen: OffscreenBehaviour,
    state: ItemState,
}

impl GameItem {
    pub fn new(
        sprite: Sprite,
        position: Vec2,
        speed: Vec2,
        angle: f32,
        angular_speed: f32,
        offscreen: OffscreenBehaviour,
    ) -> Self {
        Self {
            sprite,
            position,
            speed,
            angle,
            angular_speed,
            offscreen,
            state: ItemState::Alive,
        }
    }

    /// Radius of the circle used for hit tests
    pub fn collision_radius(&self) -> f32 {
        self.sprite.height / 2.0
    }

    /// Integrate one tick of motion and apply the offscreen policy
    pub fn advance(&mut self, bounds: Bounds) {
        if self.is_dead() {
            return;
        }

        self.position.x += self.speed.x;
        self.position.y -= self.speed.y;

        match self.offscreen {
            OffscreenBehaviour::Overflow => self.overflow(bounds),
            OffscreenBehaviour::Bounce => {}
            OffscreenBehaviour::Die => {
                if self.is_outside(bounds) {
                    self.die();
                }
            }
        }

        self.angle += self.angular_speed;
    }

    fn overflow(&mut self, bounds: Bounds) {
        let w = self.sprite.width;
        let half_h = self.sprite.height / 2.0;

        if self.position.x > bounds.width {
            self.position.x = -w;
        } else if self.position.x < -w {
            self.position.x = bounds.width;
        }

        if self.position.y > bounds.height + half_h {
            self.position.y = -half_h;
        } else if self.position.y < -half_h {
            self.position.y = bounds.height;
        }
    }

    fn is_outside(&self, bounds: Bounds) -> bool {
        let half_h = self.sprite.height / 2.0;
        self.position.x + self.sprite.width > bounds.width
            || self.position.x < 0.0
            || self.position.y + half_h > bounds.height
            || self.position.y - half_h < 0.0
    }

    pub fn die(&mut self) {
        self.state = ItemState::Dead;
    }

    pub fn is_dead(&self) -> bool {
        self.state == ItemState::Dead
    }

    pub fn state(&self) -> ItemState {
        self.state
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.draw_sprite(&self.sprite, self.position, self.angle);
    }

    /// Cross-hair and coordinates at the item centre
    pub fn draw_center_info(&self, surface: &mut dyn Surface) {
        let p = self.position;
        surface.stroke_line(p - Vec2::new(50.0, 0.0), p + Vec2::new(50.0, 0.0), colors::DEBUG);
        surface.stroke_line(p - Vec2::new(0.0, 50.0), p + Vec2::new(0.0, 50.0), colors::DEBUG);
        surface.fill_text(
            &format!("({}, {})", p.x.round(), p.y.round()),
            p + Vec2::new(10.0, -10.0),
            &format!("10px {}", DEBUG_FONT),
            TextAlign::Left,
            colors::DEBUG,
        );
    }

    /// Outline of the circle shots are tested against
    pub fn draw_collision_bounds(&self, surface: &mut dyn Surface) {
        surface.stroke_circle(self.position, self.collision_radius(), colors::DEBUG);
    }
}

/// Shared behaviour of everything that lives in a level
pub trait Entity {
    fn item(&self) -> &GameItem;

    fn item_mut(&mut self) -> &mut GameItem;

    fn advance(&mut self, bounds: Bounds) {
        self.item_mut().advance(bounds);
    }

    fn draw(&self, surface: &mut dyn Surface) {
        self.item().draw(surface);
    }

    fn draw_debug(&self, surface: &mut dyn Surface) {
        let item = self.item();
        item.draw_center_info(surface);
        item.draw_collision_bounds(surface);
    }

    fn is_dead(&self) -> bool {
        self.item().is_dead()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, RecordingSurface};

    const BOUNDS: Bounds = Bounds {
        width: 800.0,
        height: 600.0,
    };

    fn item_at(x: f32, y: f32, offscreen: OffscreenBehaviour) -> GameItem {
        GameItem::new(
            Sprite::new("test", 20.0, 10.0),
            Vec2::new(x, y),
            Vec2::ZERO,
            0.0,
            0.0,
            offscreen,
        )
    }

    #[test]
    fn test_motion_inverts_vertical_axis() {
        let mut item = item_at(100.0, 100.0, OffscreenBehaviour::Overflow);
        item.speed = Vec2::new(2.0, 3.0);
        item.angular_speed = 0.5;
        item.advance(BOUNDS);
        assert_eq!(item.position, Vec2::new(102.0, 97.0));
        assert_eq!(item.angle, 0.5);
    }

    #[test]
    fn test_overflow_wraps_every_edge() {
        let mut right = item_at(BOUNDS.width + 1.0, 300.0, OffscreenBehaviour::Overflow);
        right.advance(BOUNDS);
        assert_eq!(right.position.x, -20.0);

        let mut left = item_at(-21.0, 300.0, OffscreenBehaviour::Overflow);
        left.advance(BOUNDS);
        assert_eq!(left.position.x, BOUNDS.width);

        let mut bottom = item_at(400.0, BOUNDS.height + 6.0, OffscreenBehaviour::Overflow);
        bottom.advance(BOUNDS);
        assert_eq!(bottom.position.y, -5.0);

        let mut top = item_at(400.0, -6.0, OffscreenBehaviour::Overflow);
        top.advance(BOUNDS);
        assert_eq!(top.position.y, BOUNDS.height);
    }

    #[test]
    fn test_die_on_exit_is_terminal() {
        let mut item = item_at(BOUNDS.width - 21.0, 300.0, OffscreenBehaviour::Die);
        item.speed = Vec2::new(2.0, 0.0);
        item.advance(BOUNDS);
        assert!(item.is_dead());

        // dead items no longer move
        let before = item.position;
        item.advance(BOUNDS);
        item.advance(BOUNDS);
        assert!(item.is_dead());
        assert_eq!(item.position, before);
    }

    #[test]
    fn test_die_inside_bounds_survives() {
        let mut item = item_at(400.0, 300.0, OffscreenBehaviour::Die);
        item.speed = Vec2::new(1.0, 1.0);
        item.advance(BOUNDS);
        assert!(!item.is_dead());
        assert_eq!(item.state(), ItemState::Alive);
    }

    #[test]
    fn test_bounce_leaves_position_alone() {
        let mut item = item_at(BOUNDS.width + 50.0, 300.0, OffscreenBehaviour::Bounce);
        item.advance(BOUNDS);
        assert_eq!(item.position.x, BOUNDS.width + 50.0);
        assert!(!item.is_dead());
    }

    #[test]
    fn test_debug_draw() {
        let item = item_at(10.0, 20.0, OffscreenBehaviour::Overflow);
        let mut surface = RecordingSurface::new();
        item.draw_center_info(&mut surface);
        item.draw_collision_bounds(&mut surface);
        assert_eq!(surface.texts(), vec!["(10, 20)"]);
        assert_eq!(surface.circles(), 1);
        let radius = surface.commands.iter().find_map(|c| match c {
            DrawCommand::Circle { radius, .. } => Some(*radius),
            _ => None,
        });
        assert_eq!(radius, Some(item.collision_radius()));
        assert_eq!(radius, Some(5.0));
    }
}
