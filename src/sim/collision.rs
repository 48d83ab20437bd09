//! Collision detection
//!
//! Hits are checked per tick as point-in-circle: a shot's leading point
//! against an item's bounding circle. There is no swept test, so a fast shot
//! can tunnel through a small target between two ticks.

use glam::Vec2;

/// True when `point` lies strictly inside the circle at `center`
#[inline]
pub fn point_in_circle(point: Vec2, center: Vec2, radius: f32) -> bool {
    center.distance(point) < radius
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_inside() {
        assert!(point_in_circle(Vec2::new(1.0, 1.0), Vec2::ZERO, 2.0));
    }

    #[test]
    fn test_point_outside() {
        assert!(!point_in_circle(Vec2::new(3.0, 0.0), Vec2::ZERO, 2.0));
    }

    #[test]
    fn test_boundary_is_a_miss() {
        assert!(!point_in_circle(Vec2::new(0.0, 2.0), Vec2::ZERO, 2.0));
    }
}
