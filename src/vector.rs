//! Screen-space vector helpers
//!
//! Vectors are plain `glam::Vec2` values: `+`, `-` and `*` already return new
//! values. The helpers below add the polar conventions the game uses, where an
//! angle of zero points "up" the screen and angles grow clockwise.

use glam::Vec2;

/// Build a vector from a magnitude and an angle (radians).
///
/// `x = size * sin(angle)`, `y = size * cos(angle)`. A negative size points
/// the opposite way.
#[inline]
pub fn from_size_and_angle(size: f32, angle: f32) -> Vec2 {
    Vec2::new(size * angle.sin(), size * angle.cos())
}

/// Magnitude of the vector
#[inline]
pub fn size(v: Vec2) -> f32 {
    v.length()
}

/// Angle of the vector as `atan(y / x)`.
///
/// Only meaningful within a half-plane; callers that need the full circle
/// should use `atan2` directly.
#[inline]
pub fn heading(v: Vec2) -> f32 {
    (v.y / v.x).atan()
}

/// Flip the vertical component
#[inline]
pub fn mirror_x(v: Vec2) -> Vec2 {
    Vec2::new(v.x, -v.y)
}

/// Flip the horizontal component
#[inline]
pub fn mirror_y(v: Vec2) -> Vec2 {
    Vec2::new(-v.x, v.y)
}
