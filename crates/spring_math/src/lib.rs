//! # spring_math - Gameplay Math
//!
//! Small math primitives used by the interaction components:
//! vectors, quaternions, Euler angles, rays, bounding boxes and colours.
//!
//! Conventions: right-handed, Y up, a rotation's forward axis is -Z.
//! Angles exposed to gameplay code are in degrees.

pub mod angles;
pub mod bounds;
pub mod color;
pub mod intersect;
pub mod quaternion;
pub mod ray;
pub mod vector;

pub use angles::*;
pub use bounds::*;
pub use color::*;
pub use intersect::*;
pub use quaternion::*;
pub use ray::*;
pub use vector::*;

/// Common math constants
pub mod consts {
    pub const PI: f32 = core::f32::consts::PI;
    pub const DEG_TO_RAD: f32 = PI / 180.0;
    pub const RAD_TO_DEG: f32 = 180.0 / PI;
    pub const EPSILON: f32 = 1e-6;
}

/// Convert degrees to radians
#[inline]
pub fn radians(degrees: f32) -> f32 {
    degrees * consts::DEG_TO_RAD
}

/// Convert radians to degrees
#[inline]
pub fn degrees(radians: f32) -> f32 {
    radians * consts::RAD_TO_DEG
}

/// Linear interpolation
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Rotate `point` around `pivot` by `rotation`
#[inline]
pub fn rotate_around(point: Vec3, pivot: Vec3, rotation: Quat) -> Vec3 {
    pivot + rotation.rotate(point - pivot)
}

/// Whether two values are within `tolerance` of each other
#[inline]
pub fn almost_equal(a: f32, b: f32, tolerance: f32) -> bool {
    (a - b).abs() <= tolerance
}

pub mod prelude {
    pub use crate::angles::Angles;
    pub use crate::bounds::AABB;
    pub use crate::color::Color;
    pub use crate::intersect::ray_aabb;
    pub use crate::quaternion::Quat;
    pub use crate::ray::Ray;
    pub use crate::vector::{Vec2, Vec3};
    pub use crate::{almost_equal, degrees, lerp, radians, rotate_around};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degree_radian_round_trip() {
        assert!(almost_equal(degrees(radians(90.0)), 90.0, 1e-4));
    }

    #[test]
    fn test_rotate_around_pivot() {
        let rotated = rotate_around(
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Quat::from_rotation_y(radians(90.0)),
        );
        assert!((rotated - Vec3::new(1.0, 0.0, -1.0)).length() < 1e-5);
    }
}
