//! 3D ray for look and grab queries

use crate::vector::Vec3;

/// Ray with a normalized direction
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    /// Ray origin point
    pub origin: Vec3,
    /// Ray direction (normalized)
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray with normalized direction
    #[inline]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Create a ray from two points
    #[inline]
    pub fn from_points(start: Vec3, end: Vec3) -> Self {
        Self::new(start, end - start)
    }

    /// Point at distance t along the ray
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Closest point on the ray to a given point
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        let t = (point - self.origin).dot(self.direction);
        if t <= 0.0 {
            self.origin
        } else {
            self.at(t)
        }
    }

    /// Distance from a point to the ray
    pub fn distance_to_point(&self, point: Vec3) -> f32 {
        (point - self.closest_point(point)).length()
    }

    /// Component-wise reciprocal of the direction, for slab tests
    #[inline]
    pub fn inverse_direction(&self) -> Vec3 {
        Vec3::new(
            1.0 / self.direction.x,
            1.0 / self.direction.y,
            1.0 / self.direction.z,
        )
    }

    /// A ray is usable when its direction is not degenerate
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.direction.length_squared() > 0.0
    }
}
