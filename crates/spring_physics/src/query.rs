//! Physics queries

use spring_core::{ObjectId, Tag};
use spring_math::{Ray, Vec3};

/// Result of a raycast query
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaycastHit {
    /// The object that was hit
    pub object: ObjectId,
    /// Hit point in world space
    pub point: Vec3,
    /// Distance from ray origin
    pub distance: f32,
}

/// A ray cast request
#[derive(Debug, Clone, PartialEq)]
pub struct RayQuery {
    pub origin: Vec3,
    /// Normalized on construction
    pub direction: Vec3,
    pub max_distance: f32,
    /// Only objects carrying this tag qualify
    pub tag: Option<Tag>,
    /// Skip static bodies
    pub ignore_static: bool,
}

impl RayQuery {
    pub fn new(origin: Vec3, direction: Vec3, max_distance: f32) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
            max_distance,
            tag: None,
            ignore_static: false,
        }
    }

    pub fn with_tag(mut self, tag: Option<Tag>) -> Self {
        self.tag = tag;
        self
    }

    pub fn with_ignore_static(mut self, ignore_static: bool) -> Self {
        self.ignore_static = ignore_static;
        self
    }

    #[inline]
    pub fn ray(&self) -> Ray {
        Ray::new(self.origin, self.direction)
    }

    /// Far end of the ray
    #[inline]
    pub fn end(&self) -> Vec3 {
        self.origin + self.direction * self.max_distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_normalizes_and_ends() {
        let q = RayQuery::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -3.0), 10.0)
            .with_tag(Some(Tag::Grabbable))
            .with_ignore_static(true);
        assert_eq!(q.direction, Vec3::NEG_Z);
        assert_eq!(q.end(), Vec3::new(0.0, 0.0, -10.0));
        assert_eq!(q.tag, Some(Tag::Grabbable));
        assert!(q.ignore_static);
    }
}
