//! Axis-aligned bounding boxes

use crate::vector::Vec3;

/// Axis-Aligned Bounding Box
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AABB {
    pub min: Vec3,
    pub max: Vec3,
}

impl AABB {
    /// Create from min and max points
    #[inline]
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Create from center and half-extents
    #[inline]
    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    #[inline]
    pub fn half_extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    #[inline]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Same box moved so its center sits at `center`
    #[inline]
    pub fn recentered(&self, center: Vec3) -> Self {
        Self::from_center_half_extents(center, self.half_extents())
    }

    #[inline]
    pub fn contains_point(&self, point: Vec3) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }

    #[inline]
    pub fn intersects(&self, other: &AABB) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }

    /// Expand by a margin on every side
    #[inline]
    pub fn expand(&self, margin: f32) -> Self {
        let m = Vec3::splat(margin);
        Self::new(self.min - m, self.max + m)
    }

    /// The 8 corners, bottom face first (counter-clockwise), then top face
    pub fn corners(&self) -> [Vec3; 8] {
        let (lo, hi) = (self.min, self.max);
        [
            Vec3::new(lo.x, lo.y, lo.z),
            Vec3::new(hi.x, lo.y, lo.z),
            Vec3::new(hi.x, lo.y, hi.z),
            Vec3::new(lo.x, lo.y, hi.z),
            Vec3::new(lo.x, hi.y, lo.z),
            Vec3::new(hi.x, hi.y, lo.z),
            Vec3::new(hi.x, hi.y, hi.z),
            Vec3::new(lo.x, hi.y, hi.z),
        ]
    }

    /// The 12 edges as corner index pairs into [`AABB::corners`]
    pub const EDGES: [(usize, usize); 12] = [
        (0, 1), (1, 2), (2, 3), (3, 0),
        (4, 5), (5, 6), (6, 7), (7, 4),
        (0, 4), (1, 5), (2, 6), (3, 7),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_center_and_size() {
        let b = AABB::from_center_half_extents(Vec3::new(1.0, 2.0, 3.0), Vec3::splat(0.5));
        assert_eq!(b.center(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(b.size(), Vec3::ONE);
        assert!(b.contains_point(Vec3::new(1.25, 2.0, 3.0)));
        assert!(!b.contains_point(Vec3::ZERO));
    }

    #[test]
    fn test_recentered_keeps_extents() {
        let b = AABB::new(Vec3::ZERO, Vec3::new(2.0, 2.0, 2.0)).recentered(Vec3::new(10.0, 0.0, 0.0));
        assert_eq!(b.min, Vec3::new(9.0, -1.0, -1.0));
        assert_eq!(b.max, Vec3::new(11.0, 1.0, 1.0));
    }

    #[test]
    fn test_corners_cover_every_edge_once() {
        let b = AABB::new(Vec3::ZERO, Vec3::ONE);
        let corners = b.corners();
        for (a, c) in AABB::EDGES {
            // each edge runs along exactly one axis
            assert!((corners[a].distance(corners[c]) - 1.0).abs() < 1e-6);
        }
    }
}
