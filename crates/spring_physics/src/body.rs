//! Rigid bodies of the reference world

use std::collections::HashSet;

use spring_core::{ObjectId, Tag};
use spring_math::{Quat, Vec3, AABB};

use crate::service::RigidBody;

/// Description for creating a body
#[derive(Debug, Clone)]
pub struct BodyDesc {
    pub position: Vec3,
    pub rotation: Quat,
    pub half_extents: Vec3,
    pub velocity: Vec3,
    pub angular_damping: f32,
    /// Static bodies never move and can be skipped by queries
    pub is_static: bool,
    pub tags: HashSet<Tag>,
}

impl Default for BodyDesc {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            half_extents: Vec3::splat(0.5),
            velocity: Vec3::ZERO,
            angular_damping: 0.0,
            is_static: false,
            tags: HashSet::new(),
        }
    }
}

impl BodyDesc {
    pub fn fixed() -> Self {
        Self {
            is_static: true,
            ..Default::default()
        }
    }

    pub fn dynamic() -> Self {
        Self::default()
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_half_extents(mut self, half_extents: Vec3) -> Self {
        self.half_extents = half_extents;
        self
    }

    pub fn with_angular_damping(mut self, damping: f32) -> Self {
        self.angular_damping = damping;
        self
    }

    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tags.insert(tag);
        self
    }
}

/// A body owned by [`SimWorld`](crate::SimWorld)
///
/// Bounds are axis-aligned around the position and do not follow rotation.
#[derive(Debug, Clone)]
pub struct SimBody {
    pub(crate) id: ObjectId,
    pub(crate) position: Vec3,
    pub(crate) rotation: Quat,
    pub(crate) velocity: Vec3,
    pub(crate) half_extents: Vec3,
    pub(crate) angular_damping: f32,
    pub(crate) is_static: bool,
    pub(crate) tags: HashSet<Tag>,
}

impl SimBody {
    pub(crate) fn from_desc(id: ObjectId, desc: BodyDesc) -> Self {
        Self {
            id,
            position: desc.position,
            rotation: desc.rotation.normalize(),
            velocity: desc.velocity,
            half_extents: desc.half_extents,
            angular_damping: desc.angular_damping,
            is_static: desc.is_static,
            tags: desc.tags,
        }
    }

    #[inline]
    pub fn is_static(&self) -> bool {
        self.is_static
    }

    #[inline]
    pub fn has_tag(&self, tag: Tag) -> bool {
        self.tags.contains(&tag)
    }

    /// Teleport, for scripted scenes
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn set_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation.normalize();
    }
}

impl RigidBody for SimBody {
    fn id(&self) -> ObjectId {
        self.id
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn rotation(&self) -> Quat {
        self.rotation
    }

    fn velocity(&self) -> Vec3 {
        self.velocity
    }

    fn set_velocity(&mut self, velocity: Vec3) {
        if !self.is_static {
            self.velocity = velocity;
        }
    }

    fn angular_damping(&self) -> f32 {
        self.angular_damping
    }

    fn set_angular_damping(&mut self, damping: f32) {
        self.angular_damping = damping;
    }

    fn smooth_rotate(&mut self, target: Quat, rate: f32, dt: f32) {
        if self.is_static {
            return;
        }
        let t = (rate * dt).clamp(0.0, 1.0);
        self.rotation = self.rotation.slerp(target, t).normalize();
    }

    fn bounds(&self) -> AABB {
        AABB::from_center_half_extents(self.position, self.half_extents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spring_math::radians;

    fn body(desc: BodyDesc) -> SimBody {
        SimBody::from_desc(ObjectId::new(0, 0), desc)
    }

    #[test]
    fn test_static_body_ignores_velocity() {
        let mut b = body(BodyDesc::fixed());
        b.set_velocity(Vec3::X);
        assert_eq!(b.velocity(), Vec3::ZERO);
    }

    #[test]
    fn test_smooth_rotate_is_partial() {
        let mut b = body(BodyDesc::dynamic());
        let target = Quat::from_rotation_y(radians(90.0));
        b.smooth_rotate(target, 10.0, 0.02);
        let moved = b.rotation().angle_between(Quat::IDENTITY);
        assert!(moved > 0.0 && moved < radians(90.0));

        // rate * dt >= 1 snaps
        b.smooth_rotate(target, 100.0, 0.02);
        assert!(b.rotation().angle_between(target) < 1e-2);
    }

    #[test]
    fn test_bounds_follow_position() {
        let b = body(BodyDesc::dynamic().with_position(Vec3::new(0.0, 0.0, -5.0)));
        assert_eq!(b.bounds().center(), Vec3::new(0.0, 0.0, -5.0));
    }
}
