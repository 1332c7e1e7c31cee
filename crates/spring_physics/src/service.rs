//! Physics service traits
//!
//! The host's physics engine implements these. Gameplay code holds
//! [`ObjectId`]s and looks bodies and hinges up on every use, so nothing
//! here outlives a single callback.

use spring_core::ObjectId;
use spring_math::{Quat, Vec3, AABB};

use crate::hinge::HingeMotor;
use crate::query::{RayQuery, RaycastHit};

/// A simulated rigid body
pub trait RigidBody {
    fn id(&self) -> ObjectId;

    fn position(&self) -> Vec3;

    fn rotation(&self) -> Quat;

    fn velocity(&self) -> Vec3;

    fn set_velocity(&mut self, velocity: Vec3);

    fn angular_damping(&self) -> f32;

    fn set_angular_damping(&mut self, damping: f32);

    /// Rotate part of the way toward `target`, `rate` per second
    fn smooth_rotate(&mut self, target: Quat, rate: f32, dt: f32);

    /// World-space bounding box
    fn bounds(&self) -> AABB;
}

/// A single-axis joint. Angles are degrees.
pub trait HingeJoint {
    /// Current angle relative to the rest pose
    fn angle(&self) -> f32;

    fn min_angle(&self) -> f32;

    fn max_angle(&self) -> f32;

    fn motor(&self) -> HingeMotor;

    fn set_motor(&mut self, motor: HingeMotor);

    fn target_angle(&self) -> f32;

    fn set_target_angle(&mut self, angle: f32);

    /// Degrees per second
    fn angular_velocity(&self) -> f32;
}

/// Everything a gameplay component needs from the physics engine
pub trait PhysicsWorld {
    /// Closest qualifying hit along the ray, if any
    fn raycast(&self, query: &RayQuery) -> Option<RaycastHit>;

    /// Changes whenever a body appears, disappears or may have moved, so
    /// a ray cast against an unchanged revision gives the same answer
    fn revision(&self) -> u64;

    fn body(&self, id: ObjectId) -> Option<&dyn RigidBody>;

    fn body_mut(&mut self, id: ObjectId) -> Option<&mut dyn RigidBody>;

    /// Hinge driving the body `id`
    fn hinge(&self, id: ObjectId) -> Option<&dyn HingeJoint>;

    fn hinge_mut(&mut self, id: ObjectId) -> Option<&mut dyn HingeJoint>;
}
