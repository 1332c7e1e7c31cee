//! Spring Physics - Physics Services
//!
//! Gameplay components never own a physics engine. They talk to one through
//! the service traits in this crate, which the host implements.
//!
//! # Features
//!
//! - Ray casts with static exclusion and tag filtering
//! - Rigid body access (velocity, angular damping, smooth rotation, bounds)
//! - Hinge joints with an angle-seeking motor
//! - [`SimWorld`]: a small headless world implementing every service, used by
//!   tests and the sandbox
//!
//! # Example
//!
//! ```ignore
//! use spring_physics::prelude::*;
//!
//! let mut world = SimWorld::new(SimConfig::default());
//! let crate_id = world.add_body(
//!     BodyDesc::dynamic()
//!         .with_position(Vec3::new(0.0, 0.0, -5.0))
//!         .with_tag(Tag::Grabbable),
//! );
//!
//! let hit = world.raycast(&RayQuery::new(Vec3::ZERO, Vec3::NEG_Z, 100.0));
//! assert_eq!(hit.map(|h| h.object), Some(crate_id));
//!
//! world.step(1.0 / 50.0);
//! ```

pub mod body;
pub mod config;
pub mod error;
pub mod hinge;
pub mod query;
pub mod service;
pub mod world;

pub use body::{BodyDesc, SimBody};
pub use config::SimConfig;
pub use error::{PhysicsError, Result};
pub use hinge::{HingeDesc, HingeMotor, SimHinge};
pub use query::{RayQuery, RaycastHit};
pub use service::{HingeJoint, PhysicsWorld, RigidBody};
pub use world::SimWorld;

/// Prelude for common imports
pub mod prelude {
    pub use crate::body::{BodyDesc, SimBody};
    pub use crate::config::SimConfig;
    pub use crate::error::{PhysicsError, Result};
    pub use crate::hinge::{HingeDesc, HingeMotor, SimHinge};
    pub use crate::query::{RayQuery, RaycastHit};
    pub use crate::service::{HingeJoint, PhysicsWorld, RigidBody};
    pub use crate::world::SimWorld;
    pub use spring_core::{ObjectId, Tag};
    pub use spring_math::{Quat, Vec3, AABB};
}
