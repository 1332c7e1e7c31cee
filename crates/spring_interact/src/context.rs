//! Per-callback context handed to interaction components
//!
//! Everything a component may touch during one callback is borrowed here
//! for the duration of that callback and nothing longer.

use spring_core::{FrameTime, InputService, ObjectId};
use spring_debug::{DebugSettings, Gizmo};
use spring_hud::{Localiser, PromptController};
use spring_math::{Angles, Quat, Vec3};
use spring_physics::PhysicsWorld;

/// Where the acting player is and where they are looking
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewpoint {
    /// The acting player object
    pub actor: ObjectId,
    /// Actor position (feet)
    pub position: Vec3,
    pub eye_position: Vec3,
    pub eye_angles: Angles,
    /// Object the actor is standing on, if any
    pub ground: Option<ObjectId>,
}

impl Viewpoint {
    pub fn new(actor: ObjectId, position: Vec3, eye_position: Vec3, eye_angles: Angles) -> Self {
        Self {
            actor,
            position,
            eye_position,
            eye_angles,
            ground: None,
        }
    }

    pub fn with_ground(mut self, ground: Option<ObjectId>) -> Self {
        self.ground = ground;
        self
    }

    #[inline]
    pub fn eye_rotation(&self) -> Quat {
        self.eye_angles.to_quat()
    }

    #[inline]
    pub fn forward(&self) -> Vec3 {
        self.eye_rotation().forward()
    }

    #[inline]
    pub fn is_standing_on(&self, object: ObjectId) -> bool {
        self.ground == Some(object)
    }
}

/// Physics-step context. Components may change gameplay state and drive physics.
pub struct StepContext<'a> {
    pub time: FrameTime,
    pub viewpoint: &'a Viewpoint,
    pub input: &'a dyn InputService,
    pub physics: &'a mut dyn PhysicsWorld,
    pub prompts: &'a mut PromptController,
    pub strings: &'a Localiser,
    pub gizmo: &'a mut dyn Gizmo,
    pub debug: &'a DebugSettings,
}

/// Render-frame context. Physics is read-only; only UI and debug state change.
pub struct FrameContext<'a> {
    pub time: FrameTime,
    pub viewpoint: &'a Viewpoint,
    pub input: &'a dyn InputService,
    pub physics: &'a dyn PhysicsWorld,
    pub prompts: &'a mut PromptController,
    pub strings: &'a Localiser,
    pub gizmo: &'a mut dyn Gizmo,
    pub debug: &'a DebugSettings,
}
