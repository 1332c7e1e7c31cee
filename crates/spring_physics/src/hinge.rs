//! Hinge joints of the reference world

use spring_core::ObjectId;
use spring_math::Quat;

use crate::service::HingeJoint;

/// Hinge actuation mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HingeMotor {
    /// Joint swings freely
    #[default]
    Disabled,
    /// Joint is driven toward its target angle
    TargetAngle,
}

/// Description for attaching a hinge to a body
#[derive(Debug, Clone, PartialEq)]
pub struct HingeDesc {
    pub min_angle: f32,
    pub max_angle: f32,
    pub angle: f32,
}

impl Default for HingeDesc {
    fn default() -> Self {
        Self {
            min_angle: -90.0,
            max_angle: 90.0,
            angle: 0.0,
        }
    }
}

impl HingeDesc {
    pub fn new(min_angle: f32, max_angle: f32) -> Self {
        Self {
            min_angle,
            max_angle,
            angle: 0.0,
        }
    }

    pub fn with_angle(mut self, angle: f32) -> Self {
        self.angle = angle;
        self
    }
}

/// A vertical (Y axis) hinge owned by [`SimWorld`](crate::SimWorld)
///
/// The owning body's rotation is its rest rotation turned by the hinge angle.
#[derive(Debug, Clone)]
pub struct SimHinge {
    pub(crate) owner: ObjectId,
    pub(crate) rest_rotation: Quat,
    pub(crate) angle: f32,
    pub(crate) min_angle: f32,
    pub(crate) max_angle: f32,
    pub(crate) motor: HingeMotor,
    pub(crate) target_angle: f32,
    pub(crate) angular_velocity: f32,
}

impl SimHinge {
    pub(crate) fn new(owner: ObjectId, rest_rotation: Quat, desc: &HingeDesc) -> Self {
        let angle = desc.angle.clamp(desc.min_angle, desc.max_angle);
        Self {
            owner,
            rest_rotation,
            angle,
            min_angle: desc.min_angle,
            max_angle: desc.max_angle,
            motor: HingeMotor::Disabled,
            target_angle: angle,
            angular_velocity: 0.0,
        }
    }

    #[inline]
    pub fn owner(&self) -> ObjectId {
        self.owner
    }

    /// Push the hinge by hand, as a player shoving a free door would
    pub fn push(&mut self, angular_velocity: f32) {
        self.angular_velocity += angular_velocity;
    }

    /// Advance the joint by `dt` seconds
    pub(crate) fn integrate(&mut self, dt: f32, motor_speed: f32, damping: f32) {
        if dt <= 0.0 {
            return;
        }
        let previous = self.angle;
        match self.motor {
            HingeMotor::TargetAngle => {
                let target = self.target_angle.clamp(self.min_angle, self.max_angle);
                let max_step = motor_speed * dt;
                self.angle += (target - self.angle).clamp(-max_step, max_step);
            }
            HingeMotor::Disabled => {
                self.angular_velocity *= (1.0 - damping * dt).max(0.0);
                self.angle += self.angular_velocity * dt;
            }
        }
        self.angle = self.angle.clamp(self.min_angle, self.max_angle);
        self.angular_velocity = (self.angle - previous) / dt;
    }

    /// Owner rotation for the current angle
    pub(crate) fn owner_rotation(&self) -> Quat {
        self.rest_rotation * Quat::from_rotation_y(spring_math::radians(self.angle))
    }
}

impl HingeJoint for SimHinge {
    fn angle(&self) -> f32 {
        self.angle
    }

    fn min_angle(&self) -> f32 {
        self.min_angle
    }

    fn max_angle(&self) -> f32 {
        self.max_angle
    }

    fn motor(&self) -> HingeMotor {
        self.motor
    }

    fn set_motor(&mut self, motor: HingeMotor) {
        self.motor = motor;
    }

    fn target_angle(&self) -> f32 {
        self.target_angle
    }

    fn set_target_angle(&mut self, angle: f32) {
        self.target_angle = angle;
    }

    fn angular_velocity(&self) -> f32 {
        self.angular_velocity
    }
}
