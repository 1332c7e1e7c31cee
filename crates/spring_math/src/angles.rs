//! Euler angles in degrees
//!
//! Gameplay code reasons about view direction as pitch/yaw/roll in degrees,
//! while physics works in quaternions. `Angles` converts between the two.

use crate::quaternion::Quat;
use crate::vector::Vec3;
use crate::radians;

/// Pitch/yaw/roll in degrees
///
/// Positive pitch looks up, positive yaw turns left (counter-clockwise
/// seen from above), roll is applied last.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Angles {
    pub pitch: f32,
    pub yaw: f32,
    pub roll: f32,
}

impl Angles {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    #[inline]
    pub const fn new(pitch: f32, yaw: f32, roll: f32) -> Self {
        Self { pitch, yaw, roll }
    }

    /// Yaw-only angles
    #[inline]
    pub const fn from_yaw(yaw: f32) -> Self {
        Self::new(0.0, yaw, 0.0)
    }

    /// Convert to a rotation (yaw, then pitch, then roll)
    pub fn to_quat(self) -> Quat {
        Quat::from_euler_yxz(radians(self.yaw), radians(self.pitch), radians(self.roll))
    }

    /// Copy with the pitch replaced
    #[inline]
    pub fn with_pitch(self, pitch: f32) -> Self {
        Self { pitch, ..self }
    }

    /// Copy with the yaw replaced
    #[inline]
    pub fn with_yaw(self, yaw: f32) -> Self {
        Self { yaw, ..self }
    }

    /// Copy with the roll replaced
    #[inline]
    pub fn with_roll(self, roll: f32) -> Self {
        Self { roll, ..self }
    }

    /// Direction these angles look along
    #[inline]
    pub fn forward(self) -> Vec3 {
        self.to_quat().forward()
    }
}

impl From<Angles> for Quat {
    fn from(angles: Angles) -> Self {
        angles.to_quat()
    }
}
