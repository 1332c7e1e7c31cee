//! Quaternion for 3D rotations

use crate::vector::Vec3;
use core::ops::{Mul, MulAssign};

/// Quaternion representing a 3D rotation
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Quat {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Quat {
    /// Identity quaternion (no rotation)
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Create a new quaternion
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Create from axis and angle (radians)
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        let half = angle * 0.5;
        let (sin, cos) = half.sin_cos();
        let axis = axis.normalize();
        Self::new(axis.x * sin, axis.y * sin, axis.z * sin, cos)
    }

    /// Create from Euler angles (radians, YXZ order - common for cameras)
    /// y = yaw, x = pitch, z = roll
    pub fn from_euler_yxz(y: f32, x: f32, z: f32) -> Self {
        let (sx, cx) = (x * 0.5).sin_cos();
        let (sy, cy) = (y * 0.5).sin_cos();
        let (sz, cz) = (z * 0.5).sin_cos();

        Self::new(
            cy * sx * cz + sy * cx * sz,
            sy * cx * cz - cy * sx * sz,
            cy * cx * sz - sy * sx * cz,
            cy * cx * cz + sy * sx * sz,
        )
    }

    /// Create from rotation around X axis
    #[inline]
    pub fn from_rotation_x(angle: f32) -> Self {
        let half = angle * 0.5;
        Self::new(half.sin(), 0.0, 0.0, half.cos())
    }

    /// Create from rotation around Y axis
    #[inline]
    pub fn from_rotation_y(angle: f32) -> Self {
        let half = angle * 0.5;
        Self::new(0.0, half.sin(), 0.0, half.cos())
    }

    /// Create from rotation around Z axis
    #[inline]
    pub fn from_rotation_z(angle: f32) -> Self {
        let half = angle * 0.5;
        Self::new(0.0, 0.0, half.sin(), half.cos())
    }

    #[inline]
    pub fn length_squared(self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    #[inline]
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len > 0.0 {
            Self::new(self.x / len, self.y / len, self.z / len, self.w / len)
        } else {
            Self::IDENTITY
        }
    }

    /// Conjugate (inverse for unit quaternions)
    #[inline]
    pub fn conjugate(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    #[inline]
    pub fn inverse(self) -> Self {
        let len_sq = self.length_squared();
        if len_sq > 0.0 {
            let inv = 1.0 / len_sq;
            Self::new(-self.x * inv, -self.y * inv, -self.z * inv, self.w * inv)
        } else {
            Self::IDENTITY
        }
    }

    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Angle in radians of the rotation that takes `self` to `other`
    pub fn angle_between(self, other: Self) -> f32 {
        let dot = self.normalize().dot(other.normalize()).abs().min(1.0);
        2.0 * dot.acos()
    }

    /// Spherical linear interpolation
    pub fn slerp(self, other: Self, t: f32) -> Self {
        let mut dot = self.dot(other);
        let mut other = other;

        // Shortest path
        const EPSILON: f32 = 1e-6;
        if dot < -EPSILON {
            other = Self::new(-other.x, -other.y, -other.z, -other.w);
            dot = -dot;
        }

        dot = dot.clamp(-1.0, 1.0);

        // Nearly identical, fall back to lerp
        if dot > 0.9995 {
            return Self::new(
                self.x + (other.x - self.x) * t,
                self.y + (other.y - self.y) * t,
                self.z + (other.z - self.z) * t,
                self.w + (other.w - self.w) * t,
            )
            .normalize();
        }

        let theta = dot.acos();
        let sin_theta = theta.sin();
        let s1 = ((1.0 - t) * theta).sin() / sin_theta;
        let s2 = (t * theta).sin() / sin_theta;

        Self::new(
            self.x * s1 + other.x * s2,
            self.y * s1 + other.y * s2,
            self.z * s1 + other.z * s2,
            self.w * s1 + other.w * s2,
        )
    }

    /// Rotate a vector
    pub fn rotate(self, v: Vec3) -> Vec3 {
        let qv = Vec3::new(self.x, self.y, self.z);
        let uv = qv.cross(v);
        let uuv = qv.cross(uv);
        v + (uv * self.w + uuv) * 2.0
    }

    /// Forward direction (-Z rotated)
    #[inline]
    pub fn forward(self) -> Vec3 {
        self.rotate(Vec3::NEG_Z)
    }

    /// Right direction (+X rotated)
    #[inline]
    pub fn right(self) -> Vec3 {
        self.rotate(Vec3::X)
    }

    /// Up direction (+Y rotated)
    #[inline]
    pub fn up(self) -> Vec3 {
        self.rotate(Vec3::Y)
    }

    /// Raw bit patterns of the components, for exact equality checks
    #[inline]
    pub fn to_bits(self) -> [u32; 4] {
        [self.x.to_bits(), self.y.to_bits(), self.z.to_bits(), self.w.to_bits()]
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Quat {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
            self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        )
    }
}

impl MulAssign for Quat {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Mul<Vec3> for Quat {
    type Output = Vec3;

    fn mul(self, rhs: Vec3) -> Vec3 {
        self.rotate(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use core::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_quaternion_identity() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert!((Quat::IDENTITY * v - v).length() < 1e-6);
    }

    #[test]
    fn test_quaternion_rotation_y() {
        let q = Quat::from_rotation_y(FRAC_PI_2);
        assert!((q * Vec3::X - Vec3::NEG_Z).length() < 1e-5);
    }

    #[test]
    fn test_forward_is_negative_z() {
        assert!((Quat::IDENTITY.forward() - Vec3::NEG_Z).length() < 1e-6);
        let yawed = Quat::from_rotation_y(FRAC_PI_2);
        assert!((yawed.forward() - Vec3::NEG_X).length() < 1e-5);
    }

    #[test]
    fn test_angle_between() {
        let a = Quat::IDENTITY;
        let b = Quat::from_rotation_y(FRAC_PI_2);
        assert_relative_eq!(a.angle_between(b), FRAC_PI_2, epsilon = 1e-4);
        assert!(b.angle_between(b) < 1e-2);
    }

    #[test]
    fn test_quaternion_slerp() {
        let q1 = Quat::IDENTITY;
        let q2 = Quat::from_rotation_y(PI);
        let mid = q1.slerp(q2, 0.5);
        let expected = Quat::from_rotation_y(FRAC_PI_2);
        assert!(mid.dot(expected).abs() > 0.999);
    }
}
