//! Reference world configuration

use serde::{Deserialize, Serialize};

/// [`SimWorld`](crate::SimWorld) tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Fraction of linear velocity lost per second
    pub linear_damping: f32,

    /// Fraction of free hinge angular velocity lost per second
    pub hinge_damping: f32,

    /// Top speed of a hinge motor, degrees per second
    pub hinge_motor_speed: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            linear_damping: 4.0,
            hinge_damping: 5.0,
            hinge_motor_speed: 180.0,
        }
    }
}

impl SimConfig {
    /// No damping at all, bodies keep whatever velocity they are given
    pub fn frictionless() -> Self {
        Self {
            linear_damping: 0.0,
            hinge_damping: 0.0,
            ..Default::default()
        }
    }

    pub fn with_hinge_motor_speed(mut self, degrees_per_second: f32) -> Self {
        self.hinge_motor_speed = degrees_per_second;
        self
    }

    pub(crate) fn validate(&self) -> crate::Result<()> {
        if self.hinge_motor_speed <= 0.0 {
            return Err(crate::PhysicsError::InvalidConfig(format!(
                "hinge_motor_speed must be positive, got {}",
                self.hinge_motor_speed
            )));
        }
        if self.linear_damping < 0.0 || self.hinge_damping < 0.0 {
            return Err(crate::PhysicsError::InvalidConfig(
                "damping must not be negative".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(SimConfig::default().validate().is_ok());
        assert!(SimConfig::frictionless().validate().is_ok());
    }

    #[test]
    fn test_rejects_stalled_motor() {
        let config = SimConfig::default().with_hinge_motor_speed(0.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: SimConfig = serde_json::from_str(r#"{ "linear_damping": 1.0 }"#).unwrap();
        assert_eq!(config.linear_damping, 1.0);
        assert_eq!(config.hinge_motor_speed, 180.0);
    }
}
