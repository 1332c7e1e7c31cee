//! Sweeping security cameras

use serde::{Deserialize, Serialize};
use spring_core::{ObjectId, Toggle};
use spring_physics::{HingeJoint, HingeMotor, PhysicsWorld};

/// Renders a camera's view into a named texture
pub trait FeedRenderer {
    fn render_to_texture(&mut self, camera: ObjectId, texture: &str, width: u32, height: u32);
}

/// Camera tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityCameraConfig {
    /// Sweep between the hinge limits
    pub animate: bool,
    pub texture_width: u32,
    pub texture_height: u32,
    /// Degrees from a limit at which the sweep turns around
    pub sweep_tolerance: f32,
}

impl Default for SecurityCameraConfig {
    fn default() -> Self {
        Self {
            animate: false,
            texture_width: 1280,
            texture_height: 720,
            sweep_tolerance: 2.0,
        }
    }
}

impl SecurityCameraConfig {
    pub fn with_animate(mut self, animate: bool) -> Self {
        self.animate = animate;
        self
    }

    pub fn with_texture_size(mut self, width: u32, height: u32) -> Self {
        self.texture_width = width;
        self.texture_height = height;
        self
    }
}

/// A camera on a hinge that renders into a texture every frame
#[derive(Debug)]
pub struct SecurityCamera {
    id: ObjectId,
    config: SecurityCameraConfig,
    texture_name: String,
    enabled: bool,
}

impl SecurityCamera {
    pub fn new(id: ObjectId, config: SecurityCameraConfig) -> Self {
        Self {
            id,
            config,
            texture_name: format!("SECURITY_CAM_{}_TEXTURE", id.to_bits()),
            enabled: true,
        }
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// Texture the feed is rendered into
    pub fn texture_name(&self) -> &str {
        &self.texture_name
    }

    fn hinge_mut<'p>(&self, physics: &'p mut dyn PhysicsWorld) -> &'p mut dyn HingeJoint {
        physics
            .hinge_mut(self.id)
            .unwrap_or_else(|| panic!("security camera {} has no hinge", self.id))
    }

    /// Point the sweep at the max limit and start the motor if animated
    pub fn awake(&mut self, physics: &mut dyn PhysicsWorld) {
        let animate = self.config.animate;
        let hinge = self.hinge_mut(physics);
        hinge.set_target_angle(hinge.max_angle());
        if animate {
            hinge.set_motor(HingeMotor::TargetAngle);
        }
    }

    /// Physics-step update: turn the sweep around at either limit
    pub fn fixed_update(&mut self, physics: &mut dyn PhysicsWorld) {
        if !self.enabled {
            return;
        }
        let tolerance = self.config.sweep_tolerance;
        let hinge = self.hinge_mut(physics);
        let angle = hinge.angle();
        if (angle - hinge.max_angle()).abs() <= tolerance {
            hinge.set_target_angle(hinge.min_angle());
        } else if (angle - hinge.min_angle()).abs() <= tolerance {
            hinge.set_target_angle(hinge.max_angle());
        }
    }

    /// Render-frame update: refresh the feed texture
    pub fn update(&self, renderer: &mut dyn FeedRenderer) {
        if !self.enabled {
            return;
        }
        renderer.render_to_texture(
            self.id,
            &self.texture_name,
            self.config.texture_width,
            self.config.texture_height,
        );
    }
}

impl Toggle for SecurityCamera {
    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spring_physics::{BodyDesc, HingeDesc, SimWorld};

    #[derive(Default)]
    struct Feeds(Vec<(ObjectId, String, u32, u32)>);

    impl FeedRenderer for Feeds {
        fn render_to_texture(&mut self, camera: ObjectId, texture: &str, width: u32, height: u32) {
            self.0.push((camera, texture.to_string(), width, height));
        }
    }

    fn camera_world() -> (SimWorld, ObjectId) {
        let mut world = SimWorld::default();
        let id = world.add_body(BodyDesc::dynamic());
        world.attach_hinge(id, HingeDesc::new(-45.0, 45.0)).unwrap();
        (world, id)
    }

    #[test]
    fn test_texture_name_uses_object_id() {
        let camera = SecurityCamera::new(ObjectId::new(7, 0), SecurityCameraConfig::default());
        assert_eq!(camera.texture_name(), "SECURITY_CAM_7_TEXTURE");
    }

    #[test]
    fn test_animated_camera_sweeps_between_limits() {
        let (mut world, id) = camera_world();
        let config = SecurityCameraConfig::default().with_animate(true);
        // the sweep turns around anywhere inside the tolerance of a limit
        let reach = 45.0 - config.sweep_tolerance;
        let mut camera = SecurityCamera::new(id, config);
        camera.awake(&mut world);
        assert_eq!(world.hinge(id).unwrap().target_angle(), 45.0);

        let mut targets = vec![45.0];
        let mut extremes = (0.0f32, 0.0f32);
        for _ in 0..200 {
            camera.fixed_update(&mut world);
            let target = world.hinge(id).unwrap().target_angle();
            if targets.last() != Some(&target) {
                targets.push(target);
            }
            world.step(0.02);
            let angle = world.hinge(id).unwrap().angle();
            extremes = (extremes.0.min(angle), extremes.1.max(angle));
        }

        assert_eq!(targets[..3], [45.0, -45.0, 45.0]);
        assert!(extremes.1 >= reach && extremes.0 <= -reach);
        assert!(extremes.1 <= 45.0 && extremes.0 >= -45.0);
    }

    #[test]
    fn test_still_camera_does_not_move() {
        let (mut world, id) = camera_world();
        let mut camera = SecurityCamera::new(id, SecurityCameraConfig::default());
        camera.awake(&mut world);
        for _ in 0..10 {
            camera.fixed_update(&mut world);
            world.step(0.02);
        }
        assert_eq!(world.hinge(id).unwrap().angle(), 0.0);
    }

    #[test]
    fn test_disabled_camera_renders_nothing() {
        let mut camera = SecurityCamera::new(ObjectId::new(1, 0), SecurityCameraConfig::default());
        let mut feeds = Feeds::default();
        camera.update(&mut feeds);
        camera.set_enabled(false);
        camera.update(&mut feeds);
        assert_eq!(feeds.0, vec![(ObjectId::new(1, 0), "SECURITY_CAM_1_TEXTURE".into(), 1280, 720)]);
    }
}
