//! Headless reference world

use std::cell::Cell;
use std::collections::HashMap;

use spring_core::{IdGenerator, ObjectId};
use spring_math::ray_aabb;

use crate::body::{BodyDesc, SimBody};
use crate::config::SimConfig;
use crate::error::{PhysicsError, Result};
use crate::hinge::{HingeDesc, SimHinge};
use crate::query::{RayQuery, RaycastHit};
use crate::service::{HingeJoint, PhysicsWorld, RigidBody};

/// Minimal physics world: box bodies, velocity integration and
/// motor-driven hinges. No collision response.
pub struct SimWorld {
    config: SimConfig,
    ids: IdGenerator,
    bodies: HashMap<ObjectId, SimBody>,
    hinges: HashMap<ObjectId, SimHinge>,
    ray_casts: Cell<u64>,
    revision: u64,
}

impl SimWorld {
    pub fn new(config: SimConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ids: IdGenerator::new(),
            bodies: HashMap::new(),
            hinges: HashMap::new(),
            ray_casts: Cell::new(0),
            revision: 0,
        })
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn add_body(&mut self, desc: BodyDesc) -> ObjectId {
        let id = self.ids.next();
        log::trace!("Adding body {id} at {:?}", desc.position);
        self.bodies.insert(id, SimBody::from_desc(id, desc));
        self.revision += 1;
        id
    }

    /// Attach a hinge to an existing body; its current rotation becomes the rest pose
    pub fn attach_hinge(&mut self, owner: ObjectId, desc: HingeDesc) -> Result<()> {
        if desc.min_angle > desc.max_angle {
            return Err(PhysicsError::InvalidConfig(format!(
                "hinge min angle {} exceeds max angle {}",
                desc.min_angle, desc.max_angle
            )));
        }
        if self.hinges.contains_key(&owner) {
            return Err(PhysicsError::HingeExists(owner));
        }
        let body = self
            .bodies
            .get_mut(&owner)
            .ok_or(PhysicsError::BodyNotFound(owner))?;

        let hinge = SimHinge::new(owner, body.rotation, &desc);
        body.rotation = hinge.owner_rotation();
        self.hinges.insert(owner, hinge);
        self.revision += 1;
        Ok(())
    }

    pub fn remove_body(&mut self, id: ObjectId) -> bool {
        self.hinges.remove(&id);
        let removed = self.bodies.remove(&id).is_some();
        if removed {
            log::trace!("Removed body {id}");
            self.revision += 1;
        }
        removed
    }

    pub fn sim_body(&self, id: ObjectId) -> Option<&SimBody> {
        self.bodies.get(&id)
    }

    /// Direct access for scripted scenes; counts as a change to the world
    pub fn sim_body_mut(&mut self, id: ObjectId) -> Option<&mut SimBody> {
        self.revision += 1;
        self.bodies.get_mut(&id)
    }

    pub fn sim_hinge_mut(&mut self, id: ObjectId) -> Option<&mut SimHinge> {
        self.hinges.get_mut(&id)
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Number of ray casts actually performed
    pub fn ray_cast_count(&self) -> u64 {
        self.ray_casts.get()
    }

    /// Advance the simulation
    pub fn step(&mut self, dt: f32) {
        let keep = (1.0 - self.config.linear_damping * dt).max(0.0);
        let mut moved = false;
        for body in self.bodies.values_mut().filter(|b| !b.is_static) {
            let before = body.position.to_bits();
            body.position += body.velocity * dt;
            body.velocity *= keep;
            moved |= body.position.to_bits() != before;
        }

        for hinge in self.hinges.values_mut() {
            hinge.integrate(dt, self.config.hinge_motor_speed, self.config.hinge_damping);
            if let Some(body) = self.bodies.get_mut(&hinge.owner) {
                let rotation = hinge.owner_rotation();
                moved |= rotation.to_bits() != body.rotation.to_bits();
                body.rotation = rotation;
            }
        }

        if moved {
            self.revision += 1;
        }
    }
}

impl Default for SimWorld {
    fn default() -> Self {
        Self {
            config: SimConfig::default(),
            ids: IdGenerator::new(),
            bodies: HashMap::new(),
            hinges: HashMap::new(),
            ray_casts: Cell::new(0),
            revision: 0,
        }
    }
}

impl PhysicsWorld for SimWorld {
    fn raycast(&self, query: &RayQuery) -> Option<RaycastHit> {
        self.ray_casts.set(self.ray_casts.get() + 1);

        let ray = query.ray();
        if !ray.is_valid() {
            return None;
        }

        self.bodies
            .values()
            .filter(|body| !(query.ignore_static && body.is_static))
            .filter(|body| query.tag.map_or(true, |tag| body.has_tag(tag)))
            .filter_map(|body| {
                let distance = ray_aabb(&ray, &body.bounds())?;
                (distance <= query.max_distance).then_some((distance, body.id))
            })
            // ties go to the older object so results never depend on map order
            .min_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)))
            .map(|(distance, object)| RaycastHit {
                object,
                point: ray.at(distance),
                distance,
            })
    }

    fn body(&self, id: ObjectId) -> Option<&dyn RigidBody> {
        self.bodies.get(&id).map(|b| b as &dyn RigidBody)
    }

    fn body_mut(&mut self, id: ObjectId) -> Option<&mut dyn RigidBody> {
        // smooth_rotate turns the body immediately
        self.revision += 1;
        self.bodies.get_mut(&id).map(|b| b as &mut dyn RigidBody)
    }

    fn revision(&self) -> u64 {
        self.revision
    }

    fn hinge(&self, id: ObjectId) -> Option<&dyn HingeJoint> {
        self.hinges.get(&id).map(|h| h as &dyn HingeJoint)
    }

    fn hinge_mut(&mut self, id: ObjectId) -> Option<&mut dyn HingeJoint> {
        self.hinges.get_mut(&id).map(|h| h as &mut dyn HingeJoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hinge::HingeMotor;
    use approx::assert_relative_eq;
    use spring_core::Tag;
    use spring_math::{Quat, Vec3};

    fn world() -> SimWorld {
        SimWorld::new(SimConfig::frictionless()).unwrap()
    }

    fn forward_ray(max: f32) -> RayQuery {
        RayQuery::new(Vec3::ZERO, Vec3::NEG_Z, max)
    }

    #[test]
    fn test_raycast_returns_nearest() {
        let mut w = world();
        let far = w.add_body(BodyDesc::dynamic().with_position(Vec3::new(0.0, 0.0, -10.0)));
        let near = w.add_body(BodyDesc::dynamic().with_position(Vec3::new(0.0, 0.0, -4.0)));

        let hit = w.raycast(&forward_ray(100.0)).unwrap();
        assert_eq!(hit.object, near);
        assert_relative_eq!(hit.distance, 3.5, epsilon = 1e-5);
        assert_ne!(hit.object, far);
        assert_eq!(w.ray_cast_count(), 1);
    }

    #[test]
    fn test_raycast_respects_range() {
        let mut w = world();
        w.add_body(BodyDesc::dynamic().with_position(Vec3::new(0.0, 0.0, -10.0)));
        assert!(w.raycast(&forward_ray(5.0)).is_none());
    }

    #[test]
    fn test_raycast_ignore_static() {
        let mut w = world();
        w.add_body(BodyDesc::fixed().with_position(Vec3::new(0.0, 0.0, -2.0)));
        let behind = w.add_body(BodyDesc::dynamic().with_position(Vec3::new(0.0, 0.0, -6.0)));

        let hit = w.raycast(&forward_ray(100.0).with_ignore_static(true)).unwrap();
        assert_eq!(hit.object, behind);
        assert_ne!(w.raycast(&forward_ray(100.0)).unwrap().object, behind);
    }

    #[test]
    fn test_raycast_tag_filter() {
        let mut w = world();
        w.add_body(BodyDesc::dynamic().with_position(Vec3::new(0.0, 0.0, -2.0)));
        let tagged = w.add_body(
            BodyDesc::dynamic()
                .with_position(Vec3::new(0.0, 0.0, -6.0))
                .with_tag(Tag::Grabbable),
        );
        let hit = w.raycast(&forward_ray(100.0).with_tag(Some(Tag::Grabbable))).unwrap();
        assert_eq!(hit.object, tagged);
    }

    #[test]
    fn test_step_integrates_velocity() {
        let mut w = world();
        let id = w.add_body(BodyDesc::dynamic());
        w.body_mut(id).unwrap().set_velocity(Vec3::new(1.0, 0.0, 0.0));
        w.step(0.5);
        assert_relative_eq!(w.body(id).unwrap().position().x, 0.5, epsilon = 1e-6);
    }

    #[test]
    fn test_hinge_turns_owner() {
        let mut w = world();
        let door = w.add_body(BodyDesc::dynamic());
        w.attach_hinge(door, HingeDesc::new(-90.0, 90.0)).unwrap();
        {
            let hinge = w.hinge_mut(door).unwrap();
            hinge.set_motor(HingeMotor::TargetAngle);
            hinge.set_target_angle(90.0);
        }
        for _ in 0..50 {
            w.step(0.02);
        }
        assert_relative_eq!(w.hinge(door).unwrap().angle(), 90.0, epsilon = 1e-3);
        let expected = Quat::from_rotation_y(spring_math::radians(90.0));
        assert!(w.body(door).unwrap().rotation().angle_between(expected) < 1e-2);
    }

    #[test]
    fn test_revision_tracks_movement() {
        let mut w = world();
        let id = w.add_body(BodyDesc::dynamic());
        let added = w.revision();

        w.step(0.02);
        assert_eq!(w.revision(), added);

        w.body_mut(id).unwrap().set_velocity(Vec3::new(1.0, 0.0, 0.0));
        let pushed = w.revision();
        w.step(0.02);
        assert!(w.revision() > pushed);

        let moved = w.revision();
        assert!(w.remove_body(id));
        assert!(w.revision() > moved);
        let removed = w.revision();
        assert!(!w.remove_body(id));
        assert_eq!(w.revision(), removed);
    }

    #[test]
    fn test_attach_hinge_errors() {
        let mut w = world();
        let missing = ObjectId::new(99, 0);
        assert!(matches!(
            w.attach_hinge(missing, HingeDesc::default()),
            Err(PhysicsError::BodyNotFound(_))
        ));

        let door = w.add_body(BodyDesc::dynamic());
        w.attach_hinge(door, HingeDesc::default()).unwrap();
        assert!(matches!(
            w.attach_hinge(door, HingeDesc::default()),
            Err(PhysicsError::HingeExists(_))
        ));
        let other = w.add_body(BodyDesc::dynamic());
        assert!(matches!(
            w.attach_hinge(other, HingeDesc::new(10.0, -10.0)),
            Err(PhysicsError::InvalidConfig(_))
        ));
    }
}
