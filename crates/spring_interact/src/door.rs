//! Hinged doors
//!
//! A door is a body on a hinge. Activating it picks a swing direction from
//! where the activator stands, then drives the hinge motor until the door
//! has both moved for a minimum time and come to rest.

use serde::{Deserialize, Serialize};
use spring_core::{InputAction, ObjectId};
use spring_hud::Localiser;
use spring_math::{degrees, Vec3};
use spring_physics::{HingeJoint, HingeMotor, PhysicsWorld};

use crate::context::{FrameContext, StepContext};
use crate::event::InteractEvent;
use crate::interactable::Interactable;

/// Door tuning. Angles are degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DoorConfig {
    pub open_out_angle: f32,
    pub closed_angle: f32,
    pub open_in_angle: f32,
    /// Hinge angles within this of zero count as closed
    pub closed_threshold_angle: f32,
    /// Hinge speed in degrees per second below which the door is at rest.
    /// Defaults to 0.1 rad/s.
    pub stopped_velocity: f32,
    /// Seconds a motion must run before it can complete
    pub min_duration: f32,
    /// Never settle on its own
    pub sticky: bool,
    /// Always open outward
    pub mono_directional: bool,
    /// Local direction of the "out" side
    pub out_direction: Vec3,
}

impl Default for DoorConfig {
    fn default() -> Self {
        Self {
            open_out_angle: 90.0,
            closed_angle: 0.0,
            open_in_angle: -90.0,
            closed_threshold_angle: 2.0,
            stopped_velocity: degrees(0.1),
            min_duration: 0.1,
            sticky: false,
            mono_directional: false,
            out_direction: Vec3::NEG_X,
        }
    }
}

impl DoorConfig {
    pub fn with_sticky(mut self, sticky: bool) -> Self {
        self.sticky = sticky;
        self
    }

    pub fn with_mono_directional(mut self, mono_directional: bool) -> Self {
        self.mono_directional = mono_directional;
        self
    }

    pub fn with_min_duration(mut self, seconds: f32) -> Self {
        self.min_duration = seconds;
        self
    }

    pub fn with_out_direction(mut self, direction: Vec3) -> Self {
        self.out_direction = direction;
        self
    }
}

/// Door state machine phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DoorPhase {
    #[default]
    Closed,
    OpeningOut,
    OpeningIn,
    Closing,
    OpenOut,
    OpenIn,
}

impl DoorPhase {
    /// Whether the hinge is being driven
    pub fn is_moving(self) -> bool {
        matches!(self, Self::OpeningOut | Self::OpeningIn | Self::Closing)
    }

    /// Stable phase reached when this motion completes
    pub fn settled(self) -> Self {
        match self {
            Self::OpeningOut => Self::OpenOut,
            Self::OpeningIn => Self::OpenIn,
            Self::Closing => Self::Closed,
            stable => stable,
        }
    }
}

/// A hinged door
#[derive(Debug)]
pub struct Door {
    id: ObjectId,
    config: DoorConfig,
    phase: DoorPhase,
    /// Set only while moving
    motion_started: Option<f32>,
}

impl Door {
    pub fn new(id: ObjectId, config: DoorConfig) -> Self {
        Self {
            id,
            config,
            phase: DoorPhase::Closed,
            motion_started: None,
        }
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    pub fn config(&self) -> &DoorConfig {
        &self.config
    }

    pub fn phase(&self) -> DoorPhase {
        self.phase
    }

    /// When the current motion started
    pub fn motion_started(&self) -> Option<f32> {
        self.motion_started
    }

    fn hinge<'p>(&self, physics: &'p dyn PhysicsWorld) -> &'p dyn HingeJoint {
        physics
            .hinge(self.id)
            .unwrap_or_else(|| panic!("door {} has no hinge", self.id))
    }

    fn hinge_mut<'p>(&self, physics: &'p mut dyn PhysicsWorld) -> &'p mut dyn HingeJoint {
        physics
            .hinge_mut(self.id)
            .unwrap_or_else(|| panic!("door {} has no hinge", self.id))
    }

    /// Phase that activating the door from `activator` would start
    pub fn determine_direction(&self, physics: &dyn PhysicsWorld, activator: Vec3) -> DoorPhase {
        let angle = self.hinge(physics).angle();
        let threshold = self.config.closed_threshold_angle;

        if angle.abs() <= threshold {
            if self.config.mono_directional {
                return DoorPhase::OpeningOut;
            }
            let body = physics
                .body(self.id)
                .unwrap_or_else(|| panic!("door {} has no rigid body", self.id));
            let local = body.rotation().inverse().rotate(activator - body.position());
            if local.dot(self.config.out_direction) >= 0.0 {
                DoorPhase::OpeningOut
            } else {
                DoorPhase::OpeningIn
            }
        } else if angle > threshold {
            if angle > self.config.open_out_angle * 0.5 {
                DoorPhase::Closing
            } else {
                DoorPhase::OpeningOut
            }
        } else if angle < self.config.open_in_angle * 0.5 {
            DoorPhase::Closing
        } else {
            DoorPhase::OpeningIn
        }
    }

    /// Start a motion at time `now`
    pub fn activate(&mut self, phase: DoorPhase, now: f32) {
        assert!(phase.is_moving(), "door {} activated into stable phase {phase:?}", self.id);
        log::debug!("Door {} {:?} -> {:?}", self.id, self.phase, phase);
        self.phase = phase;
        self.motion_started = Some(now);
    }

    /// Hinge angle the current motion drives toward
    pub fn target_angle(&self) -> Option<f32> {
        match self.phase {
            DoorPhase::OpeningOut => Some(self.config.open_out_angle),
            DoorPhase::OpeningIn => Some(self.config.open_in_angle),
            DoorPhase::Closing => Some(self.config.closed_angle),
            _ => None,
        }
    }

    /// Physics-step update: drive the hinge and detect completion
    pub fn fixed_update(&mut self, ctx: &mut StepContext<'_>) {
        let Some(target) = self.target_angle() else {
            return;
        };
        let started = self
            .motion_started
            .unwrap_or_else(|| panic!("door {} is {:?} without a start time", self.id, self.phase));

        let hinge = self.hinge_mut(ctx.physics);
        hinge.set_motor(HingeMotor::TargetAngle);
        hinge.set_target_angle(target);

        if self.config.sticky {
            return;
        }

        let elapsed = ctx.time.since(started);
        if elapsed >= self.config.min_duration
            && hinge.angular_velocity().abs() < self.config.stopped_velocity
        {
            hinge.set_motor(HingeMotor::Disabled);
            let settled = self.phase.settled();
            log::debug!("Door {} {:?} -> {:?} after {elapsed:.2}s", self.id, self.phase, settled);
            self.phase = settled;
            self.motion_started = None;
        }
    }

    fn prompt_text<'s>(&self, physics: &dyn PhysicsWorld, activator: Vec3, strings: &'s Localiser) -> &'s str {
        match self.determine_direction(physics, activator) {
            DoorPhase::Closing => strings.get(Localiser::ACTION_CLOSE),
            _ => strings.get(Localiser::ACTION_OPEN),
        }
    }
}

impl Interactable for Door {
    fn on_look_start(&mut self, _event: &InteractEvent, ctx: &mut StepContext<'_>) {
        ctx.prompts.set_prompt_visible(InputAction::Use, true);
    }

    fn on_look_fixed_update(&mut self, event: &InteractEvent, ctx: &mut StepContext<'_>) {
        if ctx.input.pressed(InputAction::Use) {
            let phase = self.determine_direction(&*ctx.physics, event.interactor_position);
            self.activate(phase, ctx.time.now);
        }
    }

    fn on_look_update(&self, event: &InteractEvent, ctx: &mut FrameContext<'_>) {
        let text = self.prompt_text(ctx.physics, event.interactor_position, ctx.strings);
        ctx.prompts.set_text_override(InputAction::Use, text);
    }

    fn on_look_end(&mut self, _event: &InteractEvent, ctx: &mut StepContext<'_>) {
        ctx.prompts.set_prompt_visible(InputAction::Use, false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stopped_velocity_default_is_a_tenth_radian() {
        let stopped = DoorConfig::default().stopped_velocity;
        assert!((stopped - 5.729_578).abs() < 1e-4);
    }
    use spring_physics::{BodyDesc, HingeDesc, SimConfig, SimWorld};

    fn door_world(angle: f32) -> (SimWorld, ObjectId) {
        let mut world = SimWorld::new(SimConfig::default()).unwrap();
        let id = world.add_body(BodyDesc::dynamic().with_half_extents(Vec3::new(0.05, 1.0, 0.5)));
        world
            .attach_hinge(id, HingeDesc::new(-90.0, 90.0).with_angle(angle))
            .unwrap();
        world.step(0.02);
        (world, id)
    }

    #[test]
    fn test_closed_door_opens_away_from_activator() {
        let (world, id) = door_world(0.0);
        let door = Door::new(id, DoorConfig::default());

        let out_side = Vec3::new(-2.0, 0.0, 0.0);
        let in_side = Vec3::new(2.0, 0.0, 0.0);
        assert_eq!(door.determine_direction(&world, out_side), DoorPhase::OpeningOut);
        assert_eq!(door.determine_direction(&world, in_side), DoorPhase::OpeningIn);
    }

    #[test]
    fn test_mono_directional_always_opens_out() {
        let (world, id) = door_world(0.0);
        let door = Door::new(id, DoorConfig::default().with_mono_directional(true));
        assert_eq!(
            door.determine_direction(&world, Vec3::new(2.0, 0.0, 0.0)),
            DoorPhase::OpeningOut
        );
    }

    #[test]
    fn test_open_door_closes_past_half() {
        let door_at = |angle| {
            let (world, id) = door_world(angle);
            Door::new(id, DoorConfig::default()).determine_direction(&world, Vec3::ZERO)
        };
        assert_eq!(door_at(80.0), DoorPhase::Closing);
        assert_eq!(door_at(30.0), DoorPhase::OpeningOut);
        assert_eq!(door_at(-80.0), DoorPhase::Closing);
        assert_eq!(door_at(-30.0), DoorPhase::OpeningIn);
    }

    #[test]
    fn test_settled_phases() {
        assert_eq!(DoorPhase::Closing.settled(), DoorPhase::Closed);
        assert_eq!(DoorPhase::OpeningIn.settled(), DoorPhase::OpenIn);
        assert_eq!(DoorPhase::OpeningOut.settled(), DoorPhase::OpenOut);
        assert!(!DoorPhase::OpenOut.is_moving());
    }

    #[test]
    #[should_panic(expected = "stable phase")]
    fn test_activate_into_stable_phase_panics() {
        let mut door = Door::new(ObjectId::new(0, 0), DoorConfig::default());
        door.activate(DoorPhase::Closed, 0.0);
    }
}
