//! Grabbing physics objects
//!
//! The [`GrabController`] never casts its own ray. [`Grabbable`] behaviours
//! on looked-at objects offer themselves as the candidate, and the controller
//! picks the candidate up on the grab input.
//!
//! While held, the object is pulled toward a point at the grab-time distance
//! along the look direction, and turned by however much the camera has
//! yawed since the grab. A "reset rotation" input realigns it with the camera.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use spring_core::{InputAction, ObjectId};
use spring_debug::SpringGizmo;
use spring_hud::Localiser;
use spring_math::{degrees, Quat, Vec3};
use spring_physics::RigidBody;

use crate::context::{FrameContext, StepContext, Viewpoint};
use crate::event::InteractEvent;
use crate::interactable::Interactable;

/// Grab tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrabConfig {
    /// Velocity per metre of position error
    pub force: f32,
    /// Position error below which no correction is applied
    pub min_force_distance: f32,
    /// Candidates farther than this cannot be picked up
    pub max_distance: f32,
    /// Angular damping while held
    pub grabbed_angular_damping: f32,
    /// Rotation interpolation rate, per second
    pub rotation_rate: f32,
    /// Realigning ends below this angle
    pub realign_threshold_degrees: f32,
}

impl Default for GrabConfig {
    fn default() -> Self {
        Self {
            force: 100.0,
            min_force_distance: 1.0,
            max_distance: 100.0,
            grabbed_angular_damping: 20.0,
            rotation_rate: 10.0,
            realign_threshold_degrees: 2.0,
        }
    }
}

impl GrabConfig {
    pub fn with_force(mut self, force: f32) -> Self {
        self.force = force;
        self
    }

    pub fn with_min_force_distance(mut self, distance: f32) -> Self {
        self.min_force_distance = distance;
        self
    }

    pub fn with_max_distance(mut self, distance: f32) -> Self {
        self.max_distance = distance;
        self
    }

    pub fn with_rotation_rate(mut self, rate: f32) -> Self {
        self.rotation_rate = rate;
        self
    }
}

/// Grab state machine phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GrabPhase {
    #[default]
    Idle,
    Holding,
    /// Turning the held object to face the camera
    Realigning,
}

/// Object offered for grabbing by a [`Grabbable`]
#[derive(Debug, Clone, Copy, PartialEq)]
struct Candidate {
    object: ObjectId,
    resettable: bool,
    distance: f32,
}

/// Everything captured at grab time
#[derive(Debug, Clone, Copy)]
struct Held {
    object: ObjectId,
    resettable: bool,
    cached_angular_damping: f32,
    start_rotation: Quat,
    /// Camera rotation with pitch zeroed
    start_camera: Quat,
    hold_distance: f32,
}

/// Picks up, carries and drops one physics object at a time
///
/// `held` is set exactly when the phase is not [`GrabPhase::Idle`].
#[derive(Debug, Default)]
pub struct GrabController {
    config: GrabConfig,
    phase: GrabPhase,
    candidate: Option<Candidate>,
    held: Option<Held>,
    desired_position: Option<Vec3>,
    desired_rotation: Option<Quat>,
}

impl GrabController {
    pub fn new(config: GrabConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn config(&self) -> &GrabConfig {
        &self.config
    }

    pub fn phase(&self) -> GrabPhase {
        self.phase
    }

    /// Held object, if any
    pub fn held(&self) -> Option<ObjectId> {
        self.held.map(|h| h.object)
    }

    /// Object currently offered for grabbing
    pub fn candidate(&self) -> Option<ObjectId> {
        self.candidate.map(|c| c.object)
    }

    /// Distance captured at grab time
    pub fn hold_distance(&self) -> Option<f32> {
        self.held.map(|h| h.hold_distance)
    }

    /// Where the held object was last pulled toward
    pub fn desired_position(&self) -> Option<Vec3> {
        self.desired_position
    }

    /// Rotation the held object was last turned toward
    pub fn desired_rotation(&self) -> Option<Quat> {
        self.desired_rotation
    }

    /// Offer (or refresh) a candidate `distance` away from the eye
    pub fn offer_candidate(&mut self, object: ObjectId, resettable: bool, distance: f32) {
        self.candidate = Some(Candidate {
            object,
            resettable,
            distance,
        });
    }

    /// Withdraw `object` if it is the current candidate
    pub fn withdraw_candidate(&mut self, object: ObjectId) {
        if self.candidate.is_some_and(|c| c.object == object) {
            self.candidate = None;
        }
    }

    /// Candidate that could be picked up right now
    fn grabbable_candidate(&self, viewpoint: &Viewpoint) -> Option<Candidate> {
        self.candidate.filter(|c| {
            c.distance <= self.config.max_distance && !viewpoint.is_standing_on(c.object)
        })
    }

    fn held_state(&self) -> Held {
        match self.held {
            Some(held) => held,
            None => panic!("grab controller is {:?} without a held object", self.phase),
        }
    }

    /// Physics-step update
    pub fn fixed_update(&mut self, ctx: &mut StepContext<'_>) {
        match self.phase {
            GrabPhase::Idle => {
                if ctx.input.pressed(InputAction::Grab) {
                    if let Some(candidate) = self.grabbable_candidate(ctx.viewpoint) {
                        self.grab(candidate, ctx);
                    }
                }
            }
            GrabPhase::Holding | GrabPhase::Realigning => {
                let held = self.held_state();
                if ctx.input.pressed(InputAction::Grab) || ctx.viewpoint.is_standing_on(held.object) {
                    self.drop_held(ctx);
                    return;
                }

                if self.phase == GrabPhase::Holding
                    && held.resettable
                    && ctx.input.pressed(InputAction::ResetGrabbedRotation)
                {
                    log::debug!("Realigning {}", held.object);
                    self.phase = GrabPhase::Realigning;
                }

                self.update_hold(ctx);
            }
        }
    }

    fn grab(&mut self, candidate: Candidate, ctx: &mut StepContext<'_>) {
        assert!(
            self.held.is_none(),
            "grab of {} while already holding {:?}",
            candidate.object,
            self.held()
        );

        let eye = ctx.viewpoint.eye_position;
        let start_camera = ctx.viewpoint.eye_angles.with_pitch(0.0).to_quat();
        let body = must_get_body(ctx, candidate.object);

        let cached_angular_damping = body.angular_damping();
        body.set_angular_damping(self.config.grabbed_angular_damping);

        let held = Held {
            object: candidate.object,
            resettable: candidate.resettable,
            cached_angular_damping,
            start_rotation: body.rotation(),
            start_camera,
            hold_distance: eye.distance(body.position()),
        };

        log::debug!(
            "Grabbed {} at {:.2}m (damping {} -> {})",
            held.object,
            held.hold_distance,
            cached_angular_damping,
            self.config.grabbed_angular_damping
        );

        self.held = Some(held);
        self.phase = GrabPhase::Holding;
    }

    fn drop_held(&mut self, ctx: &mut StepContext<'_>) {
        let held = self.held_state();
        must_get_body(ctx, held.object).set_angular_damping(held.cached_angular_damping);
        log::debug!("Dropped {}", held.object);

        self.held = None;
        self.phase = GrabPhase::Idle;
        self.desired_position = None;
        self.desired_rotation = None;
    }

    fn update_hold(&mut self, ctx: &mut StepContext<'_>) {
        let mut held = self.held_state();
        let viewpoint = *ctx.viewpoint;
        let camera = viewpoint.eye_angles.with_pitch(0.0).to_quat();
        let desired_position =
            viewpoint.eye_position + viewpoint.forward() * held.hold_distance;

        let desired_rotation = match self.phase {
            GrabPhase::Realigning => camera,
            _ => (camera * held.start_camera.inverse()) * held.start_rotation,
        };

        let dt = ctx.time.delta;
        let config = &self.config;
        let body = must_get_body(ctx, held.object);
        let position = body.position();
        let error = desired_position - position;
        if error.length() > config.min_force_distance {
            body.set_velocity(error * config.force);
        }
        body.smooth_rotate(desired_rotation, config.rotation_rate, dt);
        let remaining = degrees(body.rotation().angle_between(desired_rotation));

        ctx.gizmo
            .draw_line(position, desired_position, &ctx.debug.grabbed_force);

        if self.phase == GrabPhase::Realigning && remaining < config.realign_threshold_degrees {
            // rebase so the object keeps its new orientation relative to the camera
            held.start_rotation = desired_rotation;
            held.start_camera = camera;
            self.held = Some(held);
            self.phase = GrabPhase::Holding;
            log::debug!("Realigned {}", held.object);
        }

        self.desired_position = Some(desired_position);
        self.desired_rotation = Some(desired_rotation);
    }

    /// Render-frame update: highlight and prompts. Never changes grab state.
    pub fn update(&self, ctx: &mut FrameContext<'_>) {
        match self.held {
            None => {
                let candidate = self.grabbable_candidate(ctx.viewpoint);
                if let Some(bounds) = candidate.and_then(|c| ctx.physics.body(c.object)).map(|b| b.bounds()) {
                    ctx.gizmo.draw_line_bbox(&bounds, &ctx.debug.grabbable);
                }

                ctx.prompts
                    .set_prompt_visible(InputAction::Grab, candidate.is_some());
                if candidate.is_some() {
                    ctx.prompts.set_text_override(
                        InputAction::Grab,
                        ctx.strings.get(Localiser::ACTION_GRAB),
                    );
                }
                ctx.prompts
                    .set_prompt_visible(InputAction::ResetGrabbedRotation, false);
            }
            Some(held) => {
                if let Some(body) = ctx.physics.body(held.object) {
                    ctx.gizmo.draw_line_bbox(&body.bounds(), &ctx.debug.grabbed);
                }

                ctx.prompts.set_prompt_visible(InputAction::Grab, true);
                ctx.prompts
                    .set_text_override(InputAction::Grab, ctx.strings.get(Localiser::ACTION_DROP));
                ctx.prompts
                    .set_prompt_visible(InputAction::ResetGrabbedRotation, held.resettable);
                if held.resettable {
                    ctx.prompts.set_text_override(
                        InputAction::ResetGrabbedRotation,
                        ctx.strings.get(Localiser::ACTION_RESET_ROTATION),
                    );
                }
            }
        }
    }
}

fn must_get_body<'c>(ctx: &'c mut StepContext<'_>, object: ObjectId) -> &'c mut dyn RigidBody {
    match ctx.physics.body_mut(object) {
        Some(body) => body,
        None => panic!("grabbed object {object} has no rigid body"),
    }
}

/// Marks an object as grabbable by a shared [`GrabController`]
pub struct Grabbable {
    controller: Rc<RefCell<GrabController>>,
    /// Whether "reset rotation" may realign this object
    resettable: bool,
}

impl Grabbable {
    pub fn new(controller: Rc<RefCell<GrabController>>, resettable: bool) -> Self {
        Self {
            controller,
            resettable,
        }
    }
}

/// Range from the eye, the same measure the hold distance uses
fn eye_distance(event: &InteractEvent, ctx: &StepContext<'_>) -> f32 {
    ctx.physics
        .body(event.interactee)
        .map_or(event.distance, |body| {
            ctx.viewpoint.eye_position.distance(body.position())
        })
}

impl Interactable for Grabbable {
    fn on_look_start(&mut self, event: &InteractEvent, ctx: &mut StepContext<'_>) {
        let distance = eye_distance(event, ctx);
        self.controller
            .borrow_mut()
            .offer_candidate(event.interactee, self.resettable, distance);
    }

    fn on_look_fixed_update(&mut self, event: &InteractEvent, ctx: &mut StepContext<'_>) {
        let distance = eye_distance(event, ctx);
        self.controller
            .borrow_mut()
            .offer_candidate(event.interactee, self.resettable, distance);
    }

    fn on_look_end(&mut self, event: &InteractEvent, _ctx: &mut StepContext<'_>) {
        self.controller.borrow_mut().withdraw_candidate(event.interactee);
    }
}
