//! Headless scene runner
//!
//! Builds a [`SimWorld`] and an [`InteractionLoop`] from a [`Scene`], then
//! drives both through the scripted timeline: one physics step and one
//! render frame per tick.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde::Serialize;
use spring_core::{FixedClock, InputAction, InputState, ObjectId};
use spring_debug::RecordingGizmo;
use spring_hud::{Crosshair, PromptController, RecordingPainter};
use spring_interact::prelude::*;
use spring_math::{Angles, Vec2, Vec3};
use spring_physics::{BodyDesc, HingeDesc, SimWorld};

use crate::config::{ConfigError, ObjectKind, Result, Scene};

/// The acting player. Not a body in the world.
const ACTOR: ObjectId = ObjectId::new(u32::MAX, 0);

const SCREEN_SIZE: Vec2 = Vec2::new(1920.0, 1080.0);

/// Something that happened during a run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportEvent {
    pub step: u64,
    pub time: f32,
    pub kind: &'static str,
    pub object: String,
    pub detail: String,
}

/// Outcome of a run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Report {
    pub steps: u64,
    pub events: Vec<ReportEvent>,
    pub ray_casts: u64,
    pub cache_hits: u64,
    pub feeds_rendered: u64,
    pub gizmo_lines: u64,
    pub crosshair_frames: u64,
    /// Prompts visible after the last frame, with their text
    pub visible_prompts: Vec<(String, Option<String>)>,
}

/// Counts feed renders
#[derive(Debug, Default)]
struct FeedLog {
    rendered: u64,
}

impl FeedRenderer for FeedLog {
    fn render_to_texture(&mut self, camera: ObjectId, texture: &str, width: u32, height: u32) {
        log::trace!("Render {camera} into {texture} ({width}x{height})");
        self.rendered += 1;
    }
}

pub struct Sandbox {
    scene: Scene,
    world: SimWorld,
    interaction: InteractionLoop,
    names: HashMap<ObjectId, String>,
    ids: HashMap<String, ObjectId>,
    doors: Vec<Rc<RefCell<Door>>>,
    crosshair: Rc<RefCell<Crosshair>>,
    input: InputState,
    prompts: PromptController,
    gizmo: RecordingGizmo,
    painter: RecordingPainter,
    feeds: FeedLog,
    clock: FixedClock,
    viewpoint: Viewpoint,
    report: Report,
}

impl Sandbox {
    pub fn new(scene: Scene) -> Result<Self> {
        let mut world = SimWorld::new(scene.sim.clone())?;
        let grab = Rc::new(RefCell::new(GrabController::new(scene.grab.clone())));
        let mut interaction =
            InteractionLoop::new(scene.resolver.clone()).with_grab_controller(grab);
        let crosshair = Rc::new(RefCell::new(scene.crosshair.clone()));

        let mut names = HashMap::new();
        let mut ids = HashMap::new();
        let mut doors = Vec::new();
        let mut cameras = HashMap::new();

        for spec in &scene.objects {
            let mut desc = if spec.is_static {
                BodyDesc::fixed()
            } else {
                BodyDesc::dynamic()
            }
            .with_position(spec.position)
            .with_rotation(Angles::from_yaw(spec.yaw).to_quat())
            .with_half_extents(spec.half_extents)
            .with_angular_damping(spec.angular_damping);
            for tag in spec.tags()? {
                desc = desc.with_tag(tag);
            }
            let id = world.add_body(desc);

            match spec.kind {
                ObjectKind::Plain => {}
                ObjectKind::Grabbable => interaction.add_grabbable(id, spec.resettable),
                ObjectKind::Door => {
                    world.attach_hinge(id, HingeDesc::new(spec.hinge.min_angle, spec.hinge.max_angle))?;
                    doors.push(interaction.add_door(Door::new(id, spec.door.clone())));
                }
                ObjectKind::Camera => {
                    world.attach_hinge(id, HingeDesc::new(spec.hinge.min_angle, spec.hinge.max_angle))?;
                    let camera = interaction.add_camera(SecurityCamera::new(id, spec.camera.clone()));
                    cameras.insert(spec.name.clone(), camera);
                }
            }

            log::debug!("Placed {:?} {} as {id}", spec.kind, spec.name);
            names.insert(id, spec.name.clone());
            ids.insert(spec.name.clone(), id);
        }

        for spec in &scene.togglers {
            let mut toggler = HotkeyToggler::new(spec.hotkey.parse::<InputAction>()?, spec.enabled);
            for target in &spec.targets {
                toggler = if target == "crosshair" {
                    toggler.with_target(crosshair.clone())
                } else {
                    let camera = cameras
                        .get(target)
                        .ok_or_else(|| ConfigError::Invalid(format!("unknown toggle target {target:?}")))?;
                    toggler.with_target(camera.clone())
                };
            }
            interaction.add_toggler(toggler);
        }

        let vp = &scene.viewpoint;
        let viewpoint = Viewpoint::new(
            ACTOR,
            vp.position,
            vp.position + Vec3::Y * vp.eye_height,
            vp.angles(),
        );

        interaction.awake(&mut world);

        Ok(Self {
            clock: FixedClock::new(scene.step_seconds),
            scene,
            world,
            interaction,
            names,
            ids,
            doors,
            crosshair,
            input: InputState::new(),
            prompts: PromptController::from_actions(InputAction::ALL),
            gizmo: RecordingGizmo::new(),
            painter: RecordingPainter::new(),
            feeds: FeedLog::default(),
            viewpoint,
            report: Report::default(),
        })
    }

    /// Run `steps` ticks and return the report
    pub fn run(mut self, steps: u64) -> Report {
        log::info!("Running {steps} steps of {:.3}s", self.clock.step());
        for _ in 0..steps {
            self.tick();
        }

        self.report.steps = self.clock.ticks();
        self.report.ray_casts = self.world.ray_cast_count();
        self.report.cache_hits = self.interaction.dispatcher().resolver().cache_hits();
        self.report.feeds_rendered = self.feeds.rendered;
        self.report.visible_prompts = self
            .prompts
            .visible_prompts()
            .map(|(action, p)| (action.to_string(), p.text_override.clone()))
            .collect();
        self.report
    }

    fn tick(&mut self) {
        let step = self.clock.ticks() + 1;
        self.apply_timeline(step);

        let grab_before = self.grab_phase();
        let doors_before: Vec<DoorPhase> = self.doors.iter().map(|d| d.borrow().phase()).collect();

        let time = self.clock.tick();
        let mut ctx = StepContext {
            time,
            viewpoint: &self.viewpoint,
            input: &self.input,
            physics: &mut self.world,
            prompts: &mut self.prompts,
            strings: &self.scene.strings,
            gizmo: &mut self.gizmo,
            debug: &self.scene.debug,
        };
        self.interaction.fixed_step(&mut ctx);
        self.world.step(time.delta);

        for transition in self.interaction.transitions() {
            let kind = if transition.is_start() { "look_start" } else { "look_end" };
            let event = self.event(step, time.now, kind, transition.target, String::new());
            self.report.events.push(event);
        }

        let grab_after = self.grab_phase();
        if grab_after != grab_before {
            let held = self
                .interaction
                .grab_controller()
                .and_then(|g| g.borrow().held());
            log::info!("Step {step}: grab {grab_before:?} -> {grab_after:?}");
            let object = held.map_or_else(String::new, |id| self.name(id));
            self.report.events.push(ReportEvent {
                step,
                time: time.now,
                kind: "grab",
                object,
                detail: format!("{grab_after:?}"),
            });
        }

        for (door, before) in self.doors.iter().zip(doors_before) {
            let (id, after) = {
                let door = door.borrow();
                (door.id(), door.phase())
            };
            if after != before {
                let name = self.name(id);
                log::info!("Step {step}: door {name} {before:?} -> {after:?}");
                self.report.events.push(ReportEvent {
                    step,
                    time: time.now,
                    kind: "door",
                    object: name,
                    detail: format!("{after:?}"),
                });
            }
        }

        let mut ctx = FrameContext {
            time,
            viewpoint: &self.viewpoint,
            input: &self.input,
            physics: &self.world,
            prompts: &mut self.prompts,
            strings: &self.scene.strings,
            gizmo: &mut self.gizmo,
            debug: &self.scene.debug,
        };
        self.interaction.frame(&mut ctx, &mut self.feeds);
        self.crosshair.borrow().paint(&mut self.painter, SCREEN_SIZE);

        self.report.gizmo_lines += self.gizmo.drain().len() as u64;
        if !self.painter.shapes().is_empty() {
            self.report.crosshair_frames += 1;
        }
        self.painter.clear();
        self.input.end_frame();
    }

    fn apply_timeline(&mut self, step: u64) {
        for entry in self.scene.timeline.iter().filter(|e| e.step == step) {
            for action in entry.actions() {
                log::debug!("Step {step}: press {action}");
                self.input.tap(action);
            }
            if let Some(yaw) = entry.yaw {
                self.viewpoint.eye_angles = self.viewpoint.eye_angles.with_yaw(yaw);
            }
            if let Some(pitch) = entry.pitch {
                self.viewpoint.eye_angles = self.viewpoint.eye_angles.with_pitch(pitch);
            }
            if let Some(ground) = &entry.ground {
                self.viewpoint.ground = self.ids.get(ground).copied();
            }
        }
    }

    fn grab_phase(&self) -> GrabPhase {
        self.interaction
            .grab_controller()
            .map_or(GrabPhase::Idle, |g| g.borrow().phase())
    }

    fn name(&self, id: ObjectId) -> String {
        self.names.get(&id).cloned().unwrap_or_else(|| id.to_string())
    }

    fn event(&self, step: u64, time: f32, kind: &'static str, object: ObjectId, detail: String) -> ReportEvent {
        ReportEvent {
            step,
            time,
            kind,
            object: self.name(object),
            detail,
        }
    }
}
