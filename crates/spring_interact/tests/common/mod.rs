//! Headless scene harness shared by the integration tests

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use spring_core::{FixedClock, InputAction, InputState, ObjectId};
use spring_debug::{DebugSettings, RecordingGizmo};
use spring_hud::{Localiser, PromptController};
use spring_interact::prelude::*;
use spring_math::{Angles, Vec3};
use spring_physics::{BodyDesc, SimConfig, SimWorld};

pub const EYE_HEIGHT: f32 = 1.5;

/// Records every look notification it receives
pub struct Recorder {
    pub name: &'static str,
    pub log: Rc<RefCell<Vec<String>>>,
}

impl Recorder {
    pub fn shared(name: &'static str, log: &Rc<RefCell<Vec<String>>>) -> Rc<RefCell<Recorder>> {
        Rc::new(RefCell::new(Recorder {
            name,
            log: log.clone(),
        }))
    }

    fn record(&self, what: &str) {
        self.log.borrow_mut().push(format!("{}:{what}", self.name));
    }
}

impl Interactable for Recorder {
    fn on_look_start(&mut self, _event: &InteractEvent, _ctx: &mut StepContext<'_>) {
        self.record("start");
    }

    fn on_look_fixed_update(&mut self, _event: &InteractEvent, _ctx: &mut StepContext<'_>) {
        self.record("fixed");
    }

    fn on_look_update(&self, _event: &InteractEvent, _ctx: &mut FrameContext<'_>) {
        self.record("update");
    }

    fn on_look_end(&mut self, _event: &InteractEvent, _ctx: &mut StepContext<'_>) {
        self.record("end");
    }
}

#[derive(Default)]
pub struct Feeds {
    pub rendered: Vec<String>,
}

impl FeedRenderer for Feeds {
    fn render_to_texture(&mut self, _camera: ObjectId, texture: &str, _width: u32, _height: u32) {
        self.rendered.push(texture.to_string());
    }
}

/// A physics world, an interaction loop and everything they are driven with
pub struct Harness {
    pub world: SimWorld,
    pub interaction: InteractionLoop,
    pub input: InputState,
    pub prompts: PromptController,
    pub strings: Localiser,
    pub gizmo: RecordingGizmo,
    pub debug: DebugSettings,
    pub clock: FixedClock,
    pub viewpoint: Viewpoint,
    pub feeds: Feeds,
}

impl Harness {
    /// Actor at the origin looking down -Z
    pub fn new() -> Self {
        Self::with_world(SimWorld::new(SimConfig::default()).unwrap())
    }

    pub fn with_world(world: SimWorld) -> Self {
        Self {
            world,
            interaction: InteractionLoop::new(ResolverConfig::default()),
            input: InputState::new(),
            prompts: PromptController::from_actions(InputAction::ALL),
            strings: Localiser::default(),
            gizmo: RecordingGizmo::new(),
            debug: DebugSettings::default(),
            clock: FixedClock::default(),
            viewpoint: Viewpoint::new(
                ObjectId::new(9999, 0),
                Vec3::ZERO,
                Vec3::new(0.0, EYE_HEIGHT, 0.0),
                Angles::ZERO,
            ),
            feeds: Feeds::default(),
        }
    }

    pub fn with_grab(mut self, config: GrabConfig) -> Self {
        let grab = Rc::new(RefCell::new(GrabController::new(config)));
        self.interaction = std::mem::take(&mut self.interaction).with_grab_controller(grab);
        self
    }

    /// Dynamic box at eye height
    pub fn add_box(&mut self, x: f32, z: f32) -> ObjectId {
        self.world
            .add_body(BodyDesc::dynamic().with_position(Vec3::new(x, EYE_HEIGHT, z)))
    }

    pub fn look_yaw(&mut self, yaw: f32) {
        self.viewpoint.eye_angles = self.viewpoint.eye_angles.with_yaw(yaw);
    }

    pub fn grab(&self) -> std::cell::Ref<'_, GrabController> {
        self.interaction
            .grab_controller()
            .expect("harness has no grab controller")
            .borrow()
    }

    pub fn awake(&mut self) {
        self.interaction.awake(&mut self.world);
    }

    /// Interaction physics step followed by the simulation step
    pub fn step(&mut self) {
        let time = self.clock.tick();
        let mut ctx = StepContext {
            time,
            viewpoint: &self.viewpoint,
            input: &self.input,
            physics: &mut self.world,
            prompts: &mut self.prompts,
            strings: &self.strings,
            gizmo: &mut self.gizmo,
            debug: &self.debug,
        };
        self.interaction.fixed_step(&mut ctx);
        self.world.step(time.delta);
    }

    pub fn frame(&mut self) {
        let mut ctx = FrameContext {
            time: self.clock.now(),
            viewpoint: &self.viewpoint,
            input: &self.input,
            physics: &self.world,
            prompts: &mut self.prompts,
            strings: &self.strings,
            gizmo: &mut self.gizmo,
            debug: &self.debug,
        };
        self.interaction.frame(&mut ctx, &mut self.feeds);
    }

    /// One physics step and one frame, then clear one-frame input
    pub fn tick(&mut self) {
        self.step();
        self.frame();
        self.input.end_frame();
    }

    pub fn tick_n(&mut self, n: usize) {
        for _ in 0..n {
            self.tick();
        }
    }

    /// Press `action` for exactly one tick
    pub fn tap(&mut self, action: InputAction) {
        self.input.tap(action);
        self.tick();
    }
}
