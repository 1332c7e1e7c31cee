//! Per-step ordering of every interaction component
//!
//! Each physics step runs, in order: look dispatch, grab, doors, cameras.
//! Each render frame runs togglers, look updates, the grab HUD and camera
//! feeds. Components registered here are also attached to the interactable
//! registry where they react to being looked at.

use std::cell::RefCell;
use std::rc::Rc;

use spring_core::ObjectId;
use spring_physics::PhysicsWorld;

use crate::context::{FrameContext, StepContext};
use crate::dispatcher::InteractionDispatcher;
use crate::door::Door;
use crate::event::LookTransition;
use crate::grab::{GrabController, Grabbable};
use crate::interactable::{InteractableRegistry, SharedInteractable};
use crate::resolver::ResolverConfig;
use crate::security_camera::{FeedRenderer, SecurityCamera};
use crate::toggler::HotkeyToggler;

/// Owns the interaction components of one scene and drives them
pub struct InteractionLoop {
    registry: InteractableRegistry,
    dispatcher: InteractionDispatcher,
    grab: Option<Rc<RefCell<GrabController>>>,
    doors: Vec<Rc<RefCell<Door>>>,
    cameras: Vec<Rc<RefCell<SecurityCamera>>>,
    togglers: Vec<HotkeyToggler>,
}

impl InteractionLoop {
    pub fn new(config: ResolverConfig) -> Self {
        Self {
            registry: InteractableRegistry::new(),
            dispatcher: InteractionDispatcher::new(config),
            grab: None,
            doors: Vec::new(),
            cameras: Vec::new(),
            togglers: Vec::new(),
        }
    }

    pub fn with_grab_controller(mut self, grab: Rc<RefCell<GrabController>>) -> Self {
        self.grab = Some(grab);
        self
    }

    /// Register a door as both a driven component and an interactable
    pub fn add_door(&mut self, door: Door) -> Rc<RefCell<Door>> {
        let id = door.id();
        let door = Rc::new(RefCell::new(door));
        self.registry.register(id, door.clone());
        self.doors.push(door.clone());
        door
    }

    /// Make `object` grabbable through the loop's grab controller
    pub fn add_grabbable(&mut self, object: ObjectId, resettable: bool) {
        let controller = self
            .grab
            .clone()
            .unwrap_or_else(|| panic!("grabbable {object} added without a grab controller"));
        self.registry.register(
            object,
            Rc::new(RefCell::new(Grabbable::new(controller, resettable))),
        );
    }

    pub fn add_camera(&mut self, camera: SecurityCamera) -> Rc<RefCell<SecurityCamera>> {
        let camera = Rc::new(RefCell::new(camera));
        self.cameras.push(camera.clone());
        camera
    }

    pub fn add_toggler(&mut self, toggler: HotkeyToggler) {
        self.togglers.push(toggler);
    }

    /// Attach any other behaviour to an object
    pub fn add_behaviour(&mut self, object: ObjectId, behaviour: SharedInteractable) {
        self.registry.register(object, behaviour);
    }

    pub fn registry(&self) -> &InteractableRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut InteractableRegistry {
        &mut self.registry
    }

    pub fn dispatcher(&self) -> &InteractionDispatcher {
        &self.dispatcher
    }

    pub fn grab_controller(&self) -> Option<&Rc<RefCell<GrabController>>> {
        self.grab.as_ref()
    }

    /// Look transitions of the last physics step
    pub fn transitions(&self) -> &[LookTransition] {
        self.dispatcher.transitions()
    }

    /// One-time setup once the physics world is populated
    pub fn awake(&mut self, physics: &mut dyn PhysicsWorld) {
        for camera in &self.cameras {
            camera.borrow_mut().awake(physics);
        }
        for toggler in &mut self.togglers {
            toggler.awake();
        }
        log::info!(
            "Interaction ready: {} interactable object(s), {} door(s), {} camera(s)",
            self.registry.object_count(),
            self.doors.len(),
            self.cameras.len()
        );
    }

    /// Physics-step update
    pub fn fixed_step(&mut self, ctx: &mut StepContext<'_>) {
        self.dispatcher.fixed_step(&self.registry, ctx);

        if let Some(grab) = &self.grab {
            grab.borrow_mut().fixed_update(ctx);
        }
        for door in &self.doors {
            door.borrow_mut().fixed_update(ctx);
        }
        for camera in &self.cameras {
            camera.borrow_mut().fixed_update(ctx.physics);
        }
    }

    /// Render-frame update
    pub fn frame(&mut self, ctx: &mut FrameContext<'_>, feeds: &mut dyn FeedRenderer) {
        for toggler in &mut self.togglers {
            toggler.update(ctx.input);
        }

        self.dispatcher.frame(ctx);

        if let Some(grab) = &self.grab {
            grab.borrow().update(ctx);
        }
        for camera in &self.cameras {
            camera.borrow().update(feeds);
        }
    }
}

impl Default for InteractionLoop {
    fn default() -> Self {
        Self::new(ResolverConfig::default())
    }
}
