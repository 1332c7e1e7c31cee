//! Spring Interact - Look Interaction System
//!
//! This crate turns "what is the player looking at" into gameplay: a single
//! look ray per physics step picks a target, and every behaviour attached to
//! that target is told when the look starts, continues and ends.
//!
//! # Features
//!
//! - Cached look-ray resolution
//! - Look start / fixed-update / update / end events to any number of behaviours
//! - Grabbing physics objects at a fixed distance, with rotation tracking
//! - Hinged doors that swing away from whoever opens them
//! - Sweeping security cameras and hotkey toggles
//!
//! # Cadences
//!
//! The host calls [`InteractionLoop::fixed_step`] once per physics step and
//! [`InteractionLoop::frame`] once per render frame. Frame callbacks only read
//! gameplay state; they update prompts and debug drawing.
//!
//! # Example
//!
//! ```ignore
//! use spring_interact::prelude::*;
//!
//! let grab = Rc::new(RefCell::new(GrabController::new(GrabConfig::default())));
//! let mut interaction = InteractionLoop::new(ResolverConfig::default())
//!     .with_grab_controller(grab.clone());
//!
//! interaction.add_door(Door::new(door_id, DoorConfig::default()));
//! interaction.add_grabbable(crate_id, true);
//!
//! // each physics step
//! interaction.fixed_step(&mut step_ctx);
//! world.step(dt);
//!
//! // each render frame
//! interaction.frame(&mut frame_ctx, &mut feeds);
//! ```

pub mod context;
pub mod dispatcher;
pub mod door;
pub mod event;
pub mod grab;
pub mod interactable;
pub mod interaction_loop;
pub mod resolver;
pub mod security_camera;
pub mod toggler;

pub mod prelude {
    pub use crate::context::{FrameContext, StepContext, Viewpoint};
    pub use crate::dispatcher::InteractionDispatcher;
    pub use crate::door::{Door, DoorConfig, DoorPhase};
    pub use crate::event::{InteractEvent, LookEventType, LookTransition};
    pub use crate::grab::{GrabConfig, GrabController, GrabPhase, Grabbable};
    pub use crate::interactable::{Interactable, InteractableRegistry, SharedInteractable};
    pub use crate::interaction_loop::InteractionLoop;
    pub use crate::resolver::{RayTargetResolver, ResolverConfig};
    pub use crate::security_camera::{FeedRenderer, SecurityCamera, SecurityCameraConfig};
    pub use crate::toggler::HotkeyToggler;
}

pub use prelude::*;
