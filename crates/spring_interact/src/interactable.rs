//! Interactable behaviours and their registry

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use spring_core::ObjectId;

use crate::context::{FrameContext, StepContext};
use crate::event::InteractEvent;

/// A behaviour that reacts to being looked at
///
/// Every hook defaults to doing nothing. `on_look_update` runs at render
/// cadence and only gets shared access to the behaviour.
pub trait Interactable {
    fn on_look_start(&mut self, _event: &InteractEvent, _ctx: &mut StepContext<'_>) {}

    fn on_look_fixed_update(&mut self, _event: &InteractEvent, _ctx: &mut StepContext<'_>) {}

    fn on_look_update(&self, _event: &InteractEvent, _ctx: &mut FrameContext<'_>) {}

    fn on_look_end(&mut self, _event: &InteractEvent, _ctx: &mut StepContext<'_>) {}
}

/// Behaviour shared between the registry and its owner
pub type SharedInteractable = Rc<RefCell<dyn Interactable>>;

/// Interactable behaviours attached to each object
#[derive(Default)]
pub struct InteractableRegistry {
    behaviours: HashMap<ObjectId, Vec<SharedInteractable>>,
    revision: u64,
}

impl InteractableRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a behaviour to an object
    pub fn register(&mut self, object: ObjectId, behaviour: SharedInteractable) {
        self.behaviours.entry(object).or_default().push(behaviour);
        self.revision += 1;
    }

    /// Detach every behaviour from an object
    pub fn unregister(&mut self, object: ObjectId) -> bool {
        let removed = self.behaviours.remove(&object).is_some();
        if removed {
            self.revision += 1;
        }
        removed
    }

    /// Behaviours on `object`, empty when there are none
    pub fn behaviours(&self, object: ObjectId) -> &[SharedInteractable] {
        self.behaviours.get(&object).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, object: ObjectId) -> bool {
        self.behaviours.get(&object).is_some_and(|b| !b.is_empty())
    }

    /// Bumped on every change
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn object_count(&self) -> usize {
        self.behaviours.len()
    }
}
