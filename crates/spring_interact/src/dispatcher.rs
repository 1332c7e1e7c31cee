//! Look event dispatch
//!
//! Once per physics step the dispatcher resolves the look target, and when
//! it changes, ends the old target's behaviours before starting the new
//! one's. While a target is held its behaviours get a fixed-update every
//! step and an update every render frame.

use spring_core::ObjectId;
use spring_debug::SpringGizmo;
use spring_math::Vec3;
use spring_physics::PhysicsWorld;

use crate::context::{FrameContext, StepContext, Viewpoint};
use crate::event::{InteractEvent, LookTransition};
use crate::interactable::{InteractableRegistry, SharedInteractable};
use crate::resolver::{RayTargetResolver, ResolverConfig};

/// Current look target and the behaviours resolved when it was acquired
struct LookTarget {
    object: ObjectId,
    behaviours: Vec<SharedInteractable>,
}

/// Tracks the look target and notifies its behaviours
pub struct InteractionDispatcher {
    resolver: RayTargetResolver,
    current: Option<LookTarget>,
    registry_revision: Option<u64>,
    transitions: Vec<LookTransition>,
}

impl InteractionDispatcher {
    pub fn new(config: ResolverConfig) -> Self {
        Self {
            resolver: RayTargetResolver::new(config),
            current: None,
            registry_revision: None,
            transitions: Vec::new(),
        }
    }

    pub fn current_target(&self) -> Option<ObjectId> {
        self.current.as_ref().map(|t| t.object)
    }

    pub fn resolver(&self) -> &RayTargetResolver {
        &self.resolver
    }

    /// Target changes made by the last physics step, ends before starts
    pub fn transitions(&self) -> &[LookTransition] {
        &self.transitions
    }

    /// Physics-step half: resolve, emit end/start on change, then fixed-update
    pub fn fixed_step(&mut self, registry: &InteractableRegistry, ctx: &mut StepContext<'_>) {
        self.transitions.clear();

        if self.registry_revision != Some(registry.revision()) {
            self.resolver.invalidate();
            self.registry_revision = Some(registry.revision());
        }

        let viewpoint = *ctx.viewpoint;
        let hit = self.resolver.resolve(
            &*ctx.physics,
            viewpoint.eye_position,
            viewpoint.eye_rotation(),
            |hit| registry.contains(hit.object),
        );

        if let Some(query) = self.resolver.last_query() {
            ctx.gizmo
                .draw_line(query.origin, query.end(), &ctx.debug.interact_raycast);
        }

        let target = hit.map(|h| h.object);
        if target != self.current_target() {
            if let Some(previous) = self.current.take() {
                let event = look_event(&*ctx.physics, &viewpoint, previous.object, None);
                log::debug!("Look end {} (distance {:.2})", previous.object, event.distance);
                for behaviour in &previous.behaviours {
                    behaviour.borrow_mut().on_look_end(&event, ctx);
                }
                self.transitions
                    .push(LookTransition::end(previous.object, ctx.time.now));
            }

            if let Some(hit) = hit {
                let acquired = LookTarget {
                    object: hit.object,
                    behaviours: registry.behaviours(hit.object).to_vec(),
                };
                let event = look_event(&*ctx.physics, &viewpoint, hit.object, Some(hit.point));
                log::debug!("Look start {} (distance {:.2})", hit.object, event.distance);
                for behaviour in &acquired.behaviours {
                    behaviour.borrow_mut().on_look_start(&event, ctx);
                }
                self.transitions.push(LookTransition::start(hit.object, ctx.time.now));
                self.current = Some(acquired);
            }
        }

        if let Some(current) = &self.current {
            let fallback = hit.map(|h| h.point);
            let event = look_event(&*ctx.physics, &viewpoint, current.object, fallback);
            for behaviour in &current.behaviours {
                behaviour.borrow_mut().on_look_fixed_update(&event, ctx);
            }
        }
    }

    /// Render-frame half: update the held target's behaviours
    pub fn frame(&self, ctx: &mut FrameContext<'_>) {
        let Some(current) = &self.current else {
            return;
        };
        let event = look_event(ctx.physics, ctx.viewpoint, current.object, None);
        for behaviour in &current.behaviours {
            behaviour.borrow().on_look_update(&event, ctx);
        }
    }
}

impl Default for InteractionDispatcher {
    fn default() -> Self {
        Self::new(ResolverConfig::default())
    }
}

/// Event for `target`, measured from the actor to the target's body, or to
/// `fallback` when the target has no body
fn look_event(
    physics: &dyn PhysicsWorld,
    viewpoint: &Viewpoint,
    target: ObjectId,
    fallback: Option<Vec3>,
) -> InteractEvent {
    let target_position = physics
        .body(target)
        .map(|body| body.position())
        .or(fallback)
        .unwrap_or(viewpoint.position);

    InteractEvent {
        interactee: target,
        interactor: viewpoint.actor,
        interactor_position: viewpoint.position,
        distance: viewpoint.position.distance(target_position),
    }
}
