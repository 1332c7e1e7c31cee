//! Look dispatch tests
//!
//! Ordering and delivery guarantees of the interaction dispatcher, driven
//! through a full interaction loop over the reference physics world.

mod common;

use std::cell::RefCell;
use std::rc::Rc;

use common::{Harness, Recorder, EYE_HEIGHT};
use spring_interact::prelude::*;
use spring_math::{Color, Vec3};
use spring_physics::BodyDesc;

fn log() -> Rc<RefCell<Vec<String>>> {
    Rc::new(RefCell::new(Vec::new()))
}

fn drain(log: &Rc<RefCell<Vec<String>>>) -> Vec<String> {
    std::mem::take(&mut *log.borrow_mut())
}

/// INVARIANT: the old target's end arrives before the new target's start
#[test]
fn invariant_end_before_start_on_target_change() {
    let mut h = Harness::new();
    let events = log();
    let a = h.add_box(0.0, -3.0);
    let b = h.add_box(-3.0, 0.0);
    h.interaction.add_behaviour(a, Recorder::shared("a", &events));
    h.interaction.add_behaviour(b, Recorder::shared("b", &events));
    h.awake();

    h.tick();
    assert_eq!(drain(&events), ["a:start", "a:fixed", "a:update"]);
    assert_eq!(h.interaction.dispatcher().current_target(), Some(a));

    h.look_yaw(90.0);
    h.tick();
    assert_eq!(drain(&events), ["a:end", "b:start", "b:fixed", "b:update"]);

    let transitions = h.interaction.transitions();
    assert_eq!(transitions.len(), 2);
    assert!(transitions[0].is_end() && transitions[0].target == a);
    assert!(transitions[1].is_start() && transitions[1].target == b);
}

/// INVARIANT: no start/end while the resolved target is unchanged
#[test]
fn invariant_no_transitions_for_steady_target() {
    let mut h = Harness::new();
    let events = log();
    let a = h.add_box(0.0, -3.0);
    h.interaction.add_behaviour(a, Recorder::shared("a", &events));

    h.tick();
    drain(&events);

    for _ in 0..5 {
        h.tick();
        assert!(h.interaction.transitions().is_empty());
    }
    let seen = drain(&events);
    assert_eq!(seen.iter().filter(|e| *e == "a:fixed").count(), 5);
    assert_eq!(seen.iter().filter(|e| *e == "a:update").count(), 5);
    assert!(!seen.iter().any(|e| e == "a:start" || e == "a:end"));
}

#[test]
fn test_every_behaviour_on_target_is_notified_in_order() {
    let mut h = Harness::new();
    let events = log();
    let a = h.add_box(0.0, -3.0);
    h.interaction.add_behaviour(a, Recorder::shared("first", &events));
    h.interaction.add_behaviour(a, Recorder::shared("second", &events));

    h.step();
    assert_eq!(
        drain(&events),
        ["first:start", "second:start", "first:fixed", "second:fixed"]
    );
}

#[test]
fn test_looking_away_ends_without_start() {
    let mut h = Harness::new();
    let events = log();
    let a = h.add_box(0.0, -3.0);
    h.interaction.add_behaviour(a, Recorder::shared("a", &events));

    h.tick();
    drain(&events);
    h.look_yaw(180.0);
    h.tick();

    assert_eq!(drain(&events), ["a:end"]);
    assert_eq!(h.interaction.dispatcher().current_target(), None);
}

#[test]
fn test_non_interactable_hit_blocks_the_target_behind_it() {
    let mut h = Harness::new();
    let events = log();
    let blocker = h.add_box(0.0, -2.0);
    let behind = h.add_box(0.0, -5.0);
    h.interaction.add_behaviour(behind, Recorder::shared("behind", &events));

    h.tick();
    assert!(drain(&events).is_empty());
    assert_eq!(h.interaction.dispatcher().current_target(), None);

    // registering on the blocker must be picked up with the viewpoint unchanged
    h.interaction
        .add_behaviour(blocker, Recorder::shared("blocker", &events));
    h.tick();
    assert_eq!(drain(&events), ["blocker:start", "blocker:fixed", "blocker:update"]);
}

#[test]
fn test_static_geometry_is_looked_through() {
    let mut h = Harness::new();
    let events = log();
    h.world.add_body(
        BodyDesc::fixed().with_position(Vec3::new(0.0, EYE_HEIGHT, -2.0)),
    );
    let a = h.add_box(0.0, -5.0);
    h.interaction.add_behaviour(a, Recorder::shared("a", &events));

    h.tick();
    assert_eq!(h.interaction.dispatcher().current_target(), Some(a));
}

#[test]
fn test_unregistering_current_target_ends_it() {
    let mut h = Harness::new();
    let events = log();
    let a = h.add_box(0.0, -3.0);
    h.interaction.add_behaviour(a, Recorder::shared("a", &events));

    h.tick();
    drain(&events);
    h.interaction.registry_mut().unregister(a);
    h.tick();

    assert_eq!(drain(&events), ["a:end"]);
}

/// INVARIANT: a still viewpoint never keeps a target the ray no longer hits
#[test]
fn invariant_moved_target_ends_while_viewpoint_is_still() {
    let mut h = Harness::new();
    let events = log();
    let a = h.add_box(0.0, -3.0);
    h.interaction.add_behaviour(a, Recorder::shared("a", &events));

    h.tick();
    drain(&events);
    h.world
        .sim_body_mut(a)
        .unwrap()
        .set_position(Vec3::new(50.0, EYE_HEIGHT, -3.0));
    h.tick();

    assert_eq!(drain(&events), ["a:end"]);
    assert_eq!(h.interaction.dispatcher().current_target(), None);
}

#[test]
fn test_removed_target_ends_while_viewpoint_is_still() {
    let mut h = Harness::new();
    let events = log();
    let a = h.add_box(0.0, -3.0);
    h.interaction.add_behaviour(a, Recorder::shared("a", &events));

    h.tick();
    drain(&events);
    h.world.remove_body(a);
    h.tick();

    assert_eq!(drain(&events), ["a:end"]);
    assert_eq!(h.interaction.dispatcher().current_target(), None);
}

#[test]
fn test_stationary_viewpoint_casts_once() {
    let mut h = Harness::new();
    let events = log();
    let a = h.add_box(0.0, -3.0);
    h.interaction.add_behaviour(a, Recorder::shared("a", &events));

    h.tick_n(10);
    assert_eq!(h.world.ray_cast_count(), 1);
    assert_eq!(h.interaction.dispatcher().resolver().cache_hits(), 9);

    h.look_yaw(1.0);
    h.tick();
    assert_eq!(h.world.ray_cast_count(), 2);
}

#[test]
fn test_event_distance_is_from_actor_to_target() {
    struct Distance(Rc<RefCell<Option<f32>>>);

    impl Interactable for Distance {
        fn on_look_start(&mut self, event: &InteractEvent, _ctx: &mut StepContext<'_>) {
            *self.0.borrow_mut() = Some(event.distance);
        }
    }

    let mut h = Harness::new();
    let seen = Rc::new(RefCell::new(None));
    let a = h.add_box(0.0, -4.0);
    h.interaction
        .add_behaviour(a, Rc::new(RefCell::new(Distance(seen.clone()))));

    h.step();
    let expected = Vec3::ZERO.distance(Vec3::new(0.0, EYE_HEIGHT, -4.0));
    let distance = seen.borrow().expect("look start not delivered");
    assert!((distance - expected).abs() < 1e-4);
}

#[test]
fn test_look_ray_is_debug_drawn() {
    let mut h = Harness::new();
    h.tick();

    let ray = h.debug.interact_raycast;
    assert!(h
        .gizmo
        .lines()
        .iter()
        .any(|l| l.color == Color::RED && l.thickness == ray.line_thickness));

    h.gizmo.clear();
    h.debug.interact_raycast.show = false;
    h.tick();
    assert!(h.gizmo.lines().is_empty());
}
