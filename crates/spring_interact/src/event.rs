//! Look events

use spring_core::ObjectId;
use spring_math::Vec3;

/// One notification to the behaviours of a looked-at object
///
/// Built fresh for each notification round and shared by reference, so every
/// behaviour on the target sees the same values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractEvent {
    /// The looked-at object
    pub interactee: ObjectId,
    /// The looking actor
    pub interactor: ObjectId,
    pub interactor_position: Vec3,
    /// Actor to target distance
    pub distance: f32,
}

/// Kind of look transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookEventType {
    /// Target acquired
    Start,
    /// Target lost
    End,
}

/// A target change recorded during one physics step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LookTransition {
    pub event_type: LookEventType,
    pub target: ObjectId,
    /// Step time of the transition
    pub time: f32,
}

impl LookTransition {
    pub fn start(target: ObjectId, time: f32) -> Self {
        Self {
            event_type: LookEventType::Start,
            target,
            time,
        }
    }

    pub fn end(target: ObjectId, time: f32) -> Self {
        Self {
            event_type: LookEventType::End,
            target,
            time,
        }
    }

    pub fn is_start(&self) -> bool {
        self.event_type == LookEventType::Start
    }

    pub fn is_end(&self) -> bool {
        self.event_type == LookEventType::End
    }
}
