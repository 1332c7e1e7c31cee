//! # spring_debug - Debug Drawing
//!
//! Gameplay components draw debug lines and boxes through a [`Gizmo`] sink.
//! Each kind of drawing belongs to a channel described by a
//! [`DebugProperty`]; a hidden channel draws nothing.
//!
//! The [`DebugSettings`] value is built once at startup and handed to
//! components by reference. It is never mutated while the game runs.
//!
//! ## Example
//!
//! ```ignore
//! use spring_debug::prelude::*;
//!
//! let settings = DebugSettings::default();
//! let mut gizmo = RecordingGizmo::new();
//! gizmo.draw_line(Vec3::ZERO, Vec3::NEG_Z, &settings.interact_raycast);
//! assert_eq!(gizmo.lines().len(), 1);
//! ```

pub mod gizmo;
pub mod property;
pub mod settings;

pub use gizmo::{Gizmo, GizmoLine, RecordingGizmo, SpringGizmo};
pub use property::DebugProperty;
pub use settings::DebugSettings;

pub mod prelude {
    pub use crate::gizmo::{Gizmo, GizmoLine, RecordingGizmo, SpringGizmo};
    pub use crate::property::DebugProperty;
    pub use crate::settings::DebugSettings;
    pub use spring_math::{Color, Vec3, AABB};
}
