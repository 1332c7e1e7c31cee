//! # spring_core - Core Primitives
//!
//! Shared building blocks for the Spring gameplay crates.
//!
//! ## Features
//!
//! - **Object ids**: Generational handles for scene objects
//! - **Clocks**: Frame time and a fixed-step clock for the physics cadence
//! - **Input**: The closed set of input actions and the polling service trait
//! - **Tags**: Object tags used to filter look queries
//! - **Toggles**: Components that can be switched on and off at runtime
//!
//! ## Example
//!
//! ```ignore
//! use spring_core::prelude::*;
//!
//! let ids = IdGenerator::new();
//! let door = ids.next();
//!
//! let mut input = InputState::new();
//! input.press(InputAction::Use);
//! assert!(input.pressed(InputAction::Use));
//! ```

pub mod error;
pub mod id;
pub mod input;
pub mod tags;
pub mod time;
pub mod toggle;

pub use error::{Error, Result};
pub use id::{IdGenerator, ObjectId};
pub use input::{InputAction, InputService, InputState};
pub use tags::Tag;
pub use time::{FixedClock, FrameTime};
pub use toggle::Toggle;

pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::id::{IdGenerator, ObjectId};
    pub use crate::input::{InputAction, InputService, InputState};
    pub use crate::tags::Tag;
    pub use crate::time::{FixedClock, FrameTime};
    pub use crate::toggle::Toggle;
}
