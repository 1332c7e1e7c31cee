//! Spring HUD - Screen Elements
//!
//! This crate provides the on-screen pieces the interaction components drive.
//!
//! # Features
//!
//! - Input prompts keyed by input action (visible, enabled, text override)
//! - Localised action strings
//! - Crosshair
//!
//! # Example
//!
//! ```ignore
//! use spring_hud::prelude::*;
//!
//! let mut prompts = PromptController::from_actions(InputAction::ALL);
//! let strings = Localiser::default();
//!
//! prompts.set_prompt_visible(InputAction::Use, true);
//! prompts.set_text_override(InputAction::Use, strings.get(Localiser::ACTION_OPEN));
//!
//! let crosshair = Crosshair::default();
//! crosshair.paint(&mut painter, Vec2::new(1920.0, 1080.0));
//! ```

pub mod crosshair;
pub mod localiser;
pub mod painter;
pub mod prompt;

pub mod prelude {
    pub use crate::crosshair::Crosshair;
    pub use crate::localiser::Localiser;
    pub use crate::painter::{HudPainter, HudShape, RecordingPainter};
    pub use crate::prompt::{GlyphSource, PromptController, PromptState};
    pub use spring_core::InputAction;
    pub use spring_math::{Color, Vec2};
}

pub use prelude::*;
