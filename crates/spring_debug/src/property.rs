//! Per-channel debug draw style

use serde::{Deserialize, Serialize};
use spring_math::Color;

/// Whether and how one debug channel is drawn
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugProperty {
    pub show: bool,
    pub color: Color,
    pub line_thickness: f32,
}

impl DebugProperty {
    pub const fn new(color: Color) -> Self {
        Self {
            show: true,
            color,
            line_thickness: 1.0,
        }
    }

    pub fn with_show(mut self, show: bool) -> Self {
        self.show = show;
        self
    }

    pub fn with_line_thickness(mut self, thickness: f32) -> Self {
        self.line_thickness = thickness;
        self
    }
}

impl Default for DebugProperty {
    fn default() -> Self {
        Self::new(Color::RED)
    }
}
