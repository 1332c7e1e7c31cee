//! Crosshair

use serde::{Deserialize, Serialize};
use spring_core::Toggle;
use spring_math::{Color, Vec2};

use crate::painter::HudPainter;

/// Circle at the centre of the screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Crosshair {
    /// Authoring switch
    pub draw: bool,
    /// Radius in pixels
    pub size: f32,
    pub color: Color,
    /// Runtime switch, flipped by hotkey togglers
    #[serde(skip)]
    enabled: bool,
}

impl Default for Crosshair {
    fn default() -> Self {
        Self {
            draw: true,
            size: 4.0,
            color: Color::WHITE,
            enabled: true,
        }
    }
}

impl Crosshair {
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_draw(mut self, draw: bool) -> Self {
        self.draw = draw;
        self
    }

    /// Paint for one render frame
    pub fn paint(&self, painter: &mut dyn HudPainter, screen_size: Vec2) {
        if !(self.draw && self.enabled) {
            return;
        }
        painter.draw_circle(screen_size * 0.5, self.size, self.color);
    }
}

impl Toggle for Crosshair {
    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}
