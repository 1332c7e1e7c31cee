//! HUD painting sink

use spring_math::{Color, Vec2};

/// Screen-space painter provided by the host's camera
pub trait HudPainter {
    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color);
}

/// A painted shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HudShape {
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
}

/// Painter that records shapes instead of drawing them
#[derive(Debug, Default, Clone)]
pub struct RecordingPainter {
    shapes: Vec<HudShape>,
}

impl RecordingPainter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shapes(&self) -> &[HudShape] {
        &self.shapes
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
    }
}

impl HudPainter for RecordingPainter {
    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.shapes.push(HudShape::Circle {
            center,
            radius,
            color,
        });
    }
}
