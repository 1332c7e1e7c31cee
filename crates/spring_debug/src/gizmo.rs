//! Gizmo drawing sink

use spring_math::{Color, Vec3, AABB};

use crate::property::DebugProperty;

/// Immediate-mode line sink provided by the host renderer
pub trait Gizmo {
    fn line(&mut self, start: Vec3, end: Vec3, color: Color, thickness: f32);
}

/// Channel-aware drawing on top of any [`Gizmo`]
///
/// Every call is a no-op when the property's `show` flag is off.
pub trait SpringGizmo: Gizmo {
    fn draw_line(&mut self, start: Vec3, end: Vec3, property: &DebugProperty) {
        if !property.show {
            return;
        }
        self.line(start, end, property.color, property.line_thickness);
    }

    fn draw_line_bbox(&mut self, bounds: &AABB, property: &DebugProperty) {
        if !property.show {
            return;
        }
        let corners = bounds.corners();
        for (a, b) in AABB::EDGES {
            self.line(corners[a], corners[b], property.color, property.line_thickness);
        }
    }
}

impl<G: Gizmo + ?Sized> SpringGizmo for G {}

/// A recorded line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GizmoLine {
    pub start: Vec3,
    pub end: Vec3,
    pub color: Color,
    pub thickness: f32,
}

/// Gizmo that keeps every line it is given, for headless runs and tests
#[derive(Debug, Default, Clone)]
pub struct RecordingGizmo {
    lines: Vec<GizmoLine>,
}

impl RecordingGizmo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[GizmoLine] {
        &self.lines
    }

    /// Take the recorded lines, leaving the gizmo empty
    pub fn drain(&mut self) -> Vec<GizmoLine> {
        std::mem::take(&mut self.lines)
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl Gizmo for RecordingGizmo {
    fn line(&mut self, start: Vec3, end: Vec3, color: Color, thickness: f32) {
        self.lines.push(GizmoLine {
            start,
            end,
            color,
            thickness,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_property_draws_nothing() {
        let mut gizmo = RecordingGizmo::new();
        let hidden = DebugProperty::new(Color::RED).with_show(false);
        gizmo.draw_line(Vec3::ZERO, Vec3::X, &hidden);
        gizmo.draw_line_bbox(&AABB::new(Vec3::ZERO, Vec3::ONE), &hidden);
        assert!(gizmo.lines().is_empty());
    }

    #[test]
    fn test_line_uses_property_style() {
        let mut gizmo = RecordingGizmo::new();
        let property = DebugProperty::new(Color::CYAN).with_line_thickness(3.0);
        gizmo.draw_line(Vec3::ZERO, Vec3::X, &property);
        let line = gizmo.lines()[0];
        assert_eq!(line.color, Color::CYAN);
        assert_eq!(line.thickness, 3.0);
    }

    #[test]
    fn test_bbox_draws_twelve_edges() {
        let mut gizmo = RecordingGizmo::new();
        gizmo.draw_line_bbox(&AABB::new(Vec3::ZERO, Vec3::ONE), &DebugProperty::default());
        assert_eq!(gizmo.drain().len(), 12);
        assert!(gizmo.lines().is_empty());
    }

    #[test]
    fn test_works_through_trait_object() {
        let mut recording = RecordingGizmo::new();
        let gizmo: &mut dyn Gizmo = &mut recording;
        gizmo.draw_line(Vec3::ZERO, Vec3::Y, &DebugProperty::default());
        assert_eq!(recording.lines().len(), 1);
    }
}
