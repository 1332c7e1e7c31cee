//! Debug channels

use serde::{Deserialize, Serialize};
use spring_math::Color;

use crate::property::DebugProperty;

/// One [`DebugProperty`] per debug channel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugSettings {
    /// Box around an object the grab controller could pick up
    pub grabbable: DebugProperty,
    /// Box around the held object
    pub grabbed: DebugProperty,
    /// Line from the held object to where it is being pulled
    pub grabbed_force: DebugProperty,
    /// The interaction look ray
    pub interact_raycast: DebugProperty,
}

impl Default for DebugSettings {
    fn default() -> Self {
        Self {
            grabbable: DebugProperty::new(Color::GREEN),
            grabbed: DebugProperty::new(Color::CYAN),
            grabbed_force: DebugProperty::new(Color::CYAN),
            interact_raycast: DebugProperty::new(Color::RED).with_line_thickness(2.0),
        }
    }
}

impl DebugSettings {
    /// Every channel hidden
    pub fn hidden() -> Self {
        let mut settings = Self::default();
        for property in settings.channels_mut() {
            property.show = false;
        }
        settings
    }

    fn channels_mut(&mut self) -> [&mut DebugProperty; 4] {
        [
            &mut self.grabbable,
            &mut self.grabbed,
            &mut self.grabbed_force,
            &mut self.interact_raycast,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_hides_everything() {
        let s = DebugSettings::hidden();
        assert!(!s.grabbable.show);
        assert!(!s.grabbed.show);
        assert!(!s.grabbed_force.show);
        assert!(!s.interact_raycast.show);
        assert_eq!(s.interact_raycast.line_thickness, 2.0);
    }

    #[test]
    fn test_partial_table_keeps_defaults() {
        let s: DebugSettings = toml::from_str(
            r#"
            [grabbed]
            show = false
            "#,
        )
        .unwrap();
        assert!(!s.grabbed.show);
        assert_eq!(s.grabbed.color, Color::RED);
        assert_eq!(s.grabbable, DebugSettings::default().grabbable);
    }
}
