//! Localised UI strings

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Key to display string table
///
/// Lookups of unknown keys return the key itself, so a missing translation
/// shows up on screen instead of an empty prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Localiser {
    strings: HashMap<String, String>,
}

impl Localiser {
    pub const ACTION_GRAB: &'static str = "ACTION_GRAB";
    pub const ACTION_DROP: &'static str = "ACTION_DROP";
    pub const ACTION_RESET_ROTATION: &'static str = "ACTION_RESET_ROTATION";
    pub const ACTION_OPEN: &'static str = "ACTION_OPEN";
    pub const ACTION_CLOSE: &'static str = "ACTION_CLOSE";

    /// Empty table, every lookup falls back to its key
    pub fn empty() -> Self {
        Self {
            strings: HashMap::new(),
        }
    }

    pub fn with_string(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.strings.insert(key.into(), value.into());
        self
    }

    /// Add every entry of `other`, replacing existing keys
    pub fn merge(&mut self, other: Localiser) {
        self.strings.extend(other.strings);
    }

    pub fn get<'a>(&'a self, key: &'a str) -> &'a str {
        match self.strings.get(key) {
            Some(value) => value.as_str(),
            None => {
                log::debug!("No string for key {key}");
                key
            }
        }
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

impl Default for Localiser {
    fn default() -> Self {
        Self::empty()
            .with_string(Self::ACTION_GRAB, "Grab")
            .with_string(Self::ACTION_DROP, "Drop")
            .with_string(Self::ACTION_RESET_ROTATION, "Reset Rotation")
            .with_string(Self::ACTION_OPEN, "Open")
            .with_string(Self::ACTION_CLOSE, "Close")
    }
}
