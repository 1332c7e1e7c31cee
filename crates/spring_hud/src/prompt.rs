//! Input prompts
//!
//! One prompt per registered input action. Gameplay components flip
//! visibility and set text; the UI redraws when [`PromptController::state_hash`]
//! changes.

use std::collections::hash_map::DefaultHasher;
use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

use spring_core::{InputAction, Result};

/// Display state of one prompt
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PromptState {
    pub visible: bool,
    pub enabled: bool,
    /// Replaces the action's default label
    pub text_override: Option<String>,
}

impl Default for PromptState {
    fn default() -> Self {
        Self {
            visible: false,
            enabled: true,
            text_override: None,
        }
    }
}

/// Looks up the glyph (key or button icon) bound to an action
pub trait GlyphSource {
    fn glyph(&self, action: InputAction) -> Option<String>;
}

/// Prompt state for every registered input action
#[derive(Debug, Clone, Default)]
pub struct PromptController {
    prompts: BTreeMap<InputAction, PromptState>,
    /// Show every prompt regardless of visibility, for layout checks
    pub debug_draw_all: bool,
}

impl PromptController {
    pub fn from_actions(actions: impl IntoIterator<Item = InputAction>) -> Self {
        Self {
            prompts: actions
                .into_iter()
                .map(|action| (action, PromptState::default()))
                .collect(),
            debug_draw_all: false,
        }
    }

    /// Build from the action names the host has registered
    pub fn from_registered<'a>(names: impl IntoIterator<Item = &'a str>) -> Result<Self> {
        let actions = names
            .into_iter()
            .map(str::parse::<InputAction>)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_actions(actions))
    }

    pub fn get(&self, action: InputAction) -> Option<&PromptState> {
        self.prompts.get(&action)
    }

    pub fn is_visible(&self, action: InputAction) -> bool {
        self.debug_draw_all || self.prompts.get(&action).is_some_and(|p| p.visible)
    }

    pub fn set_prompt_visible(&mut self, action: InputAction, visible: bool) {
        if let Some(prompt) = self.lookup(action) {
            prompt.visible = visible;
        }
    }

    pub fn set_prompt_enabled(&mut self, action: InputAction, enabled: bool) {
        if let Some(prompt) = self.lookup(action) {
            prompt.enabled = enabled;
        }
    }

    pub fn set_text_override(&mut self, action: InputAction, text: impl Into<String>) {
        let text = text.into();
        if let Some(prompt) = self.lookup(action) {
            if prompt.text_override.as_deref() != Some(text.as_str()) {
                prompt.text_override = Some(text);
            }
        }
    }

    pub fn clear_text_override(&mut self, action: InputAction) {
        if let Some(prompt) = self.lookup(action) {
            prompt.text_override = None;
        }
    }

    /// Prompts to draw this frame, in action order
    pub fn visible_prompts(&self) -> impl Iterator<Item = (InputAction, &PromptState)> {
        self.prompts
            .iter()
            .filter(|(_, p)| self.debug_draw_all || p.visible)
            .map(|(action, p)| (*action, p))
    }

    pub fn glyph(&self, action: InputAction, source: &dyn GlyphSource) -> Option<String> {
        source.glyph(action)
    }

    /// Changes whenever anything drawn changes
    pub fn state_hash(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.debug_draw_all.hash(&mut hasher);
        for (action, prompt) in &self.prompts {
            action.hash(&mut hasher);
            prompt.hash(&mut hasher);
        }
        hasher.finish()
    }

    fn lookup(&mut self, action: InputAction) -> Option<&mut PromptState> {
        let prompt = self.prompts.get_mut(&action);
        if prompt.is_none() {
            log::trace!("No prompt registered for action {action}");
        }
        prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Keyboard;

    impl GlyphSource for Keyboard {
        fn glyph(&self, action: InputAction) -> Option<String> {
            match action {
                InputAction::Use => Some("E".into()),
                _ => None,
            }
        }
    }

    #[test]
    fn test_prompts_start_hidden_and_enabled() {
        let prompts = PromptController::from_actions([InputAction::Use, InputAction::Grab]);
        let state = prompts.get(InputAction::Use).unwrap();
        assert!(!state.visible);
        assert!(state.enabled);
        assert!(prompts.get(InputAction::Jump).is_none());
    }

    #[test]
    fn test_from_registered_names() {
        let prompts = PromptController::from_registered(["use", "grab"]).unwrap();
        assert!(prompts.get(InputAction::Grab).is_some());
        assert!(PromptController::from_registered(["use", "fly"]).is_err());
    }

    #[test]
    fn test_unregistered_action_is_ignored() {
        let mut prompts = PromptController::from_actions([InputAction::Use]);
        let before = prompts.state_hash();
        prompts.set_prompt_visible(InputAction::Grab, true);
        assert_eq!(prompts.state_hash(), before);
    }

    #[test]
    fn test_hash_tracks_changes() {
        let mut prompts = PromptController::from_actions(InputAction::ALL);
        let initial = prompts.state_hash();

        prompts.set_prompt_visible(InputAction::Use, true);
        let shown = prompts.state_hash();
        assert_ne!(shown, initial);

        prompts.set_text_override(InputAction::Use, "Open");
        assert_ne!(prompts.state_hash(), shown);

        prompts.clear_text_override(InputAction::Use);
        prompts.set_prompt_visible(InputAction::Use, false);
        assert_eq!(prompts.state_hash(), initial);
    }

    #[test]
    fn test_visible_prompts_and_debug_draw_all() {
        let mut prompts = PromptController::from_actions([InputAction::Use, InputAction::Grab]);
        prompts.set_prompt_visible(InputAction::Grab, true);
        let visible: Vec<_> = prompts.visible_prompts().map(|(a, _)| a).collect();
        assert_eq!(visible, vec![InputAction::Grab]);

        prompts.debug_draw_all = true;
        assert_eq!(prompts.visible_prompts().count(), 2);
        assert!(prompts.is_visible(InputAction::Use));
    }

    #[test]
    fn test_glyph_lookup() {
        let prompts = PromptController::from_actions([InputAction::Use]);
        assert_eq!(prompts.glyph(InputAction::Use, &Keyboard), Some("E".into()));
        assert_eq!(prompts.glyph(InputAction::Grab, &Keyboard), None);
    }
}
