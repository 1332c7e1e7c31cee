//! Hotkey toggling of components

use std::cell::RefCell;
use std::rc::Rc;

use spring_core::{InputAction, InputService, Toggle};

/// Flips a set of [`Toggle`] components on and off with one input action
pub struct HotkeyToggler {
    enabled: bool,
    hotkey: InputAction,
    targets: Vec<Rc<RefCell<dyn Toggle>>>,
}

impl HotkeyToggler {
    pub fn new(hotkey: InputAction, enabled: bool) -> Self {
        Self {
            enabled,
            hotkey,
            targets: Vec::new(),
        }
    }

    pub fn with_target(mut self, target: Rc<RefCell<dyn Toggle>>) -> Self {
        self.targets.push(target);
        self
    }

    pub fn hotkey(&self) -> InputAction {
        self.hotkey
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Push the initial state to every target
    pub fn awake(&mut self) {
        self.apply();
    }

    /// Render-frame update
    pub fn update(&mut self, input: &dyn InputService) {
        if input.pressed(self.hotkey) {
            self.toggle();
        }
    }

    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
        log::debug!(
            "{} {} target(s) with {}",
            if self.enabled { "Enabled" } else { "Disabled" },
            self.targets.len(),
            self.hotkey
        );
        self.apply();
    }

    fn apply(&self) {
        for target in &self.targets {
            target.borrow_mut().set_enabled(self.enabled);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spring_core::InputState;

    #[derive(Default)]
    struct Switch(bool);

    impl Toggle for Switch {
        fn set_enabled(&mut self, enabled: bool) {
            self.0 = enabled;
        }

        fn is_enabled(&self) -> bool {
            self.0
        }
    }

    #[test]
    fn test_awake_applies_initial_state() {
        let switch = Rc::new(RefCell::new(Switch(true)));
        let mut toggler =
            HotkeyToggler::new(InputAction::Flashlight, false).with_target(switch.clone());
        toggler.awake();
        assert!(!switch.borrow().is_enabled());
    }

    #[test]
    fn test_hotkey_flips_every_target() {
        let a = Rc::new(RefCell::new(Switch(false)));
        let b = Rc::new(RefCell::new(Switch(false)));
        let mut toggler = HotkeyToggler::new(InputAction::Flashlight, false)
            .with_target(a.clone())
            .with_target(b.clone());
        toggler.awake();

        let mut input = InputState::new();
        toggler.update(&input);
        assert!(!a.borrow().is_enabled());

        input.tap(InputAction::Flashlight);
        toggler.update(&input);
        assert!(toggler.is_enabled());
        assert!(a.borrow().is_enabled() && b.borrow().is_enabled());
    }
}
