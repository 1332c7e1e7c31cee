//! Runtime on/off switch for components

/// A component that can be enabled and disabled at runtime
pub trait Toggle {
    fn set_enabled(&mut self, enabled: bool);

    fn is_enabled(&self) -> bool;
}
