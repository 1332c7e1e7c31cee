//! Input actions and polling
//!
//! Gameplay code never sees devices. It asks an [`InputService`] whether a
//! named [`InputAction`] was pressed this frame or is being held down.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Every action the host's input settings register
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum InputAction {
    // Movement
    Forward,
    Backward,
    Left,
    Right,
    Jump,
    Run,
    Walk,
    Duck,

    // Actions
    Attack1,
    Attack2,
    Reload,
    Use,
    Grab,
    ResetGrabbedRotation,

    // Inventory
    Slot1,
    Slot2,
    Slot3,
    Slot4,
    Slot5,
    Slot6,
    Slot7,
    Slot8,
    Slot9,
    Slot0,
    SlotPrev,
    SlotNext,

    // Other
    View,
    Voice,
    Drop,
    Flashlight,
    Score,
    Menu,
    Chat,
}

impl InputAction {
    /// All actions, in declaration order
    pub const ALL: [InputAction; 33] = [
        Self::Forward,
        Self::Backward,
        Self::Left,
        Self::Right,
        Self::Jump,
        Self::Run,
        Self::Walk,
        Self::Duck,
        Self::Attack1,
        Self::Attack2,
        Self::Reload,
        Self::Use,
        Self::Grab,
        Self::ResetGrabbedRotation,
        Self::Slot1,
        Self::Slot2,
        Self::Slot3,
        Self::Slot4,
        Self::Slot5,
        Self::Slot6,
        Self::Slot7,
        Self::Slot8,
        Self::Slot9,
        Self::Slot0,
        Self::SlotPrev,
        Self::SlotNext,
        Self::View,
        Self::Voice,
        Self::Drop,
        Self::Flashlight,
        Self::Score,
        Self::Menu,
        Self::Chat,
    ];

    /// Name the action is registered under in the host's input settings
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Forward => "Forward",
            Self::Backward => "Backward",
            Self::Left => "Left",
            Self::Right => "Right",
            Self::Jump => "Jump",
            Self::Run => "Run",
            Self::Walk => "Walk",
            Self::Duck => "Duck",
            Self::Attack1 => "attack1",
            Self::Attack2 => "attack2",
            Self::Reload => "reload",
            Self::Use => "use",
            Self::Grab => "grab",
            Self::ResetGrabbedRotation => "resetGrabbedRotation",
            Self::Slot1 => "Slot1",
            Self::Slot2 => "Slot2",
            Self::Slot3 => "Slot3",
            Self::Slot4 => "Slot4",
            Self::Slot5 => "Slot5",
            Self::Slot6 => "Slot6",
            Self::Slot7 => "Slot7",
            Self::Slot8 => "Slot8",
            Self::Slot9 => "Slot9",
            Self::Slot0 => "Slot0",
            Self::SlotPrev => "SlotPrev",
            Self::SlotNext => "SlotNext",
            Self::View => "View",
            Self::Voice => "Voice",
            Self::Drop => "Drop",
            Self::Flashlight => "Flashlight",
            Self::Score => "Score",
            Self::Menu => "Menu",
            Self::Chat => "Chat",
        }
    }
}

impl fmt::Display for InputAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputAction {
    type Err = Error;

    /// Case-insensitive, so scene files may write `Use` or `use`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|action| action.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownInputAction(s.to_string()))
    }
}

/// Input polling service provided by the host
pub trait InputService {
    /// Action went down this frame
    fn pressed(&self, action: InputAction) -> bool;

    /// Action is currently held
    fn down(&self, action: InputAction) -> bool;
}

/// Simple per-frame input state
///
/// `press` marks an action both pressed and down; `end_frame` clears the
/// pressed set so a press is seen for exactly one frame.
#[derive(Debug, Default, Clone)]
pub struct InputState {
    down: HashSet<InputAction>,
    pressed: HashSet<InputAction>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, action: InputAction) {
        if self.down.insert(action) {
            self.pressed.insert(action);
        }
    }

    pub fn release(&mut self, action: InputAction) {
        self.down.remove(&action);
        self.pressed.remove(&action);
    }

    /// Press and immediately release, visible as `pressed` until `end_frame`
    pub fn tap(&mut self, action: InputAction) {
        self.pressed.insert(action);
    }

    pub fn end_frame(&mut self) {
        self.pressed.clear();
    }
}

impl InputService for InputState {
    fn pressed(&self, action: InputAction) -> bool {
        self.pressed.contains(&action)
    }

    fn down(&self, action: InputAction) -> bool {
        self.down.contains(&action)
    }
}
