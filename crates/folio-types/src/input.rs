//! Platform-agnostic input event types.
//!
//! Every host maps its native input to these enums. The terminal core
//! never sees raw platform input.

/// A platform-agnostic input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// The input field's whole value changed (e.g. an HTML `input` event).
    TextChanged(String),
    /// Character typed (hosts that deliver individual keys).
    TextInput(char),
    /// Backspace / delete-left.
    Backspace,
    /// A non-text key was pressed.
    KeyPress(Key),
    /// Pointer click anywhere on the terminal surface.
    PointerClick { x: i32, y: i32 },
    /// A quick-launch shortcut on the welcome card was activated.
    QuickLaunch(String),
    /// The title-bar reset control was activated.
    ResetRequested,
    /// User requested quit (window close, end of input).
    Quit,
}

/// Non-text keys the terminal distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// The commit key: submits the input buffer.
    Enter,
    Escape,
    Tab,
    Up,
    Down,
}

impl InputEvent {
    /// Whether this event submits the input buffer.
    pub fn is_commit(&self) -> bool {
        matches!(self, InputEvent::KeyPress(Key::Enter))
    }
}
