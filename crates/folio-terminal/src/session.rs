//! Per-session prompt state.

/// Default prompt label.
pub const HOME_LABEL: &str = "~";

/// The prompt label and the line being composed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    directory: String,
    /// Text currently in the input field.
    pub input: String,
}

impl SessionState {
    pub fn new(directory: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            input: String::new(),
        }
    }

    /// Cosmetic working-directory label. No command changes it.
    pub fn directory(&self) -> &str {
        &self.directory
    }

    /// Take the current input, leaving the buffer empty.
    pub fn take_input(&mut self) -> String {
        std::mem::take(&mut self.input)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(HOME_LABEL)
    }
}
