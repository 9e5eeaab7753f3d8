use serde::{Deserialize, Serialize};

/// A keyboard key, identified by the character it produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyCode(pub char);

impl KeyCode {
    pub const Q: KeyCode = KeyCode('q');
    pub const W: KeyCode = KeyCode('w');

    /// Keys compare case-insensitively.
    #[must_use]
    pub fn matches(self, other: KeyCode) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

/// Discrete triggers a host can deliver to a recording session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecorderCommand {
    Start,
    Stop,
}

/// Key bindings for starting and stopping a recording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecorderControls {
    pub start_key: KeyCode,
    pub stop_key: KeyCode,
}

impl Default for RecorderControls {
    fn default() -> Self {
        Self {
            start_key: KeyCode::Q,
            stop_key: KeyCode::W,
        }
    }
}

impl RecorderControls {
    /// Maps a key press to a command. Start wins if both bindings share a key.
    #[must_use]
    pub fn command_for(&self, key: KeyCode) -> Option<RecorderCommand> {
        if self.start_key.matches(key) {
            Some(RecorderCommand::Start)
        } else if self.stop_key.matches(key) {
            Some(RecorderCommand::Stop)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bindings() {
        let controls = RecorderControls::default();
        assert_eq!(controls.command_for(KeyCode('Q')), Some(RecorderCommand::Start));
        assert_eq!(controls.command_for(KeyCode::W), Some(RecorderCommand::Stop));
        assert_eq!(controls.command_for(KeyCode('e')), None);
    }
}
