//! Keyboard shortcuts, independent of the GUI toolkit.

use crate::channel::ChannelId;

/// A key as seen by the shortcut table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Space,
    Char(char),
    Other,
}

/// A key press with the modifier that matters here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub ctrl: bool,
}

/// What a shortcut asks the window to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    TogglePlayback,
    OpenFiles,
    ApplySelection,
    /// Flip a channel's checkbox; visibility changes on ApplySelection.
    ToggleSelection(ChannelId),
}

/// Resolve a key press into an action.
pub fn resolve(press: KeyPress) -> Option<Action> {
    match (press.key, press.ctrl) {
        (Key::Space, false) => Some(Action::TogglePlayback),
        (Key::Char(c), true) => match c.to_ascii_lowercase() {
            'o' => Some(Action::OpenFiles),
            'd' => Some(Action::ApplySelection),
            _ => None,
        },
        (Key::Char(c), false) => c
            .to_digit(10)
            .and_then(|n| (n as usize).checked_sub(1))
            .and_then(ChannelId::new)
            .map(Action::ToggleSelection),
        _ => None,
    }
}
