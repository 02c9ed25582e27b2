//! Keyboard shortcut translation from iced key events.

use iced::keyboard::{key, Key, Modifiers};
use tilu_core::shortcuts::{self, KeyPress};

use crate::app::Message;

/// Map an unhandled key press to a message.
pub fn shortcut_message(pressed: Key, modifiers: Modifiers) -> Option<Message> {
    let key = match pressed.as_ref() {
        Key::Named(key::Named::Space) => shortcuts::Key::Space,
        Key::Character(c) => c
            .chars()
            .next()
            .map_or(shortcuts::Key::Other, shortcuts::Key::Char),
        _ => shortcuts::Key::Other,
    };

    shortcuts::resolve(KeyPress {
        key,
        ctrl: modifiers.command(),
    })
    .map(Message::Shortcut)
}
