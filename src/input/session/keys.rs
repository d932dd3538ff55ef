//! Keyboard signal handling.

use log::debug;

use crate::backend::InputSource;
use crate::input::events::{Action, Key, KeyLocation};
use crate::input::keymap::key_from_code;
use crate::input::modifiers::Modifiers;

use super::InputSession;
use super::dispatch::InputEvent;

/// Scancode reported when the source does not expose hardware scancodes.
const SCANCODE_UNAVAILABLE: i32 = -1;

/// Sparse key action table, indexed by canonical key discriminant.
///
/// Grows lazily to the highest key seen. Keys never pressed read as
/// [`Action::Release`] without allocating.
#[derive(Debug, Default)]
pub(super) struct KeyTable {
    entries: Vec<Action>,
}

impl KeyTable {
    pub(super) fn set(&mut self, key: Key, action: Action) {
        let Some(index) = key.index() else { return };
        if index >= self.entries.len() {
            self.entries.resize(index + 1, Action::Release);
        }
        self.entries[index] = action;
    }

    pub(super) fn get(&self, key: Key) -> Action {
        key.index()
            .and_then(|index| self.entries.get(index).copied())
            .unwrap_or(Action::Release)
    }

    fn held(&self, key: Key) -> bool {
        matches!(self.get(key), Action::Press | Action::Repeat)
    }
}

impl<S: InputSource> InputSession<S> {
    /// Processes a key press or auto-repeat signal.
    ///
    /// The raw code is translated through the keymap; codes with no canonical
    /// key are dropped without updating state. Key gestures also satisfy any
    /// pending fullscreen request before the key itself is handled.
    pub(super) fn on_key_down(&mut self, code: u32, repeat: bool, location: KeyLocation) {
        self.consume_pending_fullscreen();

        let key = key_from_code(code, location);
        if key == Key::Unknown {
            debug!("ignoring unmapped key code {code} ({location:?})");
            return;
        }

        let action = if repeat { Action::Repeat } else { Action::Press };
        self.keys.set(key, action);
        let mods = self.modifiers();
        self.dispatch(InputEvent::Key {
            key,
            scancode: SCANCODE_UNAVAILABLE,
            action,
            mods,
        });
    }

    /// Processes a key release signal.
    pub(super) fn on_key_up(&mut self, code: u32, location: KeyLocation) {
        self.consume_pending_fullscreen();

        let key = key_from_code(code, location);
        if key == Key::Unknown {
            debug!("ignoring unmapped key code {code} ({location:?})");
            return;
        }

        self.keys.set(key, Action::Release);
        let mods = self.modifiers();
        self.dispatch(InputEvent::Key {
            key,
            scancode: SCANCODE_UNAVAILABLE,
            action: Action::Release,
            mods,
        });
    }

    /// Modifier snapshot derived from the session's own key table.
    ///
    /// Best effort: a modifier pressed before the session existed is not
    /// visible until its next transition.
    pub fn modifiers(&self) -> Modifiers {
        Modifiers {
            shift: self.keys.held(Key::LeftShift) || self.keys.held(Key::RightShift),
            ctrl: self.keys.held(Key::LeftControl) || self.keys.held(Key::RightControl),
            alt: self.keys.held(Key::LeftAlt) || self.keys.held(Key::RightAlt),
            superkey: self.keys.held(Key::LeftSuper) || self.keys.held(Key::RightSuper),
        }
    }
}
