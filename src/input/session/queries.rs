//! Polling accessors over session state.

use crate::backend::InputSource;
use crate::input::error::InputError;
use crate::input::events::{Action, Key, MouseButton, TouchPoint};

use super::InputSession;
use super::modes::CursorMode;

impl<S: InputSource> InputSession<S> {
    /// Last observed action for a key. Keys never seen, and [`Key::Unknown`],
    /// read as [`Action::Release`].
    pub fn get_key(&self, key: Key) -> Action {
        self.keys.get(key)
    }

    /// Last observed action for a mouse button, by canonical index
    /// (0 = left, 1 = right, 2 = middle).
    ///
    /// While touches are active the real button table is shadowed by chord
    /// emulation: one finger presses left, two fingers press right, three
    /// press both, and the middle button always reads released.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::InvalidParameter`] for indices above 2.
    pub fn get_mouse_button(&self, button: u32) -> Result<Action, InputError> {
        let Some(button) = MouseButton::from_index(button) else {
            return Err(InputError::InvalidParameter(format!(
                "mouse button index {button} is out of range"
            )));
        };
        if !self.touches.is_empty() {
            return Ok(emulated_action(button, self.touches.len()));
        }
        Ok(self.buttons[button.index()])
    }

    /// Current cursor position in logical window coordinates.
    pub fn get_cursor_pos(&self) -> (f64, f64) {
        self.cursor_pos
    }

    /// Logical window size from the most recent resize signal.
    pub fn get_window_size(&self) -> (u32, u32) {
        self.window_size
    }

    /// Framebuffer size in device pixels from the most recent resize signal.
    pub fn get_framebuffer_size(&self) -> (u32, u32) {
        self.framebuffer_size
    }

    /// Current cursor mode.
    pub fn cursor_mode(&self) -> CursorMode {
        self.cursor_mode
    }

    /// Active touch points, empty when no touch gesture is in progress.
    pub fn touch_points(&self) -> &[TouchPoint] {
        &self.touches
    }
}

fn emulated_action(button: MouseButton, touch_count: usize) -> Action {
    match button {
        MouseButton::Left if matches!(touch_count, 1 | 3) => Action::Press,
        MouseButton::Right if matches!(touch_count, 2 | 3) => Action::Press,
        _ => Action::Release,
    }
}
