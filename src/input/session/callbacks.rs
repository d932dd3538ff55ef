//! Callback registration for input event delivery.
//!
//! Each event kind has one callback slot. Setting a callback returns the
//! previously installed one so callers can chain or restore handlers.

use crate::backend::InputSource;
use crate::input::events::{Action, Key, MouseButton};
use crate::input::modifiers::Modifiers;

use super::InputSession;

/// Invoked for key press, repeat, and release events.
///
/// Arguments are the canonical key, the platform scancode (`-1` when the
/// source cannot provide one), the action, and the modifier snapshot.
pub type KeyCallback = Box<dyn FnMut(Key, i32, Action, Modifiers)>;

/// Invoked for mouse button press and release events.
pub type MouseButtonCallback = Box<dyn FnMut(MouseButton, Action, Modifiers)>;

/// Invoked with the new cursor position after every pointer move.
pub type CursorPosCallback = Box<dyn FnMut(f64, f64)>;

/// Invoked with position and relative motion `(x, y, dx, dy)` after every
/// pointer move.
pub type MouseMovementCallback = Box<dyn FnMut(f64, f64, f64, f64)>;

/// Invoked with scroll offsets in canonical direction (positive is up/left).
pub type ScrollCallback = Box<dyn FnMut(f64, f64)>;

/// Invoked with the logical window size after a resize.
pub type SizeCallback = Box<dyn FnMut(u32, u32)>;

/// Invoked with the framebuffer size in device pixels after a resize.
pub type FramebufferSizeCallback = Box<dyn FnMut(u32, u32)>;

#[derive(Default)]
pub(crate) struct CallbackRegistry {
    pub(crate) key: Option<KeyCallback>,
    pub(crate) mouse_button: Option<MouseButtonCallback>,
    pub(crate) cursor_pos: Option<CursorPosCallback>,
    pub(crate) mouse_movement: Option<MouseMovementCallback>,
    pub(crate) scroll: Option<ScrollCallback>,
    pub(crate) size: Option<SizeCallback>,
    pub(crate) framebuffer_size: Option<FramebufferSizeCallback>,
}

impl<S: InputSource> InputSession<S> {
    /// Installs the key callback, returning the previous one if any.
    pub fn set_key_callback<F>(&mut self, callback: F) -> Option<KeyCallback>
    where
        F: FnMut(Key, i32, Action, Modifiers) + 'static,
    {
        self.callbacks.key.replace(Box::new(callback))
    }

    /// Removes the key callback, returning it if one was installed.
    pub fn clear_key_callback(&mut self) -> Option<KeyCallback> {
        self.callbacks.key.take()
    }

    /// Installs the mouse button callback, returning the previous one if any.
    pub fn set_mouse_button_callback<F>(&mut self, callback: F) -> Option<MouseButtonCallback>
    where
        F: FnMut(MouseButton, Action, Modifiers) + 'static,
    {
        self.callbacks.mouse_button.replace(Box::new(callback))
    }

    /// Removes the mouse button callback, returning it if one was installed.
    pub fn clear_mouse_button_callback(&mut self) -> Option<MouseButtonCallback> {
        self.callbacks.mouse_button.take()
    }

    /// Installs the cursor position callback, returning the previous one if any.
    pub fn set_cursor_pos_callback<F>(&mut self, callback: F) -> Option<CursorPosCallback>
    where
        F: FnMut(f64, f64) + 'static,
    {
        self.callbacks.cursor_pos.replace(Box::new(callback))
    }

    /// Removes the cursor position callback, returning it if one was installed.
    pub fn clear_cursor_pos_callback(&mut self) -> Option<CursorPosCallback> {
        self.callbacks.cursor_pos.take()
    }

    /// Installs the mouse movement callback, returning the previous one if any.
    pub fn set_mouse_movement_callback<F>(&mut self, callback: F) -> Option<MouseMovementCallback>
    where
        F: FnMut(f64, f64, f64, f64) + 'static,
    {
        self.callbacks.mouse_movement.replace(Box::new(callback))
    }

    /// Removes the mouse movement callback, returning it if one was installed.
    pub fn clear_mouse_movement_callback(&mut self) -> Option<MouseMovementCallback> {
        self.callbacks.mouse_movement.take()
    }

    /// Installs the scroll callback, returning the previous one if any.
    pub fn set_scroll_callback<F>(&mut self, callback: F) -> Option<ScrollCallback>
    where
        F: FnMut(f64, f64) + 'static,
    {
        self.callbacks.scroll.replace(Box::new(callback))
    }

    /// Removes the scroll callback, returning it if one was installed.
    pub fn clear_scroll_callback(&mut self) -> Option<ScrollCallback> {
        self.callbacks.scroll.take()
    }

    /// Installs the window size callback, returning the previous one if any.
    pub fn set_size_callback<F>(&mut self, callback: F) -> Option<SizeCallback>
    where
        F: FnMut(u32, u32) + 'static,
    {
        self.callbacks.size.replace(Box::new(callback))
    }

    /// Removes the window size callback, returning it if one was installed.
    pub fn clear_size_callback(&mut self) -> Option<SizeCallback> {
        self.callbacks.size.take()
    }

    /// Installs the framebuffer size callback, returning the previous one if
    /// any.
    pub fn set_framebuffer_size_callback<F>(&mut self, callback: F) -> Option<FramebufferSizeCallback>
    where
        F: FnMut(u32, u32) + 'static,
    {
        self.callbacks.framebuffer_size.replace(Box::new(callback))
    }

    /// Removes the framebuffer size callback, returning it if one was
    /// installed.
    pub fn clear_framebuffer_size_callback(&mut self) -> Option<FramebufferSizeCallback> {
        self.callbacks.framebuffer_size.take()
    }
}
