//! Cursor mode control and deferred fullscreen.

use std::fmt;

use log::warn;

use crate::backend::InputSource;
use crate::input::error::InputError;

use super::InputSession;

/// Cursor behavior for a session.
///
/// Values match the numeric constants accepted by
/// [`set_input_mode`](InputSession::set_input_mode).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum CursorMode {
    /// Cursor visible and free.
    #[default]
    Normal = 0,
    /// Cursor hidden but free.
    Hidden = 1,
    /// Cursor captured by the source; motion arrives as relative deltas.
    Disabled = 2,
}

impl CursorMode {
    /// Resolves the numeric mode value, or `None` when out of range.
    pub fn from_value(value: i32) -> Option<Self> {
        match value {
            0 => Some(CursorMode::Normal),
            1 => Some(CursorMode::Hidden),
            2 => Some(CursorMode::Disabled),
            _ => None,
        }
    }

    /// Numeric value of this mode.
    pub fn value(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for CursorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CursorMode::Normal => "normal",
            CursorMode::Hidden => "hidden",
            CursorMode::Disabled => "disabled",
        };
        write!(f, "{name}")
    }
}

/// Input mode selector for the numeric mode surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum InputMode {
    /// Cursor behavior; values are [`CursorMode`] constants.
    Cursor = 0,
    /// Sticky keys. Recognized but not supported.
    StickyKeys = 1,
    /// Sticky mouse buttons. Recognized but not supported.
    StickyMouseButtons = 2,
}

impl<S: InputSource> InputSession<S> {
    /// Changes the cursor mode.
    ///
    /// On sources without pointer lock this is a no-op for every mode,
    /// including [`CursorMode::Normal`]: the request is logged and the stored
    /// mode is left unchanged. Otherwise the matching lock and visibility
    /// commands are forwarded to the source and the mode is recorded.
    pub fn set_cursor_mode(&mut self, mode: CursorMode) {
        if !self.source.capabilities().pointer_lock {
            warn!("source does not support pointer lock, ignoring cursor mode {mode}");
            return;
        }
        match mode {
            CursorMode::Normal => {
                self.source.exit_pointer_lock();
                self.source.set_cursor_visible(true);
            }
            CursorMode::Hidden => {
                self.source.exit_pointer_lock();
                self.source.set_cursor_visible(false);
            }
            CursorMode::Disabled => {
                self.source.request_pointer_lock();
            }
        }
        self.cursor_mode = mode;
    }

    /// Sets an input mode through the numeric surface.
    ///
    /// Only [`InputMode::Cursor`] is supported; the sticky modes report
    /// [`InputError::InvalidParameter`]. A cursor value outside the
    /// [`CursorMode`] range reports [`InputError::InvalidValue`], except on
    /// sources without pointer lock where the whole call degrades to a logged
    /// no-op before the value is examined.
    ///
    /// # Errors
    ///
    /// Returns an error for unsupported modes and out-of-range cursor values.
    pub fn set_input_mode(&mut self, mode: InputMode, value: i32) -> Result<(), InputError> {
        match mode {
            InputMode::Cursor => {
                if !self.source.capabilities().pointer_lock {
                    warn!("source does not support pointer lock, ignoring cursor mode value {value}");
                    return Ok(());
                }
                match CursorMode::from_value(value) {
                    Some(cursor_mode) => {
                        self.set_cursor_mode(cursor_mode);
                        Ok(())
                    }
                    None => Err(InputError::InvalidValue(format!(
                        "{value} is not a cursor mode"
                    ))),
                }
            }
            InputMode::StickyKeys => Err(InputError::InvalidParameter(
                "sticky keys are not supported".into(),
            )),
            InputMode::StickyMouseButtons => Err(InputError::InvalidParameter(
                "sticky mouse buttons are not supported".into(),
            )),
        }
    }

    /// Reads an input mode through the numeric surface.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::InvalidParameter`] for the sticky modes.
    pub fn get_input_mode(&self, mode: InputMode) -> Result<i32, InputError> {
        match mode {
            InputMode::Cursor => Ok(self.cursor_mode.value()),
            InputMode::StickyKeys => Err(InputError::InvalidParameter(
                "sticky keys are not supported".into(),
            )),
            InputMode::StickyMouseButtons => Err(InputError::InvalidParameter(
                "sticky mouse buttons are not supported".into(),
            )),
        }
    }

    /// Requests fullscreen on the next input gesture.
    ///
    /// Sources typically only honor fullscreen from inside a user gesture, so
    /// the request is deferred until the next key, mouse button, or touch
    /// signal. On sources without fullscreen support the request is logged and
    /// discarded.
    pub fn request_fullscreen(&mut self) {
        if !self.source.capabilities().fullscreen {
            warn!("source does not support fullscreen, ignoring request");
            return;
        }
        self.pending_fullscreen = true;
    }

    /// Whether a fullscreen request is waiting for a gesture.
    pub fn fullscreen_pending(&self) -> bool {
        self.pending_fullscreen
    }

    pub(super) fn consume_pending_fullscreen(&mut self) {
        if !self.pending_fullscreen {
            return;
        }
        self.pending_fullscreen = false;
        self.source.request_fullscreen();
    }
}
