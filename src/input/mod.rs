//! Input normalization core.
//!
//! This module translates raw backend signals into the canonical event
//! vocabulary. It maintains per-session key and button state, derives motion
//! for sources without relative input, and delivers normalized events to
//! registered callbacks either immediately or through a polled queue.

pub mod error;
pub mod events;
pub mod keymap;
pub mod modifiers;
pub mod raw;
pub mod session;

// Re-export commonly used types at module level
pub use error::InputError;
pub use events::{Action, Key, KeyLocation, MouseButton, TouchPhase, TouchPoint};
pub use keymap::key_from_code;
pub use modifiers::Modifiers;
pub use raw::RawSignal;
pub use session::{CursorMode, InputMode, InputSession};
