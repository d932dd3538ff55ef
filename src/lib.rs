//! Cross-backend input normalization.
//!
//! Translates raw platform input signals (browser-style key codes, reversed
//! mouse button indices, touch lists, wheel deltas in mixed units) into one
//! canonical event vocabulary, tracked per session. Backends implement
//! [`backend::InputSource`] and feed [`input::RawSignal`]s into an
//! [`input::InputSession`]; applications register callbacks and poll state
//! through the session regardless of which backend produced the input.

pub mod backend;
pub mod config;
pub mod input;
pub mod script;

pub use backend::{InputSource, SourceCapabilities, SyntheticSource};
pub use config::Config;
pub use input::{
    Action, CursorMode, InputError, InputMode, InputSession, Key, KeyLocation, Modifiers,
    MouseButton, RawSignal, TouchPhase, TouchPoint,
};
pub use script::Script;
