//! Per-window input session: state, ingestion, dispatch, and queries.
//!
//! Split across focused submodules the same way the raw signals split:
//! `keys` and `pointer` hold the ingestion handlers, `modes` the cursor and
//! fullscreen control, `dispatch` the queue and delivery, `queries` the
//! polling surface, and `callbacks` the registration API.

mod callbacks;
mod core;
mod dispatch;
mod keys;
mod modes;
mod pointer;
mod queries;


pub use callbacks::{
    CursorPosCallback, FramebufferSizeCallback, KeyCallback, MouseButtonCallback,
    MouseMovementCallback, ScrollCallback, SizeCallback,
};
pub use core::InputSession;
pub use modes::{CursorMode, InputMode};
