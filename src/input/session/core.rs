//! Session state and construction.

use std::collections::VecDeque;

use crate::backend::InputSource;
use crate::config::{DispatchConfig, DispatchPolicy};
use crate::input::events::{Action, TouchPoint};

use super::callbacks::CallbackRegistry;
use super::dispatch::InputEvent;
use super::keys::KeyTable;
use super::modes::CursorMode;

/// Per-window input session.
///
/// Owns all input state for one window: key and button tables, cursor
/// position, active touches, cursor mode, and the pending fullscreen flag.
/// Raw backend signals enter through [`ingest`](InputSession::ingest) and are
/// normalized into canonical events, which are handed to the registered
/// callbacks either immediately or from [`poll_events`](InputSession::poll_events)
/// depending on the dispatch policy.
///
/// Sessions are independent. Running two windows means running two sessions,
/// each wrapping its own [`InputSource`].
pub struct InputSession<S: InputSource> {
    /// Platform half of the session. Mode changes and fullscreen requests are
    /// forwarded here.
    pub(super) source: S,
    /// Whether callbacks run inside `ingest` or from `poll_events`.
    pub(super) policy: DispatchPolicy,
    /// Pending events under the queued policy.
    pub(super) queue: VecDeque<InputEvent>,
    pub(super) queue_capacity: usize,
    /// Events discarded because the queue was full.
    pub(super) dropped: u64,
    pub(super) callbacks: CallbackRegistry,
    /// Last observed action per canonical key.
    pub(super) keys: KeyTable,
    /// Last observed action per mouse button, in canonical order.
    pub(super) buttons: [Action; 3],
    pub(super) cursor_pos: (f64, f64),
    /// Active touch points from the most recent touch signal. Emptied when
    /// the last finger lifts, which also ends button emulation.
    pub(super) touches: Vec<TouchPoint>,
    pub(super) cursor_mode: CursorMode,
    /// Set by `request_fullscreen`, consumed by the next input gesture.
    pub(super) pending_fullscreen: bool,
    pub(super) window_size: (u32, u32),
    pub(super) framebuffer_size: (u32, u32),
}

impl<S: InputSource> InputSession<S> {
    /// Creates a session with immediate dispatch and default queue sizing.
    pub fn new(source: S) -> Self {
        Self::with_config(source, DispatchConfig::default())
    }

    /// Creates a session with an explicit dispatch configuration.
    pub fn with_config(source: S, dispatch: DispatchConfig) -> Self {
        Self {
            source,
            policy: dispatch.policy,
            queue: VecDeque::new(),
            queue_capacity: dispatch.queue_capacity,
            dropped: 0,
            callbacks: CallbackRegistry::default(),
            keys: KeyTable::default(),
            buttons: [Action::Release; 3],
            cursor_pos: (0.0, 0.0),
            touches: Vec::new(),
            cursor_mode: CursorMode::Normal,
            pending_fullscreen: false,
            window_size: (0, 0),
            framebuffer_size: (0, 0),
        }
    }

    /// Borrows the underlying input source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Mutably borrows the underlying input source.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// The dispatch policy this session was created with.
    pub fn dispatch_policy(&self) -> DispatchPolicy {
        self.policy
    }
}
