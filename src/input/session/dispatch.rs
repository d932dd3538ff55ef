//! Signal ingestion and event delivery.

use log::warn;

use crate::backend::InputSource;
use crate::config::DispatchPolicy;
use crate::input::events::{Action, Key, MouseButton};
use crate::input::modifiers::Modifiers;
use crate::input::raw::RawSignal;

use super::InputSession;

/// A normalized event on its way to a callback.
///
/// State updates happen at ingestion; this is only the delivery payload, so
/// queueing it never delays what the query surface reports.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum InputEvent {
    Key {
        key: Key,
        scancode: i32,
        action: Action,
        mods: Modifiers,
    },
    MouseButton {
        button: MouseButton,
        action: Action,
        mods: Modifiers,
    },
    CursorPos {
        x: f64,
        y: f64,
    },
    MouseMovement {
        x: f64,
        y: f64,
        dx: f64,
        dy: f64,
    },
    Scroll {
        xoff: f64,
        yoff: f64,
    },
    FramebufferSize {
        width: u32,
        height: u32,
    },
    Size {
        width: u32,
        height: u32,
    },
}

impl<S: InputSource> InputSession<S> {
    /// Feeds one raw backend signal into the session.
    ///
    /// State updates always happen here; callback delivery happens here too
    /// under [`DispatchPolicy::Immediate`], or is deferred to
    /// [`poll_events`](InputSession::poll_events) under
    /// [`DispatchPolicy::Queued`].
    pub fn ingest(&mut self, signal: RawSignal) {
        match signal {
            RawSignal::KeyDown {
                code,
                repeat,
                location,
            } => self.on_key_down(code, repeat, location),
            RawSignal::KeyUp { code, location } => self.on_key_up(code, location),
            RawSignal::MouseDown { button } => self.on_mouse_button(button, Action::Press),
            RawSignal::MouseUp { button } => self.on_mouse_button(button, Action::Release),
            RawSignal::MouseMove { x, y, movement } => self.on_mouse_move(x, y, movement),
            RawSignal::Wheel {
                delta_x,
                delta_y,
                delta_mode,
            } => self.on_wheel(delta_x, delta_y, delta_mode),
            RawSignal::Touch { phase, points } => self.on_touch(phase, points),
            RawSignal::Resize {
                width,
                height,
                scale_factor,
            } => self.on_resize(width, height, scale_factor),
        }
    }

    /// Delivers all queued events to their callbacks, in ingestion order.
    ///
    /// Returns the number of events delivered. Under
    /// [`DispatchPolicy::Immediate`] the queue is always empty and this
    /// returns zero.
    pub fn poll_events(&mut self) -> usize {
        let mut delivered = 0;
        while let Some(event) = self.queue.pop_front() {
            self.deliver(event);
            delivered += 1;
        }
        delivered
    }

    /// Number of events waiting in the queue.
    pub fn pending_events(&self) -> usize {
        self.queue.len()
    }

    /// Number of events discarded because the queue was full.
    pub fn dropped_events(&self) -> u64 {
        self.dropped
    }

    pub(super) fn dispatch(&mut self, event: InputEvent) {
        match self.policy {
            DispatchPolicy::Immediate => self.deliver(event),
            DispatchPolicy::Queued => {
                if self.queue.len() >= self.queue_capacity {
                    self.dropped += 1;
                    warn!(
                        "input queue full ({} events), dropping {event:?}",
                        self.queue_capacity
                    );
                    return;
                }
                self.queue.push_back(event);
            }
        }
    }

    fn deliver(&mut self, event: InputEvent) {
        match event {
            InputEvent::Key {
                key,
                scancode,
                action,
                mods,
            } => {
                if let Some(callback) = self.callbacks.key.as_mut() {
                    callback(key, scancode, action, mods);
                }
            }
            InputEvent::MouseButton {
                button,
                action,
                mods,
            } => {
                if let Some(callback) = self.callbacks.mouse_button.as_mut() {
                    callback(button, action, mods);
                }
            }
            InputEvent::CursorPos { x, y } => {
                if let Some(callback) = self.callbacks.cursor_pos.as_mut() {
                    callback(x, y);
                }
            }
            InputEvent::MouseMovement { x, y, dx, dy } => {
                if let Some(callback) = self.callbacks.mouse_movement.as_mut() {
                    callback(x, y, dx, dy);
                }
            }
            InputEvent::Scroll { xoff, yoff } => {
                if let Some(callback) = self.callbacks.scroll.as_mut() {
                    callback(xoff, yoff);
                }
            }
            InputEvent::FramebufferSize { width, height } => {
                if let Some(callback) = self.callbacks.framebuffer_size.as_mut() {
                    callback(width, height);
                }
            }
            InputEvent::Size { width, height } => {
                if let Some(callback) = self.callbacks.size.as_mut() {
                    callback(width, height);
                }
            }
        }
    }
}
