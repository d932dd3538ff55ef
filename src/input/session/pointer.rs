//! Pointer, wheel, touch, and resize signal handling.

use log::{debug, warn};

use crate::backend::InputSource;
use crate::input::events::{Action, MouseButton, TouchPhase, TouchPoint};
use crate::input::raw::{DELTA_MODE_LINE, DELTA_MODE_PIXEL};

use super::InputSession;
use super::dispatch::InputEvent;

/// Wheel multiplier for pixel-granularity deltas.
const PIXEL_SCROLL_SCALE: f64 = 0.1;

impl<S: InputSource> InputSession<S> {
    /// Processes a mouse button transition.
    ///
    /// The raw index is validated against the three-button range before the
    /// swap to canonical order, and out-of-range buttons are dropped. Button
    /// gestures also satisfy any pending fullscreen request, even when the
    /// button itself is dropped.
    pub(super) fn on_mouse_button(&mut self, raw_button: u32, action: Action) {
        self.consume_pending_fullscreen();

        let Some(button) = MouseButton::from_browser_index(raw_button) else {
            debug!("ignoring out-of-range mouse button index {raw_button}");
            return;
        };

        self.buttons[button.index()] = action;
        let mods = self.modifiers();
        self.dispatch(InputEvent::MouseButton {
            button,
            action,
            mods,
        });
    }

    /// Processes a pointer move.
    ///
    /// When the source supplies relative motion (pointer lock available) it is
    /// used directly; otherwise motion is derived from the previous cursor
    /// position. Position updates before either callback fires, so handlers
    /// reading [`get_cursor_pos`](InputSession::get_cursor_pos) see the new
    /// position.
    pub(super) fn on_mouse_move(&mut self, x: f64, y: f64, movement: Option<[f64; 2]>) {
        let (dx, dy) = match movement {
            Some([dx, dy]) => (dx, dy),
            None => (x - self.cursor_pos.0, y - self.cursor_pos.1),
        };
        self.update_pointer(x, y, dx, dy);
    }

    /// Processes a wheel signal. Stateless: offsets are scaled per delta mode,
    /// negated into canonical direction, and dispatched.
    pub(super) fn on_wheel(&mut self, delta_x: f64, delta_y: f64, delta_mode: u32) {
        let scale = match delta_mode {
            DELTA_MODE_PIXEL => PIXEL_SCROLL_SCALE,
            DELTA_MODE_LINE => 1.0,
            other => {
                warn!("unsupported wheel delta mode {other}, treating as line deltas");
                1.0
            }
        };
        self.dispatch(InputEvent::Scroll {
            xoff: -delta_x * scale,
            yoff: -delta_y * scale,
        });
    }

    /// Processes a touch signal.
    ///
    /// The first touch point drives the shared pointer path with derived
    /// motion. The full point list is stored for button emulation; an empty
    /// list (last finger lifted, or the gesture was cancelled) ends emulation
    /// and falls back to the real button table.
    pub(super) fn on_touch(&mut self, phase: TouchPhase, points: Vec<TouchPoint>) {
        self.consume_pending_fullscreen();
        debug!("touch {phase}: {} active point(s)", points.len());

        if let Some(first) = points.first() {
            let dx = first.x - self.cursor_pos.0;
            let dy = first.y - self.cursor_pos.1;
            let (x, y) = (first.x, first.y);
            self.update_pointer(x, y, dx, dy);
        }
        self.touches = points;
    }

    /// Processes a size change. Framebuffer size is the logical size scaled to
    /// device pixels, rounded to the nearest integer per axis, and its
    /// callback fires before the window size callback.
    pub(super) fn on_resize(&mut self, width: u32, height: u32, scale_factor: f64) {
        let fb_width = scaled_extent(width, scale_factor);
        let fb_height = scaled_extent(height, scale_factor);
        self.window_size = (width, height);
        self.framebuffer_size = (fb_width, fb_height);
        self.dispatch(InputEvent::FramebufferSize {
            width: fb_width,
            height: fb_height,
        });
        self.dispatch(InputEvent::Size { width, height });
    }

    fn update_pointer(&mut self, x: f64, y: f64, dx: f64, dy: f64) {
        self.cursor_pos = (x, y);
        self.dispatch(InputEvent::CursorPos { x, y });
        self.dispatch(InputEvent::MouseMovement { x, y, dx, dy });
    }
}

fn scaled_extent(logical: u32, scale_factor: f64) -> u32 {
    (logical as f64 * scale_factor + 0.5) as u32
}

#[cfg(test)]
mod tests {
    use super::scaled_extent;

    #[test]
    fn scaled_extent_rounds_to_nearest() {
        assert_eq!(scaled_extent(800, 1.0), 800);
        assert_eq!(scaled_extent(800, 1.5), 1200);
        assert_eq!(scaled_extent(601, 1.5), 902);
        assert_eq!(scaled_extent(800, 2.0), 1600);
    }
}
