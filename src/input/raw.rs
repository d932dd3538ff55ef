//! Raw input signal vocabulary, as delivered by event sources.
//!
//! A [`RawSignal`] carries exactly the fields the corresponding browser-style
//! event exposes, before any normalization. The enum is serde-deserializable
//! so replay scripts and synthetic sources share one wire form with real
//! backends.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::events::{KeyLocation, TouchPhase, TouchPoint};

/// Wheel delta reported in pixels (DOM `DOM_DELTA_PIXEL`).
pub const DELTA_MODE_PIXEL: u32 = 0;
/// Wheel delta reported in lines (DOM `DOM_DELTA_LINE`).
pub const DELTA_MODE_LINE: u32 = 1;

/// One raw, backend-specific input signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum RawSignal {
    /// Key pressed or auto-repeating.
    KeyDown {
        /// Raw key code (browser `keyCode` numbering)
        code: u32,
        /// Auto-repeat flag
        #[serde(default)]
        repeat: bool,
        /// Location for ambiguous codes
        #[serde(default)]
        location: KeyLocation,
    },
    /// Key released.
    KeyUp {
        code: u32,
        #[serde(default)]
        location: KeyLocation,
    },
    /// Mouse button pressed. `button` uses raw browser ordering
    /// (0 = left, 1 = middle, 2 = right).
    MouseDown { button: u32 },
    /// Mouse button released.
    MouseUp { button: u32 },
    /// Pointer moved to a new client position. `movement` carries native
    /// relative deltas when the source supports pointer lock; without it the
    /// session derives the delta from the previous position.
    MouseMove {
        x: f64,
        y: f64,
        movement: Option<[f64; 2]>,
    },
    /// Wheel scrolled. `delta_mode` classifies the delta unit
    /// (0 = pixel, 1 = line); unknown modes fall back to line handling.
    Wheel {
        delta_x: f64,
        delta_y: f64,
        #[serde(default)]
        delta_mode: u32,
    },
    /// Touch list changed. `points` is the complete list of active touches
    /// after the change; an empty list means the gesture ended.
    Touch {
        phase: TouchPhase,
        #[serde(default)]
        points: Vec<TouchPoint>,
    },
    /// Window client area resized. `width`/`height` are logical pixels;
    /// the framebuffer size is recomputed from `scale_factor`.
    Resize {
        width: u32,
        height: u32,
        #[serde(default = "default_scale_factor")]
        scale_factor: f64,
    },
}

fn default_scale_factor() -> f64 {
    1.0
}
