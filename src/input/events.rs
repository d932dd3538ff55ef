//! Canonical input event vocabulary shared by every backend.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Logical keyboard key, independent of the backend that produced it.
///
/// Discriminants follow the native GLFW numbering so the key doubles as a
/// stable table index. Backend implementations map their native key codes
/// (platform scancodes or browser `keyCode` values) onto these values;
/// anything they cannot map becomes [`Key::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i16)]
pub enum Key {
    /// Unmapped or unrecognized key. Never stored in the key table.
    Unknown = -1,

    Space = 32,
    Apostrophe = 39,
    Comma = 44,
    Minus = 45,
    Period = 46,
    Slash = 47,

    // Top-row digits
    Digit0 = 48,
    Digit1 = 49,
    Digit2 = 50,
    Digit3 = 51,
    Digit4 = 52,
    Digit5 = 53,
    Digit6 = 54,
    Digit7 = 55,
    Digit8 = 56,
    Digit9 = 57,

    Semicolon = 59,
    Equal = 61,

    // Letters
    A = 65,
    B = 66,
    C = 67,
    D = 68,
    E = 69,
    F = 70,
    G = 71,
    H = 72,
    I = 73,
    J = 74,
    K = 75,
    L = 76,
    M = 77,
    N = 78,
    O = 79,
    P = 80,
    Q = 81,
    R = 82,
    S = 83,
    T = 84,
    U = 85,
    V = 86,
    W = 87,
    X = 88,
    Y = 89,
    Z = 90,

    LeftBracket = 91,
    Backslash = 92,
    RightBracket = 93,
    GraveAccent = 96,
    World1 = 161,
    World2 = 162,

    // Editing and navigation
    Escape = 256,
    Enter = 257,
    Tab = 258,
    Backspace = 259,
    Insert = 260,
    Delete = 261,
    Right = 262,
    Left = 263,
    Down = 264,
    Up = 265,
    PageUp = 266,
    PageDown = 267,
    Home = 268,
    End = 269,

    // Locks and system keys
    CapsLock = 280,
    ScrollLock = 281,
    NumLock = 282,
    PrintScreen = 283,
    Pause = 284,

    // Function keys
    F1 = 290,
    F2 = 291,
    F3 = 292,
    F4 = 293,
    F5 = 294,
    F6 = 295,
    F7 = 296,
    F8 = 297,
    F9 = 298,
    F10 = 299,
    F11 = 300,
    F12 = 301,
    F13 = 302,
    F14 = 303,
    F15 = 304,
    F16 = 305,
    F17 = 306,
    F18 = 307,
    F19 = 308,
    F20 = 309,
    F21 = 310,
    F22 = 311,
    F23 = 312,
    F24 = 313,
    F25 = 314,

    // Keypad
    Kp0 = 320,
    Kp1 = 321,
    Kp2 = 322,
    Kp3 = 323,
    Kp4 = 324,
    Kp5 = 325,
    Kp6 = 326,
    Kp7 = 327,
    Kp8 = 328,
    Kp9 = 329,
    KpDecimal = 330,
    KpDivide = 331,
    KpMultiply = 332,
    KpSubtract = 333,
    KpAdd = 334,
    KpEnter = 335,
    KpEqual = 336,

    // Modifiers
    LeftShift = 340,
    LeftControl = 341,
    LeftAlt = 342,
    LeftSuper = 343,
    RightShift = 344,
    RightControl = 345,
    RightAlt = 346,
    RightSuper = 347,
    Menu = 348,
}

impl Key {
    /// Table index for this key, or `None` for [`Key::Unknown`].
    pub fn index(self) -> Option<usize> {
        let code = self as i16;
        if code < 0 { None } else { Some(code as usize) }
    }
}

/// Mouse button identification in canonical (native) ordering.
///
/// Browser mouse events report middle and right in the opposite order;
/// [`MouseButton::from_browser_index`] corrects for that at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum MouseButton {
    /// Left (primary) mouse button
    Left = 0,
    /// Right (secondary) mouse button
    Right = 1,
    /// Middle mouse button
    Middle = 2,
}

impl MouseButton {
    /// Resolves a canonical button index (0 = left, 1 = right, 2 = middle).
    pub fn from_index(index: u32) -> Option<Self> {
        match index {
            0 => Some(MouseButton::Left),
            1 => Some(MouseButton::Right),
            2 => Some(MouseButton::Middle),
            _ => None,
        }
    }

    /// Resolves a raw browser button index (0 = left, 1 = middle, 2 = right)
    /// by swapping indices 1 and 2 into canonical ordering.
    pub fn from_browser_index(index: u32) -> Option<Self> {
        match index {
            0 => Some(MouseButton::Left),
            1 => Some(MouseButton::Middle),
            2 => Some(MouseButton::Right),
            _ => None,
        }
    }

    /// Canonical index of this button.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for MouseButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MouseButton::Left => "left",
            MouseButton::Right => "right",
            MouseButton::Middle => "middle",
        };
        write!(f, "{name}")
    }
}

/// What happened to a key or button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Action {
    /// The key or button was released, or has never been observed.
    #[default]
    Release = 0,
    /// The key or button was pressed.
    Press = 1,
    /// Held-key auto-repeat. Only keyboard signals produce this.
    Repeat = 2,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::Release => "release",
            Action::Press => "press",
            Action::Repeat => "repeat",
        };
        write!(f, "{name}")
    }
}

/// Physical position of an ambiguous key on the keyboard.
///
/// Browser keyboard events report a generic code for Shift/Ctrl/Alt and a
/// separate location field; the lookup table uses it to pick the Left or
/// Right variant, and to tell keypad Enter apart from the main Enter key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum KeyLocation {
    /// Key has a single location (the common case)
    #[default]
    Standard,
    /// Left-hand variant of a paired key
    Left,
    /// Right-hand variant of a paired key
    Right,
    /// Key on the numeric keypad
    Numpad,
}

impl KeyLocation {
    /// Maps a DOM `KeyboardEvent.location` value. Unknown values fall back
    /// to [`KeyLocation::Standard`].
    pub fn from_dom(location: u32) -> Self {
        match location {
            1 => KeyLocation::Left,
            2 => KeyLocation::Right,
            3 => KeyLocation::Numpad,
            _ => KeyLocation::Standard,
        }
    }
}

/// Phase of a touch signal.
///
/// The normalizer treats all phases alike; the phase is kept for
/// diagnostics and for sources that distinguish interrupted gestures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum TouchPhase {
    Start,
    Move,
    End,
    Cancel,
}

impl fmt::Display for TouchPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TouchPhase::Start => "start",
            TouchPhase::Move => "move",
            TouchPhase::End => "end",
            TouchPhase::Cancel => "cancel",
        };
        write!(f, "{name}")
    }
}

/// One active touch point as reported by the raw event source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TouchPoint {
    /// Source-assigned identifier, stable for the lifetime of the touch
    pub id: u64,
    /// Client X coordinate
    pub x: f64,
    /// Client Y coordinate
    pub y: f64,
}
