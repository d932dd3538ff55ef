//! Browser keycode to canonical key translation table.

use super::events::{Key, KeyLocation};

/// Resolves a raw browser `keyCode` to a canonical [`Key`].
///
/// Ambiguous codes (generic Shift/Ctrl/Alt, Enter) are disambiguated by the
/// `location` signal into their Left/Right or keypad variants. Codes with no
/// canonical counterpart resolve to [`Key::Unknown`]; the caller decides how
/// to report them.
pub fn key_from_code(code: u32, location: KeyLocation) -> Key {
    // Paired keys first: the code alone does not identify the key.
    match (code, location) {
        (13, KeyLocation::Numpad) => return Key::KpEnter,
        (16, KeyLocation::Right) => return Key::RightShift,
        (16, _) => return Key::LeftShift,
        (17, KeyLocation::Right) => return Key::RightControl,
        (17, _) => return Key::LeftControl,
        (18, KeyLocation::Right) => return Key::RightAlt,
        (18, _) => return Key::LeftAlt,
        (224, KeyLocation::Right) => return Key::RightSuper,
        (224, _) => return Key::LeftSuper,
        _ => {}
    }

    match code {
        8 => Key::Backspace,
        9 => Key::Tab,
        13 => Key::Enter,
        19 => Key::Pause,
        20 => Key::CapsLock,
        27 => Key::Escape,
        32 => Key::Space,
        33 => Key::PageUp,
        34 => Key::PageDown,
        35 => Key::End,
        36 => Key::Home,
        37 => Key::Left,
        38 => Key::Up,
        39 => Key::Right,
        40 => Key::Down,
        44 => Key::PrintScreen,
        45 => Key::Insert,
        46 => Key::Delete,

        48 => Key::Digit0,
        49 => Key::Digit1,
        50 => Key::Digit2,
        51 => Key::Digit3,
        52 => Key::Digit4,
        53 => Key::Digit5,
        54 => Key::Digit6,
        55 => Key::Digit7,
        56 => Key::Digit8,
        57 => Key::Digit9,

        // Firefox legacy codes for punctuation
        59 => Key::Semicolon,
        61 => Key::Equal,
        173 => Key::Minus,

        65 => Key::A,
        66 => Key::B,
        67 => Key::C,
        68 => Key::D,
        69 => Key::E,
        70 => Key::F,
        71 => Key::G,
        72 => Key::H,
        73 => Key::I,
        74 => Key::J,
        75 => Key::K,
        76 => Key::L,
        77 => Key::M,
        78 => Key::N,
        79 => Key::O,
        80 => Key::P,
        81 => Key::Q,
        82 => Key::R,
        83 => Key::S,
        84 => Key::T,
        85 => Key::U,
        86 => Key::V,
        87 => Key::W,
        88 => Key::X,
        89 => Key::Y,
        90 => Key::Z,

        91 => Key::LeftSuper,
        92 => Key::RightSuper,
        93 => Key::Menu,

        96 => Key::Kp0,
        97 => Key::Kp1,
        98 => Key::Kp2,
        99 => Key::Kp3,
        100 => Key::Kp4,
        101 => Key::Kp5,
        102 => Key::Kp6,
        103 => Key::Kp7,
        104 => Key::Kp8,
        105 => Key::Kp9,
        106 => Key::KpMultiply,
        107 => Key::KpAdd,
        109 => Key::KpSubtract,
        110 => Key::KpDecimal,
        111 => Key::KpDivide,

        112 => Key::F1,
        113 => Key::F2,
        114 => Key::F3,
        115 => Key::F4,
        116 => Key::F5,
        117 => Key::F6,
        118 => Key::F7,
        119 => Key::F8,
        120 => Key::F9,
        121 => Key::F10,
        122 => Key::F11,
        123 => Key::F12,

        144 => Key::NumLock,
        145 => Key::ScrollLock,

        186 => Key::Semicolon,
        187 => Key::Equal,
        188 => Key::Comma,
        189 => Key::Minus,
        190 => Key::Period,
        191 => Key::Slash,
        192 => Key::GraveAccent,
        219 => Key::LeftBracket,
        220 => Key::Backslash,
        221 => Key::RightBracket,
        222 => Key::Apostrophe,

        _ => Key::Unknown,
    }
}
