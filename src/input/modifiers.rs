//! Keyboard modifier state reported alongside key and button events.

use std::fmt;

/// Keyboard modifier flags.
///
/// Carried by key and mouse-button events. The flags are best-effort: they
/// are derived from the session's own key table (left/right modifier
/// variants), since raw sources do not reliably report platform modifier
/// bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Modifiers {
    /// Shift key pressed
    pub shift: bool,
    /// Ctrl key pressed
    pub ctrl: bool,
    /// Alt key pressed
    pub alt: bool,
    /// Super (OS/logo) key pressed
    pub superkey: bool,
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::new()
    }
}

impl Modifiers {
    /// Creates a new Modifiers instance with all keys released.
    pub fn new() -> Self {
        Self {
            shift: false,
            ctrl: false,
            alt: false,
            superkey: false,
        }
    }

    /// True if any modifier is held.
    pub fn any(&self) -> bool {
        self.shift || self.ctrl || self.alt || self.superkey
    }
}

impl fmt::Display for Modifiers {
    /// Formats as `shift+ctrl` style, or `-` when no modifier is held.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.any() {
            return write!(f, "-");
        }
        let mut first = true;
        for (held, name) in [
            (self.shift, "shift"),
            (self.ctrl, "ctrl"),
            (self.alt, "alt"),
            (self.superkey, "super"),
        ] {
            if held {
                if !first {
                    write!(f, "+")?;
                }
                write!(f, "{name}")?;
                first = false;
            }
        }
        Ok(())
    }
}
