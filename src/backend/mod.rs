//! Platform boundary: the capability interface input sessions drive.
//!
//! A backend adapts one platform (a native window system, a browser canvas)
//! by feeding raw signals into the session and implementing [`InputSource`]
//! for the control calls the session makes in return. The session never
//! touches a platform API directly, which is what lets the whole input path
//! run against the synthetic source in tests.

pub mod synthetic;

pub use synthetic::{SourceCommand, SyntheticSource};

/// Optional platform capabilities a source advertises.
///
/// A missing capability never fails a call; the session degrades the
/// affected operation to a warning-logged no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceCapabilities {
    /// Pointer Lock support: relative movement capture and cursor disabling.
    pub pointer_lock: bool,
    /// Fullscreen support, entered from user-gesture handlers only.
    pub fullscreen: bool,
}

impl Default for SourceCapabilities {
    fn default() -> Self {
        Self {
            pointer_lock: true,
            fullscreen: true,
        }
    }
}

/// Control surface of a platform event source.
///
/// Implementations must tolerate any call order; the session only calls
/// pointer-lock and fullscreen methods when the corresponding capability is
/// advertised.
pub trait InputSource {
    /// Capability flags for this source. Queried per call, so a source may
    /// lose a capability at runtime.
    fn capabilities(&self) -> SourceCapabilities;

    /// Engage pointer lock (capture relative movement, hide the cursor).
    fn request_pointer_lock(&mut self);

    /// Release any active pointer lock.
    fn exit_pointer_lock(&mut self);

    /// Show or hide the platform cursor.
    fn set_cursor_visible(&mut self, visible: bool);

    /// Enter fullscreen. Only invoked from within user-gesture ingestion.
    fn request_fullscreen(&mut self);
}
