//! Error types for the input surface.

use thiserror::Error;

/// Errors returned by active query and mode-setting operations.
///
/// Only caller mistakes surface as errors. Capability degradation is a
/// warning-logged no-op, and malformed raw signals are dropped on ingestion,
/// so neither appears here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// An argument was outside its accepted domain (button index outside
    /// 0-2, an input mode with no implementation).
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A recognized parameter carried an unsupported value (unknown cursor
    /// mode number).
    #[error("invalid value: {0}")]
    InvalidValue(String),
}
