//! Configuration type definitions.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::enums::DispatchPolicy;

/// Event delivery settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DispatchConfig {
    /// Delivery policy: `immediate` (synchronous callbacks) or `queued`
    /// (bounded FIFO drained by `poll_events`)
    #[serde(default)]
    pub policy: DispatchPolicy,

    /// Maximum number of buffered events under the queued policy
    /// (valid range: 1 - 65536). Events arriving at a full queue are
    /// dropped with a warning.
    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: usize,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            policy: DispatchPolicy::default(),
            queue_capacity: default_queue_capacity(),
        }
    }
}

/// Capability flags for the synthetic source the replay tool runs against.
///
/// Turning a flag off exercises the degraded paths: cursor-mode changes
/// become warning-logged no-ops without pointer lock, and deferred
/// fullscreen requests are refused without fullscreen support.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SourceConfig {
    /// Advertise Pointer Lock support
    #[serde(default = "default_capability")]
    pub pointer_lock: bool,

    /// Advertise Fullscreen support
    #[serde(default = "default_capability")]
    pub fullscreen: bool,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            pointer_lock: default_capability(),
            fullscreen: default_capability(),
        }
    }
}

/// Replay output preferences.
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct TraceConfig {
    /// Print a state summary (cursor position, sizes, drop count) after
    /// the script finishes
    #[serde(default)]
    pub show_state: bool,
}

fn default_queue_capacity() -> usize {
    256
}

fn default_capability() -> bool {
    true
}
