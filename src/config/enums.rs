//! Configuration enum types.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How normalized events reach registered callbacks.
///
/// `immediate` matches the native contract: callbacks run synchronously on
/// the ingesting thread. `queued` buffers events in a bounded FIFO drained
/// by `poll_events`, which keeps ingestion non-blocking when callbacks are
/// slow.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum DispatchPolicy {
    /// Invoke callbacks synchronously during ingestion
    #[default]
    Immediate,
    /// Buffer events; deliver on `poll_events` in FIFO order
    Queued,
}

impl FromStr for DispatchPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "immediate" => Ok(DispatchPolicy::Immediate),
            "queued" => Ok(DispatchPolicy::Queued),
            other => Err(format!(
                "unknown dispatch policy '{other}' (expected 'immediate' or 'queued')"
            )),
        }
    }
}

impl fmt::Display for DispatchPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DispatchPolicy::Immediate => "immediate",
            DispatchPolicy::Queued => "queued",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_parses_case_insensitive() {
        assert_eq!(
            "Queued".parse::<DispatchPolicy>(),
            Ok(DispatchPolicy::Queued)
        );
        assert_eq!(
            "immediate".parse::<DispatchPolicy>(),
            Ok(DispatchPolicy::Immediate)
        );
        assert!("async".parse::<DispatchPolicy>().is_err());
    }
}
