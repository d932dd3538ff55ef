//! Replay scripts: raw signal sequences stored as TOML.
//!
//! A script is what a backend would have fed the session live, written down.
//! The replay tool ingests the signals in order against a synthetic source,
//! which makes whole input scenarios reproducible from a text file.

use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::input::{KeyLocation, RawSignal};

/// An ordered sequence of raw input signals.
///
/// # Example TOML
/// ```toml
/// [[signals]]
/// kind = "key-down"
/// code = 87
///
/// [[signals]]
/// kind = "mouse-move"
/// x = 120.0
/// y = 80.0
///
/// [[signals]]
/// kind = "key-up"
/// code = 87
/// ```
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct Script {
    /// Signals in ingestion order
    #[serde(default)]
    pub signals: Vec<RawSignal>,
}

impl Script {
    /// Loads a script from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not a valid
    /// signal sequence.
    pub fn load(path: &Path) -> Result<Self> {
        let script_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read script from {}", path.display()))?;

        let script = Self::parse(&script_str)
            .with_context(|| format!("Failed to parse script from {}", path.display()))?;

        info!(
            "Loaded script from {} ({} signals)",
            path.display(),
            script.signals.len()
        );
        Ok(script)
    }

    /// Parses a script from TOML text.
    ///
    /// # Errors
    /// Returns an error on invalid TOML or unknown signal kinds.
    pub fn parse(text: &str) -> Result<Self> {
        let script: Script = toml::from_str(text).context("Invalid script TOML")?;
        debug!("Parsed {} signals", script.signals.len());
        Ok(script)
    }

    /// A small built-in scenario used when the replay tool runs without a
    /// script file: a key tap, pointer movement, a right-button click, a
    /// scroll, and a resize.
    pub fn demo() -> Self {
        Self {
            signals: vec![
                RawSignal::Resize {
                    width: 800,
                    height: 600,
                    scale_factor: 1.0,
                },
                RawSignal::KeyDown {
                    code: 87,
                    repeat: false,
                    location: KeyLocation::Standard,
                },
                RawSignal::KeyUp {
                    code: 87,
                    location: KeyLocation::Standard,
                },
                RawSignal::MouseMove {
                    x: 120.0,
                    y: 80.0,
                    movement: None,
                },
                RawSignal::MouseDown { button: 2 },
                RawSignal::MouseUp { button: 2 },
                RawSignal::Wheel {
                    delta_x: 30.0,
                    delta_y: 120.0,
                    delta_mode: 0,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::TouchPhase;

    #[test]
    fn parses_kebab_case_signal_kinds() {
        let script = Script::parse(
            r#"
            [[signals]]
            kind = "key-down"
            code = 16
            location = "right"

            [[signals]]
            kind = "wheel"
            delta_x = 0.0
            delta_y = 3.0
            delta_mode = 1

            [[signals]]
            kind = "touch"
            phase = "start"
            points = [{ id = 1, x = 10.0, y = 20.0 }]
            "#,
        )
        .unwrap();

        assert_eq!(script.signals.len(), 3);
        assert_eq!(
            script.signals[0],
            RawSignal::KeyDown {
                code: 16,
                repeat: false,
                location: KeyLocation::Right,
            }
        );
        assert!(matches!(
            script.signals[2],
            RawSignal::Touch {
                phase: TouchPhase::Start,
                ..
            }
        ));
    }

    #[test]
    fn missing_optional_fields_take_defaults() {
        let script = Script::parse(
            r#"
            [[signals]]
            kind = "key-down"
            code = 65

            [[signals]]
            kind = "resize"
            width = 640
            height = 480
            "#,
        )
        .unwrap();

        assert_eq!(
            script.signals[0],
            RawSignal::KeyDown {
                code: 65,
                repeat: false,
                location: KeyLocation::Standard,
            }
        );
        assert_eq!(
            script.signals[1],
            RawSignal::Resize {
                width: 640,
                height: 480,
                scale_factor: 1.0,
            }
        );
    }

    #[test]
    fn unknown_signal_kind_is_rejected() {
        let result = Script::parse(
            r#"
            [[signals]]
            kind = "joystick"
            axis = 0
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn empty_script_is_valid() {
        let script = Script::parse("").unwrap();
        assert!(script.signals.is_empty());
    }

    #[test]
    fn demo_script_round_trips_through_toml() {
        let demo = Script::demo();
        let text = toml::to_string(&demo).unwrap();
        let parsed = Script::parse(&text).unwrap();
        assert_eq!(parsed.signals, demo.signals);
    }
}
