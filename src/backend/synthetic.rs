//! Synthetic input source for tests and the replay tool.

use log::debug;

use super::{InputSource, SourceCapabilities};

/// A control call recorded by a [`SyntheticSource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceCommand {
    RequestPointerLock,
    ExitPointerLock,
    SetCursorVisible(bool),
    RequestFullscreen,
}

/// An [`InputSource`] that records every control call instead of driving a
/// real platform.
///
/// Capabilities are settable, so tests can exercise the degraded paths
/// (missing pointer lock or fullscreen) without a real browser or window
/// system behind them.
#[derive(Debug, Default)]
pub struct SyntheticSource {
    capabilities: SourceCapabilities,
    commands: Vec<SourceCommand>,
}

impl SyntheticSource {
    /// Creates a source advertising every capability.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a source with the given capability flags.
    pub fn with_capabilities(capabilities: SourceCapabilities) -> Self {
        Self {
            capabilities,
            commands: Vec::new(),
        }
    }

    /// Control calls received so far, in order.
    pub fn commands(&self) -> &[SourceCommand] {
        &self.commands
    }

    fn record(&mut self, command: SourceCommand) {
        debug!("synthetic source: {:?}", command);
        self.commands.push(command);
    }
}

impl InputSource for SyntheticSource {
    fn capabilities(&self) -> SourceCapabilities {
        self.capabilities
    }

    fn request_pointer_lock(&mut self) {
        self.record(SourceCommand::RequestPointerLock);
    }

    fn exit_pointer_lock(&mut self) {
        self.record(SourceCommand::ExitPointerLock);
    }

    fn set_cursor_visible(&mut self, visible: bool) {
        self.record(SourceCommand::SetCursorVisible(visible));
    }

    fn request_fullscreen(&mut self) {
        self.record(SourceCommand::RequestFullscreen);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_commands_in_order() {
        let mut source = SyntheticSource::new();
        source.request_pointer_lock();
        source.set_cursor_visible(false);
        source.exit_pointer_lock();
        assert_eq!(
            source.commands(),
            &[
                SourceCommand::RequestPointerLock,
                SourceCommand::SetCursorVisible(false),
                SourceCommand::ExitPointerLock,
            ]
        );
    }

    #[test]
    fn default_source_has_full_capabilities() {
        let source = SyntheticSource::new();
        assert!(source.capabilities().pointer_lock);
        assert!(source.capabilities().fullscreen);
    }
}
