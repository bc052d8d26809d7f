//! Focus command transport
//!
//! The external `focus` CLI is an opaque oracle: one command string in,
//! trimmed stdout and an exit code out. The device's persistent state lives
//! entirely behind that tool; nothing here models firmware behavior.

mod runner;

pub use runner::{FocusRunner, FOCUS_BIN};

use async_trait::async_trait;

use crate::common::Result;

/// Result of a single focus command invocation
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Trimmed stdout of the `focus send` call
    pub output: String,
    /// Process exit code; -1 when the child was terminated by a signal
    pub code: i32,
}

impl CommandOutput {
    /// Whether the device accepted the command (exit code 0)
    pub fn accepted(&self) -> bool {
        self.code == 0
    }
}

/// Capability interface the scenario engine is written against.
///
/// The production implementation shells out to `focus`; unit tests substitute
/// an in-memory device emulator.
#[async_trait]
pub trait CommandOracle: Send {
    /// Send one command to the device and wait for it to complete.
    ///
    /// `quiet` discards the tool's error output, used for commands whose
    /// rejection is the expected outcome. Every command is attempted exactly
    /// once; a rejection is reported, never retried.
    async fn send(&mut self, command: &str, quiet: bool) -> Result<CommandOutput>;
}
