//! Production command runner
//!
//! Shells out to the focus binary as `focus send <command>`, blocking until
//! the child exits. No retries and no timeout beyond what the tool itself
//! applies; device-side settling is the scenario engine's concern.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use super::{CommandOracle, CommandOutput};
use crate::common::{Error, Result};

/// Name of the external Focus CLI binary
pub const FOCUS_BIN: &str = "focus";

/// Command runner backed by the real focus CLI
pub struct FocusRunner {
    bin: PathBuf,
}

impl FocusRunner {
    /// Use an explicit binary path (e.g. a device emulator in tests)
    pub fn with_binary(bin: impl Into<PathBuf>) -> Self {
        Self { bin: bin.into() }
    }

    /// Locate `focus` on the search path
    pub fn discover() -> Result<Self> {
        let bin =
            which::which(FOCUS_BIN).map_err(|_| Error::FocusNotFound(FOCUS_BIN.to_string()))?;
        tracing::debug!(bin = %bin.display(), "found focus binary");
        Ok(Self { bin })
    }

    pub fn binary(&self) -> &Path {
        &self.bin
    }
}

#[async_trait]
impl CommandOracle for FocusRunner {
    async fn send(&mut self, command: &str, quiet: bool) -> Result<CommandOutput> {
        tracing::debug!(%command, "focus send");

        let output = Command::new(&self.bin)
            .arg("send")
            .args(command.split_whitespace())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(if quiet { Stdio::null() } else { Stdio::piped() })
            .output()
            .await
            .map_err(|source| Error::Spawn {
                command: format!("{} send {}", self.bin.display(), command),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        // A signal-terminated child has no exit code; treat it as rejected
        let code = output.status.code().unwrap_or(-1);

        tracing::debug!(%command, code, result = %stdout, "focus reply");

        if code != 0 && !quiet {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim();
            if stderr.is_empty() {
                tracing::warn!(%command, code, "command failed with no error output");
            } else {
                tracing::warn!(%command, code, error = %stderr, "command failed");
            }
        }

        Ok(CommandOutput {
            output: stdout,
            code,
        })
    }
}
