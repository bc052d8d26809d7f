//! Scenario configuration types
//!
//! Defines the data structures for deserializing YAML scenarios.

use std::path::Path;

use serde::Deserialize;

use crate::common::{Error, Result};

/// Default settle delay for asynchronous device-side operations.
///
/// Erase and reset return before the device finishes acting on them, so the
/// harness waits a fixed interval rather than polling.
pub const DEFAULT_SETTLE_SECS: u64 = 5;

/// A complete device test scenario
#[derive(Deserialize, Debug, Clone)]
pub struct Scenario {
    /// Name of the scenario
    pub name: String,
    /// Optional description of what the scenario verifies
    pub description: Option<String>,
    /// The sequence of steps to execute
    pub steps: Vec<Step>,
}

impl Scenario {
    /// Load a scenario from a YAML file
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Scenario(format!("Failed to read scenario '{}': {}", path.display(), e))
        })?;

        serde_yaml::from_str(&content).map_err(|e| {
            Error::Scenario(format!(
                "Failed to parse scenario '{}': {}",
                path.display(),
                e
            ))
        })
    }
}

/// A single step in a scenario
#[derive(Deserialize, Debug, Clone)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    /// Issue a command; the reply is traced but not asserted on
    Send {
        /// The command to send (e.g. "spacecadet.mode 0")
        command: String,
        /// Fail the scenario if the device rejects the command
        #[serde(default)]
        must_succeed: bool,
    },
    /// Issue a read command and assert its trimmed output equals a literal
    ExpectValue {
        command: String,
        value: String,
        /// Message reported when the assertion fails
        #[serde(default)]
        message: Option<String>,
    },
    /// Issue a command the device must reject with a non-zero exit code.
    /// Error output is suppressed since the failure is the point.
    ExpectReject {
        command: String,
        #[serde(default)]
        message: Option<String>,
    },
    /// Fixed delay for a device-side erase/reset to complete
    Settle {
        /// Seconds to wait; defaults to [`DEFAULT_SETTLE_SECS`]
        secs: Option<u64>,
    },
}
