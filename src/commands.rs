//! CLI command definitions
//!
//! Defines the clap commands for the harness.

use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    /// Run a test scenario against the connected device
    Run {
        /// Path to a YAML scenario file; omit to run the built-in
        /// spacecadet persistence scenario
        scenario: Option<PathBuf>,

        /// Path to the focus binary (default: discovered on PATH)
        #[arg(long)]
        focus_bin: Option<PathBuf>,

        /// Override every settle delay, in seconds (emulated devices
        /// settle instantly)
        #[arg(long)]
        settle_secs: Option<u64>,

        /// Verbose output
        #[arg(long, short)]
        verbose: bool,

        /// Output the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Send a single command to the device and print the reply
    Send {
        /// Command string, e.g. "spacecadet.mode 1"
        command: String,

        /// Discard the tool's error output
        #[arg(long, short)]
        quiet: bool,

        /// Path to the focus binary (default: discovered on PATH)
        #[arg(long)]
        focus_bin: Option<PathBuf>,
    },

    /// Verify the focus CLI is installed and the device answers
    Check {
        /// Path to the focus binary (default: discovered on PATH)
        #[arg(long)]
        focus_bin: Option<PathBuf>,
    },
}
