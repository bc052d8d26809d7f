//! CLI command handling
//!
//! Dispatches CLI commands to the focus runner and formats output.

use std::path::PathBuf;

use colored::Colorize;

use crate::commands::Commands;
use crate::common::Result;
use crate::focus::{CommandOracle, FocusRunner};
use crate::scenario::{self, RunOptions, Scenario};

fn runner_for(focus_bin: Option<PathBuf>) -> Result<FocusRunner> {
    match focus_bin {
        Some(bin) => Ok(FocusRunner::with_binary(bin)),
        None => FocusRunner::discover(),
    }
}

/// Dispatch a CLI command. Returns the process exit code.
pub async fn dispatch(command: Commands) -> Result<i32> {
    match command {
        Commands::Run {
            scenario,
            focus_bin,
            settle_secs,
            verbose,
            json,
        } => {
            let scenario = match scenario {
                Some(path) => Scenario::from_yaml_file(&path)?,
                None => scenario::spacecadet::persistence_scenario(),
            };

            let mut runner = runner_for(focus_bin)?;
            let opts = RunOptions {
                settle_secs,
                verbose,
            };

            let report = scenario::run_scenario(&mut runner, &scenario, &opts).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            }

            Ok(if report.passed { 0 } else { 1 })
        }

        Commands::Send {
            command,
            quiet,
            focus_bin,
        } => {
            let mut runner = runner_for(focus_bin)?;
            let result = runner.send(&command, quiet).await?;

            if !result.output.is_empty() {
                println!("{}", result.output);
            }

            // Pass the tool's verdict through; signal deaths surface as 1
            Ok(if result.code < 0 { 1 } else { result.code })
        }

        Commands::Check { focus_bin } => {
            let mut runner = runner_for(focus_bin)?;
            let result = runner.send("version", false).await?;

            if result.accepted() {
                println!(
                    "{} focus {} (device replied: {})",
                    "✓".green(),
                    runner.binary().display(),
                    result.output
                );
                Ok(0)
            } else {
                println!(
                    "{} focus exited with code {}. Is the keyboard connected?",
                    "✗".red(),
                    result.code
                );
                Ok(1)
            }
        }
    }
}
