//! Scenario executor
//!
//! Runs scenario steps strictly in order against a command oracle, stopping
//! at the first failed assertion. There is no concurrency: the device is a
//! shared physical resource accessed exclusively by this process.

use std::time::Duration;

use colored::Colorize;
use serde::Serialize;

use super::config::{Scenario, Step, DEFAULT_SETTLE_SECS};
use crate::common::{Error, Result};
use crate::focus::CommandOracle;

/// Options applied to a scenario run
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Override every settle delay (seconds); used with emulated devices
    pub settle_secs: Option<u64>,
    /// Print command replies and settle steps
    pub verbose: bool,
}

/// Result of a scenario run
#[derive(Debug, Serialize)]
pub struct ScenarioReport {
    pub name: String,
    pub passed: bool,
    pub steps_run: usize,
    pub steps_total: usize,
    pub error: Option<String>,
}

/// Run a scenario against the given oracle
pub async fn run_scenario(
    oracle: &mut dyn CommandOracle,
    scenario: &Scenario,
    opts: &RunOptions,
) -> Result<ScenarioReport> {
    let steps_total = scenario.steps.len();

    println!(
        "\n{} {}",
        "Running:".blue().bold(),
        scenario.name.white().bold()
    );

    if let Some(desc) = &scenario.description {
        println!("  {}", desc.dimmed());
    }

    println!("\n{}", "Steps:".cyan());

    for (i, step) in scenario.steps.iter().enumerate() {
        let step_num = i + 1;

        if let Err(e) = execute_step(oracle, step, step_num, opts).await {
            println!("  {} Step {}: {}", "✗".red(), step_num, e);

            return Ok(ScenarioReport {
                name: scenario.name.clone(),
                passed: false,
                steps_run: step_num,
                steps_total,
                error: Some(e.to_string()),
            });
        }
    }

    println!(
        "\n{} {}\n",
        "✓".green().bold(),
        "Scenario Passed".green().bold()
    );

    Ok(ScenarioReport {
        name: scenario.name.clone(),
        passed: true,
        steps_run: steps_total,
        steps_total,
        error: None,
    })
}

/// Execute a single step
async fn execute_step(
    oracle: &mut dyn CommandOracle,
    step: &Step,
    step_num: usize,
    opts: &RunOptions,
) -> Result<()> {
    match step {
        Step::Send {
            command,
            must_succeed,
        } => {
            let result = oracle.send(command, false).await?;

            if *must_succeed && !result.accepted() {
                return Err(Error::Assertion(format!(
                    "Command '{}' was rejected with exit code {}",
                    command, result.code
                )));
            }

            if opts.verbose && !result.output.is_empty() {
                println!("    {} {}", "->".dimmed(), result.output.dimmed());
            }

            println!("  {} Step {}: {}", "✓".green(), step_num, command.dimmed());
            Ok(())
        }

        Step::ExpectValue {
            command,
            value,
            message,
        } => {
            let result = oracle.send(command, false).await?;

            if result.output != *value {
                return Err(Error::Assertion(match message {
                    Some(m) => format!("{} (expected '{}', got '{}')", m, value, result.output),
                    None => format!(
                        "'{}' returned '{}', expected '{}'",
                        command, result.output, value
                    ),
                }));
            }

            println!(
                "  {} Step {}: {} {} '{}'",
                "✓".green(),
                step_num,
                command.dimmed(),
                "==".dimmed(),
                value
            );
            Ok(())
        }

        Step::ExpectReject { command, message } => {
            let result = oracle.send(command, true).await?;

            if result.accepted() {
                return Err(Error::Assertion(match message {
                    Some(m) => m.clone(),
                    None => format!("'{}' should have been rejected but succeeded", command),
                }));
            }

            println!(
                "  {} Step {}: {} {}",
                "✓".green(),
                step_num,
                command.dimmed(),
                "(rejected as expected)".dimmed()
            );
            Ok(())
        }

        Step::Settle { secs } => {
            let secs = opts
                .settle_secs
                .unwrap_or_else(|| secs.unwrap_or(DEFAULT_SETTLE_SECS));

            if opts.verbose {
                println!(
                    "  {} Step {}: {}",
                    "·".dimmed(),
                    step_num,
                    format!("settle {}s", secs).dimmed()
                );
            }

            tokio::time::sleep(Duration::from_secs(secs)).await;
            Ok(())
        }
    }
}
