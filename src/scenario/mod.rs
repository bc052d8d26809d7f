//! Device test scenarios
//!
//! A scenario is an ordered list of steps run strictly sequentially against
//! a command oracle. Scenarios can be loaded from YAML files or taken from
//! the built-in set.

mod config;
mod runner;
pub mod spacecadet;

pub use config::{Scenario, Step, DEFAULT_SETTLE_SECS};
pub use runner::{run_scenario, RunOptions, ScenarioReport};
