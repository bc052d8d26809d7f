//! focus-hil - hardware-in-the-loop tests for Focus-protocol keyboards
//!
//! Drives the external `focus` CLI against a physical or emulated keyboard
//! and checks that persistent firmware settings behave as promised: settings
//! survive rejected erase/reset attempts while the device is protected.

pub mod cli;
pub mod commands;
pub mod common;
pub mod focus;
pub mod scenario;

// Re-export commonly used types for tests
pub use common::{Error, Result};
pub use focus::{CommandOracle, CommandOutput, FocusRunner};
