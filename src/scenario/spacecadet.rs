//! Built-in spacecadet persistence scenario
//!
//! Verifies that the spacecadet mode setting is stable across rejected erase
//! and reset attempts on a write-protected device, and that the plain
//! write/read round-trip holds for both values.

use super::config::{Scenario, Step};

const VERSION: &str = "version";
const EEPROM_ERASE: &str = "eeprom.erase";
const DEVICE_RESET: &str = "device.reset";
const SPACECADET_MODE: &str = "spacecadet.mode";

/// The acceptance sequence run by `focus-hil run` with no scenario file
pub fn persistence_scenario() -> Scenario {
    let send = |command: &str| Step::Send {
        command: command.into(),
        must_succeed: false,
    };
    let expect_reject = |command: &str, message: &str| Step::ExpectReject {
        command: command.into(),
        message: Some(message.into()),
    };
    let expect_mode = |value: &str, message: &str| Step::ExpectValue {
        command: SPACECADET_MODE.into(),
        value: value.into(),
        message: Some(message.into()),
    };
    let settle = Step::Settle { secs: None };

    Scenario {
        name: "spacecadet-mode-persistence".into(),
        description: Some(
            "Spacecadet mode survives rejected erase and reset attempts on a protected device"
                .into(),
        ),
        steps: vec![
            // Smoke check; the reported version is not asserted on
            send(VERSION),
            expect_reject(EEPROM_ERASE, "Eeprom erase should fail but did not"),
            // Erasing eeprom takes a moment even when refused
            settle.clone(),
            expect_mode("1", "Initial spacecadet.mode should be '1'"),
            send("spacecadet.mode 0"),
            expect_mode("0", "spacecadet.mode should be '0' after setting to 0"),
            expect_reject(DEVICE_RESET, "Device reset should fail but did not"),
            settle.clone(),
            expect_mode("0", "spacecadet.mode should remain '0' after reset"),
            send("spacecadet.mode 1"),
            expect_mode("1", "spacecadet.mode should be '1' after setting to 1"),
            expect_reject(DEVICE_RESET, "Device reset should fail but did not"),
            settle.clone(),
            expect_mode("1", "spacecadet.mode should remain '1' after final reset"),
            expect_reject(EEPROM_ERASE, "Eeprom erase should fail but did not"),
            settle,
            expect_mode(
                "1",
                "spacecadet.mode should remain '1' after attempting to erase eeprom",
            ),
        ],
    }
}
