//! Mock focus binary for integration testing
//!
//! Emulates a write-protected keyboard behind the focus CLI so the harness
//! can be exercised without hardware. The spacecadet mode persists in a state
//! file named by `MOCK_FOCUS_STATE`; erase and reset are always refused.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

fn state_file() -> PathBuf {
    env::var_os("MOCK_FOCUS_STATE")
        .map(PathBuf::from)
        .unwrap_or_else(|| env::temp_dir().join("mock-focus-state"))
}

fn read_mode() -> String {
    fs::read_to_string(state_file())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|_| "1".to_string())
}

fn write_mode(value: &str) -> ExitCode {
    match fs::write(state_file(), value) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("mock-focus: cannot persist state: {e}");
            ExitCode::from(2)
        }
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    if args.first().map(String::as_str) != Some("send") {
        eprintln!("usage: mock_focus send <command>");
        return ExitCode::from(2);
    }

    let command = args[1..].join(" ");

    match command.as_str() {
        "version" => {
            println!("0.4.1");
            ExitCode::SUCCESS
        }
        "spacecadet.mode" => {
            println!("{}", read_mode());
            ExitCode::SUCCESS
        }
        "spacecadet.mode 0" => write_mode("0"),
        "spacecadet.mode 1" => write_mode("1"),
        "eeprom.erase" | "device.reset" => {
            eprintln!("device is write-protected: {command} refused");
            ExitCode::FAILURE
        }
        _ => {
            eprintln!("unknown command: {command}");
            ExitCode::from(2)
        }
    }
}
