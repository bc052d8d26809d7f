//! focus-hil - hardware-in-the-loop tests for Focus-protocol keyboards
//!
//! Thin binary entry point: parses the CLI and hands off to the dispatcher.
//! The process exit code carries the verdict (0 pass, 1 fail, 2 harness error).

use clap::Parser;
use focus_hil::{cli, commands::Commands, common::logging};

#[derive(Parser)]
#[command(name = "focus-hil", about = "Hardware-in-the-loop test harness for Focus-protocol keyboard firmware")]
#[command(version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() {
    logging::init_cli();

    let cli = Cli::parse();

    match cli::dispatch(cli.command).await {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    }
}
