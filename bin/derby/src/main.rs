//! Card Derby Binary
//!
//! Simulates races and whole betting sessions from the command line.
//!
//! Commands: race, session
mod command;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    derby_core::log().map_err(|e| anyhow::anyhow!("{}", e))?;
    command::Command::parse().run()
}
