use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{check::check, init::init, inspect::inspect, render::render},
    exit_status::ExitStatus,
    report,
};

/// Dispatch a parsed command line.
///
/// `check` reports its issues here; the other commands print their own output.
pub fn run(Arguments { command }: Arguments, verbose: bool) -> Result<ExitStatus> {
    match command {
        Some(Command::Check(cmd)) => {
            let result = check(cmd)?;
            report::print(&result, verbose);
            Ok(result.exit_status())
        }
        Some(Command::Inspect(cmd)) => inspect(cmd),
        Some(Command::Render(cmd)) => render(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
