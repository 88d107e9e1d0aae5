//! Inspect, convert and compare ISO 8601 durations.

use std::process::ExitCode;

use isodur::cli;

fn main() -> miette::Result<ExitCode> {
    let args = cli::parse();
    let ok = cli::run(&args, &mut std::io::stdout().lock())?;
    Ok(if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
