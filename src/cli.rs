// SPDX-FileCopyrightText: 2023 Jonathan Haigh <jonathanhaigh@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Types and methods related to parsing the command line and running its commands.

use std::io::Write;

use clap::{Parser, Subcommand, ValueEnum};
use miette::IntoDiagnostic;

use crate::compare::{CompareMode, Relation};
use crate::duration::Duration;

/// Command line arguments passed to isodur.
#[derive(Parser)]
#[command(author, version, about, long_about=None)]
#[must_use]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the structured form of an ISO 8601 duration as JSON
    Parse { duration: String },

    /// Check whether a string is a valid ISO 8601 duration
    Validate { duration: String },

    /// Substitute %Y %M %D %H %I %S and %T in a template
    Format { duration: String, template: String },

    /// Print a duration as colon separated fields
    Human { duration: String },

    /// Print the structured form of a number of seconds as JSON
    Seconds {
        #[arg(allow_negative_numbers = true)]
        seconds: i64,
    },

    /// Add two durations
    Add { lhs: String, rhs: String },

    /// Subtract one duration from another, stopping at zero
    Subtract { lhs: String, rhs: String },

    /// Compare a duration against one or more others
    Compare {
        #[arg(long, value_enum, default_value_t = Op::Eq)]
        op: Op,

        /// Whether the comparison must hold against all or any of the others
        #[arg(long, default_value = "all")]
        mode: String,

        duration: String,

        #[arg(required = true)]
        others: Vec<String>,
    },
}

/// Relational operator accepted by the `compare` command.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum Op {
    Eq,
    Lt,
    Le,
    Gt,
    Ge,
}

impl From<Op> for Relation {
    fn from(op: Op) -> Self {
        match op {
            Op::Eq => Relation::Equal,
            Op::Lt => Relation::Less,
            Op::Le => Relation::LessOrEqual,
            Op::Gt => Relation::Greater,
            Op::Ge => Relation::GreaterOrEqual,
        }
    }
}

/// Parse the command line.
///
/// # Returns
/// - a `Cli` struct containing the command line arguments.
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parse an ISO 8601 duration, attaching the input to any error so it can be labelled.
fn parse_duration(input: &str) -> miette::Result<Duration> {
    Duration::from_iso8601(input)
        .map_err(|e| miette::Report::new(e).with_source_code(input.to_owned()))
}

fn write_json<W: Write>(out: &mut W, d: &Duration) -> miette::Result<()> {
    serde_json::to_writer_pretty(&mut *out, &d.export()).into_diagnostic()?;
    // The serializer won't add a newline at the end of its output, so do it manually.
    writeln!(out).into_diagnostic()
}

/// Run a command, writing its output to `out`.
///
/// # Returns
/// - `Ok(false)` if the command ran but its answer was negative (e.g. an invalid string passed
///   to `validate`).
pub fn run<W: Write>(args: &Cli, out: &mut W) -> miette::Result<bool> {
    match &args.command {
        Command::Parse { duration } => write_json(out, &parse_duration(duration)?)?,
        Command::Validate { duration } => {
            let valid = Duration::validate(duration);
            writeln!(out, "{}", valid).into_diagnostic()?;
            return Ok(valid);
        }
        Command::Format { duration, template } => {
            let d = parse_duration(duration)?;
            writeln!(out, "{}", d.format(template)).into_diagnostic()?;
        }
        Command::Human { duration } => {
            let d = parse_duration(duration)?;
            writeln!(out, "{}", d.to_human_readable()).into_diagnostic()?;
        }
        Command::Seconds { seconds } => write_json(out, &Duration::new(*seconds))?,
        Command::Add { lhs, rhs } => {
            let sum = parse_duration(lhs)?.add(&parse_duration(rhs)?);
            writeln!(out, "{}", sum).into_diagnostic()?;
        }
        Command::Subtract { lhs, rhs } => {
            let diff = parse_duration(lhs)?.subtract(&parse_duration(rhs)?);
            writeln!(out, "{}", diff).into_diagnostic()?;
        }
        Command::Compare {
            op,
            mode,
            duration,
            others,
        } => {
            let mode: CompareMode = mode.parse()?;
            let d = parse_duration(duration)?;
            let others = others
                .iter()
                .map(|o| parse_duration(o))
                .collect::<miette::Result<Vec<_>>>()?;
            let result = d.compare(Relation::from(*op), &others, mode)?;
            writeln!(out, "{}", result).into_diagnostic()?;
        }
    }
    Ok(true)
}
