//! ip-analyzer: IPv4/IPv6 address and CIDR analysis.
//!
//! [`Analyzer`] parses `<address>[/<prefix>]` and derives the network,
//! netmask, broadcast address or IPv6 scope, usable host range, host count and
//! private-range membership. [`output`] renders the result; nothing in
//! [`models`] or [`processing`] does any I/O.

pub mod cli;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

use std::io::{BufRead, Write};

pub use error::{AppError, FormatError};
pub use processing::{Analyzer, Report};

/// Parse one input line and derive every value from it.
///
/// # Examples
/// ```
/// let report = ip_analyzer::analyze("10.0.0.1/8").unwrap();
/// assert_eq!(report.network.to_string(), "10.0.0.0");
/// assert!(report.private);
/// ```
pub fn analyze(input: &str) -> Result<Report, FormatError> {
    let analyzer = Analyzer::new(input)?;
    Ok(Report::new(&analyzer))
}

/// Read a single line of input. Fails with [`AppError::NoInput`] at end of input.
pub fn read_input<R: BufRead>(mut reader: R) -> Result<String, AppError> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(AppError::NoInput);
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Analyze the input given on the command line, or read one line from `input`,
/// and write the result to `out`.
pub fn run<R: BufRead, W: Write>(
    cli: &cli::Cli,
    input: R,
    mut out: W,
    prompt: bool,
) -> Result<(), AppError> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    let line = match &cli.input {
        Some(line) => line.clone(),
        None => {
            if prompt {
                write!(out, "{}", output::format_prompt())?;
                out.flush()?;
            }
            read_input(input)?
        }
    };
    log::info!("Analyzing {line:?}");

    let report = analyze(&line)?;
    let text = output::render(&report, cli.format, cli.width)?;
    writeln!(out, "{text}")?;
    Ok(())
}
