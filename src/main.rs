//! Sums the byte values of a command-line string to produce a memorable numeric identifier,
//! such as a TCP port number. Optional `--add` and `--mult` parameters fold further arithmetic
//! into the result.

#![forbid(unsafe_code)]

mod args;
mod evaluate;
mod logging;
mod problem;
mod prog_name;

use anyhow::Context;
use colored::Colorize;
use log::debug;
use problem::Problem;
use prog_name::ProgName;
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut raw_args = std::env::args();
    let prog_name = ProgName::from_argv0(raw_args.next().as_deref());
    let args: Vec<String> = raw_args.collect();
    logging::init(wants_verbose(&args));
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(Problem::MissingArguments) => {
            eprintln!("Usage: {prog_name} [--sum] [--verbose] [--add=<int>] [--mult=<int>] <string>");
            ExitCode::FAILURE
        }
        Err(problem) => {
            eprintln!("{prog_name}: {} {problem}", "Error:".red());
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<(), Problem> {
    let scanned = args::scan(args)?;
    let Some(subject) = scanned.subject else {
        debug!("no subject string, nothing to evaluate");
        return Ok(());
    };
    let evaluation = evaluate::evaluate(&subject, &scanned.options)?;
    let stdout = std::io::stdout();
    evaluate::render(&mut stdout.lock(), &subject, &scanned.options, &evaluation)
        .context("Failed to write report to stdout")?;
    Ok(())
}

/// The logger must be installed before the scanner runs, otherwise the scanner's own traces
/// would be dropped. Only the option region is searched, since a `--verbose` token after the
/// subject is inert.
fn wants_verbose(args: &[String]) -> bool {
    args.iter()
        .take_while(|arg| arg.starts_with('-'))
        .any(|arg| *arg == "--verbose")
}
