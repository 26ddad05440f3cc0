use anyhow::{Context, Result};
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::Parser;
use h256conv_common::utils::logging::init_logging;
use std::ffi::OsString;
use std::io::{self, Write};
use tracing::debug;

use crate::cli::Cli;
use crate::config_loader::load_logging_config;
use crate::output::Conversion;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

/// Parses `args`, runs one conversion and writes everything user-facing to `out`.
///
/// Returns the process exit code. Only a failed write or flush of `out` is an `Err`.
pub fn run<I, T, W>(args: I, out: &mut W) -> io::Result<u8>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
{
    let code = match Cli::try_parse_from(args) {
        Ok(cli) => match execute(&cli) {
            Ok(conversion) => {
                conversion.render(cli.output_mode(), out)?;
                EXIT_SUCCESS
            }
            Err(err) => {
                writeln!(out, "Error: {:#}", err)?;
                EXIT_FAILURE
            }
        },
        Err(err) => report_parse_error(&err, out)?,
    };

    out.flush()?;
    Ok(code)
}

fn execute(cli: &Cli) -> Result<Conversion<'_>> {
    let logging = load_logging_config(cli.log_config.as_deref(), cli.verbose)
        .context("Failed to load logging config")?;
    init_logging(&logging).context("Failed to initialize logging")?;

    let direction = cli.direction().context("Missing address to convert")?;
    debug!(?direction, "Starting conversion");

    Conversion::from_direction(direction)
}

fn report_parse_error<W: Write>(err: &clap::Error, out: &mut W) -> io::Result<u8> {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            write!(out, "{}", err)?;
            Ok(EXIT_SUCCESS)
        }
        // bare invocation prints usage but still fails
        ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            write!(out, "{}", err)?;
            Ok(EXIT_FAILURE)
        }
        _ => {
            writeln!(out, "Error: {}", parse_error_message(err))?;
            Ok(EXIT_FAILURE)
        }
    }
}

fn parse_error_message(err: &clap::Error) -> String {
    if err.kind() == ErrorKind::InvalidValue {
        if let Some(ContextValue::String(arg)) = err.get(ContextKind::InvalidArg) {
            if arg.starts_with("--reverse") {
                return "Missing H256 hex string for reverse conversion".to_string();
            }
        }
    }

    // clap puts the message first, then a blank line before the usage block
    let rendered = err.to_string();
    let message = rendered
        .lines()
        .take_while(|line| !line.trim().is_empty())
        .map(str::trim)
        .collect::<Vec<_>>()
        .join(" ");
    message
        .strip_prefix("error: ")
        .map(str::to_string)
        .unwrap_or(message)
}
