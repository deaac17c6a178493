//! CLI entry point for generating seeded graphs and searching them.
//!
//! Parses command-line arguments with clap, runs the requested command,
//! renders the result to stdout, and maps errors to a failing exit code.
//! Logging is initialised eagerly so subsequent operations can emit
//! structured diagnostics via `tracing`.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use ringpath_cli::{
    cli::{Cli, CliError, render_output, run_cli},
    logging::{self, LoggingError},
};
use tracing::{error, field};

/// Execute the parsed command, render the output, and flush the output stream.
fn try_main(cli: Cli) -> Result<()> {
    let output = run_cli(cli).context("failed to execute command")?;
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    render_output(&output, &mut writer).context("failed to render output")?;
    writer.flush().context("failed to flush output")?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return report_usage(&err),
    };

    if let Err(err) = try_main(cli) {
        let code = err.downcast_ref::<CliError>().map(|cli_error| match cli_error {
            CliError::Core(core) => core.code(),
        });
        error!(
            error = %err,
            code = code.map(|code| field::display(code.as_str())),
            "command execution failed"
        );
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

#[expect(
    clippy::print_stderr,
    reason = "Emit one-off diagnostic before tracing is initialized"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialize logging: {err}");
}

/// Print clap's rendering of `err`. Help and version requests succeed; every
/// usage error exits with the same failure code as a failed command.
fn report_usage(err: &clap::Error) -> ExitCode {
    if let Err(io_err) = err.print() {
        error!(error = %io_err, "failed to print usage");
    }
    if err.use_stderr() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
