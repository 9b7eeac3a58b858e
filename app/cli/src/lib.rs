//! FILENAME: app/cli/src/lib.rs
// PURPOSE: Main library entry point for the calculator application.
// CONTEXT: Wires configuration, logging and the two run modes around the
// engine. Statements are processed one line at a time; a bad line prints an
// error and never stops the run.

use std::io::{self, BufRead, Write};

use clap::Parser;

pub mod config;
pub mod error;
pub mod logging;
pub mod runner;
pub mod session;
pub mod statement;

#[cfg(test)]
mod tests;

pub use config::{Args, Config, Mode, RunMode};
pub use error::{AppError, StatementError};
pub use logging::{next_seq, write_log};
pub use runner::{process_lines, run_direct, run_file, write_snapshot, RunSummary};
pub use session::{Outcome, Session};
pub use statement::{classify, strip_comments, Statement};

/// Runs the calculator with the process arguments and console.
pub fn run() -> Result<(), AppError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_with(
        Args::parse(),
        &mut stdin.lock(),
        &mut stdout.lock(),
        std::env::var(config::LOG_ENV).ok(),
    )
}

/// Runs the calculator against an explicit console. An unknown mode prints
/// the mode message and ends the run normally.
pub fn run_with<R: BufRead, W: Write>(
    args: Args,
    input: &mut R,
    output: &mut W,
    env_level: Option<String>,
) -> Result<(), AppError> {
    writeln!(output, "Engineering Calculator")?;
    let config = match Config::resolve(args, input, output, env_level) {
        Ok(config) => config,
        Err(e @ AppError::InvalidMode(_)) => {
            writeln!(output, "{}", e)?;
            return Ok(());
        }
        Err(e) => return Err(e),
    };
    logging::init(config.log_level, config.log_file.as_deref())?;
    log_info!("APP", "starting in {:?} mode", config.mode);

    let (session, summary) = match &config.mode {
        RunMode::Direct => {
            writeln!(output, "Direct mode selected. Type 'exit' or 'quit' to exit.")?;
            run_direct(&mut *input, output)?
        }
        RunMode::File {
            input: input_path,
            output: output_path,
        } => match run_file(input_path, output_path) {
            Ok(result) => {
                writeln!(
                    output,
                    "Processing complete. Results written to {}",
                    output_path.display()
                )?;
                result
            }
            Err(e) => {
                log_error!("APP", "file mode failed: {}", e);
                writeln!(output, "Error processing files.")?;
                return Err(e);
            }
        },
    };

    if let Some(path) = &config.dump_json {
        write_snapshot(path, session.symbols(), summary)?;
        log_info!("APP", "wrote variable snapshot to {}", path.display());
    }

    Ok(())
}
