//! FILENAME: app/cli/src/runner.rs
// PURPOSE: Drives a Session from a console or from a file, one line at a time.
// CONTEXT: Both modes share process_lines. Direct mode adds the "> " prompt
// and the exit/quit commands; file mode writes every result line to the
// output file. Both finish with the variable dump.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use engine::SymbolTable;
use serde::Serialize;

use crate::error::AppError;
use crate::logging::{log_enter, log_exit, log_info};
use crate::session::Session;

/// Line counts for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub lines: usize,
    pub errors: usize,
}

/// JSON document written by `--dump-json`.
#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    pub variables: &'a SymbolTable,
    pub summary: RunSummary,
}

/// Runs every line of `input` and writes each non-empty result to `output`.
pub fn process_lines<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    session: &mut Session,
) -> Result<RunSummary, AppError> {
    let mut summary = RunSummary::default();

    for line in input.lines() {
        let line = line?;
        summary.lines += 1;

        if let Some(result) = session.process_line(&line) {
            if result.starts_with("Error: ") {
                summary.errors += 1;
            }
            writeln!(output, "{}", result)?;
        }
    }

    Ok(summary)
}

/// Interactive mode: prompt, read, print, until EOF or `exit` / `quit`.
pub fn run_direct<R: BufRead, W: Write>(
    mut input: R,
    output: &mut W,
) -> Result<(Session, RunSummary), AppError> {
    log_enter!("RUN", "run_direct");

    let mut session = Session::new();
    let mut summary = RunSummary::default();
    let mut line = String::new();

    loop {
        write!(output, "> ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            break;
        }

        let line = line.trim_end_matches(['\r', '\n']);
        if matches!(line.trim(), "exit" | "quit") {
            break;
        }

        summary.lines += 1;
        if let Some(result) = session.process_line(line) {
            if result.starts_with("Error: ") {
                summary.errors += 1;
            }
            writeln!(output, "{}", result)?;
        }
    }

    if let Some(dump) = session.variable_dump() {
        writeln!(output, "{}", dump)?;
    }

    log_exit!("RUN", "run_direct", "lines={} errors={}", summary.lines, summary.errors);
    Ok((session, summary))
}

/// File mode: results and the final dump go to `output_path`.
pub fn run_file(input_path: &Path, output_path: &Path) -> Result<(Session, RunSummary), AppError> {
    log_enter!("RUN", "run_file", "{} -> {}", input_path.display(), output_path.display());

    let input = File::open(input_path).map_err(|source| AppError::OpenInput {
        path: input_path.display().to_string(),
        source,
    })?;
    let output = File::create(output_path).map_err(|source| AppError::OpenOutput {
        path: output_path.display().to_string(),
        source,
    })?;

    let mut writer = BufWriter::new(output);
    let mut session = Session::new();
    let summary = process_lines(BufReader::new(input), &mut writer, &mut session)?;

    if let Some(dump) = session.variable_dump() {
        writeln!(writer, "{}", dump)?;
    }
    writer.flush()?;

    log_info!(
        "RUN",
        "processed {} lines ({} errors) from {}",
        summary.lines,
        summary.errors,
        input_path.display()
    );
    log_exit!("RUN", "run_file");
    Ok((session, summary))
}

/// Writes the final symbol table and run counts as pretty JSON.
pub fn write_snapshot(
    path: &Path,
    symbols: &SymbolTable,
    summary: RunSummary,
) -> Result<(), AppError> {
    let file = File::create(path).map_err(|source| AppError::OpenOutput {
        path: path.display().to_string(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(
        &mut writer,
        &Snapshot {
            variables: symbols,
            summary,
        },
    )?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
