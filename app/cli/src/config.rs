//! FILENAME: app/cli/src/config.rs
// PURPOSE: Command-line arguments and the resolved run configuration.
// CONTEXT: Every setting can come from a flag. Mode and file names that are
// not given on the command line are asked for on the console, the same way
// the calculator always started ("Choose your mode (direct/file): ").

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

use crate::error::AppError;

/// Environment variable consulted when `--log-level` is absent.
pub const LOG_ENV: &str = "CALC_LOG";

pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Warn;

/// Line-oriented engineering calculator.
#[derive(Parser, Debug, Default)]
#[command(name = "calculator", version, about, long_about = None)]
pub struct Args {
    /// Read statements from the console (direct) or from a file (file).
    #[arg(short, long, value_enum)]
    pub mode: Option<Mode>,

    /// Input file for file mode.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output file for file mode.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write log lines to this file instead of stderr.
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log threshold. Falls back to $CALC_LOG, then "warn".
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Write the final variables and line counts as JSON to this file.
    #[arg(long)]
    pub dump_json: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Direct,
    File,
}

impl FromStr for Mode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "direct" => Ok(Mode::Direct),
            "file" => Ok(Mode::File),
            other => Err(AppError::InvalidMode(other.to_string())),
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunMode {
    Direct,
    File { input: PathBuf, output: PathBuf },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub mode: RunMode,
    pub log_file: Option<PathBuf>,
    pub log_level: LevelFilter,
    pub dump_json: Option<PathBuf>,
}

impl Config {
    /// Fills in whatever the arguments left open by prompting on `output`
    /// and reading answers from `input`.
    pub fn resolve<R: BufRead, W: Write>(
        args: Args,
        input: &mut R,
        output: &mut W,
        env_level: Option<String>,
    ) -> Result<Config, AppError> {
        let mode = match args.mode {
            Some(mode) => mode,
            None => prompt(input, output, "Choose your mode (direct/file): ")?.parse()?,
        };

        let mode = match mode {
            Mode::Direct => RunMode::Direct,
            Mode::File => {
                let input_path = match args.input {
                    Some(path) => path,
                    None => PathBuf::from(prompt(input, output, "Input file name: ")?),
                };
                let output_path = match args.output {
                    Some(path) => path,
                    None => PathBuf::from(prompt(input, output, "Output file name: ")?),
                };
                RunMode::File {
                    input: input_path,
                    output: output_path,
                }
            }
        };

        Ok(Config {
            mode,
            log_file: args.log_file,
            log_level: resolve_log_level(args.log_level, env_level.as_deref()),
            dump_json: args.dump_json,
        })
    }
}

/// Flag first, then the environment value, then the default. An unparseable
/// environment value is ignored.
pub fn resolve_log_level(flag: Option<LogLevel>, env_value: Option<&str>) -> LevelFilter {
    if let Some(level) = flag {
        return level.into();
    }
    env_value
        .and_then(|value| LevelFilter::from_str(value.trim()).ok())
        .unwrap_or(DEFAULT_LOG_LEVEL)
}

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> Result<String, AppError> {
    write!(output, "{}", question)?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(answer.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn resolve(args: Args, answers: &str) -> (Result<Config, AppError>, String) {
        let mut input = Cursor::new(answers.as_bytes().to_vec());
        let mut output = Vec::new();
        let config = Config::resolve(args, &mut input, &mut output, None);
        (config, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_flags_need_no_prompt() {
        let args = Args::parse_from([
            "calculator", "--mode", "file", "-i", "in.txt", "-o", "out.txt",
        ]);
        let (config, printed) = resolve(args, "");
        let config = config.unwrap();

        assert_eq!(
            config.mode,
            RunMode::File {
                input: PathBuf::from("in.txt"),
                output: PathBuf::from("out.txt"),
            }
        );
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
        assert!(printed.is_empty());
    }

    #[test]
    fn test_prompts_for_missing_settings() {
        let (config, printed) = resolve(Args::default(), "file\ndata.calc\nresults.txt\n");

        assert_eq!(
            config.unwrap().mode,
            RunMode::File {
                input: PathBuf::from("data.calc"),
                output: PathBuf::from("results.txt"),
            }
        );
        assert_eq!(
            printed,
            "Choose your mode (direct/file): Input file name: Output file name: "
        );
    }

    #[test]
    fn test_direct_mode_from_prompt() {
        let (config, _) = resolve(Args::default(), "direct\n");
        assert_eq!(config.unwrap().mode, RunMode::Direct);
    }

    #[test]
    fn test_unknown_mode() {
        let (config, _) = resolve(Args::default(), "batch\n");
        assert!(matches!(config, Err(AppError::InvalidMode(m)) if m == "batch"));
    }

    #[test]
    fn test_log_level_precedence() {
        assert_eq!(
            resolve_log_level(Some(LogLevel::Debug), Some("error")),
            LevelFilter::Debug
        );
        assert_eq!(resolve_log_level(None, Some("info")), LevelFilter::Info);
        assert_eq!(resolve_log_level(None, Some("loud")), DEFAULT_LOG_LEVEL);
        assert_eq!(resolve_log_level(None, None), DEFAULT_LOG_LEVEL);
    }
}
