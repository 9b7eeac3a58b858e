//! FILENAME: tests/common/mod.rs
//! Test harness and fixtures for calculator integration tests.

#![allow(dead_code)]

use std::io::Cursor;
use std::path::PathBuf;

use calc_lib::{process_lines, run_direct, RunSummary, Session};
use tempfile::TempDir;

/// Sample program exercising declarations, assignments, comments and errors.
pub const SAMPLE_PROGRAM: &str = "\
int a, b, c;          // three integers
float d, e;
a = 5;
b = a + 2;
c = 2 * 3 * 5;
d = c + sin 30 + log(1000) - 1.593 /* rounding */;
e = d + 39.2;
a * b
x + 1
5 / 0
(2 + 3
log(-1)
";

/// Expected output of SAMPLE_PROGRAM, dump included.
pub const SAMPLE_OUTPUT: &str = "\
35
Error: Variable x not defined
Error: Division by zero
Error: Mismatched parentheses
Error: Log of non-positive number
Variables:
(a, b, c, d, e) = (5, 7, 30, 31.907, 71.107)
";

/// Test harness owning a session and a scratch directory.
pub struct TestHarness {
    pub session: Session,
    pub dir: TempDir,
}

impl TestHarness {
    /// Create a new test harness with an empty session.
    pub fn new() -> Self {
        TestHarness {
            session: Session::new(),
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    /// Runs each line and collects the printed results.
    pub fn run_lines(&mut self, lines: &[&str]) -> Vec<String> {
        lines
            .iter()
            .filter_map(|line| self.session.process_line(line))
            .collect()
    }

    /// Feeds a whole program through process_lines and returns the output.
    pub fn run_program(&mut self, program: &str) -> (String, RunSummary) {
        let mut output = Vec::new();
        let summary = process_lines(Cursor::new(program), &mut output, &mut self.session)
            .expect("in-memory run");
        (String::from_utf8(output).expect("utf8 output"), summary)
    }

    /// Writes `contents` into the scratch directory and returns its path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).expect("write fixture");
        path
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

/// Runs direct mode over `input` and returns everything printed.
pub fn run_console(input: &str) -> (String, Session, RunSummary) {
    let mut output = Vec::new();
    let (session, summary) = run_direct(Cursor::new(input), &mut output).expect("console run");
    (String::from_utf8(output).expect("utf8 output"), session, summary)
}
