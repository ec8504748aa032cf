//! FILENAME: tests/common/mod.rs
//! Test harness and fixtures for calculator front-end integration tests.

#![allow(dead_code)]

use app_lib::{run_lines, CalcConfig, Outcome, Session, SessionError};
use std::io::Cursor;
use std::path::PathBuf;
use tempfile::TempDir;

const EPSILON: f64 = 1e-9;

/// Test harness wrapping a session.
pub struct TestHarness {
    pub session: Session,
}

impl TestHarness {
    /// Create a harness with default configuration.
    pub fn new() -> Self {
        TestHarness {
            session: Session::default(),
        }
    }

    pub fn with_config(config: CalcConfig) -> Self {
        TestHarness {
            session: Session::new(config),
        }
    }

    pub fn eval(&mut self, input: &str) -> Result<Outcome, SessionError> {
        self.session.evaluate(input)
    }

    /// Evaluate and return the display string, panicking on failure.
    pub fn display(&mut self, input: &str) -> String {
        match self.eval(input) {
            Ok(outcome) => outcome.display,
            Err(e) => panic!("{:?} failed: {}", input, e),
        }
    }

    pub fn assert_value(&mut self, input: &str, expected: f64) {
        let value = self
            .eval(input)
            .unwrap_or_else(|e| panic!("{:?} failed: {}", input, e))
            .value;
        assert!(
            (value - expected).abs() < EPSILON,
            "{:?} = {}, expected {}",
            input,
            value,
            expected
        );
    }

    /// Feed a REPL transcript and collect the output lines.
    pub fn transcript(&mut self, input: &str, show_ast: bool) -> (Vec<String>, usize) {
        let mut out = Vec::new();
        let failures = run_lines(&mut self.session, Cursor::new(input), &mut out, show_ast)
            .expect("in-memory io cannot fail");
        let text = String::from_utf8(out).expect("output is utf-8");
        (text.lines().map(str::to_string).collect(), failures)
    }
}

/// Writes `contents` to a config file inside a fresh temp dir.
pub fn write_config(contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("calc.json");
    std::fs::write(&path, contents).expect("write config");
    (dir, path)
}
