//! FILENAME: app/src/session.rs
//! PURPOSE: The presentation-side calculator session.
//! CONTEXT: Turns what the user typed into a plain-text expression the engine
//! understands (glyphs, trailing '=' marker, "Ans"), runs the engine and
//! remembers the last successful result. The engine itself stays stateless.

use crate::config::CalcConfig;
use crate::format::format_number;
use crate::{log_debug, log_enter, log_error, log_exit, log_warn};
use engine::{calculate_with, CalcError, ErrorKind};
use parser::Expression;
use serde::Serialize;
use thiserror::Error;

/// Token replaced by the previous result.
pub const ANSWER_TOKEN: &str = "Ans";

/// Display glyphs and their plain-text spelling.
const GLYPHS: &[(&str, &str)] = &[("π", "pi"), ("√", "sqrt"), ("×", "*"), ("÷", "/")];

#[derive(Error, Debug, PartialEq, Clone)]
pub enum SessionError {
    #[error(transparent)]
    Calc(#[from] CalcError),

    #[error("Previous result {0} cannot be used as Ans")]
    UnusableAnswer(f64),
}

impl SessionError {
    /// The engine stage that failed, if the engine was reached at all.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            SessionError::Calc(e) => Some(e.kind()),
            SessionError::UnusableAnswer(_) => None,
        }
    }
}

/// A successful evaluation as shown to the user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome {
    /// The expression after substitutions, exactly as handed to the engine.
    pub expression: String,
    pub tree: Expression,
    pub value: f64,
    pub display: String,
    pub warnings: Vec<String>,
}

pub struct Session {
    config: CalcConfig,
    last_result: f64,
}

impl Session {
    pub fn new(config: CalcConfig) -> Self {
        Session {
            config,
            last_result: 0.0,
        }
    }

    pub fn config(&self) -> &CalcConfig {
        &self.config
    }

    pub fn last_result(&self) -> f64 {
        self.last_result
    }

    /// Forgets the previous result.
    pub fn clear(&mut self) {
        log_debug!("SESSION", "clear last_result={}", self.last_result);
        self.last_result = 0.0;
    }

    /// Rewrites raw display text into a plain expression for the engine.
    pub fn resolve(&self, raw: &str) -> Result<String, SessionError> {
        let mut text = raw.trim();
        if let Some(stripped) = text.strip_suffix('=') {
            text = stripped;
        }

        let mut resolved = text.to_string();
        for (glyph, spelling) in GLYPHS {
            resolved = resolved.replace(glyph, spelling);
        }

        if resolved.contains(ANSWER_TOKEN) {
            if !self.last_result.is_finite() {
                return Err(SessionError::UnusableAnswer(self.last_result));
            }
            // f64 Display never uses exponent notation, which the lexer lacks
            let answer = format!("({})", self.last_result);
            resolved = resolved.replace(ANSWER_TOKEN, &answer);
        }

        Ok(resolved)
    }

    /// Evaluates one line of input. Only a success replaces the last result.
    pub fn evaluate(&mut self, raw: &str) -> Result<Outcome, SessionError> {
        log_enter!("CALC", "evaluate", "input={:?}", raw);

        let result = self.run(raw);
        match &result {
            Ok(outcome) => {
                self.last_result = outcome.value;
                log_exit!("CALC", "evaluate", "value={}", outcome.value);
            }
            Err(e) => {
                log_error!("CALC", "{:?} failure for {:?}: {}", e.kind(), raw, e);
            }
        }
        result
    }

    fn run(&self, raw: &str) -> Result<Outcome, SessionError> {
        let expression = self.resolve(raw)?;
        log_debug!("CALC", "resolved={:?}", expression);

        let calc = calculate_with(&expression, self.config.parser_options())?;
        log_debug!("CALC", "tree={} nodes={}", calc.expression, calc.expression.node_count());

        let warnings: Vec<String> = calc.warnings.iter().map(|w| w.to_string()).collect();
        for warning in &warnings {
            log_warn!("PARSER", "{}", warning);
        }

        Ok(Outcome {
            display: format_number(calc.value, self.config.precision),
            expression,
            tree: calc.expression,
            value: calc.value,
            warnings,
        })
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new(CalcConfig::default())
    }
}
