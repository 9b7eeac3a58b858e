//! FILENAME: app/cli/src/session.rs
// PURPOSE: Runs statements against one variable store.
// CONTEXT: A Session is the only writer of its SymbolTable. Expressions are
// evaluated through the read-only engine API; a failing statement is turned
// into an "Error: ..." line and the session carries on.

use engine::{evaluate_expression, format_result, format_variable_dump, SymbolTable};

use crate::error::StatementError;
use crate::logging::{log_debug, log_warn};
use crate::statement::{classify, Statement};

/// What a successfully executed statement did.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Nothing,
    /// Number of names declared.
    Declared(usize),
    /// The value actually stored (truncated for int variables).
    Assigned { name: String, value: f64 },
    Value(f64),
}

#[derive(Debug, Default)]
pub struct Session {
    symbols: SymbolTable,
}

impl Session {
    pub fn new() -> Self {
        Session {
            symbols: SymbolTable::new(),
        }
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Runs one line and reports what it did.
    pub fn execute(&mut self, line: &str) -> Result<Outcome, StatementError> {
        match classify(line)? {
            Statement::Empty => Ok(Outcome::Nothing),

            Statement::Declaration { var_type, names } => {
                for name in &names {
                    self.symbols.declare(name.as_str(), var_type);
                }
                log_debug!("STMT", "declared {} {:?}", var_type, names);
                Ok(Outcome::Declared(names.len()))
            }

            Statement::Assignment { name, expression } => {
                // The target must exist before the expression is even looked at.
                if !self.symbols.contains(&name) {
                    return Err(engine::EvalError::UndeclaredVariable(name).into());
                }
                let value = evaluate_expression(&expression, &self.symbols)?;
                let stored = self.symbols.assign(&name, value)?;
                log_debug!("STMT", "{} = {} (stored {})", name, value, stored);
                Ok(Outcome::Assigned {
                    name,
                    value: stored,
                })
            }

            Statement::Expression(expression) => {
                let value = evaluate_expression(&expression, &self.symbols)?;
                Ok(Outcome::Value(value))
            }
        }
    }

    /// Runs one line and returns the text to print, if any.
    /// Expressions print their formatted value; failures print
    /// "Error: <message>"; declarations and assignments print nothing.
    pub fn process_line(&mut self, line: &str) -> Option<String> {
        match self.execute(line) {
            Ok(Outcome::Value(value)) => Some(format_result(value)),
            Ok(_) => None,
            Err(e) => {
                log_warn!("STMT", "'{}' failed: {}", line.trim(), e);
                Some(format!("Error: {}", e))
            }
        }
    }

    /// The end-of-run variable dump, or None when nothing was declared.
    pub fn variable_dump(&self) -> Option<String> {
        format_variable_dump(&self.symbols)
    }
}
