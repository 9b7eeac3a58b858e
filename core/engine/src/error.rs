//! FILENAME: core/engine/src/error.rs

use thiserror::Error;

/// Everything that can abort a single evaluation or assignment.
/// None of these are fatal to the host: the caller reports the message and
/// moves on to the next statement.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("Variable {0} not defined")]
    UndefinedVariable(String),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Log of non-positive number")]
    LogDomainError,

    #[error("Mismatched parentheses")]
    MismatchedParentheses,

    #[error("Invalid expression")]
    InvalidExpression,

    /// Assignment target that was never declared.
    #[error("Variable {0} not declared")]
    UndeclaredVariable(String),
}

pub type EvalResult<T> = Result<T, EvalError>;
