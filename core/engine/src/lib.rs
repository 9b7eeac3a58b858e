//! FILENAME: core/engine/src/lib.rs
//! PURPOSE: Main library entry point for the calculator engine.
//! CONTEXT: Re-exports public types and modules for use by other crates.

pub mod error;
pub mod evaluator;
pub mod number_format;
pub mod symbols;

// Re-export commonly used types at the crate root
pub use error::{EvalError, EvalResult};
pub use evaluator::{apply_function, apply_operator, evaluate, evaluate_expression, Evaluator};
pub use number_format::{format_result, format_variable, format_variable_dump};
pub use symbols::{SymbolLookup, SymbolTable, VarType, Variable};
