//! FILENAME: core/parser/src/lib.rs
//! PURPOSE: Library root for the calculator expression tokenizer.
//! CONTEXT: This crate turns expression text into typed tokens. The engine
//! crate consumes them with a two-stack (operator/operand) evaluator.
//!
//! PIPELINE: Expression String --> Lexer --> Tokens --> Evaluator --> f64
//!
//! SUPPORTED FEATURES:
//! - Arithmetic: +, -, *, /, ^ (power)
//! - Numbers: 42, 3.14, .5, -7 (sign fused onto the numeral)
//! - Variables: alphabetic-led names, resolved by the evaluator
//! - Functions: sin, cos, tan, exp, log, with or without parentheses
//! - Parentheses for grouping

pub mod lexer;
pub mod token;


// Re-export commonly used types for convenience
pub use lexer::{tokenize, Lexer};
pub use token::{is_operator_char, Function, Operator, Token};
