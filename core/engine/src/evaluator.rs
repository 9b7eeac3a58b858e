//! FILENAME: core/engine/src/evaluator.rs
//! PURPOSE: Evaluates a token sequence to a single number.
//! CONTEXT: After an expression is tokenized, this module runs a
//! shunting-yard style pass with two explicit stacks: pending operators,
//! functions and open parentheses on one side, numeric operands on the
//! other. There is no tree and no recursion.
//!
//! SUPPORTED FEATURES:
//! - Binary operations: +, -, *, /, ^ (all chain left to right, so
//!   2 ^ 3 ^ 2 is (2 ^ 3) ^ 2)
//! - Functions: sin, cos, tan (degrees), exp, log (base 10)
//! - Bare calls ("sin 30") and parenthesized calls ("sin(30)")
//! - Variable lookup through a read-only SymbolLookup
//! - A fused sign on a variable or function ("-x", "-sin(30)") negates it
//!

use crate::error::{EvalError, EvalResult};
use crate::symbols::SymbolLookup;
use log::trace;
use parser::{tokenize, Function, Operator, Token};

/// An entry on the operator stack.
#[derive(Debug, Clone, Copy, PartialEq)]
enum StackEntry {
    Operator(Operator),
    /// A pending call; `negate` is set for a signed name such as "-sin".
    Function { func: Function, negate: bool },
    LParen,
}

/// The expression evaluator.
/// Holds a reference to the symbol lookup for variable resolution.
pub struct Evaluator<'a, S: SymbolLookup + ?Sized> {
    symbols: &'a S,
}

impl<'a, S: SymbolLookup + ?Sized> Evaluator<'a, S> {
    pub fn new(symbols: &'a S) -> Self {
        Evaluator { symbols }
    }

    /// Evaluates a token sequence and returns the result.
    /// Any violated precondition aborts immediately; there is no partial result.
    pub fn evaluate(&self, tokens: &[Token]) -> EvalResult<f64> {
        let mut operands: Vec<f64> = Vec::new();
        let mut operators: Vec<StackEntry> = Vec::new();

        let mut i = 0;
        while i < tokens.len() {
            match &tokens[i] {
                Token::Number(n) => operands.push(*n),

                Token::Identifier(name) => match negated_function(name) {
                    Some(func) => {
                        let next = tokens.get(i + 1);
                        i += self.call(func, true, next, &mut operators, &mut operands)?;
                    }
                    None => operands.push(self.resolve(name)?),
                },

                Token::Function(func) => {
                    let next = tokens.get(i + 1);
                    i += self.call(*func, false, next, &mut operators, &mut operands)?;
                }

                Token::LParen => operators.push(StackEntry::LParen),

                Token::RParen => self.close_paren(&mut operators, &mut operands)?,

                Token::Operator(op) => {
                    while let Some(&StackEntry::Operator(top)) = operators.last() {
                        if top.precedence() < op.precedence() {
                            break;
                        }
                        operators.pop();
                        apply_entry(StackEntry::Operator(top), &mut operands)?;
                    }
                    operators.push(StackEntry::Operator(*op));
                }
            }
            i += 1;
        }

        while let Some(entry) = operators.pop() {
            if entry == StackEntry::LParen {
                return Err(EvalError::MismatchedParentheses);
            }
            apply_entry(entry, &mut operands)?;
        }

        match operands.as_slice() {
            [result] => {
                trace!("evaluated {} tokens -> {}", tokens.len(), result);
                Ok(*result)
            }
            _ => Err(EvalError::InvalidExpression),
        }
    }

    /// Starts a function call. A bare call consumes the next token as its
    /// whole argument and is applied at once; otherwise the function waits on
    /// the stack for its parenthesized argument. Returns the number of extra
    /// tokens consumed.
    fn call(
        &self,
        func: Function,
        negate: bool,
        next: Option<&Token>,
        operators: &mut Vec<StackEntry>,
        operands: &mut Vec<f64>,
    ) -> EvalResult<usize> {
        match next {
            Some(next) if next.is_operand() => {
                let value = apply_function(func, self.bare_argument(next)?)?;
                operands.push(if negate { -value } else { value });
                Ok(1)
            }
            _ => {
                operators.push(StackEntry::Function { func, negate });
                Ok(0)
            }
        }
    }

    /// Handles ')': apply everything back to the matching '(', drop it, then
    /// apply a function that was waiting for this parenthesized argument.
    fn close_paren(
        &self,
        operators: &mut Vec<StackEntry>,
        operands: &mut Vec<f64>,
    ) -> EvalResult<()> {
        loop {
            match operators.pop() {
                Some(StackEntry::LParen) => break,
                Some(entry) => apply_entry(entry, operands)?,
                None => return Err(EvalError::MismatchedParentheses),
            }
        }

        if let Some(&entry @ StackEntry::Function { .. }) = operators.last() {
            operators.pop();
            apply_entry(entry, operands)?;
        }

        Ok(())
    }

    /// Resolves a variable operand. A fused sign ("-x") negates the value.
    fn resolve(&self, name: &str) -> EvalResult<f64> {
        let (negate, bare) = match name.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, name),
        };

        match self.symbols.lookup(bare) {
            Some(var) if negate => Ok(-var.value),
            Some(var) => Ok(var.value),
            None => Err(EvalError::UndefinedVariable(name.to_string())),
        }
    }

    fn bare_argument(&self, token: &Token) -> EvalResult<f64> {
        match token {
            Token::Number(n) => Ok(*n),
            Token::Identifier(name) => self.resolve(name),
            _ => Err(EvalError::InvalidExpression),
        }
    }
}

/// "-sin" and friends: a function name that picked up a fused sign.
fn negated_function(lexeme: &str) -> Option<Function> {
    lexeme.strip_prefix('-').and_then(Function::from_name)
}

/// Pops the operands an entry needs and pushes its result.
fn apply_entry(entry: StackEntry, operands: &mut Vec<f64>) -> EvalResult<()> {
    let result = match entry {
        StackEntry::Operator(op) => {
            let right = operands.pop().ok_or(EvalError::InvalidExpression)?;
            let left = operands.pop().ok_or(EvalError::InvalidExpression)?;
            apply_operator(op, left, right)?
        }
        StackEntry::Function { func, negate } => {
            let arg = operands.pop().ok_or(EvalError::InvalidExpression)?;
            let value = apply_function(func, arg)?;
            if negate {
                -value
            } else {
                value
            }
        }
        StackEntry::LParen => return Err(EvalError::MismatchedParentheses),
    };
    operands.push(result);
    Ok(())
}

/// Applies a binary operator.
pub fn apply_operator(op: Operator, left: f64, right: f64) -> EvalResult<f64> {
    match op {
        Operator::Add => Ok(left + right),
        Operator::Subtract => Ok(left - right),
        Operator::Multiply => Ok(left * right),
        Operator::Divide if right == 0.0 => Err(EvalError::DivisionByZero),
        Operator::Divide => Ok(left / right),
        Operator::Power => Ok(left.powf(right)),
    }
}

/// Applies a built-in function. Trigonometric arguments are in degrees.
pub fn apply_function(func: Function, value: f64) -> EvalResult<f64> {
    match func {
        Function::Sin => Ok(value.to_radians().sin()),
        Function::Cos => Ok(value.to_radians().cos()),
        Function::Tan => Ok(value.to_radians().tan()),
        Function::Exp => Ok(value.exp()),
        Function::Log if value <= 0.0 => Err(EvalError::LogDomainError),
        Function::Log => Ok(value.log10()),
    }
}

/// Evaluates an already tokenized expression.
pub fn evaluate<S: SymbolLookup + ?Sized>(tokens: &[Token], symbols: &S) -> EvalResult<f64> {
    Evaluator::new(symbols).evaluate(tokens)
}

/// Tokenizes and evaluates in one step. Nothing is cached between calls.
pub fn evaluate_expression<S: SymbolLookup + ?Sized>(
    expression: &str,
    symbols: &S,
) -> EvalResult<f64> {
    evaluate(&tokenize(expression), symbols)
}
