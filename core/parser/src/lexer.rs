//! FILENAME: core/parser/src/lexer.rs
//! PURPOSE: Scans a raw expression string and produces a sequence of Tokens.
//! CONTEXT: This is the first stage of the evaluation pipeline. It is a single
//! left-to-right scan with one pending buffer. Whitespace, parentheses and
//! operators flush the buffer; everything else accumulates into it.
//!
//! SPECIAL RULES:
//! - Unary minus: a '-' at the start of input, after '(' or after another
//!   operator is fused onto the following lexeme ("3 * -2" -> 3, *, -2).
//!   Whitespace is skipped when looking back for the previous character.
//! - Bare function calls: as soon as the buffer spells a function name and the
//!   next source character is not '(', the name is emitted on its own, so
//!   "sin 30" becomes [sin, 30] and the evaluator applies it to the next token.

use crate::token::{is_operator_char, Function, Operator, Token};
use std::iter::Peekable;
use std::str::Chars;

pub struct Lexer<'a> {
    input: Peekable<Chars<'a>>,
    pending: String,
    /// Last non-whitespace character consumed.
    previous: Option<char>,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input: input.chars().peekable(),
            pending: String::new(),
            previous: None,
            tokens: Vec::new(),
        }
    }

    /// Consumes the lexer and returns every token in source order.
    /// Never fails: malformed input surfaces later as an evaluation error.
    pub fn tokenize(mut self) -> Vec<Token> {
        while let Some(ch) = self.input.next() {
            if ch.is_whitespace() {
                self.flush();
                continue;
            }

            match ch {
                '(' => {
                    self.flush();
                    self.tokens.push(Token::LParen);
                }
                ')' => {
                    self.flush();
                    self.tokens.push(Token::RParen);
                }
                '-' if self.at_sign_position() => self.pending.push(ch),
                _ => match Operator::from_char(ch) {
                    Some(op) => {
                        self.flush();
                        self.tokens.push(Token::Operator(op));
                    }
                    None => self.push_char(ch),
                },
            }

            self.previous = Some(ch);
        }

        self.flush();
        self.tokens
    }

    /// A '-' here is a sign, not subtraction.
    fn at_sign_position(&self) -> bool {
        match self.previous {
            None => true,
            Some('(') => true,
            Some(prev) => is_operator_char(prev),
        }
    }

    fn push_char(&mut self, ch: char) {
        self.pending.push(ch);

        if Function::from_name(&self.pending).is_some() {
            // Only split off the name when something other than '(' follows;
            // at end of input the final flush emits it anyway.
            if matches!(self.input.peek(), Some(&next) if next != '(') {
                self.flush();
            }
        }
    }

    fn flush(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let lexeme = std::mem::take(&mut self.pending);
        self.tokens.push(classify(lexeme));
    }
}

/// Decides what kind of token a flushed lexeme is.
fn classify(lexeme: String) -> Token {
    if let Some(func) = Function::from_name(&lexeme) {
        return Token::Function(func);
    }

    // A sign prefix that never got a numeral (e.g. "- 5").
    if lexeme == "-" {
        return Token::Operator(Operator::Subtract);
    }

    if looks_numeric(&lexeme) {
        if let Ok(n) = lexeme.parse::<f64>() {
            return Token::Number(n);
        }
    }

    Token::Identifier(lexeme)
}

/// Starts with a digit or '.', optionally behind a single '-'.
fn looks_numeric(lexeme: &str) -> bool {
    let unsigned = lexeme.strip_prefix('-').unwrap_or(lexeme);
    unsigned
        .chars()
        .next()
        .is_some_and(|ch| ch.is_ascii_digit() || ch == '.')
}

/// Convenience function to tokenize an expression string directly.
pub fn tokenize(expression: &str) -> Vec<Token> {
    Lexer::new(expression).tokenize()
}
