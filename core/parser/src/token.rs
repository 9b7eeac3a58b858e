//! FILENAME: core/parser/src/token.rs
//! PURPOSE: Token definitions for the expression tokenizer.
//! CONTEXT: Tokens are the atomic units produced by the lexer and consumed by
//! the two-stack evaluator in the engine crate. Operators and functions are
//! closed enums so every new variant has to be handled at both the lexer and
//! the evaluator apply sites.

/// Binary arithmetic operators.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Operator {
    Add,      // +
    Subtract, // -
    Multiply, // *
    Divide,   // /
    Power,    // ^
}

impl Operator {
    /// Maps a source character to its operator, if it is one.
    pub fn from_char(ch: char) -> Option<Operator> {
        match ch {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            '*' => Some(Operator::Multiply),
            '/' => Some(Operator::Divide),
            '^' => Some(Operator::Power),
            _ => None,
        }
    }

    /// Binding strength used by the evaluator's pop-while-greater-or-equal rule.
    /// Equal precedence pops first, so every operator (including `^`) chains
    /// left to right.
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Add | Operator::Subtract => 1,
            Operator::Multiply | Operator::Divide => 2,
            Operator::Power => 3,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
            Operator::Power => '^',
        }
    }
}

/// The fixed set of built-in functions. Each takes exactly one argument.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Function {
    Sin,
    Cos,
    Tan,
    Exp,
    Log,
}

impl Function {
    pub const ALL: [Function; 5] = [
        Function::Sin,
        Function::Cos,
        Function::Tan,
        Function::Exp,
        Function::Log,
    ];

    /// Exact, case-sensitive lookup of a function name.
    pub fn from_name(name: &str) -> Option<Function> {
        match name {
            "sin" => Some(Function::Sin),
            "cos" => Some(Function::Cos),
            "tan" => Some(Function::Tan),
            "exp" => Some(Function::Exp),
            "log" => Some(Function::Log),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Function::Sin => "sin",
            Function::Cos => "cos",
            Function::Tan => "tan",
            Function::Exp => "exp",
            Function::Log => "log",
        }
    }
}

/// Tokens recognized by the expression lexer.
/// No token keeps its source position; the evaluator never needs it.
#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    // Operands
    Number(f64),
    /// A variable name. May carry a fused sign prefix (`-x`).
    Identifier(String),

    Operator(Operator),
    Function(Function),

    // Delimiters
    LParen,
    RParen,
}

impl Token {
    /// True for the token kinds that can be the operand of a bare function
    /// call such as `sin 30`.
    pub fn is_operand(&self) -> bool {
        !matches!(
            self,
            Token::Operator(_) | Token::LParen | Token::RParen
        )
    }
}

/// Returns true if `ch` is one of the five operator characters.
pub fn is_operator_char(ch: char) -> bool {
    Operator::from_char(ch).is_some()
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl std::fmt::Display for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Identifier(s) => write!(f, "{}", s),
            Token::Operator(op) => write!(f, "{}", op),
            Token::Function(func) => write!(f, "{}", func),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
        }
    }
}
