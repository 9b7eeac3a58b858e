//! FILENAME: app/cli/src/statement.rs
// PURPOSE: Splits one input line into a statement the session can run.
// CONTEXT: Three statement kinds exist: declarations ("int a, b;"),
// assignments ("a = 2 * b;") and bare expressions ("a + 1"). Comments are
// removed before classification.

use engine::VarType;
use once_cell::sync::Lazy;
use parser::Function;
use regex::Regex;

use crate::error::StatementError;
use crate::logging::log_warn;

/// "int" or "float" followed by whitespace at the start of a line.
static DECLARATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(int|float)\s+(.*)$").expect("declaration regex is valid"));

/// A declarable variable name.
static IDENTIFIER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_]*$").expect("identifier regex is valid"));

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// Blank or comment-only line.
    Empty,
    Declaration {
        var_type: VarType,
        names: Vec<String>,
    },
    Assignment {
        name: String,
        expression: String,
    },
    Expression(String),
}

/// Removes a `//` line comment, then the first `/* ... */` block, then
/// trailing whitespace. An unclosed `/*` drops the rest of the line.
pub fn strip_comments(line: &str) -> String {
    let mut result = match line.find("//") {
        Some(pos) => line[..pos].to_string(),
        None => line.to_string(),
    };

    if let Some(start) = result.find("/*") {
        match result[start..].find("*/") {
            Some(offset) => {
                result.replace_range(start..start + offset + 2, "");
            }
            None => result.truncate(start),
        }
    }

    result.trim_end().to_string()
}

/// Classifies a raw input line.
pub fn classify(line: &str) -> Result<Statement, StatementError> {
    let clean = strip_comments(line);
    let clean = clean.trim();

    if clean.is_empty() {
        return Ok(Statement::Empty);
    }

    if let Some((var_type, names)) = parse_declaration(clean) {
        return Ok(Statement::Declaration { var_type, names });
    }

    if clean.contains('=') {
        let (name, expression) = parse_assignment(clean)?;
        return Ok(Statement::Assignment { name, expression });
    }

    let expression = clean.strip_suffix(';').unwrap_or(clean).trim_end();
    Ok(Statement::Expression(expression.to_string()))
}

/// Parses "int a, b, c;" into its type and the valid names it declares.
/// Returns None when the line is not a declaration at all.
pub fn parse_declaration(line: &str) -> Option<(VarType, Vec<String>)> {
    let caps = DECLARATION_RE.captures(line)?;
    let var_type = VarType::from_keyword(&caps[1])?;

    let list: String = caps[2].chars().filter(|c| !c.is_whitespace()).collect();
    let list = list.strip_suffix(';').unwrap_or(&list);

    let names = list
        .split(',')
        .filter(|name| !name.is_empty())
        .filter(|name| {
            if !IDENTIFIER_RE.is_match(name) {
                log_warn!("DECL", "skipping invalid variable name '{}'", name);
                return false;
            }
            if Function::from_name(name).is_some() {
                log_warn!("DECL", "skipping '{}': it is a function name", name);
                return false;
            }
            true
        })
        .map(str::to_string)
        .collect();

    Some((var_type, names))
}

/// Splits "name = expression;" with all whitespace removed.
pub fn parse_assignment(line: &str) -> Result<(String, String), StatementError> {
    let clean: String = line.chars().filter(|c| !c.is_whitespace()).collect();

    let (name, expression) = clean
        .split_once('=')
        .ok_or(StatementError::InvalidAssignment)?;

    if name.is_empty() {
        return Err(StatementError::InvalidAssignment);
    }

    let expression = expression.strip_suffix(';').unwrap_or(expression);
    Ok((name.to_string(), expression.to_string()))
}
