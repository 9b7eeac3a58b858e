#[cfg(test)]
use super::*;
use crate::logging::{format_line, next_seq, Level};
use engine::{EvalError, VarType};

#[test]
fn test_log_line_format() {
    assert_eq!(
        format_line(7, Level::Warn, "STMT", "x failed"),
        "7|W|STMT|x failed"
    );
    assert_eq!(
        format_line(1, Level::Trace, "engine::evaluator", "ok"),
        "1|T|engine::evaluator|ok"
    );
}

#[test]
fn test_sequence_is_increasing() {
    let first = next_seq();
    let second = next_seq();
    assert!(second > first);
}

#[test]
fn test_expression_line_prints_value() {
    let mut session = Session::new();
    assert_eq!(session.process_line("2 + 3 * 4"), Some("14".to_string()));
    assert_eq!(session.process_line("sin(30)"), Some("0.50000".to_string()));
}

#[test]
fn test_declaration_and_assignment_print_nothing() {
    let mut session = Session::new();
    assert_eq!(session.process_line("int a, b;"), None);
    assert_eq!(session.process_line("a = 7 / 2;"), None);
    assert_eq!(session.process_line("a"), Some("3".to_string()));
}

#[test]
fn test_execute_reports_outcomes() {
    let mut session = Session::new();
    assert_eq!(session.execute("float r, h"), Ok(Outcome::Declared(2)));
    assert_eq!(
        session.execute("r = 2.5"),
        Ok(Outcome::Assigned {
            name: "r".to_string(),
            value: 2.5,
        })
    );
    assert_eq!(session.execute("r * 2"), Ok(Outcome::Value(5.0)));
    assert_eq!(session.execute("// just a note"), Ok(Outcome::Nothing));
}

#[test]
fn test_int_assignment_stores_truncated_value() {
    let mut session = Session::new();
    session.execute("int n").unwrap();
    assert_eq!(
        session.execute("n = -9.99"),
        Ok(Outcome::Assigned {
            name: "n".to_string(),
            value: -9.0,
        })
    );
    assert_eq!(session.symbols().get("n").map(|v| v.var_type), Some(VarType::Int));
}

#[test]
fn test_undeclared_target_is_checked_first() {
    let mut session = Session::new();
    assert_eq!(
        session.execute("x = 1 / 0"),
        Err(StatementError::Eval(EvalError::UndeclaredVariable("x".to_string())))
    );
}

#[test]
fn test_errors_become_error_lines() {
    let mut session = Session::new();
    assert_eq!(session.process_line("5 / 0"), Some("Error: Division by zero".to_string()));
    assert_eq!(
        session.process_line("y + 1"),
        Some("Error: Variable y not defined".to_string())
    );
    assert_eq!(
        session.process_line("y = 3"),
        Some("Error: Variable y not declared".to_string())
    );
    assert_eq!(
        session.process_line("=3"),
        Some("Error: Invalid variable assignment".to_string())
    );
    // The session is still usable afterwards.
    assert_eq!(session.process_line("1 + 1"), Some("2".to_string()));
}

#[test]
fn test_failed_assignment_keeps_old_value() {
    let mut session = Session::new();
    session.execute("float v").unwrap();
    session.execute("v = 4.25").unwrap();

    assert!(session.process_line("v = log(0)").is_some());
    assert_eq!(session.symbols().get("v").map(|var| var.value), Some(4.25));
}

#[test]
fn test_variable_dump() {
    let mut session = Session::new();
    assert_eq!(session.variable_dump(), None);

    session.execute("float z").unwrap();
    session.execute("int a").unwrap();
    session.execute("a = 5").unwrap();
    session.execute("z = a / 3").unwrap();

    assert_eq!(
        session.variable_dump(),
        Some("Variables:\n(a, z) = (5, 1.667)".to_string())
    );
}
