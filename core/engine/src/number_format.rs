//! FILENAME: core/engine/src/number_format.rs
//! PURPOSE: Number formatting utilities for displaying results and variables.
//! CONTEXT: The evaluator returns a plain f64. This module decides how that
//! value is shown: integral results without a decimal point, everything else
//! with fixed precision, and the end-of-run "(names) = (values)" dump.

use crate::symbols::{SymbolTable, VarType, Variable};

/// Decimal places for a non-integral expression result.
pub const RESULT_DECIMAL_PLACES: usize = 5;

/// Decimal places for float variables in the variable dump.
pub const VARIABLE_DECIMAL_PLACES: usize = 3;

/// Formats an expression result: "14" for integral values, "0.50000" otherwise.
pub fn format_result(value: f64) -> String {
    match as_integer(value) {
        Some(n) => n.to_string(),
        None => format_fixed(value, RESULT_DECIMAL_PLACES),
    }
}

/// Formats a variable's value according to its declared type.
pub fn format_variable(variable: &Variable) -> String {
    match variable.var_type {
        VarType::Int => match as_integer(variable.value.trunc()) {
            Some(n) => n.to_string(),
            None => format_fixed(variable.value.trunc(), 0),
        },
        VarType::Float => format_fixed(variable.value, VARIABLE_DECIMAL_PLACES),
    }
}

/// Builds the end-of-run dump, or None when nothing was declared.
///
/// Int variables come first, then float variables, each group in name order:
///
/// ```text
/// Variables:
/// (a, b, c) = (5, 7, 31.907)
/// ```
pub fn format_variable_dump(table: &SymbolTable) -> Option<String> {
    if table.is_empty() {
        return None;
    }

    let ordered = table
        .iter()
        .filter(|(_, var)| var.var_type == VarType::Int)
        .chain(
            table
                .iter()
                .filter(|(_, var)| var.var_type == VarType::Float),
        );

    let mut names = Vec::with_capacity(table.len());
    let mut values = Vec::with_capacity(table.len());
    for (name, var) in ordered {
        names.push(name.to_string());
        values.push(format_variable(var));
    }

    Some(format!(
        "Variables:\n({}) = ({})",
        names.join(", "),
        values.join(", ")
    ))
}

/// The value as an integer when it has no fractional part and fits in i64.
fn as_integer(value: f64) -> Option<i64> {
    // i64::MAX is not exactly representable; stay strictly inside the range.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;

    if value.is_finite() && value.fract() == 0.0 && value.abs() < LIMIT {
        Some(value as i64)
    } else {
        None
    }
}

fn format_fixed(value: f64, decimal_places: usize) -> String {
    format!("{:.prec$}", value, prec = decimal_places)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integral_results_have_no_decimal_point() {
        assert_eq!(format_result(14.0), "14");
        assert_eq!(format_result(-6.0), "-6");
        assert_eq!(format_result(0.0), "0");
        assert_eq!(format_result(-0.0), "0");
    }

    #[test]
    fn test_fractional_results_use_five_places() {
        assert_eq!(format_result(0.5), "0.50000");
        assert_eq!(format_result(3.14159265), "3.14159");
        assert_eq!(format_result(-2.25), "-2.25000");
    }

    #[test]
    fn test_non_finite_results() {
        assert_eq!(format_result(f64::INFINITY), "inf");
        assert_eq!(format_result(f64::NAN), "NaN");
    }

    #[test]
    fn test_variable_formatting() {
        assert_eq!(format_variable(&Variable::with_value(VarType::Int, 7.0)), "7");
        assert_eq!(
            format_variable(&Variable::with_value(VarType::Float, 31.9066)),
            "31.907"
        );
        assert_eq!(format_variable(&Variable::new(VarType::Float)), "0.000");
    }

    #[test]
    fn test_empty_dump() {
        assert_eq!(format_variable_dump(&SymbolTable::new()), None);
    }

    #[test]
    fn test_dump_orders_ints_before_floats() {
        let mut table = SymbolTable::new();
        table.declare("e", VarType::Float);
        table.declare("a", VarType::Int);
        table.declare("d", VarType::Float);
        table.declare("b", VarType::Int);
        table.assign("a", 5.0).unwrap();
        table.assign("b", 7.0).unwrap();
        table.assign("d", 31.907).unwrap();
        table.assign("e", 71.107).unwrap();

        assert_eq!(
            format_variable_dump(&table).unwrap(),
            "Variables:\n(a, b, d, e) = (5, 7, 31.907, 71.107)"
        );
    }
}
