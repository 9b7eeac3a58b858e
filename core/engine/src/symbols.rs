//! FILENAME: core/engine/src/symbols.rs
//! PURPOSE: Typed variable store read by the evaluator.
//! CONTEXT: The statement layer owns a SymbolTable and is the only writer
//! (declarations and assignments). The evaluator only ever sees the read-only
//! SymbolLookup capability, so it cannot declare or mutate anything.

use crate::error::{EvalError, EvalResult};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Declared type of a variable. Decides how assigned values are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VarType {
    Int,
    Float,
}

impl VarType {
    /// Maps a declaration keyword (`int`, `float`) to its type.
    pub fn from_keyword(keyword: &str) -> Option<VarType> {
        match keyword {
            "int" => Some(VarType::Int),
            "float" => Some(VarType::Float),
            _ => None,
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            VarType::Int => "int",
            VarType::Float => "float",
        }
    }
}

impl std::fmt::Display for VarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

/// A declared variable and its current value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Variable {
    pub var_type: VarType,
    pub value: f64,
}

impl Variable {
    /// Freshly declared variables start at zero.
    pub fn new(var_type: VarType) -> Self {
        Variable {
            var_type,
            value: 0.0,
        }
    }

    pub fn with_value(var_type: VarType, value: f64) -> Self {
        Variable { var_type, value }
    }
}

/// Read-only symbol lookup handed to the evaluator.
pub trait SymbolLookup {
    /// Returns the variable bound to `name`, or None if it was never declared.
    fn lookup(&self, name: &str) -> Option<Variable>;
}

impl SymbolLookup for HashMap<String, Variable> {
    fn lookup(&self, name: &str) -> Option<Variable> {
        self.get(name).copied()
    }
}

impl SymbolLookup for BTreeMap<String, Variable> {
    fn lookup(&self, name: &str) -> Option<Variable> {
        self.get(name).copied()
    }
}

/// The calculator's variable store. Names are case-sensitive and kept in
/// sorted order, which is also the order of the end-of-run dump.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymbolTable {
    variables: BTreeMap<String, Variable>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable {
            variables: BTreeMap::new(),
        }
    }

    /// Declares `name` with the given type. Re-declaring an existing name
    /// resets it to zero and replaces its type.
    pub fn declare(&mut self, name: impl Into<String>, var_type: VarType) {
        self.variables.insert(name.into(), Variable::new(var_type));
    }

    /// Stores `value` into a declared variable and returns what was stored.
    /// Int variables keep only the truncated (toward zero) value.
    pub fn assign(&mut self, name: &str, value: f64) -> EvalResult<f64> {
        let variable = self
            .variables
            .get_mut(name)
            .ok_or_else(|| EvalError::UndeclaredVariable(name.to_string()))?;

        variable.value = match variable.var_type {
            VarType::Int => value.trunc(),
            VarType::Float => value,
        };

        Ok(variable.value)
    }

    pub fn get(&self, name: &str) -> Option<&Variable> {
        self.variables.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Iterates variables in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Variable)> {
        self.variables.iter().map(|(name, var)| (name.as_str(), var))
    }

    pub fn clear(&mut self) {
        self.variables.clear();
    }
}

impl SymbolLookup for SymbolTable {
    fn lookup(&self, name: &str) -> Option<Variable> {
        self.variables.get(name).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declared_variables_start_at_zero() {
        let mut table = SymbolTable::new();
        table.declare("a", VarType::Int);

        assert_eq!(table.get("a"), Some(&Variable::new(VarType::Int)));
        assert_eq!(table.lookup("a").map(|v| v.value), Some(0.0));
    }

    #[test]
    fn int_assignment_truncates_toward_zero() {
        let mut table = SymbolTable::new();
        table.declare("n", VarType::Int);

        assert_eq!(table.assign("n", 7.9), Ok(7.0));
        assert_eq!(table.assign("n", -7.9), Ok(-7.0));
        assert_eq!(table.get("n").map(|v| v.value), Some(-7.0));
    }

    #[test]
    fn float_assignment_is_exact() {
        let mut table = SymbolTable::new();
        table.declare("f", VarType::Float);

        assert_eq!(table.assign("f", 2.75), Ok(2.75));
    }

    #[test]
    fn assigning_undeclared_name_fails() {
        let mut table = SymbolTable::new();

        assert_eq!(
            table.assign("ghost", 1.0),
            Err(EvalError::UndeclaredVariable("ghost".to_string()))
        );
        assert!(table.is_empty());
    }

    #[test]
    fn redeclaration_resets_value_and_type() {
        let mut table = SymbolTable::new();
        table.declare("x", VarType::Float);
        table.assign("x", 3.5).unwrap();

        table.declare("x", VarType::Int);

        assert_eq!(table.get("x"), Some(&Variable::new(VarType::Int)));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn names_are_case_sensitive() {
        let mut table = SymbolTable::new();
        table.declare("Rate", VarType::Float);

        assert!(table.contains("Rate"));
        assert!(!table.contains("rate"));
        assert_eq!(table.lookup("rate"), None);
    }

    #[test]
    fn iteration_is_name_ordered() {
        let mut table = SymbolTable::new();
        table.declare("c", VarType::Int);
        table.declare("a", VarType::Float);
        table.declare("b", VarType::Int);

        let names: Vec<&str> = table.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn maps_implement_lookup() {
        let mut map = HashMap::new();
        map.insert("k".to_string(), Variable::with_value(VarType::Float, 1.5));

        assert_eq!(map.lookup("k").map(|v| v.value), Some(1.5));
        assert_eq!(map.lookup("missing"), None);
    }

    #[test]
    fn table_serializes_as_a_name_map() {
        let mut table = SymbolTable::new();
        table.declare("a", VarType::Int);
        table.assign("a", 5.0).unwrap();

        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json, serde_json::json!({ "a": { "var_type": "int", "value": 5.0 } }));

        let restored: SymbolTable = serde_json::from_value(json).unwrap();
        assert_eq!(restored, table);
    }
}
