// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Data model for a code-generation task.
//!
//! A [`Task`] owns an ordered list of [`Interface`]s and a single unnamed
//! [`Driver`]. Interfaces are kept in declaration order so rendering never
//! depends on map iteration order. Every type here deserializes directly from
//! a task descriptor (see [`crate::config::load_task`]).
//!
//! # Example
//! ```yaml
//! name: sum_pairs
//! interfaces:
//!   - name: solution
//!     functions:
//!       - name: sum
//!         returns: int
//!         parameters:
//!           - { name: n, type: int }
//!           - { name: values, type: "int[]" }
//!     callback_functions:
//!       - name: report
//!         parameters:
//!           - { name: total, type: int64 }
//! driver:
//!   functions:
//!     - name: evaluate
//! ```

mod types;

pub use types::{ScalarType, ValueType};

use serde::{Deserialize, Serialize};

/// Top-level descriptor of one code-generation unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub name: String,
    #[serde(default)]
    pub interfaces: Vec<Interface>,
    #[serde(default)]
    pub driver: Driver,
}

impl Task {
    /// Look up an interface by name.
    pub fn interface(&self, name: &str) -> Option<&Interface> {
        self.interfaces.iter().find(|i| i.name == name)
    }

    /// Return a copy of this task without the named interface.
    ///
    /// Every other interface keeps its relative order.
    pub fn without_interface(&self, name: &str) -> Task {
        Task {
            name: self.name.clone(),
            interfaces: self
                .interfaces
                .iter()
                .filter(|i| i.name != name)
                .cloned()
                .collect(),
            driver: self.driver.clone(),
        }
    }
}

/// A named group of function and callback-function signatures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interface {
    pub name: String,
    #[serde(default)]
    pub functions: Vec<FunctionSignature>,
    #[serde(default)]
    pub callback_functions: Vec<FunctionSignature>,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            functions: Vec::new(),
            callback_functions: Vec::new(),
        }
    }

    pub fn with_function(mut self, function: FunctionSignature) -> Self {
        self.functions.push(function);
        self
    }

    pub fn with_callback(mut self, callback: FunctionSignature) -> Self {
        self.callback_functions.push(callback);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty() && self.callback_functions.is_empty()
    }
}

/// Task-level functions, rendered once and without a name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Driver {
    #[serde(default)]
    pub functions: Vec<FunctionSignature>,
}

/// One function declaration: name, ordered parameters and optional return type.
///
/// A missing `returns` means the function returns nothing (`void`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionSignature {
    pub name: String,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub returns: Option<ScalarType>,
}

impl FunctionSignature {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
            returns: None,
        }
    }

    pub fn param(mut self, name: impl Into<String>, ty: ValueType) -> Self {
        self.parameters.push(Parameter {
            name: name.into(),
            ty,
        });
        self
    }

    pub fn returning(mut self, ty: ScalarType) -> Self {
        self.returns = Some(ty);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: ValueType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_task_preserves_declaration_order() {
        let yaml = r#"
name: ordering
interfaces:
  - name: zeta
  - name: alpha
  - name: mid
"#;
        let task: Task = serde_yaml::from_str(yaml).unwrap();
        let names: Vec<&str> = task.interfaces.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
        assert!(task.driver.functions.is_empty());
    }

    #[test]
    fn deserialize_function_signature_defaults() {
        let yaml = r#"
name: f
"#;
        let f: FunctionSignature = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(f, FunctionSignature::new("f"));
    }

    #[test]
    fn deserialize_parameter_types() {
        let yaml = r#"
name: solve
returns: int64
parameters:
  - { name: n, type: int }
  - { name: grid, type: "int[][]" }
  - { name: flag, type: bool }
"#;
        let f: FunctionSignature = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(f.returns, Some(ScalarType::Int64));
        assert_eq!(f.parameters[0].ty, ValueType::scalar(ScalarType::Int));
        assert_eq!(f.parameters[1].ty, ValueType::array(ScalarType::Int, 2));
        assert_eq!(f.parameters[2].ty, ValueType::scalar(ScalarType::Bool));
    }

    #[test]
    fn deserialize_rejects_unknown_scalar() {
        let yaml = r#"
name: solve
parameters:
  - { name: x, type: float }
"#;
        let result: Result<FunctionSignature, _> = serde_yaml::from_str(yaml);
        assert!(result.is_err());
    }

    #[test]
    fn without_interface_keeps_remaining_order() {
        let task = Task {
            name: "t".to_string(),
            interfaces: vec![Interface::new("a"), Interface::new("b"), Interface::new("c")],
            driver: Driver::default(),
        };

        let trimmed = task.without_interface("b");
        let names: Vec<&str> = trimmed.interfaces.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["a", "c"]);
        assert_eq!(task.interfaces.len(), 3);
        assert!(trimmed.interface("b").is_none());
        assert!(trimmed.interface("c").is_some());
    }
}
