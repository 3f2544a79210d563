//! Task model validation.
//!
//! Checks that a [`Task`] can be rendered into a well-formed header before any
//! rendering happens. The loader builds interfaces as an ordered list, so the
//! uniqueness a name-keyed map would give for free is checked here instead.
//!
//! # Validation Pipeline
//!
//! 1. **Identifier Validation**: every task, interface, function and parameter
//!    name matches `[A-Za-z_][A-Za-z0-9_]*` and is not a reserved C++ keyword
//! 2. **Interface Uniqueness**: no two interfaces share a name
//! 3. **Function Uniqueness**: no name repeats across an interface's functions
//!    and callbacks, or within the driver's functions
//! 4. **Parameter Uniqueness**: no parameter name repeats within a function
//!
//! All stages run and their errors are accumulated, so a descriptor with
//! several problems reports all of them at once.
//!
//! # Examples
//!
//! ```rust
//! use drivergen::config::validate_task;
//! use drivergen::errors::ValidationError;
//! use drivergen::model::{Driver, FunctionSignature, Interface, Task};
//!
//! let task = Task {
//!     name: "sum_pairs".to_string(),
//!     interfaces: vec![
//!         Interface::new("solution").with_function(FunctionSignature::new("sum")),
//!         Interface::new("solution"),
//!     ],
//!     driver: Driver::default(),
//! };
//!
//! match validate_task(&task) {
//!     Ok(()) => println!("Task is valid"),
//!     Err(errors) => {
//!         assert_eq!(errors, vec![ValidationError::DuplicateInterface {
//!             name: "solution".to_string(),
//!         }]);
//!     }
//! }
//! ```

use std::collections::HashSet;

use crate::config::consts::DRIVER_SCOPE;
use crate::errors::ValidationError;
use crate::model::{FunctionSignature, Task};
use crate::observability::messages::validation::DuplicateNameDetected;
use crate::observability::messages::StructuredLog;
use crate::utils::identifiers::is_cpp_identifier;

/// Validates a task for structural integrity.
///
/// # Returns
///
/// * `Ok(())` - Task is valid and ready for rendering
/// * `Err(Vec<ValidationError>)` - Every error found, in model order
///
/// Warnings (see [`collect_warnings`]) are never returned here.
pub fn validate_task(task: &Task) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(identifier_errors) = validate_identifiers(task) {
        errors.extend(identifier_errors);
    }

    if let Err(duplicate_errors) = validate_unique_interfaces(task) {
        errors.extend(duplicate_errors);
    }

    if let Err(duplicate_errors) = validate_unique_functions(task) {
        errors.extend(duplicate_errors);
    }

    if let Err(duplicate_errors) = validate_unique_parameters(task) {
        errors.extend(duplicate_errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Collects non-fatal findings about a task.
///
/// Currently reports interfaces that declare neither functions nor callbacks.
pub fn collect_warnings(task: &Task) -> Vec<ValidationError> {
    task.interfaces
        .iter()
        .filter(|interface| interface.is_empty())
        .map(|interface| ValidationError::EmptyInterfaceWarning {
            name: interface.name.clone(),
        })
        .collect()
}

/// Names used by more than one task of a batch, in the order their second use
/// appears.
///
/// Every task renders into a directory named after it, so tasks written in one
/// batch must not share a name.
pub fn shared_task_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    let mut shared = Vec::new();

    for name in names {
        if !seen.insert(name) && !shared.contains(&name) {
            DuplicateNameDetected {
                kind: "task",
                scope: "batch",
                name,
            }
            .log();
            shared.push(name);
        }
    }

    shared
}

fn validate_identifiers(task: &Task) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut check = |context: String, name: &str| {
        if !is_cpp_identifier(name) {
            errors.push(ValidationError::InvalidIdentifier {
                context,
                name: name.to_string(),
            });
        }
    };

    check("task".to_string(), &task.name);

    for interface in &task.interfaces {
        check("interface".to_string(), &interface.name);
        for function in &interface.functions {
            check(format!("function in '{}'", interface.name), &function.name);
            check_parameters(&mut check, function);
        }
        for callback in &interface.callback_functions {
            check(format!("callback in '{}'", interface.name), &callback.name);
            check_parameters(&mut check, callback);
        }
    }

    for function in &task.driver.functions {
        check(format!("function in '{}'", DRIVER_SCOPE), &function.name);
        check_parameters(&mut check, function);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_parameters(check: &mut impl FnMut(String, &str), function: &FunctionSignature) {
    for parameter in &function.parameters {
        check(format!("parameter of '{}'", function.name), &parameter.name);
    }
}

fn validate_unique_interfaces(task: &Task) -> Result<(), Vec<ValidationError>> {
    let mut seen = HashSet::new();
    let mut errors = Vec::new();

    for interface in &task.interfaces {
        if !seen.insert(interface.name.as_str()) {
            DuplicateNameDetected {
                kind: "interface",
                scope: &task.name,
                name: &interface.name,
            }
            .log();
            errors.push(ValidationError::DuplicateInterface {
                name: interface.name.clone(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Functions and callbacks of one interface share a namespace in the header,
/// so a name may appear only once across both lists.
fn validate_unique_functions(task: &Task) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    for interface in &task.interfaces {
        let all = interface
            .functions
            .iter()
            .chain(interface.callback_functions.iter());
        errors.extend(duplicate_functions(&interface.name, all));
    }

    errors.extend(duplicate_functions(DRIVER_SCOPE, task.driver.functions.iter()));

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn duplicate_functions<'a>(
    scope: &str,
    functions: impl Iterator<Item = &'a FunctionSignature>,
) -> Vec<ValidationError> {
    let mut seen = HashSet::new();
    let mut errors = Vec::new();

    for function in functions {
        if !seen.insert(function.name.as_str()) {
            DuplicateNameDetected {
                kind: "function",
                scope,
                name: &function.name,
            }
            .log();
            errors.push(ValidationError::DuplicateFunction {
                scope: scope.to_string(),
                name: function.name.clone(),
            });
        }
    }

    errors
}

fn validate_unique_parameters(task: &Task) -> Result<(), Vec<ValidationError>> {
    let functions = task
        .interfaces
        .iter()
        .flat_map(|i| i.functions.iter().chain(i.callback_functions.iter()))
        .chain(task.driver.functions.iter());

    let mut errors = Vec::new();
    for function in functions {
        let mut seen = HashSet::new();
        for parameter in &function.parameters {
            if !seen.insert(parameter.name.as_str()) {
                DuplicateNameDetected {
                    kind: "parameter",
                    scope: &function.name,
                    name: &parameter.name,
                }
                .log();
                errors.push(ValidationError::DuplicateParameter {
                    function: function.name.clone(),
                    name: parameter.name.clone(),
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Driver, Interface, ScalarType, ValueType};

    fn int() -> ValueType {
        ValueType::scalar(ScalarType::Int)
    }

    fn task(interfaces: Vec<Interface>, driver_functions: Vec<FunctionSignature>) -> Task {
        Task {
            name: "task".to_string(),
            interfaces,
            driver: Driver {
                functions: driver_functions,
            },
        }
    }

    #[test]
    fn test_valid_task() {
        let t = task(
            vec![
                Interface::new("solution")
                    .with_function(FunctionSignature::new("solve").param("n", int()))
                    .with_callback(FunctionSignature::new("emit").param("n", int())),
                Interface::new("checker").with_function(FunctionSignature::new("solve")),
            ],
            vec![FunctionSignature::new("solve")],
        );

        assert!(validate_task(&t).is_ok());
    }

    #[test]
    fn test_validation_table_driven() {
        struct TestCase {
            name: &'static str,
            task: Task,
            expected: Vec<ValidationError>,
        }

        let test_cases = vec![
            TestCase {
                name: "duplicate interface",
                task: task(
                    vec![Interface::new("a"), Interface::new("b"), Interface::new("a")],
                    vec![],
                ),
                expected: vec![ValidationError::DuplicateInterface {
                    name: "a".to_string(),
                }],
            },
            TestCase {
                name: "function and callback share a name",
                task: task(
                    vec![Interface::new("a")
                        .with_function(FunctionSignature::new("f"))
                        .with_callback(FunctionSignature::new("f"))],
                    vec![],
                ),
                expected: vec![ValidationError::DuplicateFunction {
                    scope: "a".to_string(),
                    name: "f".to_string(),
                }],
            },
            TestCase {
                name: "duplicate driver function",
                task: task(
                    vec![],
                    vec![FunctionSignature::new("z"), FunctionSignature::new("z")],
                ),
                expected: vec![ValidationError::DuplicateFunction {
                    scope: "driver".to_string(),
                    name: "z".to_string(),
                }],
            },
            TestCase {
                name: "duplicate parameter",
                task: task(
                    vec![Interface::new("a").with_function(
                        FunctionSignature::new("f").param("x", int()).param("x", int()),
                    )],
                    vec![],
                ),
                expected: vec![ValidationError::DuplicateParameter {
                    function: "f".to_string(),
                    name: "x".to_string(),
                }],
            },
            TestCase {
                name: "invalid identifiers",
                task: task(
                    vec![Interface::new("bad-name")
                        .with_callback(FunctionSignature::new("cb").param("1st", int()))],
                    vec![FunctionSignature::new("")],
                ),
                expected: vec![
                    ValidationError::InvalidIdentifier {
                        context: "interface".to_string(),
                        name: "bad-name".to_string(),
                    },
                    ValidationError::InvalidIdentifier {
                        context: "parameter of 'cb'".to_string(),
                        name: "1st".to_string(),
                    },
                    ValidationError::InvalidIdentifier {
                        context: "function in 'driver'".to_string(),
                        name: "".to_string(),
                    },
                ],
            },
            TestCase {
                name: "reserved C++ keywords",
                task: task(
                    vec![Interface::new("class")
                        .with_function(FunctionSignature::new("f").param("new", int()))],
                    vec![FunctionSignature::new("delete")],
                ),
                expected: vec![
                    ValidationError::InvalidIdentifier {
                        context: "interface".to_string(),
                        name: "class".to_string(),
                    },
                    ValidationError::InvalidIdentifier {
                        context: "parameter of 'f'".to_string(),
                        name: "new".to_string(),
                    },
                    ValidationError::InvalidIdentifier {
                        context: "function in 'driver'".to_string(),
                        name: "delete".to_string(),
                    },
                ],
            },
        ];

        for case in test_cases {
            let result = validate_task(&case.task);
            assert_eq!(result, Err(case.expected), "case: {}", case.name);
        }
    }

    #[test]
    fn test_errors_accumulate_across_stages() {
        let t = task(
            vec![
                Interface::new("a").with_function(FunctionSignature::new("f")),
                Interface::new("a").with_function(FunctionSignature::new("f")),
            ],
            vec![FunctionSignature::new("z").param("p", int()).param("p", int())],
        );

        let errors = validate_task(&t).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.contains(&ValidationError::DuplicateInterface {
            name: "a".to_string()
        }));
        assert!(errors.contains(&ValidationError::DuplicateParameter {
            function: "z".to_string(),
            name: "p".to_string()
        }));
    }

    #[test]
    fn test_shared_task_names() {
        struct TestCase {
            name: &'static str,
            names: Vec<&'static str>,
            expected: Vec<&'static str>,
        }

        let test_cases = vec![
            TestCase {
                name: "empty batch",
                names: vec![],
                expected: vec![],
            },
            TestCase {
                name: "distinct names",
                names: vec!["sum_pairs", "graph"],
                expected: vec![],
            },
            TestCase {
                name: "one name used three times",
                names: vec!["graph", "sum_pairs", "graph", "graph"],
                expected: vec!["graph"],
            },
            TestCase {
                name: "two shared names keep the order of their second use",
                names: vec!["a", "b", "b", "a"],
                expected: vec!["b", "a"],
            },
        ];

        for case in test_cases {
            let result = shared_task_names(case.names.iter().copied());
            assert_eq!(result, case.expected, "case: {}", case.name);
        }
    }

    #[test]
    fn test_collect_warnings_reports_empty_interfaces() {
        let t = task(
            vec![
                Interface::new("used").with_function(FunctionSignature::new("f")),
                Interface::new("unused"),
            ],
            vec![],
        );

        let warnings = collect_warnings(&t);
        assert_eq!(
            warnings,
            vec![ValidationError::EmptyInterfaceWarning {
                name: "unused".to_string()
            }]
        );
        assert!(warnings.iter().all(|w| w.is_warning()));
        assert!(validate_task(&t).is_ok());
    }
}
