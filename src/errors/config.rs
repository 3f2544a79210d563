// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during task model validation
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A name does not match `[A-Za-z_][A-Za-z0-9_]*`
    InvalidIdentifier {
        /// What the name belongs to, e.g. "interface" or "parameter of 'solve'"
        context: String,
        /// The offending name
        name: String,
    },
    /// Two interfaces share a name
    DuplicateInterface {
        /// The duplicate interface name
        name: String,
    },
    /// A function name is declared twice in the same scope
    DuplicateFunction {
        /// Interface name, or "driver" for driver functions
        scope: String,
        /// The duplicate function name
        name: String,
    },
    /// A parameter name is declared twice in one function
    DuplicateParameter {
        /// The function owning the parameters
        function: String,
        /// The duplicate parameter name
        name: String,
    },
    /// An interface declares neither functions nor callbacks
    EmptyInterfaceWarning {
        /// The empty interface
        name: String,
    },
}

impl ValidationError {
    pub fn is_warning(&self) -> bool {
        matches!(self, ValidationError::EmptyInterfaceWarning { .. })
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidIdentifier { context, name } => {
                write!(f, "Invalid {} name: '{}'", context, name)
            }
            ValidationError::DuplicateInterface { name } => {
                write!(f, "Duplicate interface name: '{}'", name)
            }
            ValidationError::DuplicateFunction { scope, name } => {
                write!(f, "Function '{}' is declared more than once in '{}'", name, scope)
            }
            ValidationError::DuplicateParameter { function, name } => {
                write!(
                    f,
                    "Parameter '{}' is declared more than once in function '{}'",
                    name, function
                )
            }
            ValidationError::EmptyInterfaceWarning { name } => {
                write!(
                    f,
                    "Interface '{}' declares no functions and no callbacks; its block will be empty",
                    name
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Errors that can occur while loading a task descriptor
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read task descriptor {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported task descriptor format for {path} (expected .yaml, .yml or .toml)")]
    UnsupportedFormat { path: PathBuf },

    #[error("failed to parse {format} task descriptor: {message}")]
    Parse {
        format: &'static str,
        message: String,
    },

    #[error("task validation failed:\n{}", join_lines(.0))]
    Validation(Vec<ValidationError>),
}

fn join_lines(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
