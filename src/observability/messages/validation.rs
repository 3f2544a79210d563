// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for task model validation warnings and errors.
//!
//! This module contains message types for logging events related to:
//! * Identifier checks
//! * Duplicate interface, function and parameter detection
//! * Empty interface warnings

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Duplicate name detected in a task.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use drivergen::observability::messages::validation::DuplicateNameDetected;
///
/// let msg = DuplicateNameDetected {
///     kind: "interface",
///     scope: "sum_pairs",
///     name: "solution",
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct DuplicateNameDetected<'a> {
    pub kind: &'a str,
    pub scope: &'a str,
    pub name: &'a str,
}

impl Display for DuplicateNameDetected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Duplicate {} name '{}' in '{}'",
            self.kind, self.name, self.scope
        )
    }
}

impl StructuredLog for DuplicateNameDetected<'_> {
    fn log(&self) {
        tracing::error!(
            kind = self.kind,
            scope = self.scope,
            name = self.name,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::ERROR,
            "span_name",
            name = name,
            kind = self.kind,
            scope = self.scope,
        )
    }
}

/// Interface with no declarations (its block renders empty).
///
/// # Log Level
/// `warn!` - Potential issue or degraded behavior
///
/// # Example
/// ```
/// use drivergen::observability::messages::validation::EmptyInterfaceDetected;
///
/// let msg = EmptyInterfaceDetected {
///     interface_name: "unused",
/// };
///
/// tracing::warn!("{}", msg);
/// ```
pub struct EmptyInterfaceDetected<'a> {
    pub interface_name: &'a str,
}

impl Display for EmptyInterfaceDetected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Interface '{}' declares no functions and no callbacks",
            self.interface_name
        )
    }
}

impl StructuredLog for EmptyInterfaceDetected<'_> {
    fn log(&self) {
        tracing::warn!(
            interface_name = self.interface_name,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::WARN,
            "span_name",
            name = name,
            interface_name = self.interface_name,
        )
    }
}

/// Task validation started.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use drivergen::observability::messages::validation::ValidationStarted;
///
/// let msg = ValidationStarted {
///     task_name: "sum_pairs",
///     interface_count: 2,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct ValidationStarted<'a> {
    pub task_name: &'a str,
    pub interface_count: usize,
}

impl Display for ValidationStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Starting validation of task '{}' with {} interfaces",
            self.task_name, self.interface_count
        )
    }
}

impl StructuredLog for ValidationStarted<'_> {
    fn log(&self) {
        tracing::info!(
            task_name = self.task_name,
            interface_count = self.interface_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::INFO,
            "span_name",
            name = name,
            task_name = self.task_name,
            interface_count = self.interface_count,
        )
    }
}

/// Task validation completed successfully.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use drivergen::observability::messages::validation::ValidationCompleted;
///
/// let msg = ValidationCompleted {
///     task_name: "sum_pairs",
///     warning_count: 1,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct ValidationCompleted<'a> {
    pub task_name: &'a str,
    pub warning_count: usize,
}

impl Display for ValidationCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        if self.warning_count > 0 {
            write!(
                f,
                "Validation of task '{}' completed with {} warnings",
                self.task_name, self.warning_count
            )
        } else {
            write!(
                f,
                "Validation of task '{}' completed successfully",
                self.task_name
            )
        }
    }
}

impl StructuredLog for ValidationCompleted<'_> {
    fn log(&self) {
        tracing::info!(
            task_name = self.task_name,
            warning_count = self.warning_count,
            has_warnings = self.warning_count > 0,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::INFO,
            "span_name",
            name = name,
            task_name = self.task_name,
            warning_count = self.warning_count,
        )
    }
}

/// Task validation failed.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use drivergen::observability::messages::validation::ValidationFailed;
///
/// let msg = ValidationFailed {
///     task_name: "sum_pairs",
///     error_count: 3,
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct ValidationFailed<'a> {
    pub task_name: &'a str,
    pub error_count: usize,
}

impl Display for ValidationFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Validation of task '{}' failed with {} errors",
            self.task_name, self.error_count
        )
    }
}

impl StructuredLog for ValidationFailed<'_> {
    fn log(&self) {
        tracing::error!(
            task_name = self.task_name,
            error_count = self.error_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::ERROR,
            "span_name",
            name = name,
            task_name = self.task_name,
            error_count = self.error_count,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_parameter_message() {
        let msg = DuplicateNameDetected {
            kind: "parameter",
            scope: "solve",
            name: "x",
        };

        assert_eq!(msg.to_string(), "Duplicate parameter name 'x' in 'solve'");
        msg.log();
    }
}
