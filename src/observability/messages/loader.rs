// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for task descriptor loading.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Task descriptor loaded and parsed.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use drivergen::observability::messages::loader::TaskLoaded;
///
/// let msg = TaskLoaded {
///     path: "tasks/sum_pairs.yaml",
///     format: "yaml",
///     task_name: "sum_pairs",
///     interface_count: 1,
///     driver_function_count: 2,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct TaskLoaded<'a> {
    pub path: &'a str,
    pub format: &'a str,
    pub task_name: &'a str,
    pub interface_count: usize,
    pub driver_function_count: usize,
}

impl Display for TaskLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Loaded task '{}' from {} ({}): {} interfaces, {} driver functions",
            self.task_name, self.path, self.format, self.interface_count, self.driver_function_count
        )
    }
}

impl StructuredLog for TaskLoaded<'_> {
    fn log(&self) {
        tracing::info!(
            path = self.path,
            format = self.format,
            task_name = self.task_name,
            interface_count = self.interface_count,
            driver_function_count = self.driver_function_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "task_loaded",
            span_name = name,
            path = self.path,
            task_name = self.task_name,
        )
    }
}

/// Task descriptor could not be loaded.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use drivergen::observability::messages::loader::TaskLoadFailed;
///
/// let error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
/// let msg = TaskLoadFailed {
///     path: "tasks/missing.yaml",
///     error: &error,
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct TaskLoadFailed<'a> {
    pub path: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for TaskLoadFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Failed to load task from {}: {}", self.path, self.error)
    }
}

impl StructuredLog for TaskLoadFailed<'_> {
    fn log(&self) {
        tracing::error!(
            path = self.path,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!("task_load_failed", span_name = name, path = self.path)
    }
}
