// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::{LoadError, ValidationError};
use crate::model::Task;
use crate::observability::messages::loader::{TaskLoadFailed, TaskLoaded};
use crate::observability::messages::validation::{
    EmptyInterfaceDetected, ValidationCompleted, ValidationFailed, ValidationStarted,
};
use crate::observability::messages::StructuredLog;
use std::fs;
use std::path::Path;

/// Serialization format of a task descriptor.
///
/// # Variants
/// * `Yaml` - `.yaml` / `.yml` files
/// * `Toml` - `.toml` files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskFormat {
    Yaml,
    Toml,
}

impl TaskFormat {
    /// Pick the format from a file extension, if it is one we read.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Some(TaskFormat::Yaml),
            "toml" => Some(TaskFormat::Toml),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskFormat::Yaml => "yaml",
            TaskFormat::Toml => "toml",
        }
    }
}

/// Parse a task descriptor from a string.
///
/// Interfaces, functions and parameters keep the order they are declared in.
pub fn parse_task(content: &str, format: TaskFormat) -> Result<Task, LoadError> {
    match format {
        TaskFormat::Yaml => serde_yaml::from_str(content).map_err(|e| LoadError::Parse {
            format: format.as_str(),
            message: e.to_string(),
        }),
        TaskFormat::Toml => toml::from_str(content).map_err(|e| LoadError::Parse {
            format: format.as_str(),
            message: e.to_string(),
        }),
    }
}

/// Load a task descriptor from a YAML or TOML file
pub fn load_task<P: AsRef<Path>>(path: P) -> Result<Task, LoadError> {
    let path = path.as_ref();
    let result = read_and_parse(path);

    match &result {
        Ok(task) => TaskLoaded {
            path: &path.display().to_string(),
            format: TaskFormat::from_path(path).map(|f| f.as_str()).unwrap_or("unknown"),
            task_name: &task.name,
            interface_count: task.interfaces.len(),
            driver_function_count: task.driver.functions.len(),
        }
        .log(),
        Err(error) => TaskLoadFailed {
            path: &path.display().to_string(),
            error,
        }
        .log(),
    }

    result
}

fn read_and_parse(path: &Path) -> Result<Task, LoadError> {
    let format = TaskFormat::from_path(path).ok_or_else(|| LoadError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_task(&content, format)
}

/// Load and validate a task descriptor
///
/// Validation errors are collected and returned together as
/// [`LoadError::Validation`]; warnings are logged and do not fail the load.
pub fn load_and_validate_task<P: AsRef<Path>>(path: P) -> Result<Task, LoadError> {
    let task = load_task(path)?;
    check_task(&task)?;
    Ok(task)
}

/// Validate an already-loaded task, logging progress and warnings.
fn check_task(task: &Task) -> Result<(), LoadError> {
    ValidationStarted {
        task_name: &task.name,
        interface_count: task.interfaces.len(),
    }
    .log();

    if let Err(errors) = crate::config::validate_task(task) {
        ValidationFailed {
            task_name: &task.name,
            error_count: errors.len(),
        }
        .log();
        return Err(LoadError::Validation(errors));
    }

    let warnings = crate::config::collect_warnings(task);
    for warning in &warnings {
        if let ValidationError::EmptyInterfaceWarning { name } = warning {
            EmptyInterfaceDetected {
                interface_name: name,
            }
            .log();
        }
    }

    ValidationCompleted {
        task_name: &task.name,
        warning_count: warnings.len(),
    }
    .log();

    Ok(())
}
