// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for driver header rendering events.
//!
//! This module contains message types for logging events related to:
//! * Header render lifecycle (start, completion)
//! * Per-block rendering
//! * Backend failures

use crate::errors::RenderError;
use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Header rendering started.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use drivergen::observability::messages::render::RenderStarted;
///
/// let msg = RenderStarted {
///     task_name: "sum_pairs",
///     interface_count: 3,
///     backend: "cpp",
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct RenderStarted<'a> {
    pub task_name: &'a str,
    pub interface_count: usize,
    pub backend: &'a str,
}

impl Display for RenderStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Rendering driver header for task '{}' with {} backend: {} interfaces",
            self.task_name, self.backend, self.interface_count
        )
    }
}

impl StructuredLog for RenderStarted<'_> {
    fn log(&self) {
        tracing::info!(
            task_name = self.task_name,
            interface_count = self.interface_count,
            backend = self.backend,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "render",
            span_name = name,
            task_name = self.task_name,
            interface_count = self.interface_count,
            backend = self.backend,
        )
    }
}

/// One protocol-header block rendered.
///
/// # Log Level
/// `debug!` - Per-block detail
///
/// # Example
/// ```
/// use drivergen::observability::messages::render::BlockRendered;
///
/// let msg = BlockRendered {
///     interface_name: None,
///     driver: false,
///     function_count: 0,
///     callback_count: 2,
///     bytes: 120,
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct BlockRendered<'a> {
    pub interface_name: Option<&'a str>,
    pub driver: bool,
    pub function_count: usize,
    pub callback_count: usize,
    pub bytes: usize,
}

impl Display for BlockRendered<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self.interface_name {
            Some(name) => write!(
                f,
                "Rendered block for interface '{}': {} functions, {} callbacks ({} bytes)",
                name, self.function_count, self.callback_count, self.bytes
            ),
            None => write!(
                f,
                "Rendered driver block: {} functions, {} callbacks ({} bytes)",
                self.function_count, self.callback_count, self.bytes
            ),
        }
    }
}

impl StructuredLog for BlockRendered<'_> {
    fn log(&self) {
        tracing::debug!(
            interface_name = self.interface_name.unwrap_or(""),
            driver = self.driver,
            function_count = self.function_count,
            callback_count = self.callback_count,
            bytes = self.bytes,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "block",
            span_name = name,
            interface_name = self.interface_name.unwrap_or(""),
            driver = self.driver,
        )
    }
}

/// A backend failed to render a block.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use drivergen::errors::RenderError;
/// use drivergen::observability::messages::render::BlockRenderFailed;
///
/// let error = RenderError::InvalidIdentifier {
///     context: "function".to_string(),
///     name: "class".to_string(),
/// };
/// let msg = BlockRenderFailed {
///     task_name: "sum_pairs",
///     interface_name: Some("solution"),
///     error: &error,
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct BlockRenderFailed<'a> {
    pub task_name: &'a str,
    pub interface_name: Option<&'a str>,
    pub error: &'a RenderError,
}

impl Display for BlockRenderFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self.interface_name {
            Some(name) => write!(
                f,
                "Task '{}': failed to render block for interface '{}': {}",
                self.task_name, name, self.error
            ),
            None => write!(
                f,
                "Task '{}': failed to render driver block: {}",
                self.task_name, self.error
            ),
        }
    }
}

impl StructuredLog for BlockRenderFailed<'_> {
    fn log(&self) {
        tracing::error!(
            task_name = self.task_name,
            interface_name = self.interface_name.unwrap_or(""),
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "block_failed",
            span_name = name,
            task_name = self.task_name,
            interface_name = self.interface_name.unwrap_or(""),
        )
    }
}

/// Header rendering completed.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use drivergen::observability::messages::render::RenderCompleted;
///
/// let msg = RenderCompleted {
///     task_name: "sum_pairs",
///     block_count: 3,
///     bytes: 512,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct RenderCompleted<'a> {
    pub task_name: &'a str,
    pub block_count: usize,
    pub bytes: usize,
}

impl Display for RenderCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Rendered driver header for task '{}': {} blocks, {} bytes",
            self.task_name, self.block_count, self.bytes
        )
    }
}

impl StructuredLog for RenderCompleted<'_> {
    fn log(&self) {
        tracing::info!(
            task_name = self.task_name,
            block_count = self.block_count,
            bytes = self.bytes,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "render_completed",
            span_name = name,
            task_name = self.task_name,
            block_count = self.block_count,
        )
    }
}
