// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements `Display` for the human-readable line and
//! [`StructuredLog`] to emit the same event with structured fields attached.
//!
//! # Organization
//!
//! * `loader` - Task descriptor loading events
//! * `validation` - Task model validation warnings and errors
//! * `render` - Driver header rendering events
//!
//! # Usage Pattern
//!
//! ```rust
//! use drivergen::observability::messages::StructuredLog;
//! use drivergen::observability::messages::render::RenderStarted;
//!
//! let msg = RenderStarted {
//!     task_name: "sum_pairs",
//!     interface_count: 2,
//!     backend: "cpp",
//! };
//!
//! msg.log();
//! ```

use tracing::Span;

pub mod loader;
pub mod render;
pub mod validation;

/// A log message that knows its own level and structured fields.
pub trait StructuredLog: std::fmt::Display {
    /// Emit this message as a tracing event.
    fn log(&self);

    /// Build a span carrying this message's fields.
    fn span(&self, name: &str) -> Span;
}
