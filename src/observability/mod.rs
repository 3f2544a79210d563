// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! This module provides centralized message types for all diagnostic and operational
//! logging throughout drivergen. Message types follow a struct-based pattern
//! with `Display` trait implementation to:
//!
//! * Eliminate magic strings scattered throughout the codebase
//! * Keep log wording in one place per subsystem
//! * Provide consistent, structured logging output
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::loader` - Task descriptor loading events
//! * `messages::validation` - Task model validation warnings and errors
//! * `messages::render` - Driver header rendering events
//!
//! # Usage
//!
//! ```rust
//! use drivergen::observability::messages::render::BlockRenderFailed;
//! use drivergen::errors::RenderError;
//!
//! let error = RenderError::Backend { backend: "cpp", reason: "test error".to_string() };
//! let msg = BlockRenderFailed {
//!     task_name: "sum_pairs",
//!     interface_name: Some("solution"),
//!     error: &error,
//! };
//!
//! tracing::error!("{}", msg);
//! ```

pub mod messages;
