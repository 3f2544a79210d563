// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised while rendering protocol-header blocks.

use thiserror::Error;

/// Errors produced by a protocol-header block renderer.
///
/// The header renderer never wraps these; whatever a backend returns is what
/// the caller sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// A name cannot be emitted as a C++ identifier
    #[error("{context} name '{name}' is not a valid C++ identifier")]
    InvalidIdentifier { context: String, name: String },

    /// Any other backend-specific failure
    #[error("{backend} backend failed: {reason}")]
    Backend {
        backend: &'static str,
        reason: String,
    },
}
