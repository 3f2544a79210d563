// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Protocol-header block renderers.
//!
//! Each backend implements [`ProtocolHeaderRenderer`](crate::traits::ProtocolHeaderRenderer)
//! and is handed to a [`HeaderRenderer`](crate::render::HeaderRenderer), which
//! decides *which* blocks to render while the backend decides *how* a block
//! looks.
//!
//! # Available Backends
//!
//! ## C++ Backend
//! - **CppProtocolHeader**: function and callback declarations, wrapped in a
//!   namespace per interface, with `extern` linkage on the driver side
//! - **Use Case**: the driver headers shipped with a task
//!
//! ## Recording Backend
//! - **RecordingProtocolHeader**: records each block request and emits a
//!   one-line marker
//! - **Use Case**: testing block ordering and arguments independently of the
//!   C++ formatting
//!
//! # Examples
//!
//! ```rust
//! use drivergen::backends::cpp::CppProtocolHeader;
//! use drivergen::model::FunctionSignature;
//! use drivergen::traits::{ProtocolHeaderRenderer, ProtocolHeaderRequest};
//!
//! let callbacks = vec![FunctionSignature::new("evaluate")];
//! let block = CppProtocolHeader::new()
//!     .render_block(&ProtocolHeaderRequest::new(&[], &callbacks))?;
//! assert!(block.contains("void evaluate();"));
//! # Ok::<(), drivergen::errors::RenderError>(())
//! ```

pub mod cpp;
pub mod stub;
