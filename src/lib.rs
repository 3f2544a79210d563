// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod backends;   // protocol-header block renderers
pub mod config;     // task descriptor loading + validation
pub mod errors;     // error handling
pub mod model;      // task / interface / driver data model
pub mod observability;
pub mod render;     // driver header rendering
pub mod traits;     // unified abstractions
pub mod utils;

pub use render::{render_driver_header, HeaderRenderer};
