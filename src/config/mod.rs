// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod loader;
mod validation;

#[cfg(test)]
mod integration_tests;
pub mod consts;

pub use loader::{load_and_validate_task, load_task, parse_task, TaskFormat};
pub use validation::{collect_warnings, shared_task_names, validate_task};
