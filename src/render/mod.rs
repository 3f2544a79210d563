// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Driver header rendering.
//!
//! A driver header is the support include followed by one protocol-header
//! block per interface and a final block for the task-level driver:
//!
//! ```text
//! #include "support_proto.h"
//!
//! <block: interface[0].functions, interface[0].callbacks, driver, interface[0].name>
//!
//! <block: interface[1]...>
//!
//! <block: [], driver.functions>
//! ```
//!
//! The renderer only decides which blocks appear and in what order; the
//! content of each block comes from the injected
//! [`ProtocolHeaderRenderer`].

use crate::backends::cpp::CppProtocolHeader;
use crate::config::consts::SUPPORT_INCLUDE;
use crate::errors::RenderError;
use crate::model::Task;
use crate::observability::messages::render::{
    BlockRenderFailed, BlockRendered, RenderCompleted, RenderStarted,
};
use crate::observability::messages::StructuredLog;
use crate::traits::{ProtocolHeaderRenderer, ProtocolHeaderRequest};

/// Renders a [`Task`] into a driver header using a block renderer `R`.
///
/// Stateless: rendering the same task twice yields identical text.
#[derive(Debug, Clone, Default)]
pub struct HeaderRenderer<R> {
    blocks: R,
}

impl<R: ProtocolHeaderRenderer> HeaderRenderer<R> {
    pub fn new(blocks: R) -> Self {
        Self { blocks }
    }

    pub fn block_renderer(&self) -> &R {
        &self.blocks
    }

    /// Render the full driver header for `task`.
    ///
    /// Interfaces are visited in declaration order. The first block error is
    /// returned as-is and no partial header is produced.
    pub fn render(&self, task: &Task) -> Result<String, RenderError> {
        let started = RenderStarted {
            task_name: &task.name,
            interface_count: task.interfaces.len(),
            backend: self.blocks.name(),
        };
        let span = started.span("render_driver_header");
        let _guard = span.enter();
        started.log();

        let mut out = format!("#include \"{}\"\n\n", SUPPORT_INCLUDE);

        for interface in &task.interfaces {
            let request = ProtocolHeaderRequest::new(
                &interface.functions,
                &interface.callback_functions,
            )
            .driver(true)
            .interface_name(&interface.name);

            out.push_str(&self.render_block(task, &request)?);
            out.push('\n');
        }

        let request = ProtocolHeaderRequest::new(&[], &task.driver.functions);
        out.push_str(&self.render_block(task, &request)?);

        RenderCompleted {
            task_name: &task.name,
            block_count: task.interfaces.len() + 1,
            bytes: out.len(),
        }
        .log();

        Ok(out)
    }

    fn render_block(
        &self,
        task: &Task,
        request: &ProtocolHeaderRequest<'_>,
    ) -> Result<String, RenderError> {
        match self.blocks.render_block(request) {
            Ok(block) => {
                BlockRendered {
                    interface_name: request.interface_name,
                    driver: request.driver,
                    function_count: request.functions.len(),
                    callback_count: request.callback_functions.len(),
                    bytes: block.len(),
                }
                .log();
                Ok(block)
            }
            Err(error) => {
                BlockRenderFailed {
                    task_name: &task.name,
                    interface_name: request.interface_name,
                    error: &error,
                }
                .log();
                Err(error)
            }
        }
    }
}

/// Render `task` with the C++ backend.
pub fn render_driver_header(task: &Task) -> Result<String, RenderError> {
    HeaderRenderer::new(CppProtocolHeader::new()).render(task)
}
