// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Mutex;

use crate::errors::RenderError;
use crate::model::FunctionSignature;
use crate::traits::{ProtocolHeaderRenderer, ProtocolHeaderRequest};

/// Owned copy of one block request, as seen by [`RecordingProtocolHeader`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedBlock {
    pub functions: Vec<FunctionSignature>,
    pub callback_functions: Vec<FunctionSignature>,
    pub driver: bool,
    pub interface_name: Option<String>,
}

impl RecordedBlock {
    /// Function names only, for terse assertions.
    pub fn function_names(&self) -> Vec<&str> {
        self.functions.iter().map(|f| f.name.as_str()).collect()
    }

    pub fn callback_names(&self) -> Vec<&str> {
        self.callback_functions.iter().map(|f| f.name.as_str()).collect()
    }
}

/// A block renderer that records every request and emits a one-line marker.
///
/// The marker has the form
/// `<block driver=true name=A functions=[x] callbacks=[]>` so rendered
/// headers can be compared as text as well.
#[derive(Debug, Default)]
pub struct RecordingProtocolHeader {
    blocks: Mutex<Vec<RecordedBlock>>,
    fail_on: Option<String>,
}

impl RecordingProtocolHeader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail with [`RenderError::Backend`] when asked to render this interface.
    pub fn failing_on(interface_name: impl Into<String>) -> Self {
        Self {
            blocks: Mutex::new(Vec::new()),
            fail_on: Some(interface_name.into()),
        }
    }

    pub fn blocks(&self) -> Vec<RecordedBlock> {
        match self.blocks.lock() {
            Ok(blocks) => blocks.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn marker(request: &ProtocolHeaderRequest<'_>) -> String {
        format!(
            "<block driver={} name={} functions=[{}] callbacks=[{}]>\n",
            request.driver,
            request.interface_name.unwrap_or("-"),
            join_names(request.functions),
            join_names(request.callback_functions),
        )
    }
}

fn join_names(functions: &[FunctionSignature]) -> String {
    functions
        .iter()
        .map(|f| f.name.as_str())
        .collect::<Vec<_>>()
        .join(",")
}

impl ProtocolHeaderRenderer for RecordingProtocolHeader {
    fn render_block(&self, request: &ProtocolHeaderRequest<'_>) -> Result<String, RenderError> {
        if self.fail_on.is_some() && self.fail_on.as_deref() == request.interface_name {
            return Err(RenderError::Backend {
                backend: self.name(),
                reason: format!("refusing to render '{}'", request.interface_name.unwrap_or("-")),
            });
        }

        let record = RecordedBlock {
            functions: request.functions.to_vec(),
            callback_functions: request.callback_functions.to_vec(),
            driver: request.driver,
            interface_name: request.interface_name.map(str::to_string),
        };
        match self.blocks.lock() {
            Ok(mut blocks) => blocks.push(record),
            Err(poisoned) => poisoned.into_inner().push(record),
        }

        Ok(Self::marker(request))
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}
