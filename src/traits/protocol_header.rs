use crate::errors::RenderError;
use crate::model::FunctionSignature;

/// Everything a backend needs to render one protocol-header block.
///
/// - `functions`: regular functions, in declaration order
/// - `callback_functions`: callback functions, in declaration order
/// - `driver`: true for interface blocks, false for the task-level driver block
/// - `interface_name`: the interface being rendered, `None` for the driver block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProtocolHeaderRequest<'a> {
    pub functions: &'a [FunctionSignature],
    pub callback_functions: &'a [FunctionSignature],
    pub driver: bool,
    pub interface_name: Option<&'a str>,
}

impl<'a> ProtocolHeaderRequest<'a> {
    /// Request with the driver flag unset and no interface name.
    pub fn new(
        functions: &'a [FunctionSignature],
        callback_functions: &'a [FunctionSignature],
    ) -> Self {
        Self {
            functions,
            callback_functions,
            driver: false,
            interface_name: None,
        }
    }

    pub fn driver(mut self, driver: bool) -> Self {
        self.driver = driver;
        self
    }

    pub fn interface_name(mut self, name: &'a str) -> Self {
        self.interface_name = Some(name);
        self
    }
}

pub trait ProtocolHeaderRenderer: Send + Sync {
    /// Render one block of function declarations.
    fn render_block(&self, request: &ProtocolHeaderRequest<'_>) -> Result<String, RenderError>;

    fn name(&self) -> &'static str;
}

impl<R: ProtocolHeaderRenderer + ?Sized> ProtocolHeaderRenderer for &R {
    fn render_block(&self, request: &ProtocolHeaderRequest<'_>) -> Result<String, RenderError> {
        (**self).render_block(request)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<R: ProtocolHeaderRenderer + ?Sized> ProtocolHeaderRenderer for Box<R> {
    fn render_block(&self, request: &ProtocolHeaderRequest<'_>) -> Result<String, RenderError> {
        (**self).render_block(request)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
