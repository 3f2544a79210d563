// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! C++ protocol-header blocks.
//!
//! A block for interface `solution` on the driver side looks like:
//!
//! ```text
//! // protocol: interface solution (driver)
//! namespace solution {
//!     // functions
//!     extern int sum(int n, int *values);
//!     // callbacks
//!     void report(int64_t total);
//! } // namespace solution
//! ```
//!
//! The unnamed driver block has no namespace and no indentation.

use crate::errors::RenderError;
use crate::model::{FunctionSignature, Parameter, ScalarType, ValueType};
use crate::traits::{ProtocolHeaderRenderer, ProtocolHeaderRequest};
use crate::utils::identifiers::is_cpp_identifier;

const INDENT: &str = "    ";

/// Renders protocol-header blocks as C++ declarations.
#[derive(Debug, Clone, Copy, Default)]
pub struct CppProtocolHeader;

impl CppProtocolHeader {
    pub fn new() -> Self {
        Self
    }
}

impl ProtocolHeaderRenderer for CppProtocolHeader {
    fn render_block(&self, request: &ProtocolHeaderRequest<'_>) -> Result<String, RenderError> {
        let mut out = String::new();
        let indent = if request.interface_name.is_some() { INDENT } else { "" };

        match (request.interface_name, request.driver) {
            (Some(name), driver) => {
                ensure_identifier("interface", name)?;
                let side = if driver { " (driver)" } else { "" };
                push_line(&mut out, &format!("// protocol: interface {}{}", name, side));
                push_line(&mut out, &format!("namespace {} {{", name));
            }
            (None, true) => push_line(&mut out, "// protocol: driver (driver)"),
            (None, false) => push_line(&mut out, "// protocol: driver"),
        }

        if !request.functions.is_empty() {
            push_line(&mut out, &format!("{}// functions", indent));
            let linkage = if request.driver { "extern " } else { "" };
            for function in request.functions {
                let declaration = declaration(function)?;
                push_line(&mut out, &format!("{}{}{};", indent, linkage, declaration));
            }
        }

        if !request.callback_functions.is_empty() {
            push_line(&mut out, &format!("{}// callbacks", indent));
            for callback in request.callback_functions {
                let declaration = declaration(callback)?;
                push_line(&mut out, &format!("{}{};", indent, declaration));
            }
        }

        if let Some(name) = request.interface_name {
            push_line(&mut out, &format!("}} // namespace {}", name));
        }

        Ok(out)
    }

    fn name(&self) -> &'static str {
        "cpp"
    }
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

fn ensure_identifier(context: &str, name: &str) -> Result<(), RenderError> {
    if is_cpp_identifier(name) {
        Ok(())
    } else {
        Err(RenderError::InvalidIdentifier {
            context: context.to_string(),
            name: name.to_string(),
        })
    }
}

/// `<ret> <name>(<params>)` without the trailing semicolon.
fn declaration(function: &FunctionSignature) -> Result<String, RenderError> {
    ensure_identifier("function", &function.name)?;

    let mut params = String::new();
    for (i, parameter) in function.parameters.iter().enumerate() {
        if i > 0 {
            params.push_str(", ");
        }
        write_parameter(&mut params, parameter)?;
    }

    let return_type = function.returns.map(cpp_scalar).unwrap_or("void");
    Ok(format!("{} {}({})", return_type, function.name, params))
}

fn write_parameter(out: &mut String, parameter: &Parameter) -> Result<(), RenderError> {
    ensure_identifier("parameter", &parameter.name)?;
    let ValueType { scalar, dimensions } = parameter.ty;
    let stars = "*".repeat(usize::from(dimensions));
    out.push_str(&format!("{} {}{}", cpp_scalar(scalar), stars, parameter.name));
    Ok(())
}

fn cpp_scalar(scalar: ScalarType) -> &'static str {
    match scalar {
        ScalarType::Int => "int",
        ScalarType::Int64 => "int64_t",
        ScalarType::Bool => "bool",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int() -> ValueType {
        ValueType::scalar(ScalarType::Int)
    }

    #[test]
    fn test_interface_block_on_driver_side() {
        let functions = vec![FunctionSignature::new("sum")
            .param("n", int())
            .param("values", ValueType::array(ScalarType::Int, 1))
            .returning(ScalarType::Int)];
        let callbacks = vec![FunctionSignature::new("report")
            .param("total", ValueType::scalar(ScalarType::Int64))];

        let request = ProtocolHeaderRequest::new(&functions, &callbacks)
            .driver(true)
            .interface_name("solution");
        let block = CppProtocolHeader::new().render_block(&request).unwrap();

        let expected = "\
// protocol: interface solution (driver)
namespace solution {
    // functions
    extern int sum(int n, int *values);
    // callbacks
    void report(int64_t total);
} // namespace solution
";
        assert_eq!(block, expected);
    }

    #[test]
    fn test_unnamed_driver_block() {
        let callbacks = vec![
            FunctionSignature::new("evaluate"),
            FunctionSignature::new("grid_ok")
                .param("grid", ValueType::array(ScalarType::Bool, 2))
                .returning(ScalarType::Bool),
        ];

        let request = ProtocolHeaderRequest::new(&[], &callbacks);
        let block = CppProtocolHeader::new().render_block(&request).unwrap();

        let expected = "\
// protocol: driver
// callbacks
void evaluate();
bool grid_ok(bool **grid);
";
        assert_eq!(block, expected);
    }

    #[test]
    fn test_empty_blocks() {
        let renderer = CppProtocolHeader::new();

        let unnamed = renderer
            .render_block(&ProtocolHeaderRequest::new(&[], &[]))
            .unwrap();
        assert_eq!(unnamed, "// protocol: driver\n");

        let named = renderer
            .render_block(&ProtocolHeaderRequest::new(&[], &[]).driver(true).interface_name("idle"))
            .unwrap();
        assert_eq!(
            named,
            "// protocol: interface idle (driver)\nnamespace idle {\n} // namespace idle\n"
        );
    }

    #[test]
    fn test_non_driver_functions_have_no_extern() {
        let functions = vec![FunctionSignature::new("f")];
        let block = CppProtocolHeader::new()
            .render_block(&ProtocolHeaderRequest::new(&functions, &[]))
            .unwrap();
        assert_eq!(block, "// protocol: driver\n// functions\nvoid f();\n");
    }

    #[test]
    fn test_keyword_names_are_rejected() {
        let renderer = CppProtocolHeader::new();

        let functions = vec![FunctionSignature::new("delete")];
        let result = renderer.render_block(&ProtocolHeaderRequest::new(&functions, &[]));
        assert_eq!(
            result,
            Err(RenderError::InvalidIdentifier {
                context: "function".to_string(),
                name: "delete".to_string(),
            })
        );

        let result = renderer.render_block(
            &ProtocolHeaderRequest::new(&[], &[]).driver(true).interface_name("class"),
        );
        assert!(matches!(result, Err(RenderError::InvalidIdentifier { .. })));

        let callbacks = vec![FunctionSignature::new("cb").param("new", int())];
        let result = renderer.render_block(&ProtocolHeaderRequest::new(&[], &callbacks));
        assert_eq!(
            result,
            Err(RenderError::InvalidIdentifier {
                context: "parameter".to_string(),
                name: "new".to_string(),
            })
        );
    }
}
