//! WASM entry points for browser use.
//!
//! Every function takes JSON text and returns a plain JS value; nothing here
//! throws across the boundary.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::decompile::DecompileOptions;
use crate::error::CompilerError;
use crate::parse::types::Graph;
use crate::validate::node_rules::ValidationError;

fn to_js<T: Serialize>(value: &T) -> JsValue {
    // Plain objects rather than `Map`s, so the host can treat the result as JSON.
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    value.serialize(&serializer).unwrap_or(JsValue::NULL)
}

/// Validate a single node JSON.
/// Returns `{ valid, errors: [{ path, message }] }`, or P001 errors when the
/// node cannot be parsed.
#[wasm_bindgen]
pub fn validate_node(node_json: &str) -> JsValue {
    match crate::parse::parse_node(node_json) {
        Ok(node) => to_js(&crate::validate::validate(&node)),
        Err(errors) => to_js(&NodeValidationDto {
            valid: false,
            errors: errors
                .into_iter()
                .map(|e| ValidationError {
                    path: String::new(),
                    message: e.message,
                })
                .collect(),
        }),
    }
}

/// Validate the connected part of a graph JSON.
/// Returns `{ errors, summary }`; `summary` is the text shown to the user.
#[wasm_bindgen]
pub fn validate_graph(json: &str) -> JsValue {
    to_js(&validate_graph_inner(json))
}

fn validate_graph_inner(json: &str) -> GraphValidationDto {
    let graph = match crate::parse::parse_graph(json) {
        Ok(g) => g,
        Err(errors) => {
            return GraphValidationDto {
                errors: errors.into_iter().map(ErrorDto::from).collect(),
                summary: String::new(),
            };
        }
    };

    let reports = crate::validate::validate_connected(&graph.nodes, &graph.edges);
    let errors = crate::validate::validate_graph(&graph.nodes, &graph.edges);
    GraphValidationDto {
        errors: errors.into_iter().map(ErrorDto::from).collect(),
        summary: crate::validate::summarize_reports(&reports),
    }
}

/// Parse → validate → compile.
/// Returns `{ status: "success", steps }` or `{ status: "errors", errors }`.
#[wasm_bindgen]
pub fn compile_graph(json: &str) -> JsValue {
    to_js(&compile_graph_inner(json))
}

fn compile_graph_inner(json: &str) -> CompileResult {
    let graph = match crate::parse::parse_graph(json) {
        Ok(g) => g,
        Err(errors) => return CompileResult::errors(errors),
    };
    match crate::compile::compile_graph(&graph) {
        Ok(steps) => CompileResult::Success { steps },
        Err(errors) => CompileResult::errors(errors),
    }
}

/// Compile and wrap into an exportable pipeline document.
/// Returns `{ status: "success", document }` or `{ status: "errors", errors }`.
#[wasm_bindgen]
pub fn export_pipeline(json: &str, pipeline_name: &str) -> JsValue {
    to_js(&export_pipeline_inner(json, pipeline_name))
}

fn export_pipeline_inner(json: &str, pipeline_name: &str) -> ExportResult {
    let graph = match crate::parse::parse_graph(json) {
        Ok(g) => g,
        Err(errors) => return ExportResult::errors(errors),
    };
    match crate::compile::export(&graph.nodes, &graph.edges, pipeline_name) {
        Ok(document) => ExportResult::Success { document },
        Err(errors) => ExportResult::errors(errors),
    }
}

/// Rebuild an editor graph from a pipeline document or step array.
/// `options_json` may be empty for the defaults. Never fails: bad input gives
/// an empty graph.
#[wasm_bindgen]
pub fn import_pipeline(json: &str, options_json: &str) -> JsValue {
    let graph: Graph = crate::decompile::import_pipeline(json, &parse_options(options_json));
    to_js(&graph)
}

/// Dependency-order a step list. Unreadable steps are dropped.
#[wasm_bindgen]
pub fn sort_steps(json: &str) -> JsValue {
    let steps = crate::parse::parse_steps(json);
    to_js(&crate::pipeline::topo::sort(&steps))
}

fn parse_options(options_json: &str) -> DecompileOptions {
    if options_json.trim().is_empty() {
        return DecompileOptions::default();
    }
    serde_json::from_str(options_json).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "ignoring unreadable decompile options");
        DecompileOptions::default()
    })
}

// ---------------------------------------------------------------------------
// DTOs for serialization to JS
// ---------------------------------------------------------------------------

#[derive(serde::Serialize, serde::Deserialize)]
struct ErrorDto {
    code: String,
    phase: String,
    message: String,
    node_id: Option<String>,
    path: Option<String>,
}

impl From<CompilerError> for ErrorDto {
    fn from(e: CompilerError) -> Self {
        ErrorDto {
            code: e.code,
            phase: e.phase.to_string(),
            message: e.message,
            node_id: e.node_id,
            path: e.path,
        }
    }
}

#[derive(serde::Serialize)]
struct NodeValidationDto {
    valid: bool,
    errors: Vec<ValidationError>,
}

#[derive(serde::Serialize)]
struct GraphValidationDto {
    errors: Vec<ErrorDto>,
    summary: String,
}

#[derive(serde::Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
enum CompileResult {
    Success { steps: Vec<crate::pipeline::types::Step> },
    Errors { errors: Vec<ErrorDto> },
}

impl CompileResult {
    fn errors(errors: Vec<CompilerError>) -> Self {
        CompileResult::Errors {
            errors: errors.into_iter().map(ErrorDto::from).collect(),
        }
    }
}

#[derive(serde::Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
enum ExportResult {
    Success {
        document: crate::pipeline::types::PipelineDocument,
    },
    Errors { errors: Vec<ErrorDto> },
}

impl ExportResult {
    fn errors(errors: Vec<CompilerError>) -> Self {
        ExportResult::Errors {
            errors: errors.into_iter().map(ErrorDto::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_options_use_defaults() {
        assert_eq!(parse_options(""), DecompileOptions::default());
        assert_eq!(parse_options("not json"), DecompileOptions::default());
    }

    #[test]
    fn options_read_camel_case() {
        let opts = parse_options(r#"{"labelStrategy":"byDisplayName","idPrefix":"n"}"#);
        assert_eq!(opts.label_strategy, crate::decompile::LabelStrategy::ByDisplayName);
        assert_eq!(opts.id_prefix, "n");
        assert_eq!(opts.layout, crate::decompile::LayoutConfig::default());
    }

    #[test]
    fn compile_errors_surface_parse_failures() {
        match compile_graph_inner("nope") {
            CompileResult::Errors { errors } => assert_eq!(errors[0].code, "P001"),
            CompileResult::Success { .. } => panic!("expected errors"),
        }
    }
}
