//! Parse phase: editor graph JSON and imported step lists → Rust types.

pub mod graph;
pub mod types;

pub use graph::PipelineGraph;
pub use types::*;

use serde_json::Value;

use crate::error::CompilerError;
use crate::pipeline::types::Step;

/// Deserialize an editor graph (`{"nodes": [...], "edges": [...]}`).
pub fn parse_graph(json: &str) -> Result<Graph, Vec<CompilerError>> {
    serde_json::from_str::<Graph>(json).map_err(|e| {
        vec![CompilerError::parse(
            "P001",
            format!("Failed to parse graph JSON: {}", e),
        )]
    })
}

/// Deserialize a single editor node.
pub fn parse_node(json: &str) -> Result<Node, Vec<CompilerError>> {
    serde_json::from_str::<Node>(json).map_err(|e| {
        vec![CompilerError::parse(
            "P001",
            format!("Failed to parse node JSON: {}", e),
        )]
    })
}

/// Read the steps out of imported JSON text. Never fails: unparseable text
/// or a missing `Steps` array yields an empty list.
pub fn parse_steps(json: &str) -> Vec<Step> {
    match serde_json::from_str::<Value>(json) {
        Ok(value) => steps_from_value(&value),
        Err(e) => {
            tracing::warn!(error = %e, "failed to parse pipeline JSON");
            Vec::new()
        }
    }
}

/// Accepts a pipeline document (`{"Steps": [...]}`) or a bare step array.
/// Elements with an unknown `Type` or no `Name` are dropped.
pub fn steps_from_value(value: &Value) -> Vec<Step> {
    let items = match value {
        Value::Array(items) => items,
        Value::Object(map) => match map.get("Steps") {
            Some(Value::Array(items)) => items,
            _ => return Vec::new(),
        },
        _ => return Vec::new(),
    };
    items.iter().filter_map(Step::from_value).collect()
}
