//! Validation phase: per-node field rules and graph-level structure.
//!
//! Only nodes that take part in at least one edge are checked before
//! compilation; isolated nodes never reach the compiled output.

pub mod messages;
pub mod node_rules;
pub mod structural;
pub mod summary;

pub use node_rules::{ValidationError, ValidationResult};
pub use summary::{NodeReport, summarize_errors, summarize_reports};

use crate::error::CompilerError;
use crate::parse::graph::PipelineGraph;
use crate::parse::types::{Edge, Node, NodeKind};

/// Validate a single node's fields.
pub fn validate(node: &Node) -> ValidationResult {
    node_rules::validate_node_data(&node.data)
}

/// Error code used for field errors of each node kind.
pub fn field_error_code(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::DataProcess => "N001",
        NodeKind::TrainModel => "N002",
        NodeKind::CreateModel => "N003",
        NodeKind::DeployModelBatchInference => "N004",
        NodeKind::DeployModelEndpoint => "N005",
    }
}

/// Reports for the connected nodes that fail validation.
pub fn validate_connected(nodes: &[Node], edges: &[Edge]) -> Vec<NodeReport> {
    let graph = PipelineGraph::build(nodes, edges);
    failing_reports(&graph.connected_nodes())
}

/// Every field and structural error that would block compilation.
pub fn validate_graph(nodes: &[Node], edges: &[Edge]) -> Vec<CompilerError> {
    let graph = PipelineGraph::build(nodes, edges);
    validate_compilable(&graph, &graph.connected_nodes())
}

pub(crate) fn validate_compilable(graph: &PipelineGraph, connected: &[&Node]) -> Vec<CompilerError> {
    let mut errors = Vec::new();

    for node in connected {
        let code = field_error_code(node.kind());
        errors.extend(
            validate(node)
                .errors
                .into_iter()
                .map(|e| CompilerError::from_field(code, &node.id, e)),
        );
    }

    errors.extend(structural::validate_structural(graph, connected));
    errors
}

fn failing_reports(connected: &[&Node]) -> Vec<NodeReport> {
    connected
        .iter()
        .filter_map(|node| {
            let result = validate(node);
            (!result.valid).then(|| NodeReport {
                node_id: node.id.clone(),
                label: node.label().to_string(),
                result,
            })
        })
        .collect()
}
