//! Canonical step names and `DependsOn` resolution.

use std::collections::HashMap;

use crate::parse::graph::PipelineGraph;
use crate::parse::types::{Node, NodeKind};
use crate::pipeline::reference::endpoint_config_name;

/// `Name`, then `name`, then `<kind>-<id>`.
pub fn step_name(node: &Node) -> String {
    match node.data.explicit_name() {
        Some(name) => name.to_string(),
        None => format!("{}-{}", node.kind(), node.id),
    }
}

/// Every step name a node compiles to. Endpoints emit their config step too.
pub fn emitted_step_names(node: &Node) -> Vec<String> {
    let base = step_name(node);
    match node.kind() {
        NodeKind::DeployModelEndpoint => vec![endpoint_config_name(&base), base],
        _ => vec![base],
    }
}

/// Node id → canonical step name. The first node with a given id wins.
pub fn build_name_map<'a>(nodes: &[&'a Node]) -> HashMap<&'a str, String> {
    let mut names = HashMap::with_capacity(nodes.len());
    for node in nodes {
        names
            .entry(node.id.as_str())
            .or_insert_with(|| step_name(node));
    }
    names
}

/// Names of the nodes with an edge into `node_id`, in edge order.
/// `None` when there are none, so the field is omitted.
pub fn depends_on(
    node_id: &str,
    graph: &PipelineGraph,
    names: &HashMap<&str, String>,
) -> Option<Vec<String>> {
    let mut deps: Vec<String> = Vec::new();
    for pred in graph.predecessors(node_id) {
        if let Some(name) = names.get(pred) {
            if !deps.contains(name) {
                deps.push(name.clone());
            }
        }
    }
    (!deps.is_empty()).then_some(deps)
}
