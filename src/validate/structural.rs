//! Graph-level structural rules checked before compilation (V001–V002).

use std::collections::HashMap;

use crate::compile::naming;
use crate::error::CompilerError;
use crate::parse::graph::PipelineGraph;
use crate::parse::types::Node;

/// Run all structural rules over the connected part of the graph.
pub fn validate_structural(graph: &PipelineGraph, connected: &[&Node]) -> Vec<CompilerError> {
    let mut errors = Vec::new();

    v001_no_cycles(graph, &mut errors);
    v002_unique_step_names(connected, &mut errors);

    errors
}

fn v001_no_cycles(graph: &PipelineGraph, errors: &mut Vec<CompilerError>) {
    if let Some(node_id) = graph.find_cycle() {
        errors.push(CompilerError::validate(
            "V001",
            format!("Pipeline graph contains a cycle through node '{}'", node_id),
            Some(node_id.to_string()),
        ));
    }
}

/// Fallback names (`<kind>-<id>`) and generated endpoint config names can
/// collide with explicit ones; every emitted step name must be unique.
fn v002_unique_step_names(connected: &[&Node], errors: &mut Vec<CompilerError>) {
    let mut owners: HashMap<String, &str> = HashMap::new();
    for node in connected {
        for name in naming::emitted_step_names(node) {
            match owners.get(name.as_str()) {
                Some(owner) => errors.push(CompilerError::validate(
                    "V002",
                    format!(
                        "Step name '{}' is produced by both node '{}' and node '{}'",
                        name, owner, node.id
                    ),
                    Some(node.id.clone()),
                )),
                None => {
                    owners.insert(name, &node.id);
                }
            }
        }
    }
}
