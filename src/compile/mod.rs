//! Compile phase: editor graph → ordered step list.
//!
//! Only nodes touching at least one edge are compiled. Every such node must
//! pass validation and the connected graph must be acyclic with unique step
//! names; otherwise nothing is emitted and all errors are returned.

pub mod builder;
pub mod expand;
pub mod naming;

use crate::error::CompilerError;
use crate::parse::graph::PipelineGraph;
use crate::parse::types::{Edge, Graph, Node};
use crate::pipeline::topo;
use crate::pipeline::types::{PipelineDocument, Step};
use crate::validate;

/// Compile nodes and edges into dependency-ordered steps.
pub fn compile(nodes: &[Node], edges: &[Edge]) -> Result<Vec<Step>, Vec<CompilerError>> {
    let graph = PipelineGraph::build(nodes, edges);
    let connected = graph.connected_nodes();
    tracing::debug!(
        nodes = nodes.len(),
        edges = graph.edges().len(),
        connected = connected.len(),
        "compiling pipeline graph"
    );

    let errors = validate::validate_compilable(&graph, &connected);
    if !errors.is_empty() {
        tracing::debug!(errors = errors.len(), "compilation blocked");
        return Err(errors);
    }

    let names = naming::build_name_map(&connected);
    let mut steps = Vec::new();
    for node in &connected {
        let name = naming::step_name(node);
        let depends_on = naming::depends_on(&node.id, &graph, &names);
        steps.extend(builder::build_steps(node, &name, depends_on));
    }

    let steps = topo::sort(&steps);
    tracing::debug!(steps = steps.len(), "compiled pipeline");
    Ok(steps)
}

pub fn compile_graph(graph: &Graph) -> Result<Vec<Step>, Vec<CompilerError>> {
    compile(&graph.nodes, &graph.edges)
}

/// Compile and wrap the steps in a pipeline document ready for export.
pub fn export(
    nodes: &[Node],
    edges: &[Edge],
    pipeline_name: &str,
) -> Result<PipelineDocument, Vec<CompilerError>> {
    let steps = compile(nodes, edges)?;
    Ok(PipelineDocument::new(pipeline_name, steps))
}
