//! Compile → decompile → compile.

mod helpers;

use helpers::{data_process, edge, endpoint, named_edges};
use pipeline_graph::compile;
use pipeline_graph::decompile::{self, DecompileOptions};
use pipeline_graph::parse::types::*;

fn kinds_by_name(graph: &Graph) -> Vec<(String, NodeKind)> {
    let mut kinds: Vec<_> = graph
        .nodes
        .iter()
        .map(|n| (n.data.explicit_name().unwrap_or_default().to_string(), n.kind()))
        .collect();
    kinds.sort_by(|a, b| a.0.cmp(&b.0));
    kinds
}

fn assert_round_trips(original: &Graph) {
    let steps = compile::compile_graph(original).expect("Should compile");
    let rebuilt = decompile::decompile(&steps, &DecompileOptions::default());

    assert_eq!(kinds_by_name(&rebuilt), kinds_by_name(original));
    assert_eq!(named_edges(&rebuilt), named_edges(original));

    // The rebuilt graph is itself valid and compiles to the same steps.
    let recompiled = compile::compile_graph(&rebuilt).expect("Should recompile");
    assert_eq!(recompiled, steps);
}

#[test]
fn prep_train_round_trips() {
    let mut graph = helpers::prep_train_graph();
    // Drop the isolated node; it never survives compilation.
    graph.nodes.retain(|n| n.id != "n3");
    assert_round_trips(&graph);
}

#[test]
fn endpoint_round_trips() {
    let mut graph = helpers::endpoint_graph();
    graph.edges.dedup_by(|a, b| a.source == b.source && a.target == b.target);
    assert_round_trips(&graph);
}

#[test]
fn diamond_with_endpoint_round_trips() {
    let graph = Graph {
        nodes: vec![
            data_process("1", "load"),
            data_process("2", "left"),
            data_process("3", "right"),
            endpoint("4", "serve"),
        ],
        edges: vec![edge("1", "2"), edge("1", "3"), edge("2", "4"), edge("3", "4")],
    };
    assert_round_trips(&graph);
}
