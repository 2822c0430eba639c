//! petgraph-based directed graph wrapper for the editor graph.

use std::collections::{HashMap, HashSet};

use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};

use super::types::{Edge, Node};

/// The editor graph with its edge set cleaned up: self-edges and edges naming
/// unknown nodes are dropped, and repeated `(source, target)` pairs collapse
/// into one.
pub struct PipelineGraph<'a> {
    graph: DiGraph<String, ()>,
    nodes: &'a [Node],
    edges: Vec<(String, String)>,
}

impl<'a> PipelineGraph<'a> {
    pub fn build(nodes: &'a [Node], edges: &[Edge]) -> Self {
        let mut graph = DiGraph::new();
        let mut node_indices: HashMap<&str, NodeIndex> = HashMap::new();

        for node in nodes {
            node_indices
                .entry(node.id.as_str())
                .or_insert_with(|| graph.add_node(node.id.clone()));
        }

        let mut seen = HashSet::new();
        let mut kept = Vec::new();
        for edge in edges {
            if edge.source == edge.target {
                tracing::warn!(node = %edge.source, "dropping self-edge");
                continue;
            }
            let (Some(&s), Some(&t)) = (
                node_indices.get(edge.source.as_str()),
                node_indices.get(edge.target.as_str()),
            ) else {
                tracing::warn!(
                    source = %edge.source,
                    target = %edge.target,
                    "dropping edge to unknown node"
                );
                continue;
            };
            if !seen.insert((edge.source.as_str(), edge.target.as_str())) {
                continue;
            }
            graph.add_edge(s, t, ());
            kept.push((edge.source.clone(), edge.target.clone()));
        }

        PipelineGraph {
            graph,
            nodes,
            edges: kept,
        }
    }

    /// Surviving edges as `(source, target)` pairs, in input order.
    pub fn edges(&self) -> &[(String, String)] {
        &self.edges
    }

    /// Nodes touching at least one surviving edge, in input order.
    pub fn connected_nodes(&self) -> Vec<&'a Node> {
        let connected: HashSet<&str> = self
            .edges
            .iter()
            .flat_map(|(s, t)| [s.as_str(), t.as_str()])
            .collect();
        self.nodes
            .iter()
            .filter(|n| connected.contains(n.id.as_str()))
            .collect()
    }

    /// Sources of edges into `node_id`, in edge order.
    pub fn predecessors(&self, node_id: &str) -> Vec<&str> {
        self.edges
            .iter()
            .filter(|(_, t)| t == node_id)
            .map(|(s, _)| s.as_str())
            .collect()
    }

    /// A node id on a cycle, if the graph has one.
    pub fn find_cycle(&self) -> Option<&str> {
        toposort(&self.graph, None)
            .err()
            .map(|cycle| self.graph[cycle.node_id()].as_str())
    }
}
