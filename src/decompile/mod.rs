//! Decompile phase: step list → editor graph.
//!
//! Best effort throughout. Dangling references, orphaned endpoint configs and
//! cyclic input degrade the result instead of failing it.

pub mod fold;
pub mod layout;

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use layout::LayoutConfig;

use crate::parse;
use crate::parse::types::{Edge, Graph, Node};
use crate::pipeline::topo;
use crate::pipeline::types::{Step, StepType};

/// How node labels are chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LabelStrategy {
    /// Fixed per-kind palette label. Used for file import.
    #[default]
    ByKind,
    /// The step's display name, then its name, then its type. Used for
    /// pipelines fetched from the service.
    ByDisplayName,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DecompileOptions {
    pub label_strategy: LabelStrategy,
    pub layout: LayoutConfig,
    pub id_prefix: String,
}

impl Default for DecompileOptions {
    fn default() -> Self {
        DecompileOptions {
            label_strategy: LabelStrategy::default(),
            layout: LayoutConfig::default(),
            id_prefix: "node".to_string(),
        }
    }
}

impl DecompileOptions {
    pub fn with_label_strategy(mut self, label_strategy: LabelStrategy) -> Self {
        self.label_strategy = label_strategy;
        self
    }
}

/// Rebuild an editor graph from a step list.
pub fn decompile(steps: &[Step], options: &DecompileOptions) -> Graph {
    tracing::debug!(steps = steps.len(), "decompiling step list");
    if let Some(name) = topo::find_cycle(steps) {
        tracing::warn!(step = %name, "step list has a dependency cycle");
    }

    let sorted = topo::sort(steps);
    let mut rank: HashMap<&str, usize> = HashMap::with_capacity(sorted.len());
    for (idx, step) in sorted.iter().enumerate() {
        rank.entry(step.name.as_str()).or_insert(idx);
    }

    let mut configs: HashMap<&str, &Step> = HashMap::new();
    for step in sorted.iter().filter(|s| s.step_type == StepType::EndpointConfig) {
        configs.entry(step.name.as_str()).or_insert(step);
    }

    let strategy = options.label_strategy;
    let mut builds = Vec::with_capacity(sorted.len());
    let mut paired: HashSet<&str> = HashSet::new();
    for step in sorted.iter().filter(|s| s.step_type == StepType::Endpoint) {
        let (build, config) = fold::fold_endpoint(step, &configs, strategy);
        paired.extend(config);
        builds.push(build);
    }
    builds.extend(sorted.iter().filter_map(|s| fold::lift_step(s, strategy)));

    for name in configs.keys().filter(|name| !paired.contains(*name)) {
        tracing::debug!(config = %name, "endpoint config not referenced by any endpoint");
    }

    let builds = layout::order_by_rank(builds, |build| {
        build
            .step_names
            .iter()
            .filter_map(|name| rank.get(name.as_str()).copied())
            .min()
            .unwrap_or(usize::MAX)
    });

    let mut owner: HashMap<String, String> = HashMap::new();
    let mut nodes = Vec::with_capacity(builds.len());
    for (idx, build) in builds.into_iter().enumerate() {
        let id = format!("{}-{}", options.id_prefix, idx);
        for name in build.step_names {
            owner.insert(name, id.clone());
        }
        let mut node = Node::new(id, build.data);
        node.position = options.layout.position(idx);
        nodes.push(node);
    }

    let edges = rebuild_edges(steps, &owner);
    tracing::debug!(nodes = nodes.len(), edges = edges.len(), "decompiled step list");
    Graph { nodes, edges }
}

/// Edges from `DependsOn`: dependency owner → dependent owner. Self-edges and
/// repeats are skipped; dangling names produce no edge.
fn rebuild_edges(steps: &[Step], owner: &HashMap<String, String>) -> Vec<Edge> {
    let mut seen = HashSet::new();
    let mut edges = Vec::new();

    for step in steps {
        let Some(target) = owner.get(&step.name) else {
            continue;
        };
        for dep in step.dependencies() {
            let Some(source) = owner.get(dep) else {
                tracing::warn!(step = %step.name, dependency = %dep, "dangling dependency");
                continue;
            };
            if source == target || !seen.insert((source.as_str(), target.as_str())) {
                continue;
            }
            edges.push(Edge::new(source.as_str(), target.as_str()));
        }
    }

    edges
}

/// Decompile an already-parsed pipeline document or step array.
pub fn decompile_value(value: &Value, options: &DecompileOptions) -> Graph {
    decompile(&parse::steps_from_value(value), options)
}

/// Decompile imported JSON text. Unparseable text yields an empty graph.
pub fn import_pipeline(json: &str, options: &DecompileOptions) -> Graph {
    decompile(&parse::parse_steps(json), options)
}
