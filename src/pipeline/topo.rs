//! Dependency ordering of step lists.

use std::collections::HashMap;

use petgraph::algo::toposort;
use petgraph::graph::DiGraph;

use super::types::Step;

/// Order steps so each appears after every step named in its `DependsOn`.
///
/// Depth-first post-order over the input: ties keep input order, names that
/// resolve to no step are skipped, and an already-sorted list comes back
/// unchanged. Cycles are not rejected here; a cyclic list yields some order.
/// Use [`find_cycle`] to tell the two apart.
pub fn sort(steps: &[Step]) -> Vec<Step> {
    sort_order(steps)
        .into_iter()
        .map(|idx| steps[idx].clone())
        .collect()
}

/// Indices into `steps` in dependency order.
///
/// Visits are tracked per step, not per name, so the result is always a
/// permutation of the input: two steps sharing a name are both emitted.
pub fn sort_order(steps: &[Step]) -> Vec<usize> {
    let index = name_index(steps);
    let mut visited = vec![false; steps.len()];
    let mut order = Vec::with_capacity(steps.len());

    for root in 0..steps.len() {
        if visited[root] {
            continue;
        }
        visited[root] = true;

        // (step, position of the next dependency to visit)
        let mut stack = vec![(root, 0usize)];
        while let Some(top) = stack.last_mut() {
            let (idx, next) = *top;
            let deps = steps[idx].dependencies();
            if next < deps.len() {
                top.1 += 1;
                if let Some(&dep) = index.get(deps[next].as_str()) {
                    if !visited[dep] {
                        visited[dep] = true;
                        stack.push((dep, 0));
                    }
                }
            } else {
                order.push(idx);
                stack.pop();
            }
        }
    }

    order
}

/// Returns the name of a step that sits on a dependency cycle, if any.
pub fn find_cycle(steps: &[Step]) -> Option<String> {
    let index = name_index(steps);
    let mut graph = DiGraph::<usize, ()>::new();
    let nodes: Vec<_> = (0..steps.len()).map(|i| graph.add_node(i)).collect();

    for (idx, step) in steps.iter().enumerate() {
        for dep in step.dependencies() {
            if let Some(&dep_idx) = index.get(dep.as_str()) {
                graph.add_edge(nodes[dep_idx], nodes[idx], ());
            }
        }
    }

    match toposort(&graph, None) {
        Ok(_) => None,
        Err(cycle) => Some(steps[graph[cycle.node_id()]].name.clone()),
    }
}

/// Name → index of the first step carrying that name. A dependency on a
/// duplicated name orders only against that first step.
fn name_index(steps: &[Step]) -> HashMap<&str, usize> {
    let mut index = HashMap::with_capacity(steps.len());
    for (idx, step) in steps.iter().enumerate() {
        index.entry(step.name.as_str()).or_insert(idx);
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::types::StepType;

    fn step(name: &str, deps: &[&str]) -> Step {
        Step::new(name, StepType::Processing, serde_json::json!({})).with_depends_on(Some(
            deps.iter().map(|d| d.to_string()).collect(),
        ))
    }

    fn names(steps: &[Step]) -> Vec<&str> {
        steps.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn dependencies_come_first() {
        let steps = vec![step("c", &["b"]), step("b", &["a"]), step("a", &[])];
        assert_eq!(names(&sort(&steps)), vec!["a", "b", "c"]);
    }

    #[test]
    fn independent_steps_keep_input_order() {
        let steps = vec![step("x", &[]), step("y", &[]), step("z", &[])];
        assert_eq!(names(&sort(&steps)), vec!["x", "y", "z"]);
    }

    #[test]
    fn unknown_dependencies_are_skipped() {
        let steps = vec![step("b", &["ghost", "a"]), step("a", &[])];
        assert_eq!(names(&sort(&steps)), vec!["a", "b"]);
    }

    #[test]
    fn cycles_still_produce_every_step_once() {
        let steps = vec![step("a", &["b"]), step("b", &["a"])];
        let sorted = sort(&steps);
        assert_eq!(sorted.len(), 2);
        assert_eq!(names(&sorted), vec!["b", "a"]);
        assert!(find_cycle(&steps).is_some());
    }

    #[test]
    fn self_dependency_is_a_cycle() {
        let steps = vec![step("a", &["a"])];
        assert_eq!(find_cycle(&steps).as_deref(), Some("a"));
        assert_eq!(names(&sort(&steps)), vec!["a"]);
    }

    #[test]
    fn acyclic_lists_have_no_cycle() {
        let steps = vec![step("b", &["a"]), step("a", &[])];
        assert_eq!(find_cycle(&steps), None);
    }

    #[test]
    fn shared_names_keep_every_step() {
        let steps = vec![step("a", &[]), step("b", &["a"]), step("a", &["b"])];
        let order = sort_order(&steps);
        let mut seen = order.clone();
        seen.sort();
        assert_eq!(seen, vec![0, 1, 2]);
        // "b" orders against the first "a" only.
        assert_eq!(order, vec![0, 1, 2]);
    }

    #[test]
    fn deep_chains_do_not_recurse() {
        let n = 10_000;
        let steps: Vec<Step> = (0..n)
            .rev()
            .map(|i| {
                let name = format!("s{i}");
                let deps = if i == 0 { vec![] } else { vec![format!("s{}", i - 1)] };
                Step::new(name, StepType::Processing, serde_json::json!({}))
                    .with_depends_on(Some(deps))
            })
            .collect();
        let sorted = sort(&steps);
        assert_eq!(sorted.first().map(|s| s.name.as_str()), Some("s0"));
        assert_eq!(sorted.last().map(|s| s.name.as_str()), Some("s9999"));
    }
}
