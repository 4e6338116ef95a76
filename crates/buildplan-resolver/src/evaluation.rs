//! Project evaluation ordering.
//!
//! Every project's evaluation depends on the primary project, plus any
//! projects it lists in `evaluation-depends-on`. The order is a topological
//! sort of that graph with ties broken by project name.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap};

use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;

use buildplan_core::settings::ProjectSettings;
use buildplan_util::errors::BuildError;

/// Evaluation dependency graph. An edge `a -> b` means `a` is evaluated
/// before `b`.
pub struct EvaluationGraph {
    graph: DiGraph<String, ()>,
    index: HashMap<String, NodeIndex>,
}

impl EvaluationGraph {
    /// Build the graph from declared projects and the optional primary.
    ///
    /// Fails when the primary or an `evaluation-depends-on` entry names an
    /// undeclared project, or a project lists itself.
    pub fn build(
        projects: &BTreeMap<String, ProjectSettings>,
        primary: Option<&str>,
    ) -> Result<Self, BuildError> {
        let mut graph = DiGraph::new();
        let mut index = HashMap::new();
        for name in projects.keys() {
            index.insert(name.clone(), graph.add_node(name.clone()));
        }

        if let Some(primary) = primary {
            let Some(&p) = index.get(primary) else {
                return Err(BuildError::DependencyOrder {
                    message: format!("primary project '{primary}' is not declared"),
                });
            };
            for (name, &idx) in &index {
                if name != primary {
                    graph.update_edge(p, idx, ());
                }
            }
        }

        for (name, settings) in projects {
            let to = index[name];
            for dep in &settings.evaluation_depends_on {
                if dep == name {
                    return Err(BuildError::DependencyOrder {
                        message: format!("project '{name}' cannot depend on its own evaluation"),
                    });
                }
                let Some(&from) = index.get(dep) else {
                    return Err(BuildError::DependencyOrder {
                        message: format!(
                            "project '{name}' depends on the evaluation of undeclared project '{dep}'"
                        ),
                    });
                };
                graph.update_edge(from, to, ());
            }
        }

        Ok(Self { graph, index })
    }

    /// Topological evaluation order, smallest name first among ready projects.
    pub fn order(&self) -> Result<Vec<String>, BuildError> {
        let mut in_degree: HashMap<NodeIndex, usize> = self
            .graph
            .node_indices()
            .map(|n| {
                (
                    n,
                    self.graph.neighbors_directed(n, Direction::Incoming).count(),
                )
            })
            .collect();

        let mut ready: BinaryHeap<Reverse<(&str, NodeIndex)>> = in_degree
            .iter()
            .filter(|(_, &d)| d == 0)
            .map(|(&n, _)| Reverse((self.graph[n].as_str(), n)))
            .collect();

        let mut order = Vec::with_capacity(self.graph.node_count());
        while let Some(Reverse((name, n))) = ready.pop() {
            order.push(name.to_string());
            for next in self.graph.neighbors_directed(n, Direction::Outgoing) {
                if let Some(d) = in_degree.get_mut(&next) {
                    *d -= 1;
                    if *d == 0 {
                        ready.push(Reverse((self.graph[next].as_str(), next)));
                    }
                }
            }
        }

        if order.len() != self.graph.node_count() {
            return Err(BuildError::DependencyOrder {
                message: format!(
                    "evaluation cycle between projects: {}",
                    self.cycle_members().join(", ")
                ),
            });
        }
        Ok(order)
    }

    /// Projects whose evaluation must complete before `name`, sorted.
    pub fn evaluated_before(&self, name: &str) -> Vec<String> {
        let Some(&idx) = self.index.get(name) else {
            return Vec::new();
        };
        self.graph
            .neighbors_directed(idx, Direction::Incoming)
            .map(|n| self.graph[n].clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    fn cycle_members(&self) -> Vec<String> {
        let mut members: BTreeSet<String> = BTreeSet::new();
        for scc in tarjan_scc(&self.graph) {
            if scc.len() > 1 {
                members.extend(scc.into_iter().map(|n| self.graph[n].clone()));
            }
        }
        members.into_iter().collect()
    }
}
