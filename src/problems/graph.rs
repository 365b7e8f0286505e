use crate::problems::ProblemError;
use crate::search::{Action, Problem};
use itertools::Itertools;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::iter;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EdgeDefinition {
    pub from: String,
    pub to: String,
    pub cost: f64,
}

/// A route-finding problem on a weighted graph, e.g.
///
/// ```toml
/// kind = "graph"
/// start = "Arad"
/// goals = ["Bucharest"]
/// undirected = true
///
/// [[edges]]
/// from = "Arad"
/// to = "Sibiu"
/// cost = 140
///
/// [heuristic]
/// Arad = 366
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct GraphDefinition {
    pub start: String,
    pub goals: Vec<String>,
    /// Every edge can also be travelled backwards.
    #[serde(default)]
    pub undirected: bool,
    #[serde(default)]
    pub edges: Vec<EdgeDefinition>,
    /// Estimated cost to a goal per node, missing nodes are estimated as 0.
    #[serde(default)]
    pub heuristic: BTreeMap<String, f64>,
}

/// Travelling along one edge of a [`GraphProblem`].
#[derive(Debug, Clone, PartialEq)]
pub struct GraphMove {
    name: String,
    to: String,
    cost: f64,
}

impl GraphMove {
    fn new(from: &str, to: &str, cost: f64) -> Self {
        Self {
            name: format!("{}→{}", from, to),
            to: to.to_string(),
            cost,
        }
    }
}

impl Action<String> for GraphMove {
    fn name(&self) -> &str {
        &self.name
    }

    fn apply(&self, _state: &String) -> String {
        self.to.clone()
    }

    fn cost_to_apply(&self, _state: &String) -> f64 {
        self.cost
    }
}

/// States are node names. The actions of a node are its outgoing edges, in
/// the order the edges were defined.
#[derive(Debug, Clone)]
pub struct GraphProblem {
    graph: DiGraph<String, f64>,
    node_ids: HashMap<String, NodeIndex>,
    start: NodeIndex,
    goals: HashSet<NodeIndex>,
    heuristic: HashMap<String, f64>,
}

impl GraphProblem {
    pub fn new(definition: GraphDefinition) -> Result<Self, ProblemError> {
        let mut graph = DiGraph::new();
        let mut node_ids = HashMap::new();
        for edge in &definition.edges {
            // Also catches NaN costs
            if !(edge.cost >= 0.) {
                return Err(ProblemError::NegativeCost {
                    from: edge.from.clone(),
                    to: edge.to.clone(),
                    cost: edge.cost,
                });
            }
            let from = *node_ids
                .entry(edge.from.clone())
                .or_insert_with(|| graph.add_node(edge.from.clone()));
            let to = *node_ids
                .entry(edge.to.clone())
                .or_insert_with(|| graph.add_node(edge.to.clone()));
            graph.add_edge(from, to, edge.cost);
            if definition.undirected {
                graph.add_edge(to, from, edge.cost);
            }
        }
        // Start and goals need no edges to be nodes
        for name in iter::once(&definition.start).chain(&definition.goals) {
            node_ids
                .entry(name.clone())
                .or_insert_with(|| graph.add_node(name.clone()));
        }

        let lookup = |name: &String| {
            node_ids
                .get(name)
                .copied()
                .ok_or_else(|| ProblemError::UnknownNode(name.clone()))
        };
        let start = lookup(&definition.start)?;
        let goals = definition
            .goals
            .iter()
            .map(lookup)
            .collect::<Result<HashSet<_>, _>>()?;
        for name in definition.heuristic.keys() {
            lookup(name)?;
        }

        Ok(Self {
            graph,
            node_ids,
            start,
            goals,
            heuristic: definition.heuristic.into_iter().collect(),
        })
    }

    /// A directed graph without heuristic values.
    pub fn from_edges(
        start: &str,
        goals: &[&str],
        edges: &[(&str, &str, f64)],
    ) -> Result<Self, ProblemError> {
        Self::new(GraphDefinition {
            start: start.to_string(),
            goals: goals.iter().map(|goal| goal.to_string()).collect(),
            undirected: false,
            edges: edges
                .iter()
                .map(|&(from, to, cost)| EdgeDefinition {
                    from: from.to_string(),
                    to: to.to_string(),
                    cost,
                })
                .collect(),
            heuristic: BTreeMap::new(),
        })
    }

    pub fn from_text(text: &str) -> Result<Self, ProblemError> {
        Self::new(toml::from_str(text)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, ProblemError> {
        Self::from_text(&std::fs::read_to_string(path)?)
    }

    pub fn num_nodes(&self) -> usize {
        self.graph.node_count()
    }

    pub fn num_edges(&self) -> usize {
        self.graph.edge_count()
    }

    /// The heuristic values of the problem definition as a closure usable by
    /// the informed engines.
    pub fn heuristic(&self) -> impl Fn(&String) -> f64 + 'static {
        let values = self.heuristic.clone();
        move |node: &String| values.get(node).copied().unwrap_or(0.)
    }
}

impl Problem for GraphProblem {
    type State = String;
    type Action = GraphMove;

    fn initial_state(&self) -> String {
        self.graph[self.start].clone()
    }

    fn applicable_actions(&self, state: &String) -> Vec<GraphMove> {
        let Some(&node) = self.node_ids.get(state) else {
            return vec![];
        };
        // petgraph lists the edges of a node from the most recently added
        self.graph
            .edges(node)
            .sorted_by_key(|edge| edge.id())
            .map(|edge| {
                GraphMove::new(
                    &self.graph[edge.source()],
                    &self.graph[edge.target()],
                    *edge.weight(),
                )
            })
            .collect()
    }

    fn is_goal(&self, state: &String) -> bool {
        self.node_ids
            .get(state)
            .is_some_and(|node| self.goals.contains(node))
    }
}
