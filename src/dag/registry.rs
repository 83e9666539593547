// src/dag/registry.rs

use std::collections::HashMap;

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use tracing::debug;

use crate::errors::{CpmError, Result};
use crate::types::{ActivityName, Delimiter};

/// One raw input row, exactly as supplied by the input collaborator.
///
/// Duration and predecessor list are kept as text; they are parsed and
/// resolved by [`ActivityRegistry::build`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityRow {
    pub name: String,
    pub duration: String,
    /// Delimiter-separated predecessor names; empty means none.
    pub predecessors: String,
}

impl ActivityRow {
    pub fn new(
        name: impl Into<String>,
        duration: impl Into<String>,
        predecessors: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            duration: duration.into(),
            predecessors: predecessors.into(),
        }
    }
}

/// Graph node: a validated activity.
#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub name: ActivityName,
    pub duration: f64,
}

/// Arena of activities addressed by stable index.
///
/// Node indices follow input order. Edges point predecessor -> activity, so
/// incoming neighbours are predecessors and outgoing neighbours successors;
/// the successor relation is therefore always the exact inverse of the
/// predecessor relation.
#[derive(Debug, Clone)]
pub struct ActivityRegistry {
    graph: DiGraph<Activity, ()>,
    by_name: HashMap<ActivityName, NodeIndex>,
    all_integral: bool,
}

impl ActivityRegistry {
    /// Build a registry from raw rows.
    ///
    /// Fails on empty or duplicate names, unparsable, negative or out-of-range
    /// durations, and predecessor names that match no row. Cycles are *not* checked here;
    /// the passes detect them.
    pub fn build<'a, I>(rows: I, predecessor_delimiter: Delimiter) -> Result<Self>
    where
        I: IntoIterator<Item = &'a ActivityRow>,
    {
        let mut graph: DiGraph<Activity, ()> = DiGraph::new();
        let mut by_name: HashMap<ActivityName, NodeIndex> = HashMap::new();
        let mut pending: Vec<(NodeIndex, Vec<String>)> = Vec::new();
        let mut all_integral = true;

        // First pass: create nodes so references can point forward.
        for (i, row) in rows.into_iter().enumerate() {
            let name = row.name.trim();
            if name.is_empty() {
                return Err(CpmError::InvalidActivityName { row: i + 1 });
            }
            if by_name.contains_key(name) {
                return Err(CpmError::DuplicateActivity(name.to_string()));
            }

            let duration = parse_duration(name, &row.duration)?;
            all_integral &= duration.fract() == 0.0;

            let id = graph.add_node(Activity {
                name: name.to_string(),
                duration,
            });
            by_name.insert(name.to_string(), id);
            pending.push((id, predecessor_delimiter.split_list(&row.predecessors)));
        }

        if graph.node_count() == 0 {
            return Err(CpmError::NoActivities);
        }

        // Second pass: resolve predecessor names into edges.
        for (id, tokens) in pending {
            let mut seen: Vec<NodeIndex> = Vec::with_capacity(tokens.len());
            for token in tokens {
                let pred = *by_name.get(&token).ok_or_else(|| CpmError::UnknownPredecessor {
                    activity: graph[id].name.clone(),
                    reference: token.clone(),
                })?;
                if seen.contains(&pred) {
                    continue;
                }
                seen.push(pred);
                graph.add_edge(pred, id, ());
            }
        }

        debug!(
            activities = graph.node_count(),
            dependencies = graph.edge_count(),
            all_integral,
            "activity registry built"
        );

        Ok(Self {
            graph,
            by_name,
            all_integral,
        })
    }

    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    /// Always `false` for a built registry (`build` rejects empty input);
    /// kept next to [`len`](Self::len) for clippy's `len_without_is_empty`.
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Activity ids in input order.
    pub fn ids(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    pub fn activity(&self, id: NodeIndex) -> &Activity {
        &self.graph[id]
    }

    pub fn id_of(&self, name: &str) -> Option<NodeIndex> {
        self.by_name.get(name).copied()
    }

    /// `true` if every duration is a whole number, in which case every
    /// computed time is exact and zero slack can be tested with `==`.
    pub fn all_integral(&self) -> bool {
        self.all_integral
    }

    /// Direct predecessors, in the order they were listed.
    pub fn predecessors_of(&self, id: NodeIndex) -> Vec<NodeIndex> {
        self.neighbours_in_insertion_order(id, Direction::Incoming)
    }

    /// Direct successors, in input order of the successor rows.
    pub fn successors_of(&self, id: NodeIndex) -> Vec<NodeIndex> {
        self.neighbours_in_insertion_order(id, Direction::Outgoing)
    }

    pub fn predecessor_names(&self, id: NodeIndex) -> Vec<String> {
        self.names(self.predecessors_of(id))
    }

    pub fn successor_names(&self, id: NodeIndex) -> Vec<String> {
        self.names(self.successors_of(id))
    }

    pub(crate) fn graph(&self) -> &DiGraph<Activity, ()> {
        &self.graph
    }

    fn names(&self, ids: Vec<NodeIndex>) -> Vec<String> {
        ids.into_iter().map(|n| self.graph[n].name.clone()).collect()
    }

    fn neighbours_in_insertion_order(&self, id: NodeIndex, dir: Direction) -> Vec<NodeIndex> {
        // petgraph lists the most recently added edge first.
        let mut out: Vec<NodeIndex> = self.graph.neighbors_directed(id, dir).collect();
        out.reverse();
        out
    }
}

/// 2^53: every integer below this is an exact `f64`, so sums of whole
/// durations stay exact as long as they stay below it.
pub const MAX_EXACT_TIME: f64 = 9_007_199_254_740_992.0;

fn parse_duration(activity: &str, raw: &str) -> Result<f64> {
    let invalid = || CpmError::InvalidDuration {
        activity: activity.to_string(),
        value: raw.to_string(),
    };

    let value: f64 = raw.trim().parse().map_err(|_| invalid())?;
    if !value.is_finite() || value < 0.0 || value >= MAX_EXACT_TIME {
        return Err(invalid());
    }
    // Normalise -0.0 so it prints and compares like 0.
    Ok(value + 0.0)
}
