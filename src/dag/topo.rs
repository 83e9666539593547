// src/dag/topo.rs

//! Layered topological ordering (Kahn's algorithm).
//!
//! Both scheduling passes walk the same graph, just in opposite directions:
//! the forward pass waits on incoming edges (predecessors), the backward pass
//! on outgoing edges (successors). `prerequisites` names the direction a node
//! has to wait on.

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};

/// Order nodes so that every node comes after all its prerequisites.
///
/// Nodes are grouped in layers: layer 0 has no prerequisites, layer `k` only
/// depends on layers `< k`. Within a layer nodes are in index order. Every
/// node is visited once and every edge once, so this is O(V + E).
///
/// On a cycle, returns `Err` with the lowest-index node that could not be
/// ordered. Such a node either sits on a cycle or waits on one.
pub fn layered_order<N, E>(
    graph: &DiGraph<N, E>,
    prerequisites: Direction,
) -> Result<Vec<Vec<NodeIndex>>, NodeIndex> {
    let dependents = prerequisites.opposite();

    let mut remaining: Vec<usize> = graph
        .node_indices()
        .map(|n| graph.edges_directed(n, prerequisites).count())
        .collect();

    let mut current: Vec<NodeIndex> = graph
        .node_indices()
        .filter(|n| remaining[n.index()] == 0)
        .collect();

    let mut layers: Vec<Vec<NodeIndex>> = Vec::new();
    let mut resolved = 0usize;

    while !current.is_empty() {
        let mut layer = std::mem::take(&mut current);
        layer.sort_unstable();

        let mut next: Vec<NodeIndex> = Vec::new();
        for &node in &layer {
            for dependent in graph.neighbors_directed(node, dependents) {
                let count = &mut remaining[dependent.index()];
                *count -= 1;
                if *count == 0 {
                    next.push(dependent);
                }
            }
        }

        resolved += layer.len();
        layers.push(layer);
        current = next;
    }

    if resolved < graph.node_count() {
        let stuck = graph
            .node_indices()
            .find(|n| remaining[n.index()] > 0)
            .unwrap_or_else(|| NodeIndex::new(0));
        return Err(stuck);
    }

    Ok(layers)
}

