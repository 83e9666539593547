// src/cpm/backward.rs

use petgraph::Direction;
use petgraph::graph::NodeIndex;
use tracing::{debug, trace};

use crate::cpm::forward::EarlyTimes;
use crate::dag::{ActivityRegistry, layered_order};
use crate::errors::{CpmError, Result};

/// Result of the backward pass, indexed by activity id.
#[derive(Debug, Clone, PartialEq)]
pub struct LateTimes {
    pub late_start: Vec<f64>,
    pub late_finish: Vec<f64>,
}

impl LateTimes {
    pub fn ls(&self, id: NodeIndex) -> f64 {
        self.late_start[id.index()]
    }

    pub fn lf(&self, id: NodeIndex) -> f64 {
        self.late_finish[id.index()]
    }
}

/// Backward pass: latest start/finish of every activity.
///
/// Mirror image of the forward pass over the successor relation, seeded from
/// the terminal activities:
///
/// - no successors: `LF = project finish`
/// - otherwise: `LF = min(LS(s))`
/// - `LS = LF - duration`
pub fn compute_late(registry: &ActivityRegistry, early: &EarlyTimes) -> Result<LateTimes> {
    let graph = registry.graph();
    let layers = layered_order(graph, Direction::Outgoing)
        .map_err(|stuck| CpmError::Cycle(registry.activity(stuck).name.clone()))?;

    let project_finish = early.project_finish;
    let n = registry.len();
    let mut late_start = vec![project_finish; n];
    let mut late_finish = vec![project_finish; n];

    for (depth, layer) in layers.iter().enumerate() {
        trace!(depth, size = layer.len(), "backward pass layer");
        for &id in layer {
            let lf = graph
                .neighbors_directed(id, Direction::Outgoing)
                .map(|s| late_start[s.index()])
                .fold(project_finish, f64::min);
            late_finish[id.index()] = lf;
            late_start[id.index()] = lf - registry.activity(id).duration;
        }
    }

    debug!(layers = layers.len(), project_finish, "backward pass complete");

    Ok(LateTimes {
        late_start,
        late_finish,
    })
}
