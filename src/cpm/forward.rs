// src/cpm/forward.rs

use petgraph::Direction;
use petgraph::graph::NodeIndex;
use tracing::{debug, trace};

use crate::dag::{ActivityRegistry, MAX_EXACT_TIME, layered_order};
use crate::errors::{CpmError, Result};

/// Result of the forward pass, indexed by activity id.
#[derive(Debug, Clone, PartialEq)]
pub struct EarlyTimes {
    pub early_start: Vec<f64>,
    pub early_finish: Vec<f64>,
    /// `max(EF)` over all activities.
    pub project_finish: f64,
}

impl EarlyTimes {
    pub fn es(&self, id: NodeIndex) -> f64 {
        self.early_start[id.index()]
    }

    pub fn ef(&self, id: NodeIndex) -> f64 {
        self.early_finish[id.index()]
    }
}

/// Forward pass: earliest start/finish of every activity.
///
/// Activities are resolved layer by layer in predecessor order, so every
/// predecessor's EF is final before it is read:
///
/// - no predecessors: `ES = 0`
/// - otherwise: `ES = max(EF(p))`
/// - `EF = ES + duration`
///
/// Fails with `TimeOutOfRange` once an EF reaches [`MAX_EXACT_TIME`], past
/// which whole-number times can no longer be added exactly.
pub fn compute_early(registry: &ActivityRegistry) -> Result<EarlyTimes> {
    let graph = registry.graph();
    let layers = layered_order(graph, Direction::Incoming)
        .map_err(|stuck| CpmError::Cycle(registry.activity(stuck).name.clone()))?;

    let n = registry.len();
    let mut early_start = vec![0.0; n];
    let mut early_finish = vec![0.0; n];

    for (depth, layer) in layers.iter().enumerate() {
        trace!(depth, size = layer.len(), "forward pass layer");
        for &id in layer {
            let es = graph
                .neighbors_directed(id, Direction::Incoming)
                .map(|p| early_finish[p.index()])
                .fold(0.0_f64, f64::max);
            let ef = es + registry.activity(id).duration;
            if ef >= MAX_EXACT_TIME {
                return Err(CpmError::TimeOutOfRange {
                    activity: registry.activity(id).name.clone(),
                    finish: ef,
                });
            }
            early_start[id.index()] = es;
            early_finish[id.index()] = ef;
        }
    }

    let project_finish = early_finish.iter().copied().fold(0.0_f64, f64::max);

    debug!(
        layers = layers.len(),
        project_finish, "forward pass complete"
    );

    Ok(EarlyTimes {
        early_start,
        early_finish,
        project_finish,
    })
}
