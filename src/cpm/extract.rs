// src/cpm/extract.rs

use petgraph::graph::NodeIndex;
use tracing::{debug, warn};

use crate::config::AnalysisSettings;
use crate::cpm::backward::LateTimes;
use crate::cpm::forward::EarlyTimes;
use crate::cpm::schedule::{Schedule, ScheduledActivity};
use crate::dag::ActivityRegistry;

/// Zero test for schedule times.
///
/// Integral networks are compared exactly; fractional ones within `epsilon`.
#[derive(Debug, Clone, Copy)]
struct ZeroTest {
    epsilon: Option<f64>,
}

impl ZeroTest {
    fn new(registry: &ActivityRegistry, epsilon: f64) -> Self {
        Self {
            epsilon: (!registry.all_integral()).then_some(epsilon),
        }
    }

    fn is_zero(self, value: f64) -> bool {
        match self.epsilon {
            None => value == 0.0,
            Some(eps) => value.abs() <= eps,
        }
    }
}

/// Slack, criticality and critical path from the results of both passes.
pub fn finalize(
    registry: &ActivityRegistry,
    early: &EarlyTimes,
    late: &LateTimes,
    settings: &AnalysisSettings,
) -> Schedule {
    let zero = ZeroTest::new(registry, settings.slack_epsilon);

    let mut critical = vec![false; registry.len()];
    let mut activities = Vec::with_capacity(registry.len());

    for id in registry.ids() {
        let activity = registry.activity(id);
        let raw_slack = late.ls(id) - early.es(id);
        let is_critical = zero.is_zero(raw_slack);
        critical[id.index()] = is_critical;

        activities.push(ScheduledActivity {
            name: activity.name.clone(),
            duration: activity.duration,
            predecessors: registry.predecessor_names(id),
            successors: registry.successor_names(id),
            early_start: early.es(id),
            early_finish: early.ef(id),
            late_start: late.ls(id),
            late_finish: late.lf(id),
            // Snap to exact zero so `critical <=> slack == 0` holds in the output.
            slack: if is_critical { 0.0 } else { raw_slack },
            critical: is_critical,
        });
    }

    let critical_path = order_critical_path(registry, early, &critical);
    let (chains, chains_truncated) = enumerate_critical_chains(
        registry,
        early,
        &critical,
        zero,
        settings.max_critical_chains,
    );

    if chains_truncated {
        warn!(
            limit = settings.max_critical_chains,
            "critical chain enumeration truncated"
        );
    }

    debug!(
        critical = critical_path.len(),
        chains = chains.len(),
        "slack and critical path extracted"
    );

    let name = |id: NodeIndex| registry.activity(id).name.clone();

    Schedule {
        activities,
        project_finish: early.project_finish,
        critical_path: critical_path.into_iter().map(name).collect(),
        critical_chains: chains
            .into_iter()
            .map(|chain| chain.into_iter().map(name).collect())
            .collect(),
        chains_truncated,
    }
}

/// All critical activities by ascending ES; ties keep input order.
fn order_critical_path(
    registry: &ActivityRegistry,
    early: &EarlyTimes,
    critical: &[bool],
) -> Vec<NodeIndex> {
    let mut path: Vec<NodeIndex> = registry.ids().filter(|id| critical[id.index()]).collect();
    // Stable sort: ids are already in input order.
    path.sort_by(|a, b| early.es(*a).total_cmp(&early.es(*b)));
    path
}

/// Depth-first enumeration of maximal critical chains.
///
/// An edge `p -> a` is tight when both ends are critical and `EF(p) == ES(a)`.
/// Chains start at critical activities without a tight incoming edge and end
/// at ones without a tight outgoing edge. Starts and branches are visited in
/// input order. At most `limit` chains are returned; the flag reports whether
/// more existed.
fn enumerate_critical_chains(
    registry: &ActivityRegistry,
    early: &EarlyTimes,
    critical: &[bool],
    zero: ZeroTest,
    limit: usize,
) -> (Vec<Vec<NodeIndex>>, bool) {
    let n = registry.len();
    let mut tight_next: Vec<Vec<NodeIndex>> = vec![Vec::new(); n];
    let mut has_tight_prev = vec![false; n];

    for id in registry.ids().filter(|id| critical[id.index()]) {
        for succ in registry.successors_of(id) {
            if critical[succ.index()] && zero.is_zero(early.es(succ) - early.ef(id)) {
                tight_next[id.index()].push(succ);
                has_tight_prev[succ.index()] = true;
            }
        }
    }

    let mut chains: Vec<Vec<NodeIndex>> = Vec::new();

    let starts = registry
        .ids()
        .filter(|id| critical[id.index()] && !has_tight_prev[id.index()]);

    for start in starts {
        // (node, index of the next branch to explore)
        let mut stack: Vec<(NodeIndex, usize)> = vec![(start, 0)];

        while let Some(&(node, branch)) = stack.last() {
            match tight_next[node.index()].get(branch).copied() {
                Some(child) => {
                    if let Some(top) = stack.last_mut() {
                        top.1 += 1;
                    }
                    stack.push((child, 0));
                }
                None => {
                    if tight_next[node.index()].is_empty() {
                        if chains.len() == limit {
                            return (chains, true);
                        }
                        chains.push(stack.iter().map(|(id, _)| *id).collect());
                    }
                    stack.pop();
                }
            }
        }
    }

    (chains, false)
}
