// src/cpm/schedule.rs

//! The immutable result table handed to reporting and export.

use crate::types::ActivityName;

/// One row of the result table.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledActivity {
    pub name: ActivityName,
    pub duration: f64,
    pub predecessors: Vec<ActivityName>,
    pub successors: Vec<ActivityName>,
    pub early_start: f64,
    pub early_finish: f64,
    pub late_start: f64,
    pub late_finish: f64,
    /// Total float: `LS - ES`.
    pub slack: f64,
    pub critical: bool,
}

/// Complete CPM result for one activity network.
#[derive(Debug, Clone, PartialEq)]
pub struct Schedule {
    /// Rows in input order.
    pub activities: Vec<ScheduledActivity>,
    pub project_finish: f64,
    /// Every critical activity, ordered by ascending ES, ties by input order.
    pub critical_path: Vec<ActivityName>,
    /// Maximal chains of critical activities joined by tight edges.
    pub critical_chains: Vec<Vec<ActivityName>>,
    /// `true` if chain enumeration stopped at the configured limit.
    pub chains_truncated: bool,
}

impl Schedule {
    pub fn activity(&self, name: &str) -> Option<&ScheduledActivity> {
        self.activities.iter().find(|a| a.name == name)
    }

    pub fn critical_activities(&self) -> impl Iterator<Item = &ScheduledActivity> {
        self.activities.iter().filter(|a| a.critical)
    }

    /// `true` if the critical activities form one unbranched chain.
    pub fn has_single_critical_chain(&self) -> bool {
        self.critical_chains.len() == 1 && !self.chains_truncated
    }
}
