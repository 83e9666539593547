// src/cpm/mod.rs

//! Critical Path Method core.
//!
//! - [`forward`] computes early start/finish and the project finish time.
//! - [`backward`] computes late start/finish from that finish time.
//! - [`extract`] derives slack, criticality and the critical path.
//! - [`schedule`] holds the resulting immutable table.
//!
//! The passes are strictly sequential: the backward pass is seeded from the
//! forward pass's project finish.

pub mod backward;
pub mod extract;
pub mod forward;
pub mod schedule;

pub use backward::{LateTimes, compute_late};
pub use extract::finalize;
pub use forward::{EarlyTimes, compute_early};
pub use schedule::{Schedule, ScheduledActivity};

use tracing::info;

use crate::config::Settings;
use crate::dag::{ActivityRegistry, ActivityRow};
use crate::errors::Result;

/// Run the full pipeline on raw rows.
///
/// Either every stage succeeds and a complete [`Schedule`] is returned, or the
/// first error is; no partial results escape.
pub fn analyze(rows: &[ActivityRow], settings: &Settings) -> Result<Schedule> {
    let registry = ActivityRegistry::build(rows, settings.input.predecessor_delimiter)?;
    schedule_registry(&registry, settings)
}

/// Run both passes and the extractor on an already built registry.
pub fn schedule_registry(registry: &ActivityRegistry, settings: &Settings) -> Result<Schedule> {
    let early = compute_early(registry)?;
    let late = compute_late(registry, &early)?;
    let schedule = finalize(registry, &early, &late, &settings.analysis);

    info!(
        activities = schedule.activities.len(),
        project_finish = schedule.project_finish,
        critical_path = ?schedule.critical_path,
        "critical path analysis complete"
    );

    Ok(schedule)
}
