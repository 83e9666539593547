// src/lib.rs

pub mod cli;
pub mod config;
pub mod cpm;
pub mod dag;
pub mod errors;
pub mod input;
pub mod logging;
pub mod report;
pub mod types;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::{RawSettingsFile, Settings, load_raw_or_default};
use crate::dag::ActivityRegistry;
use crate::report::{critical_path_line, export_csv, render_table};

pub use crate::cpm::{Schedule, ScheduledActivity, analyze};
pub use crate::dag::ActivityRow;
pub use crate::errors::CpmError;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - settings loading (+ CLI overrides)
/// - reading the activity file
/// - the CPM pipeline
/// - console report and CSV export
pub fn run(args: CliArgs) -> Result<()> {
    let settings = resolve_settings(&args)?;

    let rows = input::read_rows(&args.input, &settings.input)
        .with_context(|| format!("reading activities from {}", args.input.display()))?;
    info!(rows = rows.len(), input = %args.input.display(), "activities loaded");

    if args.dry_run {
        let registry = ActivityRegistry::build(&rows, settings.input.predecessor_delimiter)?;
        print_dry_run(&registry, &settings);
        return Ok(());
    }

    let schedule = analyze(&rows, &settings)?;

    print!("{}", render_table(&schedule, settings.output.list_delimiter));
    println!("Critical path: {}", critical_path_line(&schedule));
    if !schedule.has_single_critical_chain() {
        for (i, chain) in schedule.critical_chains.iter().enumerate() {
            println!("  chain {}: {}", i + 1, chain.join(" -> "));
        }
    }

    if settings.output.export {
        let now = chrono::Local::now().naive_local();
        let path = export_csv(&schedule, &settings.output, now)?;
        println!("CPM results exported to {}", path.display());
    }

    Ok(())
}

/// Load the settings file (if any), apply CLI overrides and validate the result.
pub fn resolve_settings(args: &CliArgs) -> Result<Settings> {
    let mut raw = load_raw_or_default(args.config.as_deref())
        .context("loading settings")?;
    apply_cli_overrides(&mut raw, args);
    let settings = Settings::try_from(raw)?;
    debug!(?settings, "effective settings");
    Ok(settings)
}

fn apply_cli_overrides(raw: &mut RawSettingsFile, args: &CliArgs) {
    if let Some(d) = args.field_delimiter {
        raw.input.field_delimiter = d;
    }
    if let Some(d) = args.predecessor_delimiter {
        raw.input.predecessor_delimiter = d;
    }
    if let Some(ref dir) = args.output_dir {
        raw.output.dir = dir.clone();
    }
    if args.no_export {
        raw.output.export = false;
    }
    if let Some(eps) = args.epsilon {
        raw.analysis.slack_epsilon = eps;
    }
}

/// Dry-run output: validated activities with their resolved relations.
fn print_dry_run(registry: &ActivityRegistry, settings: &Settings) {
    let list = settings.output.list_delimiter;

    println!("critpath dry-run");
    println!("  input.field_delimiter = {}", settings.input.field_delimiter);
    println!(
        "  input.predecessor_delimiter = {}",
        settings.input.predecessor_delimiter
    );
    println!();

    println!("activities ({}):", registry.len());
    for id in registry.ids() {
        let activity = registry.activity(id);
        println!("  - {}", activity.name);
        println!("      duration: {}", types::format_time(activity.duration));
        let preds = registry.predecessor_names(id);
        if !preds.is_empty() {
            println!("      predecessors: {}", list.join(&preds));
        }
        let succs = registry.successor_names(id);
        if !succs.is_empty() {
            println!("      successors: {}", list.join(&succs));
        }
    }

    debug!("dry-run complete (no computation)");
}
