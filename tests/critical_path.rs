use std::error::Error;

use critpath::config::Settings;
use critpath::errors::CpmError;
use critpath::{Schedule, analyze};
use critpath_test_utils::builders::{
    RowsBuilder, SettingsBuilder, linear_chain, parallel_branches,
};
use critpath_test_utils::init_tracing;

type TestResult = Result<(), Box<dyn Error>>;

fn run(rows: &[critpath::ActivityRow]) -> Result<Schedule, CpmError> {
    analyze(rows, &Settings::default())
}

fn chains(schedule: &Schedule) -> Vec<Vec<&str>> {
    schedule
        .critical_chains
        .iter()
        .map(|c| c.iter().map(String::as_str).collect())
        .collect()
}

#[test]
fn linear_chain_is_entirely_critical() -> TestResult {
    init_tracing();
    let schedule = run(&linear_chain())?;

    assert_eq!(schedule.project_finish, 9.0);
    assert_eq!(schedule.critical_path, vec!["A", "B", "C"]);
    assert_eq!(chains(&schedule), vec![vec!["A", "B", "C"]]);
    assert!(schedule.has_single_critical_chain());

    for a in &schedule.activities {
        assert_eq!(a.slack, 0.0);
        assert!(a.critical);
    }
    Ok(())
}

#[test]
fn parallel_branches_skip_the_short_branch() -> TestResult {
    let schedule = run(&parallel_branches())?;

    assert_eq!(schedule.project_finish, 8.0);
    assert_eq!(schedule.critical_path, vec!["A", "B", "D"]);

    let c = schedule.activity("C").ok_or("missing C")?;
    assert_eq!(c.slack, 4.0);
    assert!(!c.critical);
    assert_eq!(c.late_start, 6.0);
    assert_eq!(c.late_finish, 7.0);

    let critical: Vec<&str> = schedule
        .critical_activities()
        .map(|a| a.name.as_str())
        .collect();
    assert_eq!(critical, vec!["A", "B", "D"]);
    Ok(())
}

#[test]
fn result_rows_keep_input_order_and_relations() -> TestResult {
    let schedule = run(&parallel_branches())?;

    let names: Vec<&str> = schedule.activities.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B", "C", "D"]);

    let a = schedule.activity("A").ok_or("missing A")?;
    assert!(a.predecessors.is_empty());
    assert_eq!(a.successors, vec!["B", "C"]);

    let d = schedule.activity("D").ok_or("missing D")?;
    assert_eq!(d.predecessors, vec!["B", "C"]);
    assert!(d.successors.is_empty());
    Ok(())
}

#[test]
fn tied_branches_are_both_critical() -> TestResult {
    let rows = RowsBuilder::new()
        .activity("A", 2, &[])
        .activity("B", 3, &["A"])
        .activity("C", 3, &["A"])
        .activity("D", 1, &["B", "C"])
        .build();
    let schedule = run(&rows)?;

    assert_eq!(schedule.project_finish, 6.0);
    // B and C share ES = 2; input order breaks the tie.
    assert_eq!(schedule.critical_path, vec!["A", "B", "C", "D"]);
    assert_eq!(
        chains(&schedule),
        vec![vec!["A", "B", "D"], vec!["A", "C", "D"]]
    );
    assert!(!schedule.has_single_critical_chain());
    assert!(!schedule.chains_truncated);
    Ok(())
}

#[test]
fn disjoint_networks_are_ordered_by_early_start() -> TestResult {
    let rows = RowsBuilder::new()
        .activity("X", 3, &[])
        .activity("Y", 2, &["X"])
        .activity("P", 1, &[])
        .activity("Q", 4, &["P"])
        .build();
    let schedule = run(&rows)?;

    assert_eq!(schedule.project_finish, 5.0);
    assert_eq!(schedule.critical_path, vec!["X", "P", "Q", "Y"]);
    assert_eq!(chains(&schedule), vec![vec!["X", "Y"], vec!["P", "Q"]]);
    Ok(())
}

#[test]
fn chain_enumeration_stops_at_limit() -> TestResult {
    init_tracing();
    let rows = RowsBuilder::new()
        .activity("A", 2, &[])
        .activity("B", 3, &["A"])
        .activity("C", 3, &["A"])
        .activity("D", 1, &["B", "C"])
        .build();
    let settings = SettingsBuilder::new().max_critical_chains(1).build();
    let schedule = analyze(&rows, &settings)?;

    assert_eq!(chains(&schedule), vec![vec!["A", "B", "D"]]);
    assert!(schedule.chains_truncated);
    assert!(!schedule.has_single_critical_chain());
    // The flat path is unaffected by the limit.
    assert_eq!(schedule.critical_path, vec!["A", "B", "C", "D"]);
    Ok(())
}

#[test]
fn single_activity_is_critical() -> TestResult {
    let rows = RowsBuilder::new().activity("Only", 5, &[]).build();
    let schedule = run(&rows)?;

    assert_eq!(schedule.project_finish, 5.0);
    assert_eq!(schedule.critical_path, vec!["Only"]);
    Ok(())
}

#[test]
fn all_zero_durations_are_critical() -> TestResult {
    let rows = RowsBuilder::new()
        .activity("A", 0, &[])
        .activity("B", 0, &["A"])
        .activity("C", 0, &[])
        .build();
    let schedule = run(&rows)?;

    assert_eq!(schedule.project_finish, 0.0);
    assert_eq!(schedule.critical_path, vec!["A", "B", "C"]);
    Ok(())
}

#[test]
fn fractional_slack_uses_tolerance() -> TestResult {
    // 0.1 + 0.2 != 0.3 in binary floating point.
    let rows = RowsBuilder::new()
        .raw("A", "0.1", "")
        .raw("B", "0.2", "A")
        .raw("C", "0.3", "")
        .build();

    let schedule = run(&rows)?;
    assert_eq!(schedule.critical_path, vec!["A", "C", "B"]);
    for a in &schedule.activities {
        assert!(a.critical, "{} should be critical", a.name);
        assert_eq!(a.slack, 0.0);
    }
    assert_eq!(chains(&schedule), vec![vec!["A", "B"], vec!["C"]]);

    let exact = SettingsBuilder::new().slack_epsilon(0.0).build();
    let schedule = analyze(&rows, &exact)?;
    assert!(schedule.critical_path.is_empty());
    assert!(schedule.activities.iter().all(|a| a.slack > 0.0));
    Ok(())
}

#[test]
fn custom_predecessor_delimiter_reaches_the_pipeline() -> TestResult {
    let semicolon = critpath::types::Delimiter::SEMICOLON;
    let rows = RowsBuilder::new()
        .with_delimiter(semicolon)
        .activity("A", 1, &[])
        .activity("B", 2, &[])
        .activity("C", 1, &["A", "B"])
        .build();
    let settings = SettingsBuilder::new()
        .field_delimiter(critpath::types::Delimiter::TAB)
        .predecessor_delimiter(semicolon)
        .build();

    let schedule = analyze(&rows, &settings)?;
    assert_eq!(schedule.critical_path, vec!["B", "C"]);
    Ok(())
}

#[test]
fn analysis_is_deterministic() -> TestResult {
    let first = run(&parallel_branches())?;
    let second = run(&parallel_branches())?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn errors_propagate_without_partial_results() {
    let cyclic = RowsBuilder::new()
        .activity("A", 1, &[])
        .activity("B", 1, &["A", "C"])
        .activity("C", 1, &["B"])
        .build();
    match run(&cyclic) {
        Err(CpmError::Cycle(name)) => assert_eq!(name, "B"),
        other => panic!("expected Cycle, got {other:?}"),
    }

    let bad = RowsBuilder::new().raw("A", "x", "").build();
    assert!(matches!(run(&bad), Err(CpmError::InvalidDuration { .. })));
}
