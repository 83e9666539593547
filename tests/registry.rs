use std::error::Error;

use critpath::dag::{ActivityRegistry, ActivityRow};
use critpath::errors::CpmError;
use critpath::types::Delimiter;
use critpath_test_utils::builders::{RowsBuilder, parallel_branches};

type TestResult = Result<(), Box<dyn Error>>;

fn build(rows: &[ActivityRow]) -> Result<ActivityRegistry, CpmError> {
    ActivityRegistry::build(rows, Delimiter::COMMA)
}

#[test]
fn successors_are_inverse_of_predecessors() -> TestResult {
    let registry = build(&parallel_branches())?;

    let id = |name: &str| registry.id_of(name).ok_or("missing activity");

    assert_eq!(registry.len(), 4);
    assert!(!registry.is_empty());
    assert_eq!(registry.successor_names(id("A")?), vec!["B", "C"]);
    assert_eq!(registry.successor_names(id("B")?), vec!["D"]);
    assert_eq!(registry.successor_names(id("C")?), vec!["D"]);
    assert!(registry.successor_names(id("D")?).is_empty());

    assert!(registry.predecessor_names(id("A")?).is_empty());
    assert_eq!(registry.predecessor_names(id("D")?), vec!["B", "C"]);

    // Every edge appears exactly once on both sides.
    for a in registry.ids() {
        for p in registry.predecessors_of(a) {
            assert!(registry.successors_of(p).contains(&a));
        }
        for s in registry.successors_of(a) {
            assert!(registry.predecessors_of(s).contains(&a));
        }
    }

    Ok(())
}

#[test]
fn ids_follow_input_order() -> TestResult {
    let rows = RowsBuilder::new()
        .activity("Z", 1, &[])
        .activity("M", 1, &["Z"])
        .activity("A", 1, &["M"])
        .build();
    let registry = build(&rows)?;

    let names: Vec<&str> = registry
        .ids()
        .map(|id| registry.activity(id).name.as_str())
        .collect();
    assert_eq!(names, vec!["Z", "M", "A"]);

    Ok(())
}

#[test]
fn predecessor_list_keeps_written_order_and_drops_duplicates() -> TestResult {
    let rows = RowsBuilder::new()
        .activity("A", 1, &[])
        .activity("B", 1, &[])
        .raw("C", "1", " B , A,B,, ")
        .build();
    let registry = build(&rows)?;

    let c = registry.id_of("C").ok_or("missing C")?;
    assert_eq!(registry.predecessor_names(c), vec!["B", "A"]);

    Ok(())
}

#[test]
fn empty_predecessor_field_means_no_predecessors() -> TestResult {
    let rows = RowsBuilder::new().raw("A", "2", "").raw("B", "1", "   ").build();
    let registry = build(&rows)?;

    for id in registry.ids() {
        assert!(registry.predecessors_of(id).is_empty());
        assert!(registry.successors_of(id).is_empty());
    }

    Ok(())
}

#[test]
fn custom_predecessor_delimiter_is_honoured() -> TestResult {
    let pipe: Delimiter = "pipe".parse()?;
    let rows = RowsBuilder::new()
        .with_delimiter(pipe)
        .activity("A", 1, &[])
        .activity("B", 1, &[])
        .activity("C", 1, &["A", "B"])
        .build();
    assert_eq!(rows[2].predecessors, "A|B");

    let registry = ActivityRegistry::build(&rows, pipe)?;
    let c = registry.id_of("C").ok_or("missing C")?;
    assert_eq!(registry.predecessor_names(c), vec!["A", "B"]);

    // With the wrong delimiter "A|B" is one unknown name.
    match build(&rows) {
        Err(CpmError::UnknownPredecessor { activity, reference }) => {
            assert_eq!(activity, "C");
            assert_eq!(reference, "A|B");
        }
        other => panic!("expected UnknownPredecessor, got {other:?}"),
    }

    Ok(())
}

#[test]
fn names_and_durations_are_trimmed() -> TestResult {
    let rows = RowsBuilder::new().raw("  A ", " 3 ", "").build();
    let registry = build(&rows)?;

    let a = registry.id_of("A").ok_or("name was not trimmed")?;
    assert_eq!(registry.activity(a).duration, 3.0);

    Ok(())
}

#[test]
fn duplicate_activity_is_rejected() {
    let rows = RowsBuilder::new()
        .activity("A", 1, &[])
        .activity("B", 1, &["A"])
        .activity("A", 2, &[])
        .build();

    match build(&rows) {
        Err(CpmError::DuplicateActivity(name)) => assert_eq!(name, "A"),
        other => panic!("expected DuplicateActivity, got {other:?}"),
    }
}

#[test]
fn unknown_predecessor_names_activity_and_reference() {
    let rows = RowsBuilder::new()
        .activity("A", 1, &[])
        .activity("B", 1, &["A", "Ghost"])
        .build();

    match build(&rows) {
        Err(CpmError::UnknownPredecessor { activity, reference }) => {
            assert_eq!(activity, "B");
            assert_eq!(reference, "Ghost");
        }
        other => panic!("expected UnknownPredecessor, got {other:?}"),
    }
}

#[test]
fn predecessor_names_are_case_sensitive() {
    let rows = RowsBuilder::new()
        .activity("A", 1, &[])
        .activity("B", 1, &["a"])
        .build();

    assert!(matches!(
        build(&rows),
        Err(CpmError::UnknownPredecessor { .. })
    ));
}

#[test]
fn invalid_durations_are_rejected() {
    for bad in [
        "",
        "abc",
        "-1",
        "-0.5",
        "NaN",
        "inf",
        "3 days",
        "9007199254740992",
        "1e300",
    ] {
        let rows = RowsBuilder::new().raw("A", bad, "").build();
        match build(&rows) {
            Err(CpmError::InvalidDuration { activity, value }) => {
                assert_eq!(activity, "A");
                assert_eq!(value, bad);
            }
            other => panic!("expected InvalidDuration for {bad:?}, got {other:?}"),
        }
    }
}

#[test]
fn zero_and_fractional_durations_are_accepted() -> TestResult {
    let rows = RowsBuilder::new()
        .raw("Milestone", "0", "")
        .raw("Work", "1.5", "Milestone")
        .build();
    let registry = build(&rows)?;

    assert!(!registry.all_integral());

    let integral = build(&RowsBuilder::new().raw("A", "2.0", "").raw("B", "0", "A").build())?;
    assert!(integral.all_integral());

    Ok(())
}

#[test]
fn durations_just_below_exact_limit_are_accepted() -> TestResult {
    let rows = RowsBuilder::new().raw("Huge", "9007199254740991", "").build();
    let registry = build(&rows)?;

    let id = registry.id_of("Huge").ok_or("missing Huge")?;
    assert_eq!(registry.activity(id).duration, 9_007_199_254_740_991.0);
    assert!(registry.all_integral());
    Ok(())
}

#[test]
fn empty_name_reports_row_number() {
    let rows = RowsBuilder::new()
        .activity("A", 1, &[])
        .raw("   ", "1", "")
        .build();

    match build(&rows) {
        Err(err @ CpmError::InvalidActivityName { .. }) => {
            assert!(matches!(err, CpmError::InvalidActivityName { row: 2 }));
            assert!(err.to_string().starts_with("data row 2 "), "{err}");
        }
        other => panic!("expected InvalidActivityName, got {other:?}"),
    }
}

#[test]
fn empty_input_is_rejected() {
    let rows: Vec<ActivityRow> = Vec::new();
    assert!(matches!(build(&rows), Err(CpmError::NoActivities)));
}

#[test]
fn self_reference_is_accepted_by_registry() -> TestResult {
    // Registry only resolves names; the passes report the cycle.
    let rows = RowsBuilder::new().activity("A", 1, &["A"]).build();
    let registry = build(&rows)?;
    let a = registry.id_of("A").ok_or("missing A")?;
    assert_eq!(registry.predecessors_of(a), vec![a]);
    Ok(())
}
