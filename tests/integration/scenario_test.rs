use anyhow::Result;

use pagetrace::{derive_page_id, AccessStatus, OperationKind};

// Import test utilities
#[path = "../common/mod.rs"]
mod common;
use common::{create_test_engine, log_path, read_log_lines, A, B, C, D, E};

#[test]
fn test_scenario_names_are_distinct() {
    let ids: Vec<_> = [A, B, C, D, E].iter().map(|n| derive_page_id(n)).collect();
    assert_eq!(ids, vec![17, 6, 38, 84, 3]);
}

#[test]
fn test_evicted_page_faults_again() -> Result<()> {
    let (mut engine, dir) = create_test_engine(4)?;

    let statuses: Vec<_> = [A, B, C, D, E, A]
        .iter()
        .map(|name| engine.process(name, OperationKind::Create).status)
        .collect();

    assert_eq!(statuses, vec![AccessStatus::Fault; 6]);
    assert_eq!(
        engine.frames(),
        vec![derive_page_id(C), derive_page_id(D), derive_page_id(E), derive_page_id(A)]
    );
    assert_eq!((engine.hits(), engine.faults()), (0, 6));

    let lines = read_log_lines(&log_path(dir.path()))?;
    assert_eq!(lines.len(), 6);
    assert!(lines.iter().all(|line| line.ends_with("| Page Fault")));

    Ok(())
}

#[test]
fn test_hit_refreshes_recency() -> Result<()> {
    let (mut engine, _dir) = create_test_engine(4)?;

    let statuses: Vec<_> = [A, B, A, C, D, E]
        .iter()
        .map(|name| engine.process(name, OperationKind::Read).status)
        .collect();

    use AccessStatus::{Fault, Hit};
    assert_eq!(statuses, vec![Fault, Fault, Hit, Fault, Fault, Fault]);
    assert_eq!(
        engine.frames(),
        vec![derive_page_id(A), derive_page_id(C), derive_page_id(D), derive_page_id(E)]
    );

    let stats = engine.snapshot();
    assert_eq!((stats.hits, stats.faults, stats.total), (1, 5, 6));
    assert!((stats.hit_ratio - 100.0 / 6.0).abs() < 1e-9);
    assert_eq!(stats.recent_history.len(), 6);
    assert_eq!(stats.recent_history[2].status, Hit);

    Ok(())
}
