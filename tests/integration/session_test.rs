use std::fs;
use anyhow::Result;

use pagetrace::config::principal_log_path;
use pagetrace::{
    derive_page_id, AccessStatus, FlatFileCredentials, OperationKind, Session, SessionError, WorkspaceError,
};

// Import test utilities
#[path = "../common/mod.rs"]
mod common;
use common::{create_test_config, create_test_session, read_log_lines, test_credentials};

#[test]
fn test_login_rejects_bad_password() -> Result<()> {
    let (config, _dir) = create_test_config()?;

    let result = Session::login(&test_credentials(), &config, "alice", "nope");
    assert!(matches!(result, Err(SessionError::InvalidCredentials)));
    assert!(!config.data_dir.join("alice").exists());

    Ok(())
}

#[test]
fn test_login_with_flat_file() -> Result<()> {
    let (config, _dir) = create_test_config()?;
    fs::write(&config.users_file, "alice wonderland\nbob builder\n")?;

    let store = FlatFileCredentials::new(&config.users_file);
    let session = Session::login(&store, &config, "bob", "builder")?;

    assert_eq!(session.principal(), "bob");
    assert!(config.data_dir.join("bob").is_dir());
    Ok(())
}

#[test]
fn test_file_lifecycle_is_accounted() -> Result<()> {
    let (mut session, config, _dir) = create_test_session()?;
    let page = derive_page_id("notes.txt");

    assert_eq!(session.create_file("notes.txt")?.status, AccessStatus::Fault);
    assert_eq!(session.write_file("notes.txt", "first line")?.status, AccessStatus::Hit);
    session.write_file("notes.txt", "second line")?;

    let (content, event) = session.read_file("notes.txt")?;
    assert_eq!(content, "first line\nsecond line\n");
    assert_eq!(event.page_id, page);

    let (matches, _) = session.search_file("notes.txt", "second")?;
    assert_eq!(matches, vec!["second line"]);

    session.modify_file("notes.txt", "replaced")?;
    assert_eq!(fs::read_to_string(session.workspace().path_of("notes.txt")?)?, "replaced\n");

    session.delete_file("notes.txt")?;
    assert!(!session.workspace().exists("notes.txt"));

    let stats = session.statistics();
    assert_eq!((stats.hits, stats.faults), (6, 1));
    assert_eq!(stats.frames, vec![page]);

    let operations: Vec<_> = stats.recent_history.iter().map(|e| e.operation).collect();
    assert_eq!(
        operations,
        vec![
            OperationKind::Create,
            OperationKind::Write,
            OperationKind::Write,
            OperationKind::Read,
            OperationKind::Search,
            OperationKind::Modify,
            OperationKind::Delete,
        ]
    );

    let journal = read_log_lines(&config.operations_log)?;
    assert_eq!(journal.len(), 7);
    assert!(journal[0].ends_with(" | User: alice | Operation: CREATE | File: notes.txt"));

    Ok(())
}

#[test]
fn test_failed_operations_are_not_reported() -> Result<()> {
    let (mut session, config, _dir) = create_test_session()?;

    assert!(matches!(session.read_file("missing.txt"), Err(SessionError::WorkspaceError(WorkspaceError::NotFound(_)))));
    assert!(session.write_file("missing.txt", "x").is_err());
    assert!(session.delete_file("missing.txt").is_err());
    assert!(session.create_file("../escape.txt").is_err());

    session.create_file("a.txt")?;
    assert!(matches!(
        session.create_file("a.txt"),
        Err(SessionError::WorkspaceError(WorkspaceError::AlreadyExists(_)))
    ));

    assert_eq!(session.statistics().total, 1);
    assert_eq!(read_log_lines(&config.engine.log_path)?.len(), 1);
    assert_eq!(read_log_lines(&config.operations_log)?.len(), 1);
    Ok(())
}

#[test]
fn test_logout_clears_page_log() -> Result<()> {
    let (mut session, config, _dir) = create_test_session()?;
    session.create_file("a.txt")?;
    session.read_file("a.txt")?;
    assert_eq!(read_log_lines(&config.engine.log_path)?.len(), 2);

    session.logout();
    assert!(read_log_lines(&config.engine.log_path)?.is_empty());

    // Files outlive the session, statistics do not
    let mut session = Session::login(&test_credentials(), &config, "alice", "wonderland")?;
    assert_eq!(session.statistics().total, 0);
    assert_eq!(session.read_file("a.txt")?.1.status, AccessStatus::Fault);
    Ok(())
}

#[test]
fn test_reset_statistics_keeps_session() -> Result<()> {
    let (mut session, _config, _dir) = create_test_session()?;
    session.create_file("a.txt")?;
    session.reset_statistics();

    assert_eq!(session.statistics().total, 0);
    assert_eq!(session.read_file("a.txt")?.1.status, AccessStatus::Fault);
    Ok(())
}

#[test]
fn test_per_principal_logs() -> Result<()> {
    let (mut config, _dir) = create_test_config()?;
    config.per_principal_logs = true;
    let store = test_credentials();

    let mut alice = Session::login(&store, &config, "alice", "wonderland")?;
    let mut bob = Session::login(&store, &config, "bob", "builder")?;

    alice.create_file("notes.txt")?;
    bob.create_file("notes.txt")?;
    bob.read_file("notes.txt")?;

    // Independent engines, independent logs
    assert_eq!(alice.statistics().total, 1);
    assert_eq!(bob.statistics().hits, 1);
    assert_eq!(read_log_lines(&principal_log_path(&config.engine.log_path, "alice"))?.len(), 1);
    assert_eq!(read_log_lines(&principal_log_path(&config.engine.log_path, "bob"))?.len(), 2);
    assert!(!config.engine.log_path.exists());

    Ok(())
}
