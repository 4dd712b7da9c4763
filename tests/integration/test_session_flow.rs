//! Integration Tests for Session Lifecycle
//!
//! A session blocks domains one by one and removes all of them in a single
//! teardown, whatever happened along the way.

#[path = "../test_utils/mod.rs"]
mod test_utils;

use phocus::{Error, Session, SessionState, Teardown};
use test_utils::*;

const BASE_TABLE: &str = "127.0.0.1 localhost\n";

#[test]
fn test_full_session_leaves_table_as_found() {
    let hosts = hosts_fixture(BASE_TABLE);
    let mut session = Session::new(editor_for(&hosts.path, CountingFlush::default()));

    session.block("news.example.com").unwrap();
    session.block("video.example.org").unwrap();
    assert!(read_table(&hosts.path).contains("127.0.0.1 video.example.org\n"));

    assert_eq!(session.terminate().unwrap(), Teardown::Unblocked(2));
    assert_eq!(read_table(&hosts.path), BASE_TABLE);
    assert_eq!(session.state(), SessionState::Terminated);
}

#[test]
fn test_flush_failures_do_not_stop_the_session() {
    let hosts = hosts_fixture(BASE_TABLE);
    let mut session = Session::new(editor_for(&hosts.path, FailingFlush::default()));

    assert!(session.block("a.com").unwrap_err().is_flush_error());
    assert!(session.block("b.com").unwrap_err().is_flush_error());
    assert_eq!(session.state(), SessionState::Active);

    // Teardown still rewrites the table; only its flush fails
    let err = session.terminate().unwrap_err();
    assert!(matches!(err, Error::FlushFailed { .. }));
    assert_eq!(read_table(&hosts.path), BASE_TABLE);
    assert_eq!(session.editor().flusher().calls(), 3);
}

#[test]
fn test_teardown_runs_once() {
    let hosts = hosts_fixture(BASE_TABLE);
    let mut session = Session::new(editor_for(&hosts.path, CountingFlush::default()));
    session.block("a.com").unwrap();

    session.terminate().unwrap();
    assert!(matches!(session.terminate(), Err(Error::SessionTerminated)));
    assert!(matches!(session.block("b.com"), Err(Error::SessionTerminated)));

    assert_eq!(session.editor().flusher().calls(), 2);
    assert_eq!(read_table(&hosts.path), BASE_TABLE);
}

#[test]
fn test_failed_block_is_cleaned_up_when_table_returns() {
    let hosts = hosts_fixture(BASE_TABLE);
    let moved = hosts.path.with_file_name("hosts.moved");
    std::fs::rename(&hosts.path, &moved).unwrap();

    let mut session = Session::new(editor_for(&hosts.path, CountingFlush::default()));
    assert!(matches!(session.block("a.com"), Err(Error::HostsIo { .. })));
    assert_eq!(session.blocked_domains(), ["a.com".to_string()]);

    // Someone else adds the entry before the session ends
    std::fs::write(&hosts.path, format!("{}127.0.0.1 a.com\n", BASE_TABLE)).unwrap();
    assert_eq!(session.terminate().unwrap(), Teardown::Unblocked(1));
    assert_eq!(read_table(&hosts.path), BASE_TABLE);
}

#[test]
fn test_empty_session_leaves_table_untouched() {
    let hosts = hosts_fixture("127.0.0.1 localhost");
    let mut session = Session::new(editor_for(&hosts.path, CountingFlush::default()));

    assert_eq!(session.terminate().unwrap(), Teardown::Skipped);
    assert_eq!(read_table(&hosts.path), "127.0.0.1 localhost");
    assert_eq!(session.editor().flusher().calls(), 0);
}

#[test]
fn test_duplicate_domains_are_harmless() {
    let hosts = hosts_fixture(BASE_TABLE);
    let mut session = Session::new(editor_for(&hosts.path, CountingFlush::default()));

    session.block("a.com").unwrap();
    session.block("a.com").unwrap();
    assert_eq!(read_table(&hosts.path).matches("a.com").count(), 2);

    assert_eq!(session.terminate().unwrap(), Teardown::Unblocked(2));
    assert_eq!(read_table(&hosts.path), BASE_TABLE);
}
