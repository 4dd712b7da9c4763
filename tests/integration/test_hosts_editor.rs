//! Integration Tests for Hosts File Editing
//!
//! Drive `HostsEditor` against scratch hosts tables and check the exact
//! bytes left behind, plus when the cache flush runs.

#[path = "../test_utils/mod.rs"]
mod test_utils;

use std::fs;

use phocus::error::HostsAction;
use phocus::{Error, MatchMode};
use test_utils::*;

const BASE_TABLE: &str = "127.0.0.1 localhost\n::1 localhost\n";

#[test]
fn test_block_on_empty_table() {
    let hosts = hosts_fixture("");
    let editor = editor_for(&hosts.path, CountingFlush::default());

    editor.block("ads.example.com").unwrap();

    assert_eq!(read_table(&hosts.path), "127.0.0.1 ads.example.com\n");
    assert_eq!(editor.flusher().calls(), 1);
}

#[test]
fn test_block_preserves_existing_lines() {
    let hosts = hosts_fixture(BASE_TABLE);
    let editor = editor_for(&hosts.path, CountingFlush::default());

    editor.block("a.com").unwrap();
    editor.block("b.com").unwrap();

    assert_eq!(
        read_table(&hosts.path),
        format!("{}127.0.0.1 a.com\n127.0.0.1 b.com\n", BASE_TABLE)
    );
    assert_eq!(editor.flusher().calls(), 2);
}

#[test]
fn test_unblock_removes_only_requested_domain() {
    let hosts = hosts_fixture("127.0.0.1 a.com\n127.0.0.1 b.com\n");
    let editor = editor_for(&hosts.path, CountingFlush::default());

    editor.unblock_all(&domains(&["a.com"])).unwrap();

    assert_eq!(read_table(&hosts.path), "127.0.0.1 b.com\n");
    assert_eq!(editor.flusher().calls(), 1);
}

#[test]
fn test_block_then_unblock_restores_table() {
    let hosts = hosts_fixture(BASE_TABLE);
    let editor = editor_for(&hosts.path, CountingFlush::default());

    for domain in ["a.com", "b.com", "c.com"] {
        editor.block(domain).unwrap();
    }
    editor.unblock_all(&domains(&["a.com", "b.com", "c.com"])).unwrap();

    assert_eq!(read_table(&hosts.path), BASE_TABLE);
}

#[test]
fn test_unblock_twice_is_idempotent() {
    let hosts = hosts_fixture("# static\n127.0.0.1 a.com\n10.0.0.1 nas\n");
    let editor = editor_for(&hosts.path, CountingFlush::default());
    let list = domains(&["a.com"]);

    editor.unblock_all(&list).unwrap();
    let once = read_table(&hosts.path);
    editor.unblock_all(&list).unwrap();

    assert_eq!(read_table(&hosts.path), once);
    assert_eq!(once, "# static\n10.0.0.1 nas\n");
}

#[test]
fn test_substring_matching_removes_longer_names() {
    let hosts = hosts_fixture(BASE_TABLE);
    let editor = editor_for(&hosts.path, CountingFlush::default());

    editor.block("example.com").unwrap();
    editor.unblock_all(&domains(&["example"])).unwrap();

    assert_eq!(read_table(&hosts.path), BASE_TABLE);
}

#[test]
fn test_substring_matching_also_hits_unrelated_lines() {
    // "local" is a substring of "localhost", so substring mode strips both
    let hosts = hosts_fixture(BASE_TABLE);
    let editor = editor_for(&hosts.path, CountingFlush::default());

    editor.unblock_all(&domains(&["local"])).unwrap();

    assert_eq!(read_table(&hosts.path), "");
}

#[test]
fn test_exact_matching_keeps_longer_names() {
    let hosts = hosts_fixture("127.0.0.1 foo\n127.0.0.1 foobar.com\n");
    let editor = editor_for(&hosts.path, CountingFlush::default()).with_match_mode(MatchMode::Exact);

    editor.unblock_all(&domains(&["foo"])).unwrap();

    assert_eq!(read_table(&hosts.path), "127.0.0.1 foobar.com\n");
}

#[test]
fn test_exact_matching_keeps_commented_entries() {
    let hosts = hosts_fixture("# 127.0.0.1 foo\n127.0.0.1 foo\n127.0.0.1 bar # not foo\n");
    let editor = editor_for(&hosts.path, CountingFlush::default()).with_match_mode(MatchMode::Exact);

    editor.unblock_all(&domains(&["foo"])).unwrap();

    assert_eq!(read_table(&hosts.path), "# 127.0.0.1 foo\n127.0.0.1 bar # not foo\n");
}

#[test]
fn test_block_on_missing_table_does_not_flush() {
    let hosts = hosts_fixture("");
    let missing = hosts.path.with_file_name("no-such-hosts");
    let editor = editor_for(&missing, CountingFlush::default());

    let err = editor.block("a.com").unwrap_err();

    assert!(matches!(err, Error::HostsIo { action: HostsAction::Open, .. }));
    assert!(err.to_string().contains("no-such-hosts"));
    assert_eq!(editor.flusher().calls(), 0);
    assert!(!missing.exists());
}

#[cfg(unix)]
#[test]
fn test_block_on_read_only_table_does_not_flush() {
    use std::os::unix::fs::PermissionsExt;

    let hosts = hosts_fixture(BASE_TABLE);
    fs::set_permissions(&hosts.path, fs::Permissions::from_mode(0o444)).unwrap();

    // Root ignores file modes, so there is nothing to observe
    if fs::OpenOptions::new().append(true).open(&hosts.path).is_ok() {
        return;
    }

    let editor = editor_for(&hosts.path, CountingFlush::default());
    let err = editor.block("a.com").unwrap_err();

    assert!(matches!(err, Error::HostsIo { .. }));
    assert_eq!(editor.flusher().calls(), 0);
    assert_eq!(read_table(&hosts.path), BASE_TABLE);
}

#[test]
fn test_unblock_on_missing_table_does_not_flush() {
    let hosts = hosts_fixture("");
    let missing = hosts.path.with_file_name("gone");
    let editor = editor_for(&missing, CountingFlush::default());

    let err = editor.unblock_all(&domains(&["a.com"])).unwrap_err();

    assert!(matches!(err, Error::HostsIo { action: HostsAction::Read, .. }));
    assert_eq!(editor.flusher().calls(), 0);
}

#[test]
fn test_flush_failure_keeps_the_entry() {
    let hosts = hosts_fixture("");
    let editor = editor_for(&hosts.path, FailingFlush::default());

    let err = editor.block("a.com").unwrap_err();

    assert!(err.is_flush_error());
    assert_eq!(read_table(&hosts.path), "127.0.0.1 a.com\n");
    assert_eq!(editor.flusher().calls(), 1);
}
