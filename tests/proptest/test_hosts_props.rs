//! Property-based tests for hosts table editing
//!
//! Generated domains and unrelated lines are drawn from disjoint alphabets
//! (lowercase vs. uppercase and digits), so substring matching can only hit
//! the lines it is meant to.

#[path = "../test_utils/mod.rs"]
mod test_utils;

use phocus::hosts::{block_entry, filter_table};
use phocus::MatchMode;
use proptest::prelude::*;
use test_utils::*;

fn domain() -> impl Strategy<Value = String> {
    "[a-z]{1,12}\\.[a-z]{2,4}"
}

fn unrelated_line() -> impl Strategy<Value = String> {
    prop_oneof![
        "[0-9]{1,3}\\.[0-9]{1,3}\\.[0-9]{1,3}\\.[0-9]{1,3} [A-Z]{1,10}",
        "# [A-Z0-9 ]{0,20}",
        Just(String::new()),
    ]
}

fn table(lines: &[String]) -> String {
    lines.iter().map(|line| format!("{}\n", line)).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_block_adds_exact_entry(
        existing in prop::collection::vec(unrelated_line(), 0..8),
        domain in domain(),
    ) {
        let hosts = hosts_fixture(&table(&existing));
        let editor = editor_for(&hosts.path, CountingFlush::default());

        editor.block(&domain).unwrap();

        let content = read_table(&hosts.path);
        let entry = block_entry(&domain);
        prop_assert!(content.lines().any(|line| line == entry));
        prop_assert!(content.starts_with(&table(&existing)));
        prop_assert_eq!(editor.flusher().calls(), 1);
    }

    #[test]
    fn test_unblock_keeps_exactly_the_unrelated_lines(
        unrelated in prop::collection::vec(unrelated_line(), 0..8),
        blocked in prop::collection::vec(domain(), 1..6),
        seed in any::<u64>(),
    ) {
        // Interleave block entries between the unrelated lines
        let mut lines = unrelated.clone();
        for (i, domain) in blocked.iter().enumerate() {
            let at = ((seed as usize).wrapping_add(i * 7)) % (lines.len() + 1);
            lines.insert(at, block_entry(domain));
        }
        let hosts = hosts_fixture(&table(&lines));
        let editor = editor_for(&hosts.path, CountingFlush::default());

        editor.unblock_all(&blocked).unwrap();

        let content = read_table(&hosts.path);
        prop_assert_eq!(&content, &table(&unrelated));
        for domain in &blocked {
            prop_assert!(!content.contains(domain.as_str()));
        }
    }

    #[test]
    fn test_unblock_is_idempotent(
        lines in prop::collection::vec(prop_oneof![unrelated_line(), domain()], 0..12),
        targets in prop::collection::vec("[a-z.]{1,6}", 0..4),
        exact in any::<bool>(),
    ) {
        let mode = if exact { MatchMode::Exact } else { MatchMode::Substring };
        let content = table(&lines);

        let once = filter_table(&content, &targets, mode);
        let twice = filter_table(&once, &targets, mode);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn test_filter_never_adds_lines(
        content in "[a-zA-Z0-9 .#\\n]{0,200}",
        targets in prop::collection::vec("[a-z]{0,4}", 0..4),
    ) {
        let filtered = filter_table(&content, &targets, MatchMode::Substring);
        prop_assert!(filtered.len() <= content.len());
        // Everything removed joins to "", which need not be an original line
        if !filtered.is_empty() {
            for line in filtered.split('\n') {
                prop_assert!(content.split('\n').any(|original| original == line));
            }
        }
    }
}
