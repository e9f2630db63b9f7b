//! Property-based tests for the diff engine.
//!
//! Random line sequences over a small alphabet (to force repeated elements
//! and ambiguous backtraces) checked against the engine's invariants.

use linediff::{DiffEngine, DiffStatus, TieBreak};
use proptest::prelude::*;

/// Sequences drawn from a tiny alphabet so LCS ties are common.
fn line_seq() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[abc]{1,2}", 0..24)
}

fn tie_break() -> impl Strategy<Value = TieBreak> {
    prop_oneof![Just(TieBreak::PreferRemoved), Just(TieBreak::PreferAdded)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn reconstruction_invariant(a in line_seq(), b in line_seq(), mode in tie_break()) {
        let engine = DiffEngine::new(a.clone(), b.clone(), mode);
        let script = engine.edit_script().unwrap();

        let from_a: Vec<&String> = script
            .iter()
            .filter(|e| e.status != DiffStatus::Added)
            .map(|e| &e.element)
            .collect();
        let from_b: Vec<&String> = script
            .iter()
            .filter(|e| e.status != DiffStatus::Removed)
            .map(|e| &e.element)
            .collect();

        prop_assert!(from_a.into_iter().eq(a.iter()), "SAME+REMOVED must reproduce A");
        prop_assert!(from_b.into_iter().eq(b.iter()), "SAME+ADDED must reproduce B");
    }

    #[test]
    fn length_invariant(a in line_seq(), b in line_seq(), mode in tie_break()) {
        let engine = DiffEngine::new(a.clone(), b.clone(), mode);
        let same = engine
            .edit_script()
            .unwrap()
            .iter()
            .filter(|e| e.status == DiffStatus::Same)
            .count();
        prop_assert_eq!(engine.lcs_length().unwrap(), same);
        prop_assert_eq!(engine.lcs().unwrap().len(), same);

        // Script length is fully determined by the LCS length
        prop_assert_eq!(
            engine.edit_script().unwrap().len(),
            a.len() + b.len() - same
        );
    }

    #[test]
    fn symmetry_bound(a in line_seq(), b in line_seq()) {
        let forward = DiffEngine::new(a.clone(), b.clone(), TieBreak::default());
        let backward = DiffEngine::new(b, a, TieBreak::default());
        prop_assert_eq!(
            forward.lcs_length().unwrap(),
            backward.lcs_length().unwrap()
        );
    }

    #[test]
    fn idempotence(a in line_seq(), b in line_seq(), mode in tie_break()) {
        let engine = DiffEngine::new(a, b, mode);
        let first = engine.edit_script().unwrap().to_vec();
        let second = engine.edit_script().unwrap().to_vec();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn modes_agree_on_lcs_length(a in line_seq(), b in line_seq()) {
        let removed = DiffEngine::new(a.clone(), b.clone(), TieBreak::PreferRemoved);
        let added = DiffEngine::new(a, b, TieBreak::PreferAdded);
        prop_assert_eq!(
            removed.lcs_length().unwrap(),
            added.lcs_length().unwrap(),
            "tie-break mode must not change the LCS length"
        );
    }

    #[test]
    fn lcs_is_common_subsequence(a in line_seq(), b in line_seq(), mode in tie_break()) {
        let engine = DiffEngine::new(a.clone(), b.clone(), mode);
        let lcs = engine.lcs().unwrap();
        prop_assert!(is_subsequence(&lcs, &a), "LCS must be a subsequence of A");
        prop_assert!(is_subsequence(&lcs, &b), "LCS must be a subsequence of B");
    }
}

fn is_subsequence(needle: &[String], haystack: &[String]) -> bool {
    let mut pos = 0;
    for element in haystack {
        if pos < needle.len() && element == &needle[pos] {
            pos += 1;
        }
    }
    pos == needle.len()
}
