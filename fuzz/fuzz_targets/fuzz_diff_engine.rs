#![no_main]
use libfuzzer_sys::fuzz_target;
use linediff::{DiffEngine, DiffStatus, TieBreak};

/// Fuzz the diff engine with arbitrary line sequences.
///
/// Splits the input into two line sequences, diffs them in both tie-break
/// modes, and checks the reconstruction invariant: SAME+REMOVED entries
/// reproduce the old sequence and SAME+ADDED entries reproduce the new one.
fuzz_target!(|data: (Vec<String>, Vec<String>)| {
    let (old, new) = data;
    for tie_break in [TieBreak::PreferRemoved, TieBreak::PreferAdded] {
        let engine = DiffEngine::new(old.clone(), new.clone(), tie_break);
        let script = engine.edit_script().expect("infallible comparator");

        let from_old: Vec<&String> = script
            .iter()
            .filter(|e| e.status != DiffStatus::Added)
            .map(|e| &e.element)
            .collect();
        let from_new: Vec<&String> = script
            .iter()
            .filter(|e| e.status != DiffStatus::Removed)
            .map(|e| &e.element)
            .collect();

        assert!(from_old.into_iter().eq(old.iter()));
        assert!(from_new.into_iter().eq(new.iter()));
        assert_eq!(
            engine.lcs().expect("infallible comparator").len(),
            engine.lcs_length().expect("infallible comparator")
        );
    }
});
