//! Property-based tests for the diff.
//!
//! These tests use proptest to verify invariants around:
//! - the result being a subset of the universe
//! - the result never intersecting the reached set
//! - output being deterministic and sorted

use crate::diff::diff;
use crate::trace::Trace;
use proptest::prelude::*;
use std::collections::BTreeSet;
use unreached_types::{CanonicalPath, FileSet};

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

const ROOT: &str = "/proj";

/// Relative file paths with mixed case so case folding is exercised.
fn arb_rel_path() -> impl Strategy<Value = String> {
    prop::string::string_regex("([a-zA-Z]{1,5}/){0,3}[a-zA-Z_]{1,6}\\.(js|vue|scss)")
        .unwrap()
}

fn arb_file_sets() -> impl Strategy<Value = (FileSet, FileSet)> {
    (
        prop::collection::vec(arb_rel_path(), 0..30),
        prop::collection::vec(arb_rel_path(), 0..30),
        prop::collection::vec(any::<bool>(), 0..30),
    )
        .prop_map(|(universe, extra_reached, overlap)| {
            let universe: FileSet = universe
                .iter()
                .map(|rel| CanonicalPath::new(format!("{ROOT}/{rel}")))
                .collect();
            // Reach some universe members (flagged by `overlap`) plus unrelated files.
            let mut reached: FileSet = universe
                .iter()
                .zip(overlap.iter())
                .filter(|(_, hit)| **hit)
                .map(|(p, _)| p.clone())
                .collect();
            reached.extend(
                extra_reached
                    .iter()
                    .map(|rel| CanonicalPath::new(format!("{ROOT}/other/{rel}"))),
            );
            (universe, reached)
        })
}

fn relative_set(set: &FileSet, cwd: &CanonicalPath) -> BTreeSet<String> {
    set.iter().map(|p| p.relative_to(cwd)).collect()
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn result_is_subset_of_universe((universe, reached) in arb_file_sets()) {
        let cwd = CanonicalPath::new(ROOT);
        let report = diff(&universe, &reached, &cwd, Trace::disabled());
        let universe_rel = relative_set(&universe, &cwd);
        for path in &report.unreached {
            prop_assert!(universe_rel.contains(path), "{path} not in universe");
        }
    }

    #[test]
    fn result_never_intersects_reached((universe, reached) in arb_file_sets()) {
        let cwd = CanonicalPath::new(ROOT);
        let report = diff(&universe, &reached, &cwd, Trace::disabled());
        let reached_rel = relative_set(&reached, &cwd);
        for path in &report.unreached {
            prop_assert!(!reached_rel.contains(path), "{path} was reached");
        }
    }

    #[test]
    fn result_is_sorted_and_repeatable((universe, reached) in arb_file_sets()) {
        let cwd = CanonicalPath::new(ROOT);
        let first = diff(&universe, &reached, &cwd, Trace::disabled());
        let second = diff(&universe, &reached, &cwd, Trace::disabled());
        prop_assert_eq!(&first, &second);

        let mut sorted = first.unreached.clone();
        sorted.sort();
        prop_assert_eq!(first.unreached, sorted);
    }

    #[test]
    fn counts_add_up((universe, reached) in arb_file_sets()) {
        let cwd = CanonicalPath::new(ROOT);
        let report = diff(&universe, &reached, &cwd, Trace::disabled());
        let overlap = universe.iter().filter(|p| reached.contains(p)).count() as u32;
        prop_assert_eq!(report.data.unreached_total + overlap, report.data.universe_total);
    }
}
