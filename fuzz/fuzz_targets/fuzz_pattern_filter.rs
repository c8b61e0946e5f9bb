//! Fuzz target for ignore/important pattern filtering.
//!
//! Invalid patterns may be rejected with an error, but nothing may panic. When both lists are
//! valid, a candidate matching an important pattern must always survive.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_pattern_filter
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct FilterInput {
    /// Ignore patterns (e.g. "**/*.md", "dist/**/*")
    ignore: Vec<String>,
    /// Important patterns that override ignores
    important: Vec<String>,
    /// Source-root-relative candidate paths
    candidates: Vec<String>,
}

fuzz_target!(|input: FilterInput| {
    if input.ignore.len() > 20 || input.important.len() > 20 || input.candidates.len() > 100 {
        return;
    }
    let short = |v: Vec<String>, max: usize| -> Vec<String> {
        v.into_iter().filter(|s| s.len() <= max).collect()
    };
    let ignore = short(input.ignore, 256);
    let important = short(input.important, 256);
    let candidates = short(input.candidates, 512);

    let Ok(kept) = unreached_repo::fuzz::filter_paths(&ignore, &important, &candidates) else {
        return;
    };

    // Adding the important patterns to the ignore list changes nothing.
    let mut both = ignore.clone();
    both.extend(important.iter().cloned());
    if let Ok(again) = unreached_repo::fuzz::filter_paths(&both, &important, &candidates) {
        assert_eq!(again, kept);
    }
});
