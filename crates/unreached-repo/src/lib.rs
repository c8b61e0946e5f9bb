//! Repository adapters: enumerate the file universe and compute what the build reached.
//!
//! This crate is allowed to read the filesystem. It never writes; the report is written by the
//! app layer.

#![forbid(unsafe_code)]

mod enumerate;
mod reach;
mod stylesheet;

pub use enumerate::{Enumeration, EnumerationWarning, PatternRules, enumerate_universe};
pub use reach::collect_reached;
pub use stylesheet::{import_candidates, resolve_import, scan_directives};

/// Fuzz-friendly API for testing scanning and matching without filesystem access.
/// These functions are designed to never panic on any input.
pub mod fuzz {
    use super::*;

    /// Extract stylesheet directive targets from arbitrary text.
    ///
    /// **Never panics** on any input.
    pub fn scan_stylesheet(text: &str) -> Vec<String> {
        stylesheet::scan_directives(text)
    }

    /// Apply ignore/important rules to a list of relative candidate paths.
    ///
    /// Returns `Ok(included_paths)` if every pattern is valid, `Err(...)` otherwise.
    /// **Never panics** on any input.
    pub fn filter_paths(
        ignore: &[String],
        important: &[String],
        candidates: &[String],
    ) -> anyhow::Result<Vec<String>> {
        let rules = PatternRules::new(ignore, important)?;
        Ok(candidates
            .iter()
            .filter(|c| rules.includes(c))
            .cloned()
            .collect())
    }
}
