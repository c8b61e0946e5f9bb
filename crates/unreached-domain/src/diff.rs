use unreached_types::ids::TRACE_UNREACHED;
use unreached_types::{CanonicalPath, FileSet};

use crate::report::{AuditData, DomainReport};
use crate::trace::Trace;

/// Subtract `reached` from `universe` and express the survivors relative to `cwd`.
///
/// The output list is sorted lexicographically and deduplicated, so identical inputs always
/// produce identical reports.
pub fn diff(
    universe: &FileSet,
    reached: &FileSet,
    cwd: &CanonicalPath,
    trace: Trace,
) -> DomainReport {
    let mut unreached: Vec<String> = universe
        .difference(reached)
        .map(|path| path.relative_to(cwd))
        .collect();

    // `..` prefixes can reorder relative forms against canonical key order.
    unreached.sort();
    unreached.dedup();

    trace.list(TRACE_UNREACHED, &unreached);

    DomainReport {
        data: AuditData {
            universe_total: universe.len() as u32,
            reached_total: reached.len() as u32,
            unreached_total: unreached.len() as u32,
        },
        unreached,
    }
}
