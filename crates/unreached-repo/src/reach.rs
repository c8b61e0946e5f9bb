use std::collections::HashSet;
use unreached_domain::{Policy, Trace};
use unreached_types::ids::{TRACE_IMPORT_MISS, TRACE_IMPORT_VENDORED, TRACE_REACHED};
use unreached_types::{CanonicalPath, FileSet, ModuleRecord};

use crate::stylesheet::{resolve_import, scan_directives};

/// Compute the set of files the build reached.
///
/// Every participating module contributes its own path. Modules processed by a stylesheet
/// preprocessor are additionally re-read from disk and their `@import`/`@use`/`@forward`
/// targets are followed transitively.
pub fn collect_reached(policy: &Policy, modules: &[ModuleRecord]) -> FileSet {
    let trace = Trace::from_policy(policy);
    let mut reached = FileSet::new();
    let mut closure = StylesheetClosure::new(trace);

    for record in modules {
        let Some(path) = record.participating_path() else {
            continue;
        };
        if record.uses_stylesheet_loader() {
            closure.visit(&path, &mut reached);
        }
        reached.insert(path);
    }

    trace.set(TRACE_REACHED, &reached);
    reached
}

/// Depth-first walk over stylesheet imports.
///
/// `in_progress` holds the files on the current chain; a file already on it is not re-entered,
/// which is what terminates import cycles. `scanned` remembers finished files so shared
/// dependencies are read once.
struct StylesheetClosure {
    trace: Trace,
    in_progress: HashSet<CanonicalPath>,
    scanned: HashSet<CanonicalPath>,
}

impl StylesheetClosure {
    fn new(trace: Trace) -> Self {
        Self {
            trace,
            in_progress: HashSet::new(),
            scanned: HashSet::new(),
        }
    }

    fn visit(&mut self, file: &CanonicalPath, reached: &mut FileSet) {
        if self.in_progress.contains(file) || self.scanned.contains(file) {
            return;
        }
        self.in_progress.insert(file.clone());

        // Unreadable files contribute no edges.
        let source = std::fs::read_to_string(file.on_disk()).unwrap_or_default();
        let dir = file.parent_dir();

        for target in scan_directives(&source) {
            match resolve_import(&dir, &target).map(CanonicalPath::from) {
                Some(dep) if dep.is_vendored() => self
                    .trace
                    .value(TRACE_IMPORT_VENDORED, &format!("{target} (from {file})")),
                Some(dep) => {
                    self.visit(&dep, reached);
                    reached.insert(dep);
                }
                None => self
                    .trace
                    .value(TRACE_IMPORT_MISS, &format!("{target} (from {file})")),
            }
        }

        self.in_progress.remove(file);
        self.scanned.insert(file.clone());
    }
}
