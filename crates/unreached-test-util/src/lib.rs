//! Shared test utilities for the unreached workspace.
//!
//! Several crates build throwaway project trees and compare against golden files under the
//! workspace `tests/fixtures` directory; this crate keeps those helpers in one place.

use camino::{Utf8Path, Utf8PathBuf};
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use unreached_types::ModuleRecord;

/// A scratch project directory that is removed on drop.
pub struct TempProject {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl TempProject {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("temp dir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf8 temp path");
        Self { _dir: dir, root }
    }

    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub fn path(&self, rel: &str) -> Utf8PathBuf {
        self.root.join(rel)
    }

    /// Write `contents` to `rel`, creating parent directories.
    pub fn write(&self, rel: &str, contents: &str) -> Utf8PathBuf {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent");
        }
        std::fs::write(&path, contents).expect("write file");
        path
    }

    pub fn mkdir(&self, rel: &str) -> Utf8PathBuf {
        let path = self.path(rel);
        std::fs::create_dir_all(&path).expect("create dir");
        path
    }

    pub fn read(&self, rel: &str) -> String {
        std::fs::read_to_string(self.path(rel)).expect("read file")
    }
}

impl Default for TempProject {
    fn default() -> Self {
        Self::new()
    }
}

/// Path to the shared fixtures directory (workspace root / tests / fixtures).
pub fn fixtures_dir() -> Utf8PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    // crates/unreached-test-util -> crates -> workspace root
    let root = manifest_dir
        .parent()
        .expect("unreached-test-util should have parent (crates)")
        .parent()
        .expect("crates should have parent (workspace root)");
    Utf8PathBuf::from_path_buf(root.join("tests").join("fixtures"))
        .expect("fixture path should be valid UTF-8")
}

pub fn fixture(name: &str) -> Utf8PathBuf {
    fixtures_dir().join(name)
}

/// Read a golden JSON list of strings.
pub fn read_expected_list(path: &Utf8Path) -> Vec<String> {
    let text = std::fs::read_to_string(path).expect("read golden file");
    serde_json::from_str(&text).expect("golden file should be a JSON string array")
}

/// Load a fixture's `modules.json` build snapshot.
///
/// Resource paths in fixtures are relative to the fixture's `project/` directory so the tree can
/// live anywhere; they are made absolute here. Loader identifiers are left alone.
pub fn fixture_modules(name: &str) -> Vec<ModuleRecord> {
    let dir = fixture(name);
    let project = dir.join("project");
    let text = std::fs::read_to_string(dir.join("modules.json")).expect("read modules.json");
    let mut records: Vec<ModuleRecord> =
        serde_json::from_str(&text).expect("modules.json should be a module record array");
    for record in &mut records {
        if let Some(rel) = record.resource_path.take() {
            record.resource_path = Some(project.join(rel).into_string());
        }
    }
    records
}

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("lock").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` under a scoped fmt subscriber and return everything it logged.
pub fn capture_logs(f: impl FnOnce()) -> String {
    let buf = Captured::default();
    let writer = buf.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    let bytes = buf.0.lock().expect("lock").clone();
    String::from_utf8(bytes).expect("utf8 log output")
}
