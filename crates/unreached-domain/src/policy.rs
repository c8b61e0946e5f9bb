use camino::{Utf8Path, Utf8PathBuf};
use serde::Serialize;

/// The resolved, immutable audit policy.
///
/// Built once by the settings resolver; every component reads it, none mutates it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Policy {
    preset: String,
    source_root: Utf8PathBuf,
    ignore_patterns: Vec<String>,
    important_patterns: Vec<String>,
    output_path: Utf8PathBuf,
    debug_enabled: bool,
}

impl Policy {
    /// Assemble a policy from already-validated parts.
    ///
    /// `source_root` and `output_path` are expected to be absolute.
    pub fn new(
        preset: impl Into<String>,
        source_root: Utf8PathBuf,
        ignore_patterns: Vec<String>,
        important_patterns: Vec<String>,
        output_path: Utf8PathBuf,
        debug_enabled: bool,
    ) -> Self {
        Self {
            preset: preset.into(),
            source_root,
            ignore_patterns,
            important_patterns,
            output_path,
            debug_enabled,
        }
    }

    pub fn preset(&self) -> &str {
        &self.preset
    }

    pub fn source_root(&self) -> &Utf8Path {
        &self.source_root
    }

    pub fn ignore_patterns(&self) -> &[String] {
        &self.ignore_patterns
    }

    pub fn important_patterns(&self) -> &[String] {
        &self.important_patterns
    }

    pub fn output_path(&self) -> &Utf8Path {
        &self.output_path
    }

    pub fn debug_enabled(&self) -> bool {
        self.debug_enabled
    }
}
