use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use globset::{Glob, GlobBuilder, GlobSet, GlobSetBuilder};
use std::fmt;
use unreached_domain::{Policy, Trace};
use unreached_types::ids::TRACE_UNIVERSE;
use unreached_types::{CanonicalPath, FileSet};
use walkdir::WalkDir;

/// An entry the walk could not read. Logged and skipped; the rest of the audit continues.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnumerationWarning {
    pub path: Option<Utf8PathBuf>,
    pub message: String,
}

impl fmt::Display for EnumerationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) => write!(f, "{path}: {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Enumeration {
    pub universe: FileSet,
    pub warnings: Vec<EnumerationWarning>,
}

/// Compiled ignore/important pattern sets.
///
/// Patterns match the source-root-relative path with `/` separators. `*` and `?` stay within
/// one segment, `**` spans segments, and a leading `.` is an ordinary character.
#[derive(Clone, Debug)]
pub struct PatternRules {
    ignore: GlobSet,
    important: GlobSet,
}

impl PatternRules {
    pub fn new(ignore: &[String], important: &[String]) -> anyhow::Result<Self> {
        Ok(Self {
            ignore: build_globset(ignore).context("compile ignore globset")?,
            important: build_globset(important).context("compile important globset")?,
        })
    }

    pub fn from_policy(policy: &Policy) -> anyhow::Result<Self> {
        Self::new(policy.ignore_patterns(), policy.important_patterns())
    }

    /// Important patterns win over ignores unconditionally.
    pub fn includes(&self, rel: &str) -> bool {
        self.important.is_match(rel) || !self.ignore.is_match(rel)
    }
}

/// Walk the policy's source root and collect every file the pattern rules keep.
///
/// Hidden files and directories are walked like any other entry. Symlinked files are included;
/// symlinked directories are not descended into. The report file itself is never part of the
/// universe, wherever the output path points.
pub fn enumerate_universe(policy: &Policy) -> anyhow::Result<Enumeration> {
    let trace = Trace::from_policy(policy);
    let rules = PatternRules::from_policy(policy)?;
    let root = policy.source_root();
    let root_canonical = CanonicalPath::from(root);
    let report = CanonicalPath::from(policy.output_path());

    let mut out = Enumeration::default();

    for entry in WalkDir::new(root).follow_links(false) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                let path = err.path().and_then(Utf8Path::from_path).map(Utf8Path::to_path_buf);
                push_warning(&mut out.warnings, path, err.to_string());
                continue;
            }
        };

        let file_type = entry.file_type();
        let is_file = file_type.is_file()
            || (file_type.is_symlink()
                && std::fs::metadata(entry.path()).is_ok_and(|m| m.is_file()));
        if !is_file {
            continue;
        }

        let Some(abs) = Utf8Path::from_path(entry.path()) else {
            push_warning(
                &mut out.warnings,
                None,
                format!("skipping non UTF-8 path {}", entry.path().display()),
            );
            continue;
        };

        let rel = abs
            .strip_prefix(root)
            .unwrap_or(abs)
            .as_str()
            .replace('\\', "/");

        if !rules.includes(&rel) {
            continue;
        }
        let path = root_canonical.join(&rel);
        if path != report {
            out.universe.insert(path);
        }
    }

    trace.set(TRACE_UNIVERSE, &out.universe);

    Ok(out)
}

fn push_warning(warnings: &mut Vec<EnumerationWarning>, path: Option<Utf8PathBuf>, message: String) {
    let warning = EnumerationWarning { path, message };
    tracing::warn!(%warning, "skipping unreadable entry");
    warnings.push(warning);
}

fn build_globset(patterns: &[String]) -> anyhow::Result<GlobSet> {
    let mut b = GlobSetBuilder::new();
    for p in patterns {
        b.add(compile_glob(p)?);
    }
    Ok(b.build()?)
}

fn compile_glob(pattern: &str) -> anyhow::Result<Glob> {
    let glob = GlobBuilder::new(pattern)
        .literal_separator(true)
        .backslash_escape(true)
        .build()
        .with_context(|| format!("invalid glob {pattern}"))?;
    Ok(glob)
}
