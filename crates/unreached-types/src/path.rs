use camino::{Utf8Path, Utf8PathBuf};
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::ids::VENDOR_DIRS;

/// Canonical absolute path used for every set-membership decision.
///
/// Normalization rules are simple and deterministic:
/// - always forward slashes (`/`)
/// - anything from the first `?` on is dropped (virtual-module query strings)
/// - `.` segments are removed and `..` segments are folded lexically
/// - the comparison key is lower-cased
///
/// Equality, ordering and hashing look at the key only. The original-case form is kept next to
/// it so the file can still be opened on a case-sensitive filesystem.
#[derive(Clone, Debug)]
pub struct CanonicalPath {
    key: String,
    on_disk: Utf8PathBuf,
}

impl CanonicalPath {
    pub fn new<S: AsRef<str>>(raw: S) -> Self {
        let raw = raw.as_ref();
        let without_query = match raw.find('?') {
            Some(idx) => &raw[..idx],
            None => raw,
        };
        let normalized = normalize_lexically(without_query);
        Self {
            key: normalized.to_lowercase(),
            on_disk: Utf8PathBuf::from(normalized),
        }
    }

    /// The canonical key (lower-cased, forward slashes).
    pub fn as_str(&self) -> &str {
        &self.key
    }

    /// The suffix-stripped path in its original case, suitable for filesystem access.
    pub fn on_disk(&self) -> &Utf8Path {
        &self.on_disk
    }

    /// Directory containing this file, in original case.
    pub fn parent_dir(&self) -> Utf8PathBuf {
        self.on_disk
            .parent()
            .map(Utf8Path::to_path_buf)
            .unwrap_or_else(|| Utf8PathBuf::from("/"))
    }

    /// Append a relative, slash-separated path.
    pub fn join(&self, rel: &str) -> CanonicalPath {
        CanonicalPath::new(format!("{}/{}", self.on_disk, rel))
    }

    /// True when any segment names a vendored-dependency directory.
    pub fn is_vendored(&self) -> bool {
        self.key
            .split('/')
            .any(|segment| VENDOR_DIRS.contains(&segment))
    }

    /// Express this path relative to `base`, in canonical form.
    ///
    /// Walks up with `..` when `base` is not an ancestor. Returns `.` for the base itself.
    pub fn relative_to(&self, base: &CanonicalPath) -> String {
        let ours = segments(&self.key);
        let theirs = segments(&base.key);
        let common = ours
            .iter()
            .zip(theirs.iter())
            .take_while(|(a, b)| a == b)
            .count();

        let mut out: Vec<&str> = vec![".."; theirs.len() - common];
        out.extend_from_slice(&ours[common..]);
        if out.is_empty() {
            ".".to_string()
        } else {
            out.join("/")
        }
    }
}

impl PartialEq for CanonicalPath {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for CanonicalPath {}

impl PartialOrd for CanonicalPath {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CanonicalPath {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl Hash for CanonicalPath {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl fmt::Display for CanonicalPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key)
    }
}

impl Serialize for CanonicalPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.key)
    }
}

impl From<&Utf8Path> for CanonicalPath {
    fn from(value: &Utf8Path) -> Self {
        CanonicalPath::new(value.as_str())
    }
}

impl From<Utf8PathBuf> for CanonicalPath {
    fn from(value: Utf8PathBuf) -> Self {
        CanonicalPath::new(value.as_str())
    }
}

/// Fold `.` and `..` segments and convert separators to `/` without touching the filesystem.
///
/// Leading `/` is preserved. A `..` at the root of an absolute path is dropped; on a relative
/// path it is kept. An empty relative result becomes `.`.
pub fn normalize_lexically(path: &str) -> String {
    let slashed = path.replace('\\', "/");
    let absolute = slashed.starts_with('/');

    let mut parts: Vec<&str> = Vec::new();
    for segment in slashed.split('/') {
        match segment {
            "" | "." => {}
            ".." => match parts.last() {
                Some(&last) if last != ".." && !is_drive_prefix(last, parts.len()) => {
                    parts.pop();
                }
                Some(_) => {
                    if !absolute && !parts.first().is_some_and(|p| is_drive_prefix(p, 1)) {
                        parts.push("..");
                    }
                }
                None => {
                    if !absolute {
                        parts.push("..");
                    }
                }
            },
            other => parts.push(other),
        }
    }

    let joined = parts.join("/");
    if absolute {
        format!("/{joined}")
    } else if joined.is_empty() {
        ".".to_string()
    } else {
        joined
    }
}

// `C:` style prefix, only meaningful as the first segment.
fn is_drive_prefix(segment: &str, position: usize) -> bool {
    position == 1 && segment.len() == 2 && segment.ends_with(':')
}

fn segments(key: &str) -> Vec<&str> {
    key.split('/').filter(|s| !s.is_empty()).collect()
}
