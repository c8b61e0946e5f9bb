use crate::CanonicalPath;
use serde::Serialize;
use std::collections::BTreeSet;
use std::collections::btree_set;

/// Ordered set of canonical paths.
///
/// Ordering follows the canonical key, so iteration is deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FileSet(BTreeSet<CanonicalPath>);

impl FileSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the path was not already present.
    pub fn insert(&mut self, path: CanonicalPath) -> bool {
        self.0.insert(path)
    }

    pub fn contains(&self, path: &CanonicalPath) -> bool {
        self.0.contains(path)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_set::Iter<'_, CanonicalPath> {
        self.0.iter()
    }

    /// Members of `self` that are not in `other`.
    pub fn difference<'a>(&'a self, other: &'a FileSet) -> impl Iterator<Item = &'a CanonicalPath> {
        self.0.difference(&other.0)
    }

    pub fn extend<I: IntoIterator<Item = CanonicalPath>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl FromIterator<CanonicalPath> for FileSet {
    fn from_iter<I: IntoIterator<Item = CanonicalPath>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for FileSet {
    type Item = CanonicalPath;
    type IntoIter = btree_set::IntoIter<CanonicalPath>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a FileSet {
    type Item = &'a CanonicalPath;
    type IntoIter = btree_set::Iter<'a, CanonicalPath>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
