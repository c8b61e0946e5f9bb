//! Stable data types and IDs used across the unreached workspace.
//!
//! This crate is intentionally boring:
//! - canonical path handling (the one representation every set comparison uses)
//! - file sets built from canonical paths
//! - the module record shape handed over by the host build
//! - stable string IDs (preset names, loader identifiers, stylesheet extensions)

#![forbid(unsafe_code)]

pub mod fileset;
pub mod ids;
pub mod module;
pub mod path;

pub use fileset::FileSet;
pub use module::ModuleRecord;
pub use path::{CanonicalPath, normalize_lexically};
