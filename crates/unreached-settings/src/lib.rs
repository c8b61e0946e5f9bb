//! Options validation and preset/policy resolution.
//!
//! The only filesystem access in this crate is the existence check on the source root.

#![forbid(unsafe_code)]

mod error;
mod model;
mod presets;
mod resolve;

pub use error::{ConfigError, ConfigErrorKind, SourceRootProblem};
pub use model::AuditOptions;
pub use presets::{Preset, preset, preset_names};

use camino::Utf8Path;
use unreached_domain::Policy;

/// Parse a dynamic options object (as handed over by a host integration) into typed options.
pub fn parse_options_json(value: &serde_json::Value) -> Result<AuditOptions, ConfigError> {
    AuditOptions::from_json(value)
}

/// Resolve the effective policy: defaults → preset → user options.
///
/// Relative paths in `options` are resolved against `cwd`.
pub fn resolve_policy(options: AuditOptions, cwd: &Utf8Path) -> Result<Policy, ConfigError> {
    resolve::resolve_policy(options, cwd)
}
