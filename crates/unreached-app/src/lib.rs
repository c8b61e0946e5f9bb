//! Use case orchestration for unreached.
//!
//! A host build integration constructs an [`Auditor`] once with its options, then calls
//! [`Auditor::on_build_complete`] with the module snapshot when the build finishes. Everything
//! else (enumeration, closure, diff) is delegated to the lower layers.

#![forbid(unsafe_code)]

mod audit;
mod error;
mod write;

pub use audit::{AuditOutput, Auditor, run_audit};
pub use error::AuditError;
pub use write::{serialize_report, write_report};

pub use unreached_settings::{AuditOptions, ConfigError, ConfigErrorKind};
pub use unreached_types::ModuleRecord;
