//! The audit use case: resolve policy once, then diff universe against reached per build.

use camino::{Utf8Path, Utf8PathBuf};
use unreached_domain::{AuditData, Policy, Trace};
use unreached_repo::{EnumerationWarning, collect_reached, enumerate_universe};
use unreached_settings::{AuditOptions, resolve_policy};
use unreached_types::{CanonicalPath, ModuleRecord};

use crate::error::AuditError;
use crate::write::write_report;

/// Output of one audit run. The same list has already been written to `report_path`.
#[derive(Clone, Debug)]
pub struct AuditOutput {
    pub unreached: Vec<String>,
    pub data: AuditData,
    pub warnings: Vec<EnumerationWarning>,
    pub report_path: Utf8PathBuf,
}

/// A configured auditor bound to one working directory.
#[derive(Clone, Debug)]
pub struct Auditor {
    policy: Policy,
    cwd: Utf8PathBuf,
}

impl Auditor {
    /// Validate `options` and resolve the policy. Relative paths are taken from `cwd`.
    ///
    /// All configuration errors surface here, before any build has run.
    pub fn new(options: AuditOptions, cwd: &Utf8Path) -> Result<Self, AuditError> {
        let policy = resolve_policy(options, cwd)?;
        Ok(Self {
            policy,
            cwd: cwd.to_path_buf(),
        })
    }

    /// Like [`Auditor::new`], from a host's dynamic options object.
    pub fn from_json(options: &serde_json::Value, cwd: &Utf8Path) -> Result<Self, AuditError> {
        let options = AuditOptions::from_json(options)?;
        Self::new(options, cwd)
    }

    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    pub fn cwd(&self) -> &Utf8Path {
        &self.cwd
    }

    /// Build-completion hook. `modules` is a read-only snapshot of the host's module graph.
    pub fn on_build_complete(&self, modules: &[ModuleRecord]) -> Result<AuditOutput, AuditError> {
        let trace = Trace::from_policy(&self.policy);

        let enumeration = enumerate_universe(&self.policy).map_err(AuditError::Enumeration)?;
        let reached = collect_reached(&self.policy, modules);

        let cwd = CanonicalPath::from(self.cwd.as_path());
        let report = unreached_domain::diff(&enumeration.universe, &reached, &cwd, trace);

        let report_path = self.policy.output_path().to_path_buf();
        write_report(&report_path, &report.unreached, trace)?;

        tracing::debug!(
            universe = report.data.universe_total,
            reached = report.data.reached_total,
            unreached = report.data.unreached_total,
            warnings = enumeration.warnings.len(),
            report = %report_path,
            "audit complete"
        );

        Ok(AuditOutput {
            unreached: report.unreached,
            data: report.data,
            warnings: enumeration.warnings,
            report_path,
        })
    }
}

/// One-shot convenience: construct an [`Auditor`] and run it against `modules`.
pub fn run_audit(
    options: AuditOptions,
    cwd: &Utf8Path,
    modules: &[ModuleRecord],
) -> Result<AuditOutput, AuditError> {
    Auditor::new(options, cwd)?.on_build_complete(modules)
}
