use camino::Utf8PathBuf;
use std::io;
use thiserror::Error;
use unreached_settings::ConfigError;

/// Fatal audit failure. Nothing here is retried.
#[derive(Debug, Error)]
pub enum AuditError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to enumerate file universe: {0:#}")]
    Enumeration(anyhow::Error),

    #[error("failed to serialize report")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write report to {path}")]
    ReportWrite {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },
}
