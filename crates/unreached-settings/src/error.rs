use camino::Utf8PathBuf;
use std::fmt;
use thiserror::Error;

/// Invalid configuration. Always raised while building the policy, before any audit work.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("options must be an object, found {found}")]
    NotAnObject { found: &'static str },

    #[error("unknown option `{name}` (expected one of: {expected})")]
    UnknownOption { name: String, expected: String },

    #[error("option `{name}` was given twice (also as `{alias}`)")]
    DuplicateOption {
        name: &'static str,
        alias: &'static str,
    },

    #[error("option `{option}` must be {expected}, found {found}")]
    InvalidOptionType {
        option: &'static str,
        expected: &'static str,
        found: String,
    },

    #[error("preset \"{name}\" is not supported (expected one of: {known})")]
    UnknownPreset { name: String, known: String },

    #[error("source root {path} {reason}")]
    InvalidSourceRoot {
        path: Utf8PathBuf,
        reason: SourceRootProblem,
    },

    #[error("invalid {list} pattern `{pattern}`")]
    InvalidPattern {
        list: &'static str,
        pattern: String,
        #[source]
        source: globset::Error,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceRootProblem {
    Missing,
    NotADirectory,
}

impl fmt::Display for SourceRootProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceRootProblem::Missing => f.write_str("does not exist"),
            SourceRootProblem::NotADirectory => f.write_str("is not a directory"),
        }
    }
}

/// Coarse classification hosts can branch on (abort the build vs. warn).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigErrorKind {
    InvalidShape,
    InvalidOptionType,
    UnknownPreset,
    InvalidSourceRoot,
    InvalidPattern,
}

impl ConfigError {
    pub fn kind(&self) -> ConfigErrorKind {
        match self {
            ConfigError::NotAnObject { .. }
            | ConfigError::UnknownOption { .. }
            | ConfigError::DuplicateOption { .. } => ConfigErrorKind::InvalidShape,
            ConfigError::InvalidOptionType { .. } => ConfigErrorKind::InvalidOptionType,
            ConfigError::UnknownPreset { .. } => ConfigErrorKind::UnknownPreset,
            ConfigError::InvalidSourceRoot { .. } => ConfigErrorKind::InvalidSourceRoot,
            ConfigError::InvalidPattern { .. } => ConfigErrorKind::InvalidPattern,
        }
    }
}
