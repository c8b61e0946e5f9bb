use serde::Serialize;

/// Summary counts for one audit run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AuditData {
    pub universe_total: u32,
    pub reached_total: u32,
    pub unreached_total: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DomainReport {
    /// Unreached files, relative to the working directory, sorted and deduplicated.
    pub unreached: Vec<String>,
    pub data: AuditData,
}
