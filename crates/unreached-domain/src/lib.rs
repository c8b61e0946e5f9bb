//! Pure reachability diff (no IO).
//!
//! Input: a universe and a reached set computed elsewhere.
//! Output: the sorted list of unreached paths + summary counts.

#![forbid(unsafe_code)]

pub mod policy;
pub mod report;
pub mod trace;

mod diff;

pub use diff::diff;
pub use policy::Policy;
pub use report::{AuditData, DomainReport};
pub use trace::Trace;

#[cfg(test)]
mod proptest;
