//! Opt-in debug tracing of intermediate values.
//!
//! The on/off switch comes from [`Policy::debug_enabled`] and travels with each call as a
//! `Trace` value. Events go to the `tracing` target [`TRACE_TARGET`] at INFO level so they show
//! up under a default subscriber once the policy asks for them.

use std::fmt::Debug;

use unreached_types::FileSet;

use crate::Policy;

pub const TRACE_TARGET: &str = "unreached::trace";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Trace {
    enabled: bool,
}

impl Trace {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn disabled() -> Self {
        Self::new(false)
    }

    pub fn from_policy(policy: &Policy) -> Self {
        Self::new(policy.debug_enabled())
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn value<T: Debug + ?Sized>(&self, label: &str, value: &T) {
        if self.enabled {
            tracing::info!(target: TRACE_TARGET, label, value = ?value);
        }
    }

    pub fn set(&self, label: &str, set: &FileSet) {
        if self.enabled {
            let paths: Vec<&str> = set.iter().map(|p| p.as_str()).collect();
            tracing::info!(target: TRACE_TARGET, label, count = set.len(), value = ?paths);
        }
    }

    pub fn list(&self, label: &str, items: &[String]) {
        if self.enabled {
            tracing::info!(target: TRACE_TARGET, label, count = items.len(), value = ?items);
        }
    }
}
