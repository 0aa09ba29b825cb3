//! Seam to the host's visibility-observation capability.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::config::ObserverConfig;

/// Opaque identity of a host element under observation.
///
/// The host maps its own element handles to these ids; the core never
/// interprets them beyond equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TargetId(u64);

impl TargetId {
    /// Wrap a raw host-assigned id.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw id value.
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "target-{}", self.0)
    }
}

/// Errors surfaced when registering an observation with the host.
///
/// Attachment failures are reported to the attaching caller, never
/// swallowed into a silently-invisible tracker.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ObserveError {
    /// The host has no visibility-observation capability at all.
    #[error("visibility observation is unavailable in this host")]
    HostUnavailable,

    /// The host rejected this specific registration.
    #[error("host rejected observation of {target}: {reason}")]
    Rejected {
        /// The target that could not be observed.
        target: TargetId,
        /// Host-provided reason.
        reason: String,
    },
}

/// A visibility change reported by the host for one observed target.
///
/// Signals carry the attachment epoch they were registered under so a
/// stale callback from a previously attached target can be detected and
/// discarded by epoch mismatch (the host merely echoes the epoch it was
/// given at [`ObservationHost::observe`] time).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilitySignal {
    /// The observed target.
    pub target: TargetId,
    /// Attachment epoch the observation was registered under.
    pub epoch: u64,
    /// Whether the target currently intersects the observation region.
    pub is_intersecting: bool,
}

/// Host-provided visibility-observation capability.
///
/// The host registers an observation per target and later delivers
/// [`VisibilitySignal`]s to the owning tracker (asynchronously, from its
/// own event loop). Every `observe` is balanced by an `unobserve`: the
/// tracker releases observations on re-attach, freeze, detach, and drop.
pub trait ObservationHost {
    /// Start observing `target` under the given configuration.
    ///
    /// The `epoch` must be echoed back on every signal for this
    /// registration.
    ///
    /// # Errors
    /// Returns [`ObserveError`] if the capability is unavailable or the
    /// host rejects the registration.
    fn observe(
        &mut self,
        target: TargetId,
        epoch: u64,
        config: &ObserverConfig,
    ) -> Result<(), ObserveError>;

    /// Stop observing `target`. Must be idempotent.
    fn unobserve(&mut self, target: TargetId);
}
