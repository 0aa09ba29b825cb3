//! Last-known observation state for a tracked target.

use super::host::TargetId;

/// Snapshot of the tracker's view of its current target.
///
/// # Lifecycle
/// Created (reset) when a target is attached. `is_intersecting` is mutated
/// only by observation signals. `frozen` becomes true exactly once,
/// irreversibly, when freeze-once is enabled and visibility first turns
/// true; it resets only by attaching a different target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisibilityRecord {
    /// The target this record describes; `None` while unattached.
    pub target: Option<TargetId>,
    /// Latest intersection state reported by the host.
    pub is_intersecting: bool,
    /// Whether the tracker has frozen on this target.
    pub frozen: bool,
}

impl VisibilityRecord {
    /// Fresh record for a newly attached target (not yet intersecting).
    pub fn attached(target: TargetId) -> Self {
        Self {
            target: Some(target),
            is_intersecting: false,
            frozen: false,
        }
    }
}
