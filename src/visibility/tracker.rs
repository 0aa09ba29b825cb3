//! Visibility tracking state machine.

use tracing::{debug, trace};

use super::config::{ObserverConfig, ObserverConfigError};
use super::host::{ObservationHost, ObserveError, TargetId, VisibilitySignal};
use super::record::VisibilityRecord;

/// Where a tracker is in its per-target lifecycle.
///
/// ```text
/// Unattached --attach--> Observing --first positive signal
///                            |        (freeze_once_visible)--> Frozen
///                            +--mirrors signals indefinitely otherwise
/// ```
///
/// `Frozen` is terminal for that target: the observation is released and
/// never re-registered. Attaching a different target re-enters `Observing`
/// under a fresh epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TrackerState {
    Unattached,
    Observing { target: TargetId },
    Frozen { target: TargetId },
}

/// Tracks visibility of one host element at a time.
///
/// Wraps a host-provided observation capability around a single target,
/// exposing the latest visibility boolean and an optional freeze-once
/// mode. Observations are scoped: every registration is released on
/// re-attach, freeze, detach, and drop, on every path, so the host is
/// never left with a dangling observation.
///
/// Signals are keyed by attachment epoch; a late callback from a
/// previously attached target is discarded by epoch mismatch rather than
/// relying on host delivery timing.
#[derive(Debug)]
pub struct VisibilityTracker<H: ObservationHost> {
    host: H,
    config: ObserverConfig,
    epoch: u64,
    state: TrackerState,
    record: VisibilityRecord,
}

impl<H: ObservationHost> VisibilityTracker<H> {
    /// Create a tracker over `host` with the given configuration.
    ///
    /// # Errors
    /// Returns [`ObserverConfigError`] if the configuration fails type
    /// validation.
    pub fn new(host: H, config: ObserverConfig) -> Result<Self, ObserverConfigError> {
        config.validate()?;
        Ok(Self {
            host,
            config,
            epoch: 0,
            state: TrackerState::Unattached,
            record: VisibilityRecord::default(),
        })
    }

    /// Construct with a configuration already known to be valid (the
    /// loaders build theirs from constants).
    pub(crate) fn with_valid_config(host: H, config: ObserverConfig) -> Self {
        debug_assert!(config.validate().is_ok());
        Self {
            host,
            config,
            epoch: 0,
            state: TrackerState::Unattached,
            record: VisibilityRecord::default(),
        }
    }

    /// The observation configuration this tracker was built with.
    pub fn config(&self) -> &ObserverConfig {
        &self.config
    }

    /// Current attachment epoch; bumped on every successful attach.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Latest observation record.
    pub fn record(&self) -> &VisibilityRecord {
        &self.record
    }

    /// Whether the current target was last reported intersecting.
    ///
    /// Stays true after a freeze: freezing only happens on a positive
    /// signal.
    pub fn is_visible(&self) -> bool {
        self.record.is_intersecting
    }

    /// Whether the tracker holds an active observation.
    pub fn is_observing(&self) -> bool {
        matches!(self.state, TrackerState::Observing { .. })
    }

    /// Whether the tracker has frozen on its current target.
    pub fn is_frozen(&self) -> bool {
        matches!(self.state, TrackerState::Frozen { .. })
    }

    /// Borrow the underlying host capability.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Attach (or re-attach) the tracker to `target`.
    ///
    /// Re-attaching the current target is a no-op, including while frozen
    /// (frozen is sticky per target). Attaching a different target first
    /// releases the prior observation, then registers the new one under a
    /// fresh epoch.
    ///
    /// # Errors
    /// Surfaces [`ObserveError`] from the host; the tracker is left
    /// `Unattached` (never half-attached) when registration fails.
    pub fn attach(&mut self, target: TargetId) -> Result<(), ObserveError> {
        match self.state {
            TrackerState::Observing { target: current } | TrackerState::Frozen { target: current }
                if current == target =>
            {
                return Ok(());
            }
            _ => {}
        }

        self.release_current();
        self.epoch += 1;
        self.record = VisibilityRecord::default();

        match self.host.observe(target, self.epoch, &self.config) {
            Ok(()) => {
                debug!(%target, epoch = self.epoch, "observation attached");
                self.state = TrackerState::Observing { target };
                self.record = VisibilityRecord::attached(target);
                Ok(())
            }
            Err(err) => {
                self.state = TrackerState::Unattached;
                Err(err)
            }
        }
    }

    /// Detach from the current target, releasing any active observation.
    pub fn detach(&mut self) {
        self.release_current();
        self.state = TrackerState::Unattached;
        self.record = VisibilityRecord::default();
    }

    /// Apply a visibility signal from the host.
    ///
    /// Returns `true` when the signal was applied. Signals are discarded
    /// when the tracker is not observing, or when the target or epoch does
    /// not match the current registration (a stale callback from an
    /// earlier attachment).
    pub fn on_signal(&mut self, signal: VisibilitySignal) -> bool {
        let target = match self.state {
            TrackerState::Observing { target } => target,
            _ => {
                trace!(target = %signal.target, "signal ignored: not observing");
                return false;
            }
        };
        if signal.target != target || signal.epoch != self.epoch {
            trace!(
                target = %signal.target,
                signal_epoch = signal.epoch,
                current_epoch = self.epoch,
                "stale signal discarded"
            );
            return false;
        }

        self.record.is_intersecting = signal.is_intersecting;
        if self.config.freeze_once_visible && signal.is_intersecting {
            self.host.unobserve(target);
            self.state = TrackerState::Frozen { target };
            self.record.frozen = true;
            debug!(%target, "tracker frozen after first visible");
        }
        true
    }

    fn release_current(&mut self) {
        if let TrackerState::Observing { target } = self.state {
            self.host.unobserve(target);
            debug!(%target, epoch = self.epoch, "observation released");
        }
        // Frozen targets already released their observation at freeze time.
    }
}

impl<H: ObservationHost> Drop for VisibilityTracker<H> {
    fn drop(&mut self) {
        self.release_current();
    }
}

#[cfg(test)]
#[path = "tracker_tests.rs"]
mod tracker_tests;
