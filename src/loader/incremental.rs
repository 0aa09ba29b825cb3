//! Pagination triggering gated on sentinel visibility.

use tracing::{debug, trace};

use crate::config::CoreConfig;
use crate::visibility::{
    ObservationHost, ObserveError, ObserverConfig, TargetId, Threshold, VisibilitySignal,
    VisibilityTracker,
};

/// Instruction to the caller to fetch the next page.
///
/// The caller runs its own asynchronous fetch and reports completion via
/// [`IncrementalLoader::complete`] with the same token; the in-flight
/// guard clears only then, never on a timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchRequest {
    /// Token identifying this fetch; echo it back on completion.
    pub token: u64,
}

/// Triggers pagination when a sentinel element becomes visible.
///
/// Composes a non-freezing [`VisibilityTracker`] with a `has_more` flag
/// and an in-flight guard. A fetch fires when a visibility-confirming
/// signal arrives while `has_more` is true and no fetch is outstanding.
/// Completion does not auto-fire the next fetch even if the sentinel is
/// still visible; the next signal does.
#[derive(Debug)]
pub struct IncrementalLoader<H: ObservationHost> {
    tracker: VisibilityTracker<H>,
    has_more: bool,
    in_flight: Option<u64>,
    next_token: u64,
}

impl<H: ObservationHost> IncrementalLoader<H> {
    /// Create a loader over `host` with the default root margin.
    pub fn new(host: H) -> Self {
        Self::with_root_margin(host, "0px")
    }

    /// Create a loader tuned by the embedding application's resolved
    /// configuration: `incremental_root_margin` is applied to the
    /// observation.
    pub fn with_config(host: H, config: &CoreConfig) -> Self {
        Self::with_root_margin(host, config.incremental_root_margin.clone())
    }

    /// Create a loader with a custom root margin (e.g. to fetch the next
    /// page before the sentinel fully scrolls into view).
    pub fn with_root_margin(host: H, root_margin: impl Into<String>) -> Self {
        let config = ObserverConfig {
            root: None,
            root_margin: root_margin.into(),
            threshold: Threshold::Ratio(0.0),
            freeze_once_visible: false,
        };
        Self {
            tracker: VisibilityTracker::with_valid_config(host, config),
            has_more: true,
            in_flight: None,
            next_token: 0,
        }
    }

    /// Whether more pages are believed to exist.
    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// Update the `has_more` flag (for callers that learn exhaustion out
    /// of band).
    pub fn set_has_more(&mut self, has_more: bool) {
        self.has_more = has_more;
    }

    /// Whether a fetch is currently outstanding.
    pub fn is_fetching(&self) -> bool {
        self.in_flight.is_some()
    }

    /// The composed visibility tracker.
    pub fn tracker(&self) -> &VisibilityTracker<H> {
        &self.tracker
    }

    /// Attach the sentinel element to observe.
    ///
    /// # Errors
    /// Surfaces [`ObserveError`] from the host capability.
    pub fn attach(&mut self, target: TargetId) -> Result<(), ObserveError> {
        self.tracker.attach(target)
    }

    /// Detach from the sentinel, releasing the observation.
    pub fn detach(&mut self) {
        self.tracker.detach();
    }

    /// Apply a visibility signal from the host.
    ///
    /// Returns a [`FetchRequest`] when the signal was applied, the
    /// sentinel is visible, `has_more` is true, and no fetch is already
    /// outstanding.
    pub fn on_signal(&mut self, signal: VisibilitySignal) -> Option<FetchRequest> {
        if !self.tracker.on_signal(signal) {
            return None;
        }
        if !self.tracker.is_visible() || !self.has_more || self.in_flight.is_some() {
            return None;
        }
        self.next_token += 1;
        let token = self.next_token;
        self.in_flight = Some(token);
        debug!(token, "pagination fetch started");
        Some(FetchRequest { token })
    }

    /// Report completion of the fetch identified by `token`.
    ///
    /// Clears the in-flight guard and records the caller's new `has_more`
    /// only for a matching token; a stale completion is discarded. Returns
    /// whether the completion was applied.
    pub fn complete(&mut self, token: u64, has_more: bool) -> bool {
        if self.in_flight == Some(token) {
            self.in_flight = None;
            self.has_more = has_more;
            debug!(token, has_more, "pagination fetch completed");
            true
        } else {
            trace!(token, "stale pagination completion discarded");
            false
        }
    }
}
