//! Deferred resource loading gated on visibility.

use thiserror::Error;
use tracing::{debug, trace};

use crate::config::CoreConfig;
use crate::visibility::{
    ObservationHost, ObserveError, ObserverConfig, TargetId, Threshold, VisibilitySignal,
    VisibilityTracker,
};

/// Failure reported by the caller for one load attempt.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("resource load failed: {reason}")]
pub struct LoadFailure {
    /// Caller-provided description of the failure.
    pub reason: String,
}

impl LoadFailure {
    /// Wrap a failure reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Lifecycle of the current resource's load.
///
/// `Idle → Loading → Loaded | Errored`; the `Idle → Loading` transition
/// fires exactly once per resource identifier. `Errored` is terminal per
/// attempt: retry is a caller decision, never automatic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// No load has been requested for the current resource.
    Idle,
    /// A load is outstanding, identified by its request token.
    Loading {
        /// Token the eventual completion must match.
        token: u64,
    },
    /// The current resource loaded successfully.
    Loaded,
    /// The current resource failed to load.
    Errored(LoadFailure),
}

/// Instruction to the caller to start fetching a resource.
///
/// The core performs no I/O; the caller runs the fetch and reports the
/// outcome via [`LazyResourceLoader::complete`] with the same token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    /// Token identifying this attempt; echo it back on completion.
    pub token: u64,
    /// The resource to fetch.
    pub resource: String,
}

/// Defers fetching a remote resource until its placeholder is visible.
///
/// Composes a freeze-once [`VisibilityTracker`] (any visible pixel
/// triggers) with a resource identifier. Load attempts are tagged with a
/// monotonically increasing request token; a completion is applied only
/// when its token matches the outstanding one, so a stale load finishing
/// after the resource changed cannot overwrite state for the new resource.
#[derive(Debug)]
pub struct LazyResourceLoader<H: ObservationHost> {
    tracker: VisibilityTracker<H>,
    resource: Option<String>,
    state: LoadState,
    next_token: u64,
}

impl<H: ObservationHost> LazyResourceLoader<H> {
    /// Create a loader over `host` with the default root margin.
    pub fn new(host: H) -> Self {
        Self::with_root_margin(host, "0px")
    }

    /// Create a loader with a custom root margin (e.g. to start fetching
    /// shortly before the placeholder scrolls into view).
    pub fn with_root_margin(host: H, root_margin: impl Into<String>) -> Self {
        Self::with_observer(host, root_margin.into(), Threshold::Ratio(0.0))
    }

    /// Create a loader tuned by the embedding application's resolved
    /// configuration: `lazy_root_margin` and `lazy_threshold` are applied
    /// to the observation. Threshold range is enforced when the config is
    /// resolved, see [`merge_config`](crate::config::merge_config).
    pub fn with_config(host: H, config: &CoreConfig) -> Self {
        Self::with_observer(
            host,
            config.lazy_root_margin.clone(),
            Threshold::Ratio(config.lazy_threshold),
        )
    }

    fn with_observer(host: H, root_margin: String, threshold: Threshold) -> Self {
        let config = ObserverConfig {
            root: None,
            root_margin,
            threshold,
            freeze_once_visible: true,
        };
        Self {
            tracker: VisibilityTracker::with_valid_config(host, config),
            resource: None,
            state: LoadState::Idle,
            next_token: 0,
        }
    }

    /// Current load state.
    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// The resource identifier currently configured, if any.
    pub fn resource(&self) -> Option<&str> {
        self.resource.as_deref()
    }

    /// The composed visibility tracker.
    pub fn tracker(&self) -> &VisibilityTracker<H> {
        &self.tracker
    }

    /// Attach the placeholder element to observe.
    ///
    /// # Errors
    /// Surfaces [`ObserveError`] from the host capability.
    pub fn attach(&mut self, target: TargetId) -> Result<(), ObserveError> {
        self.tracker.attach(target)
    }

    /// Detach from the placeholder, releasing the observation.
    pub fn detach(&mut self) {
        self.tracker.detach();
    }

    /// Set (or replace) the resource identifier.
    ///
    /// Replacing the identifier resets the load state to `Idle`; an
    /// outstanding load for the previous identifier keeps its token, which
    /// no longer matches, so its completion will be discarded. If the
    /// placeholder is already visible the next load begins immediately and
    /// the request is returned.
    pub fn set_resource(&mut self, resource: impl Into<String>) -> Option<LoadRequest> {
        let resource = resource.into();
        if self.resource.as_deref() == Some(resource.as_str()) {
            return None;
        }
        self.resource = Some(resource);
        self.state = LoadState::Idle;
        self.try_begin()
    }

    /// Apply a visibility signal from the host.
    ///
    /// Returns a [`LoadRequest`] when this signal makes the load gate pass
    /// (visible, resource set, state `Idle`).
    pub fn on_signal(&mut self, signal: VisibilitySignal) -> Option<LoadRequest> {
        self.tracker.on_signal(signal);
        self.try_begin()
    }

    /// Report the outcome of the load attempt identified by `token`.
    ///
    /// A completion whose token does not match the outstanding attempt is
    /// discarded: it belongs to a previous resource identifier.
    pub fn complete(&mut self, token: u64, outcome: Result<(), LoadFailure>) {
        match self.state {
            LoadState::Loading { token: current } if current == token => {
                self.state = match outcome {
                    Ok(()) => LoadState::Loaded,
                    Err(failure) => LoadState::Errored(failure),
                };
                debug!(token, state = ?self.state, "load attempt completed");
            }
            _ => {
                trace!(token, "stale load completion discarded");
            }
        }
    }

    fn try_begin(&mut self) -> Option<LoadRequest> {
        if self.state != LoadState::Idle || !self.tracker.is_visible() {
            return None;
        }
        let resource = self.resource.clone()?;
        self.next_token += 1;
        let token = self.next_token;
        self.state = LoadState::Loading { token };
        debug!(token, %resource, "load attempt started");
        Some(LoadRequest { token, resource })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visibility::ObserverConfig;

    #[derive(Debug, Default)]
    struct NullHost;

    impl ObservationHost for NullHost {
        fn observe(
            &mut self,
            _target: TargetId,
            _epoch: u64,
            _config: &ObserverConfig,
        ) -> Result<(), ObserveError> {
            Ok(())
        }

        fn unobserve(&mut self, _target: TargetId) {}
    }

    fn visible_loader() -> LazyResourceLoader<NullHost> {
        let mut loader = LazyResourceLoader::new(NullHost);
        loader.attach(TargetId::new(1)).unwrap();
        loader.on_signal(VisibilitySignal {
            target: TargetId::new(1),
            epoch: loader.tracker().epoch(),
            is_intersecting: true,
        });
        loader
    }

    #[test]
    fn tracker_is_configured_to_freeze_on_first_visible() {
        let loader = LazyResourceLoader::new(NullHost);
        assert!(loader.tracker().config().freeze_once_visible);
        assert_eq!(loader.tracker().config().threshold, Threshold::Ratio(0.0));
    }

    #[test]
    fn with_config_applies_lazy_threshold_and_margin() {
        let config = CoreConfig {
            lazy_threshold: 0.4,
            lazy_root_margin: "200px".to_string(),
            ..CoreConfig::default()
        };
        let loader = LazyResourceLoader::with_config(NullHost, &config);
        assert_eq!(loader.tracker().config().threshold, Threshold::Ratio(0.4));
        assert_eq!(loader.tracker().config().root_margin, "200px");
        assert!(loader.tracker().config().freeze_once_visible);
    }

    #[test]
    fn no_request_while_placeholder_invisible() {
        let mut loader = LazyResourceLoader::new(NullHost);
        loader.attach(TargetId::new(1)).unwrap();
        assert_eq!(loader.set_resource("img://a"), None);
        assert_eq!(*loader.state(), LoadState::Idle);
    }

    #[test]
    fn visibility_with_resource_starts_exactly_one_load() {
        let mut loader = LazyResourceLoader::new(NullHost);
        loader.attach(TargetId::new(1)).unwrap();
        loader.set_resource("img://a");

        let epoch = loader.tracker().epoch();
        let request = loader
            .on_signal(VisibilitySignal {
                target: TargetId::new(1),
                epoch,
                is_intersecting: true,
            })
            .expect("gate should pass");
        assert_eq!(request.resource, "img://a");
        assert_eq!(*loader.state(), LoadState::Loading { token: request.token });
    }

    #[test]
    fn set_resource_on_visible_placeholder_begins_immediately() {
        let mut loader = visible_loader();
        let request = loader.set_resource("img://a").expect("already visible");
        assert_eq!(request.resource, "img://a");
    }

    #[test]
    fn setting_same_resource_again_is_a_noop() {
        let mut loader = visible_loader();
        let request = loader.set_resource("img://a").unwrap();
        loader.complete(request.token, Ok(()));
        assert_eq!(loader.set_resource("img://a"), None);
        assert_eq!(*loader.state(), LoadState::Loaded);
    }

    #[test]
    fn successful_completion_reaches_loaded() {
        let mut loader = visible_loader();
        let request = loader.set_resource("img://a").unwrap();
        loader.complete(request.token, Ok(()));
        assert_eq!(*loader.state(), LoadState::Loaded);
    }

    #[test]
    fn failed_completion_reaches_errored_without_retry() {
        let mut loader = visible_loader();
        let request = loader.set_resource("img://a").unwrap();
        loader.complete(request.token, Err(LoadFailure::new("404")));
        assert_eq!(
            *loader.state(),
            LoadState::Errored(LoadFailure::new("404"))
        );

        // Another visibility signal must not restart the attempt.
        let epoch = loader.tracker().epoch();
        assert_eq!(
            loader.on_signal(VisibilitySignal {
                target: TargetId::new(1),
                epoch,
                is_intersecting: true,
            }),
            None
        );
    }

    #[test]
    fn stale_completion_for_replaced_resource_is_discarded() {
        let mut loader = visible_loader();
        let first = loader.set_resource("img://a").unwrap();
        let second = loader.set_resource("img://b").unwrap();
        assert_ne!(first.token, second.token);

        // The fetch for img://a finishes after the switch.
        loader.complete(first.token, Ok(()));
        assert_eq!(
            *loader.state(),
            LoadState::Loading {
                token: second.token
            }
        );

        loader.complete(second.token, Ok(()));
        assert_eq!(*loader.state(), LoadState::Loaded);
    }

    #[test]
    fn tokens_increase_monotonically() {
        let mut loader = visible_loader();
        let a = loader.set_resource("img://a").unwrap();
        let b = loader.set_resource("img://b").unwrap();
        let c = loader.set_resource("img://c").unwrap();
        assert!(a.token < b.token && b.token < c.token);
    }
}
