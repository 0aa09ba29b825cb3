//! Buffering publish/subscribe channel for UI directives.

use std::collections::VecDeque;
use std::fmt;

use thiserror::Error;
use tracing::{debug, trace, warn};

use super::message::{BusMessage, Directive, DirectiveKind};

/// Failure reported by a subscriber callback during delivery.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("subscriber failed: {reason}")]
pub struct SubscriberError {
    /// Subscriber-provided description of the failure.
    pub reason: String,
}

impl SubscriberError {
    /// Wrap a failure reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Handle identifying a registered subscriber; pass to
/// [`NotificationBus::unsubscribe`] to dispose the registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

type Callback = Box<dyn FnMut(&BusMessage) -> Result<(), SubscriberError>>;

/// Observability hook for isolated subscriber failures.
pub type DiagnosticSink = Box<dyn FnMut(SubscriberId, &SubscriberError)>;

/// Buffering publish/subscribe channel decoupling directive producers from
/// a single late-attaching UI host.
///
/// An explicit service object with a defined lifecycle: construct it once,
/// hand it to producers and to the host subscriber; drop it to tear the
/// channel down. There is no global instance.
///
/// Messages published while no subscriber is registered accumulate in an
/// ordered, unbounded buffer and are flushed, in publish order, to the
/// first subscriber that attaches. Messages published while subscribers
/// exist are delivered synchronously to exactly those subscribers; late
/// joiners never see them. A message is thus either buffered or delivered
/// exactly once to every subscriber present at publish time, never both
/// and never neither.
///
/// Subscriber failures are isolated by design: a callback returning `Err`
/// is reported to the optional [`DiagnosticSink`] and a `tracing` warning,
/// delivery continues to the remaining subscribers, and the publisher
/// never sees the failure.
pub struct NotificationBus {
    subscribers: Vec<(SubscriberId, Callback)>,
    buffer: VecDeque<BusMessage>,
    next_subscriber: u64,
    next_loading_key: u64,
    diagnostics: Option<DiagnosticSink>,
}

impl fmt::Debug for NotificationBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationBus")
            .field("subscribers", &self.subscribers.len())
            .field("buffered", &self.buffer.len())
            .finish_non_exhaustive()
    }
}

impl Default for NotificationBus {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationBus {
    /// Create an empty bus: no subscribers, empty buffer.
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
            buffer: VecDeque::new(),
            next_subscriber: 0,
            next_loading_key: 0,
            diagnostics: None,
        }
    }

    /// Install an observability hook for isolated subscriber failures.
    ///
    /// Isolation itself is unconditional; the sink only makes the
    /// swallowed failures observable.
    pub fn set_diagnostics(&mut self, sink: DiagnosticSink) {
        self.diagnostics = Some(sink);
    }

    /// Number of registered subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Number of messages waiting for the first subscriber.
    pub fn buffered_count(&self) -> usize {
        self.buffer.len()
    }

    /// Register `callback` and flush any buffered messages to it.
    ///
    /// If the buffer is non-empty at this moment, every buffered message
    /// is delivered to `callback` in original publish order and the buffer
    /// is cleared; the flush happens once, for the first subscriber to
    /// attach after the buffer accumulated. Returns the id to pass to
    /// [`unsubscribe`](Self::unsubscribe).
    pub fn subscribe(
        &mut self,
        callback: impl FnMut(&BusMessage) -> Result<(), SubscriberError> + 'static,
    ) -> SubscriberId {
        self.next_subscriber += 1;
        let id = SubscriberId(self.next_subscriber);
        let mut callback: Callback = Box::new(callback);

        if !self.buffer.is_empty() {
            debug!(count = self.buffer.len(), "flushing buffer to first subscriber");
            let pending: Vec<BusMessage> = self.buffer.drain(..).collect();
            for message in &pending {
                if let Err(err) = callback(message) {
                    warn!(subscriber = id.0, %err, "subscriber failed during flush");
                    if let Some(sink) = self.diagnostics.as_mut() {
                        sink(id, &err);
                    }
                }
            }
        }

        self.subscribers.push((id, callback));
        id
    }

    /// Remove a subscriber. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// Publish a message to the current subscribers, or buffer it.
    ///
    /// With no subscribers, the message is appended to the buffer. The
    /// buffer is unbounded: a producer that publishes long before any
    /// subscriber attaches accumulates messages indefinitely, so a host
    /// that never subscribes leaks them (no cap or TTL is applied).
    ///
    /// With subscribers, the message is delivered synchronously to every
    /// currently-registered subscriber as one broadcast frame, in
    /// registration order; subscribers added afterwards do not receive it.
    pub fn publish(&mut self, message: BusMessage) {
        if self.subscribers.is_empty() {
            self.buffer.push_back(message);
            debug!(buffered = self.buffer.len(), "no subscribers; message buffered");
            return;
        }

        trace!(subscribers = self.subscribers.len(), "broadcasting message");
        let diagnostics = &mut self.diagnostics;
        for (id, callback) in &mut self.subscribers {
            if let Err(err) = callback(&message) {
                warn!(subscriber = id.0, %err, "subscriber failed; delivery continues");
                if let Some(sink) = diagnostics.as_mut() {
                    sink(*id, &err);
                }
            }
        }
    }

    /// Publish a success directive.
    pub fn success(&mut self, message: impl Into<String>) {
        self.open(Directive::new(DirectiveKind::Success, message));
    }

    /// Publish an error directive.
    pub fn error(&mut self, message: impl Into<String>) {
        self.open(Directive::new(DirectiveKind::Error, message));
    }

    /// Publish an info directive.
    pub fn info(&mut self, message: impl Into<String>) {
        self.open(Directive::new(DirectiveKind::Info, message));
    }

    /// Publish a warning directive.
    pub fn warning(&mut self, message: impl Into<String>) {
        self.open(Directive::new(DirectiveKind::Warning, message));
    }

    /// Publish a loading directive and return its key.
    ///
    /// When `key` is `None`, a key of the form `loading-{n}` is assigned
    /// from a per-bus monotonically increasing counter (collision-free for
    /// the lifetime of the bus) so the caller can later issue a matching
    /// [`destroy`](Self::destroy).
    pub fn loading(&mut self, message: impl Into<String>, key: Option<String>) -> String {
        let key = key.unwrap_or_else(|| {
            self.next_loading_key += 1;
            format!("loading-{}", self.next_loading_key)
        });
        self.open(Directive::new(DirectiveKind::Loading, message).with_key(key.clone()));
        key
    }

    /// Publish a destroy message for `key` (`None` dismisses all).
    pub fn destroy(&mut self, key: Option<String>) {
        self.publish(BusMessage::Destroy { key });
    }

    fn open(&mut self, directive: Directive) {
        self.publish(BusMessage::Open { directive });
    }
}

#[cfg(test)]
#[path = "bus_tests.rs"]
mod bus_tests;
