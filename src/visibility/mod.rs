//! Visibility observation layer.
//!
//! Wraps a host-provided visibility-observation capability (e.g. viewport
//! intersection detection) around one target element at a time, exposing a
//! boolean visibility signal and an optional freeze-after-first-visible
//! mode. Consumed by the [`loader`](crate::loader) module.
//!
//! # Module Structure
//!
//! - `host`: the [`ObservationHost`] seam, target ids, and signals
//! - `config`: pass-through observation configuration
//! - `record`: last-known observation state per target
//! - `tracker`: the `Unattached → Observing → Frozen` state machine

pub mod config;
pub mod host;
pub mod record;
pub mod tracker;

pub use config::{ObserverConfig, ObserverConfigError, Threshold};
pub use host::{ObservationHost, ObserveError, TargetId, VisibilitySignal};
pub use record::VisibilityRecord;
pub use tracker::VisibilityTracker;
