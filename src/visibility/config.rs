//! Observation configuration passed through to the host capability.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::host::TargetId;

/// Errors raised when an observer configuration fails type validation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ObserverConfigError {
    /// A threshold value was NaN or infinite.
    #[error("threshold values must be finite, got {0}")]
    NonFiniteThreshold(f64),
}

/// Intersection threshold: a single ratio or an ordered sequence of them.
///
/// Values are passed through to the host; the core validates type only
/// (finite numbers), not range semantics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Threshold {
    /// A single intersection ratio.
    Ratio(f64),
    /// An ordered sequence of intersection ratios.
    Steps(Vec<f64>),
}

impl Default for Threshold {
    fn default() -> Self {
        Self::Ratio(0.0)
    }
}

impl Threshold {
    fn validate(&self) -> Result<(), ObserverConfigError> {
        let check = |v: f64| {
            if v.is_finite() {
                Ok(())
            } else {
                Err(ObserverConfigError::NonFiniteThreshold(v))
            }
        };
        match self {
            Threshold::Ratio(v) => check(*v),
            Threshold::Steps(values) => values.iter().copied().try_for_each(check),
        }
    }
}

/// Configuration for one visibility observation.
///
/// A structural pass-through to the host capability: `root`, `root_margin`
/// and `threshold` are forwarded verbatim. `freeze_once_visible` is
/// interpreted by the tracker itself (see
/// [`VisibilityTracker`](super::VisibilityTracker)).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObserverConfig {
    /// Observation root element; `None` means the host viewport.
    pub root: Option<TargetId>,
    /// Margin string applied around the root (host syntax, e.g. `"0px"`).
    pub root_margin: String,
    /// Intersection threshold(s).
    pub threshold: Threshold,
    /// Stop observing permanently after the first positive signal.
    pub freeze_once_visible: bool,
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            root: None,
            root_margin: "0px".to_string(),
            threshold: Threshold::default(),
            freeze_once_visible: false,
        }
    }
}

impl ObserverConfig {
    /// Validate the configuration (type-level only).
    ///
    /// # Errors
    /// Returns [`ObserverConfigError`] for non-finite threshold values.
    pub fn validate(&self) -> Result<(), ObserverConfigError> {
        self.threshold.validate()
    }
}
