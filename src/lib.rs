//! Viewport virtualization and event-notification core.
//!
//! UI-agnostic building blocks for hosts that render large item sets:
//!
//! - [`window`]: pure windowing math - which item indices to materialize
//!   for a scroll offset and geometry.
//! - [`visibility`]: a tracker over a host-provided visibility-observation
//!   capability, with freeze-once mode and stale-signal discard by
//!   attachment epoch.
//! - [`loader`]: visibility-gated consumers - lazy resource loading and
//!   incremental pagination - that hand I/O to the caller and reconcile
//!   completions by request token.
//! - [`notify`]: a buffering publish/subscribe channel carrying UI
//!   directives from producers to a single late-attaching host renderer.
//! - [`config`] / [`logging`]: optional TOML defaults and file-based
//!   tracing setup for embedding applications.
//!
//! The core is single-threaded and never blocks: all APIs take `&mut self`
//! and run to completion; asynchronous work (observation callbacks,
//! resource fetches, page fetches) lives in the host, which reports back
//! through signals and explicit completion calls.

pub mod config;
pub mod loader;
pub mod logging;
pub mod notify;
pub mod visibility;
pub mod window;
