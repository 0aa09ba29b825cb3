//! Visibility-gated loading consumers.
//!
//! Both consumers compose a [`VisibilityTracker`](crate::visibility::VisibilityTracker)
//! and keep the core free of I/O: they hand the caller a request value and
//! are told about completion explicitly, with token matching to discard
//! stale results.
//!
//! # Module Structure
//!
//! - `lazy`: defer a resource fetch until its placeholder is visible
//! - `incremental`: trigger pagination when a sentinel is visible

pub mod incremental;
pub mod lazy;

pub use incremental::{FetchRequest, IncrementalLoader};
pub use lazy::{LazyResourceLoader, LoadFailure, LoadRequest, LoadState};
