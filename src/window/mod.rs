//! Viewport windowing - deciding which items to materialize.
//!
//! Pure math over a validated [`Viewport`]: given the scroll offset and
//! geometry, [`compute`] returns the inclusive index [`Range`] to
//! materialize, a [`Placement`] per index, and the total scrollable extent.
//!
//! # Module Structure
//!
//! - `viewport`: validated geometry input ([`Viewport`], [`ViewportError`])
//! - `range`: materialization span and placements ([`Range`], [`Placement`])
//! - `calculator`: the window computation itself ([`Window`], [`compute`])

pub mod calculator;
pub mod range;
pub mod viewport;

pub use calculator::{compute, Window};
pub use range::{Placement, Range};
pub use viewport::{Viewport, ViewportError};
