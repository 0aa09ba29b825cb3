//! Decoupled UI notification channel.
//!
//! Producers anywhere in the application publish display directives before
//! any consumer exists; the single host renderer attaches later and
//! receives the backlog in order. See [`NotificationBus`].
//!
//! # Module Structure
//!
//! - `message`: the [`BusMessage`] tagged union and [`Directive`] payload
//! - `bus`: the buffering publish/subscribe service object

pub mod bus;
pub mod message;

pub use bus::{DiagnosticSink, NotificationBus, SubscriberError, SubscriberId};
pub use message::{BusMessage, Directive, DirectiveKind};
