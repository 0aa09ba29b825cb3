//! Bus message and display-directive types.

use serde::{Deserialize, Serialize};

/// Category of a display directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectiveKind {
    /// Positive completion notice.
    Success,
    /// Failure notice.
    Error,
    /// Neutral information.
    Info,
    /// Cautionary notice.
    Warning,
    /// Long-running operation indicator; dismissed by a matching destroy.
    Loading,
}

/// Payload of a [`BusMessage::Open`]: what the host renderer should show.
///
/// `options` is an opaque pass-through for host-specific presentation
/// settings (duration, placement, icon); the core never interprets it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Directive {
    /// Directive category.
    pub kind: DirectiveKind,
    /// Text the host should display.
    pub message: String,
    /// Identifier for later dismissal via [`BusMessage::Destroy`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Host-specific presentation options, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<serde_json::Value>,
}

impl Directive {
    /// Create a directive with no key and no options.
    pub fn new(kind: DirectiveKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            key: None,
            options: None,
        }
    }

    /// Attach a dismissal key.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Attach host-specific presentation options.
    pub fn with_options(mut self, options: serde_json::Value) -> Self {
        self.options = Some(options);
        self
    }
}

/// A UI directive carried by the notification bus.
///
/// Messages carry no timestamp; delivery order is publish call order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BusMessage {
    /// Show a directive.
    Open {
        /// What to display.
        directive: Directive,
    },
    /// Dismiss a previously opened directive.
    Destroy {
        /// Key of the directive to dismiss; `None` dismisses all.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        key: Option<String>,
    },
}
