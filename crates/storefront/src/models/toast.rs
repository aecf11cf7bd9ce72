//! One-shot notifications.
//!
//! A toast is queued in the session by the handler that performed an action
//! and shown, translated, by the next page that renders.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
}

/// A queued notification. `key` is a dictionary key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub kind: ToastKind,
    pub key: String,
}

impl Toast {
    #[must_use]
    pub fn success(key: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            key: key.into(),
        }
    }

    #[must_use]
    pub fn error(key: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            key: key.into(),
        }
    }

    /// CSS modifier for the toast element.
    #[must_use]
    pub const fn css_class(&self) -> &'static str {
        match self.kind {
            ToastKind::Success => "toast--success",
            ToastKind::Error => "toast--error",
        }
    }
}
