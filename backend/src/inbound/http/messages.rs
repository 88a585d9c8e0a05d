//! Message catalogue for error titles.
//!
//! Error codes resolve to human-readable titles through a [`MessageSource`]
//! so deployments can override the wording without touching the mapper.

use std::collections::HashMap;

/// Code reported for a violation tied to a single field.
pub const INVALID_FIELD: &str = "error.invalidField";
/// Code reported for a violation of the document as a whole.
pub const INVALID_OBJECT: &str = "error.invalidObject";

/// Lookup of localized messages by code.
#[cfg_attr(test, mockall::automock)]
pub trait MessageSource: Send + Sync {
    /// Message registered for `code`, if any.
    fn lookup(&self, code: &str) -> Option<String>;
}

/// Message for `code` from `source`, falling back to `default`.
pub fn message_or(source: &dyn MessageSource, code: &str, default: &str) -> String {
    source.lookup(code).unwrap_or_else(|| default.to_owned())
}

/// In-memory catalogue seeded with the built-in titles.
///
/// # Examples
/// ```
/// use directory_backend::inbound::http::messages::{MessageSource, StaticMessages, message_or};
///
/// let messages = StaticMessages::default().with("error.invalidField", "Bad field");
/// assert_eq!(messages.lookup("error.invalidField").as_deref(), Some("Bad field"));
/// assert_eq!(message_or(&messages, "error.unknown", "Fallback"), "Fallback");
/// ```
#[derive(Debug, Clone)]
pub struct StaticMessages {
    entries: HashMap<String, String>,
}

impl StaticMessages {
    /// Catalogue without any entries.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register or replace the message for `code`.
    #[must_use]
    pub fn with(mut self, code: impl Into<String>, message: impl Into<String>) -> Self {
        self.entries.insert(code.into(), message.into());
        self
    }
}

impl Default for StaticMessages {
    fn default() -> Self {
        Self::empty()
            .with(INVALID_FIELD, "Invalid Field")
            .with(INVALID_OBJECT, "Invalid Object")
    }
}

impl MessageSource for StaticMessages {
    fn lookup(&self, code: &str) -> Option<String> {
        self.entries.get(code).cloned()
    }
}
