//! Errors surfaced by layer hooks and the screen director.

use crate::slot::Category;
use thiserror::Error;

/// Errors that can occur while constructing or switching screens.
///
/// Destroying an empty slot, unsubscribing an absent handle, and a category
/// that is never constructed are not errors.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum InterceptError {
    /// A subscriber callback failed while its channel was being emitted.
    ///
    /// Emission stops at the failing callback; later subscribers are not run.
    #[error("{category} subscriber failed: {source}")]
    Subscriber {
        /// The channel being emitted.
        category: Category,
        /// The callback's own error.
        #[source]
        source: anyhow::Error,
    },

    /// The director was asked for a screen that was never registered.
    #[error("screen '{0}' is not registered")]
    UnknownScreen(String),
}

impl InterceptError {
    /// Returns a short stable label (snake_case) for use in logs.
    pub fn as_label(&self) -> &'static str {
        match self {
            InterceptError::Subscriber { .. } => "subscriber_failed",
            InterceptError::UnknownScreen(_) => "unknown_screen",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscriber_error_keeps_source() {
        let err = InterceptError::Subscriber {
            category: Category::Spriteset,
            source: anyhow::anyhow!("boom"),
        };
        assert_eq!(err.to_string(), "Spriteset subscriber failed: boom");
        assert_eq!(err.as_label(), "subscriber_failed");
        assert!(std::error::Error::source(&err).is_some());
    }
}
