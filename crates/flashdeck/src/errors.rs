//! Shared error types for the flashdeck client.

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("Failed to install tracing-subscriber")]
    TracingSubscriber(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Problems caught locally, before any request leaves the page.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Set name is required")]
    NameRequired,
    #[error("Not signed in")]
    AuthRequired,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to write {key}: {reason}")]
    Write { key: &'static str, reason: String },
}
