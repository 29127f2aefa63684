//! Application services orchestrating domain logic and side effects.
pub mod signup;

/// Convenience alias for service results.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors surfaced by service operations.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("invalid form input: {0}")]
    Validation(String),
    #[error("webhook returned status {0}")]
    WebhookStatus(reqwest::StatusCode),
    #[error("failed to deliver signup to webhook")]
    WebhookDelivery(#[source] reqwest::Error),
}
