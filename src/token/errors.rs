use thiserror::Error;

/// Error type for token issuance.
///
/// Verification has no error type: every verification failure collapses to
/// `None` so callers cannot distinguish an expired token from a forged one.
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),
}
