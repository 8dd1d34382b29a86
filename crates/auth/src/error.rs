use thiserror::Error;

/// Auth errors for the weathervane_auth crate.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Username/password did not match the configured credentials.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Token failed signature, claim, or expiry validation.
    #[error("invalid or expired token: {0}")]
    InvalidToken(String),

    /// Token could not be signed.
    #[error("failed to issue token: {0}")]
    TokenIssue(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}
