use thiserror::Error;

/// Errors that can occur when calling the external weather provider.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("Provider request failed: {0}")]
    RequestFailed(String),
    #[error("Provider returned status {0}")]
    BadStatus(u16),
    #[error("Invalid provider response: {0}")]
    InvalidResponse(String),
}

/// Result type for provider operations.
pub type Result<T> = std::result::Result<T, ProviderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_failed_display() {
        let error = ProviderError::RequestFailed("connection refused".to_string());
        assert_eq!(
            error.to_string(),
            "Provider request failed: connection refused"
        );
    }

    #[test]
    fn test_bad_status_display() {
        let error = ProviderError::BadStatus(502);
        assert_eq!(error.to_string(), "Provider returned status 502");
    }

    #[test]
    fn test_invalid_response_display() {
        let error = ProviderError::InvalidResponse("missing weather description".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid provider response: missing weather description"
        );
    }
}
