use std::time::Duration;

/// Complete auth configuration.
///
/// Constructed once at startup and handed to [`AuthService`]; nothing in
/// the request path reads the environment.
///
/// [`AuthService`]: crate::AuthService
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HS256 signing secret.
    pub secret: String,
    /// Lifetime of issued tokens.
    pub token_ttl: Duration,
    /// Username accepted by the login endpoint.
    pub admin_username: String,
    /// Password accepted by the login endpoint.
    pub admin_password: String,
}

impl AuthConfig {
    /// Load from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `JWT_SECRET`: HS256 signing secret (required)
    /// - `TOKEN_TTL_HOURS`: token lifetime in hours (default: 24)
    /// - `ADMIN_USERNAME`: login username (required)
    /// - `ADMIN_PASSWORD`: login password (required)
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Config`] when a required variable is missing
    /// or empty.
    ///
    /// [`AuthError::Config`]: crate::AuthError::Config
    pub fn from_env() -> Result<Self, crate::AuthError> {
        let secret = require_var("JWT_SECRET")?;
        let admin_username = require_var("ADMIN_USERNAME")?;
        let admin_password = require_var("ADMIN_PASSWORD")?;

        let token_ttl_hours = std::env::var("TOKEN_TTL_HOURS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(24);

        Ok(Self {
            secret,
            token_ttl: Duration::from_secs(token_ttl_hours * 60 * 60),
            admin_username,
            admin_password,
        })
    }
}

fn require_var(name: &'static str) -> Result<String, crate::AuthError> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(crate::AuthError::Config(format!("{name} not set"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_ttl_default() {
        let config = AuthConfig {
            secret: "secret".to_string(),
            token_ttl: Duration::from_secs(24 * 60 * 60),
            admin_username: "admin".to_string(),
            admin_password: "password".to_string(),
        };
        assert_eq!(config.token_ttl.as_secs(), 86_400);
    }
}
