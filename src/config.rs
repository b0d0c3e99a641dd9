use std::fmt;
use std::time::Duration;

/// The Newsletter2Go API host every endpoint is relative to.
pub const BASE_URL: &str = "https://api.newsletter2go.com";

/// Connection-level settings for a [`Client`](crate::Client).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Prefixed to every endpoint, without a trailing slash.
    pub base_url: String,
    /// Overall request timeout. `None` waits for as long as the server takes.
    pub timeout: Option<Duration>,
    /// Whether TLS certificates and host names are verified.
    pub ssl_verification: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            timeout: None,
            ssl_verification: true,
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Points the client at a different host, e.g. a local mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Skips both peer certificate and host name checks.
    ///
    /// This exists for debugging against intercepting proxies only.
    /// Never ship it enabled.
    pub fn danger_disable_ssl_verification(mut self) -> Self {
        self.ssl_verification = false;
        self
    }
}

/// The account credentials handed to us by the embedding application.
#[derive(Clone)]
pub struct Credentials {
    /// The API auth key, sent as HTTP Basic when obtaining tokens.
    pub auth_key: String,
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(
        auth_key: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            auth_key: auth_key.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("auth_key", &"<redacted>")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_verify_ssl_against_production() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://api.newsletter2go.com");
        assert!(config.ssl_verification);
        assert!(config.timeout.is_none());
    }

    #[test]
    fn base_url_drops_trailing_slash() {
        let config = ClientConfig::new().with_base_url("http://127.0.0.1:8080/");
        assert_eq!(config.base_url, "http://127.0.0.1:8080");
    }

    #[test]
    fn credentials_debug_hides_secrets() {
        let credentials = Credentials::new("key-123", "me@example.com", "hunter2");
        let printed = format!("{credentials:?}");
        assert!(printed.contains("me@example.com"));
        assert!(!printed.contains("key-123"));
        assert!(!printed.contains("hunter2"));
    }
}
