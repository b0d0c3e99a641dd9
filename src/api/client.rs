use serde_json::Value;
use tokio::sync::Mutex;
use tracing::{debug, instrument};

use super::http_client::{HttpClient, HttpVerb, Payload};
use crate::{
    config::{ClientConfig, Credentials},
    error::{Newsletter2GoError, Result},
    oauth::{self, TokenPair},
};

/// A client for the Newsletter2Go REST API.
///
/// Tokens are obtained lazily on the first authenticated call and reused afterwards.
/// They are only held in memory.
#[derive(Debug)]
pub struct Client {
    credentials: Credentials,
    http: HttpClient,
    /// Held across the "empty, so authenticate" check so that concurrent
    /// callers sharing one client only ever trigger a single token request.
    tokens: Mutex<TokenPair>,
}

impl Client {
    /// Creates a client for the production API. No request is made yet.
    pub fn new(
        auth_key: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self> {
        Self::with_config(
            Credentials::new(auth_key, email, password),
            ClientConfig::default(),
        )
    }

    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        Ok(Self {
            credentials,
            http: HttpClient::new(config)?,
            tokens: Mutex::new(TokenPair::default()),
        })
    }

    /// Obtains a fresh token pair right away instead of waiting for the first call.
    ///
    /// A response without tokens is not an error here; the next authenticated
    /// call will retry and fail with [`Newsletter2GoError::AuthenticationFailed`].
    #[instrument(skip(self))]
    pub async fn auth(&self) -> Result<()> {
        let mut tokens = self.tokens.lock().await;
        *tokens = oauth::obtain_access_token(&self.http, &self.credentials).await?;
        Ok(())
    }

    /// Turns TLS certificate and host name verification on or off.
    ///
    /// Disabling it is only meant for debugging behind intercepting proxies.
    pub fn set_ssl_verification(&mut self, enable: bool) -> Result<()> {
        let mut config = self.http.config().clone();
        config.ssl_verification = enable;
        self.http = HttpClient::new(config)?;
        Ok(())
    }

    pub fn ssl_verification(&self) -> bool {
        self.http.config().ssl_verification
    }

    /// A snapshot of the currently held tokens.
    pub async fn tokens(&self) -> TokenPair {
        self.tokens.lock().await.clone()
    }

    /// Performs an authenticated call against any endpoint.
    ///
    /// Every resource method funnels through here. If no access token is held yet,
    /// one is obtained first; the refresh token is never used for this.
    #[instrument(skip(self, payload))]
    pub async fn request(&self, endpoint: &str, payload: &Payload, verb: HttpVerb) -> Result<Value> {
        let access_token = {
            let mut tokens = self.tokens.lock().await;
            if tokens.is_empty() {
                debug!("no access token held, authenticating");
                *tokens = oauth::obtain_access_token(&self.http, &self.credentials).await?;
            }
            if tokens.is_empty() {
                return Err(Newsletter2GoError::AuthenticationFailed);
            }
            tokens.access_token.clone()
        };

        self.http
            .execute(&format!("Bearer {access_token}"), endpoint, payload, verb)
            .await
    }
}
