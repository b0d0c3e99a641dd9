use std::fmt;

use reqwest::{header, Method};
use serde_json::{Map, Value};
use tracing::{debug, warn};
use url::Url;

use super::query::build_query;
use crate::config::ClientConfig;
use crate::error::Result;

/// The parameters submitted with a request.
/// POST and PATCH send them as a JSON body, GET and DELETE as a query string.
pub type Payload = Map<String, Value>;

/// The HTTP verbs the API makes use of.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HttpVerb {
    #[default]
    Get,
    Post,
    Patch,
    Delete,
}

impl HttpVerb {
    /// Whether the payload is sent as the request body rather than as query parameters.
    pub fn carries_body(self) -> bool {
        matches!(self, HttpVerb::Post | HttpVerb::Patch)
    }
}

impl From<HttpVerb> for Method {
    fn from(verb: HttpVerb) -> Self {
        match verb {
            HttpVerb::Get => Method::GET,
            HttpVerb::Post => Method::POST,
            HttpVerb::Patch => Method::PATCH,
            HttpVerb::Delete => Method::DELETE,
        }
    }
}

impl fmt::Display for HttpVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Method::from(*self).as_str())
    }
}

/// A `reqwest` client bound to one API host and TLS policy.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: reqwest::Client,
    config: ClientConfig,
}

impl HttpClient {
    /// Builds the underlying client. No connection is made until the first request.
    pub fn new(mut config: ClientConfig) -> Result<Self> {
        // Endpoints start with a slash of their own.
        config.base_url = config.base_url.trim_end_matches('/').to_string();

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if !config.ssl_verification {
            warn!("TLS certificate and host name verification is disabled");
            builder = builder
                .danger_accept_invalid_certs(true)
                .danger_accept_invalid_hostnames(true);
        }

        Ok(Self {
            inner: builder.build()?,
            config,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Creates and executes a single request, returning its decoded JSON body.
    ///
    /// The status code is deliberately not inspected: error responses from the API are
    /// JSON documents as well, and callers receive them just like successful ones.
    /// A body that isn't JSON decodes to `Value::Null`.
    pub async fn execute(
        &self,
        authorization: &str,
        endpoint: &str,
        payload: &Payload,
        verb: HttpVerb,
    ) -> Result<Value> {
        let mut url = Url::parse(&format!("{}{}", self.config.base_url, endpoint))?;

        // Payloads travel either in the body or in the URL, never both.
        let body = if verb.carries_body() {
            Some(serde_json::to_vec(payload)?)
        } else {
            let query = build_query(payload);
            if !query.is_empty() {
                url.set_query(Some(&query));
            }
            None
        };

        debug!(
            %verb,
            %url,
            ssl_verification = self.config.ssl_verification,
            "sending request"
        );

        let mut request = self
            .inner
            .request(verb.into(), url)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::AUTHORIZATION, authorization);
        if let Some(body) = body {
            request = request
                .header(header::CONTENT_LENGTH, body.len())
                .body(body);
        }

        let response = request.send().await?;
        debug!(status = %response.status(), "received response");

        let response_body = response.bytes().await?;
        Ok(decode_body(&response_body))
    }
}

fn decode_body(body: &[u8]) -> Value {
    if body.is_empty() {
        return Value::Null;
    }

    match serde_json::from_slice(body) {
        Ok(value) => value,
        Err(error) => {
            warn!(%error, "response body is not valid JSON");
            Value::Null
        }
    }
}
