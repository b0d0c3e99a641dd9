use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde_json::json;
use tracing::{info, warn};

use super::storage::TokenPair;
use crate::{
    api::{HttpClient, HttpVerb, Payload},
    config::Credentials,
    error::Result,
};

/// The endpoint leveraged for obtaining an access token.
pub const TOKEN_ENDPOINT: &str = "/oauth/v2/token";

/// Newsletter2Go's own grant type for exchanging account credentials.
pub const GRANT_TYPE: &str = "https://nl2go.com/jwt";

/// Attempt to obtain an access token via the password-style grant.
///
/// The auth key identifies the integration (sent as HTTP Basic), while the
/// account email and password identify the user. Transport failures are returned
/// as errors; a response without tokens simply produces an empty pair.
pub async fn obtain_access_token(
    http: &HttpClient,
    credentials: &Credentials,
) -> Result<TokenPair> {
    let mut payload = Payload::new();
    payload.insert("username".into(), json!(credentials.email));
    payload.insert("password".into(), json!(credentials.password));
    payload.insert("grant_type".into(), json!(GRANT_TYPE));

    let authorization = format!("Basic {}", STANDARD.encode(&credentials.auth_key));
    let response = http
        .execute(&authorization, TOKEN_ENDPOINT, &payload, HttpVerb::Post)
        .await?;

    let tokens = TokenPair::from_response(response);
    if tokens.is_empty() {
        warn!("token endpoint returned no access token");
    } else {
        info!("obtained access token");
    }
    Ok(tokens)
}
