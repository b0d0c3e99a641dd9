use std::fmt;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// The access and refresh token pair returned by the token endpoint.
///
/// Both are empty until the first successful authentication. They only ever
/// live in memory for as long as the owning client does.
#[derive(Clone, Default, Deserialize, PartialEq, Eq)]
pub struct TokenPair {
    #[serde(default, deserialize_with = "string_or_empty")]
    pub access_token: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub refresh_token: String,
}

/// Each token is read on its own, so a `null` refresh token doesn't cost us the access token.
fn string_or_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_str().unwrap_or_default().to_string())
}

impl TokenPair {
    /// Pulls both tokens out of a token endpoint response.
    ///
    /// Anything that doesn't look like a token response (an error document,
    /// `null` from an undecodable body) yields an empty pair. A token that is
    /// missing or not a string comes back empty without affecting the other one.
    pub fn from_response(response: Value) -> Self {
        serde_json::from_value(response).unwrap_or_default()
    }

    /// Whether we hold no usable access token.
    pub fn is_empty(&self) -> bool {
        self.access_token.is_empty()
    }
}

impl fmt::Debug for TokenPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mask = |token: &str| if token.is_empty() { "<empty>" } else { "<redacted>" };
        f.debug_struct("TokenPair")
            .field("access_token", &mask(&self.access_token))
            .field("refresh_token", &mask(&self.refresh_token))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_both_tokens() {
        let pair = TokenPair::from_response(json!({
            "access_token": "abc",
            "refresh_token": "def",
            "expires_in": 7200,
            "token_type": "bearer",
        }));
        assert_eq!(pair.access_token, "abc");
        assert_eq!(pair.refresh_token, "def");
        assert!(!pair.is_empty());
    }

    #[test]
    fn error_documents_give_an_empty_pair() {
        let pair = TokenPair::from_response(json!({
            "error": "invalid_grant",
            "error_description": "Invalid username and password combination",
        }));
        assert!(pair.is_empty());
        assert!(TokenPair::from_response(Value::Null).is_empty());
        assert!(TokenPair::from_response(json!({ "access_token": null })).is_empty());
    }

    #[test]
    fn null_refresh_token_keeps_the_access_token() {
        let pair = TokenPair::from_response(json!({
            "access_token": "abc",
            "refresh_token": null,
        }));
        assert_eq!(pair.access_token, "abc");
        assert_eq!(pair.refresh_token, "");
        assert!(!pair.is_empty());

        let pair = TokenPair::from_response(json!({ "access_token": "abc", "refresh_token": 42 }));
        assert_eq!(pair.access_token, "abc");
        assert!(pair.refresh_token.is_empty());
    }

    #[test]
    fn debug_output_never_leaks_tokens() {
        let pair = TokenPair {
            access_token: "secret-access".to_string(),
            refresh_token: String::new(),
        };
        let printed = format!("{pair:?}");
        assert!(!printed.contains("secret-access"));
        assert!(printed.contains("<empty>"));
    }
}
