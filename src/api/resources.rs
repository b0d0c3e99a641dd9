//! The Newsletter2Go resources this client knows about.
//!
//! Every method is a thin shim over [`Client::request`] with a fixed endpoint
//! and payload shape. Responses are handed back as untyped JSON, since the
//! API's documents differ per account and per endpoint version.
//! See <https://docs.newsletter2go.com> for what each endpoint returns.

use std::fmt;
use std::str::FromStr;

use serde_json::{json, Value};

use super::{
    client::Client,
    http_client::{HttpVerb, Payload},
};
use crate::error::{Newsletter2GoError, Result};

/// Restricts templates to those a user can actually send with.
const TEMPLATE_FILTER: &str = "type=='custom',type=='premium'";

/// Recipients carry a free-text note in this (German) field.
const RECIPIENT_NOTE_FIELD: &str = "Vermerk";

/// The kinds of mailings that can be created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewsletterType {
    Default,
    Transaction,
    /// Double opt-in confirmation mailings.
    Doi,
}

impl NewsletterType {
    pub fn as_str(self) -> &'static str {
        match self {
            NewsletterType::Default => "default",
            NewsletterType::Transaction => "transaction",
            NewsletterType::Doi => "doi",
        }
    }
}

impl FromStr for NewsletterType {
    type Err = Newsletter2GoError;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "default" => Ok(NewsletterType::Default),
            "transaction" => Ok(NewsletterType::Transaction),
            "doi" => Ok(NewsletterType::Doi),
            other => Err(Newsletter2GoError::UnsupportedNewsletterType(
                other.to_string(),
            )),
        }
    }
}

impl fmt::Display for NewsletterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn payload<const N: usize>(fields: [(&str, Value); N]) -> Payload {
    fields
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

/// Most listing endpoints only return IDs unless asked to expand.
fn expanded() -> Payload {
    payload([("_expand", json!(true))])
}

impl Client {
    /// All users in this account.
    pub async fn get_users(&self) -> Result<Value> {
        self.request("/users", &expanded(), HttpVerb::Get).await
    }

    /// All lists in this account.
    pub async fn get_lists(&self) -> Result<Value> {
        self.request("/lists", &expanded(), HttpVerb::Get).await
    }

    /// All newsletters within a list.
    pub async fn get_newsletters(&self, list_id: &str) -> Result<Value> {
        let endpoint = format!("/lists/{list_id}/newsletters");
        self.request(&endpoint, &expanded(), HttpVerb::Get).await
    }

    /// Custom and premium templates within a list.
    pub async fn get_templates(&self, list_id: &str) -> Result<Value> {
        let endpoint = format!("/lists/{list_id}/templates");
        let mut data = expanded();
        data.insert("_filter".into(), json!(TEMPLATE_FILTER));
        self.request(&endpoint, &data, HttpVerb::Get).await
    }

    /// A single template within a list.
    pub async fn get_template(&self, list_id: &str, template_id: &str) -> Result<Value> {
        let endpoint = format!("/lists/{list_id}/templates/{template_id}");
        self.request(&endpoint, &expanded(), HttpVerb::Get).await
    }

    /// Creates a new newsletter within a list.
    ///
    /// `newsletter_type` must be one of `default`, `transaction` or `doi`; anything else
    /// is rejected before a request is made. Content may be passed either as `html`, or
    /// as the `json` document of an existing template or mailing.
    #[allow(clippy::too_many_arguments)]
    pub async fn create_newsletter(
        &self,
        list_id: &str,
        newsletter_type: &str,
        name: &str,
        header_from: &str,
        subject: &str,
        html: Option<&str>,
        json: Option<Value>,
    ) -> Result<Value> {
        let newsletter_type: NewsletterType = newsletter_type.parse()?;

        let endpoint = format!("/lists/{list_id}/newsletters");
        let mut data = payload([
            ("type", json!(newsletter_type.as_str())),
            ("name", json!(name)),
            ("subject", json!(subject)),
            ("header_from_email", json!(header_from)),
        ]);
        if let Some(html) = html {
            data.insert("html".into(), json!(html));
        }
        // An explicit `null` counts as absent.
        if let Some(json) = json.filter(|json| !json.is_null()) {
            data.insert("json".into(), json);
        }

        self.request(&endpoint, &data, HttpVerb::Post).await
    }

    /// Replaces the HTML of an existing newsletter. `None` clears it.
    pub async fn update_html(&self, newsletter_id: &str, html: Option<&str>) -> Result<Value> {
        let endpoint = format!("/newsletters/{newsletter_id}");
        let data = payload([("html", json!(html))]);
        self.request(&endpoint, &data, HttpVerb::Patch).await
    }

    /// Replaces the subject of an existing newsletter. `None` clears it.
    pub async fn update_subject(
        &self,
        newsletter_id: &str,
        subject: Option<&str>,
    ) -> Result<Value> {
        let endpoint = format!("/newsletters/{newsletter_id}");
        let data = payload([("subject", json!(subject))]);
        self.request(&endpoint, &data, HttpVerb::Patch).await
    }

    pub async fn update_newsletter(
        &self,
        newsletter_id: &str,
        name: &str,
        subject: &str,
        html: &str,
    ) -> Result<Value> {
        let endpoint = format!("/newsletters/{newsletter_id}");
        let data = payload([
            ("name", json!(name)),
            ("subject", json!(subject)),
            ("html", json!(html)),
        ]);
        self.request(&endpoint, &data, HttpVerb::Patch).await
    }

    pub async fn delete_newsletter(&self, newsletter_id: &str) -> Result<Value> {
        let endpoint = format!("/newsletters/{newsletter_id}");
        self.request(&endpoint, &Payload::new(), HttpVerb::Delete).await
    }

    /// Adds a recipient to a list, noting why they were added.
    pub async fn create_recipient(
        &self,
        list_id: &str,
        email: &str,
        first_name: &str,
        last_name: &str,
        reason: &str,
    ) -> Result<Value> {
        let data = payload([
            ("list_id", json!(list_id)),
            ("email", json!(email)),
            ("first_name", json!(first_name)),
            ("last_name", json!(last_name)),
            (RECIPIENT_NOTE_FIELD, json!(reason)),
        ]);
        self.request("/recipients", &data, HttpVerb::Post).await
    }

    /// Transactional newsletters have to be activated before they can be sent.
    ///
    /// The API accepts `active` or `inactive`; the value is passed along unchecked.
    pub async fn set_transactional_state(
        &self,
        newsletter_id: &str,
        state: &str,
    ) -> Result<Value> {
        let endpoint = format!("/newsletters/{newsletter_id}");
        let data = payload([("state", json!(state))]);
        self.request(&endpoint, &data, HttpVerb::Patch).await
    }

    /// Sends a newsletter. `recipient_data` becomes the request body as-is.
    pub async fn send_newsletter(
        &self,
        newsletter_id: &str,
        recipient_data: &Payload,
    ) -> Result<Value> {
        let endpoint = format!("/newsletters/{newsletter_id}/send");
        self.request(&endpoint, recipient_data, HttpVerb::Post).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_supported_types() {
        assert_eq!("default".parse::<NewsletterType>().unwrap(), NewsletterType::Default);
        assert_eq!(
            "transaction".parse::<NewsletterType>().unwrap(),
            NewsletterType::Transaction
        );
        assert_eq!("doi".parse::<NewsletterType>().unwrap(), NewsletterType::Doi);
    }

    #[test]
    fn rejects_unknown_types() {
        let err = "spam".parse::<NewsletterType>().unwrap_err();
        assert!(matches!(err, Newsletter2GoError::UnsupportedNewsletterType(ref t) if t == "spam"));
        // Matching is exact, as the API's is.
        assert!("Default".parse::<NewsletterType>().is_err());
    }

    #[test]
    fn expanded_payload_only_asks_to_expand() {
        let data = expanded();
        assert_eq!(data.len(), 1);
        assert_eq!(data["_expand"], json!(true));
    }
}
