//! # Newsletter2Go API Client
//!
//! A small client for the [Newsletter2Go](https://docs.newsletter2go.com) REST API:
//! users, lists, newsletters, templates and recipients.
//!
//! Authentication happens lazily: the first call obtains an access token with the
//! account's auth key, email and password, and later calls reuse it. Responses are
//! returned as untyped [`serde_json::Value`]s exactly as the API sent them; HTTP status
//! codes are not turned into errors, so check the returned document.
//!
//! ## Example
//!
//! ```no_run
//! use newsletter2go::Client;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new("auth-key", "user@example.com", "password")?;
//!
//!     let lists = client.get_lists().await?;
//!     println!("{lists:#}");
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod oauth;

pub use api::{Client, HttpVerb, NewsletterType, Payload};
pub use config::{ClientConfig, Credentials, BASE_URL};
pub use error::{Newsletter2GoError, Result};
pub use oauth::TokenPair;
