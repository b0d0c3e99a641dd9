mod client;
mod http_client;
mod query;
mod resources;

pub use client::Client;
pub(crate) use http_client::HttpClient;
pub use http_client::{HttpVerb, Payload};
pub use resources::NewsletterType;
