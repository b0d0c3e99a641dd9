use thiserror::Error;

/// Possible error types while talking to Newsletter2Go.
#[derive(Debug, Error)]
pub enum Newsletter2GoError {
    /// `create_newsletter` only knows about `default`, `transaction` and `doi` mailings.
    #[error("mailing type not supported: {0}")]
    UnsupportedNewsletterType(String),

    /// The token endpoint answered, but without an access token we could use.
    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("HTTP request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("unable to serialize payload: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, Newsletter2GoError>;
