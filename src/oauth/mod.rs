mod oauth_client;
mod storage;

pub(crate) use oauth_client::obtain_access_token;
pub use oauth_client::{GRANT_TYPE, TOKEN_ENDPOINT};
pub use storage::TokenPair;
