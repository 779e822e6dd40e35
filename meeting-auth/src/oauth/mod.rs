//! OAuth 2.0 server-to-server authentication.

mod account_credentials;

pub use account_credentials::{AccountCredentialsGrant, ACCOUNT_CREDENTIALS_GRANT_TYPE};
