//! Zoom token relays used by the web layer.
//!
//! Both calls read their credentials per request: the account credential
//! triple comes from [`Config`], the access token for the ZAK lookup comes from
//! the caller.

use crate::error::Error;
use crate::gateway::zoom::{UpstreamResponse, ZoomClient};
use meeting_auth::api_key::BearerTokenAuth;
use meeting_auth::oauth::AccountCredentialsGrant;
use secrecy::SecretString;
use service::config::Config;

/// Exchange the configured account credentials for a Zoom access token.
///
/// The host key doubles as the OAuth client id and the host secret as the
/// client secret.
pub async fn access_token(config: &Config) -> Result<UpstreamResponse, Error> {
    let grant = AccountCredentialsGrant::from_parts(
        config.zoom_meeting_account_id(),
        config.zoom_meeting_host_key(),
        config.zoom_meeting_host_secret(),
    )?;

    ZoomClient::new(config)?.fetch_access_token(&grant).await
}

/// Fetch the ZAK token for the user identified by `access_token`.
pub async fn zak_token(config: &Config, access_token: String) -> Result<UpstreamResponse, Error> {
    let auth = BearerTokenAuth::new(SecretString::new(access_token));

    ZoomClient::new(config)?.fetch_zak_token(&auth).await
}
