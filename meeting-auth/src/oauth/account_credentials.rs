//! Server-to-server OAuth using the `account_credentials` grant.

use log::*;
use reqwest::RequestBuilder;
use secrecy::{ExposeSecret, SecretString};

use crate::api_key::ProviderAuth;
use crate::error::{credential_error, CredentialErrorKind, Error};

/// Grant type sent to the token endpoint.
pub const ACCOUNT_CREDENTIALS_GRANT_TYPE: &str = "account_credentials";

/// Path of the token endpoint relative to the OAuth host.
const TOKEN_PATH: &str = "/oauth/token";

/// Account-level client credentials exchanged for an access token.
///
/// The credentials travel in the form body of the token request alongside
/// `grant_type=account_credentials`.
pub struct AccountCredentialsGrant {
    account_id: String,
    client_id: String,
    client_secret: SecretString,
}

impl AccountCredentialsGrant {
    pub fn new(account_id: String, client_id: String, client_secret: SecretString) -> Self {
        Self {
            account_id,
            client_id,
            client_secret,
        }
    }

    /// Build a grant from optionally configured parts, failing with
    /// `CredentialErrorKind::NotFound` naming the first missing part.
    pub fn from_parts(
        account_id: Option<String>,
        client_id: Option<String>,
        client_secret: Option<String>,
    ) -> Result<Self, Error> {
        let account_id = account_id.ok_or_else(|| missing("account id"))?;
        let client_id = client_id.ok_or_else(|| missing("client id"))?;
        let client_secret = client_secret.ok_or_else(|| missing("client secret"))?;

        Ok(Self::new(
            account_id,
            client_id,
            SecretString::new(client_secret),
        ))
    }

    /// The token endpoint URL for an OAuth host such as `https://zoom.us`.
    pub fn token_url(oauth_base_url: &str) -> String {
        format!("{}{}", oauth_base_url.trim_end_matches('/'), TOKEN_PATH)
    }

    pub fn account_id(&self) -> &str {
        &self.account_id
    }
}

impl ProviderAuth for AccountCredentialsGrant {
    fn authenticate(&self, request: RequestBuilder) -> RequestBuilder {
        request.form(&[
            ("grant_type", ACCOUNT_CREDENTIALS_GRANT_TYPE),
            ("account_id", self.account_id.as_str()),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.expose_secret().as_str()),
        ])
    }
}

fn missing(part: &str) -> Error {
    warn!("Account credentials grant is missing its {}", part);
    credential_error(
        CredentialErrorKind::NotFound,
        &format!("Missing OAuth {}", part),
    )
}
