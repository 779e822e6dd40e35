//! Zoom OAuth and REST API client.
//!
//! This module relays two calls to Zoom: the server-to-server OAuth token
//! exchange and the ZAK token lookup for the user that owns an access token.
//! Responses are passed back unmodified; nothing is retried.

use crate::error::{DomainErrorKind, Error, ExternalErrorKind};
use log::*;
use meeting_auth::api_key::{BearerTokenAuth, ProviderAuth};
use meeting_auth::http::HttpClientBuilder;
use meeting_auth::oauth::AccountCredentialsGrant;
use serde_json::Value;
use service::config::Config;

/// User agent sent on every call to Zoom.
const USER_AGENT: &str = concat!("zoom_sdk_auth/", env!("CARGO_PKG_VERSION"));

/// Outcome of a relayed Zoom call that reached Zoom and got an answer.
#[derive(Debug, PartialEq)]
pub enum UpstreamResponse {
    /// 2xx answer, parsed as JSON.
    Success(Value),
    /// Non-2xx answer with its status code and raw body text.
    Rejected { status: u16, body: String },
}

/// Zoom client for the OAuth host and the REST API.
pub struct ZoomClient {
    client: reqwest::Client,
    oauth_base_url: String,
    api_base_url: String,
}

impl ZoomClient {
    /// Create a new client against the Zoom hosts configured in `config`.
    pub fn new(config: &Config) -> Result<Self, Error> {
        let client = HttpClientBuilder::new()
            .with_user_agent(USER_AGENT.to_string())
            .build()?;

        Ok(Self {
            client,
            oauth_base_url: config.zoom_oauth_base_url().to_string(),
            api_base_url: config.zoom_api_base_url().trim_end_matches('/').to_string(),
        })
    }

    /// Exchange account credentials for an access token.
    pub async fn fetch_access_token(
        &self,
        grant: &AccountCredentialsGrant,
    ) -> Result<UpstreamResponse, Error> {
        let url = AccountCredentialsGrant::token_url(&self.oauth_base_url);

        debug!(
            "Requesting Zoom access token for account {}",
            grant.account_id()
        );

        let request = grant.authenticate(self.client.post(&url));
        self.relay(request, "access token").await
    }

    /// Fetch the ZAK token of the user the bearer token belongs to.
    pub async fn fetch_zak_token(&self, auth: &BearerTokenAuth) -> Result<UpstreamResponse, Error> {
        let url = format!("{}/users/me/token", self.api_base_url);

        debug!("Requesting Zoom ZAK token");

        let request = auth.authenticate(
            self.client
                .get(&url)
                .query(&[("type", "zak")])
                .header(reqwest::header::CONTENT_TYPE, "application/json"),
        );
        self.relay(request, "ZAK token").await
    }

    async fn relay(
        &self,
        request: reqwest::RequestBuilder,
        what: &str,
    ) -> Result<UpstreamResponse, Error> {
        let response = request.send().await.map_err(|e| {
            warn!("Failed to reach Zoom for {}: {:?}", what, e);
            Error {
                source: Some(Box::new(e)),
                error_kind: DomainErrorKind::External(ExternalErrorKind::Network),
            }
        })?;

        let status = response.status();
        if status.is_success() {
            let body: Value = response.json().await.map_err(|e| {
                warn!("Failed to parse Zoom {} response: {:?}", what, e);
                Error {
                    source: Some(Box::new(e)),
                    error_kind: DomainErrorKind::External(ExternalErrorKind::Other(
                        "Invalid response from Zoom".to_string(),
                    )),
                }
            })?;
            info!("Fetched Zoom {}", what);
            Ok(UpstreamResponse::Success(body))
        } else {
            let body = response.text().await?;
            warn!("Zoom rejected {} request: {} - {}", what, status, body);
            Ok(UpstreamResponse::Rejected {
                status: status.as_u16(),
                body,
            })
        }
    }
}
