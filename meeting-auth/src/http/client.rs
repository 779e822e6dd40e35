//! HTTP client builder for provider API calls.

use crate::error::Error;

/// Builder for the HTTP clients used to reach provider APIs.
///
/// Authentication is applied per request through
/// [`ProviderAuth`](crate::api_key::ProviderAuth) rather than baked into the
/// client, so one client can serve calls made with different credentials.
/// No request timeout is set and failed calls are never retried.
pub struct HttpClientBuilder {
    user_agent: String,
}

impl HttpClientBuilder {
    /// Create a new client builder with the crate's default user agent.
    pub fn new() -> Self {
        Self {
            user_agent: format!("meeting-auth/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Set the user agent string.
    pub fn with_user_agent(mut self, user_agent: String) -> Self {
        self.user_agent = user_agent;
        self
    }

    /// Build the configured HTTP client.
    pub fn build(self) -> Result<reqwest::Client, Error> {
        Ok(reqwest::Client::builder()
            .use_rustls_tls()
            .user_agent(self.user_agent)
            .build()?)
    }
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
