//! Provider authentication trait.

use reqwest::RequestBuilder;

/// Trait for authenticating HTTP requests to a provider.
///
/// Implementations attach their credential to a request builder and never
/// send anything themselves.
pub trait ProviderAuth: Send + Sync {
    /// Apply authentication to a request builder.
    fn authenticate(&self, request: RequestBuilder) -> RequestBuilder;
}
