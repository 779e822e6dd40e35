//! Request authentication for provider API calls.

mod auth;
mod bearer;

pub use auth::ProviderAuth;
pub use bearer::BearerTokenAuth;
