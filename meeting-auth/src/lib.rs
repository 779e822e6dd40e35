//! # meeting-auth
//!
//! Authentication primitives for calling the meeting provider's APIs:
//! - Server-to-server OAuth (`account_credentials` grant)
//! - Bearer token authentication for REST calls made on behalf of a user
//! - HTTP client building
//!
//! ## Usage
//!
//! ```rust,ignore
//! use meeting_auth::{
//!     api_key::{BearerTokenAuth, ProviderAuth},
//!     http::HttpClientBuilder,
//!     oauth::AccountCredentialsGrant,
//! };
//! ```

pub mod api_key;
pub mod error;
pub mod http;
pub mod oauth;

// Re-export commonly used types
pub use error::{Error, ErrorKind};
