//! This module holds typed parameters for the endpoint inputs.
//!
//! The signature request body stays a loose JSON document because its numeric
//! fields may arrive as strings and are coerced before validation; see
//! `domain::coercion`.

pub(crate) mod sdk_signature;
pub(crate) mod zoom_token;
