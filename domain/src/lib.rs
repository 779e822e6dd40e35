//! Domain layer of the Zoom Meeting SDK auth endpoint.
//!
//! - [`validation`] and [`coercion`] turn a loosely typed JSON request body into
//!   a list of field errors or a request that is safe to sign.
//! - [`jwt`] mints the Meeting SDK signature.
//! - [`zoom_token`] relays the server-to-server OAuth and ZAK token calls through
//!   the [`gateway`] client.

pub mod coercion;
pub mod error;
pub mod jwt;
pub mod validation;
pub mod zoom_token;

pub mod gateway;
