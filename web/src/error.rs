use std::error::Error as StdError;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use domain::error::{DomainErrorKind, Error as DomainError, ExternalErrorKind, InternalErrorKind};

extern crate log;
use log::*;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug)]
pub struct Error(DomainError);

impl StdError for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> core::result::Result<(), std::fmt::Error> {
        write!(fmt, "{self:?}")
    }
}

// Every failure that is not a validation error or a relayed Zoom answer is
// reported to the client as the same generic 500. The detail only goes to the log.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match &self.0.error_kind {
            DomainErrorKind::Internal(InternalErrorKind::Config) => {
                error!("Zoom credentials are not configured: {:?}", self.0.source)
            }
            DomainErrorKind::Internal(InternalErrorKind::Other(message)) => {
                error!("Internal error: {message}: {:?}", self.0.source)
            }
            DomainErrorKind::External(ExternalErrorKind::Network) => {
                error!("Error reaching Zoom: {:?}", self.0.source)
            }
            DomainErrorKind::External(ExternalErrorKind::Other(message)) => {
                error!("Error from Zoom: {message}: {:?}", self.0.source)
            }
        }

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Internal Server Error" })),
        )
            .into_response()
    }
}

impl<E> From<E> for Error
where
    E: Into<DomainError>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
