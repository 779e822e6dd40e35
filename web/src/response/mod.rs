//! Response bodies returned by the endpoints.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use domain::gateway::zoom::UpstreamResponse;
use domain::validation::ValidationError;
use serde::Serialize;
use utoipa::ToSchema;

/// A signed Meeting SDK signature.
#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct SignatureResponse {
    pub(crate) signature: String,
}

/// Every validation failure found in a signature request.
#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct ValidationErrorsResponse {
    /// Each entry has `field` (null for cross-field rules), `message` and
    /// `error_code` (`TYPE_ERROR`, `OUT_OF_BOUNDS` or `MISSING_FIELD`).
    #[schema(value_type = Vec<Object>)]
    pub(crate) errors: Vec<ValidationError>,
}

/// A non-2xx answer from Zoom, relayed with Zoom's status code.
#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct UpstreamErrorResponse {
    pub(crate) error: String,
    /// Zoom's response body, verbatim.
    pub(crate) details: String,
}

/// Turns a relayed Zoom answer into the response sent to the caller.
///
/// Success bodies are passed through as JSON; rejections keep Zoom's status and
/// carry `failure` alongside Zoom's body.
pub(crate) fn relay(upstream: UpstreamResponse, failure: &str) -> Response {
    match upstream {
        UpstreamResponse::Success(body) => Json(body).into_response(),
        UpstreamResponse::Rejected { status, body } => {
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
            (
                status,
                Json(UpstreamErrorResponse {
                    error: failure.to_string(),
                    details: body,
                }),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_relay_success_passes_body_through() {
        let response = relay(
            UpstreamResponse::Success(json!({"access_token": "abc"})),
            "Failed to fetch access token",
        );
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_relay_rejection_keeps_upstream_status() {
        let response = relay(
            UpstreamResponse::Rejected {
                status: 404,
                body: "not found".to_string(),
            },
            "Failed to fetch Zak token",
        );
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_serialize_upstream_error_response() {
        let body = UpstreamErrorResponse {
            error: "Failed to fetch Zak token".to_string(),
            details: "{\"code\":124}".to_string(),
        };

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"error": "Failed to fetch Zak token", "details": "{\"code\":124}"})
        );
    }
}
