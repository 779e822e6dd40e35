use crate::extractors::json_body::JsonBody;
use crate::params::sdk_signature::SignatureParams;
use crate::response::{SignatureResponse, ValidationErrorsResponse};
use crate::{AppState, Error};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use domain::coercion::coerce_request_body;
use domain::jwt::{self as JwtApi, SignatureRequest};
use domain::validation::validate_request;
use log::*;

/// POST sign a Zoom Meeting SDK signature
#[utoipa::path(
    post,
    path = "/",
    request_body = SignatureParams,
    responses(
        (status = 200, description = "Successfully signed a Meeting SDK signature", body = SignatureResponse),
        (status = 400, description = "The request failed validation", body = ValidationErrorsResponse),
        (status = 500, description = "Internal Server Error")
    )
)]
pub async fn create(
    State(app_state): State<AppState>,
    JsonBody(SignatureParams(body)): JsonBody<SignatureParams>,
) -> Result<Response, Error> {
    debug!("POST sign Meeting SDK signature");

    let body = coerce_request_body(body);
    let errors = validate_request(&body, &JwtApi::property_rules(), &JwtApi::schema_rules());
    if !errors.is_empty() {
        debug!(
            "Rejecting signature request with {} validation error(s)",
            errors.len()
        );
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(ValidationErrorsResponse { errors }),
        )
            .into_response());
    }

    let request = SignatureRequest::from_validated(&body);
    let signature = JwtApi::generate_sdk_signature(&app_state.config, &request)?;

    Ok(Json(SignatureResponse { signature }).into_response())
}
