use crate::extractors::json_body::JsonBody;
use crate::params::zoom_token::ZakTokenParams;
use crate::response::{relay, UpstreamErrorResponse};
use crate::{AppState, Error};
use axum::extract::State;
use axum::response::Response;
use domain::zoom_token as ZoomTokenApi;
use log::*;

/// GET exchange the server's account credentials for a Zoom access token
#[utoipa::path(
    get,
    path = "/get-access-token",
    responses(
        (status = 200, description = "Zoom's token response, passed through"),
        (status = 400, description = "Zoom rejected the exchange; Zoom's status code is relayed", body = UpstreamErrorResponse),
        (status = 500, description = "Internal Server Error")
    )
)]
pub async fn access_token(State(app_state): State<AppState>) -> Result<Response, Error> {
    debug!("GET Zoom access token");

    let upstream = ZoomTokenApi::access_token(&app_state.config).await?;

    Ok(relay(upstream, "Failed to fetch access token"))
}

/// POST fetch the ZAK token for the user that owns an access token
#[utoipa::path(
    post,
    path = "/zakToken",
    request_body = ZakTokenParams,
    responses(
        (status = 200, description = "Zoom's ZAK token response, passed through"),
        (status = 401, description = "Zoom rejected the request; Zoom's status code is relayed", body = UpstreamErrorResponse),
        (status = 500, description = "Internal Server Error")
    )
)]
pub async fn zak_token(
    State(app_state): State<AppState>,
    JsonBody(params): JsonBody<ZakTokenParams>,
) -> Result<Response, Error> {
    debug!("POST fetch Zoom ZAK token");

    let upstream = ZoomTokenApi::zak_token(&app_state.config, params.accesstoken).await?;

    Ok(relay(upstream, "Failed to fetch Zak token"))
}
