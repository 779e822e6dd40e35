use crate::controller::{
    health_check_controller, sdk_signature_controller, zoom_token_controller,
};
use crate::{params, response, AppState};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;

// This is the global definition of our OpenAPI spec. To be a part
// of the rendered spec, a path and schema must be listed here.
#[derive(OpenApi)]
#[openapi(
        info(
            title = "Zoom Meeting SDK Auth Endpoint"
        ),
        paths(
            health_check_controller::health_check,
            sdk_signature_controller::create,
            zoom_token_controller::access_token,
            zoom_token_controller::zak_token,
        ),
        components(
            schemas(
                params::sdk_signature::SignatureParams,
                params::zoom_token::ZakTokenParams,
                response::SignatureResponse,
                response::ValidationErrorsResponse,
                response::UpstreamErrorResponse,
            )
        ),
        tags(
            (name = "zoom_sdk_auth", description = "Zoom Meeting SDK signatures and token relays")
        )
    )]
struct ApiDoc;

pub fn define_routes(app_state: AppState) -> Router {
    Router::new()
        .merge(sdk_signature_routes(app_state.clone()))
        .merge(zoom_token_routes(app_state))
        .merge(health_routes())
        .merge(RapiDoc::with_openapi("/api-docs/openapi2.json", ApiDoc::openapi()).path("/rapidoc"))
        .layer(cors_layer())
}

// Browser clients embed the Meeting SDK on arbitrary origins, so every route
// answers preflight requests for any origin, method and header.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

fn sdk_signature_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/", post(sdk_signature_controller::create))
        .with_state(app_state)
}

fn zoom_token_routes(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/get-access-token",
            get(zoom_token_controller::access_token),
        )
        .route("/zakToken", post(zoom_token_controller::zak_token))
        .with_state(app_state)
}

fn health_routes() -> Router {
    Router::new().route("/health", get(health_check_controller::health_check))
}
