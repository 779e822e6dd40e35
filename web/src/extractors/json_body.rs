use crate::extractors::RejectionType;
use axum::{
    extract::{FromRequest, Request},
    http::{header, HeaderMap, StatusCode},
    Json,
};
use log::*;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// JSON request body that treats a non-JSON request as an empty object.
///
/// Requests with a JSON content type are parsed with axum's [`Json`], so a
/// malformed body is still rejected. Any other request (a form post, plain text
/// or no body at all) is read as `{}` and every field is absent.
pub(crate) struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = RejectionType;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if has_json_content_type(req.headers()) {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(|rejection| (rejection.status(), rejection.body_text()))?;
            return Ok(JsonBody(value));
        }

        trace!("Request body is not JSON, reading it as an empty object");
        serde_json::from_value(Value::Object(Map::new()))
            .map(JsonBody)
            .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))
    }
}

// application/json and any application/*+json type, parameters ignored.
fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence.starts_with("application/") && (essence.ends_with("/json") || essence.ends_with("+json"))
}
