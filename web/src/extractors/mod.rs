pub(crate) mod json_body;

use axum::http::StatusCode;

type RejectionType = (StatusCode, String);
