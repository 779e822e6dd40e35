use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;

/// Body of a Meeting SDK signature request.
///
/// All fields are optional, but `meetingNumber` and `role` must be sent
/// together. `role` must be 0 (attendee) or 1 (host) and `expirationSeconds`
/// must be between 1800 and 172800; both may be sent as numeric strings.
///
/// Example: `{"meetingNumber": 85746065432, "role": 0, "expirationSeconds": 3600}`
#[derive(Debug, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = Object)]
pub(crate) struct SignatureParams(pub(crate) Value);
