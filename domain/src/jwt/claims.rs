//! Claims carried by a Zoom Meeting SDK signature.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Payload of a Meeting SDK signature.
///
/// `app_key` and `sdk_key` both carry the host key. `token_exp` always equals
/// `exp`. A missing meeting number or role is left out of the payload entirely.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MeetingSdkClaims {
    pub(crate) app_key: String,
    pub(crate) sdk_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) mn: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) role: Option<i64>,
    pub(crate) iat: i64,
    pub(crate) exp: i64,
    pub(crate) token_exp: i64,
}
