use serde::Deserialize;
use utoipa::ToSchema;

/// Parameters required to fetch a ZAK token
///
/// # Fields
///
/// * `accesstoken` - A Zoom OAuth access token for the user whose ZAK is requested.
///   Forwarded as given; a missing token is forwarded as an empty one and Zoom's
///   answer is relayed.
#[derive(Debug, Deserialize, ToSchema)]
pub(crate) struct ZakTokenParams {
    #[serde(default)]
    pub(crate) accesstoken: String,
}
