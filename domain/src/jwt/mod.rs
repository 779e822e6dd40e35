//! Meeting SDK signature generation.
//!
//! A signature is an HS256 JWT whose payload identifies the host application
//! (`appKey`/`sdkKey`), the meeting (`mn`) and the participant role, and bounds
//! its own lifetime with `iat`/`exp`/`tokenExp`. It is signed with the host
//! secret from [`Config`].
//!
//! # Example
//!
//! ```rust,ignore
//! use domain::jwt::{generate_sdk_signature, SignatureRequest};
//!
//! let request = SignatureRequest::from_validated(&body);
//! let signature = generate_sdk_signature(&config, &request)?;
//! ```

use crate::error::Error;
use crate::validation::{
    in_number_array, is_between, is_required_all_or_none, PropertyRules, SchemaRules,
};
use claims::MeetingSdkClaims;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use log::*;
use serde_json::Value;
use service::config::Config;

pub(crate) mod claims;

/// Lifetime of a signature when the caller does not ask for one: two hours.
pub const DEFAULT_EXPIRATION_SECONDS: i64 = 60 * 60 * 2;

/// Shortest lifetime a caller may request, in seconds.
pub const MIN_EXPIRATION_SECONDS: i64 = 1800;

/// Longest lifetime a caller may request, in seconds.
pub const MAX_EXPIRATION_SECONDS: i64 = 172800;

/// Roles a participant may join with: 0 attendee, 1 host.
pub const ROLES: [i64; 2] = [0, 1];

/// Per-field rules for a signature request body.
pub fn property_rules() -> PropertyRules {
    PropertyRules::new()
        .with("role", in_number_array(&ROLES))
        .with(
            "expirationSeconds",
            is_between(MIN_EXPIRATION_SECONDS, MAX_EXPIRATION_SECONDS),
        )
}

/// Cross-field rules for a signature request body.
pub fn schema_rules() -> SchemaRules {
    SchemaRules::new().with(is_required_all_or_none(&["meetingNumber", "role"]))
}

/// The fields of a validated signature request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignatureRequest {
    /// Relayed into the `mn` claim exactly as the caller sent it.
    pub meeting_number: Option<Value>,
    pub role: Option<i64>,
    pub expiration_seconds: Option<i64>,
}

impl SignatureRequest {
    /// Extracts the signature fields from a coerced body that passed
    /// [`property_rules`] and [`schema_rules`]. Fractional numbers are truncated.
    pub fn from_validated(body: &Value) -> Self {
        Self {
            meeting_number: body.get("meetingNumber").cloned(),
            role: body.get("role").and_then(Value::as_f64).map(|n| n as i64),
            expiration_seconds: body
                .get("expirationSeconds")
                .and_then(Value::as_f64)
                .map(|n| n as i64),
        }
    }
}

/// Signs a Meeting SDK signature that is valid from now.
pub fn generate_sdk_signature(config: &Config, request: &SignatureRequest) -> Result<String, Error> {
    generate_sdk_signature_at(config, request, chrono::Utc::now().timestamp())
}

/// Signs a Meeting SDK signature issued at `issued_at` (seconds since the epoch).
///
/// The result depends only on its inputs, so equal inputs yield equal tokens.
pub fn generate_sdk_signature_at(
    config: &Config,
    request: &SignatureRequest,
    issued_at: i64,
) -> Result<String, Error> {
    let host_key = config.zoom_meeting_host_key().ok_or_else(|| {
        warn!("Failed to get Zoom host key from config");
        Error::config("Missing Zoom host key")
    })?;
    let host_secret = config.zoom_meeting_host_secret().ok_or_else(|| {
        warn!("Failed to get Zoom host secret from config");
        Error::config("Missing Zoom host secret")
    })?;

    let expires_at = issued_at
        + request
            .expiration_seconds
            .unwrap_or(DEFAULT_EXPIRATION_SECONDS);

    let claims = MeetingSdkClaims {
        app_key: host_key.clone(),
        sdk_key: host_key,
        mn: request.meeting_number.clone(),
        role: request.role,
        iat: issued_at,
        exp: expires_at,
        token_exp: expires_at,
    };

    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(host_secret.as_bytes()),
    )?;

    debug!(
        "Signed Meeting SDK signature for role {:?}, expiring at {}",
        claims.role, expires_at
    );

    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DomainErrorKind, InternalErrorKind};
    use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
    use clap::Parser;
    use jsonwebtoken::{decode, DecodingKey, Validation};
    use serde_json::json;

    const HOST_KEY: &str = "sdk_key_123";
    const HOST_SECRET: &str = "sdk_secret_456";

    fn config() -> Config {
        Config::try_parse_from([
            "zoom_sdk_auth",
            "--zoom-meeting-host-key",
            HOST_KEY,
            "--zoom-meeting-host-secret",
            HOST_SECRET,
        ])
        .unwrap()
    }

    fn segment(token: &str, index: usize) -> Value {
        let part = token.split('.').nth(index).unwrap();
        serde_json::from_slice(&URL_SAFE_NO_PAD.decode(part).unwrap()).unwrap()
    }

    fn request(meeting_number: i64, role: i64, expiration_seconds: Option<i64>) -> SignatureRequest {
        SignatureRequest {
            meeting_number: Some(json!(meeting_number)),
            role: Some(role),
            expiration_seconds,
        }
    }

    #[test]
    fn test_default_expiration_is_two_hours() {
        let token = generate_sdk_signature(&config(), &request(123, 0, None)).unwrap();
        let payload = segment(&token, 1);

        let iat = payload["iat"].as_i64().unwrap();
        let exp = payload["exp"].as_i64().unwrap();
        assert_eq!(exp - iat, 7200);
        assert_eq!(payload["tokenExp"], payload["exp"]);
    }

    #[test]
    fn test_requested_expiration_window() {
        let token = generate_sdk_signature_at(&config(), &request(123, 1, Some(3600)), 1_700_000_000)
            .unwrap();
        let payload = segment(&token, 1);

        assert_eq!(payload["iat"], json!(1_700_000_000));
        assert_eq!(payload["exp"], json!(1_700_003_600));
        assert_eq!(payload["tokenExp"], payload["exp"]);
    }

    #[test]
    fn test_payload_carries_host_key_meeting_and_role() {
        let token = generate_sdk_signature_at(&config(), &request(987654321, 1, None), 1_700_000_000)
            .unwrap();

        assert_eq!(
            segment(&token, 1),
            json!({
                "appKey": HOST_KEY,
                "sdkKey": HOST_KEY,
                "mn": 987654321,
                "role": 1,
                "iat": 1_700_000_000,
                "exp": 1_700_007_200,
                "tokenExp": 1_700_007_200
            })
        );
        assert_eq!(segment(&token, 0), json!({"alg": "HS256", "typ": "JWT"}));
    }

    #[test]
    fn test_absent_meeting_and_role_are_omitted() {
        let token =
            generate_sdk_signature_at(&config(), &SignatureRequest::default(), 1_700_000_000)
                .unwrap();
        let payload = segment(&token, 1);

        assert!(payload.get("mn").is_none());
        assert!(payload.get("role").is_none());
    }

    #[test]
    fn test_signature_is_deterministic_for_fixed_time() {
        let first = generate_sdk_signature_at(&config(), &request(1, 0, None), 1_700_000_000).unwrap();
        let second = generate_sdk_signature_at(&config(), &request(1, 0, None), 1_700_000_000).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.matches('.').count(), 2);
    }

    #[test]
    fn test_signature_verifies_with_host_secret() {
        let token = generate_sdk_signature(&config(), &request(123, 0, None)).unwrap();

        let decoded = decode::<Value>(
            &token,
            &DecodingKey::from_secret(HOST_SECRET.as_bytes()),
            &Validation::new(Algorithm::HS256),
        )
        .unwrap();
        assert_eq!(decoded.claims["sdkKey"], json!(HOST_KEY));

        let wrong_secret = decode::<Value>(
            &token,
            &DecodingKey::from_secret(b"not the secret"),
            &Validation::new(Algorithm::HS256),
        );
        assert!(wrong_secret.is_err());
    }

    #[test]
    fn test_missing_secret_is_a_config_error() {
        let config = config().set_zoom_meeting_host_secret(None);

        let result = generate_sdk_signature(&config, &request(123, 0, None));
        match result {
            Err(e) => assert_eq!(
                e.error_kind,
                DomainErrorKind::Internal(InternalErrorKind::Config)
            ),
            Ok(_) => panic!("Expected missing secret to fail"),
        }
    }

    #[test]
    fn test_missing_host_key_is_a_config_error() {
        let config = config().set_zoom_meeting_host_key(None);

        let result = generate_sdk_signature(&config, &request(123, 0, None));
        match result {
            Err(e) => assert_eq!(
                e.error_kind,
                DomainErrorKind::Internal(InternalErrorKind::Config)
            ),
            Ok(_) => panic!("Expected missing host key to fail"),
        }
    }

    #[test]
    fn test_from_validated_reads_coerced_fields() {
        let request = SignatureRequest::from_validated(
            &json!({"meetingNumber": "85746065432", "role": 1, "expirationSeconds": 1800.0}),
        );

        assert_eq!(
            request,
            SignatureRequest {
                meeting_number: Some(json!("85746065432")),
                role: Some(1),
                expiration_seconds: Some(1800),
            }
        );
    }
}
