//! Session token payload decoding
//!
//! The session token is opaque to this client except for its middle
//! segment: `header.payload.signature`, where `payload` is base64url
//! (unpadded) JSON holding the identity claim set. Signature verification
//! is the backend's job; the client only reads the payload.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

use canvass_types::{IdentityPayload, SessionToken};

use crate::error::{ApiError, ApiResult};

/// Decode the identity payload embedded in a session token.
pub fn decode_identity(token: &SessionToken) -> ApiResult<IdentityPayload> {
    let segments: Vec<&str> = token.as_str().split('.').collect();
    if segments.len() != 3 {
        return Err(ApiError::MalformedToken(
            "expected three dot-separated segments".into(),
        ));
    }
    let payload = segments[1];

    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|e| ApiError::MalformedToken(format!("payload is not base64url: {}", e)))?;

    Ok(serde_json::from_slice(&bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use canvass_types::UserId;

    fn token_with_payload(payload: serde_json::Value) -> SessionToken {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256"}"#);
        let body = URL_SAFE_NO_PAD.encode(payload.to_string());
        SessionToken::new(format!("{}.{}.sig", header, body))
    }

    #[test]
    fn test_decodes_identity_payload() {
        let token = token_with_payload(serde_json::json!({
            "user_id": "u-42",
            "guest": true
        }));
        let identity = decode_identity(&token).unwrap();
        assert_eq!(identity.user_id, UserId::new("u-42"));
        assert!(identity.guest);
        assert_eq!(identity.display_name, None);
    }

    #[test]
    fn test_rejects_wrong_segment_count() {
        let err = decode_identity(&SessionToken::new("just-opaque")).unwrap_err();
        assert!(matches!(err, ApiError::MalformedToken(_)));

        let err = decode_identity(&SessionToken::new("a.b.c.d")).unwrap_err();
        assert!(matches!(err, ApiError::MalformedToken(_)));
    }

    #[test]
    fn test_rejects_non_base64_payload() {
        let err = decode_identity(&SessionToken::new("a.!!!.c")).unwrap_err();
        assert!(matches!(err, ApiError::MalformedToken(_)));
    }

    #[test]
    fn test_rejects_non_json_payload() {
        let body = URL_SAFE_NO_PAD.encode("not json");
        let token = SessionToken::new(format!("h.{}.s", body));
        let err = decode_identity(&token).unwrap_err();
        assert!(matches!(err, ApiError::Json(_)));
    }
}
