use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};

/// Claims read from the middle segment of a bearer credential.
///
/// The decode is purely structural: the signature segment is never
/// checked, so the result is a UI hint only. The backend remains the
/// sole authority and re-validates every gated action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject claim, usually the login username.
    #[serde(default)]
    pub sub: Option<String>,
    /// Granted capability tokens. Absence means no capabilities.
    #[serde(default)]
    pub permissions: Vec<String>,
}

impl Claims {
    /// Returns true when the claims grant the raw capability token.
    #[must_use]
    pub fn grants(&self, capability: &str) -> bool {
        self.permissions.iter().any(|held| held == capability)
    }
}

/// Decodes the claims segment of a three-part bearer credential.
///
/// Returns `None` for any malformed input: missing segment, invalid
/// base64url, or invalid JSON. Failure is silent by contract; a
/// broken credential reads as "not authenticated".
#[must_use]
pub fn decode_claims(credential: &str) -> Option<Claims> {
    let payload = credential.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    serde_json::from_slice(&bytes).ok()
}

#[cfg(test)]
mod tests {
    use base64::Engine;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;

    use super::decode_claims;

    fn encode_token(payload: &serde_json::Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(b"{\"alg\":\"HS256\"}");
        let claims = URL_SAFE_NO_PAD.encode(payload.to_string());
        format!("{header}.{claims}.signature")
    }

    #[test]
    fn decodes_well_formed_credential() {
        let token = encode_token(&serde_json::json!({
            "sub": "inspector",
            "permissions": ["CITIZEN:VIEW", "APPLICATION:APPROVE"],
        }));

        let Some(claims) = decode_claims(&token) else {
            panic!("claims should decode");
        };
        assert_eq!(claims.sub.as_deref(), Some("inspector"));
        assert!(claims.grants("APPLICATION:APPROVE"));
        assert!(!claims.grants("ROLE:DELETE"));
    }

    #[test]
    fn missing_permissions_claim_reads_as_empty() {
        let token = encode_token(&serde_json::json!({ "sub": "clerk" }));

        let Some(claims) = decode_claims(&token) else {
            panic!("claims should decode");
        };
        assert!(claims.permissions.is_empty());
    }

    #[test]
    fn malformed_inputs_decode_to_none() {
        assert_eq!(decode_claims(""), None);
        assert_eq!(decode_claims("onlyonesegment"), None);
        assert_eq!(decode_claims("a.!!!not-base64!!!.c"), None);

        let not_json = URL_SAFE_NO_PAD.encode(b"plain text");
        assert_eq!(decode_claims(&format!("a.{not_json}.c")), None);
    }

    #[test]
    fn tolerates_padded_segments() {
        let mut token = encode_token(&serde_json::json!({ "sub": "clerk" }));
        token = token.replacen(".signature", "==.signature", 1);

        assert!(decode_claims(&token).is_some());
    }
}
