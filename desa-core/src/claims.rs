use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

/// Best-effort extraction of the `role` claim from a JWT-shaped token.
///
/// The payload segment is decoded without any signature verification, so the
/// result is strictly a display hint. Any failure along the way (no payload
/// segment, bad base64, bad JSON, missing claim) yields `None` and must never
/// block the surrounding login flow.
pub fn role_claim(token: &str) -> Option<String> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    let claims: serde_json::Value = serde_json::from_slice(&bytes).ok()?;
    claims.get("role")?.as_str().map(ToOwned::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_with_payload(payload: &[u8]) -> String {
        format!("header.{}.signature", URL_SAFE_NO_PAD.encode(payload))
    }

    #[test]
    fn extracts_role_from_payload_segment() {
        let token = token_with_payload(br#"{"sub":"u-1","role":"admin"}"#);
        assert_eq!(role_claim(&token), Some("admin".to_string()));
    }

    #[test]
    fn missing_role_claim_yields_none() {
        let token = token_with_payload(br#"{"sub":"u-1"}"#);
        assert_eq!(role_claim(&token), None);
    }

    #[test]
    fn garbage_tokens_yield_none() {
        assert_eq!(role_claim("not-a-jwt"), None);
        assert_eq!(role_claim("a.!!!not-base64!!!.c"), None);
        let token = token_with_payload(b"not json at all");
        assert_eq!(role_claim(&token), None);
    }

    #[test]
    fn padded_payloads_are_tolerated() {
        let encoded = URL_SAFE_NO_PAD.encode(br#"{"role":"operator"}"#);
        let token = format!("h.{encoded}==.s");
        assert_eq!(role_claim(&token), Some("operator".to_string()));
    }
}
