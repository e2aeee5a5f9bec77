//! Local bearer-token expiry checks
//!
//! The backend issues standard three-segment JWTs valid for 24 hours.
//! Expiry is decided locally from the `exp` claim so a stale session can be
//! torn down without waiting for a server 401. Nothing here performs I/O.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

use super::auth::TokenClaims;

/// Unix expiry (seconds) of a bearer token, or `None` for anything that is
/// not a three-segment JWT whose payload is a JSON object with a numeric
/// `exp`. Safe to call speculatively on possibly-stale storage contents.
pub fn decode_expiry(token: &str) -> Option<i64> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return None;
    }
    // Payloads are base64url; tolerate stray padding from older issuers.
    let payload = URL_SAFE_NO_PAD
        .decode(segments[1].trim_end_matches('='))
        .ok()?;
    let claims: TokenClaims = serde_json::from_slice(&payload).ok()?;
    Some(claims.exp)
}

/// Fail-closed expiry check against an explicit clock. A token that cannot
/// be decoded counts as expired, and so does one whose `exp` equals `now`.
pub fn is_expired_at(token: &str, now: i64) -> bool {
    match decode_expiry(token) {
        Some(exp) => exp <= now,
        None => true,
    }
}

/// [`is_expired_at`] against the real clock.
pub fn is_expired(token: &str) -> bool {
    is_expired_at(token, chrono::Utc::now().timestamp())
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine;

    fn token_with_payload(payload: &str) -> String {
        format!(
            "{}.{}.{}",
            URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#),
            URL_SAFE_NO_PAD.encode(payload),
            URL_SAFE_NO_PAD.encode("signature")
        )
    }

    fn token_with_exp(exp: i64) -> String {
        token_with_payload(&format!(r#"{{"exp":{},"iat":0}}"#, exp))
    }

    #[test]
    fn decodes_exp_from_well_formed_token() {
        assert_eq!(decode_expiry(&token_with_exp(1_700_000_000)), Some(1_700_000_000));
    }

    #[test]
    fn wrong_segment_count_is_expired() {
        assert!(is_expired_at("", 0));
        assert!(is_expired_at("only-one-segment", 0));
        assert!(is_expired_at("a.b", 0));
        assert!(is_expired_at("a.b.c.d", 0));
    }

    #[test]
    fn unparseable_payload_is_expired() {
        let bad_base64 = "header.!!!.signature";
        assert!(is_expired_at(bad_base64, 0));

        let bad_json = token_with_payload("not json");
        assert!(is_expired_at(&bad_json, 0));

        let no_exp = token_with_payload(r#"{"iat":123}"#);
        assert!(is_expired_at(&no_exp, 0));
    }

    #[test]
    fn exp_equal_to_now_counts_as_expired() {
        let now = 1_700_000_000;
        assert!(is_expired_at(&token_with_exp(now), now));
        assert!(is_expired_at(&token_with_exp(now - 1), now));
        assert!(!is_expired_at(&token_with_exp(now + 3600), now));
    }

    #[test]
    fn tolerates_padded_base64url() {
        use base64::engine::general_purpose::URL_SAFE;
        let token = format!(
            "h.{}.s",
            URL_SAFE.encode(r#"{"exp":9999999999}"#) // padded variant
        );
        assert_eq!(decode_expiry(&token), Some(9_999_999_999));
    }
}
