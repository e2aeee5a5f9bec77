use contracts::system::auth::Session;
use contracts::system::token;
use web_sys::window;

const TOKEN_KEY: &str = "token";
const SESSION_KEY: &str = "user";

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Persist the raw token and the session object together. The two entries
/// are only meaningful as a pair; they are always written and cleared
/// together.
pub fn save_session(session: &Session) {
    let Some(storage) = local_storage() else {
        return;
    };
    let Ok(json) = serde_json::to_string(session) else {
        return;
    };
    let _ = storage.set_item(TOKEN_KEY, &session.token);
    let _ = storage.set_item(SESSION_KEY, &json);
}

/// Remove both session entries.
pub fn clear_session() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(SESSION_KEY);
    }
}

/// Restore the stored session. The token is checked once, synchronously,
/// before the stored data is trusted; anything expired, malformed or
/// half-written purges storage and yields `None`, so stale session data is
/// never handed to the rest of the app.
pub fn restore_session() -> Option<Session> {
    let storage = local_storage()?;
    let stored_token = storage.get_item(TOKEN_KEY).ok().flatten();
    let stored_session = storage.get_item(SESSION_KEY).ok().flatten();

    let restored = decide_restore(stored_token, stored_session, chrono::Utc::now().timestamp());
    if restored.is_none() {
        clear_session();
    }
    restored
}

/// Pure restore decision: both entries must exist, the token must be
/// unexpired, and the session JSON must deserialize.
fn decide_restore(
    stored_token: Option<String>,
    stored_session: Option<String>,
    now: i64,
) -> Option<Session> {
    let stored_token = stored_token?;
    let stored_session = stored_session?;
    if token::is_expired_at(&stored_token, now) {
        return None;
    }
    serde_json::from_str(&stored_session).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine;
    use contracts::system::auth::AccountType;

    fn token_with_exp(exp: i64) -> String {
        format!(
            "h.{}.s",
            URL_SAFE_NO_PAD.encode(format!(r#"{{"exp":{}}}"#, exp))
        )
    }

    fn session_json(token: &str) -> String {
        format!(
            r#"{{"token":"{}","branchId":"5","accountType":"ADMIN","username":"x"}}"#,
            token
        )
    }

    #[test]
    fn restores_unexpired_session_with_identical_fields() {
        let now = 1_700_000_000;
        let token = token_with_exp(now + 3600);
        let session = decide_restore(
            Some(token.clone()),
            Some(session_json(&token)),
            now,
        )
        .unwrap();

        assert_eq!(session.token, token);
        assert_eq!(session.branch_id, "5");
        assert_eq!(session.account_type, AccountType::Admin);
        assert_eq!(session.username, "x");
    }

    #[test]
    fn expired_token_is_not_restored() {
        let now = 1_700_000_000;
        let token = token_with_exp(now - 1);
        assert!(decide_restore(Some(token.clone()), Some(session_json(&token)), now).is_none());
    }

    #[test]
    fn half_written_storage_is_not_restored() {
        let now = 1_700_000_000;
        let token = token_with_exp(now + 3600);
        assert!(decide_restore(Some(token.clone()), None, now).is_none());
        assert!(decide_restore(None, Some(session_json(&token)), now).is_none());
    }

    #[test]
    fn corrupt_session_json_is_not_restored() {
        let now = 1_700_000_000;
        let token = token_with_exp(now + 3600);
        assert!(decide_restore(Some(token), Some("{not json".to_string()), now).is_none());
    }
}
