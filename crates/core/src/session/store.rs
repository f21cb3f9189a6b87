//! TTL-backed session store.

use std::time::Duration;

use moka::sync::Cache;
use rand::Rng;
use uuid::Uuid;

/// Length of the random token material in bytes.
const TOKEN_BYTES: usize = 32;

/// The household binding held by a live session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Owning household.
    pub household_id: Uuid,
    /// Display name of the household.
    pub family_name: String,
}

/// Session store keyed by opaque token.
///
/// Backed by a concurrent cache with an absolute time-to-live: expiry is
/// measured from token creation, with no sliding renewal.
#[derive(Debug, Clone)]
pub struct SessionStore {
    cache: Cache<String, Session>,
}

impl SessionStore {
    /// Creates a store whose sessions expire `ttl` after creation.
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            cache: Cache::builder().time_to_live(ttl).build(),
        }
    }

    /// Issues a new token bound to the given household.
    #[must_use]
    pub fn create(&self, household_id: Uuid, family_name: &str) -> String {
        let token = generate_token();
        self.cache.insert(
            token.clone(),
            Session {
                household_id,
                family_name: family_name.to_string(),
            },
        );
        token
    }

    /// Returns the household binding for a token, or `None` if the token is
    /// unknown or expired. Callers branch on the sentinel; an absent session
    /// is not an error.
    #[must_use]
    pub fn validate(&self, token: &str) -> Option<Session> {
        self.cache.get(token)
    }

    /// Destroys a session. Removing an already-gone token is a no-op.
    pub fn destroy(&self, token: &str) {
        self.cache.invalidate(token);
    }
}

/// Generates an opaque, URL-safe session token.
fn generate_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::rng().fill(&mut bytes[..]);
    base64_url::encode(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> SessionStore {
        SessionStore::new(Duration::from_secs(60))
    }

    #[test]
    fn test_create_then_validate() {
        let store = store();
        let household_id = Uuid::new_v4();

        let token = store.create(household_id, "Smith");
        let session = store.validate(&token).expect("session should be live");

        assert_eq!(session.household_id, household_id);
        assert_eq!(session.family_name, "Smith");
    }

    #[test]
    fn test_unknown_token_is_none() {
        assert!(store().validate("no-such-token").is_none());
    }

    #[test]
    fn test_destroy_removes_session() {
        let store = store();
        let token = store.create(Uuid::new_v4(), "Smith");

        store.destroy(&token);
        assert!(store.validate(&token).is_none());
    }

    #[test]
    fn test_destroy_is_idempotent() {
        let store = store();
        let token = store.create(Uuid::new_v4(), "Smith");

        store.destroy(&token);
        store.destroy(&token);
        assert!(store.validate(&token).is_none());
    }

    #[test]
    fn test_expired_token_is_none() {
        let store = SessionStore::new(Duration::from_millis(20));
        let token = store.create(Uuid::new_v4(), "Smith");

        std::thread::sleep(Duration::from_millis(60));
        assert!(store.validate(&token).is_none());
    }

    #[test]
    fn test_tokens_are_unique() {
        let store = store();
        let a = store.create(Uuid::new_v4(), "Smith");
        let b = store.create(Uuid::new_v4(), "Jones");
        assert_ne!(a, b);
    }

    #[test]
    fn test_token_is_url_safe() {
        let token = generate_token();
        assert!(
            token
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        );
    }
}
