use crate::claims;

/// Storage keys for the persisted session. `EMAIL_KEY` is read-only at this
/// layer: document requests use it as the requester reference when present.
pub const TOKEN_KEY: &str = "token";
pub const ROLE_KEY: &str = "role";
pub const EMAIL_KEY: &str = "email";

/// Requester reference used when no email has been stored.
pub const DEFAULT_REQUESTER: &str = "me";

/// The authenticated identity held by the client. Two states: Anonymous
/// (token absent) and Authenticated (token present, role optional). The role
/// is only meaningful while a token is present and is a display hint, not an
/// authorization input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub role: Option<String>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Derived authorization header set: the content-type marker always, the
/// bearer credential only while a token exists. Recomputed on every token
/// change; never fabricates a credential for an anonymous session.
pub fn auth_headers(token: Option<&str>) -> Vec<(&'static str, String)> {
    let mut headers = vec![("Content-Type", "application/json".to_string())];
    if let Some(token) = token {
        headers.push(("Authorization", format!("Bearer {token}")));
    }
    headers
}

/// Durable key-value backend for the session. The UI crate implements this
/// over browser `localStorage`; tests use [`MemoryStorage`].
pub trait SessionStorage {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// Explicit owner of the persisted session: seeds from storage on `load`,
/// writes through on establishment, removes both keys on `clear`.
pub struct SessionStore<S> {
    storage: S,
    session: Session,
}

impl<S: SessionStorage> SessionStore<S> {
    /// Read the persisted token and role once to seed the in-memory session.
    pub fn load(storage: S) -> Self {
        let session = Session {
            token: storage.read(TOKEN_KEY),
            role: storage.read(ROLE_KEY),
        };
        Self { storage, session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn headers(&self) -> Vec<(&'static str, String)> {
        auth_headers(self.session.token.as_deref())
    }

    /// Login path: persist the token and best-effort-decode the embedded role
    /// claim. A claim that fails to decode leaves the role untouched.
    pub fn establish_with_role(&mut self, token: String) {
        if let Some(role) = claims::role_claim(&token) {
            self.storage.write(ROLE_KEY, &role);
            self.session.role = Some(role);
        }
        self.establish(token);
    }

    /// Registration path: persist the token only.
    pub fn establish(&mut self, token: String) {
        self.storage.write(TOKEN_KEY, &token);
        self.session.token = Some(token);
    }

    /// Drop the session and its persisted keys. Idempotent.
    pub fn clear(&mut self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(ROLE_KEY);
        self.session = Session::default();
    }

    /// Stored email, falling back to [`DEFAULT_REQUESTER`], for use as
    /// `pemohon_user_id` on document requests.
    pub fn requester_reference(&self) -> String {
        self.storage
            .read(EMAIL_KEY)
            .filter(|email| !email.is_empty())
            .unwrap_or_else(|| DEFAULT_REQUESTER.to_string())
    }
}

/// In-memory storage backend for native tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage(std::collections::BTreeMap<String, String>);

impl SessionStorage for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) {
        self.0.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.0.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine;

    fn token_with_role(role: &str) -> String {
        let payload = format!(r#"{{"role":"{role}"}}"#);
        format!("h.{}.s", URL_SAFE_NO_PAD.encode(payload.as_bytes()))
    }

    #[test]
    fn login_moves_anonymous_to_authenticated_with_bearer_header() {
        let mut store = SessionStore::load(MemoryStorage::default());
        assert!(!store.session().is_authenticated());

        store.establish_with_role(token_with_role("admin"));
        assert!(store.session().is_authenticated());
        assert_eq!(store.session().role.as_deref(), Some("admin"));

        let token = store.session().token.clone().unwrap();
        assert!(store
            .headers()
            .contains(&("Authorization", format!("Bearer {token}"))));
    }

    #[test]
    fn opaque_token_still_establishes_session() {
        let mut store = SessionStore::load(MemoryStorage::default());
        store.establish_with_role("opaque-token-without-claims".into());
        assert!(store.session().is_authenticated());
        assert_eq!(store.session().role, None);
    }

    #[test]
    fn registration_does_not_extract_a_role() {
        let mut store = SessionStore::load(MemoryStorage::default());
        store.establish(token_with_role("admin"));
        assert!(store.session().is_authenticated());
        assert_eq!(store.session().role, None);
    }

    #[test]
    fn session_survives_a_reload() {
        let mut storage = MemoryStorage::default();
        {
            let mut store = SessionStore::load(storage.clone());
            store.establish_with_role(token_with_role("admin"));
            storage = store.storage;
        }
        let store = SessionStore::load(storage);
        assert!(store.session().is_authenticated());
        assert_eq!(store.session().role.as_deref(), Some("admin"));
    }

    #[test]
    fn clear_is_idempotent() {
        let mut store = SessionStore::load(MemoryStorage::default());
        store.establish_with_role(token_with_role("admin"));
        store.clear();
        assert_eq!(*store.session(), Session::default());
        store.clear();
        assert_eq!(*store.session(), Session::default());
        assert_eq!(store.storage.read(TOKEN_KEY), None);
        assert_eq!(store.storage.read(ROLE_KEY), None);
    }

    #[test]
    fn anonymous_headers_carry_no_credential() {
        let headers = auth_headers(None);
        assert_eq!(headers, vec![("Content-Type", "application/json".into())]);
    }

    #[test]
    fn requester_reference_falls_back_when_email_missing_or_empty() {
        let mut storage = MemoryStorage::default();
        storage.write(EMAIL_KEY, "");
        let store = SessionStore::load(storage);
        assert_eq!(store.requester_reference(), DEFAULT_REQUESTER);

        let mut storage = MemoryStorage::default();
        storage.write(EMAIL_KEY, "kades@desa.id");
        let store = SessionStore::load(storage);
        assert_eq!(store.requester_reference(), "kades@desa.id");
    }
}
