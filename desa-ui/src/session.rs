use crate::api::{self, HeaderSet};
use crate::storage::BrowserStorage;
use desa_core::auth::{Credentials, Registration};
use desa_core::error::ClientError;
use desa_core::session::{auth_headers, SessionStore};
use leptos::*;

const MSG_LOGIN_FAILED: &str = "Login gagal";
const MSG_REGISTER_FAILED: &str = "Registrasi gagal";

/// Reactive handle over the session store. `Copy`, so components and spawned
/// futures can capture it freely. The store itself stays the single owner of
/// persistence; the signals mirror it for rendering.
#[derive(Clone, Copy)]
pub struct Auth {
    pub token: RwSignal<Option<String>>,
    pub role: RwSignal<Option<String>>,
    headers: Memo<HeaderSet>,
    store: StoredValue<SessionStore<BrowserStorage>>,
}

impl Auth {
    /// Seed the session from persistent storage, once, at startup.
    pub fn init() -> Self {
        let store = SessionStore::load(BrowserStorage);
        let token = create_rw_signal(store.session().token.clone());
        let role = create_rw_signal(store.session().role.clone());
        let headers = create_memo(move |_| auth_headers(token.get().as_deref()));
        Auth {
            token,
            role,
            headers,
            store: store_value(store),
        }
    }

    pub fn is_authenticated(self) -> bool {
        self.token.get().is_some()
    }

    /// Snapshot of the authorization headers for one request. Read untracked
    /// so a fetch effect re-runs on its refresh signal only, not on token
    /// churn.
    pub fn headers_snapshot(self) -> HeaderSet {
        self.headers.get_untracked()
    }

    /// Requester reference for document requests: the stored email, or the
    /// local default when none is known.
    pub fn requester_reference(self) -> String {
        self.store.with_value(|store| store.requester_reference())
    }

    /// Exchange credentials for a token. Backend rejection surfaces as a
    /// generic `Authentication` message; transport failures pass through
    /// unchanged. On success the role claim is decoded best-effort.
    pub async fn login(self, credentials: Credentials) -> Result<(), ClientError> {
        let token = api::login(&credentials).await.map_err(|err| match err {
            ClientError::Request { .. } => ClientError::Authentication(MSG_LOGIN_FAILED.into()),
            other => other,
        })?;
        self.store
            .update_value(|store| store.establish_with_role(token.access_token));
        self.sync();
        Ok(())
    }

    /// Registration stores the token only; no role is extracted.
    pub async fn register(self, registration: Registration) -> Result<(), ClientError> {
        let token = api::register(&registration).await.map_err(|err| match err {
            ClientError::Request { .. } => ClientError::Authentication(MSG_REGISTER_FAILED.into()),
            other => other,
        })?;
        self.store
            .update_value(|store| store.establish(token.access_token));
        self.sync();
        Ok(())
    }

    /// Idempotent: clearing an anonymous session is a no-op.
    pub fn logout(self) {
        self.store.update_value(|store| store.clear());
        self.sync();
    }

    fn sync(self) {
        let session = self.store.with_value(|store| store.session().clone());
        self.token.set(session.token);
        self.role.set(session.role);
    }
}
