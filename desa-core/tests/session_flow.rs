use desa_core::auth::{validate_credentials, Credentials};
use desa_core::error::ClientError;
use desa_core::records::{validate_new_penduduk, NewPenduduk};
use desa_core::refresh::Generation;
use desa_core::session::{MemoryStorage, SessionStore, SessionStorage, ROLE_KEY, TOKEN_KEY};

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

fn admin_token() -> String {
    format!(
        "h.{}.s",
        URL_SAFE_NO_PAD.encode(br#"{"sub":"u-1","role":"admin"}"#)
    )
}

#[test]
fn full_session_lifecycle() {
    let mut storage = MemoryStorage::default();

    // Anonymous start: nothing persisted, no credential in the headers.
    let store = SessionStore::load(storage.clone());
    assert!(!store.session().is_authenticated());
    assert_eq!(
        store.headers(),
        vec![("Content-Type", "application/json".to_string())]
    );

    // Rejected credentials never reach the store.
    let bad = Credentials {
        email: "warga@desa.id".into(),
        password: "".into(),
    };
    assert!(matches!(
        validate_credentials(&bad),
        Err(ClientError::Validation(_))
    ));
    assert!(!store.session().is_authenticated());

    // Successful login: token persisted, role decoded, bearer header derived.
    let mut store = SessionStore::load(storage.clone());
    store.establish_with_role(admin_token());
    assert!(store.session().is_authenticated());
    assert_eq!(store.session().role.as_deref(), Some("admin"));
    let bearer = format!("Bearer {}", admin_token());
    assert!(store.headers().contains(&("Authorization", bearer)));

    // The establishment is durable across a reload.
    storage.write(TOKEN_KEY, &admin_token());
    storage.write(ROLE_KEY, "admin");
    let reloaded = SessionStore::load(storage);
    assert_eq!(reloaded.session(), store.session());

    // Logout drops both keys and is safe to repeat.
    let mut store = reloaded;
    store.clear();
    store.clear();
    assert!(!store.session().is_authenticated());
    assert_eq!(store.session().role, None);
}

#[test]
fn record_creation_drives_exactly_one_refresh() {
    let mut refresh = Generation::new();

    // A submission missing a required field is stopped before any request
    // and therefore before any refresh.
    let incomplete = NewPenduduk {
        nik: String::new(),
        nama: "Budi".into(),
        pekerjaan: String::new(),
    };
    if validate_new_penduduk(&incomplete).is_ok() {
        refresh.bump();
    }
    assert_eq!(refresh.value(), 0);

    // A valid submission bumps the generation once; the list fetch stamped
    // before the bump is now stale and must be discarded.
    let stale_stamp = refresh;
    let complete = NewPenduduk {
        nik: "1234".into(),
        nama: "Budi".into(),
        pekerjaan: "Petani".into(),
    };
    assert!(validate_new_penduduk(&complete).is_ok());
    refresh.bump();
    assert_eq!(refresh.value(), 1);
    assert!(!refresh.is_current(stale_stamp));
    assert!(refresh.is_current(refresh));
}
