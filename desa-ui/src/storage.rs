use desa_core::session::SessionStorage;

/// `localStorage`-backed session storage. Storage can be absent (private
/// browsing, sandboxed frames); every accessor degrades to a no-op then, so
/// the session simply stops persisting rather than failing.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

fn local_storage() -> Option<web_sys::Storage> {
    let storage = web_sys::window()?.local_storage().ok().flatten();
    if storage.is_none() {
        log::warn!("localStorage unavailable, session will not persist");
    }
    storage
}

impl SessionStorage for BrowserStorage {
    fn read(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn write(&mut self, key: &str, value: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&mut self, key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}
