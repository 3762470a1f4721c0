//! Session token kept in `localStorage` so a reload does not log out.

use web_sys::Storage;

pub const TOKEN_KEY: &str = "shop_admin.access_token";

fn local_storage() -> Option<Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Stored token, blank values count as absent.
pub fn load_token() -> Option<String> {
    local_storage()
        .and_then(|storage| storage.get_item(TOKEN_KEY).ok().flatten())
        .filter(|token| !token.trim().is_empty())
}

pub fn store_token(token: &str) {
    let Some(storage) = local_storage() else {
        log::warn!("localStorage unavailable, session ends with this page");
        return;
    };
    if storage.set_item(TOKEN_KEY, token).is_err() {
        log::warn!("could not persist session token");
    }
}

pub fn forget_token() {
    if let Some(storage) = local_storage() {
        if storage.remove_item(TOKEN_KEY).is_err() {
            log::warn!("could not remove session token");
        }
    }
}
