//! Client identity token shared by both apps.
//!
//! The backend treats `user_id` as an opaque partition key for bookmarks
//! and alerts; there is no authentication. A random token is minted on
//! first visit and persisted in localStorage so both apps see the same
//! bookmarks across reloads.

use log::warn;

const STORAGE_KEY: &str = "clean_air_user_id";

/// The persisted user token, minted on first visit. Falls back to an
/// ephemeral token when localStorage is unavailable (private browsing,
/// storage quota), in which case bookmarks last one page load.
pub fn user_id() -> String {
    match storage() {
        Some(storage) => {
            if let Ok(Some(existing)) = storage.get_item(STORAGE_KEY) {
                if !existing.is_empty() {
                    return existing;
                }
            }
            let minted = mint_token();
            if storage.set_item(STORAGE_KEY, &minted).is_err() {
                warn!("localStorage rejected the identity token; continuing unsaved");
            }
            minted
        }
        None => {
            warn!("localStorage unavailable; using an ephemeral identity");
            mint_token()
        }
    }
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Random URL-safe token, e.g. "user-1x3k9q0v2w8e4r".
fn mint_token() -> String {
    let a = (js_sys::Math::random() * 1e15) as u64;
    let b = (js_sys::Math::random() * 1e15) as u64;
    format!("user-{}{}", base36(a), base36(b))
}

/// Lowercase base-36 rendering of `n`, the same alphabet JS uses for
/// `Number.prototype.toString(36)`.
fn base36(mut n: u64) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::base36;

    #[test]
    fn test_base36_digits() {
        assert_eq!(base36(0), "0");
        assert_eq!(base36(35), "z");
        assert_eq!(base36(36), "10");
        assert_eq!(base36(36 * 36 + 1), "101");
    }
}
