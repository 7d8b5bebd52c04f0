//! Locale selection for the LSP server.
//!
//! Uses the CLI's order minus the flag: `initializationOptions.locale`, then
//! `FILEEXTSWITCH_LOCALE`, `LC_ALL` / `LANG`, the system locale, and "en".

use fileextswitch_core::i18n::{is_supported, locale_from_env, normalize_locale};
use rust_i18n::set_locale;

/// Called once at startup.
pub fn init_from_env() {
    let locale = locale_from_env(sys_locale::get_locale()).unwrap_or_else(|| "en".to_string());
    set_locale(&locale);
}

/// Apply a locale sent by the client. Unsupported values keep the current
/// locale and return `false`.
pub fn init_from_client(client_locale: &str) -> bool {
    let normalized = normalize_locale(client_locale);
    if !is_supported(&normalized) {
        return false;
    }
    set_locale(&normalized);
    true
}
