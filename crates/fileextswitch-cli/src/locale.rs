//! Locale detection and initialization for the fileextswitch CLI.
//!
//! Resolution order:
//! 1. `--locale` CLI flag (highest priority)
//! 2. `locale` from the config file
//! 3. `FILEEXTSWITCH_LOCALE`, then `LC_ALL` / `LANG`
//! 4. System locale via `sys-locale`
//! 5. Fallback to "en"

use fileextswitch_core::i18n::{is_supported, locale_from_env, normalize_locale};
use rust_i18n::set_locale;

use crate::terminal::print_warning;

/// Pick and apply the message locale.
pub fn init(cli_locale: Option<&str>, config_locale: Option<&str>) {
    set_locale(&resolve(cli_locale, config_locale));
}

fn resolve(cli_locale: Option<&str>, config_locale: Option<&str>) -> String {
    if let Some(explicit) = cli_locale.or(config_locale) {
        let normalized = normalize_locale(explicit);
        if is_supported(&normalized) {
            return normalized;
        }
        print_warning(&format!(
            "unsupported locale '{explicit}', falling back to 'en'"
        ));
        return "en".to_string();
    }

    locale_from_env(sys_locale::get_locale()).unwrap_or_else(|| "en".to_string())
}
