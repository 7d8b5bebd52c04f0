//! Locale normalisation shared by the CLI and the LSP server.

/// Locales with a message catalogue.
pub const SUPPORTED_LOCALES: &[&str] = &["en", "es"];

/// Environment variable consulted before `LC_ALL` / `LANG`.
pub const LOCALE_ENV_VAR: &str = "FILEEXTSWITCH_LOCALE";

/// Reduce a locale string to a catalogue code.
///
/// - "en_US.UTF-8" -> "en"
/// - "es-MX" -> "es"
/// - " ES " -> "es"
///
/// Unknown languages come back lowercased without region or encoding, so
/// callers can report them.
pub fn normalize_locale(locale: &str) -> String {
    let locale = locale.trim();
    let base = locale.split('.').next().unwrap_or(locale);
    let lang = base.split(['_', '-']).next().unwrap_or(base);

    SUPPORTED_LOCALES
        .iter()
        .find(|code| lang.eq_ignore_ascii_case(code))
        .map_or_else(|| lang.to_lowercase(), |code| (*code).to_string())
}

pub fn is_supported(locale: &str) -> bool {
    SUPPORTED_LOCALES.contains(&locale)
}

/// First supported locale from the environment, if any.
///
/// Checks `FILEEXTSWITCH_LOCALE`, then `LC_ALL` / `LANG`, then the system
/// locale reported by the caller.
pub fn locale_from_env(system_locale: Option<String>) -> Option<String> {
    let env = [LOCALE_ENV_VAR, "LC_ALL", "LANG"]
        .into_iter()
        .filter_map(|var| std::env::var(var).ok());

    env.chain(system_locale)
        .map(|candidate| normalize_locale(&candidate))
        .find(|normalized| is_supported(normalized))
}
