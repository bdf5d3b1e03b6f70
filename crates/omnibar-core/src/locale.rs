//! Language hint from the process locale
//!
//! Resolved once at startup and passed around as plain configuration.

/// Used when the environment names no usable language.
pub const FALLBACK_LANGUAGE: &str = "en";

/// Variables consulted in POSIX precedence order.
const LOCALE_VARS: &[&str] = &["LC_ALL", "LC_MESSAGES", "LANG"];

/// Language code of the current process locale, e.g. `de` for `de_DE.UTF-8`.
pub fn language_from_env() -> String {
    language_from_vars(|key| std::env::var(key).ok())
}

/// Like [`language_from_env`], reading variables through `get`.
pub fn language_from_vars<F>(get: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    LOCALE_VARS
        .iter()
        .filter_map(|key| get(key))
        .find(|value| !value.trim().is_empty())
        .and_then(|locale| language_of(&locale))
        .unwrap_or_else(|| FALLBACK_LANGUAGE.to_string())
}

/// Language part of a locale name: `pt_BR.UTF-8@euro` → `pt`.
///
/// Returns `None` for `C`, `POSIX` and anything that is not 2-8 ASCII letters.
pub fn language_of(locale: &str) -> Option<String> {
    let name = locale
        .trim()
        .split(['.', '@'])
        .next()
        .unwrap_or_default();
    let language = name.split(['_', '-']).next().unwrap_or_default();

    if language.eq_ignore_ascii_case("posix") {
        return None;
    }
    if !(2..=8).contains(&language.len()) || !language.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }

    Some(language.to_ascii_lowercase())
}
