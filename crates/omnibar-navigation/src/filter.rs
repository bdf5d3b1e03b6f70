//! Smart URL filter
//!
//! Decides whether address bar text is an address at all:
//! - Anything with a space is a search, unless it carries a web scheme and
//!   still looks like a web URL (`http://example.com/a b`).
//! - An explicit `scheme:rest` always wins, so custom deep-link schemes survive.
//! - A mistakenly upper-cased scheme is lower-cased (`Http://` → `http://`).

use crate::patterns::UrlPatterns;

/// Returns the normalized address, or `None` if the input should be searched.
pub fn smart_url_filter(patterns: &UrlPatterns, input: &str) -> Option<String> {
    let input = input.trim();
    let has_space = input.contains(' ');

    if let Some((scheme, rest)) = patterns.split_scheme(input) {
        // ASCII folding only; the scheme is ASCII by construction.
        let lowered = scheme.to_ascii_lowercase();
        let url = if lowered != scheme {
            format!("{lowered}{rest}")
        } else {
            input.to_string()
        };

        if !has_space {
            return Some(url);
        }

        // Only a real web scheme may carry spaces; `localhost:8080/a b`
        // has no scheme at all.
        if patterns.is_web_scheme(&lowered, rest) && patterns.is_web_url(&url) {
            return Some(url.replace(' ', "%20"));
        }

        tracing::trace!("spaced input without a web scheme is searched");
        return None;
    }

    if !has_space && patterns.is_web_url(input) {
        return Some(input.to_string());
    }

    None
}
