//! Compiled URL patterns
//!
//! Both patterns are compiled once per process and shared read-only.
//! Whitespace classes are ASCII-only so matching never depends on locale.

use regex::Regex;
use std::sync::LazyLock;

/// `<scheme>:<separator><rest>`.
///
/// Group 1 is the scheme, group 2 is the colon plus everything after it.
/// The rest must start with a non-whitespace character; literal interior
/// spaces are allowed so `http://example.com/a b` can still be repaired;
/// callers accept them only behind a web scheme.
const SCHEME_PATTERN: &str = r"^([A-Za-z0-9_]+)(:/{0,2}[^ \t\n\x0B\x0C\r][^\t\n\x0B\x0C\r]*)$";

const USERINFO_CHAR: &str = r"(?:[A-Za-z0-9$\-_.+!*'(),;?&=]|%[0-9A-Fa-f]{2})";
const LABEL_CHAR: &str = r"[A-Za-z0-9\x{A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}]";
const TLD_CHAR: &str = r"[A-Za-z\x{A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}]";
const IPV4_OCTET: &str = r"(?:25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9]?[0-9])";

/// Schemes the web-URL matcher accepts in front of `://`.
const WEB_SCHEMES: &[&str] = &["http", "https", "ftp", "rtsp"];

static SHARED: LazyLock<UrlPatterns> = LazyLock::new(UrlPatterns::new);

fn web_url_pattern() -> String {
    let scheme = format!(
        r"(?:(?i:https?|ftp|rtsp)://(?:{USERINFO_CHAR}{{1,64}}(?::{USERINFO_CHAR}{{1,25}})?@)?)"
    );
    let hostname = format!(
        r"(?:{LABEL_CHAR}(?:(?:{LABEL_CHAR}|-){{0,61}}{LABEL_CHAR})?\.)+(?:xn--[A-Za-z0-9\-]{{1,59}}|{TLD_CHAR}{{2,63}})"
    );
    let ipv4 = format!(r"{IPV4_OCTET}(?:\.{IPV4_OCTET}){{3}}");
    let ipv6 = r"\[[0-9A-Fa-f:.]+\]";
    let host = format!(r"(?:(?i:localhost)|{ipv4}|{ipv6}|{hostname})");
    let port = r"(?::[0-9]{1,5})?";
    // Path, query and fragment: anything but line breaks and tabs.
    let tail = r"(?:[/?#][^\t\n\x0B\x0C\r]*)?";

    format!("^{scheme}?{host}{port}{tail}$")
}

/// Precompiled scheme and web-URL matchers.
#[derive(Debug, Clone)]
pub struct UrlPatterns {
    scheme: Regex,
    web_url: Regex,
}

impl UrlPatterns {
    pub fn new() -> Self {
        Self {
            scheme: Regex::new(SCHEME_PATTERN).expect("scheme pattern is valid"),
            web_url: Regex::new(&web_url_pattern()).expect("web url pattern is valid"),
        }
    }

    /// Process-wide instance.
    pub fn shared() -> &'static Self {
        &SHARED
    }

    /// Split `input` into `(scheme, ":" + rest)` if the whole string has an
    /// explicit scheme.
    pub fn split_scheme<'a>(&self, input: &'a str) -> Option<(&'a str, &'a str)> {
        let caps = self.scheme.captures(input)?;
        Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
    }

    /// Whether `scheme` (already lower-cased) followed by `rest` starts a web
    /// URL, e.g. `http` + `://example.com`.
    pub fn is_web_scheme(&self, scheme: &str, rest: &str) -> bool {
        WEB_SCHEMES.contains(&scheme) && rest.starts_with("://")
    }

    /// Whether `input` has the shape of a browser-navigable web URL.
    pub fn is_web_url(&self, input: &str) -> bool {
        self.web_url.is_match(input)
    }
}

impl Default for UrlPatterns {
    fn default() -> Self {
        Self::new()
    }
}
