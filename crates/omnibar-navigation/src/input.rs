//! Query classification for the search bar

use std::fmt;
use url::Url;

use crate::filter::smart_url_filter;
use crate::patterns::UrlPatterns;
use crate::search::SearchTemplate;

/// Deep link target handed to the platform's scheme handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetUri {
    /// Accepted by the URL parser
    Parsed(Url),
    /// Kept verbatim because the URL parser rejected it
    Opaque(String),
}

impl TargetUri {
    pub fn parse(input: &str) -> Self {
        match Url::parse(input) {
            Ok(url) => Self::Parsed(url),
            Err(e) => {
                tracing::debug!(error = %e, "keeping unparseable deep link as opaque uri");
                Self::Opaque(input.to_string())
            }
        }
    }

    /// Scheme of the target; empty when there is none.
    pub fn scheme(&self) -> &str {
        match self {
            Self::Parsed(url) => url.scheme(),
            Self::Opaque(raw) => scheme_of(raw),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Parsed(url) => url.as_str(),
            Self::Opaque(raw) => raw,
        }
    }
}

impl fmt::Display for TargetUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a search bar query leads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Web page or search engine results page
    Link(String),
    /// Non-web scheme (`mailto:`, `geo:`, app schemes, ...)
    DeepLink(TargetUri),
}

impl Destination {
    pub fn as_link(&self) -> Option<&str> {
        match self {
            Self::Link(url) => Some(url),
            Self::DeepLink(_) => None,
        }
    }

    pub fn as_deep_link(&self) -> Option<&TargetUri> {
        match self {
            Self::Link(_) => None,
            Self::DeepLink(uri) => Some(uri),
        }
    }
}

/// Text before the first `:`, unless a path, query or fragment starts first.
fn scheme_of(input: &str) -> &str {
    let Some(colon) = input.find(':') else {
        return "";
    };
    let scheme = &input[..colon];
    if scheme.contains(['/', '?', '#']) {
        return "";
    }
    scheme
}

/// Turns raw search bar text into a [`Destination`].
#[derive(Debug, Clone)]
pub struct QueryClassifier {
    patterns: &'static UrlPatterns,
    search: SearchTemplate,
}

impl QueryClassifier {
    pub fn new(search: SearchTemplate) -> Self {
        Self {
            patterns: UrlPatterns::shared(),
            search,
        }
    }

    pub fn set_search_template(&mut self, search: SearchTemplate) {
        self.search = search;
    }

    pub fn search_template(&self) -> &SearchTemplate {
        &self.search
    }

    /// Normalized address for `input`, or `None` if it should be searched.
    pub fn filter(&self, input: &str) -> Option<String> {
        smart_url_filter(self.patterns, input)
    }

    /// Classify search bar input. Never fails.
    ///
    /// Routing looks at the normalized string, so `HTTP://example.com`
    /// becomes a web link rather than a deep link.
    pub fn classify(&self, query: &str) -> Destination {
        let Some(url) = self.filter(query) else {
            let search_url = self.search.compose(query);
            tracing::debug!(url = %search_url, "classified as search");
            return Destination::Link(search_url);
        };

        match scheme_of(&url) {
            "http" | "https" => {
                tracing::debug!(url = %url, "classified as web link");
                Destination::Link(url)
            }
            scheme => {
                tracing::debug!(scheme, uri = %url, "classified as deep link");
                Destination::DeepLink(TargetUri::parse(&url))
            }
        }
    }
}

impl Default for QueryClassifier {
    fn default() -> Self {
        Self::new(SearchTemplate::default())
    }
}
