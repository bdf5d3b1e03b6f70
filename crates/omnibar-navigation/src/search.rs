//! Search URL composition

use url::form_urlencoded;

use crate::error::NavigationError;
use crate::Result;

/// Query token used by the built-in templates.
pub const DEFAULT_PLACEHOLDER: &str = "%s";

/// Host of the default search engine.
pub const DEFAULT_SEARCH_HOST: &str = "www.google.com";

/// Percent-encode a query for inclusion in a URL query string.
///
/// Uses `application/x-www-form-urlencoded` rules: space becomes `+`,
/// alphanumerics and `*-._` are kept, everything else is `%XX` escaped.
pub fn encode_query(query: &str) -> String {
    form_urlencoded::byte_serialize(query.as_bytes()).collect()
}

/// Search engine URL template with a single placeholder token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTemplate {
    template: String,
    placeholder: String,
}

impl SearchTemplate {
    pub fn new(template: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            placeholder: placeholder.into(),
        }
    }

    /// Google search with a language hint, e.g. `hl=en`.
    pub fn google(language: &str) -> Self {
        Self::new(
            format!("https://{DEFAULT_SEARCH_HOST}/search?hl={language}&q={DEFAULT_PLACEHOLDER}"),
            DEFAULT_PLACEHOLDER,
        )
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Check that the placeholder is usable in this template.
    pub fn validate(&self) -> Result<()> {
        if self.placeholder.is_empty() {
            return Err(NavigationError::EmptyPlaceholder);
        }
        if !self.template.contains(&self.placeholder) {
            return Err(NavigationError::MissingPlaceholder {
                template: self.template.clone(),
                placeholder: self.placeholder.clone(),
            });
        }
        Ok(())
    }

    /// Substitute the trimmed, encoded query for the first placeholder.
    pub fn try_compose(&self, query: &str) -> Result<String> {
        self.validate()?;
        let encoded = encode_query(query.trim());
        Ok(self.template.replacen(&self.placeholder, &encoded, 1))
    }

    /// Like [`try_compose`](Self::try_compose), but an unusable template
    /// yields an empty string instead of an error.
    pub fn compose(&self, query: &str) -> String {
        match self.try_compose(query) {
            Ok(url) => url,
            Err(e) => {
                tracing::warn!(error = %e, "could not compose search url");
                String::new()
            }
        }
    }

    /// Recover the encoded query from a URL produced by this template.
    pub fn extract_query<'a>(&self, url: &'a str) -> Option<&'a str> {
        if self.placeholder.is_empty() {
            return None;
        }
        let (prefix, suffix) = self.template.split_once(self.placeholder.as_str())?;
        url.strip_prefix(prefix)?.strip_suffix(suffix)
    }
}

impl Default for SearchTemplate {
    fn default() -> Self {
        Self::google("en")
    }
}
