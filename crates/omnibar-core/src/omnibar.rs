//! Search bar state container

use parking_lot::RwLock;
use std::sync::Arc;

use omnibar_navigation::{Destination, QueryClassifier, SearchTemplate};

use crate::config::Config;
use crate::Result;

/// Configured search bar
///
/// Cheap to clone; clones share the classifier, so a search engine change
/// is seen by every holder.
#[derive(Clone)]
pub struct Omnibar {
    config: Config,
    classifier: Arc<RwLock<QueryClassifier>>,
}

impl Omnibar {
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let classifier = QueryClassifier::new(config.search_template());

        tracing::info!(
            language = %config.language,
            search_engine = %config.search_engine,
            "Omnibar initialized"
        );

        Ok(Self {
            config,
            classifier: Arc::new(RwLock::new(classifier)),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Resolve search bar input into a destination
    pub fn resolve_input(&self, input: &str) -> Destination {
        self.classifier.read().classify(input)
    }

    /// Switch to another search engine template, keeping the current one
    /// if `template` is unusable.
    pub fn set_search_engine(&self, template: SearchTemplate) -> Result<()> {
        template.validate()?;
        tracing::info!(template = template.template(), "Search engine changed");
        self.classifier.write().set_search_template(template);
        Ok(())
    }

    pub fn search_engine(&self) -> SearchTemplate {
        self.classifier.read().search_template().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CoreError;

    #[test]
    fn test_resolve_input() {
        let omnibar = Omnibar::new(Config::new("en")).unwrap();
        assert_eq!(omnibar.config().language, "en");

        assert_eq!(
            omnibar.resolve_input("github"),
            Destination::Link("https://www.google.com/search?hl=en&q=github".to_string())
        );
        assert_eq!(
            omnibar.resolve_input("Http://example.com"),
            Destination::Link("http://example.com".to_string())
        );
        assert_eq!(
            omnibar
                .resolve_input("mailto:test@example.com")
                .as_deep_link()
                .map(|uri| uri.scheme().to_string()),
            Some("mailto".to_string())
        );
    }

    #[test]
    fn test_language_hint() {
        let omnibar = Omnibar::new(Config::new("tr")).unwrap();
        assert_eq!(
            omnibar.resolve_input("istanbul"),
            Destination::Link("https://www.google.com/search?hl=tr&q=istanbul".to_string())
        );
        // Scheme folding does not follow Turkish casing rules.
        assert_eq!(
            omnibar.resolve_input("HTTPS://example.com"),
            Destination::Link("https://example.com".to_string())
        );
    }

    #[test]
    fn test_set_search_engine() {
        let omnibar = Omnibar::new(Config::new("en")).unwrap();
        let shared = omnibar.clone();

        omnibar
            .set_search_engine(SearchTemplate::new("https://duckduckgo.com/?q=%s", "%s"))
            .unwrap();
        assert_eq!(
            shared.resolve_input("rust lang"),
            Destination::Link("https://duckduckgo.com/?q=rust+lang".to_string())
        );

        let err = omnibar
            .set_search_engine(SearchTemplate::new("https://broken.example/", "%s"))
            .unwrap_err();
        assert!(matches!(err, CoreError::Navigation(_)));
        assert_eq!(
            omnibar.search_engine().template(),
            "https://duckduckgo.com/?q=%s"
        );
    }

    #[test]
    fn test_invalid_config() {
        let mut config = Config::new("en");
        config.placeholder = "{q}".to_string();
        assert!(Omnibar::new(config).is_err());
    }

    #[test]
    fn test_concurrent_resolution() {
        let omnibar = Omnibar::new(Config::new("en")).unwrap();

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let omnibar = omnibar.clone();
                std::thread::spawn(move || omnibar.resolve_input(&format!("query {i}")))
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(
                handle.join().unwrap(),
                Destination::Link(format!("https://www.google.com/search?hl=en&q=query+{i}"))
            );
        }
    }
}
