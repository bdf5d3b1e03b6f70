//! Search bar configuration

use omnibar_navigation::{SearchTemplate, DEFAULT_PLACEHOLDER, DEFAULT_SEARCH_HOST};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::CoreError;
use crate::locale;
use crate::Result;

/// Replaced by [`Config::language`] when the search template is built.
pub const LANGUAGE_TOKEN: &str = "{lang}";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Search engine URL template
    pub search_engine: String,
    /// Query token inside `search_engine`
    pub placeholder: String,
    /// Language hint for the search engine
    pub language: String,
}

impl Config {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            search_engine: format!(
                "https://{DEFAULT_SEARCH_HOST}/search?hl={LANGUAGE_TOKEN}&q={DEFAULT_PLACEHOLDER}"
            ),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            language: language.into(),
        }
    }

    /// Parse a TOML config; missing keys take their defaults.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&contents)?;
        tracing::info!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Search template with the language filled in.
    pub fn search_template(&self) -> SearchTemplate {
        SearchTemplate::new(
            self.search_engine.replace(LANGUAGE_TOKEN, &self.language),
            self.placeholder.clone(),
        )
    }

    pub fn validate(&self) -> Result<()> {
        if locale::language_of(&self.language).as_deref() != Some(self.language.as_str()) {
            return Err(CoreError::Config(format!(
                "language {:?} is not a lower-case language code",
                self.language
            )));
        }
        self.search_template().validate()?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(locale::language_from_env())
    }
}
