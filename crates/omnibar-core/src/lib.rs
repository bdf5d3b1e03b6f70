//! Omnibar Core
//!
//! Configuration and coordination around the search bar classifier.
//! The locale is resolved once here and injected; nothing below reads it.

mod config;
mod error;
pub mod locale;
mod omnibar;

pub use config::Config;
pub use error::CoreError;
pub use omnibar::Omnibar;

// Re-export navigation types
pub use omnibar_navigation::{
    Destination, NavigationError, QueryClassifier, SearchTemplate, TargetUri,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
///
/// Logs go to stderr so stdout stays usable for results.
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
