//! Omnibar Navigation
//!
//! Search bar input classification:
//! 1. `scheme:rest` → deep link, or web link for http/https
//! 2. Bare web address (`example.com`) → navigable address
//! 3. Anything else → search engine link
//!
//! Every input maps to exactly one [`Destination`]; classification never fails.

mod error;
mod filter;
mod input;
mod patterns;
mod search;

pub use error::NavigationError;
pub use filter::smart_url_filter;
pub use input::{Destination, QueryClassifier, TargetUri};
pub use patterns::UrlPatterns;
pub use search::{encode_query, SearchTemplate, DEFAULT_PLACEHOLDER, DEFAULT_SEARCH_HOST};

pub type Result<T> = std::result::Result<T, NavigationError>;
