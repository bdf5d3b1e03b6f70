//! Printable destinations

use omnibar_core::Destination;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum DestinationResult {
    Link(String),
    DeepLink { scheme: String, uri: String },
}

impl From<Destination> for DestinationResult {
    fn from(destination: Destination) -> Self {
        match destination {
            Destination::Link(url) => DestinationResult::Link(url),
            Destination::DeepLink(uri) => DestinationResult::DeepLink {
                scheme: uri.scheme().to_string(),
                uri: uri.to_string(),
            },
        }
    }
}

impl DestinationResult {
    /// Tab separated form: `link\t<url>` or `deeplink\t<scheme>\t<uri>`.
    pub fn to_line(&self) -> String {
        match self {
            DestinationResult::Link(url) => format!("link\t{url}"),
            DestinationResult::DeepLink { scheme, uri } => format!("deeplink\t{scheme}\t{uri}"),
        }
    }
}
