use pkg_constants::map;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Response body of the publish call.
///
/// Only the path `data.metadata.publish.embed-codes` is read; everything
/// else the service returns is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishResult {
    pub data: PublishedChart,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishedChart {
    pub metadata: PublishedMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishedMetadata {
    pub publish: PublishedEmbed,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PublishedEmbed {
    /// Embed method name -> HTML fragment.
    #[serde(rename = "embed-codes", default)]
    pub embed_codes: HashMap<String, String>,
}

impl PublishResult {
    /// The responsive iframe snippet, if the service returned one.
    pub fn responsive_embed(&self) -> Option<&str> {
        self.data
            .metadata
            .publish
            .embed_codes
            .get(map::EMBED_METHOD_RESPONSIVE)
            .map(String::as_str)
    }
}
