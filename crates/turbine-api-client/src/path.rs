//! Typed resource-path builder for the `/v1.0` API surface.

use crate::error::ApiError;
use turbine_api_types::Checksum;
use url::Url;

/// Query args the API accepts.
pub(crate) mod queryargs {
    /// When mutating an object a checksum is required; this query arg
    /// holds the expected value.
    pub const CHECKSUM: &str = "checksum";
}

const API_VERSION: &str = "v1.0";

/// A path under the versioned API root, keyed by collection, optional
/// resource key, optional sub-resource, and optional checksum query.
///
/// Segments are percent-encoded when the URL is built, so keys never get
/// spliced into path strings by hand.
#[derive(Debug, Clone)]
pub struct ResourcePath {
    collection: &'static str,
    key: Option<String>,
    subresource: Option<(&'static str, Option<String>)>,
    checksum: Option<Checksum>,
}

impl ResourcePath {
    /// `/v1.0/{collection}`
    pub fn collection(collection: &'static str) -> Self {
        Self { collection, key: None, subresource: None, checksum: None }
    }

    /// `/v1.0/{collection}/{key}`
    pub fn keyed(collection: &'static str, key: &str) -> Self {
        Self {
            collection,
            key: Some(key.to_string()),
            subresource: None,
            checksum: None,
        }
    }

    /// Append `/{name}` or `/{name}/{id}` under the keyed resource.
    pub fn subresource(mut self, name: &'static str, id: Option<String>) -> Self {
        self.subresource = Some((name, id));
        self
    }

    /// Attach `?checksum={checksum}`.
    pub fn checksum(mut self, checksum: &Checksum) -> Self {
        self.checksum = Some(checksum.clone());
        self
    }

    /// Resolve against the server base URL.
    pub fn to_url(&self, base: &Url) -> Result<Url, ApiError> {
        let mut url = base.clone();

        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| ApiError::Config("base url cannot be a base".to_string()))?;
            segments.pop_if_empty();
            segments.push(API_VERSION).push(self.collection);
            if let Some(key) = &self.key {
                segments.push(key);
            }
            if let Some((name, id)) = &self.subresource {
                segments.push(name);
                if let Some(id) = id {
                    segments.push(id);
                }
            }
        }

        if let Some(checksum) = &self.checksum {
            url.query_pairs_mut().append_pair(queryargs::CHECKSUM, checksum.as_str());
        }

        Ok(url)
    }
}
