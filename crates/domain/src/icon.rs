//! Icon strip types.
//!
//! The icon row is cosmetic: each configured URL is fetched at startup and
//! the strip shows a per-icon loaded or error label. The bytes themselves
//! are never decoded.

use serde::{Deserialize, Serialize};

/// A remote icon to fetch, named after the final URL path segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconSource {
    /// Short display name, e.g. `logos:rust`.
    pub name: String,
    /// Full fetch URL.
    pub url: String,
}

impl IconSource {
    /// Builds a source from a URL, deriving the name from the last path
    /// segment with any query string and `.svg` suffix stripped.
    #[must_use]
    pub fn from_url(url: &str) -> Self {
        let without_query = url.split('?').next().unwrap_or(url);
        let segment = without_query
            .rsplit('/')
            .next()
            .unwrap_or(without_query);
        let name = segment.strip_suffix(".svg").unwrap_or(segment).to_string();
        Self {
            name,
            url: url.to_string(),
        }
    }
}

/// Fetch state of one icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconState {
    /// The icon that was fetched.
    pub source: IconSource,
    /// Whether the fetch returned a non-empty body.
    pub loaded: bool,
}

impl IconState {
    /// Label shown in the icon strip for this entry.
    #[must_use]
    pub fn label(&self) -> String {
        if self.loaded {
            self.source.name.clone()
        } else {
            format!("Error loading {}", self.source.name)
        }
    }
}
