//! Provider settings.
//!
//! Every external endpoint and credential the panel talks to is
//! configuration, never a source literal. Missing file or fields fall back
//! to the public defaults below; credentials have no defaults at all.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::icon::IconSource;

fn default_ip_echo_url() -> String {
    "https://api.ipify.org".to_string()
}

fn default_geolocation_url() -> String {
    "https://ipinfo.io".to_string()
}

fn default_icon_urls() -> Vec<String> {
    [
        "https://api.iconify.design/logos:rust.svg?color=%23ff2600",
        "https://api.iconify.design/devicon:redis-wordmark.svg?color=%23ff2600",
        "https://api.iconify.design/logos:upstash-icon.svg?color=%23ff2600",
        "https://api.iconify.design/logos:cloudflare-workers-icon.svg?color=%23ff2600",
        "https://api.iconify.design/logos:google-cloud.svg?color=%23ff2600",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// Endpoints and credentials for the external collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderSettings {
    /// IP-echo endpoint answering `{ "ip": string }`.
    #[serde(default = "default_ip_echo_url")]
    pub ip_echo_url: String,

    /// Geolocation base URL; requests go to `{base}/{ip}/json`.
    #[serde(default = "default_geolocation_url")]
    pub geolocation_url: String,

    /// Access token appended to geolocation requests, if any.
    #[serde(default)]
    pub geolocation_token: Option<String>,

    /// Visit store base URL. Unset disables the listing action.
    #[serde(default)]
    pub visit_store_url: Option<String>,

    /// Bearer token for the visit store.
    #[serde(default)]
    pub visit_store_token: Option<String>,

    /// Icon URLs fetched for the cosmetic strip.
    #[serde(default = "default_icon_urls")]
    pub icon_urls: Vec<String>,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            ip_echo_url: default_ip_echo_url(),
            geolocation_url: default_geolocation_url(),
            geolocation_token: None,
            visit_store_url: None,
            visit_store_token: None,
            icon_urls: default_icon_urls(),
        }
    }
}

impl ProviderSettings {
    /// Validates every configured endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error when a URL is empty or lacks an http(s) scheme.
    pub fn validate(&self) -> DomainResult<()> {
        check_endpoint("ip_echo_url", &self.ip_echo_url)?;
        check_endpoint("geolocation_url", &self.geolocation_url)?;
        if let Some(url) = &self.visit_store_url {
            check_endpoint("visit_store_url", url)?;
        }
        for url in &self.icon_urls {
            check_endpoint("icon_urls", url)?;
        }
        if self.visit_store_token.is_some() && self.visit_store_url.is_none() {
            return Err(DomainError::InvalidSettings(
                "visit_store_token set without visit_store_url".to_string(),
            ));
        }
        Ok(())
    }

    /// Icon sources derived from the configured URL list, in order.
    #[must_use]
    pub fn icon_sources(&self) -> Vec<IconSource> {
        self.icon_urls
            .iter()
            .map(|url| IconSource::from_url(url))
            .collect()
    }
}

fn check_endpoint(field: &str, url: &str) -> DomainResult<()> {
    if url.is_empty() {
        return Err(DomainError::InvalidEndpoint(format!("{field} is empty")));
    }
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(DomainError::InvalidEndpoint(format!(
            "{field} must start with http:// or https://: {url}"
        )));
    }
    Ok(())
}
