//! Visit store client.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use spotter_application::ports::{ServiceError, VisitStore};
use spotter_domain::ScanPage;

use super::{build_client, send_json};

/// Client for an Upstash-style Redis REST store.
///
/// `GET /scan/{cursor}?match={pattern}` answers
/// `{ "result": [next_cursor, [keys…]] }` and `GET /get/{key}` answers
/// `{ "result": value-or-null }`. Requests carry a bearer token when one is
/// configured.
pub struct RestVisitStore {
    client: Client,
    base_url: String,
    token: Option<String>,
}

/// Wire shape of the scan endpoint: a two-element tuple whose second
/// element is the key page.
#[derive(Debug, Deserialize)]
struct ScanResponse {
    result: (String, Vec<String>),
}

impl From<ScanResponse> for ScanPage {
    fn from(response: ScanResponse) -> Self {
        let (cursor, keys) = response.result;
        Self { cursor, keys }
    }
}

/// Wire shape of the get endpoint; `null` means the key holds no value.
#[derive(Debug, Deserialize)]
struct ValueResponse {
    result: Option<String>,
}

impl RestVisitStore {
    /// Creates a client for the given store base URL and optional bearer
    /// token.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(
        base_url: impl Into<String>,
        token: Option<String>,
    ) -> Result<Self, ServiceError> {
        let base_url = base_url.into();
        Ok(Self {
            client: build_client()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        let mut request = self.client.get(format!("{}/{path}", self.base_url));
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        request
    }
}

#[async_trait]
impl VisitStore for RestVisitStore {
    async fn scan(&self, cursor: &str, pattern: &str) -> Result<ScanPage, ServiceError> {
        let response: ScanResponse = send_json(
            self.get(&format!("scan/{cursor}"))
                .query(&[("match", pattern)]),
        )
        .await?;
        Ok(response.into())
    }

    async fn fetch_value(&self, key: &str) -> Result<Option<String>, ServiceError> {
        let response: ValueResponse = send_json(self.get(&format!("get/{key}"))).await?;
        Ok(response.result)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn scan_payload_decodes_into_page() {
        let response: ScanResponse =
            serde_json::from_str(r#"{"result": ["0", ["ip:1", "ip:2"]]}"#).unwrap();
        let page = ScanPage::from(response);
        assert_eq!(page.cursor, "0");
        assert_eq!(page.keys, vec!["ip:1", "ip:2"]);
        assert!(page.is_last());
    }

    #[test]
    fn scan_payload_with_next_cursor_decodes() {
        let response: ScanResponse =
            serde_json::from_str(r#"{"result": ["1536", []]}"#).unwrap();
        let page = ScanPage::from(response);
        assert_eq!(page.cursor, "1536");
        assert!(!page.is_last());
    }

    #[test]
    fn value_payload_decodes_string_and_null() {
        let present: ValueResponse = serde_json::from_str(r#"{"result":"1.2.3.4"}"#).unwrap();
        assert_eq!(present.result.as_deref(), Some("1.2.3.4"));

        let absent: ValueResponse = serde_json::from_str(r#"{"result":null}"#).unwrap();
        assert_eq!(absent.result, None);
    }

    #[test]
    fn store_builds_with_and_without_token() {
        assert!(RestVisitStore::new("https://store.example", None).is_ok());
        assert!(
            RestVisitStore::new("https://store.example/", Some("secret".to_string())).is_ok()
        );
    }
}
