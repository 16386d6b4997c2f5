//! Icon strip loading use case.

use std::sync::Arc;

use spotter_domain::{IconSource, IconState};
use tracing::warn;

use crate::ports::IconFetcher;

/// Startup use case filling the cosmetic icon strip.
///
/// Each source is fetched once; a failure marks that icon errored and never
/// affects the others or any other action.
pub struct LoadIcons<F> {
    fetcher: Arc<F>,
}

impl<F: IconFetcher> LoadIcons<F> {
    /// Creates the use case over an icon fetcher port.
    pub fn new(fetcher: Arc<F>) -> Self {
        Self { fetcher }
    }

    /// Fetches every source and reports per-icon load states, in order.
    pub async fn execute(&self, sources: &[IconSource]) -> Vec<IconState> {
        let mut states = Vec::with_capacity(sources.len());
        for source in sources {
            let loaded = match self.fetcher.fetch(&source.url).await {
                Ok(bytes) => !bytes.is_empty(),
                Err(error) => {
                    warn!(%error, url = %source.url, "icon fetch failed");
                    false
                }
            };
            states.push(IconState {
                source: source.clone(),
                loaded,
            });
        }
        states
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::ports::ServiceError;

    struct MockFetcher;

    #[async_trait]
    impl IconFetcher for MockFetcher {
        async fn fetch(&self, url: &str) -> Result<Vec<u8>, ServiceError> {
            if url.contains("broken") {
                Err(ServiceError::Status { status: 404 })
            } else if url.contains("hollow") {
                Ok(Vec::new())
            } else {
                Ok(b"<svg/>".to_vec())
            }
        }
    }

    #[tokio::test]
    async fn failures_mark_single_icons_without_aborting() {
        let sources = vec![
            IconSource::from_url("https://icons.example/ok.svg"),
            IconSource::from_url("https://icons.example/broken.svg"),
            IconSource::from_url("https://icons.example/hollow.svg"),
        ];
        let use_case = LoadIcons::new(Arc::new(MockFetcher));

        let states = use_case.execute(&sources).await;

        assert_eq!(
            states.iter().map(|s| s.loaded).collect::<Vec<_>>(),
            vec![true, false, false]
        );
        assert_eq!(states[1].label(), "Error loading broken");
    }
}
