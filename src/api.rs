use async_trait::async_trait;
use reqwest::Client;

use crate::catalog::Catalog;
use crate::error::{Result, SquanchError};
use crate::types::{Character, EpisodePage};

/// The live HTTP catalog client.
pub struct RemoteCatalog {
    client: Client,
    base: String,
}

impl RemoteCatalog {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            client: Client::new(),
            base: base.trim_end_matches('/').to_string(),
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        tracing::debug!(%url, "catalog request");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SquanchError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(SquanchError::Http(response.status()));
        }

        response
            .json()
            .await
            .map_err(|e| SquanchError::Network(e.to_string()))
    }
}

impl std::fmt::Debug for RemoteCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteCatalog")
            .field("base", &self.base)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Catalog for RemoteCatalog {
    async fn episode_page(&self, page: u32) -> Result<EpisodePage> {
        let url = format!("{}/episode?page={}", self.base, page);
        self.get_json(&url).await
    }

    async fn character(&self, id: u64) -> Result<Character> {
        let url = format!("{}/character/{}", self.base, id);
        self.get_json(&url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_stripped() {
        let catalog = RemoteCatalog::new("https://example.test/api/");
        assert_eq!(catalog.base, "https://example.test/api");
    }
}
