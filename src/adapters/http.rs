use crate::domain::model::{Blend, Spice};
use crate::domain::ports::CatalogSource;
use crate::utils::error::{CatalogError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

/// Catalog source backed by the upstream HTTP API
/// (`GET {base}/spices`, `GET {base}/blends`).
pub struct HttpCatalogSource {
    client: Client,
    base_url: String,
}

impl HttpCatalogSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    async fn fetch_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        let endpoint = format!("{}/{}", self.base_url, path);

        tracing::debug!("Making API request to: {}", endpoint);
        let response = self.client.get(&endpoint).send().await?;
        tracing::debug!("API response status: {}", response.status());

        if !response.status().is_success() {
            return Err(CatalogError::UpstreamStatus {
                endpoint,
                status: response.status(),
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch_spices(&self) -> Result<Vec<Spice>> {
        self.fetch_list("spices").await
    }

    async fn fetch_blends(&self) -> Result<Vec<Blend>> {
        self.fetch_list("blends").await
    }
}
