//! Filmoteca API Client

use anyhow::{bail, Context, Result};
use reqwest::{Client, Response};
use serde::Serialize;

/// Catalog slice addressed by a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Catalog {
    Movie,
    Actor,
    Director,
}

impl Catalog {
    pub fn prefix(&self) -> &'static str {
        match self {
            Catalog::Movie => "movie",
            Catalog::Actor => "actor",
            Catalog::Director => "director",
        }
    }
}

/// API Client for Filmoteca
pub struct FilmotecaClient {
    client: Client,
    base_url: String,
}

impl FilmotecaClient {
    /// Create a new API client
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Test connection with health check
    pub async fn health(&self) -> Result<bool> {
        let url = format!("{}/health", self.base_url);
        let resp = self.client.get(&url).send().await?;
        Ok(resp.status().is_success())
    }

    /// Search records by exact name
    pub async fn search(&self, catalog: Catalog, name: &str) -> Result<Vec<serde_json::Value>> {
        let url = self.search_url(catalog, name);
        tracing::debug!("GET {}", url);

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to connect to Filmoteca API")?;

        let records = ensure_success(resp)
            .await?
            .json()
            .await
            .context("Failed to parse response")?;

        Ok(records)
    }

    /// Register a record, returning the server's confirmation
    pub async fn register<B: Serialize>(&self, catalog: Catalog, body: &B) -> Result<String> {
        let url = format!("{}/{}/register", self.base_url, catalog.prefix());
        tracing::debug!("POST {}", url);

        let resp = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .context("Failed to connect to Filmoteca API")?;

        Ok(ensure_success(resp).await?.text().await?)
    }

    /// Update a record by ID
    pub async fn update<B: Serialize>(
        &self,
        catalog: Catalog,
        id: i64,
        body: &B,
    ) -> Result<String> {
        let url = format!("{}/{}/update/{}", self.base_url, catalog.prefix(), id);
        tracing::debug!("PUT {}", url);

        let resp = self
            .client
            .put(&url)
            .json(body)
            .send()
            .await
            .context("Failed to connect to Filmoteca API")?;

        Ok(ensure_success(resp).await?.text().await?)
    }

    /// Delete a record by ID
    pub async fn delete(&self, catalog: Catalog, id: i64) -> Result<String> {
        let url = format!("{}/{}/delete/{}", self.base_url, catalog.prefix(), id);
        tracing::debug!("DELETE {}", url);

        let resp = self
            .client
            .delete(&url)
            .send()
            .await
            .context("Failed to connect to Filmoteca API")?;

        Ok(ensure_success(resp).await?.text().await?)
    }

    fn search_url(&self, catalog: Catalog, name: &str) -> String {
        format!(
            "{}/{}/search?name={}",
            self.base_url,
            catalog.prefix(),
            urlencoding::encode(name)
        )
    }
}

async fn ensure_success(resp: Response) -> Result<Response> {
    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        bail!("API error ({}): {}", status, body);
    }
    Ok(resp)
}
