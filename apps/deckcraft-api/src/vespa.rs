//! Thin Vespa client.
//!
//! Only `ping` is wired into the server today (detailed health check).
//! Search and document indexing exist for the upcoming vector-search
//! work and are not reachable from any route.

use anyhow::{anyhow, Result};
use serde_json::Value;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct VespaClient {
    endpoint: String,
    http: reqwest::Client,
}

impl VespaClient {
    pub fn new(endpoint: impl Into<String>, timeout_ms: u64) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .unwrap_or_default();
        Self {
            endpoint: endpoint.into(),
            http,
        }
    }

    /// Health check against Vespa's application status page.
    pub async fn ping(&self) -> bool {
        let url = format!("{}/ApplicationStatus", self.endpoint);
        match self.http.get(&url).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(e) => {
                tracing::debug!(error = %e, "Vespa ping failed");
                false
            }
        }
    }

    /// Not reachable from a route until vector search lands.
    pub async fn search(&self, query: &str, hits: usize) -> Result<Value> {
        let url = format!("{}/search/", self.endpoint);
        let resp = self
            .http
            .get(&url)
            .query(&[
                ("yql", "select * from content where userQuery()"),
                ("query", query),
                ("hits", &hits.to_string()),
            ])
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(anyhow!("Vespa search failed: {}", resp.status()));
        }
        Ok(resp.json().await?)
    }

    /// Not reachable from a route until vector search lands.
    pub async fn put_document(&self, doc_id: &str, document: &Value) -> Result<Value> {
        let url = format!(
            "{}/document/v1/deckcraft/content/docid/{}",
            self.endpoint, doc_id
        );
        let resp = self.http.put(&url).json(document).send().await?;
        if !resp.status().is_success() {
            return Err(anyhow!("Vespa document indexing failed: {}", resp.status()));
        }
        Ok(resp.json().await?)
    }
}
