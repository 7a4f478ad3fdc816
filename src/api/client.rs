//! Subjects REST client implementation.
//!
//! Fetches one page of subjects with offset-based pagination.

use crate::api::models::{SubjectPage, SubjectQuery};
use crate::api::source::SubjectSource;
use crate::config::Config;
use crate::error::FetchError;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// REST client for the subjects endpoint.
#[derive(Debug, Clone)]
pub struct SubjectClient {
    /// HTTP client for API requests
    client: Client,
    /// Base URL of the API, without trailing slash
    base_url: String,
    /// Team namespace segment
    team: String,
}

impl SubjectClient {
    /// Create a new client from configuration.
    ///
    /// # Arguments
    /// * `config` - Application configuration
    ///
    /// # Returns
    /// * `Result<SubjectClient>` - New client or error
    ///
    /// # Details
    /// Requires a base URL and a team. The request timeout comes from
    /// `request_timeout_secs`.
    pub fn new(config: &Config) -> Result<Self> {
        if config.base_url.trim().is_empty() {
            return Err(anyhow::anyhow!(
                "API base URL is required. Please set it in config.jsonc"
            ));
        }
        if config.team.trim().is_empty() {
            return Err(anyhow::anyhow!(
                "Team is required. Please set it in config.jsonc"
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            team: config.team.trim_matches('/').to_string(),
        })
    }

    /// URL of the subjects collection.
    pub fn subjects_url(&self) -> String {
        format!("{}/{}/subjects/", self.base_url, self.team)
    }
}

#[async_trait]
impl SubjectSource for SubjectClient {
    async fn fetch_subjects(&self, query: SubjectQuery) -> Result<SubjectPage, FetchError> {
        let url = self.subjects_url();
        debug!(%url, offset = query.offset, limit = query.limit, order = query.order.as_param(), "fetching subjects");

        let response = self
            .client
            .get(&url)
            .query(&query.to_params())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status { status, body });
        }

        let bytes = response.bytes().await?;
        let page: SubjectPage = serde_json::from_slice(&bytes)?;
        Ok(page)
    }
}
