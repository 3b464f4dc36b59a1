use crate::config::Config;
use crate::errors::AppError;
use crate::models::DiscoverQuery;
use reqwest::{header, StatusCode};
use std::time::Duration;

/// Client for TMDb's v3 discovery API.
///
/// The bearer token is handed over at construction and never read from
/// the environment afterwards.
#[derive(Clone)]
pub struct TmdbClient {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl TmdbClient {
    /// Creates a new `TmdbClient`.
    ///
    /// # Arguments
    ///
    /// * `base_url` - TMDb API root, e.g. `https://api.themoviedb.org/3`.
    /// * `token` - The v4 read access token sent as a bearer credential.
    /// * `timeout` - Optional request timeout. `None` keeps reqwest's default (no timeout).
    pub fn new(base_url: String, token: String, timeout: Option<Duration>) -> Result<Self, AppError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| {
            AppError::InternalError(format!("Failed to create TMDb client: {}", e))
        })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        Self::new(
            config.tmdb_base_url.clone(),
            config.tmdb_access_token.clone(),
            config.tmdb_timeout_secs.map(Duration::from_secs),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Calls `GET /discover/tv` with the given query.
    ///
    /// # Returns
    ///
    /// * `Ok(Value)` - The upstream JSON body, untouched, when TMDb answers 200.
    /// * `Err(AppError::UpstreamStatus)` - For any other status. The body is only logged.
    /// * `Err(_)` - Transport failures and non-JSON bodies, see `AppError`.
    pub async fn discover_tv(&self, query: &DiscoverQuery) -> Result<serde_json::Value, AppError> {
        let url = format!("{}/discover/tv", self.base_url);
        tracing::info!("Fetching TMDb discover/tv: {:?}", query.as_pairs());

        let response = self
            .client
            .get(&url)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.token))
            .header(header::ACCEPT, "application/json")
            .query(query.as_pairs())
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::warn!("TMDb returned {}: {}", status, error_text);
            return Err(AppError::UpstreamStatus(status));
        }

        // Body read errors go through `From<reqwest::Error>`: a timeout while
        // streaming the body is still a timeout.
        let data = response.json::<serde_json::Value>().await?;

        tracing::debug!("TMDb discover/tv succeeded");
        Ok(data)
    }
}
