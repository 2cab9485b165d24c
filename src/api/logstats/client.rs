use std::time::Duration;
use reqwest::Client as HttpClient;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use tracing::{debug, warn};
use crate::models::ChartPayload;
use super::models::ApiError;

/// Client for the `/logstats_data` endpoint of a scraper daemon
pub struct LogStatsClient {
    http_client: HttpClient,
    base_url: String,
}

impl LogStatsClient {
    pub const DEFAULT_BASE_URL: &'static str = "http://127.0.0.1:6800";

    /// Create a client for the given base URL with a per-request timeout
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let http_client = HttpClient::builder()
            .timeout(timeout)
            .default_headers(Self::create_headers())
            .build()
            .map_err(|e| ApiError::Request(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn create_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET /logstats_data?n={records}
    ///
    /// Returns the body parsed as chart input. Nothing in the payload is
    /// reordered, filtered or rewritten.
    pub async fn fetch_series(&self, records: usize) -> Result<ChartPayload, ApiError> {
        let url = format!("{}/logstats_data", self.base_url);
        debug!("GET {}?n={}", url, records);

        let response = self.http_client
            .get(&url)
            .query(&[("n", records)])
            .send()
            .await
            .map_err(|e| ApiError::Request(format!("Request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Request(format!("Failed to read response body: {}", e)))?;

        if !status.is_success() {
            warn!("logstats endpoint answered {}: {}", status.as_u16(), body);
            return Err(ApiError::Status(status.as_u16(), body));
        }

        serde_json::from_str::<ChartPayload>(&body)
            .map_err(|e| ApiError::Deserialization(format!("Failed to parse response: {}", e)))
    }
}
