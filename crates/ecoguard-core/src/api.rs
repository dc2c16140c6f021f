//! HTTP client for the Ecoguard backend.
//!
//! One request per call, no retries, no timeout beyond the reqwest defaults.
//! Any HTTP status is returned as a [`ServerResponse`]; only transport
//! failures become errors.

use std::sync::Arc;

use reqwest::Url;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::ApiConfig;
use crate::error::{FormError, FormResult};

/// Status and decoded JSON payload of a completed request.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerResponse {
    pub status: u16,
    pub payload: Value,
}

impl ServerResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Error detail reported by the server, if any.
    ///
    /// Prefers the `detail` field; otherwise the whole payload as JSON text.
    pub fn detail(&self) -> Option<String> {
        match self.payload.get("detail") {
            Some(Value::String(detail)) => Some(detail.clone()),
            Some(other) if !other.is_null() => Some(other.to_string()),
            _ => match &self.payload {
                Value::Null => None,
                Value::String(text) if text.is_empty() => None,
                Value::String(text) => Some(text.clone()),
                payload => Some(payload.to_string()),
            },
        }
    }
}

/// Counters shown on the statistics page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteStatistics {
    #[serde(default)]
    pub total_users: u64,
    #[serde(default)]
    pub total_applications: u64,
    #[serde(default)]
    pub completed_applications: u64,
}

impl SiteStatistics {
    /// Share of applications already handled, in percent.
    pub fn completion_percent(&self) -> u8 {
        if self.total_applications == 0 {
            return 0;
        }
        let ratio = self.completed_applications.min(self.total_applications) as f64
            / self.total_applications as f64;
        (ratio * 100.0).round() as u8
    }
}

/// Backend client. Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: Arc<ApiConfig>,
    http: reqwest::Client,
}

impl ApiClient {
    /// Create a client, validating the configured base URL up front.
    pub fn new(config: ApiConfig) -> FormResult<Self> {
        config.base()?;
        Ok(Self {
            config: Arc::new(config),
            http: reqwest::Client::new(),
        })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn url(&self, path: &str) -> FormResult<Url> {
        self.config.endpoint_url(path)
    }

    /// POST `body` as JSON to `path`.
    pub async fn post_json<B>(&self, path: &str, body: &B) -> FormResult<ServerResponse>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(path)?;
        tracing::debug!(%url, "POST");
        let response = self.http.post(url).json(body).send().await?;
        Self::read_response(response).await
    }

    /// GET `path` and return the raw response.
    pub async fn get_json(&self, path: &str) -> FormResult<ServerResponse> {
        let url = self.url(path)?;
        tracing::debug!(%url, "GET");
        let response = self.http.get(url).send().await?;
        Self::read_response(response).await
    }

    /// Fetch the site-wide counters.
    pub async fn fetch_statistics(&self) -> FormResult<SiteStatistics> {
        let response = self.get_json(&self.config.endpoints.statistics).await?;
        if !response.is_success() {
            return Err(FormError::Rejected {
                status: response.status,
                detail: response
                    .detail()
                    .map(|d| format!("Ошибка: {d}"))
                    .unwrap_or_else(|| "Не удалось загрузить статистику.".to_string()),
            });
        }
        serde_json::from_value(response.payload).map_err(|e| FormError::Decode(e.to_string()))
    }

    async fn read_response(response: reqwest::Response) -> FormResult<ServerResponse> {
        let status = response.status().as_u16();
        let text = response.text().await?;
        let payload = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).unwrap_or(Value::String(text))
        };
        tracing::debug!(status, "response received");
        Ok(ServerResponse { status, payload })
    }
}
