use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::{
    error::SearchError,
    model::{WeatherRequest, WeatherSnapshot},
};

use super::WeatherProvider;

/// Path of the search endpoint, relative to the backend origin.
pub const WEATHER_ENDPOINT: &str = "/api/weather";

/// Client for the dashboard backend's `POST /api/weather`.
#[derive(Debug, Clone)]
pub struct DashboardApiProvider {
    endpoint: Url,
    http: Client,
}

impl DashboardApiProvider {
    /// `base_url` is the backend origin, e.g. `http://localhost:5000`.
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let endpoint = endpoint_url(base_url)?;
        Ok(Self { endpoint, http: Client::new() })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

#[async_trait]
impl WeatherProvider for DashboardApiProvider {
    #[instrument(skip(self))]
    async fn fetch_snapshot(&self, city: &str) -> Result<WeatherSnapshot, SearchError> {
        debug!(endpoint = %self.endpoint, "Requesting weather");

        let res = self
            .http
            .post(self.endpoint.clone())
            .json(&WeatherRequest { city: city.to_string() })
            .send()
            .await
            .map_err(|e| SearchError::Transport(e.to_string()))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| SearchError::Transport(format!("Failed to read response body: {e}")))?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body).ok().and_then(|b| b.error);
            debug!(status = status.as_u16(), ?message, "Weather service returned an error");
            return Err(SearchError::Api { status: status.as_u16(), message });
        }

        let snapshot: WeatherSnapshot =
            serde_json::from_str(&body).map_err(|e| SearchError::Parse(e.to_string()))?;

        debug!(
            hourly = snapshot.hourly_forecast.len(),
            daily = snapshot.daily_forecast.len(),
            "Received weather snapshot"
        );

        Ok(snapshot)
    }
}

fn endpoint_url(base_url: &str) -> anyhow::Result<Url> {
    let base = Url::parse(base_url.trim())
        .map_err(|e| anyhow::anyhow!("Invalid backend URL '{base_url}': {e}"))?;

    if !matches!(base.scheme(), "http" | "https") {
        return Err(anyhow::anyhow!(
            "Invalid backend URL '{base_url}': expected an http:// or https:// address"
        ));
    }

    // Keep any path prefix the backend is mounted under.
    let prefix = base.path().trim_end_matches('/');
    let mut endpoint = base.clone();
    endpoint.set_path(&format!("{prefix}{WEATHER_ENDPOINT}"));
    endpoint.set_query(None);
    Ok(endpoint)
}
