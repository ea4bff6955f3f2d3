use crate::{Config, SearchError, WeatherSnapshot, provider::dashboard::DashboardApiProvider};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod dashboard;

/// Source of weather snapshots for a city name.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// One request, no retries. `city` is already trimmed and non-empty.
    async fn fetch_snapshot(&self, city: &str) -> Result<WeatherSnapshot, SearchError>;
}

/// Construct the backend provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let base_url = config.base_url();

    let provider = DashboardApiProvider::new(base_url).map_err(|e| {
        anyhow::anyhow!(
            "{e}\n\
             Hint: run `weather configure --base-url <url>` (e.g. `http://localhost:5000`)."
        )
    })?;

    Ok(Box::new(provider))
}
