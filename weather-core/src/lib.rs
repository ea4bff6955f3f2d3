//! Core library for the weather dashboard.
//!
//! This crate defines:
//! - The snapshot returned by the dashboard backend
//! - The backend client behind the `WeatherProvider` trait
//! - The display regions a search paints into (`WeatherView`)
//! - `WeatherSearchController`, which ties one search to one render
//! - Configuration handling
//!
//! It is used by `weather-cli`, but any front end that implements
//! `WeatherView` can drive it.

pub mod config;
pub mod controller;
pub mod error;
pub mod format;
pub mod model;
pub mod provider;
pub mod view;

pub use config::Config;
pub use controller::WeatherSearchController;
pub use error::SearchError;
pub use model::{CurrentWeather, DailyEntry, HourlyEntry, WeatherRequest, WeatherSnapshot};
pub use provider::{WeatherProvider, dashboard::DashboardApiProvider, provider_from_config};
pub use view::{CurrentConditions, DailyItem, HourlyItem, Page, PageState, WeatherView};
