//! The search-and-render cycle.

use tracing::{debug, warn};

use crate::{
    error::SearchError,
    format,
    model::{CurrentWeather, DailyEntry, HourlyEntry, WeatherSnapshot},
    provider::WeatherProvider,
    view::{CurrentConditions, DailyItem, HourlyItem, WeatherView},
};

/// Reads the city field, fetches one snapshot and paints it into the view.
#[derive(Debug)]
pub struct WeatherSearchController<V> {
    provider: Box<dyn WeatherProvider>,
    view: V,
}

impl<V: WeatherView> WeatherSearchController<V> {
    pub fn new(provider: Box<dyn WeatherProvider>, view: V) -> Self {
        Self { provider, view }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Fill the city field with a pre-set name and search for it.
    pub async fn search_city(&self, city: &str) -> Result<(), SearchError> {
        self.view.set_input_value(city);
        self.search_weather().await
    }

    /// Search for whatever is in the city field.
    ///
    /// Errors are already shown in the view when this returns; the result only
    /// tells the caller how it went. Overlapping calls are not sequenced, so
    /// the last response to arrive is the one left on screen.
    pub async fn search_weather(&self) -> Result<(), SearchError> {
        let city = self.view.input_value().trim().to_string();

        if city.is_empty() {
            let err = SearchError::EmptyCity;
            self.view.show_error(&err.user_message());
            return Err(err);
        }

        let _loading = LoadingIndicator::show(&self.view);
        self.view.hide_error();

        match self.provider.fetch_snapshot(&city).await {
            Ok(snapshot) => {
                self.display_weather(&snapshot);
                Ok(())
            }
            Err(err) => {
                warn!(%city, error = %err, "Weather search failed");
                self.view.show_error(&err.user_message());
                Err(err)
            }
        }
    }

    /// Paint a snapshot, replacing whatever was shown before.
    pub fn display_weather(&self, snapshot: &WeatherSnapshot) {
        self.view.hide_default_message();

        self.view.render_current(&current_conditions(&snapshot.current));

        let hourly: Vec<HourlyItem> = snapshot.hourly_forecast.iter().map(hourly_item).collect();
        self.view.render_hourly(&hourly);

        let daily: Vec<DailyItem> = snapshot.daily_forecast.iter().map(daily_item).collect();
        self.view.render_daily(&daily);

        self.view.reveal_sections();

        debug!(hourly = hourly.len(), daily = daily.len(), "Rendered weather");
    }
}

/// Spinner shown for as long as this value lives.
struct LoadingIndicator<'a, V: WeatherView> {
    view: &'a V,
}

impl<'a, V: WeatherView> LoadingIndicator<'a, V> {
    fn show(view: &'a V) -> Self {
        view.show_loading(true);
        Self { view }
    }
}

impl<V: WeatherView> Drop for LoadingIndicator<'_, V> {
    fn drop(&mut self) {
        self.view.show_loading(false);
    }
}

fn current_conditions(current: &CurrentWeather) -> CurrentConditions {
    CurrentConditions {
        location: format::location_label(
            &current.city,
            current.region.as_deref(),
            current.country.as_deref(),
        ),
        temperature: format::number(current.temperature),
        apparent_temperature: format!("{}°C", format::number(current.apparent_temperature)),
        humidity: format::percentage(Some(current.humidity)),
        wind_speed: format!("{} km/h", format::number(current.wind_speed)),
        wind_direction: format::wind_direction_label(current.wind_direction),
        icon: current.icon.clone(),
        description: current.description.clone(),
        last_updated: format::last_updated(&current.timestamp),
    }
}

fn hourly_item(hour: &HourlyEntry) -> HourlyItem {
    HourlyItem {
        time: format::time_of_day(&hour.time),
        icon: hour.icon.clone(),
        temperature: format!("{}°", format::number(hour.temperature)),
        precipitation_probability: format::percentage(hour.precipitation_probability),
    }
}

fn daily_item(day: &DailyEntry) -> DailyItem {
    DailyItem {
        day: format::day_label(&day.date),
        icon: day.icon.clone(),
        max_temp: format!("{}°", format::number(day.max_temp)),
        min_temp: format!("{}°", format::number(day.min_temp)),
        precipitation: day
            .precipitation
            .map(|mm| format!("{} mm", format::number(mm)))
            .unwrap_or_default(),
        precipitation_probability: format::percentage(day.precipitation_probability),
        description: day.description.clone(),
    }
}
