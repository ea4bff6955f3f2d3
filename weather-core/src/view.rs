//! Display regions the search controller writes into.
//!
//! The controller never creates or looks up regions itself; it is handed a
//! [`WeatherView`] and only changes text and visibility through it.

use std::cell::RefCell;

/// Current conditions, already formatted for display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurrentConditions {
    pub location: String,
    pub temperature: String,
    pub apparent_temperature: String,
    pub humidity: String,
    pub wind_speed: String,
    pub wind_direction: String,
    pub icon: String,
    pub description: String,
    pub last_updated: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HourlyItem {
    pub time: String,
    pub icon: String,
    pub temperature: String,
    pub precipitation_probability: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DailyItem {
    pub day: String,
    pub icon: String,
    pub max_temp: String,
    pub min_temp: String,
    /// Total in mm; empty when the backend sent none.
    pub precipitation: String,
    pub precipitation_probability: String,
    pub description: String,
}

/// The page regions used by a search: input field, spinner, error box,
/// idle message, current conditions and the two forecast lists.
///
/// Methods take `&self` because regions are a shared surface, and every
/// call must be idempotent.
pub trait WeatherView {
    fn input_value(&self) -> String;
    fn set_input_value(&self, value: &str);

    fn show_loading(&self, visible: bool);
    fn show_error(&self, message: &str);
    fn hide_error(&self);

    fn hide_default_message(&self);

    fn render_current(&self, current: &CurrentConditions);

    /// Replaces the whole hourly list.
    fn render_hourly(&self, items: &[HourlyItem]);

    /// Replaces the whole daily list.
    fn render_daily(&self, items: &[DailyItem]);

    /// Makes the current, hourly and daily regions visible.
    fn reveal_sections(&self);
}

/// Region state of the in-memory page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub input: String,
    pub loading_visible: bool,
    pub error_message: String,
    pub error_visible: bool,
    pub default_message_visible: bool,
    pub current: CurrentConditions,
    pub hourly: Vec<HourlyItem>,
    pub daily: Vec<DailyItem>,
    pub sections_visible: bool,
}

impl Default for Page {
    /// How the dashboard looks on load: only the idle message is showing.
    fn default() -> Self {
        Self {
            input: String::new(),
            loading_visible: false,
            error_message: String::new(),
            error_visible: false,
            default_message_visible: true,
            current: CurrentConditions::default(),
            hourly: Vec::new(),
            daily: Vec::new(),
            sections_visible: false,
        }
    }
}

/// A [`WeatherView`] that keeps its regions in memory.
#[derive(Debug, Default)]
pub struct PageState {
    page: RefCell<Page>,
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the regions as they are right now.
    pub fn page(&self) -> Page {
        self.page.borrow().clone()
    }
}

impl WeatherView for PageState {
    fn input_value(&self) -> String {
        self.page.borrow().input.clone()
    }

    fn set_input_value(&self, value: &str) {
        self.page.borrow_mut().input = value.to_string();
    }

    fn show_loading(&self, visible: bool) {
        self.page.borrow_mut().loading_visible = visible;
    }

    fn show_error(&self, message: &str) {
        let mut page = self.page.borrow_mut();
        page.error_message = message.to_string();
        page.error_visible = true;
    }

    fn hide_error(&self) {
        self.page.borrow_mut().error_visible = false;
    }

    fn hide_default_message(&self) {
        self.page.borrow_mut().default_message_visible = false;
    }

    fn render_current(&self, current: &CurrentConditions) {
        self.page.borrow_mut().current = current.clone();
    }

    fn render_hourly(&self, items: &[HourlyItem]) {
        self.page.borrow_mut().hourly = items.to_vec();
    }

    fn render_daily(&self, items: &[DailyItem]) {
        self.page.borrow_mut().daily = items.to_vec();
    }

    fn reveal_sections(&self) {
        self.page.borrow_mut().sections_visible = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_only_default_message() {
        let page = PageState::new().page();

        assert!(page.default_message_visible);
        assert!(!page.loading_visible);
        assert!(!page.error_visible);
        assert!(!page.sections_visible);
    }

    #[test]
    fn error_region_keeps_text_but_toggles_visibility() {
        let view = PageState::new();

        view.show_error("City not found");
        view.show_error("City not found");
        assert!(view.page().error_visible);
        assert_eq!(view.page().error_message, "City not found");

        view.hide_error();
        view.hide_error();
        assert!(!view.page().error_visible);
    }

    #[test]
    fn lists_are_replaced_not_appended() {
        let view = PageState::new();
        let item = |day: &str| DailyItem { day: day.into(), ..Default::default() };

        view.render_daily(&[item("Mon"), item("Tue"), item("Wed")]);
        view.render_daily(&[item("Thu")]);

        let days: Vec<_> = view.page().daily.into_iter().map(|d| d.day).collect();
        assert_eq!(days, vec!["Thu"]);
    }
}
