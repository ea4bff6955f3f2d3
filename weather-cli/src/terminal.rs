use std::fmt::Write as _;
use std::io::{self, Write};

use weather_core::{CurrentConditions, DailyItem, HourlyItem, Page, PageState, WeatherView};

const IDLE_MESSAGE: &str = "Search for a city to see its weather.";

/// Terminal front end: regions live in a [`PageState`], the spinner is
/// reported on stderr and the page is printed on demand.
#[derive(Debug, Default)]
pub struct TerminalView {
    page: PageState,
}

impl TerminalView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write the visible regions to stdout.
    pub fn print(&self) -> io::Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(render_page(&self.page.page()).as_bytes())?;
        out.flush()
    }
}

impl WeatherView for TerminalView {
    fn input_value(&self) -> String {
        self.page.input_value()
    }

    fn set_input_value(&self, value: &str) {
        self.page.set_input_value(value);
    }

    fn show_loading(&self, visible: bool) {
        if visible && !self.page.page().loading_visible {
            eprintln!("Fetching weather for {}...", self.page.input_value().trim());
        }
        self.page.show_loading(visible);
    }

    fn show_error(&self, message: &str) {
        self.page.show_error(message);
    }

    fn hide_error(&self) {
        self.page.hide_error();
    }

    fn hide_default_message(&self) {
        self.page.hide_default_message();
    }

    fn render_current(&self, current: &CurrentConditions) {
        self.page.render_current(current);
    }

    fn render_hourly(&self, items: &[HourlyItem]) {
        self.page.render_hourly(items);
    }

    fn render_daily(&self, items: &[DailyItem]) {
        self.page.render_daily(items);
    }

    fn reveal_sections(&self) {
        self.page.reveal_sections();
    }
}

/// Text for every visible region, top to bottom.
pub fn render_page(page: &Page) -> String {
    let mut out = String::new();

    if page.error_visible {
        let _ = writeln!(out, "Error: {}", page.error_message);
    }

    if page.default_message_visible {
        let _ = writeln!(out, "{IDLE_MESSAGE}");
    }

    if !page.sections_visible {
        return out;
    }

    let current = &page.current;
    let _ = writeln!(out, "{}", current.location);
    let _ = writeln!(out, "  {} {}°C  {}", current.icon, current.temperature, current.description);
    let _ = writeln!(out, "  Feels like {}", current.apparent_temperature);
    let _ = writeln!(out, "  Humidity   {}", current.humidity);
    let _ = writeln!(out, "  Wind       {} {}", current.wind_speed, current.wind_direction);
    let _ = writeln!(out, "  {}", current.last_updated);

    if !page.hourly.is_empty() {
        let _ = writeln!(out, "\nNext hours");
        for hour in &page.hourly {
            let _ = writeln!(
                out,
                "  {}  {}  {:>5}  💧 {}",
                hour.time, hour.icon, hour.temperature, hour.precipitation_probability
            );
        }
    }

    if !page.daily.is_empty() {
        let _ = writeln!(out, "\nNext days");
        for day in &page.daily {
            let _ = writeln!(
                out,
                "  {}  {}  {:>4} / {:<4}  💧 {:<4} {:<7}  {}",
                day.day,
                day.icon,
                day.max_temp,
                day.min_temp,
                day.precipitation_probability,
                day.precipitation,
                day.description
            );
        }
    }

    out
}
