//! Weather lookup widget.

use std::sync::Arc;

use parking_lot::Mutex;
use shared::protocol::WeatherReport;

use crate::{
    backend::WeatherApi,
    control::Control,
    controller::{ActionController, ActionSpec},
    feedback::SilentSink,
    result::{ActionError, ActionResult},
};

pub const NO_CITY_MESSAGE: &str = "No city provided!";
const ICON_URL_BASE: &str = "https://openweathermap.org/img/wn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherDisplay {
    pub city: String,
    pub icon_url: String,
    pub temperature: String,
    pub condition: String,
    pub humidity: String,
    pub wind: String,
}

impl From<&WeatherReport> for WeatherDisplay {
    fn from(report: &WeatherReport) -> Self {
        Self {
            city: report.city.clone(),
            icon_url: format!("{ICON_URL_BASE}/{}@2x.png", report.icon),
            temperature: report.temperature.clone(),
            condition: report.condition.clone(),
            humidity: report.humidity.clone(),
            wind: report.wind_speed.clone(),
        }
    }
}

/// Replaces the page body when a lookup fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorTemplate {
    pub heading: String,
    pub message: String,
}

impl From<&ActionError> for ErrorTemplate {
    fn from(err: &ActionError) -> Self {
        Self {
            heading: format!("Error :{}", err.status()),
            message: err.message().to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum WeatherPanel {
    #[default]
    Empty,
    Report(WeatherDisplay),
    Error(ErrorTemplate),
}

pub struct WeatherWidget {
    controller: ActionController,
    api: Arc<dyn WeatherApi>,
    search_button: Control,
    panel: Mutex<WeatherPanel>,
}

impl WeatherWidget {
    /// The widget reports failures through its error template, not a snackbar.
    pub fn new(api: Arc<dyn WeatherApi>) -> Self {
        Self {
            controller: ActionController::new(Arc::new(SilentSink)),
            api,
            search_button: Control::new("search", "search"),
            panel: Mutex::new(WeatherPanel::Empty),
        }
    }

    pub fn search_button(&self) -> &Control {
        &self.search_button
    }

    pub fn panel(&self) -> WeatherPanel {
        self.panel.lock().clone()
    }

    pub async fn search(&self, city: &str) -> ActionResult<WeatherReport> {
        let call = async {
            let city = city.trim();
            let result = if city.is_empty() {
                ActionResult::validation(NO_CITY_MESSAGE)
            } else {
                self.api.weather(city).await
            };
            if let Some(err) = result.error() {
                *self.panel.lock() = WeatherPanel::Error(ErrorTemplate::from(err));
            }
            result
        };

        let spec = ActionSpec::new("weather_search", &self.search_button);
        self.controller
            .run(spec, call, |report: &WeatherReport| {
                *self.panel.lock() = WeatherPanel::Report(WeatherDisplay::from(report));
            })
            .await
    }
}

#[cfg(test)]
#[path = "tests/weather_tests.rs"]
mod tests;
