//! Support for library configuration options

use std::error::Error;
use std::sync::{Arc, Mutex};

use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::calendar::CalendarView;
use crate::form::ClockFormat;
use crate::ui::Theme;

/// The categories offered by the task form.
/// Feel free to override it when initing this library.
pub static CATEGORIES: Lazy<Arc<Mutex<Vec<String>>>> = Lazy::new(|| Arc::new(Mutex::new(
    vec!["work", "personal", "school", "other"].into_iter().map(String::from).collect()
)));

/// Returns whether a category is part of [`CATEGORIES`]
pub fn is_known_category(category: &str) -> bool {
    match CATEGORIES.lock() {
        Ok(categories) => categories.iter().any(|c| c == category),
        Err(_) => false,
    }
}

/// Settings used when a [`Board`](crate::board::Board) starts
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub initial_view: CalendarView,
    pub clock_format: ClockFormat,
    pub theme: Theme,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            initial_view: CalendarView::Month,
            clock_format: ClockFormat::TwentyFourHour,
            theme: Theme::Light,
        }
    }
}

impl Settings {
    /// Read settings from a JSON document. Missing keys keep their default values
    pub fn from_json(content: &str) -> Result<Self, Box<dyn Error>> {
        let settings = serde_json::from_str::<Settings>(content)
            .map_err(|err| format!("Invalid settings: {}", err))?;
        Ok(settings)
    }
}
