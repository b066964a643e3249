//! Calendar events, as displayed by a [`CalendarSurface`](crate::traits::CalendarSurface)

use std::fmt::{Display, Formatter};

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use csscolorparser::Color;
use serde::{Deserialize, Serialize};

/// An opaque reference to an event registered in a calendar surface.
///
/// Handles are given out by the surface when an event is added, and are only useful to remove it later.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EventHandle(u64);

impl EventHandle {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl Display for EventHandle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "event#{}", self.0)
    }
}


/// Background and text colors of an event block
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventColors {
    background: Color,
    text: Color,
}

impl EventColors {
    /// Build colors from a `(r, g, b, alpha)` background and an opaque `(r, g, b)` text color
    pub fn new(background: (u8, u8, u8, f64), text: (u8, u8, u8)) -> Self {
        let (r, g, b, a) = background;
        let (tr, tg, tb) = text;
        Self {
            background: Color { r: channel(r), g: channel(g), b: channel(b), a },
            text: Color { r: channel(tr), g: channel(tg), b: channel(tb), a: 1.0 },
        }
    }

    pub fn background(&self) -> &Color { &self.background }
    pub fn text(&self) -> &Color       { &self.text       }

    /// The background, as a CSS color, e.g. `rgba(255, 0, 0, 0.5)`
    pub fn background_css(&self) -> String {
        to_css(&self.background)
    }

    /// The text color, as a CSS color, e.g. `rgb(0, 0, 0)`
    pub fn text_css(&self) -> String {
        to_css(&self.text)
    }
}

fn channel(value: u8) -> f64 {
    f64::from(value) / 255.0
}

fn to_css(color: &Color) -> String {
    let r = (color.r * 255.0).round() as u8;
    let g = (color.g * 255.0).round() as u8;
    let b = (color.b * 255.0).round() as u8;
    if (color.a - 1.0).abs() < f64::EPSILON {
        format!("rgb({}, {}, {})", r, g, b)
    } else {
        format!("rgba({}, {}, {}, {})", r, g, b, color.a)
    }
}


/// The data of an event block shown by the calendar
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    title: String,
    start: NaiveDateTime,
    end: NaiveDateTime,
    all_day: bool,
    colors: EventColors,
}

impl CalendarEvent {
    pub fn new(title: String, start: NaiveDateTime, end: NaiveDateTime, all_day: bool, colors: EventColors) -> Self {
        Self { title, start, end, all_day, colors }
    }

    pub fn title(&self) -> &str            { &self.title  }
    pub fn start(&self) -> NaiveDateTime   { self.start   }
    pub fn end(&self) -> NaiveDateTime     { self.end     }
    pub fn all_day(&self) -> bool          { self.all_day }
    pub fn colors(&self) -> &EventColors   { &self.colors }

    /// A copy of this event placed on another date.
    ///
    /// The copy starts and ends at midnight of `date`, i.e. it has no duration.
    pub fn occurrence_on(&self, date: NaiveDate) -> Self {
        let instant = date.and_time(NaiveTime::default());
        Self {
            title: self.title.clone(),
            start: instant,
            end: instant,
            all_day: self.all_day,
            colors: self.colors.clone(),
        }
    }

    /// Whether this event starts and ends at the same instant
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_occurrence_keeps_title_and_colors() {
        let day = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
        let event = CalendarEvent::new(
            "Standup".to_string(),
            day.and_time(NaiveTime::from_hms_opt(9, 0, 0).unwrap()),
            day.and_time(NaiveTime::from_hms_opt(9, 15, 0).unwrap()),
            false,
            EventColors::new((255, 0, 0, 0.5), (255, 255, 255)),
        );
        assert!(event.is_degenerate() == false);

        let next = NaiveDate::from_ymd_opt(2024, 6, 4).unwrap();
        let occurrence = event.occurrence_on(next);
        assert_eq!(occurrence.title(), "Standup");
        assert_eq!(occurrence.colors(), event.colors());
        assert_eq!(occurrence.start(), next.and_hms_opt(0, 0, 0).unwrap());
        assert!(occurrence.is_degenerate());
    }

    #[test]
    fn test_css_colors() {
        let colors = EventColors::new((0, 128, 0, 0.5), (0, 0, 0));
        assert_eq!(colors.background_css(), "rgba(0, 128, 0, 0.5)");
        assert_eq!(colors.text_css(), "rgb(0, 0, 0)");
    }
}
