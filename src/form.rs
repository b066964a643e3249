//! The task form, as filled in by the user

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::FormError;
use crate::priority::Priority;
use crate::recurrence::Recurrence;
use crate::task::Task;

/// Whether times are displayed on a 12 or 24-hour clock
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClockFormat {
    #[serde(rename = "12")]
    TwelveHour,
    #[serde(rename = "24")]
    TwentyFourHour,
}

impl ClockFormat {
    /// Parse the form value (`"12"` or `"24"`). Anything else means 24-hour
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim() {
            "12" => ClockFormat::TwelveHour,
            _ => ClockFormat::TwentyFourHour,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            ClockFormat::TwelveHour => "12",
            ClockFormat::TwentyFourHour => "24",
        }
    }

    pub fn format(&self, time: NaiveTime) -> String {
        match self {
            ClockFormat::TwelveHour => time.format("%-I:%M %p").to_string(),
            ClockFormat::TwentyFourHour => time.format("%H:%M").to_string(),
        }
    }
}

impl Default for ClockFormat {
    fn default() -> Self {
        ClockFormat::TwentyFourHour
    }
}


/// The raw values of the task form fields
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskForm {
    pub text: String,
    /// `HH:MM`
    pub start_time: String,
    /// `HH:MM`
    pub end_time: String,
    pub priority: String,
    pub recurrence: String,
    pub category: String,
    pub clock_format: String,
}

impl TaskForm {
    /// A form pre-filled with the values of an existing task
    pub fn from_task(task: &Task, clock_format: ClockFormat) -> Self {
        Self {
            text: task.name().to_string(),
            start_time: task.start().format("%H:%M").to_string(),
            end_time: task.end().format("%H:%M").to_string(),
            priority: task.priority().tag().to_string(),
            recurrence: task.recurrence().tag().to_string(),
            category: task.category().to_string(),
            clock_format: clock_format.tag().to_string(),
        }
    }

    /// Empty the fields that are reset whenever a date is picked
    pub fn clear_entry_fields(&mut self) {
        self.text.clear();
        self.start_time.clear();
        self.end_time.clear();
    }

    pub fn clock_format(&self) -> ClockFormat {
        ClockFormat::from_tag(&self.clock_format)
    }

    /// Check the form for the currently selected date, and build the matching task.
    ///
    /// The text, the date, and both times are required, and the task must end after it starts.
    pub fn validate(&self, date: Option<NaiveDate>) -> Result<Task, FormError> {
        let text = self.text.trim();
        if text.is_empty() {
            return Err(FormError::MissingField("task text"));
        }
        let date = date.ok_or(FormError::MissingField("date"))?;
        let start = parse_time("start time", &self.start_time)?;
        let end = parse_time("end time", &self.end_time)?;
        if end <= start {
            return Err(FormError::EndNotAfterStart {
                start: self.start_time.clone(),
                end: self.end_time.clone(),
            });
        }

        let category = self.category.trim().to_string();
        if crate::config::is_known_category(&category) == false {
            log::warn!("Category {:?} is not one of the configured categories", category);
        }

        Ok(Task::new(
            text.to_string(),
            date,
            start,
            end,
            Priority::from_tag(&self.priority),
            category,
            Recurrence::from_tag(&self.recurrence),
        ))
    }
}

fn parse_time(field: &'static str, value: &str) -> Result<NaiveTime, FormError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FormError::MissingField(field));
    }
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map_err(|_| FormError::InvalidTime { field, value: value.to_string() })
}


#[cfg(test)]
mod tests {
    use super::*;

    fn standup() -> TaskForm {
        TaskForm {
            text: "  Standup ".to_string(),
            start_time: "09:00".to_string(),
            end_time: "09:15".to_string(),
            priority: "red".to_string(),
            recurrence: "none".to_string(),
            category: "work".to_string(),
            clock_format: "24".to_string(),
        }
    }

    fn june_3rd() -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(2024, 6, 3)
    }

    #[test]
    fn test_valid_form() {
        let task = standup().validate(june_3rd()).unwrap();
        assert_eq!(task.name(), "Standup");
        assert_eq!(task.priority(), Priority::Red);
        assert_eq!(task.recurrence(), Recurrence::None);
        assert_eq!(task.start(), NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        assert_eq!(task.completed(), false);
    }

    #[test]
    fn test_missing_fields() {
        let mut form = standup();
        form.text = "   ".to_string();
        assert_eq!(form.validate(june_3rd()), Err(FormError::MissingField("task text")));

        assert_eq!(standup().validate(None), Err(FormError::MissingField("date")));

        let mut form = standup();
        form.start_time.clear();
        assert_eq!(form.validate(june_3rd()), Err(FormError::MissingField("start time")));

        let mut form = standup();
        form.end_time.clear();
        assert_eq!(form.validate(june_3rd()), Err(FormError::MissingField("end time")));
    }

    #[test]
    fn test_invalid_times() {
        let mut form = standup();
        form.start_time = "9 o'clock".to_string();
        assert!(matches!(form.validate(june_3rd()), Err(FormError::InvalidTime { field: "start time", .. })));

        let mut form = standup();
        form.end_time = "08:00".to_string();
        assert!(matches!(form.validate(june_3rd()), Err(FormError::EndNotAfterStart { .. })));
    }

    #[test]
    fn test_clock_formats() {
        let t = NaiveTime::from_hms_opt(13, 5, 0).unwrap();
        assert_eq!(ClockFormat::TwentyFourHour.format(t), "13:05");
        assert_eq!(ClockFormat::TwelveHour.format(t), "1:05 PM");
        assert_eq!(ClockFormat::from_tag("12"), ClockFormat::TwelveHour);
        assert_eq!(ClockFormat::from_tag("whatever"), ClockFormat::TwentyFourHour);
    }

    #[test]
    fn test_prefill_from_task() {
        let task = standup().validate(june_3rd()).unwrap();
        let form = TaskForm::from_task(&task, ClockFormat::TwelveHour);
        assert_eq!(form.text, "Standup");
        assert_eq!(form.start_time, "09:00");
        assert_eq!(form.end_time, "09:15");
        assert_eq!(form.priority, "red");
        assert_eq!(form.clock_format, "12");
    }
}
