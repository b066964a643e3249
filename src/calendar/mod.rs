//! Calendar views, and an in-memory calendar surface

pub mod memory_calendar;

use std::fmt::{Display, Formatter};

use chrono::{Datelike, Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// The grid a calendar currently displays
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarView {
    /// A month grid (`dayGridMonth`)
    Month,
    /// A week with time slots (`timeGridWeek`)
    Week,
    /// A single day with time slots (`timeGridDay`)
    Day,
}

impl Default for CalendarView {
    fn default() -> Self {
        CalendarView::Month
    }
}

impl Display for CalendarView {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CalendarView::Month => write!(f, "month"),
            CalendarView::Week => write!(f, "week"),
            CalendarView::Day => write!(f, "day"),
        }
    }
}

impl CalendarView {
    /// The first and last days (both included) displayed when the view is focused on `focus`.
    ///
    /// Weeks start on Sunday.
    pub fn range(&self, focus: NaiveDate) -> (NaiveDate, NaiveDate) {
        match self {
            CalendarView::Month => {
                let first = focus.with_day(1).unwrap_or(focus);
                let last = first
                    .checked_add_months(Months::new(1))
                    .and_then(|next| next.pred_opt())
                    .unwrap_or(focus);
                (first, last)
            },
            CalendarView::Week => {
                let back = i64::from(focus.weekday().num_days_from_sunday());
                let first = focus - Duration::days(back);
                (first, first + Duration::days(6))
            },
            CalendarView::Day => (focus, focus),
        }
    }

    /// Move the focus one view forward (`step = 1`) or backward (`step = -1`)
    pub fn shift(&self, focus: NaiveDate, step: i32) -> NaiveDate {
        let shifted = match self {
            CalendarView::Month => {
                let months = Months::new(step.unsigned_abs());
                if step >= 0 { focus.checked_add_months(months) } else { focus.checked_sub_months(months) }
            },
            CalendarView::Week => focus.checked_add_signed(Duration::days(7 * i64::from(step))),
            CalendarView::Day => focus.checked_add_signed(Duration::days(i64::from(step))),
        };
        shifted.unwrap_or(focus)
    }

    /// The title shown above the grid
    pub fn title(&self, focus: NaiveDate) -> String {
        match self {
            CalendarView::Month => focus.format("%B %Y").to_string(),
            CalendarView::Week => {
                let (first, last) = self.range(focus);
                format!("{} - {}", first.format("%b %-d"), last.format("%b %-d, %Y"))
            },
            CalendarView::Day => focus.format("%B %-d, %Y").to_string(),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_ranges() {
        // 2024-06-05 is a Wednesday
        let focus = ymd(2024, 6, 5);
        assert_eq!(CalendarView::Month.range(focus), (ymd(2024, 6, 1), ymd(2024, 6, 30)));
        assert_eq!(CalendarView::Week.range(focus), (ymd(2024, 6, 2), ymd(2024, 6, 8)));
        assert_eq!(CalendarView::Day.range(focus), (focus, focus));
        assert_eq!(CalendarView::Month.range(ymd(2024, 2, 10)), (ymd(2024, 2, 1), ymd(2024, 2, 29)));
    }

    #[test]
    fn test_shift() {
        let focus = ymd(2024, 1, 31);
        assert_eq!(CalendarView::Month.shift(focus, 1), ymd(2024, 2, 29));
        assert_eq!(CalendarView::Month.shift(focus, -1), ymd(2023, 12, 31));
        assert_eq!(CalendarView::Week.shift(focus, 1), ymd(2024, 2, 7));
        assert_eq!(CalendarView::Day.shift(focus, -1), ymd(2024, 1, 30));
    }

    #[test]
    fn test_titles() {
        assert_eq!(CalendarView::Month.title(ymd(2024, 6, 5)), "June 2024");
        assert_eq!(CalendarView::Day.title(ymd(2024, 6, 5)), "June 5, 2024");
    }
}
