//! Expansion of recurring tasks into future occurrence dates

use std::fmt::{Display, Formatter};

use chrono::{Datelike, Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// How many occurrences are generated for a recurring task, whatever its rule
pub const OCCURRENCE_LIMIT: usize = 10;

/// A recurrence rule, as selected in the form
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Recurrence {
    None,
    Daily,
    Weekly,
    Monthly,
}

impl Recurrence {
    /// Parse a recurrence tag. Unknown tags mean "no recurrence"
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim() {
            "none" | "" => Recurrence::None,
            "daily" => Recurrence::Daily,
            "weekly" => Recurrence::Weekly,
            "monthly" => Recurrence::Monthly,
            other => {
                log::debug!("Unknown recurrence tag {:?}, not repeating", other);
                Recurrence::None
            }
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Recurrence::None => "none",
            Recurrence::Daily => "daily",
            Recurrence::Weekly => "weekly",
            Recurrence::Monthly => "monthly",
        }
    }

    pub fn is_recurring(&self) -> bool {
        *self != Recurrence::None
    }

    /// The date that follows `date` according to this rule.
    ///
    /// Returns `None` for non-recurring rules, and when the calendar range is exceeded.
    /// Monthly steps keep the day of the month. When the next month is too short, the extra days overflow into the
    /// month after it (Jan 31 + 1 month is Mar 2, or Mar 3 on non-leap years).
    pub fn step(&self, date: NaiveDate) -> Option<NaiveDate> {
        match self {
            Recurrence::None => None,
            Recurrence::Daily => date.checked_add_signed(Duration::days(1)),
            Recurrence::Weekly => date.checked_add_signed(Duration::days(7)),
            Recurrence::Monthly => {
                let first_of_month = date.with_day(1)?;
                first_of_month
                    .checked_add_months(Months::new(1))?
                    .checked_add_signed(Duration::days(i64::from(date.day0())))
            },
        }
    }
}

impl Default for Recurrence {
    fn default() -> Self {
        Recurrence::None
    }
}

impl Display for Recurrence {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Compute the occurrences of a recurring task anchored on `anchor`.
///
/// This returns [`OCCURRENCE_LIMIT`] dates, all strictly after `anchor`, each one computed from the previous one.
/// `Recurrence::None` yields no date at all.
pub fn expand(anchor: NaiveDate, rule: Recurrence) -> Vec<NaiveDate> {
    let mut dates = Vec::with_capacity(if rule.is_recurring() { OCCURRENCE_LIMIT } else { 0 });

    let mut current = anchor;
    while dates.len() < OCCURRENCE_LIMIT {
        match rule.step(current) {
            None => break,
            Some(next) => {
                dates.push(next);
                current = next;
            }
        }
    }

    if rule.is_recurring() {
        log::debug!("Expanded {} rule from {} into {} occurrences", rule, anchor, dates.len());
    }
    dates
}
