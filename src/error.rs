//! Errors returned by this crate

use thiserror::Error;

/// The notice shown to the user whenever a task form is rejected
pub const FORM_NOTICE: &str = "Please fill out all the fields.";

/// Why a submitted task form has been rejected.
///
/// A rejected form never creates a task, a calendar event or a list item.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum FormError {
    #[error("missing {0}")]
    MissingField(&'static str),

    #[error("invalid {field}: {value:?} is not a HH:MM time")]
    InvalidTime { field: &'static str, value: String },

    #[error("end time {end} is not after start time {start}")]
    EndNotAfterStart { start: String, end: String },
}

impl FormError {
    /// The text to display to the user
    pub fn notice(&self) -> &'static str {
        FORM_NOTICE
    }
}
