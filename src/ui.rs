//! User interface state that is not related to tasks: the task modal and the theme.
//! Also defines the events the host forwards to a [`Board`](crate::board::Board).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::form::TaskForm;
use crate::task::TaskId;

/// The color theme of the page
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// The theme matching the state of the dark mode checkbox
    pub fn from_toggle(dark_mode_checked: bool) -> Self {
        if dark_mode_checked { Theme::Dark } else { Theme::Light }
    }

    /// Value of the `data-theme` attribute of the document
    pub fn attribute_value(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Light
    }
}


/// The modal that holds the task form
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Modal {
    open: bool,
    heading: String,
    form: TaskForm,
}

impl Modal {
    pub fn is_open(&self) -> bool   { self.open     }
    pub fn heading(&self) -> &str   { &self.heading }
    pub fn form(&self) -> &TaskForm { &self.form    }
    pub fn form_mut(&mut self) -> &mut TaskForm { &mut self.form }

    /// Open the modal for a freshly picked date, with empty text and times
    pub fn open_for_date(&mut self, date: NaiveDate) {
        self.heading = heading_for(date);
        self.form.clear_entry_fields();
        self.open = true;
    }

    /// Open the modal with a pre-filled form
    pub fn open_with(&mut self, date: NaiveDate, form: TaskForm) {
        self.heading = heading_for(date);
        self.form = form;
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

/// e.g. `Tasks for Mon Jun 03 2024`
fn heading_for(date: NaiveDate) -> String {
    format!("Tasks for {}", date.format("%a %b %d %Y"))
}


/// The part of a list item that has been clicked
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    Body,
    DeleteButton,
    EditButton,
}

/// A gesture of the user, forwarded by the host
#[derive(Clone, Debug, PartialEq)]
pub enum UiEvent {
    DateClicked(NaiveDate),
    Submit(TaskForm),
    ItemClicked { id: TaskId, target: ClickTarget },
    DragStart(TaskId),
    DragOver { pointer_y: f64 },
    DragEnd,
    Filter(String),
    SortByPriority,
    ThemeToggled(bool),
    /// Close button, or a click on the backdrop
    ModalDismissed,
}
