//! To-do tasks bound to a calendar date

use std::fmt::{Display, Formatter};

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::event::CalendarEvent;
use crate::priority::Priority;
use crate::recurrence::Recurrence;

/// The identity of a task.
///
/// This is generated when the task is created, and never derived from its (user-editable) title,
/// so that two tasks with the same title remain distinct.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Generate a random TaskId
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_hyphenated())
    }
}


/// A to-do task, scheduled on a single day
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    /// The text typed by the user
    name: String,
    date: NaiveDate,
    /// Always before `end`
    start: NaiveTime,
    end: NaiveTime,
    priority: Priority,
    category: String,
    completed: bool,
    recurrence: Recurrence,
}

impl Task {
    /// Create a brand new, uncompleted Task.
    /// This will pick a new (random) task ID.
    ///
    /// Prefer building tasks through [`TaskForm::validate`](crate::form::TaskForm::validate), that checks `start` is before `end`.
    pub fn new(name: String, date: NaiveDate, start: NaiveTime, end: NaiveTime,
               priority: Priority, category: String, recurrence: Recurrence) -> Self
    {
        Self {
            id: TaskId::random(),
            name,
            date,
            start,
            end,
            priority,
            category,
            completed: false,
            recurrence,
        }
    }

    pub fn id(&self) -> &TaskId             { &self.id        }
    pub fn name(&self) -> &str              { &self.name      }
    pub fn date(&self) -> NaiveDate         { self.date       }
    pub fn start(&self) -> NaiveTime        { self.start      }
    pub fn end(&self) -> NaiveTime          { self.end        }
    pub fn priority(&self) -> Priority      { self.priority   }
    pub fn category(&self) -> &str          { &self.category  }
    pub fn completed(&self) -> bool         { self.completed  }
    pub fn recurrence(&self) -> Recurrence  { self.recurrence }

    pub fn starts_at(&self) -> NaiveDateTime {
        self.date.and_time(self.start)
    }

    pub fn ends_at(&self) -> NaiveDateTime {
        self.date.and_time(self.end)
    }

    pub fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }

    /// Flip the completion flag, and return the new value
    pub fn toggle_completed(&mut self) -> bool {
        self.completed = !self.completed;
        self.completed
    }

    /// The calendar event that displays this task
    pub fn to_event(&self) -> CalendarEvent {
        CalendarEvent::new(
            self.name.clone(),
            self.starts_at(),
            self.ends_at(),
            false,
            self.priority.colors(),
        )
    }
}
