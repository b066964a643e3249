//! This crate provides a task list bound to a calendar, without any rendering code.
//!
//! Users pick a date on a calendar, create tasks with a time range, a [priority](priority::Priority), a category
//! and an optional [recurrence](recurrence::Recurrence), then manage them in a list that can be filtered,
//! sorted by priority and reordered by drag-and-drop.
//!
//! The actual calendar widget is abstracted by the [`CalendarSurface`](traits::CalendarSurface) trait
//! ([`MemoryCalendar`] is an in-memory implementation), and the geometry of the list by the [`Layout`](traits::Layout) trait. \
//! A [`Board`] owns the whole state and keeps tasks, calendar events and list items consistent.

pub mod traits;

pub mod calendar;
pub use calendar::memory_calendar::MemoryCalendar;
pub mod event;
pub use event::CalendarEvent;
pub mod task;
pub use task::{Task, TaskId};
pub mod priority;
pub use priority::Priority;
pub mod recurrence;
pub use recurrence::Recurrence;
pub mod form;
pub use form::TaskForm;
pub mod store;
pub use store::TaskEventStore;
pub mod list;
pub use list::{Filter, ListItem, TaskList};
pub mod drag;
pub mod ui;
pub mod board;
pub use board::Board;

pub mod config;
pub mod error;
pub mod utils;
