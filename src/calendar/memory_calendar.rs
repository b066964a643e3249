use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::CalendarView;
use crate::config::Settings;
use crate::event::{CalendarEvent, EventHandle};
use crate::traits::CalendarSurface;


/// A calendar surface that keeps its events in memory.
///
/// It is used by tests, and by hosts that render the grid themselves from [`MemoryCalendar::visible_events`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MemoryCalendar {
    view: CalendarView,
    focus: NaiveDate,

    /// In insertion order
    events: Vec<(EventHandle, CalendarEvent)>,
    next_handle: u64,
}

impl MemoryCalendar {
    /// Create an empty calendar, focused on `focus`
    pub fn new(view: CalendarView, focus: NaiveDate) -> Self {
        Self {
            view, focus,
            events: Vec::new(),
            next_handle: 1,
        }
    }

    /// Create an empty calendar showing the initial view of `settings`
    pub fn from_settings(settings: &Settings, focus: NaiveDate) -> Self {
        Self::new(settings.initial_view, focus)
    }

    pub fn view(&self) -> CalendarView { self.view  }
    pub fn focus(&self) -> NaiveDate   { self.focus }

    pub fn set_view(&mut self, view: CalendarView) {
        self.view = view;
    }

    /// Show the previous month, week or day
    pub fn prev(&mut self) {
        self.focus = self.view.shift(self.focus, -1);
    }

    /// Show the next month, week or day
    pub fn next(&mut self) {
        self.focus = self.view.shift(self.focus, 1);
    }

    /// Jump back to the given current date
    pub fn today(&mut self, today: NaiveDate) {
        self.focus = today;
    }

    pub fn title(&self) -> String {
        self.view.title(self.focus)
    }

    /// First and last displayed days (both included)
    pub fn visible_range(&self) -> (NaiveDate, NaiveDate) {
        self.view.range(self.focus)
    }

    /// The events that start within the displayed days, in insertion order
    pub fn visible_events(&self) -> Vec<(EventHandle, &CalendarEvent)> {
        let (first, last) = self.visible_range();
        self.events.iter()
            .filter(|(_, event)| {
                let day = event.start().date();
                day >= first && day <= last
            })
            .map(|(handle, event)| (*handle, event))
            .collect()
    }

    /// The events that start on a given day
    pub fn events_on(&self, date: NaiveDate) -> Vec<&CalendarEvent> {
        self.events.iter()
            .map(|(_, event)| event)
            .filter(|event| event.start().date() == date)
            .collect()
    }

    /// Every registered event, in insertion order
    pub fn events(&self) -> impl Iterator<Item = (EventHandle, &CalendarEvent)> {
        self.events.iter().map(|(handle, event)| (*handle, event))
    }
}

impl CalendarSurface for MemoryCalendar {
    fn add_event(&mut self, event: CalendarEvent) -> EventHandle {
        let handle = EventHandle::new(self.next_handle);
        self.next_handle += 1;
        log::trace!("Adding {} ({:?} at {})", handle, event.title(), event.start());
        self.events.push((handle, event));
        handle
    }

    fn remove_event(&mut self, handle: EventHandle) -> bool {
        let len_before = self.events.len();
        self.events.retain(|(h, _)| *h != handle);
        self.events.len() != len_before
    }

    fn get_event(&self, handle: EventHandle) -> Option<&CalendarEvent> {
        self.events.iter()
            .find(|(h, _)| *h == handle)
            .map(|(_, event)| event)
    }

    fn event_count(&self) -> usize {
        self.events.len()
    }
}
