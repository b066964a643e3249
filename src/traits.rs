//! The seams between this crate and the user interface that hosts it

use crate::drag::BoundingBox;
use crate::event::{CalendarEvent, EventHandle};
use crate::list::ListItem;

/// A calendar that renders event blocks (e.g. a month grid in a web page).
///
/// Once a call returns, the rendered view must already reflect it.
pub trait CalendarSurface {
    /// Register and display a new event
    fn add_event(&mut self, event: CalendarEvent) -> EventHandle;

    /// Detach an event from the calendar.
    /// Returns whether this handle was registered.
    fn remove_event(&mut self, handle: EventHandle) -> bool;

    /// Returns a registered event
    fn get_event(&self, handle: EventHandle) -> Option<&CalendarEvent>;

    /// How many events are currently registered
    fn event_count(&self) -> usize;

    /// Returns whether this handle is currently registered
    fn contains(&self, handle: EventHandle) -> bool {
        self.get_event(handle).is_some()
    }
}

/// Reports where the on-screen list items are drawn.
pub trait Layout {
    /// The box of `item`, which is drawn as the `row`-th visible item of the list (starting at 0)
    fn bounding_box(&self, row: usize, item: &ListItem) -> BoundingBox;
}
