//! Associates every task with the calendar event that displays it

use crate::event::EventHandle;
use crate::task::TaskId;
use crate::traits::CalendarSurface;

/// An insertion-ordered map from task identities to calendar event handles.
///
/// The store does not own the events: they belong to the [`CalendarSurface`].
/// It only remembers which event to detach when a task goes away.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaskEventStore {
    entries: Vec<(TaskId, EventHandle)>,
}

impl TaskEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Associate a task with an event.
    ///
    /// If the task already had an event, the new handle replaces it (keeping its position), and the former one is returned.
    /// The former event is left untouched in the calendar.
    pub fn put(&mut self, id: TaskId, handle: EventHandle) -> Option<EventHandle> {
        match self.entries.iter_mut().find(|(key, _)| *key == id) {
            Some(entry) => {
                let previous = entry.1;
                log::warn!("Task {} was already associated to {}, overwriting it with {}", id, previous, handle);
                entry.1 = handle;
                Some(previous)
            },
            None => {
                log::debug!("Storing {} for task {}", handle, id);
                self.entries.push((id, handle));
                None
            }
        }
    }

    /// Detach the event of a task from `calendar`, and forget about it.
    ///
    /// This is a no-op if the task is unknown. Returns the removed handle, if any.
    pub fn remove<C: CalendarSurface + ?Sized>(&mut self, id: &TaskId, calendar: &mut C) -> Option<EventHandle> {
        let position = match self.entries.iter().position(|(key, _)| key == id) {
            None => {
                log::debug!("No event stored for task {}, nothing to remove", id);
                return None;
            },
            Some(position) => position,
        };

        let (_, handle) = self.entries.remove(position);
        if calendar.remove_event(handle) == false {
            log::debug!("{} of task {} was not registered in the calendar anymore", handle, id);
        }
        log::debug!("Removed {} of task {}", handle, id);
        Some(handle)
    }

    pub fn get(&self, id: &TaskId) -> Option<EventHandle> {
        self.entries.iter()
            .find(|(key, _)| key == id)
            .map(|(_, handle)| *handle)
    }

    pub fn contains(&self, id: &TaskId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entries, in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &(TaskId, EventHandle)> {
        self.entries.iter()
    }
}
