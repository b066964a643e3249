//! The top-level controller, that owns the whole application state
//!
//! A [`Board`] keeps three views of every task consistent: the task data, its calendar event (through the
//! [`TaskEventStore`]) and its list item. The host forwards every user gesture to [`Board::handle`].

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::config::Settings;
use crate::drag::{DragEngine, InsertionPoint};
use crate::error::FormError;
use crate::event::EventHandle;
use crate::form::{ClockFormat, TaskForm};
use crate::list::{Filter, ListItem, TaskList};
use crate::recurrence;
use crate::store::TaskEventStore;
use crate::task::{Task, TaskId};
use crate::traits::{CalendarSurface, Layout};
use crate::ui::{ClickTarget, Modal, Theme, UiEvent};

/// A task list bound to a calendar
#[derive(Debug)]
pub struct Board<C, L>
where
    C: CalendarSurface,
    L: Layout,
{
    calendar: C,
    layout: L,

    tasks: HashMap<TaskId, Task>,
    store: TaskEventStore,
    list: TaskList,
    drag: DragEngine,

    selected_date: Option<NaiveDate>,
    modal: Modal,
    theme: Theme,
    clock_format: ClockFormat,
    /// Width of the progress bar, in percent
    progress: f64,
    /// The message shown to the user after a rejected form
    notice: Option<String>,
}

impl<C, L> Board<C, L>
where
    C: CalendarSurface,
    L: Layout,
{
    /// Create an empty board, with default settings
    pub fn new(calendar: C, layout: L) -> Self {
        Self::with_settings(calendar, layout, &Settings::default())
    }

    pub fn with_settings(calendar: C, layout: L, settings: &Settings) -> Self {
        Self {
            calendar, layout,
            tasks: HashMap::new(),
            store: TaskEventStore::new(),
            list: TaskList::new(),
            drag: DragEngine::new(),
            selected_date: None,
            modal: Modal::default(),
            theme: settings.theme,
            clock_format: settings.clock_format,
            progress: 0.0,
            notice: None,
        }
    }

    pub fn calendar(&self) -> &C                   { &self.calendar      }
    pub fn calendar_mut(&mut self) -> &mut C       { &mut self.calendar  }
    pub fn layout_mut(&mut self) -> &mut L         { &mut self.layout    }
    pub fn list(&self) -> &TaskList                { &self.list          }
    pub fn store(&self) -> &TaskEventStore         { &self.store         }
    pub fn drag(&self) -> &DragEngine              { &self.drag          }
    pub fn selected_date(&self) -> Option<NaiveDate> { self.selected_date }
    pub fn modal(&self) -> &Modal                  { &self.modal         }
    pub fn modal_mut(&mut self) -> &mut Modal      { &mut self.modal     }
    pub fn theme(&self) -> Theme                   { self.theme          }
    pub fn progress(&self) -> f64                  { self.progress       }
    pub fn notice(&self) -> Option<&str>           { self.notice.as_deref() }

    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.get(id)
    }

    /// The tasks, in list order
    pub fn tasks(&self) -> Vec<&Task> {
        self.list.items().iter()
            .filter_map(|item| self.tasks.get(item.task_id()))
            .collect()
    }

    /// The calendar event of a task
    pub fn event_of(&self, id: &TaskId) -> Option<EventHandle> {
        self.store.get(id)
    }

    /// Dispatch a user gesture.
    ///
    /// Only submissions can fail; the error is also exposed as a user notice by [`Board::notice`].
    pub fn handle(&mut self, event: UiEvent) -> Result<(), FormError> {
        match event {
            UiEvent::DateClicked(date) => self.select_date(date),
            UiEvent::Submit(form) => {
                self.submit(&form)?;
            },
            UiEvent::ItemClicked { id, target } => self.click(&id, target),
            UiEvent::DragStart(id) => {
                self.drag_start(&id);
            },
            UiEvent::DragOver { pointer_y } => {
                self.drag_over(pointer_y);
            },
            UiEvent::DragEnd => self.drag_end(),
            UiEvent::Filter(tag) => self.apply_filter(Filter::from_tag(&tag)),
            UiEvent::SortByPriority => self.sort_by_priority(),
            UiEvent::ThemeToggled(dark) => self.set_theme(Theme::from_toggle(dark)),
            UiEvent::ModalDismissed => self.modal.close(),
        }
        Ok(())
    }

    /// A date has been clicked on the calendar: remember it and open an empty form
    pub fn select_date(&mut self, date: NaiveDate) {
        log::debug!("Selected date {}", date);
        self.selected_date = Some(date);
        self.modal.open_for_date(date);
    }

    /// Create a task from a form, on the selected date.
    ///
    /// This adds its calendar event (plus the occurrences of a recurring task) and appends its list item.
    /// A rejected form changes nothing but the user notice.
    pub fn submit(&mut self, form: &TaskForm) -> Result<TaskId, FormError> {
        let task = match form.validate(self.selected_date) {
            Err(err) => {
                log::info!("Rejected task form: {}", err);
                self.notice = Some(err.notice().to_string());
                return Err(err);
            },
            Ok(task) => task,
        };
        self.notice = None;

        let id = *task.id();
        let event = task.to_event();
        let handle = self.calendar.add_event(event.clone());
        self.store.put(id, handle);

        // Occurrences are displayed, but not tracked by the store
        for date in recurrence::expand(task.date(), task.recurrence()) {
            self.calendar.add_event(event.occurrence_on(date));
        }

        let clock_format = if form.clock_format.trim().is_empty() {
            self.clock_format
        } else {
            form.clock_format()
        };
        self.list.push(ListItem::new(&task, clock_format));
        log::info!("Created task {} ({:?}) on {}", id, task.name(), task.date());
        self.tasks.insert(id, task);

        self.modal.close();
        self.update_progress();
        Ok(id)
    }

    /// Route a click on a list item. Only clicks outside the buttons toggle the completion
    pub fn click(&mut self, id: &TaskId, target: ClickTarget) {
        match target {
            ClickTarget::Body => {
                self.toggle_completion(id);
            },
            ClickTarget::DeleteButton => {
                self.delete(id);
            },
            ClickTarget::EditButton => {
                self.edit(id);
            },
        }
    }

    /// Flip the completion of a task. Returns its new state, or `None` for unknown tasks
    pub fn toggle_completion(&mut self, id: &TaskId) -> Option<bool> {
        let completed = self.list.toggle_completed(id)?;
        if let Some(task) = self.tasks.get_mut(id) {
            task.set_completed(completed);
        }
        log::debug!("Task {} is now {}", id, if completed { "completed" } else { "uncompleted" });
        self.update_progress();
        Some(completed)
    }

    /// Delete a task, its list item and its calendar event.
    ///
    /// Returns false (and does nothing) for unknown tasks.
    pub fn delete(&mut self, id: &TaskId) -> bool {
        match self.discard(id) {
            None => false,
            Some(task) => {
                log::info!("Deleted task {} ({:?})", id, task.name());
                self.update_progress();
                true
            }
        }
    }

    /// Remove a task, and re-open the form pre-filled with its values.
    ///
    /// Submitting the form again creates a new task (with a new identity).
    pub fn edit(&mut self, id: &TaskId) -> bool {
        let task = match self.discard(id) {
            None => return false,
            Some(task) => task,
        };
        log::info!("Editing task {} ({:?})", id, task.name());

        let form = TaskForm::from_task(&task, self.clock_format);
        self.selected_date = Some(task.date());
        self.modal.open_with(task.date(), form);
        self.update_progress();
        true
    }

    /// Remove every trace of a task, but the recurring occurrences
    fn discard(&mut self, id: &TaskId) -> Option<Task> {
        let task = self.tasks.remove(id)?;
        self.list.remove(id);
        self.drag.forget(id);
        self.store.remove(id, &mut self.calendar);
        Some(task)
    }

    pub fn sort_by_priority(&mut self) {
        self.list.sort_by_priority();
    }

    pub fn apply_filter(&mut self, filter: Filter) {
        self.list.apply_filter(filter);
    }

    pub fn drag_start(&mut self, id: &TaskId) -> bool {
        self.drag.start(&mut self.list, id)
    }

    pub fn drag_over(&mut self, pointer_y: f64) -> Option<InsertionPoint> {
        self.drag.over(&mut self.list, &self.layout, pointer_y)
    }

    pub fn drag_end(&mut self) {
        self.drag.end(&mut self.list);
    }

    pub fn set_theme(&mut self, theme: Theme) {
        log::debug!("Switching to the {} theme", theme.attribute_value());
        self.theme = theme;
    }

    fn update_progress(&mut self) {
        self.progress = self.list.progress();
        log::debug!("Progress: {}%", self.progress);
    }
}
