//! The on-screen task list: ordering, filtering and completion progress
//!
//! List items only mirror what is displayed. Sorting, filtering and moving items never alter the tasks themselves.

use crate::form::ClockFormat;
use crate::priority::Priority;
use crate::task::{Task, TaskId};

use bitflags::bitflags;

bitflags! {
    /// The state classes a list item can carry
    pub struct ItemMarkers: u8 {
        /// The task is done (rendered struck through)
        const COMPLETED = 1;
        /// The item is being dragged
        const DRAGGING = 2;
    }
}

/// Which items to show
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Filter {
    All,
    Completed,
    PriorityRed,
}

impl Filter {
    /// Parse a filter name. Unknown names show every item
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim() {
            "completed" => Filter::Completed,
            "priority-red" => Filter::PriorityRed,
            "all" => Filter::All,
            other => {
                log::debug!("Unknown filter {:?}, showing every item", other);
                Filter::All
            }
        }
    }

    pub fn accepts(&self, item: &ListItem) -> bool {
        match self {
            Filter::All => true,
            Filter::Completed => item.is_completed(),
            Filter::PriorityRed => item.priority() == Priority::Red,
        }
    }
}

impl Default for Filter {
    fn default() -> Self {
        Filter::All
    }
}


/// The on-screen representation of a task
#[derive(Clone, Debug, PartialEq)]
pub struct ListItem {
    task_id: TaskId,
    label: String,
    priority: Priority,
    category: String,
    markers: ItemMarkers,
    visible: bool,
}

impl ListItem {
    /// Create the item displaying `task`, e.g. `Standup (09:00 - 09:15)`
    pub fn new(task: &Task, clock_format: ClockFormat) -> Self {
        let label = format!("{} ({} - {})",
            task.name(),
            clock_format.format(task.start()),
            clock_format.format(task.end()),
        );
        let mut markers = ItemMarkers::empty();
        markers.set(ItemMarkers::COMPLETED, task.completed());

        Self {
            task_id: *task.id(),
            label,
            priority: task.priority(),
            category: task.category().to_string(),
            markers,
            visible: true,
        }
    }

    pub fn task_id(&self) -> &TaskId       { &self.task_id  }
    pub fn label(&self) -> &str            { &self.label    }
    pub fn priority(&self) -> Priority     { self.priority  }
    pub fn category(&self) -> &str         { &self.category }
    pub fn markers(&self) -> ItemMarkers   { self.markers   }
    pub fn is_visible(&self) -> bool       { self.visible   }
    pub fn is_completed(&self) -> bool { self.markers.contains(ItemMarkers::COMPLETED) }
    pub fn is_dragging(&self) -> bool  { self.markers.contains(ItemMarkers::DRAGGING)  }

    pub fn set_completed(&mut self, completed: bool) {
        self.markers.set(ItemMarkers::COMPLETED, completed);
    }

    pub fn set_dragging(&mut self, dragging: bool) {
        self.markers.set(ItemMarkers::DRAGGING, dragging);
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Every CSS class of this item, e.g. `["priority-red", "work", "completed"]`
    pub fn classes(&self) -> Vec<String> {
        let mut classes = vec![self.priority.css_class()];
        if self.category.is_empty() == false {
            classes.push(self.category.clone());
        }
        if self.is_completed() {
            classes.push("completed".to_string());
        }
        if self.is_dragging() {
            classes.push("dragging".to_string());
        }
        classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes().iter().any(|c| c == class)
    }

    /// The CSS `display` value of this item
    pub fn display(&self) -> &'static str {
        if self.visible { "flex" } else { "none" }
    }
}


/// The items of the list, from top to bottom
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaskList {
    items: Vec<ListItem>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item at the bottom of the list
    pub fn push(&mut self, item: ListItem) {
        self.items.push(item);
    }

    /// Detach an item. Unknown ids are ignored
    pub fn remove(&mut self, id: &TaskId) -> Option<ListItem> {
        let position = self.position(id)?;
        Some(self.items.remove(position))
    }

    pub fn get(&self, id: &TaskId) -> Option<&ListItem> {
        self.items.iter().find(|item| item.task_id() == id)
    }

    pub fn get_mut(&mut self, id: &TaskId) -> Option<&mut ListItem> {
        self.items.iter_mut().find(|item| item.task_id() == id)
    }

    pub fn position(&self, id: &TaskId) -> Option<usize> {
        self.items.iter().position(|item| item.task_id() == id)
    }

    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    /// The task ids, from top to bottom
    pub fn order(&self) -> Vec<TaskId> {
        self.items.iter().map(|item| *item.task_id()).collect()
    }

    /// The items currently displayed, from top to bottom
    pub fn visible_items(&self) -> impl Iterator<Item = &ListItem> {
        self.items.iter().filter(|item| item.is_visible())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_completed()).count()
    }

    /// Flip the completion class of an item, and return its new state
    pub fn toggle_completed(&mut self, id: &TaskId) -> Option<bool> {
        let item = self.get_mut(id)?;
        let completed = !item.is_completed();
        item.set_completed(completed);
        Some(completed)
    }

    /// Order items by priority (red, then yellow, then green).
    ///
    /// The sort is stable: items of the same priority keep their relative order.
    pub fn sort_by_priority(&mut self) {
        self.items.sort_by_key(|item| item.priority().rank());
        log::debug!("Sorted {} items by priority", self.items.len());
    }

    /// Show the items accepted by `filter`, and hide the other ones.
    ///
    /// Every item is made visible again before the filter is applied. Filtering never reorders items.
    pub fn apply_filter(&mut self, filter: Filter) {
        for item in self.items.iter_mut() {
            item.set_visible(true);
            if filter.accepts(item) == false {
                item.set_visible(false);
            }
        }
        log::debug!("Applied filter {:?}: {} items visible out of {}", filter, self.visible_items().count(), self.items.len());
    }

    /// Move an item right before `anchor`, or at the bottom of the list if `anchor` is `None`.
    ///
    /// The item is moved, not copied. Returns false (and leaves the list untouched) if `id` is unknown.
    pub fn move_before(&mut self, id: &TaskId, anchor: Option<&TaskId>) -> bool {
        if Some(id) == anchor {
            return self.position(id).is_some();
        }
        let item = match self.remove(id) {
            None => return false,
            Some(item) => item,
        };
        let target = anchor
            .and_then(|anchor| self.position(anchor))
            .unwrap_or(self.items.len());
        self.items.insert(target, item);
        true
    }

    /// The completion percentage, between 0 and 100 (0 for an empty list)
    pub fn progress(&self) -> f64 {
        let total = self.items.len();
        if total == 0 {
            return 0.0;
        }
        self.completed_count() as f64 / total as f64 * 100.0
    }
}
