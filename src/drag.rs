//! Drag-and-drop reordering of the task list
//!
//! The dragged item is moved while the pointer moves, so the list always previews the drop position.
//! Releasing the pointer only ends the gesture.

use crate::list::{ListItem, TaskList};
use crate::task::TaskId;
use crate::traits::Layout;

/// The vertical extent of an item, in the same coordinates as the pointer
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub top: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Signed distance from the pointer to the vertical middle of this box.
    /// This is negative while the pointer is above the middle.
    pub fn offset(&self, pointer_y: f64) -> f64 {
        pointer_y - self.top - self.height / 2.0
    }
}

/// A layout where every visible item is a row of the same height
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UniformRows {
    /// Top of the first row
    pub origin: f64,
    pub row_height: f64,
}

impl UniformRows {
    pub fn new(origin: f64, row_height: f64) -> Self {
        Self { origin, row_height }
    }
}

impl Layout for UniformRows {
    fn bounding_box(&self, row: usize, _item: &ListItem) -> BoundingBox {
        BoundingBox::new(self.origin + row as f64 * self.row_height, self.row_height)
    }
}


/// Where the dragged item should be inserted
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InsertionPoint {
    /// Right before this item
    Before(TaskId),
    /// Below every other item
    End,
}

/// Find the first item the pointer has not passed yet, ignoring the dragged one.
///
/// Among the visible items whose middle is below the pointer, this picks the closest one.
/// When the pointer is below every middle, this is [`InsertionPoint::End`].
pub fn insertion_point<L: Layout + ?Sized>(list: &TaskList, layout: &L, pointer_y: f64) -> InsertionPoint {
    let mut closest_offset = f64::NEG_INFINITY;
    let mut closest = InsertionPoint::End;

    // Rows count the dragged item too, since it is still displayed
    for (row, item) in list.visible_items().enumerate() {
        if item.is_dragging() {
            continue;
        }
        let offset = layout.bounding_box(row, item).offset(pointer_y);
        log::trace!("Item {} at row {}: offset {}", item.task_id(), row, offset);
        if offset < 0.0 && offset > closest_offset {
            closest_offset = offset;
            closest = InsertionPoint::Before(*item.task_id());
        }
    }
    closest
}


/// The state of a drag gesture
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragState {
    Idle,
    Dragging(TaskId),
}

impl Default for DragState {
    fn default() -> Self {
        DragState::Idle
    }
}

/// Tracks the (single) item being dragged, and moves it within a list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DragEngine {
    state: DragState,
}

impl DragEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn dragged(&self) -> Option<&TaskId> {
        match &self.state {
            DragState::Idle => None,
            DragState::Dragging(id) => Some(id),
        }
    }

    /// Start dragging an item, and mark it as such.
    ///
    /// Only one item can be dragged at a time: an item that was still marked is released first.
    /// Returns false if the item is not in the list.
    pub fn start(&mut self, list: &mut TaskList, id: &TaskId) -> bool {
        if let DragState::Dragging(previous) = self.state {
            log::warn!("Starting to drag {} while {} was still being dragged", id, previous);
            if let Some(item) = list.get_mut(&previous) {
                item.set_dragging(false);
            }
            self.state = DragState::Idle;
        }

        match list.get_mut(id) {
            None => {
                log::debug!("Cannot drag unknown item {}", id);
                false
            },
            Some(item) => {
                item.set_dragging(true);
                self.state = DragState::Dragging(*id);
                true
            }
        }
    }

    /// The pointer moved over the list: move the dragged item to the insertion point.
    ///
    /// Returns the insertion point that has been used, or `None` when nothing is being dragged.
    pub fn over<L: Layout + ?Sized>(&mut self, list: &mut TaskList, layout: &L, pointer_y: f64) -> Option<InsertionPoint> {
        let dragged = *self.dragged()?;
        let point = insertion_point(list, layout, pointer_y);
        let anchor = match &point {
            InsertionPoint::Before(id) => Some(id),
            InsertionPoint::End => None,
        };
        if list.move_before(&dragged, anchor) == false {
            log::debug!("Dragged item {} is not in the list anymore", dragged);
            self.state = DragState::Idle;
            return None;
        }
        log::debug!("Moved {} to {:?}", dragged, point);
        Some(point)
    }

    /// End the gesture. The item stays where the last move put it
    pub fn end(&mut self, list: &mut TaskList) {
        if let DragState::Dragging(id) = self.state {
            if let Some(item) = list.get_mut(&id) {
                item.set_dragging(false);
            }
        }
        self.state = DragState::Idle;
    }

    /// Forget about an item that is removed from the list
    pub fn forget(&mut self, id: &TaskId) {
        if self.dragged() == Some(id) {
            self.state = DragState::Idle;
        }
    }
}
